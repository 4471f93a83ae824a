pub mod cipher;
pub mod input;
pub mod keystream;

pub use cipher::*;
pub use input::*;
pub use keystream::*;
