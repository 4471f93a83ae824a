use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Strip spaces and uppercase the rest. Anything else is left for the
/// cipher to reject.
pub fn normalize(input: &str) -> String {
    input.replace(' ', "").to_uppercase()
}

/// Resolve the message text: an inline argument wins, then `--input`,
/// then stdin. Line breaks from file or stdin input are dropped.
pub fn read_message(message: Option<&str>, input: Option<&Path>) -> Result<String> {
    let raw = match (message, input) {
        (Some(text), _) => return Ok(normalize(text)),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("failed to read input {}", path.display()))?,
        (None, None) => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .context("failed to read stdin")?;
            s
        }
    };
    Ok(normalize(&raw.replace(['\r', '\n'], "")))
}
