use clap::{ArgAction, Parser, Subcommand};
use solitaire::cli::{
    process_message, read_message, show_keystream, CipherOptions, KeystreamOptions,
};
use solitaire::Mode;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Version info from build.rs
const VERSION: &str = env!("SOLITAIRE_VERSION");
const PROFILE: &str = env!("SOLITAIRE_PROFILE");
const GIT_HASH: &str = env!("SOLITAIRE_GIT_HASH");

#[derive(Parser)]
#[command(name = "solitaire")]
#[command(author, about = "Solitaire card-deck keystream cipher", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a message (letters only; spaces are ignored)
    #[command(alias = "e")]
    Encrypt {
        /// Passphrase used to key the deck
        passphrase: String,

        /// Message text (default: --input or stdin)
        message: Option<String>,

        /// Read the message from a file
        #[arg(long, conflicts_with = "message")]
        input: Option<PathBuf>,

        /// Decrypt instead of encrypt
        #[arg(short = 'd')]
        decrypt: bool,
    },

    /// Decrypt a message
    #[command(alias = "d")]
    Decrypt {
        /// Passphrase used to key the deck
        passphrase: String,

        /// Ciphertext (default: --input or stdin)
        message: Option<String>,

        /// Read the ciphertext from a file
        #[arg(long, conflicts_with = "message")]
        input: Option<PathBuf>,
    },

    /// Print raw keystream values for a passphrase
    #[command(alias = "k")]
    Keystream {
        /// Passphrase used to key the deck
        passphrase: String,

        /// Number of values to print
        #[arg(long, short = 'n', default_value_t = 10)]
        count: usize,

        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_cipher(
    passphrase: String,
    message: Option<String>,
    input: Option<PathBuf>,
    mode: Mode,
) -> anyhow::Result<()> {
    let message = read_message(message.as_deref(), input.as_deref())?;
    let options = CipherOptions { passphrase, mode };
    println!("{}", process_message(&message, &options)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("solitaire {} {} ({})", PROFILE, VERSION, GIT_HASH);
        return ExitCode::SUCCESS;
    }

    init_logging(cli.verbose);

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            if Cli::command().print_help().is_err() {
                return ExitCode::FAILURE;
            }
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Encrypt {
            passphrase,
            message,
            input,
            decrypt,
        } => {
            let mode = if decrypt { Mode::Decrypt } else { Mode::Encrypt };
            run_cipher(passphrase, message, input, mode)
        }

        Commands::Decrypt {
            passphrase,
            message,
            input,
        } => run_cipher(passphrase, message, input, Mode::Decrypt),

        Commands::Keystream {
            passphrase,
            count,
            json,
        } => {
            let options = KeystreamOptions {
                passphrase,
                count,
                json,
            };
            show_keystream(&options).map(|out| println!("{}", out))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
