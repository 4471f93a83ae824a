use crate::cli::input::normalize;
use crate::keystream::KeystreamReport;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct KeystreamOptions {
    pub passphrase: String,
    pub count: usize,
    /// Emit a JSON report instead of plain numbers
    pub json: bool,
}

impl Default for KeystreamOptions {
    fn default() -> Self {
        Self {
            passphrase: String::new(),
            count: 10,
            json: false,
        }
    }
}

/// Render the first `count` keystream values for the passphrase.
pub fn show_keystream(options: &KeystreamOptions) -> Result<String> {
    let passphrase = normalize(&options.passphrase);
    let report = KeystreamReport::generate(&passphrase, options.count)
        .context("failed to initialize deck")?;

    if options.json {
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(report.to_plain())
    }
}
