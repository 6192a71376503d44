use std::io::ErrorKind;
use std::path::Path;

use crate::error::{RenderError, Result};
use crate::ir::Network;

pub fn parse_network(input: &str) -> Result<Network> {
    Ok(serde_json::from_str(input)?)
}

/// Reads the network description from disk. An absent file is its own error
/// kind so the caller can report it as a plain diagnostic instead of a
/// surfaced failure.
pub fn load_network(path: &Path) -> Result<Network> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(RenderError::MissingInput(path.to_path_buf()));
        }
        Err(err) => {
            return Err(anyhow::Error::new(err)
                .context(format!("failed to read {}", path.display()))
                .into());
        }
    };
    parse_network(&contents)
}
