pub mod models;

pub use models::*;

use crate::types::{MelaError, MelaResult};
use std::path::Path;

impl ConverterConfig {
    /// Load settings from a JSON file. A missing file yields the defaults.
    pub fn load(config_path: &Path) -> MelaResult<Self> {
        let content = match std::fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!(
                    "No converter config at {}, using defaults",
                    config_path.display()
                );
                return Ok(Self::default());
            }
            Err(e) => return Err(MelaError::io(config_path, e)),
        };

        serde_json::from_str(&content)
            .map_err(|e| MelaError::parse(config_path, format!("invalid converter config: {e}")))
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
