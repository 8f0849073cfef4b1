use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::LoomError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Variations produced when no explicit count is requested.
    pub default_variations: usize,
    /// Whether import parsing emits a per-line log for invalid input.
    pub log_invalid_lines: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_variations: 5,
            log_invalid_lines: true,
        }
    }
}

impl Config {
    /// Loads a JSON config file. Unknown keys are ignored and missing keys
    /// fall back to defaults, so a partial file is fine.
    pub fn load(path: &Path) -> Result<Self, LoomError> {
        let raw = fs::read_to_string(path).map_err(|source| LoomError::ReadInput {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| LoomError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.default_variations, 5);
        assert!(config.log_invalid_lines);
    }

    #[test]
    fn partial_json_keeps_defaults_for_missing_keys() {
        let config: Config = serde_json::from_str(r#"{"default_variations": 10}"#).unwrap();
        assert_eq!(config.default_variations, 10);
        assert!(config.log_invalid_lines);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config: Config = serde_json::from_str(r#"{"future_knob": true}"#).unwrap();
        assert_eq!(config.default_variations, 5);
    }
}
