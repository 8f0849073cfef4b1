use std::path::PathBuf;

use thiserror::Error;

/// Contract-level failures of the processing core.
///
/// Malformed import lines are never errors; they surface as invalid counts
/// in the import summaries. These variants cover the genuinely fatal cases:
/// unreadable input files and an unparseable config.
#[derive(Debug, Error)]
pub enum LoomError {
    #[error("failed to read {path}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
