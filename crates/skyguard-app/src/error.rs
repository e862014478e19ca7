//! Host-level errors. The simulation itself never fails.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("failed to spawn game loop thread: {0}")]
    ThreadSpawn(#[source] io::Error),
    #[error("game loop thread panicked")]
    GameLoopPanicked,
}
