use std::io;
use thiserror::Error;

/// Errors at the edges of the crate: reading menus and configuration.
///
/// Rendering itself never fails; only writing its output to a sink
/// can, and that is reported as a plain [`io::Error`].
#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Invalid menu json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),
}
