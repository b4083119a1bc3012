#[cfg(feature = "svg-io")]
pub mod svg;

#[cfg(feature = "stl-io")]
pub mod stl;

/// Generic I/O and format-conversion errors.
///
/// Backends sit behind cargo feature-flags; when a feature is disabled the
/// corresponding functions are not compiled in.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),

    #[error("Nothing to export: {0}")]
    Empty(String),
}
