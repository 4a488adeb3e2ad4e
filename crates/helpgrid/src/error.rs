//! Errors raised while rendering a help page.

use helpgrid_render::{LayoutError, StyleError};
use thiserror::Error;

/// Error returned by [`render_help`](crate::render_help) and
/// [`write_help`](crate::write_help).
#[derive(Debug, Error)]
pub enum HelpError {
    /// A section could not be laid out at the resolved width.
    #[error("help layout failed: {0}")]
    Layout(#[from] LayoutError),

    /// Style configuration could not be loaded.
    #[error(transparent)]
    Style(#[from] StyleError),

    /// Writing the rendered page failed.
    #[error("failed to write help: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, HelpError>;
