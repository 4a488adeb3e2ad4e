//! Error types for layout operations.
//!
//! Every failure here is deterministic: the same rows at the same width fail
//! the same way, so callers either abort the render or degrade the offending
//! row (see [`Frame::render_rows_or_plain`](crate::Frame::render_rows_or_plain)).

use thiserror::Error;

/// Errors produced while measuring, aligning, truncating, or wrapping rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// No head/tail split leaves usable room at this width.
    #[error("terminal too small: no column split fits within {width} columns")]
    TerminalTooSmall { width: usize },

    /// A token that needs truncating carries style escape sequences.
    #[error("cannot truncate styled token '{token}'")]
    UnsupportedStyledTruncation { token: String },

    /// The truncation width cannot hold the suffix marker.
    #[error("truncation width {width} is narrower than the {suffix_width}-column suffix")]
    TooNarrow { width: usize, suffix_width: usize },

    /// A row in a batch has a different cell count than the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedBatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type for layout operations.
pub type Result<T> = std::result::Result<T, LayoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayoutError::TerminalTooSmall { width: 5 };
        assert!(err.to_string().contains("terminal too small"));
        assert!(err.to_string().contains('5'));
    }

    #[test]
    fn test_ragged_batch_display() {
        let err = LayoutError::RaggedBatch {
            row: 2,
            expected: 4,
            found: 3,
        };
        assert_eq!(err.to_string(), "row 2 has 3 cells, expected 4");
    }

    #[test]
    fn test_too_narrow_display() {
        let err = LayoutError::TooNarrow {
            width: 2,
            suffix_width: 3,
        };
        assert!(err.to_string().contains("narrower"));
    }
}
