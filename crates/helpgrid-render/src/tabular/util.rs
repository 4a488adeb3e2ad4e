//! Escape-aware text measurement, padding, and truncation.
//!
//! Only SGR sequences (`ESC [ <digits and ;> m`) are recognised as styling.
//! They are kept intact in output but never count toward width. Every other
//! character counts as exactly one column.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{LayoutError, Result};

/// Marker appended to tokens shortened to fit a line.
pub const ELLIPSIS: &str = "...";

static SGR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("SGR pattern is a valid regex"));

/// Removes all style escape sequences, leaving only renderable characters.
///
/// # Example
///
/// ```rust
/// use helpgrid_render::tabular::strip_styling;
///
/// assert_eq!(strip_styling("\x1b[31mred\x1b[0m"), "red");
/// assert_eq!(strip_styling("plain"), "plain");
/// ```
pub fn strip_styling(s: &str) -> String {
    SGR_PATTERN.replace_all(s, "").into_owned()
}

/// Returns the number of columns `s` occupies once rendered.
///
/// Always equal to `strip_styling(s).chars().count()`.
///
/// # Example
///
/// ```rust
/// use helpgrid_render::tabular::visible_width;
///
/// assert_eq!(visible_width("hello"), 5);
/// assert_eq!(visible_width("\x1b[1;32mbold green\x1b[0m"), 10);
/// ```
pub fn visible_width(s: &str) -> usize {
    if !s.contains('\x1b') {
        return s.chars().count();
    }
    SGR_PATTERN.replace_all(s, "").chars().count()
}

/// Returns true if `s` contains at least one style escape sequence.
pub fn has_styling(s: &str) -> bool {
    s.contains('\x1b') && SGR_PATTERN.is_match(s)
}

/// Pads a string on the right with spaces until it is `width` columns wide.
///
/// Strings already at or beyond `width` are returned unchanged.
///
/// ```rust
/// use helpgrid_render::tabular::pad_to_width;
///
/// assert_eq!(pad_to_width("42", 5), "42   ");
/// assert_eq!(pad_to_width("hello", 3), "hello");
/// ```
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = visible_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut padded = String::with_capacity(s.len() + width - current);
    padded.push_str(s);
    padded.push_str(&" ".repeat(width - current));
    padded
}

/// Shortens an atomic token to `width` columns, ending it with `suffix`.
///
/// Tokens that already fit are returned unchanged. A truncated result is
/// exactly `width` columns wide.
///
/// # Errors
///
/// - [`LayoutError::TooNarrow`] if `width` cannot hold `suffix`.
/// - [`LayoutError::UnsupportedStyledTruncation`] if the token needs
///   shortening but carries style escape sequences.
///
/// # Example
///
/// ```rust
/// use helpgrid_render::tabular::truncate;
///
/// assert_eq!(truncate("administration", 10, "...").unwrap(), "adminis...");
/// assert_eq!(truncate("admin", 10, "...").unwrap(), "admin");
/// ```
pub fn truncate(token: &str, width: usize, suffix: &str) -> Result<String> {
    let suffix_width = visible_width(suffix);
    if width < suffix_width {
        return Err(LayoutError::TooNarrow {
            width,
            suffix_width,
        });
    }
    if visible_width(token) <= width {
        return Ok(token.to_string());
    }
    if has_styling(token) {
        return Err(LayoutError::UnsupportedStyledTruncation {
            token: strip_styling(token),
        });
    }

    let mut result: String = token.chars().take(width - suffix_width).collect();
    result.push_str(suffix);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- visible_width tests ---

    #[test]
    fn visible_width_ascii() {
        assert_eq!(visible_width("hello"), 5);
        assert_eq!(visible_width(""), 0);
        assert_eq!(visible_width(" "), 1);
    }

    #[test]
    fn visible_width_sgr() {
        assert_eq!(visible_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(visible_width("\x1b[38;5;196mcolor\x1b[0m"), 5);
        assert_eq!(visible_width("\x1b[mreset"), 5);
    }

    #[test]
    fn visible_width_counts_characters_not_bytes() {
        assert_eq!(visible_width("café"), 4);
        assert_eq!(visible_width("╭─╮"), 3);
    }

    #[test]
    fn visible_width_counts_non_sgr_escape() {
        // Only SGR is zero-width; a cursor move is counted like any other text
        assert_eq!(visible_width("\x1b[2Ka"), 5);
        assert_eq!(visible_width("\x1b[2Ka"), strip_styling("\x1b[2Ka").chars().count());
    }

    // --- strip_styling tests ---

    #[test]
    fn strip_styling_removes_every_sequence() {
        assert_eq!(
            strip_styling("\x1b[1m\x1b[33mPATH\x1b[0m and \x1b[35mmore\x1b[0m"),
            "PATH and more"
        );
    }

    #[test]
    fn has_styling_detects_sgr() {
        assert!(has_styling("\x1b[31mx\x1b[0m"));
        assert!(!has_styling("plain"));
        assert!(!has_styling("\x1b[2K"));
    }

    // --- pad_to_width tests ---

    #[test]
    fn pad_to_width_styled() {
        let styled = "\x1b[31mhi\x1b[0m";
        let padded = pad_to_width(styled, 5);
        assert!(padded.starts_with(styled));
        assert_eq!(visible_width(&padded), 5);
    }

    #[test]
    fn pad_to_width_empty() {
        assert_eq!(pad_to_width("", 3), "   ");
        assert_eq!(pad_to_width("", 0), "");
    }

    // --- truncate tests ---

    #[test]
    fn truncate_basic() {
        let result = truncate("administration", 10, "...").unwrap();
        assert_eq!(result, "adminis...");
        assert_eq!(visible_width(&result), 10);
    }

    #[test]
    fn truncate_exact_fit_is_unchanged() {
        assert_eq!(truncate("12345", 5, "...").unwrap(), "12345");
    }

    #[test]
    fn truncate_to_suffix_only() {
        assert_eq!(truncate("hello", 3, "...").unwrap(), "...");
    }

    #[test]
    fn truncate_too_narrow() {
        assert_eq!(
            truncate("hello", 2, "..."),
            Err(LayoutError::TooNarrow {
                width: 2,
                suffix_width: 3
            })
        );
    }

    #[test]
    fn truncate_styled_token_fails() {
        let err = truncate("\x1b[33madministration\x1b[0m", 10, "...").unwrap_err();
        assert_eq!(
            err,
            LayoutError::UnsupportedStyledTruncation {
                token: "administration".into()
            }
        );
    }

    #[test]
    fn truncate_styled_token_that_fits_is_unchanged() {
        let styled = "\x1b[33mPATH\x1b[0m";
        assert_eq!(truncate(styled, 10, "...").unwrap(), styled);
    }
}
