//! Line wrapping for aligned rows.
//!
//! A row that fits is emitted as a single line. A row that does not fit is
//! split into a head (the leading cells that fit) and a tail (everything
//! after the cut). Tail words are packed onto the head line first, then onto
//! continuation lines indented by the head's visible width, so the tail reads
//! as one column:
//!
//! ```text
//! *  --output PATH Write the
//!                  generated report
//!                  to this file
//! ```
//!
//! Style escape sequences never contain whitespace, so splitting the tail on
//! whitespace keeps every sequence whole.

use std::borrow::Cow;

use tracing::debug;

use super::util::{has_styling, pad_to_width, strip_styling, truncate, visible_width, ELLIPSIS};
use crate::error::{LayoutError, Result};

/// Splits rows into physical lines no wider than a maximum width.
///
/// # Example
///
/// ```rust
/// use helpgrid_render::tabular::{visible_width, LineWrapper};
///
/// let wrapper = LineWrapper::new(30);
/// let row = ["* ", "--output", "PATH", "Write the generated report to this file"]
///     .map(String::from);
/// let lines = wrapper.wrap(&row).unwrap();
///
/// assert_eq!(lines[0].trim_end(), "*  --output PATH Write the");
/// assert!(lines.iter().all(|line| visible_width(line) == 30));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineWrapper {
    max_width: usize,
    fill: bool,
    ellipsis: String,
}

impl LineWrapper {
    /// Creates a wrapper that pads every line to exactly `max_width` columns.
    pub fn new(max_width: usize) -> Self {
        LineWrapper {
            max_width,
            fill: true,
            ellipsis: ELLIPSIS.to_string(),
        }
    }

    /// Sets whether lines are right-padded to the full width.
    ///
    /// Padding keeps bordered boxes uniform; disable it for free-standing text.
    pub fn fill(mut self, fill: bool) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the marker appended to tokens shortened to fit.
    pub fn ellipsis(mut self, ellipsis: impl Into<String>) -> Self {
        self.ellipsis = ellipsis.into();
        self
    }

    /// Returns the maximum line width.
    pub fn max_width(&self) -> usize {
        self.max_width
    }

    /// Wraps one aligned row into physical lines.
    ///
    /// An empty row yields no lines.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::TerminalTooSmall`] if no head split fits, or if a tail
    ///   token must be shortened but a continuation line has no room for the
    ///   ellipsis.
    /// - [`LayoutError::UnsupportedStyledTruncation`] if a styled tail token
    ///   is too wide for a continuation line.
    pub fn wrap(&self, row: &[String]) -> Result<Vec<String>> {
        if row.is_empty() {
            return Ok(Vec::new());
        }

        let line = row.join(" ");
        if visible_width(&line) <= self.max_width {
            return Ok(vec![self.finish(line)]);
        }

        let (cut, head) = self.split_head(row)?;
        let indent = visible_width(&head);
        debug!(
            max_width = self.max_width,
            head_cells = cut,
            indent,
            "row overflows, wrapping tail"
        );

        let tokens = row[cut..].iter().flat_map(|cell| cell.split_whitespace());
        let lines = self.pack(head, indent, tokens)?;
        Ok(lines.into_iter().map(|line| self.finish(line)).collect())
    }

    /// Word-wraps free text with no head, starting at column zero.
    ///
    /// Text without any words yields no lines.
    ///
    /// # Errors
    ///
    /// [`LayoutError::TerminalTooSmall`] if the width cannot hold a shortened word.
    pub fn wrap_paragraph(&self, text: &str) -> Result<Vec<String>> {
        if text.split_whitespace().next().is_none() {
            return Ok(Vec::new());
        }
        if self.max_width <= visible_width(&self.ellipsis) {
            return Err(LayoutError::TerminalTooSmall {
                width: self.max_width,
            });
        }
        let lines = self.pack(String::new(), 0, text.split_whitespace())?;
        Ok(lines.into_iter().map(|line| self.finish(line)).collect())
    }

    /// Finds the widest prefix of cells, excluding the last cell, that is
    /// narrower than the width.
    fn split_head(&self, row: &[String]) -> Result<(usize, String)> {
        for cut in (1..row.len()).rev() {
            let head = row[..cut].join(" ");
            if visible_width(&head) < self.max_width {
                return Ok((cut, head));
            }
        }
        Err(LayoutError::TerminalTooSmall {
            width: self.max_width,
        })
    }

    /// Columns available to a single token on a fresh continuation line.
    fn room_after(&self, indent: usize) -> usize {
        self.max_width.saturating_sub(indent + 1)
    }

    /// Greedily packs tokens onto the head line and then onto continuation
    /// lines of `indent` spaces.
    fn pack<'a>(
        &self,
        head: String,
        indent: usize,
        tokens: impl Iterator<Item = &'a str>,
    ) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        let mut current = head;
        let mut current_width = indent;

        for token in tokens {
            let mut token = Cow::Borrowed(token);
            let mut token_width = visible_width(&token);

            if current_width + token_width >= self.max_width {
                if current_width > indent {
                    lines.push(std::mem::replace(&mut current, " ".repeat(indent)));
                    current_width = indent;
                }
                if current_width + token_width >= self.max_width {
                    token = Cow::Owned(self.shorten(&token, indent)?);
                    token_width = visible_width(&token);
                }
            }

            if !current.is_empty() {
                current.push(' ');
                current_width += 1;
            }
            current.push_str(&token);
            current_width += token_width;
        }

        lines.push(current);
        Ok(lines)
    }

    /// Shortens a token that cannot fit even on a fresh continuation line.
    ///
    /// Fails with `TerminalTooSmall` when the line cannot hold the ellipsis.
    fn shorten(&self, token: &str, indent: usize) -> Result<String> {
        let room = self.room_after(indent);
        if room < visible_width(&self.ellipsis) {
            return Err(LayoutError::TerminalTooSmall {
                width: self.max_width,
            });
        }
        if has_styling(token) {
            return Err(LayoutError::UnsupportedStyledTruncation {
                token: strip_styling(token),
            });
        }
        debug!(token, room, "truncating oversized token");
        truncate(token, room, &self.ellipsis)
    }

    fn finish(&self, line: String) -> String {
        if self.fill {
            pad_to_width(&line, self.max_width)
        } else {
            line
        }
    }
}

/// Wraps one aligned row at `max_width` with default options.
///
/// Shorthand for `LineWrapper::new(max_width).wrap(row)`.
pub fn wrap(row: &[String], max_width: usize) -> Result<Vec<String>> {
    LineWrapper::new(max_width).wrap(row)
}
