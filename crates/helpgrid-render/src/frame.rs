//! Nesting context for rendered lines.
//!
//! A [`Frame`] carries the prefix, suffix and width that apply to every line
//! rendered inside it. Nested contexts (indentation, card bodies) are derived
//! frames rather than views into a shared buffer: every render call returns
//! its own `Vec<String>`, and the caller decides where those lines go.
//!
//! ```rust
//! use helpgrid_render::Frame;
//!
//! let frame = Frame::new(30);
//! let lines = frame
//!     .card("Options", |body| {
//!         body.render_rows(vec![vec![
//!             "  ".into(),
//!             "-v".into(),
//!             "Verbose output".into(),
//!         ]])
//!     })
//!     .unwrap();
//!
//! assert_eq!(lines[0], "╭─ Options ──────────────────╮");
//! assert_eq!(lines[1], "│    -v Verbose output       │");
//! assert_eq!(lines[2], "╰────────────────────────────╯");
//! ```

use tracing::warn;

use crate::error::Result;
use crate::tabular::{align, visible_width, LineWrapper, Row};

/// Prefix, suffix and width shared by all lines rendered in one context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    prefix: String,
    suffix: String,
    width: usize,
}

impl Frame {
    /// Creates a top-level frame with no decoration.
    pub fn new(width: usize) -> Self {
        Frame {
            prefix: String::new(),
            suffix: String::new(),
            width,
        }
    }

    /// Width available to content, excluding prefix and suffix.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Text written before every line.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Text written after every line.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Derives a frame indented by two columns.
    pub fn indent(&self) -> Frame {
        Frame {
            prefix: format!("{}  ", self.prefix),
            suffix: self.suffix.clone(),
            width: self.width.saturating_sub(2),
        }
    }

    /// Derives the frame for the body of a card: `│ ` on the left, ` │` on
    /// the right.
    pub fn card_section(&self) -> Frame {
        Frame {
            prefix: format!("│ {}", self.prefix),
            suffix: format!("{} │", self.suffix),
            width: self.width.saturating_sub(4),
        }
    }

    /// Decorates content with this frame's prefix and suffix.
    pub fn line(&self, content: &str) -> String {
        format!("{}{}{}", self.prefix, content, self.suffix)
    }

    /// An empty line; padded to the full width inside bordered frames.
    pub fn blank(&self) -> String {
        if self.suffix.is_empty() {
            self.line("")
        } else {
            self.line(&" ".repeat(self.width))
        }
    }

    /// A row wrapper for this frame's width.
    pub fn wrapper(&self) -> LineWrapper {
        LineWrapper::new(self.width)
    }

    /// Aligns a batch of rows, wraps each one, and decorates every line.
    ///
    /// # Errors
    ///
    /// Any [`LayoutError`](crate::LayoutError) from alignment or wrapping;
    /// nothing is emitted for a batch that fails.
    pub fn render_rows(&self, rows: Vec<Row>) -> Result<Vec<String>> {
        let rows = align(rows)?;
        self.render_aligned(&rows)
    }

    /// Wraps and decorates rows that are already aligned.
    pub fn render_aligned(&self, rows: &[Row]) -> Result<Vec<String>> {
        let wrapper = self.wrapper();
        let mut lines = Vec::new();
        for row in rows {
            for line in wrapper.wrap(row)? {
                lines.push(self.line(&line));
            }
        }
        Ok(lines)
    }

    /// Like [`render_rows`](Frame::render_rows), but a row that cannot be laid
    /// out at this width is replaced by its unformatted content.
    ///
    /// # Errors
    ///
    /// [`LayoutError::RaggedBatch`](crate::LayoutError::RaggedBatch) still
    /// fails the whole batch.
    pub fn render_rows_or_plain(&self, rows: Vec<Row>) -> Result<Vec<String>> {
        let rows = align(rows)?;
        Ok(self.render_aligned_or_plain(&rows))
    }

    /// Like [`render_aligned`](Frame::render_aligned), degrading rows that
    /// cannot be laid out instead of failing.
    pub fn render_aligned_or_plain(&self, rows: &[Row]) -> Vec<String> {
        let wrapper = self.wrapper();
        let mut lines = Vec::new();
        for row in rows {
            match wrapper.wrap(row) {
                Ok(wrapped) => lines.extend(wrapped.iter().map(|line| self.line(line))),
                Err(err) => {
                    warn!(error = %err, width = self.width, "falling back to unformatted row");
                    lines.push(self.line(&row.join(" ")));
                }
            }
        }
        lines
    }

    /// Word-wraps a paragraph to this frame's width.
    ///
    /// Lines are padded to the full width only inside bordered frames.
    pub fn wrap_text(&self, text: &str) -> Result<Vec<String>> {
        let wrapped = self
            .wrapper()
            .fill(!self.suffix.is_empty())
            .wrap_paragraph(text)?;
        Ok(wrapped.iter().map(|line| self.line(line)).collect())
    }

    /// The top border of a card: `╭─ title ─…─╮`, spanning the frame width.
    pub fn card_header(&self, title: &str) -> String {
        let padding = self.width.saturating_sub(visible_width(title) + 7);
        self.line(&format!("╭─ {} ─{}─╮", title, "─".repeat(padding)))
    }

    /// The bottom border of a card: `╰─…─╯`, spanning the frame width.
    pub fn card_footer(&self) -> String {
        self.line(&format!("╰{}╯", "─".repeat(self.width.saturating_sub(2))))
    }

    /// Renders a titled card: header, the body rendered into
    /// [`card_section`](Frame::card_section), and footer.
    pub fn card<F>(&self, title: &str, body: F) -> Result<Vec<String>>
    where
        F: FnOnce(&Frame) -> Result<Vec<String>>,
    {
        let mut lines = vec![self.card_header(title)];
        lines.extend(body(&self.card_section())?);
        lines.push(self.card_footer());
        Ok(lines)
    }
}
