//! # Helpgrid Render - Column Layout for Styled Help Text
//!
//! `helpgrid-render` lays out tabular, styled text (flag names, type hints,
//! descriptions) into fixed-width terminal lines. It aligns columns across a
//! batch of rows, wraps rows that overflow without splitting ANSI style
//! sequences, and truncates single words that cannot fit.
//!
//! This crate is the layout engine behind the `helpgrid` clap help renderer,
//! but performs no I/O and knows nothing about clap.
//!
//! ## Core Concepts
//!
//! - [`Row`]: an ordered list of cells; every row in a batch has the same length
//! - [`align`]: pad interior columns to their widest cell
//! - [`LineWrapper`]: split a row into lines no wider than the target width
//! - [`Frame`]: prefix/suffix/width context for nested output such as cards
//! - [`HelpStyles`]: one `console::Style` per semantic category
//!
//! ## Quick Start
//!
//! ```rust
//! use helpgrid_render::{visible_width, Frame, HelpStyles};
//!
//! let styles = HelpStyles::default().force_styling(true);
//! let rows = vec![
//!     vec![styles.required("* "), "--output".into(), styles.type_hint("PATH"),
//!          "Write the generated report to this file instead of standard output".into()],
//!     vec!["  ".into(), "-v, --verbose".into(), "".into(), "Set verbosity".into()],
//! ];
//!
//! let lines = Frame::new(40).render_rows(rows).unwrap();
//! assert!(lines.len() > 2);
//! assert!(lines.iter().all(|line| visible_width(line) == 40));
//! ```
//!
//! ## Errors
//!
//! Layout failures are reported as [`LayoutError`]:
//!
//! - `TerminalTooSmall`: no split of the row fits the width
//! - `UnsupportedStyledTruncation`: a styled word would have to be truncated
//! - `TooNarrow`: a truncation width smaller than its suffix
//! - `RaggedBatch`: rows of different lengths in one batch

mod error;
pub mod frame;
pub mod style;
pub mod tabular;

pub use error::{LayoutError, Result};
pub use frame::Frame;
pub use style::{Category, HelpStyles, StyleError};
pub use tabular::{
    align, column_widths, has_styling, pad_to_width, strip_styling, truncate, visible_width, wrap,
    Cell, LineWrapper, Row, ELLIPSIS,
};
