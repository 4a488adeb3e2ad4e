//! Escape-aware column layout for fixed-width terminal output.
//!
//! This module turns batches of rows into printable lines. It measures text by
//! visible width (SGR escape sequences count as zero columns), aligns interior
//! columns across a batch, and wraps rows that overflow the available width.
//!
//! ## Pipeline
//!
//! | Step | Function | Purpose |
//! |------|----------|---------|
//! | 1 | [`align`] | Pad interior columns to their widest cell |
//! | 2 | [`LineWrapper::wrap`] | Split each row into lines of at most `max_width` |
//!
//! ## Column Roles
//!
//! - First column: a fixed-width marker such as `"* "` or `"  "`, never padded.
//! - Interior columns: padded to the widest cell in the batch.
//! - Last column: never padded, the only column that may wrap.
//!
//! ## Example
//!
//! ```rust
//! use helpgrid_render::tabular::{align, visible_width, LineWrapper};
//!
//! let rows = vec![
//!     vec!["  ".into(), "-v, --verbose".into(), "".into(), "Set verbosity".into()],
//!     vec!["* ".into(), "--output".into(), "PATH".into(), "Where the report is written".into()],
//! ];
//!
//! let wrapper = LineWrapper::new(40);
//! let mut lines = Vec::new();
//! for row in align(rows).unwrap() {
//!     lines.extend(wrapper.wrap(&row).unwrap());
//! }
//!
//! assert!(lines.iter().all(|line| visible_width(line) == 40));
//! ```
//!
//! ## Utility Functions
//!
//! ```rust
//! use helpgrid_render::tabular::{pad_to_width, strip_styling, truncate, visible_width};
//!
//! assert_eq!(visible_width("\x1b[33mPATH\x1b[0m"), 4);
//! assert_eq!(strip_styling("\x1b[33mPATH\x1b[0m"), "PATH");
//! assert_eq!(pad_to_width("ab", 4), "ab  ");
//! assert_eq!(truncate("administration", 10, "...").unwrap(), "adminis...");
//! ```

mod align;
mod util;
mod wrap;

/// One field of a row; may contain style escape sequences.
pub type Cell = String;

/// One logical record: an ordered, fixed-length list of cells.
pub type Row = Vec<Cell>;

pub use align::{align, column_widths};
pub use util::{has_styling, pad_to_width, strip_styling, truncate, visible_width, ELLIPSIS};
pub use wrap::{wrap, LineWrapper};
