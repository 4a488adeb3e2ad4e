//! Column alignment across a batch of rows.
//!
//! The first column is a fixed-width marker and the last column is the only
//! one allowed to overflow, so neither is padded. Every interior column is
//! padded to the widest cell in that column.

use super::util::{pad_to_width, visible_width};
use super::Row;
use crate::error::{LayoutError, Result};

/// Computes the maximum visible width of every column in the batch.
///
/// Returns an empty vector for an empty batch.
///
/// # Errors
///
/// [`LayoutError::RaggedBatch`] if any row's cell count differs from the first row's.
pub fn column_widths(rows: &[Row]) -> Result<Vec<usize>> {
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };
    let expected = first.len();
    let mut widths = vec![0; expected];

    for (index, row) in rows.iter().enumerate() {
        if row.len() != expected {
            return Err(LayoutError::RaggedBatch {
                row: index,
                expected,
                found: row.len(),
            });
        }
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(visible_width(cell));
        }
    }

    Ok(widths)
}

/// Pads every interior cell to its column's maximum visible width.
///
/// Row order is preserved and the first and last cells of each row are
/// returned untouched.
///
/// # Example
///
/// ```rust
/// use helpgrid_render::tabular::align;
///
/// let rows = vec![
///     vec!["  ".to_string(), "-v".to_string(), "BOOL".to_string(), "Verbose".to_string()],
///     vec!["* ".to_string(), "--output".to_string(), "PATH".to_string(), "Target".to_string()],
/// ];
/// let aligned = align(rows).unwrap();
/// assert_eq!(aligned[0][1], "-v      ");
/// assert_eq!(aligned[0][3], "Verbose");
/// ```
pub fn align(mut rows: Vec<Row>) -> Result<Vec<Row>> {
    let widths = column_widths(&rows)?;
    if widths.len() < 3 {
        return Ok(rows);
    }
    let interior = 1..widths.len() - 1;

    for row in &mut rows {
        for (cell, &width) in row[interior.clone()]
            .iter_mut()
            .zip(&widths[interior.clone()])
        {
            if visible_width(cell) < width {
                *cell = pad_to_width(cell, width);
            }
        }
    }

    Ok(rows)
}
