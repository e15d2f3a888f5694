//! Physical grid produced by the layout pipeline.
//!
//! A [`TableLayout`] is the result of running the whole pipeline short of
//! drawing: the row-span index, the expanded grid, and the final column
//! widths, together with the border the table will be drawn with. Keeping
//! it as a value lets callers inspect or reuse a layout before drawing.
//!
//! # Example
//! ```
//! use boxtable::config::{ColumnConfig, TableConfig};
//! use boxtable::layout::TableLayout;
//! use boxtable::width::TerminalWidth;
//!
//! let rows = vec![vec!["id", "AABBCC"], vec!["1", "x"]];
//! let config = TableConfig::new().with_column(1, ColumnConfig::new().max_width(2));
//! let layout = TableLayout::build(&rows, &config, &TerminalWidth)?;
//!
//! assert_eq!(layout.spans, vec![3, 1]);
//! assert_eq!(layout.physical_row_count(), 4);
//! assert_eq!(layout.column_widths, vec![2, 2]);
//! # Ok::<(), boxtable::TableError>(())
//! ```

use crate::config::{BorderConfig, TableConfig, resolve};
use crate::error::Result;
use crate::width::WidthMeasurer;

use super::columns::column_widths;
use super::expand::expand_rows;
use super::span::row_spans;
use super::validate::validate_rows;

/// Rows of already wrapped, aligned and padded cell strings.
pub type PhysicalGrid = Vec<Vec<String>>;

/// Everything the drawer needs, computed fresh for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Physical line count of each logical row.
    pub spans: Vec<usize>,
    pub grid: PhysicalGrid,
    /// Rendered width of each column, padding included.
    pub column_widths: Vec<usize>,
    pub border: BorderConfig,
}

impl TableLayout {
    /// Run validation, normalisation, span calculation, expansion and
    /// width calculation over `rows`. Cells are converted with `ToString`.
    pub fn build<C, M>(rows: &[Vec<C>], config: &TableConfig, measurer: &M) -> Result<Self>
    where
        C: ToString,
        M: WidthMeasurer + ?Sized,
    {
        validate_rows(rows)?;

        let cells: Vec<Vec<String>> = rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();

        let resolved = resolve(&cells, config, measurer)?;
        let spans = row_spans(&cells, &resolved, measurer)?;
        let grid = expand_rows(&cells, &spans, &resolved, measurer)?;
        let column_widths = column_widths(&grid, measurer)?;

        Ok(Self {
            spans,
            grid,
            column_widths,
            border: resolved.border,
        })
    }

    pub fn logical_row_count(&self) -> usize {
        self.spans.len()
    }

    pub fn physical_row_count(&self) -> usize {
        self.grid.len()
    }

    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Physical row indices that close a logical row, excluding the last one.
    ///
    /// A separator is drawn after each of these.
    pub fn separator_positions(&self) -> Vec<usize> {
        let mut end = 0;
        let mut positions = Vec::with_capacity(self.spans.len().saturating_sub(1));
        for &span in self.spans.iter().take(self.spans.len().saturating_sub(1)) {
            end += span;
            positions.push(end - 1);
        }
        positions
    }
}
