use crate::config::{ResolvedColumn, ResolvedConfig};
use crate::error::{Result, TableError};
use crate::width::WidthMeasurer;

use super::align::align;
use super::grid::PhysicalGrid;
use super::span::{UnitOverflow, wrap_cell};

/// Expand logical rows into the physical grid.
///
/// Logical row `i` becomes `spans[i]` physical rows. Each cell is wrapped,
/// padded with blank lines to the span, aligned to the column's minimum
/// width, then given its left/right padding.
pub fn expand_rows<M>(
    rows: &[Vec<String>],
    spans: &[usize],
    config: &ResolvedConfig,
    measurer: &M,
) -> Result<PhysicalGrid>
where
    M: WidthMeasurer + ?Sized,
{
    let mut grid = Vec::with_capacity(spans.iter().sum());

    for (row, (cells, &span)) in rows.iter().zip(spans).enumerate() {
        let mut columns = Vec::with_capacity(cells.len());
        for (column, (text, settings)) in config.zip_row(row, cells)?.enumerate() {
            let lines = cell_lines(text, span, settings, measurer).map_err(|err| match err {
                CellError::Overflow(overflow) => overflow.at(row, column),
                CellError::TooTall(lines) => TableError::SpanOverflow {
                    row,
                    column,
                    lines,
                    span,
                },
            })?;
            columns.push(lines);
        }

        for line in 0..span {
            grid.push(
                columns
                    .iter_mut()
                    .map(|lines| std::mem::take(&mut lines[line]))
                    .collect(),
            );
        }
    }

    Ok(grid)
}

enum CellError {
    Overflow(UnitOverflow),
    TooTall(usize),
}

fn cell_lines<M>(
    text: &str,
    span: usize,
    column: &ResolvedColumn,
    measurer: &M,
) -> std::result::Result<Vec<String>, CellError>
where
    M: WidthMeasurer + ?Sized,
{
    let mut lines = wrap_cell(text, column.max_width, measurer).map_err(CellError::Overflow)?;
    if lines.len() > span {
        return Err(CellError::TooTall(lines.len()));
    }
    lines.resize(span, String::new());

    let left = " ".repeat(column.padding_left);
    let right = " ".repeat(column.padding_right);

    Ok(lines
        .into_iter()
        .map(|line| {
            let body = if column.is_full(measurer.width(&line)) {
                line
            } else {
                align(&line, column.min_width, column.alignment, measurer)
            };
            format!("{left}{body}{right}")
        })
        .collect())
}
