use crate::error::{Result, TableError};
use crate::width::WidthMeasurer;

/// Final width of each column, read off the first physical row.
///
/// Every other row is checked against it; a mismatch means the expansion
/// stage produced a ragged grid and is reported rather than truncated.
pub fn column_widths<M>(grid: &[Vec<String>], measurer: &M) -> Result<Vec<usize>>
where
    M: WidthMeasurer + ?Sized,
{
    let Some(first) = grid.first() else {
        return Ok(Vec::new());
    };
    let widths: Vec<usize> = first.iter().map(|cell| measurer.width(cell)).collect();

    for (row, cells) in grid.iter().enumerate().skip(1) {
        for (column, cell) in cells.iter().enumerate() {
            let found = measurer.width(cell);
            let expected = widths.get(column).copied().unwrap_or(0);
            if found != expected {
                return Err(TableError::NonUniformColumn {
                    column,
                    row,
                    expected,
                    found,
                });
            }
        }
    }

    Ok(widths)
}
