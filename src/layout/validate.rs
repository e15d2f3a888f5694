use crate::error::{Result, TableError};

/// Reject input that is not a non-empty rectangular matrix.
pub fn validate_rows<C>(rows: &[Vec<C>]) -> Result<()> {
    let Some(first) = rows.first() else {
        return Err(TableError::EmptyTable);
    };

    let expected = first.len();
    if expected == 0 {
        return Err(TableError::NoColumns);
    }

    for (row, cells) in rows.iter().enumerate().skip(1) {
        if cells.len() != expected {
            return Err(TableError::RaggedRow {
                row,
                expected,
                found: cells.len(),
            });
        }
    }

    Ok(())
}
