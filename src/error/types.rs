use thiserror::Error;

/// Unified result type for the table renderer.
pub type Result<T> = std::result::Result<T, TableError>;

/// Broad classification of a [`TableError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input rows are not a non-empty rectangular matrix.
    Validation,
    /// The configuration cannot be applied to the input.
    Configuration,
    /// The layout pipeline produced an inconsistent grid.
    InvariantViolation,
}

/// Errors surfaced while laying out or drawing a table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("table has no rows")]
    EmptyTable,
    #[error("table rows have no columns")]
    NoColumns,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("column {column}: minWidth {min_width} exceeds maxWidth {max_width}")]
    MinWidthExceedsMaxWidth {
        column: usize,
        min_width: usize,
        max_width: usize,
    },
    #[error("column {column}: maxWidth must be at least 1")]
    ZeroMaxWidth { column: usize },
    #[error("unknown alignment `{0}` (expected left, center or right)")]
    UnknownAlignment(String),
    #[error("unknown border template `{0}`")]
    UnknownBorderTemplate(String),
    #[error("invalid table configuration: {0}")]
    ConfigParse(String),
    #[error(
        "row {row}, column {column}: unit of width {unit_width} cannot fit maxWidth {max_width}"
    )]
    ContentTooWide {
        row: usize,
        column: usize,
        unit_width: usize,
        max_width: usize,
    },
    #[error("column {column}: physical row {row} is {found} wide, expected {expected}")]
    NonUniformColumn {
        column: usize,
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}, column {column}: wrapped into {lines} lines but row span is {span}")]
    SpanOverflow {
        row: usize,
        column: usize,
        lines: usize,
        span: usize,
    },
}

impl TableError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableError::EmptyTable | TableError::NoColumns | TableError::RaggedRow { .. } => {
                ErrorKind::Validation
            }
            TableError::MinWidthExceedsMaxWidth { .. }
            | TableError::ZeroMaxWidth { .. }
            | TableError::UnknownAlignment(_)
            | TableError::UnknownBorderTemplate(_)
            | TableError::ConfigParse(_)
            | TableError::ContentTooWide { .. } => ErrorKind::Configuration,
            TableError::NonUniformColumn { .. } | TableError::SpanOverflow { .. } => {
                ErrorKind::InvariantViolation
            }
        }
    }
}

impl From<serde_json::Error> for TableError {
    fn from(err: serde_json::Error) -> Self {
        TableError::ConfigParse(err.to_string())
    }
}
