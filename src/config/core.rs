use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::border::BorderConfig;
use crate::error::{Result, TableError};
use crate::layout::validate_rows;
use crate::width::WidthMeasurer;

/// Horizontal placement of content inside a column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for Alignment {
    type Err = TableError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            other => Err(TableError::UnknownAlignment(other.to_string())),
        }
    }
}

impl TryFrom<String> for Alignment {
    type Error = TableError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        };
        f.write_str(name)
    }
}

/// Per-column overrides. Unset fields take the defaults during [`resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alignment: Option<Alignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<usize>,
}

impl ColumnConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = Some(width);
        self
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn padding_left(mut self, padding: usize) -> Self {
        self.padding_left = Some(padding);
        self
    }

    pub fn padding_right(mut self, padding: usize) -> Self {
        self.padding_right = Some(padding);
        self
    }

    /// Same padding on both sides.
    pub fn padding(self, padding: usize) -> Self {
        self.padding_left(padding).padding_right(padding)
    }
}

/// Caller-facing table configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub border: BorderConfig,
    #[serde(rename = "column")]
    pub columns: BTreeMap<usize, ColumnConfig>,
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the JSON shape `{"border": {...}, "column": {"0": {...}}}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_border(mut self, border: BorderConfig) -> Self {
        self.border = border;
        self
    }

    pub fn with_column(mut self, index: usize, column: ColumnConfig) -> Self {
        self.columns.insert(index, column);
        self
    }
}

/// Fully defaulted settings for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColumn {
    pub alignment: Alignment,
    /// Width every line of the column is padded up to.
    pub min_width: usize,
    /// Wrap limit; `None` means unbounded.
    pub max_width: Option<usize>,
    pub padding_left: usize,
    pub padding_right: usize,
}

impl ResolvedColumn {
    /// True when text of `width` must be wrapped to fit this column.
    pub fn overflows(&self, width: usize) -> bool {
        self.max_width.is_some_and(|max| width > max)
    }

    /// True when text of `width` already fills the column exactly.
    pub fn is_full(&self, width: usize) -> bool {
        self.max_width == Some(width)
    }
}

/// Configuration after normalisation: one entry per column, plus the border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub columns: Vec<ResolvedColumn>,
    pub border: BorderConfig,
}

impl ResolvedConfig {
    pub fn column(&self, index: usize) -> Option<&ResolvedColumn> {
        self.columns.get(index)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Pair each cell of logical row `row` with its column settings.
    ///
    /// Fails with [`TableError::RaggedRow`] when the row does not have one
    /// cell per resolved column.
    pub fn zip_row<'a, C>(
        &'a self,
        row: usize,
        cells: &'a [C],
    ) -> Result<impl Iterator<Item = (&'a C, &'a ResolvedColumn)>> {
        if cells.len() != self.columns.len() {
            return Err(TableError::RaggedRow {
                row,
                expected: self.columns.len(),
                found: cells.len(),
            });
        }
        Ok(cells.iter().zip(&self.columns))
    }
}

/// Merge caller overrides with defaults for every column in `rows`.
///
/// `rows` is validated first. The resolved `min_width` is raised to
/// the widest cell in the column (capped at `max_width`) so that every
/// physical line of a column ends up with the same width.
pub fn resolve<M>(
    rows: &[Vec<String>],
    config: &TableConfig,
    measurer: &M,
) -> Result<ResolvedConfig>
where
    M: WidthMeasurer + ?Sized,
{
    validate_rows(rows)?;

    let column_count = rows.first().map_or(0, Vec::len);
    let mut columns = Vec::with_capacity(column_count);

    for index in 0..column_count {
        let overrides = config.columns.get(&index).cloned().unwrap_or_default();
        let configured_min = overrides.min_width.unwrap_or(0);

        if let Some(max_width) = overrides.max_width {
            if max_width == 0 {
                return Err(TableError::ZeroMaxWidth { column: index });
            }
            if configured_min > max_width {
                return Err(TableError::MinWidthExceedsMaxWidth {
                    column: index,
                    min_width: configured_min,
                    max_width,
                });
            }
        }

        let natural = rows
            .iter()
            .map(|row| measurer.width(&row[index]))
            .max()
            .unwrap_or(0);
        let natural = overrides.max_width.map_or(natural, |max| natural.min(max));

        columns.push(ResolvedColumn {
            alignment: overrides.alignment.unwrap_or_default(),
            min_width: configured_min.max(natural),
            max_width: overrides.max_width,
            padding_left: overrides.padding_left.unwrap_or(0),
            padding_right: overrides.padding_right.unwrap_or(0),
        });
    }

    Ok(ResolvedConfig {
        columns,
        border: config.border.clone(),
    })
}
