use crate::config::{ResolvedColumn, ResolvedConfig};
use crate::error::{Result, TableError};
use crate::width::{WidthMeasurer, split_units};

/// A single unit that cannot fit in its column at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitOverflow {
    pub unit_width: usize,
    pub max_width: usize,
}

impl UnitOverflow {
    pub(crate) fn at(self, row: usize, column: usize) -> TableError {
        TableError::ContentTooWide {
            row,
            column,
            unit_width: self.unit_width,
            max_width: self.max_width,
        }
    }
}

/// Greedily break `text` into lines no wider than `max_width`.
///
/// Breaks fall between code points; escape sequences stay whole. A line
/// broken while an SGR style is open is closed with a reset, and the next
/// line re-opens the style. Text that fits (including text exactly
/// `max_width` wide) is returned as one line, and an empty cell yields a
/// single empty line.
pub fn wrap_cell<M>(
    text: &str,
    max_width: Option<usize>,
    measurer: &M,
) -> std::result::Result<Vec<String>, UnitOverflow>
where
    M: WidthMeasurer + ?Sized,
{
    let Some(max_width) = max_width else {
        return Ok(vec![text.to_string()]);
    };
    if measurer.width(text) <= max_width {
        return Ok(vec![text.to_string()]);
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut active: Vec<&str> = Vec::new();

    for unit in split_units(text) {
        let unit_width = measurer.width(unit);
        if unit_width > max_width {
            return Err(UnitOverflow {
                unit_width,
                max_width,
            });
        }

        current.push_str(unit);
        if measurer.width(&current) > max_width {
            current.truncate(current.len() - unit.len());
            if !active.is_empty() {
                current.push_str(SGR_RESET);
            }
            lines.push(std::mem::take(&mut current));
            current.extend(active.iter().copied());
            current.push_str(unit);
        }

        track_sgr(&mut active, unit);
    }

    if !current.is_empty() {
        if !active.is_empty() {
            current.push_str(SGR_RESET);
        }
        lines.push(current);
    }

    Ok(lines)
}

const SGR_RESET: &str = "\x1b[0m";

// Keeps the SGR sequences in effect after `unit`; a reset clears them.
fn track_sgr<'a>(active: &mut Vec<&'a str>, unit: &'a str) {
    let Some(params) = unit
        .strip_prefix("\x1b[")
        .and_then(|rest| rest.strip_suffix('m'))
    else {
        return;
    };

    if params.is_empty() || params == "0" || params.starts_with("0;") {
        active.clear();
    }
    if !params.is_empty() && params != "0" {
        active.push(unit);
    }
}

/// Number of physical lines one cell needs in `column`.
pub(crate) fn cell_span<M>(
    text: &str,
    column: &ResolvedColumn,
    measurer: &M,
) -> std::result::Result<usize, UnitOverflow>
where
    M: WidthMeasurer + ?Sized,
{
    if !column.overflows(measurer.width(text)) {
        return Ok(1);
    }
    wrap_cell(text, column.max_width, measurer).map(|lines| lines.len().max(1))
}

/// Physical line count of each logical row: the tallest wrapped cell, at least 1.
pub fn row_spans<M>(
    rows: &[Vec<String>],
    config: &ResolvedConfig,
    measurer: &M,
) -> Result<Vec<usize>>
where
    M: WidthMeasurer + ?Sized,
{
    rows.iter()
        .enumerate()
        .map(|(row, cells)| {
            config
                .zip_row(row, cells)?
                .enumerate()
                .try_fold(1, |span, (column, (text, settings))| {
                    cell_span(text, settings, measurer)
                        .map(|lines| span.max(lines))
                        .map_err(|overflow| overflow.at(row, column))
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ColumnConfig, TableConfig, resolve};
    use crate::width::TerminalWidth;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    fn spans_for(data: &[&[&str]], config: TableConfig) -> Result<Vec<usize>> {
        let data = rows(data);
        let resolved = resolve(&data, &config, &TerminalWidth)?;
        row_spans(&data, &resolved, &TerminalWidth)
    }

    #[test]
    fn wrap_slices_by_width() {
        let lines = wrap_cell("AABBCC", Some(2), &TerminalWidth).unwrap();
        assert_eq!(lines, vec!["AA", "BB", "CC"]);
        let lines = wrap_cell("AABBC", Some(2), &TerminalWidth).unwrap();
        assert_eq!(lines, vec!["AA", "BB", "C"]);
    }

    #[test]
    fn wrap_leaves_fitting_text_alone() {
        assert_eq!(wrap_cell("abc", Some(3), &TerminalWidth).unwrap(), vec!["abc"]);
        assert_eq!(wrap_cell("abc", None, &TerminalWidth).unwrap(), vec!["abc"]);
        assert_eq!(wrap_cell("", Some(1), &TerminalWidth).unwrap(), vec![""]);
    }

    #[test]
    fn wrap_never_splits_wide_code_points() {
        let lines = wrap_cell("a漢字", Some(2), &TerminalWidth).unwrap();
        assert_eq!(lines, vec!["a", "漢", "字"]);
    }

    #[test]
    fn wrap_closes_and_reopens_open_styles() {
        let lines = wrap_cell("\x1b[31mabcd\x1b[0m", Some(2), &TerminalWidth).unwrap();
        assert_eq!(lines, vec!["\x1b[31mab\x1b[0m", "\x1b[31mcd\x1b[0m"]);
    }

    #[test]
    fn wrap_carries_stacked_styles_and_drops_reset_ones() {
        let text = "\x1b[1m\x1b[32mabc\x1b[0mde\x1b[33mfg";
        let lines = wrap_cell(text, Some(2), &TerminalWidth).unwrap();
        assert_eq!(
            lines,
            vec![
                "\x1b[1m\x1b[32mab\x1b[0m",
                "\x1b[1m\x1b[32mc\x1b[0md",
                "e\x1b[33mf\x1b[0m",
                "\x1b[33mg\x1b[0m",
            ]
        );
    }

    #[test]
    fn wrap_leaves_unstyled_text_without_resets() {
        let lines = wrap_cell("abcde", Some(2), &TerminalWidth).unwrap();
        assert_eq!(lines, vec!["ab", "cd", "e"]);
    }

    #[test]
    fn wrap_reports_units_wider_than_the_column() {
        let err = wrap_cell("漢", Some(1), &TerminalWidth).unwrap_err();
        assert_eq!(
            err,
            UnitOverflow {
                unit_width: 2,
                max_width: 1
            }
        );
    }

    #[test]
    fn unwrapped_rows_span_one_line() {
        let spans = spans_for(&[&["0A", "0B"], &["1A", "1B"]], TableConfig::default()).unwrap();
        assert_eq!(spans, vec![1, 1]);
    }

    #[test]
    fn span_is_the_ceiling_of_width_over_max() {
        let config = TableConfig::new().with_column(1, ColumnConfig::new().max_width(2));
        let spans = spans_for(
            &[&["0A", "AABBCC", "0C"], &["1A", "AAB", "1C"], &["2A", "AB", "2C"]],
            config,
        )
        .unwrap();
        assert_eq!(spans, vec![3, 2, 1]);
    }

    #[test]
    fn tallest_cell_sets_the_span() {
        let config = TableConfig::new()
            .with_column(0, ColumnConfig::new().max_width(1))
            .with_column(1, ColumnConfig::new().max_width(2));
        let spans = spans_for(&[&["abcd", "abcdef"]], config).unwrap();
        assert_eq!(spans, vec![4]);
    }

    #[test]
    fn empty_rows_still_span_one_line() {
        let config = TableConfig::new().with_column(0, ColumnConfig::new().max_width(3));
        let spans = spans_for(&[&["", ""]], config).unwrap();
        assert_eq!(spans, vec![1]);
    }

    #[test]
    fn rows_wider_than_the_config_are_ragged() {
        let narrow = rows(&[&["a"]]);
        let resolved = resolve(&narrow, &TableConfig::default(), &TerminalWidth).unwrap();
        let wide = rows(&[&["a"], &["b", "c"]]);
        let err = row_spans(&wide, &resolved, &TerminalWidth).unwrap_err();
        assert!(matches!(
            err,
            TableError::RaggedRow {
                row: 1,
                expected: 1,
                found: 2
            }
        ));
    }

    #[test]
    fn overflow_reports_cell_position() {
        let config = TableConfig::new().with_column(1, ColumnConfig::new().max_width(1));
        let err = spans_for(&[&["a", "b"], &["c", "字"]], config).unwrap_err();
        assert!(matches!(
            err,
            TableError::ContentTooWide {
                row: 1,
                column: 1,
                unit_width: 2,
                max_width: 1
            }
        ));
    }
}
