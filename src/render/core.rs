use serde_json::json;

use crate::config::{BorderConfig, TableConfig};
use crate::error::Result;
use crate::layout::TableLayout;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::RenderMetrics;
use crate::width::{TerminalWidth, WidthMeasurer};

const LOG_TARGET: &str = "boxtable::render";

/// Draw a laid-out grid with its border.
///
/// Separators go between logical rows only: after the last physical line
/// of each span except the final one. Every line, the bottom border
/// included, ends with `\n`; a rule whose glyphs are all empty is omitted.
pub fn draw_table(
    grid: &[Vec<String>],
    border: &BorderConfig,
    column_widths: &[usize],
    spans: &[usize],
) -> String {
    let mut output = String::new();

    push_rule(
        &mut output,
        column_widths,
        &border.top_left,
        &border.top_body,
        &border.top_join,
        &border.top_right,
    );

    let mut physical = grid.iter();
    for (index, &span) in spans.iter().enumerate() {
        for cells in physical.by_ref().take(span) {
            output.push_str(&border.body_left);
            output.push_str(&cells.join(border.body_join.as_str()));
            output.push_str(&border.body_right);
            output.push('\n');
        }

        if index + 1 < spans.len() {
            push_rule(
                &mut output,
                column_widths,
                &border.join_left,
                &border.join_body,
                &border.join_join,
                &border.join_right,
            );
        }
    }

    push_rule(
        &mut output,
        column_widths,
        &border.bottom_left,
        &border.bottom_body,
        &border.bottom_join,
        &border.bottom_right,
    );

    output
}

// Rules made only of empty glyphs are skipped rather than drawn as blank lines.
fn push_rule(
    output: &mut String,
    widths: &[usize],
    left: &str,
    body: &str,
    join: &str,
    right: &str,
) {
    let segments: Vec<String> = widths.iter().map(|&width| body.repeat(width)).collect();
    let line = format!("{left}{}{right}", segments.join(join));
    if line.is_empty() {
        return;
    }
    output.push_str(&line);
    output.push('\n');
}

impl TableLayout {
    pub fn draw(&self) -> String {
        draw_table(&self.grid, &self.border, &self.column_widths, &self.spans)
    }
}

/// Renders rows into a bordered text table.
///
/// A `Table` only holds configuration; every call to [`Table::render`]
/// builds its own layout, so one value can serve many threads.
#[derive(Debug, Clone)]
pub struct Table<M = TerminalWidth> {
    config: TableConfig,
    measurer: M,
    logger: Option<Logger>,
}

impl Table {
    pub fn new(config: TableConfig) -> Self {
        Self {
            config,
            measurer: TerminalWidth,
            logger: None,
        }
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl<M: WidthMeasurer> Table<M> {
    /// Swap the display-width measurer used by every stage.
    pub fn with_measurer<N: WidthMeasurer>(self, measurer: N) -> Table<N> {
        Table {
            config: self.config,
            measurer,
            logger: self.logger,
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Compute spans, the physical grid and column widths without drawing.
    pub fn layout<C: ToString>(&self, rows: &[Vec<C>]) -> Result<TableLayout> {
        let layout = match TableLayout::build(rows, &self.config, &self.measurer) {
            Ok(layout) => layout,
            Err(err) => {
                self.emit(
                    LogLevel::Warn,
                    "layout_failed",
                    [json_kv("error", err.to_string())],
                );
                return Err(err);
            }
        };

        self.emit(
            LogLevel::Debug,
            "row_spans",
            [json_kv("spans", json!(layout.spans))],
        );
        self.emit(
            LogLevel::Debug,
            "column_widths",
            [json_kv("widths", json!(layout.column_widths))],
        );

        Ok(layout)
    }

    pub fn render<C: ToString>(&self, rows: &[Vec<C>]) -> Result<String> {
        let layout = self.layout(rows)?;

        if let Some(logger) = &self.logger {
            let metrics = RenderMetrics::from_layout(&layout, &self.measurer);
            let _ = logger.log_event(metrics.to_log_event(LOG_TARGET));
        }

        Ok(layout.draw())
    }

    fn emit(
        &self,
        level: LogLevel,
        message: &str,
        fields: impl IntoIterator<Item = (String, serde_json::Value)>,
    ) {
        if let Some(logger) = &self.logger {
            let _ = logger.log_event(event_with_fields(level, LOG_TARGET, message, fields));
        }
    }
}

/// Render `rows` with `config` and the default terminal measurer.
pub fn render_table<C: ToString>(rows: &[Vec<C>], config: &TableConfig) -> Result<String> {
    Table::new(config.clone()).render(rows)
}
