use crate::layout::TableLayout;
use crate::logging::{LogEvent, LogFields, LogLevel};
use crate::width::WidthMeasurer;
use serde_json::json;

/// Shape of one rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderMetrics {
    pub columns: usize,
    pub logical_rows: usize,
    pub physical_rows: usize,
    /// Logical rows that expanded to more than one physical line.
    pub wrapped_rows: usize,
    pub separators: usize,
    /// Display width of every drawn line.
    pub output_width: usize,
}

impl RenderMetrics {
    pub fn from_layout<M>(layout: &TableLayout, measurer: &M) -> Self
    where
        M: WidthMeasurer + ?Sized,
    {
        let border = &layout.border;
        let joins = layout.column_count().saturating_sub(1);
        let output_width = layout.column_widths.iter().sum::<usize>()
            + measurer.width(&border.body_left)
            + measurer.width(&border.body_right)
            + measurer.width(&border.body_join) * joins;

        Self {
            columns: layout.column_count(),
            logical_rows: layout.logical_row_count(),
            physical_rows: layout.physical_row_count(),
            wrapped_rows: layout.spans.iter().filter(|&&span| span > 1).count(),
            separators: layout.logical_row_count().saturating_sub(1),
            output_width,
        }
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "render_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("columns".to_string(), json!(self.columns));
        map.insert("logical_rows".to_string(), json!(self.logical_rows));
        map.insert("physical_rows".to_string(), json!(self.physical_rows));
        map.insert("wrapped_rows".to_string(), json!(self.wrapped_rows));
        map.insert("separators".to_string(), json!(self.separators));
        map.insert("output_width".to_string(), json!(self.output_width));
        map
    }
}
