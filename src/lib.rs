//! Box-drawn text tables for terminals and logs.
//!
//! Rows of cells go through a fixed pipeline: validation, configuration
//! normalisation, row-span calculation, row expansion (wrapping, alignment,
//! padding), column width calculation, and finally drawing. Each stage is a
//! pure function, so a render is deterministic and safe to run from many
//! threads at once.
//!
//! ```
//! use boxtable::{ColumnConfig, TableConfig, render_table};
//!
//! let rows = vec![vec!["0A", "AABBCC"], vec!["1A", "1B"]];
//! let config = TableConfig::new().with_column(1, ColumnConfig::new().max_width(2));
//!
//! let output = render_table(&rows, &config)?;
//! assert_eq!(
//!     output,
//!     "╔══╤══╗\n║0A│AA║\n║  │BB║\n║  │CC║\n╟──┼──╢\n║1A│1B║\n╚══╧══╝\n"
//! );
//! # Ok::<(), boxtable::TableError>(())
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod render;
pub mod width;

pub use config::{
    Alignment, BorderConfig, ColumnConfig, ResolvedColumn, ResolvedConfig, TableConfig,
};
pub use error::{ErrorKind, Result, TableError};
pub use layout::{PhysicalGrid, TableLayout};
pub use logging::{
    LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult, MemorySink,
};
pub use metrics::RenderMetrics;
pub use render::{Table, draw_table, render_table};
pub use width::{TerminalWidth, WidthMeasurer, display_width};
