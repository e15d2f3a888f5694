//! Table configuration and its normalisation into per-column settings.

mod border;
mod core;

pub use border::BorderConfig;
pub use self::core::{
    Alignment, ColumnConfig, ResolvedColumn, ResolvedConfig, TableConfig, resolve,
};
