//! Table drawing and the render façade.

mod core;

pub use self::core::{Table, draw_table, render_table};
