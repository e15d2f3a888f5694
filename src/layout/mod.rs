//! Layout pipeline: validation, span calculation, row expansion, alignment
//! and column widths.
//!
//! Each stage is a pure function over the previous stage's output;
//! [`TableLayout::build`] runs them in order.

mod align;
mod columns;
mod expand;
pub mod grid;
mod span;
mod validate;

pub use align::align;
pub use columns::column_widths;
pub use expand::expand_rows;
pub use grid::{PhysicalGrid, TableLayout};
pub use span::{UnitOverflow, row_spans, wrap_cell};
pub use validate::validate_rows;
