//! Display width measurement boundary.

mod utils;

pub use utils::{TerminalWidth, WidthMeasurer, display_width, split_units};
