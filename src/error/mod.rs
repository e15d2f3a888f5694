//! Error types shared by every stage of the table pipeline.

mod types;

pub use types::{ErrorKind, Result, TableError};
