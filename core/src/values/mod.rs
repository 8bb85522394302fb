//! Resolved configuration values.

mod value;


pub use value::{Document, Record, Value};
