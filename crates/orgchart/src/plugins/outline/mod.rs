//! Indented outline input
//!
//! The outline format is one person per line, indented under their manager.
//! `#` starts a comment line.

mod filter;
mod parser;

pub use filter::*;
pub use parser::*;
