//! Core abstractions for org chart processing
//!
//! The traits here split the pipeline into parse, layout and render stages;
//! concrete implementations live in [`crate::plugins`].

mod error;
mod layout;
pub mod logging;
mod parser;
mod renderer;
mod text;
mod tree;
mod types;

pub use error::*;
pub use layout::*;
pub use logging::*;
pub use parser::*;
pub use renderer::*;
pub use text::*;
pub use tree::*;
pub use types::*;
