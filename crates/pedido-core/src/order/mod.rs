//! Purchase-order field extraction.

mod layout;
mod parser;
pub mod rules;

pub use layout::{OrderLayout, PreOrderLayout};
pub use parser::{ExtractionResult, LayoutParser, OrderParser};
