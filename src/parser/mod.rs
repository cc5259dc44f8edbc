//! PDM document parser module using roxmltree

mod metadata;
mod pdm_parser;

pub use metadata::*;
pub use pdm_parser::*;
