//! Error types for pdm-codegen

use thiserror::Error;

/// Result type alias for pdm-codegen operations
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("Failed to parse PDM document: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("{element} element is missing its Id attribute")]
    MissingId { element: &'static str },

    #[error("Table {table}: key column reference is missing its Ref attribute")]
    MissingKeyRef { table: String },

    #[error("Table {table}: key references unknown column id {reference}")]
    UnresolvedKeyReference { table: String, reference: String },
}

impl From<roxmltree::Error> for CodegenError {
    fn from(err: roxmltree::Error) -> Self {
        CodegenError::ParseError(err.to_string())
    }
}

impl From<config::ConfigError> for CodegenError {
    fn from(err: config::ConfigError) -> Self {
        CodegenError::ConfigError(err.to_string())
    }
}
