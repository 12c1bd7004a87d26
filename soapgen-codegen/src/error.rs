//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// Model validation error.
    #[error("model error: {0}")]
    Model(#[from] soapgen_model::ModelError),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soapgen_model::ModelError;

    #[test]
    fn test_from_model_error() {
        let err: CodegenError = ModelError::duplicate_type("top level", "Quote").into();
        assert_eq!(
            err.to_string(),
            "model error: duplicate type 'Quote' in top level"
        );
    }

    #[test]
    fn test_generation_helper() {
        let err = CodegenError::generation("bad indent unit");
        assert_eq!(err.to_string(), "generation error: bad indent unit");
    }
}
