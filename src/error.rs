// SPDX-License-Identifier: MIT

//! Typed error handling for pipeline-filters
//!
//! Condition-level errors are recovered by the ingestion path (logged and
//! skipped); configuration errors are returned to the caller.

use thiserror::Error;

/// Top-level error type for pipeline-filters
#[derive(Debug, Error)]
pub enum FilterError {
    /// A condition did not split into exactly a type tag and an operand
    #[error("Malformed filter condition '{condition}', the correct form is Type=Value")]
    MalformedCondition { condition: String },

    /// No solver is registered for the type tag
    #[error("Unknown filter type '{type_tag}'")]
    UnknownPredicateType { type_tag: String },

    /// Configuration errors, e.g. a filter entry without an edge name
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

impl FilterError {
    pub fn malformed(condition: impl Into<String>) -> Self {
        Self::MalformedCondition {
            condition: condition.into(),
        }
    }

    pub fn unknown_type(type_tag: impl Into<String>) -> Self {
        Self::UnknownPredicateType {
            type_tag: type_tag.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_expected_form() {
        let err = FilterError::malformed("LabelB");
        assert_eq!(
            err.to_string(),
            "Malformed filter condition 'LabelB', the correct form is Type=Value"
        );
    }

    #[test]
    fn test_unknown_type_message() {
        let err = FilterError::unknown_type("Color");
        assert_eq!(err.to_string(), "Unknown filter type 'Color'");
    }

    #[test]
    fn test_config_message() {
        let err = FilterError::config("filter entry 0 has an empty output");
        assert_eq!(
            err.to_string(),
            "Configuration error: filter entry 0 has an empty output"
        );
    }

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.yaml");
        let err: FilterError = io.into();
        assert_eq!(err.to_string(), "missing.yaml");
    }
}
