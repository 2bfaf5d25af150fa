use crate::model::Language;
use thiserror::Error;

/// The two user-facing error kinds, plus configuration failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input is not a number.
    Type,
    /// The language is unsupported or the conversion itself failed.
    Value,
    /// The config file could not be read or parsed.
    Config,
}

#[derive(Error, Debug)]
pub enum NumWordsError {
    #[error("Parameter 'number' must be a numeric value (got {found}).")]
    NotNumeric { found: &'static str },

    #[error("Unsupported language '{requested}'. Use {}.", Language::SUPPORTED.join(", "))]
    UnsupportedLanguage { requested: String },

    #[error("Error converting number: {0}")]
    Conversion(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl NumWordsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NumWordsError::NotNumeric { .. } => ErrorKind::Type,
            NumWordsError::UnsupportedLanguage { .. } | NumWordsError::Conversion(_) => {
                ErrorKind::Value
            }
            NumWordsError::Io(_) | NumWordsError::Serialization(_) => ErrorKind::Config,
        }
    }
}

pub type Result<T> = std::result::Result<T, NumWordsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_language_lists_both_codes() {
        let err = NumWordsError::UnsupportedLanguage {
            requested: "fr".into(),
        };
        assert_eq!(err.to_string(), "Unsupported language 'fr'. Use pt_BR, en.");
        assert_eq!(err.kind(), ErrorKind::Value);
    }

    #[test]
    fn not_numeric_is_a_type_error() {
        let err = NumWordsError::NotNumeric { found: "string" };
        assert_eq!(err.kind(), ErrorKind::Type);
        assert!(err.to_string().contains("must be a numeric value"));
    }

    #[test]
    fn conversion_keeps_the_cause() {
        let err = NumWordsError::Conversion("abs(1e40) must be less than 10^36".into());
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(
            err.to_string(),
            "Error converting number: abs(1e40) must be less than 10^36"
        );
    }
}
