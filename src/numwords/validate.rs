//! Input checks shared by both front ends.
//!
//! Typed callers get the numeric check for free through `Into<Number>`; the
//! functions here cover inputs whose type is only known at runtime.

use crate::error::{NumWordsError, Result};
use crate::model::{Language, Number};
use serde_json::Value;
use tracing::debug;

/// Accepts JSON numbers only. Strings are never coerced.
pub fn number(value: &Value) -> Result<Number> {
    let found = match value {
        Value::Number(n) => {
            let number = n
                .as_i64()
                .map(Number::from)
                .or_else(|| n.as_u64().map(Number::from))
                .or_else(|| n.as_f64().map(Number::Float))
                .ok_or(NumWordsError::NotNumeric { found: "number" })?;
            debug!(%number, "accepted numeric input");
            return Ok(number);
        }
        Value::String(_) => "string",
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    debug!(found, "rejected non-numeric input");
    Err(NumWordsError::NotNumeric { found })
}

/// A missing number fails the same way a non-numeric one does.
pub fn optional_number(number: Option<Number>) -> Result<Number> {
    number.ok_or(NumWordsError::NotNumeric { found: "nothing" })
}

pub fn language(code: &str) -> Result<Language> {
    let language = code.parse::<Language>();
    if language.is_err() {
        debug!(code, "rejected language code");
    }
    language
}
