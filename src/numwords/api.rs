//! # Front Ends
//!
//! Two interchangeable ways to convert a number, both thin adapters over the
//! same pieces:
//!
//! - [`number_to_words`]: a plain function, validate and spell in one call
//! - [`NumberToWords`]: validates at construction, spells on [`convert`](NumberToWords::convert)
//!
//! Neither does any checking of its own. Validation lives in
//! [`validate`](crate::validate) and dispatch in [`speller`](crate::speller).
//! The numeric check always runs before the language check.
//!
//! ## Generic Over Speller
//!
//! `NumberToWords<S: Speller>` defaults to [`CardinalSpeller`]; tests plug in
//! a stub with [`NumberToWords::with_speller`] or [`number_to_words_with`].

use crate::error::Result;
use crate::model::{Language, Number};
use crate::speller::{self, CardinalSpeller, Speller};
use crate::validate;
use serde_json::Value;

/// Converts `number` to words in `language` (`"pt_BR"` or `"en"`).
///
/// ```
/// use numwords::api::number_to_words;
///
/// assert_eq!(number_to_words(42, "pt_BR").unwrap(), "quarenta e dois");
/// assert_eq!(number_to_words(42, "en").unwrap(), "forty-two");
/// ```
pub fn number_to_words(number: impl Into<Number>, language: &str) -> Result<String> {
    number_to_words_with(&CardinalSpeller, number, language)
}

pub fn number_to_words_with<S: Speller + ?Sized>(
    speller: &S,
    number: impl Into<Number>,
    language: &str,
) -> Result<String> {
    let number = number.into();
    let language = validate::language(language)?;
    speller::spell(speller, &number, language)
}

/// Like [`number_to_words`], for input whose type is only known at runtime.
pub fn value_to_words(value: &Value, language: &str) -> Result<String> {
    let number = validate::number(value)?;
    number_to_words(number, language)
}

/// A validated number and language, spelled on demand.
///
/// ```
/// use numwords::api::NumberToWords;
///
/// let converter = NumberToWords::new(42, "en").unwrap();
/// assert_eq!(converter.convert().unwrap(), "forty-two");
/// ```
#[derive(Debug, Clone)]
pub struct NumberToWords<S: Speller = CardinalSpeller> {
    number: Number,
    language: Language,
    speller: S,
}

impl NumberToWords {
    pub fn new(number: impl Into<Number>, language: &str) -> Result<Self> {
        Self::with_speller(CardinalSpeller, number, language)
    }

    pub fn from_value(value: &Value, language: &str) -> Result<Self> {
        let number = validate::number(value)?;
        Self::new(number, language)
    }

    pub fn supported_languages() -> &'static [&'static str] {
        &Language::SUPPORTED
    }
}

impl<S: Speller> NumberToWords<S> {
    pub fn with_speller(speller: S, number: impl Into<Number>, language: &str) -> Result<Self> {
        let number = number.into();
        let language = validate::language(language)?;
        Ok(Self {
            number,
            language,
            speller,
        })
    }

    pub fn number(&self) -> &Number {
        &self.number
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn convert(&self) -> Result<String> {
        speller::spell(&self.speller, &self.number, self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, NumWordsError};
    use crate::model::Decimal;
    use crate::speller::SpellError;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn function_front_end_scenarios() {
        assert_eq!(number_to_words(42, "pt_BR").unwrap(), "quarenta e dois");
        assert_eq!(number_to_words(42, "en").unwrap(), "forty-two");
        assert_eq!(number_to_words(0, "en").unwrap(), "zero");
    }

    #[test]
    fn object_front_end_scenarios() {
        let pt = NumberToWords::new(42, "pt_BR").unwrap();
        assert_eq!(pt.convert().unwrap(), "quarenta e dois");
        assert_eq!(pt.language(), Language::PtBr);
        assert_eq!(pt.number(), &Number::Int(42));

        let en = NumberToWords::new(0, "en").unwrap();
        assert_eq!(en.convert().unwrap(), "zero");
    }

    #[test]
    fn text_input_is_a_type_error_in_both_front_ends() {
        let err = value_to_words(&json!("abc"), "en").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);

        let err = NumberToWords::from_value(&json!("abc"), "en").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
    }

    #[test]
    fn numeric_check_runs_before_language_check() {
        let err = value_to_words(&json!(null), "fr").unwrap_err();
        assert!(matches!(err, NumWordsError::NotNumeric { .. }));

        let err = NumberToWords::from_value(&json!([]), "fr").unwrap_err();
        assert!(matches!(err, NumWordsError::NotNumeric { .. }));
    }

    #[test]
    fn unsupported_language_in_both_front_ends() {
        let err = number_to_words(100, "fr").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(err.to_string().contains("Use pt_BR, en."));

        let err = NumberToWords::new(100, "fr").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(err.to_string().contains("Use pt_BR, en."));
    }

    #[test]
    fn fractional_input_spells_the_fraction() {
        let words = number_to_words(1234.56, "pt_BR").unwrap();
        assert_eq!(words, "mil, duzentos e trinta e quatro vírgula cinco seis");

        let exact: Decimal = "1234.56".parse().unwrap();
        let words = NumberToWords::new(exact, "en").unwrap().convert().unwrap();
        assert_eq!(
            words,
            "one thousand, two hundred and thirty-four point five six"
        );
    }

    #[test]
    fn every_language_spells_a_range_of_values() {
        let values: Vec<Number> = vec![
            Number::from(1),
            Number::from(-15),
            Number::from(999_999),
            Number::from(i64::MAX),
            Number::from(0.25),
            Number::from(-3.75),
            Number::from(1e20),
        ];
        for language in NumberToWords::supported_languages() {
            for value in &values {
                let words = number_to_words(value.clone(), language).unwrap();
                assert!(!words.is_empty(), "{} in {}", value, language);
            }
        }
    }

    #[test]
    fn convert_is_idempotent() {
        let converter = NumberToWords::new(1_000_001, "en").unwrap();
        assert_eq!(converter.convert().unwrap(), converter.convert().unwrap());
        assert_eq!(
            number_to_words(77, "pt_BR").unwrap(),
            number_to_words(77, "pt_BR").unwrap()
        );
    }

    #[test]
    fn out_of_range_is_wrapped() {
        let huge: Decimal = format!("1{}", "0".repeat(40)).parse().unwrap();
        let err = number_to_words(huge, "en").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert!(err.to_string().starts_with("Error converting number:"));
    }

    #[test]
    fn validation_happens_before_the_speller_is_called() {
        let calls = AtomicUsize::new(0);
        let counting = |_: &Number, _: Language| -> std::result::Result<String, SpellError> {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok("stub".into())
        };

        assert!(number_to_words_with(&counting, 5, "fr").is_err());
        assert!(NumberToWords::with_speller(&counting, 5, "xx").is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(number_to_words_with(&counting, 5, "en").unwrap(), "stub");
        let converter = NumberToWords::with_speller(&counting, 5, "en").unwrap();
        assert_eq!(converter.convert().unwrap(), "stub");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn stub_failures_surface_as_conversion_errors() {
        let broken = |_: &Number, _: Language| -> std::result::Result<String, SpellError> {
            Err("library exploded".into())
        };
        let converter = NumberToWords::with_speller(broken, 1, "pt_BR").unwrap();
        let err = converter.convert().unwrap_err();
        assert_eq!(err.to_string(), "Error converting number: library exploded");
    }
}
