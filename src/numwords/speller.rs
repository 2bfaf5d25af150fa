//! # Speller Seam
//!
//! The linguistic work (turning 42 into "forty-two") is not done in this
//! crate. It sits behind the [`Speller`] trait, which exposes exactly one
//! capability: the cardinal form of a number in a language.
//!
//! - Production: [`CardinalSpeller`], backed by the `cardinal` crate
//! - Testing: any closure `Fn(&Number, Language) -> Result<String, SpellError>`
//!
//! [`spell`] is the only place that calls a speller. Whatever the speller
//! fails with is collapsed into [`NumWordsError::Conversion`], so callers never
//! see the speller's own error types.

use crate::error::{NumWordsError, Result};
use crate::model::{Language, Number};
use tracing::debug;

pub type SpellError = Box<dyn std::error::Error + Send + Sync>;

pub trait Speller: Send + Sync {
    /// Cardinal words for `number`. Ordinal, currency and year forms are never requested.
    fn cardinal(&self, number: &Number, language: Language)
        -> std::result::Result<String, SpellError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CardinalSpeller;

impl Speller for CardinalSpeller {
    fn cardinal(
        &self,
        number: &Number,
        language: Language,
    ) -> std::result::Result<String, SpellError> {
        Ok(cardinal::to_cardinal(number, language.code())?)
    }
}

impl<F> Speller for F
where
    F: Fn(&Number, Language) -> std::result::Result<String, SpellError> + Send + Sync,
{
    fn cardinal(
        &self,
        number: &Number,
        language: Language,
    ) -> std::result::Result<String, SpellError> {
        self(number, language)
    }
}

/// Runs the speller on already validated input.
pub fn spell<S: Speller + ?Sized>(
    speller: &S,
    number: &Number,
    language: Language,
) -> Result<String> {
    debug!(%number, %language, "spelling cardinal");
    speller.cardinal(number, language).map_err(|e| {
        debug!(error = %e, "speller failed");
        NumWordsError::Conversion(e.to_string())
    })
}
