//! # Cardinal - Number Spelling
//!
//! Renders numbers as cardinal words ("forty-two", "quarenta e dois").
//!
//! ## Supported Languages
//!
//! | Code    | Language             | Point word |
//! |---------|----------------------|------------|
//! | `en`    | English              | `point`    |
//! | `pt_BR` | Brazilian Portuguese | `vírgula`  |
//!
//! ## Numbers
//!
//! A [`Number`] is an integer, a float, or an arbitrary-precision [`Decimal`].
//! Everything is normalized to a [`Decimal`] before spelling:
//!
//! - the integer part is spelled as a whole, using short-scale names up to
//!   10^33 (decillion / decilhão)
//! - each fraction digit is spelled on its own after the point word
//! - floats use their shortest round-trip representation, so `1234.56_f64`
//!   has exactly two fraction digits
//!
//! ```rust
//! use cardinal::{to_cardinal, Number};
//!
//! assert_eq!(to_cardinal(&Number::from(42), "en").unwrap(), "forty-two");
//! assert_eq!(to_cardinal(&Number::from(42), "pt_BR").unwrap(), "quarenta e dois");
//! assert_eq!(
//!     to_cardinal(&Number::from(1.5), "en").unwrap(),
//!     "one point five"
//! );
//! ```
//!
//! ## Limits
//!
//! The integer part must be below 10^36. Larger magnitudes fail with
//! [`Error::Overflow`]; NaN and infinities fail with [`Error::NonFinite`].

mod en;
mod number;
mod pt_br;

pub use number::{Decimal, Number};

use thiserror::Error;

/// Integer digits accepted before [`Error::Overflow`] (values below 10^36).
pub const MAX_INTEGER_DIGITS: usize = 36;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("language '{0}' is not implemented")]
    UnsupportedLanguage(String),

    #[error("abs({0}) must be less than 10^36")]
    Overflow(String),

    #[error("cannot spell non-finite value {0}")]
    NonFinite(String),

    #[error("invalid decimal literal '{0}'")]
    InvalidDecimal(String),
}

/// Word tables and grouping rules for one language.
trait Lexicon {
    /// Prefix for negative numbers.
    fn minus(&self) -> &'static str;

    /// Separator between the integer part and the fraction digits.
    fn point(&self) -> &'static str;

    /// Spells a non-negative integer below 10^36.
    fn integer(&self, n: u128) -> String;
}

/// Spells `number` as cardinal words in the language identified by `lang`.
pub fn to_cardinal(number: &Number, lang: &str) -> Result<String, Error> {
    let lexicon: &dyn Lexicon = match lang {
        "en" => &en::English,
        "pt_BR" => &pt_br::BrazilianPortuguese,
        other => return Err(Error::UnsupportedLanguage(other.to_string())),
    };
    let decimal = number.to_decimal()?;
    spell(lexicon, &decimal)
}

fn spell(lexicon: &dyn Lexicon, decimal: &Decimal) -> Result<String, Error> {
    let digits = decimal.integer_digits();
    if digits.len() > MAX_INTEGER_DIGITS {
        return Err(Error::Overflow(decimal.to_string()));
    }
    let integer: u128 = digits
        .parse()
        .map_err(|_| Error::InvalidDecimal(decimal.to_string()))?;

    let mut words = Vec::new();
    if decimal.is_negative() {
        words.push(lexicon.minus().to_string());
    }
    words.push(lexicon.integer(integer));

    let fraction = decimal.fraction_digits();
    if !fraction.is_empty() {
        words.push(lexicon.point().to_string());
        for digit in fraction.bytes() {
            words.push(lexicon.integer(u128::from(digit - b'0')));
        }
    }

    Ok(words.join(" "))
}

/// Splits `n` into non-zero groups of three digits, most significant first.
///
/// Each entry is `(scale, value)` where `scale` is the power of one thousand.
fn groups(mut n: u128) -> Vec<(usize, u32)> {
    let mut out = Vec::new();
    let mut scale = 0;
    while n > 0 {
        let value = (n % 1000) as u32;
        if value != 0 {
            out.push((scale, value));
        }
        n /= 1000;
        scale += 1;
    }
    out.reverse();
    out
}
