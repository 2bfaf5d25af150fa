use crate::Error;
use std::fmt;
use std::str::FromStr;

/// An arbitrary-precision decimal kept as digit strings.
///
/// The integer part never carries leading zeros (zero is `"0"`); the fraction
/// keeps every digit as written, so `"1.50"` spells two fraction digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    negative: bool,
    integer: String,
    fraction: String,
}

impl Decimal {
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    pub fn fraction_digits(&self) -> &str {
        &self.fraction
    }

    fn is_zero(&self) -> bool {
        self.integer == "0" && self.fraction.bytes().all(|b| b == b'0')
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidDecimal(s.to_string());

        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (integer, fraction) = body.split_once('.').unwrap_or((body, ""));

        if integer.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(integer) || !all_digits(fraction) {
            return Err(invalid());
        }

        let integer = match integer.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };
        let mut decimal = Decimal {
            negative,
            integer: integer.to_string(),
            fraction: fraction.to_string(),
        };
        // "-0" and "-0.00" spell as zero.
        if decimal.is_zero() {
            decimal.negative = false;
        }
        Ok(decimal)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.integer)?;
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}

/// A value that can be spelled: integer, float, or exact decimal.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Int(i128),
    Float(f64),
    Decimal(Decimal),
}

impl Number {
    /// Normalizes to a [`Decimal`]. Floats go through their shortest
    /// round-trip representation.
    pub fn to_decimal(&self) -> Result<Decimal, Error> {
        match self {
            Number::Int(n) => Ok(Decimal {
                negative: *n < 0,
                integer: n.unsigned_abs().to_string(),
                fraction: String::new(),
            }),
            Number::Float(f) if !f.is_finite() => Err(Error::NonFinite(f.to_string())),
            Number::Float(f) => f.to_string().parse(),
            Number::Decimal(d) => Ok(d.clone()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{}", n),
            Number::Float(x) => write!(f, "{}", x),
            Number::Decimal(d) => write!(f, "{}", d),
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(n: $t) -> Self {
                    Number::Int(i128::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64);

impl From<f64> for Number {
    fn from(x: f64) -> Self {
        Number::Float(x)
    }
}

impl From<Decimal> for Number {
    fn from(d: Decimal) -> Self {
        Number::Decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_strips_leading_zeros() {
        let d: Decimal = "007.50".parse().unwrap();
        assert_eq!(d.integer_digits(), "7");
        assert_eq!(d.fraction_digits(), "50");
        assert_eq!(d.to_string(), "7.50");
    }

    #[test]
    fn parse_accepts_bare_fraction_and_sign() {
        let d: Decimal = "-.25".parse().unwrap();
        assert!(d.is_negative());
        assert_eq!(d.integer_digits(), "0");
        assert_eq!(d.fraction_digits(), "25");

        let d: Decimal = "+12".parse().unwrap();
        assert!(!d.is_negative());
        assert_eq!(d.to_string(), "12");
    }

    #[test]
    fn negative_zero_is_normalized() {
        let d: Decimal = "-0.000".parse().unwrap();
        assert!(!d.is_negative());
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", ".", "-", "abc", "1.2.3", "1e5", "12a", " 1"] {
            assert!(bad.parse::<Decimal>().is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn ints_keep_sign() {
        let d = Number::from(-42).to_decimal().unwrap();
        assert!(d.is_negative());
        assert_eq!(d.integer_digits(), "42");
        assert_eq!(d.fraction_digits(), "");
    }

    #[test]
    fn i128_min_does_not_overflow_on_abs() {
        let d = Number::Int(i128::MIN).to_decimal().unwrap();
        assert_eq!(d.integer_digits(), "170141183460469231731687303715884105728");
    }

    #[test]
    fn floats_use_shortest_representation() {
        let d = Number::from(1234.56).to_decimal().unwrap();
        assert_eq!(d.integer_digits(), "1234");
        assert_eq!(d.fraction_digits(), "56");

        let d = Number::from(42.0).to_decimal().unwrap();
        assert_eq!(d.fraction_digits(), "");
    }
}
