use crate::error::NumWordsError;
use std::fmt;
use std::str::FromStr;

pub use cardinal::{Decimal, Number};

/// A supported target language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    PtBr,
    En,
}

impl Language {
    /// Supported language codes, in display order.
    pub const SUPPORTED: [&'static str; 2] = ["pt_BR", "en"];

    pub const ALL: [Language; 2] = [Language::PtBr, Language::En];

    /// The code handed to the speller (`pt_BR`, `en`).
    pub fn code(self) -> &'static str {
        match self {
            Language::PtBr => "pt_BR",
            Language::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = NumWordsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == s)
            .ok_or_else(|| NumWordsError::UnsupportedLanguage {
                requested: s.to_string(),
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
