//! # Numwords Architecture
//!
//! Numwords turns a number into its written cardinal form in Brazilian
//! Portuguese (`pt_BR`) or English (`en`). The spelling itself is delegated to
//! the `cardinal` crate; this crate validates input, maps language codes,
//! normalizes errors, and drives two small binaries.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs and main_oo.rs)          │
//! │  - Parses flags, loads config, prints, picks exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front Ends (api.rs)                                        │
//! │  - number_to_words(): plain function                        │
//! │  - NumberToWords: validate on new(), spell on convert()     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Validation (validate.rs) and Dispatch (speller.rs)         │
//! │  - Numeric check, then language check                       │
//! │  - Speller failures collapse into one Conversion error      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Speller trait → cardinal crate                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Callers only ever see three conversion errors:
//!
//! - [`NumWordsError::NotNumeric`](error::NumWordsError::NotNumeric): a type error
//! - [`NumWordsError::UnsupportedLanguage`](error::NumWordsError::UnsupportedLanguage): a value error listing `pt_BR, en`
//! - [`NumWordsError::Conversion`](error::NumWordsError::Conversion): a value error wrapping the speller's message
//!
//! ## Module Overview
//!
//! - [`api`]: the two front ends
//! - [`validate`]: numeric and language checks
//! - [`speller`]: the spelling seam and error normalization
//! - [`model`]: `Language`, and `Number`/`Decimal` re-exported from `cardinal`
//! - [`config`]: `config.json` with the default language
//! - [`error`]: error types
//! - [`cli`]: argument parsing and printing shared by both binaries

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod speller;
pub mod validate;

pub use api::{number_to_words, NumberToWords};
pub use error::{ErrorKind, NumWordsError, Result};
pub use model::{Decimal, Language, Number};
