//! # CLI Layer
//!
//! Shared plumbing for the two binaries. They accept the same flags and
//! differ only in their [`Profile`]:
//!
//! | | `numwords` | `numwords-oo` |
//! |---|---|---|
//! | front end | [`number_to_words`] | [`NumberToWords`] |
//! | `--number` | optional | required |
//! | result line | bare | `Result: ...` |
//! | errors | stderr | stdout |
//!
//! Both exit 1 on validation or conversion failure. Clap exits 2 on bad flags.
//!
//! This is the only module that writes to stdout/stderr or sets up logging.

pub mod args;
mod print;

use crate::api::{number_to_words, NumberToWords};
use crate::config::{config_dir, NumWordsConfig, CONFIG_FILENAME};
use crate::error::Result;
use crate::model::{Language, Number};
use crate::validate;
use args::CommonArgs;
use tracing::{debug, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontEnd {
    Function,
    Object,
}

/// How a binary drives the library and reports back.
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub front_end: FrontEnd,
    pub label: Option<&'static str>,
    pub errors_to_stdout: bool,
}

pub const IMPERATIVE: Profile = Profile {
    front_end: FrontEnd::Function,
    label: None,
    errors_to_stdout: false,
};

pub const OBJECT: Profile = Profile {
    front_end: FrontEnd::Object,
    label: Some("Result: "),
    errors_to_stdout: true,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Languages(&'static [&'static str]),
    Words(String),
}

/// Runs one invocation and returns the process exit code.
pub fn run(profile: &Profile, number: Option<Number>, common: &CommonArgs) -> i32 {
    init_logging(common.verbose);

    match execute(profile, number, common, load_config) {
        Ok(output) => {
            print::print_output(profile, &output);
            0
        }
        Err(e) => {
            debug!(kind = ?e.kind(), "invocation failed");
            print::print_error(profile, &e);
            1
        }
    }
}

/// Parse → validate → convert, without touching the terminal.
///
/// `load_config` is only called when no `--language` was given, so an
/// explicit language never depends on the config file.
pub fn execute<F>(
    profile: &Profile,
    number: Option<Number>,
    common: &CommonArgs,
    load_config: F,
) -> Result<Output>
where
    F: FnOnce() -> NumWordsConfig,
{
    if common.list_languages {
        return Ok(Output::Languages(&Language::SUPPORTED));
    }

    let language = match &common.language {
        Some(language) => language.clone(),
        None => load_config().default_language,
    };
    debug!(front_end = ?profile.front_end, %language, "converting");

    let number = validate::optional_number(number)?;
    let words = match profile.front_end {
        FrontEnd::Function => number_to_words(number, &language)?,
        FrontEnd::Object => NumberToWords::new(number, &language)?.convert()?,
    };
    Ok(Output::Words(words))
}

/// A broken config file is not fatal: it falls back to the defaults.
fn load_config() -> NumWordsConfig {
    NumWordsConfig::load_default().unwrap_or_else(|e| {
        let path = config_dir().map(|dir| dir.join(CONFIG_FILENAME));
        warn!(path = ?path, error = %e, "ignoring unreadable config, using defaults");
        NumWordsConfig::default()
    })
}

/// Logs go to stderr so stdout only ever carries the result.
fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}
