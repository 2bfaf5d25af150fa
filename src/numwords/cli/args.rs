use crate::model::{Decimal, Language, Number};
use clap::builder::PossibleValuesParser;
use clap::{Args, Parser};

/// "0.1.0" for releases, "0.1.0@abc1234 2024-01-15 14:30" for dev builds.
const VERSION: &str = env!("NUMWORDS_VERSION");

/// Flags shared by both binaries.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Conversion language [default: from config, pt_BR]
    #[arg(short, long, value_parser = PossibleValuesParser::new(Language::SUPPORTED))]
    pub language: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the supported language codes and exit
    #[arg(long)]
    pub list_languages: bool,
}

#[derive(Parser, Debug)]
#[command(name = "numwords", version = VERSION)]
#[command(about = "Convert a number to words (imperative mode)", long_about = None)]
pub struct ImperativeArgs {
    /// Number to be converted (e.g. 9999999.99)
    #[arg(short, long, allow_negative_numbers = true, value_parser = parse_number)]
    pub number: Option<Number>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Parser, Debug)]
#[command(name = "numwords-oo", version = VERSION)]
#[command(about = "Convert numbers to words in different languages (OO mode)", long_about = None)]
pub struct ObjectArgs {
    /// Number to be converted (e.g. 1234.56)
    #[arg(
        short,
        long,
        allow_negative_numbers = true,
        value_parser = parse_number,
        required_unless_present = "list_languages"
    )]
    pub number: Option<Number>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Parses a numeric literal, keeping as much of it as possible.
///
/// Integer literals stay integers, plain decimals keep their exact digits,
/// and anything else `f64` understands (`1e6`, `inf`) becomes a float.
pub fn parse_number(s: &str) -> Result<Number, String> {
    let s = s.trim();
    if let Ok(n) = s.parse::<i128>() {
        return Ok(Number::Int(n));
    }
    if let Ok(d) = s.parse::<Decimal>() {
        return Ok(Number::Decimal(d));
    }
    s.parse::<f64>()
        .map(Number::Float)
        .map_err(|_| format!("'{}' is not a number", s))
}
