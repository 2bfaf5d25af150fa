use super::{Output, Profile};
use crate::error::NumWordsError;
use colored::Colorize;

pub(super) fn print_output(profile: &Profile, output: &Output) {
    match output {
        Output::Languages(codes) => {
            for code in codes.iter() {
                println!("{}", code);
            }
        }
        Output::Words(words) => println!("{}", format_words(profile, words)),
    }
}

pub(super) fn print_error(profile: &Profile, error: &NumWordsError) {
    let line = format!("{} {}", "Error:".red(), error);
    if profile.errors_to_stdout {
        println!("{}", line);
    } else {
        eprintln!("{}", line);
    }
}

pub(super) fn format_words(profile: &Profile, words: &str) -> String {
    match profile.label {
        Some(label) => format!("{}{}", label, words),
        None => words.to_string(),
    }
}
