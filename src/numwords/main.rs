use clap::Parser;
use numwords::cli::{self, args::ImperativeArgs};

fn main() {
    let args = ImperativeArgs::parse();
    std::process::exit(cli::run(&cli::IMPERATIVE, args.number, &args.common));
}
