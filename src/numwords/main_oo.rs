use clap::Parser;
use numwords::cli::{self, args::ObjectArgs};

fn main() {
    let args = ObjectArgs::parse();
    std::process::exit(cli::run(&cli::OBJECT, args.number, &args.common));
}
