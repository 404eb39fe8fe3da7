use clap::Parser;
use fastspell::cli::{self, FastspellArgs};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = FastspellArgs::parse();

    // stdout carries prompts and suggestions only
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    match cli::execute(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
