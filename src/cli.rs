//! Command line interface for the fastspell binary.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::level_filters::LevelFilter;

use crate::config::Config;
use crate::dictionary::DEFAULT_DICTIONARY;
use crate::error::{Result, SpellError};
use crate::shell;
use crate::spellcheck::SpellCorrector;
use crate::typos::{Typo, TypoGenerator, VerifyReport, verify_corpus};

/// Misses listed in the plain-text verify report.
const MAX_LISTED_MISSES: usize = 20;

/// Suggests corrections for misspelled words, one word per line.
#[derive(Parser, Debug, Clone)]
#[command(name = "fastspell")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct FastspellArgs {
    /// Word list to load, one word per line
    #[arg(short, long, global = true, env = "FASTSPELL_DICTIONARY", default_value = DEFAULT_DICTIONARY)]
    pub dictionary: PathBuf,

    /// JSON file overriding the default tuning
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Runs the interactive prompt when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl FastspellArgs {
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print generated misspellings of dictionary words, one per line
    Typos(CorpusArgs),

    /// Check that every generated misspelling gets a correction
    Verify(VerifyArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// Number of misspellings to generate
    #[arg(short = 'n', long, default_value_t = 100)]
    pub count: usize,

    /// Random seed; the same seed gives the same corpus
    #[arg(long, default_value_t = 0)]
    pub seed: u64,
}

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(long, requires = "json")]
    pub pretty: bool,
}

pub fn execute(args: FastspellArgs) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let corrector = SpellCorrector::from_word_list_file(&args.dictionary, config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &args.command {
        None => shell::run(&corrector, io::stdin().lock(), &mut out)?,
        Some(Command::Typos(corpus)) => write_typos(&corrector, corpus, &mut out)?,
        Some(Command::Verify(verify)) => {
            let report = write_verify_report(&corrector, verify, &mut out)?;
            if !report.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn generate_corpus(corrector: &SpellCorrector, args: &CorpusArgs) -> Vec<Typo> {
    let words = corrector.dictionary().words();
    let mut generator = TypoGenerator::new(args.seed, corrector.config().typos.clone());
    generator.corpus(&words, args.count)
}

pub fn write_typos<W: Write>(
    corrector: &SpellCorrector,
    args: &CorpusArgs,
    out: &mut W,
) -> Result<()> {
    for typo in generate_corpus(corrector, args) {
        writeln!(out, "{}", typo.misspelled)?;
    }
    Ok(())
}

pub fn write_verify_report<W: Write>(
    corrector: &SpellCorrector,
    args: &VerifyArgs,
    out: &mut W,
) -> Result<VerifyReport> {
    let typos = generate_corpus(corrector, &args.corpus);
    let report = verify_corpus(corrector, &typos);

    if args.json {
        let json = if args.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
        .map_err(SpellError::Report)?;
        writeln!(out, "{}", json)?;
    } else {
        writeln!(out, "corrected {}/{} misspellings", report.corrected, report.total)?;
        for typo in report.misses.iter().take(MAX_LISTED_MISSES) {
            writeln!(out, "  {} -> {}: No Suggestion", typo.original, typo.misspelled)?;
        }
        if report.misses.len() > MAX_LISTED_MISSES {
            writeln!(out, "  ... {} more", report.misses.len() - MAX_LISTED_MISSES)?;
        }
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn dictionary_file(words: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{}", word).unwrap();
        }
        file
    }

    #[test]
    fn test_parse_defaults() {
        let args = FastspellArgs::try_parse_from(["fastspell", "-d", "/tmp/words"]).unwrap();
        assert_eq!(args.dictionary, PathBuf::from("/tmp/words"));
        assert!(args.command.is_none());
        assert_eq!(args.log_level(), LevelFilter::WARN);
    }

    #[test]
    fn test_parse_verify() {
        let args = FastspellArgs::try_parse_from([
            "fastspell", "verify", "-n", "25", "--seed", "7", "--json", "-d", "words.txt", "-vv",
        ])
        .unwrap();
        assert_eq!(args.dictionary, PathBuf::from("words.txt"));
        assert_eq!(args.log_level(), LevelFilter::DEBUG);
        match args.command {
            Some(Command::Verify(verify)) => {
                assert_eq!(verify.corpus.count, 25);
                assert_eq!(verify.corpus.seed, 7);
                assert!(verify.json);
                assert!(!verify.pretty);
            }
            other => panic!("expected verify, got {:?}", other),
        }
    }

    #[test]
    fn test_quiet_overrides_verbose() {
        let args = FastspellArgs::try_parse_from(["fastspell", "-q", "-vvv"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::ERROR);
    }

    #[test]
    fn test_pretty_requires_json() {
        assert!(FastspellArgs::try_parse_from(["fastspell", "verify", "--pretty"]).is_err());
    }

    #[test]
    fn test_missing_dictionary_is_fatal() {
        let args = FastspellArgs::try_parse_from([
            "fastspell",
            "-d",
            "/nonexistent/fastspell/words",
        ])
        .unwrap();
        assert!(matches!(
            execute(args),
            Err(SpellError::DictionaryNotFound { .. })
        ));
    }

    #[test]
    fn test_write_typos() {
        let file = dictionary_file(&["desk", "awoken", "apple"]);
        let corrector = SpellCorrector::from_word_list_file(file.path(), Config::default()).unwrap();
        let mut out = Vec::new();
        write_typos(&corrector, &CorpusArgs { count: 12, seed: 5 }, &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 12);
        for line in lines {
            assert_ne!(corrector.suggest(line), "No Suggestion", "{}", line);
        }
    }

    #[test]
    fn test_write_verify_report_json() {
        let file = dictionary_file(&["cat", "desk", "inspiration", "tomato"]);
        let corrector = SpellCorrector::from_word_list_file(file.path(), Config::default()).unwrap();
        let args = VerifyArgs {
            corpus: CorpusArgs { count: 40, seed: 11 },
            json: true,
            pretty: false,
        };
        let mut out = Vec::new();
        let report = write_verify_report(&corrector, &args, &mut out).unwrap();
        assert!(report.is_clean());

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["total"], 40);
        assert_eq!(json["corrected"], 40);
        assert_eq!(json["misses"].as_array().map(Vec::len), Some(0));
    }

    #[test]
    fn test_write_verify_report_text() {
        let file = dictionary_file(&["cat"]);
        let corrector = SpellCorrector::from_word_list_file(file.path(), Config::default()).unwrap();
        let args = VerifyArgs {
            corpus: CorpusArgs { count: 3, seed: 1 },
            json: false,
            pretty: false,
        };
        let mut out = Vec::new();
        write_verify_report(&corrector, &args, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "corrected 3/3 misspellings\n");
    }
}
