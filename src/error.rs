use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while setting up a spell corrector.
///
/// Lookups themselves never fail: a word that cannot be corrected is reported
/// as [`SuggestedCorrection::NoSuggestion`](crate::SuggestedCorrection), not as an error.
#[derive(Debug, Error)]
pub enum SpellError {
    #[error("dictionary file not found: {}", path.display())]
    DictionaryNotFound { path: PathBuf },

    #[error("failed to read dictionary {}: {source}", path.display())]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dictionary {} contains no words", path.display())]
    EmptyDictionary { path: PathBuf },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[source] serde_json::Error),

    #[error("failed to serialize report: {0}")]
    Report(#[source] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl SpellError {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SpellError::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, SpellError>;
