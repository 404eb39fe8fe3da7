//! # fastspell
//!
//! Dictionary-backed spelling correction for three kinds of typo: wrong
//! casing ("CaT"), repeated letters ("ddesskk") and wrong vowels ("ewokan"),
//! in any combination ("InnSpERataen").
//!
//! The dictionary lives in a [`Trie`], so checking a candidate costs
//! O(word length) regardless of dictionary size. [`SpellCorrector`] chains the
//! [`MutationRule`]s in every order and returns the first candidate the
//! dictionary knows.
//!
//! ```
//! use fastspell::{Config, SpellCorrector};
//!
//! let corrector = SpellCorrector::from_words(["cat", "desk", "inspiration"], Config::default())?;
//! assert_eq!(corrector.suggest("CaT"), "cat");
//! assert_eq!(corrector.suggest("ddesskk"), "desk");
//! assert_eq!(corrector.suggest("InnSpERataen"), "inspiration");
//! assert_eq!(corrector.suggest("zzzxxxqqq"), "No Suggestion");
//! # Ok::<(), fastspell::SpellError>(())
//! ```

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod mutation;
pub mod shell;
pub mod spellcheck;
pub mod trie;
pub mod typos;

pub use config::Config;
pub use error::{Result, SpellError};
pub use mutation::{CandidateSet, MutationRule};
pub use spellcheck::{NO_SUGGESTION, SpellCorrector, SuggestedCorrection};
pub use trie::Trie;
pub use typos::{Typo, TypoConfig, TypoGenerator};
