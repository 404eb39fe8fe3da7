use rayon::prelude::*;
use std::fmt;
use std::path::Path;
use tracing::debug;

use crate::config::Config;
use crate::dictionary;
use crate::error::Result;
use crate::mutation::{self, CandidateSet, MutationRule};
use crate::trie::Trie;

pub const NO_SUGGESTION: &str = "No Suggestion";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestedCorrection {
    NoSuggestion,
    Word(String),
}

impl SuggestedCorrection {
    pub fn word(&self) -> Option<&str> {
        match self {
            SuggestedCorrection::NoSuggestion => None,
            SuggestedCorrection::Word(word) => Some(word),
        }
    }
}

impl fmt::Display for SuggestedCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestedCorrection::NoSuggestion => f.write_str(NO_SUGGESTION),
            SuggestedCorrection::Word(word) => f.write_str(word),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpellCorrector {
    dictionary: Trie,
    config: Config,
    pipelines: Vec<Vec<MutationRule>>, // every ordering of the mutation rules
}

impl SpellCorrector {
    pub fn new(dictionary: Trie, config: Config) -> Result<Self> {
        config.validate()?;
        let pipelines = mutation::permutations(&MutationRule::ALL, config.pipeline_length);
        Ok(SpellCorrector {
            dictionary,
            config,
            pipelines,
        })
    }

    pub fn from_words<I, S>(words: I, config: Config) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Trie::build(dictionary::normalize_words(words)), config)
    }

    pub fn from_word_list_file<P: AsRef<Path>>(file_path: P, config: Config) -> Result<Self> {
        config.validate()?;
        let dictionary = dictionary::load_trie(file_path)?;
        Self::new(dictionary, config)
    }

    pub fn dictionary(&self) -> &Trie {
        &self.dictionary
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    /// Runs `word` through every pipeline of mutation rules and returns the
    /// first candidate found in the dictionary.
    pub fn correct(&self, word: &str) -> SuggestedCorrection {
        self.search(word).0
    }

    pub fn suggest(&self, word: &str) -> String {
        self.correct(word).to_string()
    }

    pub fn suggest_word_corrections(&self, words: &[String]) -> Vec<String> {
        words.par_iter().map(|word| self.suggest(word)).collect()
    }

    /// Returns the correction along with the number of candidates generated
    /// on the way to it.
    fn search(&self, word: &str) -> (SuggestedCorrection, usize) {
        let mut generated = 0;
        for pipeline in &self.pipelines {
            let (hit, candidates) = self.run_pipeline(word, pipeline);
            generated += candidates;
            if let Some(hit) = hit {
                debug!(word, suggestion = %hit, generated, "found correction");
                return (SuggestedCorrection::Word(hit), generated);
            }
        }
        debug!(word, generated, "no correction found");
        (SuggestedCorrection::NoSuggestion, generated)
    }

    fn run_pipeline(&self, word: &str, pipeline: &[MutationRule]) -> (Option<String>, usize) {
        let mut candidates = CandidateSet::seed(word, self.config.max_candidates);
        for &rule in pipeline {
            let input_len = candidates.len();
            let vowel_rounds = match rule {
                MutationRule::SwapVowels => candidates
                    .iter()
                    .map(mutation::vowel_positions)
                    .max()
                    .unwrap_or(0)
                    .min(self.config.max_vowel_substitutions),
                _ => 0,
            };

            candidates = rule.apply(&candidates, &self.config);
            if let Some(hit) = self.first_hit(&candidates, 0) {
                return (Some(hit), candidates.len());
            }

            // Each further round reaches one more substituted vowel position.
            let mut frontier = input_len;
            for _ in 1..vowel_rounds {
                let end = candidates.len();
                if rule.expand(&mut candidates, frontier, &self.config) == 0 {
                    break;
                }
                if let Some(hit) = self.first_hit(&candidates, end) {
                    return (Some(hit), candidates.len());
                }
                frontier = end;
            }

            if candidates.is_full() {
                debug!(
                    word,
                    %rule,
                    limit = candidates.limit(),
                    "candidate limit reached"
                );
            }
        }
        (None, candidates.len())
    }

    fn first_hit(&self, candidates: &CandidateSet, from: usize) -> Option<String> {
        candidates
            .iter_from(from)
            .find(|candidate| self.dictionary.contains(candidate))
            .map(str::to_owned)
    }
}
