//! Misspelling generator used to exercise the corrector.

use rand::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SpellError};
use crate::mutation::VOWELS;
use crate::spellcheck::{NO_SUGGESTION, SpellCorrector};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypoConfig {
    pub vowel_swap_probability: f64,
    pub max_vowel_swaps: usize,
    pub repeat_probability: f64,
    pub max_extra_repeats: usize,
    pub uppercase_probability: f64,
}

impl Default for TypoConfig {
    fn default() -> Self {
        Self {
            vowel_swap_probability: 0.3,
            max_vowel_swaps: 2,
            repeat_probability: 0.2,
            max_extra_repeats: 2,
            uppercase_probability: 0.3,
        }
    }
}

impl TypoConfig {
    pub fn validate(&self) -> Result<()> {
        let probabilities = [
            ("vowel_swap_probability", self.vowel_swap_probability),
            ("repeat_probability", self.repeat_probability),
            ("uppercase_probability", self.uppercase_probability),
        ];
        for (name, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(SpellError::config(format!(
                    "typos.{} must be between 0 and 1, got {}",
                    name, p
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Typo {
    pub original: String,
    pub misspelled: String,
}

pub struct TypoGenerator {
    rng: StdRng,
    config: TypoConfig,
}

impl TypoGenerator {
    pub fn new(seed: u64, config: TypoConfig) -> Self {
        TypoGenerator {
            rng: StdRng::seed_from_u64(seed),
            config,
        }
    }

    /// Swaps vowels, repeats letters, then randomizes case.
    pub fn misspell(&mut self, word: &str) -> String {
        let mut chars: Vec<char> = word.chars().collect();
        self.swap_vowels(&mut chars);
        let mut chars = self.repeat_letters(chars);
        self.randomize_case(&mut chars);
        chars.into_iter().collect()
    }

    /// Misspells `count` words drawn at random from `words`.
    pub fn corpus(&mut self, words: &[String], count: usize) -> Vec<Typo> {
        if words.is_empty() {
            return Vec::new();
        }
        (0..count)
            .map(|_| {
                let original = words[self.rng.random_range(0..words.len())].clone();
                let misspelled = self.misspell(&original);
                Typo {
                    original,
                    misspelled,
                }
            })
            .collect()
    }

    fn swap_vowels(&mut self, chars: &mut [char]) {
        let mut swaps = 0;
        for ch in chars.iter_mut() {
            if swaps >= self.config.max_vowel_swaps {
                break;
            }
            if !VOWELS.contains(ch) || !self.rng.random_bool(self.config.vowel_swap_probability) {
                continue;
            }
            let current = *ch;
            let others: Vec<char> = VOWELS.iter().copied().filter(|&v| v != current).collect();
            *ch = others[self.rng.random_range(0..others.len())];
            swaps += 1;
        }
    }

    fn repeat_letters(&mut self, chars: Vec<char>) -> Vec<char> {
        let mut repeated = Vec::with_capacity(chars.len() * 2);
        for ch in chars {
            repeated.push(ch);
            if self.config.max_extra_repeats > 0
                && ch.is_alphabetic()
                && self.rng.random_bool(self.config.repeat_probability)
            {
                let extra = self.rng.random_range(1..=self.config.max_extra_repeats);
                repeated.extend(std::iter::repeat_n(ch, extra));
            }
        }
        repeated
    }

    fn randomize_case(&mut self, chars: &mut [char]) {
        for ch in chars.iter_mut() {
            if ch.is_ascii_lowercase() && self.rng.random_bool(self.config.uppercase_probability) {
                *ch = ch.to_ascii_uppercase();
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub total: usize,
    pub corrected: usize,
    pub misses: Vec<Typo>,
}

impl VerifyReport {
    pub fn is_clean(&self) -> bool {
        self.misses.is_empty()
    }
}

/// Corrects every typo in parallel and collects the ones left without a
/// suggestion.
pub fn verify_corpus(corrector: &SpellCorrector, typos: &[Typo]) -> VerifyReport {
    let misspelled: Vec<String> = typos.iter().map(|t| t.misspelled.clone()).collect();
    let suggestions = corrector.suggest_word_corrections(&misspelled);
    let misses: Vec<Typo> = typos
        .iter()
        .zip(&suggestions)
        .filter(|(_, suggestion)| suggestion.as_str() == NO_SUGGESTION)
        .map(|(typo, _)| typo.clone())
        .collect();
    let report = VerifyReport {
        total: typos.len(),
        corrected: typos.len() - misses.len(),
        misses,
    };
    info!(
        total = report.total,
        corrected = report.corrected,
        misses = report.misses.len(),
        "verified misspelling corpus"
    );
    report
}
