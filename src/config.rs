use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellError};
use crate::mutation::MutationRule;
use crate::typos::TypoConfig;

/// Tuning knobs for the corrector and the typo generator.
///
/// Every field has a default, so a configuration file only needs to name the
/// values it overrides:
///
/// ```json
/// { "pipeline_length": 2, "max_candidates": 50000 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of mutation rules chained in each pipeline.
    pub pipeline_length: usize,
    /// Longest run of a repeated character kept by the collapse rule.
    pub max_run_length: usize,
    /// Most vowel positions substituted in one word.
    pub max_vowel_substitutions: usize,
    /// Upper bound on the candidates held by a single pipeline stage.
    pub max_candidates: usize,
    pub typos: TypoConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pipeline_length: MutationRule::ALL.len(),
            max_run_length: 3,
            max_vowel_substitutions: 3,
            max_candidates: 50_000,
            typos: TypoConfig::default(),
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SpellError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Config = serde_json::from_str(&content).map_err(SpellError::ConfigParse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let rule_count = MutationRule::ALL.len();
        if self.pipeline_length == 0 || self.pipeline_length > rule_count {
            return Err(SpellError::config(format!(
                "pipeline_length must be between 1 and {}, got {}",
                rule_count, self.pipeline_length
            )));
        }
        if self.max_run_length == 0 {
            return Err(SpellError::config("max_run_length must be at least 1"));
        }
        if self.max_vowel_substitutions == 0 {
            return Err(SpellError::config("max_vowel_substitutions must be at least 1"));
        }
        if self.max_candidates == 0 {
            return Err(SpellError::config("max_candidates must be at least 1"));
        }
        self.typos.validate()
    }
}
