//! Configuration for stemmers and batch stemming.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StemmaError};

/// Words shorter than this are returned without stemming.
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// Batch size at which [`BatchStemmer`](crate::batch::BatchStemmer) switches to rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// How characters outside `a..=z` are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputPolicy {
    /// Keep the characters and classify them as consonants.
    #[default]
    PassThrough,

    /// Fail `try_stem` with a non-alphabetic error.
    Reject,
}

/// Configuration for the Porter stemmer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StemmerConfig {
    /// Minimum length (in characters) a word needs before any rule is applied.
    pub min_word_len: usize,

    /// Treatment of non-alphabetic characters.
    pub input_policy: InputPolicy,

    /// Number of words from which batch stemming runs in parallel.
    pub parallel_threshold: usize,
}

impl Default for StemmerConfig {
    fn default() -> Self {
        Self {
            min_word_len: DEFAULT_MIN_WORD_LEN,
            input_policy: InputPolicy::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl StemmerConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: StemmerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Set the minimum word length.
    pub fn min_word_len(mut self, len: usize) -> Self {
        self.min_word_len = len;
        self
    }

    /// Set the input policy.
    pub fn input_policy(mut self, policy: InputPolicy) -> Self {
        self.input_policy = policy;
        self
    }

    /// Set the parallel threshold.
    pub fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(StemmaError::invalid_config(
                "parallel_threshold must be positive",
            ));
        }
        Ok(())
    }
}
