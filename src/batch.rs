//! Stemming many words at once.
//!
//! Words are independent of each other, so large batches are spread over the
//! rayon thread pool. Output order always matches input order.

use log::debug;
use rayon::prelude::*;

use crate::config::{DEFAULT_PARALLEL_THRESHOLD, StemmerConfig};
use crate::error::Result;
use crate::porter::PorterStemmer;
use crate::stemmer::Stemmer;

/// Applies a [`Stemmer`] to slices of words.
#[derive(Debug, Clone)]
pub struct BatchStemmer<S: Stemmer> {
    stemmer: S,
    parallel_threshold: usize,
}

impl<S: Stemmer> BatchStemmer<S> {
    /// Wrap a stemmer with the default parallel threshold.
    pub fn new(stemmer: S) -> Self {
        BatchStemmer {
            stemmer,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Set the batch size from which work runs in parallel.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    /// Get the wrapped stemmer.
    pub fn stemmer(&self) -> &S {
        &self.stemmer
    }

    fn is_parallel(&self, len: usize) -> bool {
        let parallel = len >= self.parallel_threshold;
        debug!(
            "{} batch of {len} words ({})",
            self.stemmer.name(),
            if parallel { "parallel" } else { "sequential" }
        );
        parallel
    }

    /// Stem every word.
    pub fn stem_all<W: AsRef<str> + Sync>(&self, words: &[W]) -> Vec<String> {
        if self.is_parallel(words.len()) {
            words
                .par_iter()
                .map(|word| self.stemmer.stem(word.as_ref()))
                .collect()
        } else {
            words
                .iter()
                .map(|word| self.stemmer.stem(word.as_ref()))
                .collect()
        }
    }

    /// Stem every word, failing on the first word the stemmer rejects.
    pub fn try_stem_all<W: AsRef<str> + Sync>(&self, words: &[W]) -> Result<Vec<String>> {
        if self.is_parallel(words.len()) {
            words
                .par_iter()
                .map(|word| self.stemmer.try_stem(word.as_ref()))
                .collect()
        } else {
            words
                .iter()
                .map(|word| self.stemmer.try_stem(word.as_ref()))
                .collect()
        }
    }
}

impl BatchStemmer<PorterStemmer> {
    /// Build a Porter batch stemmer from a configuration.
    pub fn from_config(config: StemmerConfig) -> Result<Self> {
        let threshold = config.parallel_threshold;
        let stemmer = PorterStemmer::with_config(config)?;
        Ok(BatchStemmer::new(stemmer).with_parallel_threshold(threshold))
    }
}

impl Default for BatchStemmer<PorterStemmer> {
    fn default() -> Self {
        Self::new(PorterStemmer::new())
    }
}
