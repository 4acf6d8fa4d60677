//! Porter stemming algorithm implementation.
//!
//! This module implements the suffix stripping algorithm published by
//! M.F. Porter in 1980 for reducing English words to their stems.
//!
//! # Algorithm
//!
//! After lowercasing, every `y` acting as a consonant is replaced by the
//! marker `Y` (see [`measure::mark_consonant_y`]), then five steps rewrite
//! the word in order:
//! 1. Plurals and -ed/-ing suffixes, then terminal -y
//! 2. -ational → -ate, -tional → -tion, etc.
//! 3. -icate → -ic, -ative → "", etc.
//! 4. Remove -al, -ance, -ence, etc.
//! 5. Remove final -e and -ll
//!
//! Each step sees the word as left by the previous one. A final lowercase
//! turns the marker back into `y`.
//!
//! # Examples
//!
//! ```
//! use stemma::porter::PorterStemmer;
//! use stemma::stemmer::Stemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("traditional"), "tradit");
//! ```

pub mod measure;
pub mod rules;
pub mod steps;

use log::{debug, trace};

use crate::config::{InputPolicy, StemmerConfig};
use crate::error::{Result, StemmaError};
use crate::stemmer::Stemmer;

use self::measure::{mark_consonant_y, unmark_consonant_y};
use self::steps::{step1ab, step1c, step2, step3, step4, step5};

type Step = fn(&str) -> String;

/// The rewrite steps, in the order they run.
pub const PIPELINE: [(&str, Step); 6] = [
    ("step1ab", step1ab),
    ("step1c", step1c),
    ("step2", step2),
    ("step3", step3),
    ("step4", step4),
    ("step5", step5),
];

/// Porter stemming algorithm implementation.
///
/// The stemmer holds only its configuration, so one instance can be shared
/// freely between threads.
#[derive(Debug, Clone, Default)]
pub struct PorterStemmer {
    config: StemmerConfig,
}

impl PorterStemmer {
    /// Create a new Porter stemmer with the default configuration.
    pub fn new() -> Self {
        PorterStemmer {
            config: StemmerConfig::default(),
        }
    }

    /// Create a Porter stemmer from a configuration.
    pub fn with_config(config: StemmerConfig) -> Result<Self> {
        config.validate()?;
        Ok(PorterStemmer { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &StemmerConfig {
        &self.config
    }

    fn check_input(&self, word: &str) -> Result<()> {
        if word.is_empty() {
            return Err(StemmaError::invalid_input("empty word"));
        }
        if self.config.input_policy == InputPolicy::Reject {
            if let Some(c) = word.chars().find(|c| !c.is_ascii_alphabetic()) {
                return Err(StemmaError::non_alphabetic(word, c));
            }
        }
        Ok(())
    }

    fn run(&self, word: &str) -> String {
        let word = word.to_lowercase();
        if word.chars().count() < self.config.min_word_len {
            return word;
        }

        let marked = PIPELINE
            .iter()
            .fold(mark_consonant_y(&word), |current, (name, step)| {
                let next = step(&current);
                if next != current {
                    trace!("{name}: {current} -> {next}");
                }
                next
            });

        unmark_consonant_y(&marked)
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        match self.try_stem(word) {
            Ok(stem) => stem,
            Err(e) => {
                debug!("{e}; returning the word unstemmed");
                word.to_lowercase()
            }
        }
    }

    fn try_stem(&self, word: &str) -> Result<String> {
        self.check_input(word)?;
        Ok(self.run(word))
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
