//! The stemmer abstraction shared by single-word and batch stemming.

use crate::error::Result;

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    ///
    /// Never fails: input the stemmer cannot handle comes back lowercased.
    fn stem(&self, word: &str) -> String;

    /// Stem a word, reporting input the stemmer refuses to handle.
    fn try_stem(&self, word: &str) -> Result<String> {
        Ok(self.stem(word))
    }

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

impl<S: Stemmer + ?Sized> Stemmer for Box<S> {
    fn stem(&self, word: &str) -> String {
        (**self).stem(word)
    }

    fn try_stem(&self, word: &str) -> Result<String> {
        (**self).try_stem(word)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
