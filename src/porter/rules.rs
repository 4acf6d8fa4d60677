//! Suffix rule tables for steps 2, 3 and 4.
//!
//! A table groups its rules into buckets keyed by one character of the word
//! (the last or the second-to-last). Within a bucket the first rule whose
//! suffix matches is selected, and no other rule is tried even when the
//! selected rule's measure guard then fails.

use log::trace;

use crate::porter::measure::degree;

/// Which character of the word picks the bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The final character.
    Last,
    /// The second-to-last character.
    Penultimate,
}

/// A single `suffix -> replacement` rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    /// Suffix to match.
    pub suffix: &'static str,
    /// Text written in place of the suffix.
    pub replacement: &'static str,
    /// The rewrite needs `degree(stem)` strictly greater than this.
    pub min_degree: usize,
    /// When non-empty, the stem must end in one of these characters for the
    /// suffix to match at all.
    pub preceded_by: &'static [char],
}

impl SuffixRule {
    /// Rule guarded by `degree(stem) > min_degree`.
    pub const fn new(suffix: &'static str, replacement: &'static str, min_degree: usize) -> Self {
        SuffixRule {
            suffix,
            replacement,
            min_degree,
            preceded_by: &[],
        }
    }

    /// Restrict the rule to stems ending in one of `chars`.
    pub const fn after(mut self, chars: &'static [char]) -> Self {
        self.preceded_by = chars;
        self
    }

    /// The stem left by removing this rule's suffix, if the suffix matches.
    pub fn stem<'a>(&self, word: &'a str) -> Option<&'a str> {
        let stem = word.strip_suffix(self.suffix)?;
        if self.preceded_by.is_empty() || stem.ends_with(self.preceded_by) {
            Some(stem)
        } else {
            None
        }
    }
}

/// An ordered, bucketed list of suffix rules.
#[derive(Debug, Clone, Copy)]
pub struct RuleTable {
    name: &'static str,
    dispatch: Dispatch,
    buckets: &'static [(char, &'static [SuffixRule])],
}

impl RuleTable {
    pub const fn new(
        name: &'static str,
        dispatch: Dispatch,
        buckets: &'static [(char, &'static [SuffixRule])],
    ) -> Self {
        RuleTable {
            name,
            dispatch,
            buckets,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rules of the bucket selected by `word`, empty if there is none.
    pub fn bucket(&self, word: &str) -> &'static [SuffixRule] {
        let key = match self.dispatch {
            Dispatch::Last => word.chars().next_back(),
            Dispatch::Penultimate => word.chars().rev().nth(1),
        };

        key.and_then(|key| self.buckets.iter().find(|(c, _)| *c == key))
            .map(|(_, rules)| *rules)
            .unwrap_or(&[])
    }

    /// The rule selected for `word`, before its measure guard is checked.
    pub fn find(&self, word: &str) -> Option<&'static SuffixRule> {
        self.bucket(word).iter().find(|rule| rule.stem(word).is_some())
    }

    /// Apply the selected rule if its guard holds, otherwise return the
    /// word unchanged.
    pub fn apply(&self, word: &str) -> String {
        let Some(rule) = self.find(word) else {
            return word.to_string();
        };
        let Some(stem) = rule.stem(word) else {
            return word.to_string();
        };

        if degree(stem) > rule.min_degree {
            trace!(
                "{}: {word} -{} +{}",
                self.name, rule.suffix, rule.replacement
            );
            format!("{stem}{}", rule.replacement)
        } else {
            word.to_string()
        }
    }
}
