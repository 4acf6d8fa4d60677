//! The five rewrite steps of the Porter algorithm.
//!
//! Every step takes a lowercase, consonant-Y marked word and returns the
//! rewritten word. A step that does not apply returns its input unchanged,
//! and no step indexes outside the word, so short words are safe everywhere.

use crate::porter::measure::{cvc, degree, doublec, vowelinstem};
use crate::porter::rules::{Dispatch, RuleTable, SuffixRule};

/// Double suffixes mapped to single ones, e.g. -ization to -ize.
pub const STEP2_RULES: RuleTable = RuleTable::new(
    "step2",
    Dispatch::Penultimate,
    &[
        (
            'a',
            &[
                SuffixRule::new("ational", "ate", 0),
                SuffixRule::new("tional", "tion", 0),
            ],
        ),
        (
            'c',
            &[
                SuffixRule::new("enci", "ence", 0),
                SuffixRule::new("anci", "ance", 0),
            ],
        ),
        ('e', &[SuffixRule::new("izer", "ize", 0)]),
        (
            'l',
            &[
                SuffixRule::new("abli", "able", 0),
                SuffixRule::new("alli", "al", 0),
                SuffixRule::new("entli", "ent", 0),
                SuffixRule::new("eli", "e", 0),
                SuffixRule::new("ousli", "ous", 0),
            ],
        ),
        (
            'o',
            &[
                SuffixRule::new("ization", "ize", 0),
                SuffixRule::new("ation", "ate", 0),
                SuffixRule::new("ator", "ate", 0),
            ],
        ),
        (
            's',
            &[
                SuffixRule::new("alism", "al", 0),
                SuffixRule::new("iveness", "ive", 0),
                SuffixRule::new("fulness", "ful", 0),
                SuffixRule::new("ousness", "ous", 0),
            ],
        ),
        (
            't',
            &[
                SuffixRule::new("aliti", "al", 0),
                SuffixRule::new("iviti", "ive", 0),
                SuffixRule::new("biliti", "ble", 0),
            ],
        ),
    ],
);

/// -ic-, -ful, -ness and friends.
pub const STEP3_RULES: RuleTable = RuleTable::new(
    "step3",
    Dispatch::Last,
    &[
        (
            'e',
            &[
                SuffixRule::new("icate", "ic", 0),
                SuffixRule::new("ative", "", 0),
                SuffixRule::new("alize", "al", 0),
            ],
        ),
        ('i', &[SuffixRule::new("iciti", "ic", 0)]),
        (
            'l',
            &[SuffixRule::new("ical", "ic", 0), SuffixRule::new("ful", "", 0)],
        ),
        ('s', &[SuffixRule::new("ness", "", 0)]),
    ],
);

/// Suffixes removed from stems with `m > 1`.
pub const STEP4_RULES: RuleTable = RuleTable::new(
    "step4",
    Dispatch::Penultimate,
    &[
        ('a', &[SuffixRule::new("al", "", 1)]),
        (
            'c',
            &[SuffixRule::new("ance", "", 1), SuffixRule::new("ence", "", 1)],
        ),
        ('e', &[SuffixRule::new("er", "", 1)]),
        ('i', &[SuffixRule::new("ic", "", 1)]),
        (
            'l',
            &[SuffixRule::new("able", "", 1), SuffixRule::new("ible", "", 1)],
        ),
        (
            'n',
            &[
                SuffixRule::new("ant", "", 1),
                SuffixRule::new("ement", "", 1),
                SuffixRule::new("ment", "", 1),
                SuffixRule::new("ent", "", 1),
            ],
        ),
        (
            'o',
            &[
                SuffixRule::new("ion", "", 1).after(&['s', 't']),
                SuffixRule::new("ou", "", 1),
            ],
        ),
        ('s', &[SuffixRule::new("ism", "", 1)]),
        (
            't',
            &[SuffixRule::new("ate", "", 1), SuffixRule::new("iti", "", 1)],
        ),
        ('u', &[SuffixRule::new("ous", "", 1)]),
        ('v', &[SuffixRule::new("ive", "", 1)]),
        ('z', &[SuffixRule::new("ize", "", 1)]),
    ],
);

/// Step 1a/1b: plurals, then -eed, -ed and -ing.
///
/// ```
/// use stemma::porter::steps::step1ab;
///
/// assert_eq!(step1ab("caresses"), "caress");
/// assert_eq!(step1ab("agreed"), "agree");
/// assert_eq!(step1ab("matting"), "mat");
/// ```
pub fn step1ab(word: &str) -> String {
    let mut word = strip_plural(word);

    if word.ends_with("eed") {
        if degree(&word[..word.len() - 3]) > 0 {
            word.pop();
        }
        return word;
    }

    let suffix_len = if word.ends_with("ed") {
        2
    } else if word.ends_with("ing") {
        3
    } else {
        return word;
    };

    let stem = &word[..word.len() - suffix_len];
    if !vowelinstem(stem) {
        return word;
    }

    let mut stem = stem.to_string();
    if stem.ends_with("at") || stem.ends_with("bl") || stem.ends_with("iz") {
        stem.push('e');
    } else if doublec(&stem) && !stem.ends_with(['l', 's', 'z']) {
        stem.pop();
    } else if degree(&stem) == 1 && cvc(&stem) {
        stem.push('e');
    }
    stem
}

fn strip_plural(word: &str) -> String {
    if word.ends_with("sses") || word.ends_with("ies") {
        word[..word.len() - 2].to_string()
    } else if word.ends_with("ss") {
        word.to_string()
    } else if let Some(stem) = word.strip_suffix('s') {
        stem.to_string()
    } else {
        word.to_string()
    }
}

/// Step 1c: a terminal `y` becomes `i` when the rest has a vowel.
pub fn step1c(word: &str) -> String {
    match word.strip_suffix('y') {
        Some(stem) if vowelinstem(stem) => format!("{stem}i"),
        _ => word.to_string(),
    }
}

/// Step 2: see [`STEP2_RULES`].
pub fn step2(word: &str) -> String {
    STEP2_RULES.apply(word)
}

/// Step 3: see [`STEP3_RULES`].
pub fn step3(word: &str) -> String {
    STEP3_RULES.apply(word)
}

/// Step 4: see [`STEP4_RULES`].
pub fn step4(word: &str) -> String {
    STEP4_RULES.apply(word)
}

/// Step 5: drop a final `-e` and reduce `-ll` to `-l` on long stems.
pub fn step5(word: &str) -> String {
    let mut word = word.to_string();

    let drop_e = match word.strip_suffix('e') {
        Some(stem) => {
            let m = degree(stem);
            m > 1 || (m == 1 && !cvc(stem))
        }
        None => false,
    };
    if drop_e {
        word.pop();
    }

    if word.ends_with('l') && doublec(&word) && degree(&word[..word.len() - 1]) > 1 {
        word.pop();
    }

    word
}
