//! Consonant/vowel classification and the structural tests built on it.
//!
//! Everything here expects a lowercase word that has already been through
//! [`mark_consonant_y`], so a `y` still in lowercase is a vowel and the
//! marker [`CONSONANT_Y`] is a consonant.

/// Marker written in place of a `y` that acts as a consonant.
pub const CONSONANT_Y: char = 'Y';

/// Check if a character is a vowel in a marked word.
pub fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Check if a character is a consonant in a marked word.
///
/// Anything that is not a vowel counts, including digits and punctuation.
pub fn is_consonant(c: char) -> bool {
    !is_vowel(c)
}

/// Replace every consonantal `y` with [`CONSONANT_Y`].
///
/// A `y` is consonantal when it starts the word or follows one of
/// `a e i o u` in the original spelling.
///
/// ```
/// use stemma::porter::measure::mark_consonant_y;
///
/// assert_eq!(mark_consonant_y("may"), "maY");
/// assert_eq!(mark_consonant_y("yam"), "Yam");
/// assert_eq!(mark_consonant_y("happy"), "happy");
/// ```
pub fn mark_consonant_y(word: &str) -> String {
    let mut marked = String::with_capacity(word.len());
    let mut previous: Option<char> = None;

    for c in word.chars() {
        let consonantal =
            c == 'y' && previous.is_none_or(|p| matches!(p, 'a' | 'e' | 'i' | 'o' | 'u'));
        marked.push(if consonantal { CONSONANT_Y } else { c });
        previous = Some(c);
    }

    marked
}

/// Undo [`mark_consonant_y`]. The input is lowercase, so folding case
/// restores exactly the marked letters.
pub fn unmark_consonant_y(word: &str) -> String {
    word.to_lowercase()
}

/// Calculate the measure `m` of a word: the number of vowel runs that are
/// followed by a consonant run, once the leading consonant run is skipped.
///
/// ```text
/// [C](VC){m}[V]
/// ```
pub fn degree(word: &str) -> usize {
    let mut classes = word.chars().map(is_vowel).peekable();

    // Skip initial consonants
    while classes.next_if(|&vowel| !vowel).is_some() {}

    let mut m = 0;
    loop {
        while classes.next_if(|&vowel| vowel).is_some() {}
        if classes.peek().is_none() {
            break;
        }
        while classes.next_if(|&vowel| !vowel).is_some() {}
        m += 1;
    }

    m
}

/// Check if a word contains a vowel.
pub fn vowelinstem(word: &str) -> bool {
    word.chars().any(is_vowel)
}

/// Check if a word ends with a double consonant preceded by a vowel.
pub fn doublec(word: &str) -> bool {
    let mut rev = word.chars().rev();
    match (rev.next(), rev.next()) {
        (Some(last), Some(before)) => last == before && is_consonant(last) && rev.any(is_vowel),
        _ => false,
    }
}

/// Check if a word is exactly consonant-vowel-consonant, the last
/// consonant not being `w`, `x` or `y`.
pub fn cvc(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(middle), Some(last), None) => {
            is_consonant(first)
                && is_vowel(middle)
                && is_consonant(last)
                && !matches!(last, 'w' | 'x' | 'y' | CONSONANT_Y)
        }
        _ => false,
    }
}
