// Stress-mark arithmetic.
//
// Convention: an ASCII apostrophe immediately follows the stressed vowel
// ("соба'ка"). A string without the mark carries unknown stress. All
// positions are character indices, never byte offsets.

use crate::letters::{VOWELS, is_vowel};

/// The stress marker character.
pub const STRESS_MARK: char = '\'';

/// Character index of the vowel preceding the first stress mark, or
/// `None` when the word is unmarked.
pub fn stress_position(word: &str) -> Option<usize> {
    let mut pos = 0usize;
    for c in word.chars() {
        if c == STRESS_MARK {
            return pos.checked_sub(1);
        }
        pos += 1;
    }
    None
}

/// Remove every stress mark. Total; never fails.
pub fn strip_stress(word: &str) -> String {
    word.chars().filter(|&c| c != STRESS_MARK).collect()
}

/// Insert the stress mark immediately after the character at `stress`.
///
/// `None` returns the input unchanged. An index at or past the end of the
/// word appends the mark.
pub fn insert_stress(word: &str, stress: Option<usize>) -> String {
    let Some(pos) = stress else {
        return word.to_string();
    };
    let mut out = String::with_capacity(word.len() + STRESS_MARK.len_utf8());
    let mut inserted = false;
    for (i, c) in word.chars().enumerate() {
        out.push(c);
        if i == pos {
            out.push(STRESS_MARK);
            inserted = true;
        }
    }
    if !inserted {
        out.push(STRESS_MARK);
    }
    out
}

/// Rightmost vowel index of the stripped word, or `None` when the word
/// has no vowel.
pub fn last_vowel_position(word: &str) -> Option<usize> {
    let bare = strip_stress(word);
    let mut last = None;
    for (i, c) in bare.chars().enumerate() {
        if is_vowel(c) {
            last = Some(i);
        }
    }
    last
}

/// Whether the word contains exactly one vowel letter.
pub fn has_single_vowel(word: &str) -> bool {
    word.chars().filter(|&c| is_vowel(c)).count() == 1
}

/// Supply a stress mark to an unmarked word when the position is
/// unambiguous: after "ё", or after the only vowel. Already-marked words
/// are returned unchanged, so the operation is idempotent.
pub fn supplement_stress(word: &str) -> String {
    if word.contains(STRESS_MARK) {
        return word.to_string();
    }
    if let Some(pos) = word.chars().position(|c| c == 'ё') {
        return insert_stress(word, Some(pos));
    }
    let vowel_positions: Vec<usize> = word
        .to_lowercase()
        .chars()
        .enumerate()
        .filter(|(_, c)| VOWELS.contains(*c))
        .map(|(i, _)| i)
        .collect();
    if let [only] = vowel_positions[..] {
        return insert_stress(word, Some(only));
    }
    word.to_string()
}

/// A word together with its embedded stress mark.
///
/// Immutable once constructed. `stress`, when present, indexes a vowel of
/// `bare`, and `insert_stress(bare, stress)` reproduces the accented text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StressedForm {
    accented: String,
    bare: String,
    stress: Option<usize>,
}

impl StressedForm {
    /// Build from an externally supplied accented string.
    pub fn new(accented: &str) -> Self {
        Self {
            accented: accented.to_string(),
            bare: strip_stress(accented),
            stress: stress_position(accented),
        }
    }

    /// The accented text as supplied.
    pub fn accented(&self) -> &str {
        &self.accented
    }

    /// The text with every mark removed.
    pub fn bare(&self) -> &str {
        &self.bare
    }

    /// Character index of the stressed vowel, if known.
    pub fn stress(&self) -> Option<usize> {
        self.stress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_of_marked_word() {
        assert_eq!(stress_position("соба'ка"), Some(3));
        assert_eq!(stress_position("ше'стого"), Some(1));
    }

    #[test]
    fn position_of_unmarked_word() {
        assert_eq!(stress_position("собака"), None);
    }

    #[test]
    fn strip_removes_all_marks() {
        assert_eq!(strip_stress("соба'ка"), "собака");
        assert_eq!(strip_stress("собака"), "собака");
    }

    #[test]
    fn insert_none_is_identity() {
        assert_eq!(insert_stress("собака", None), "собака");
    }

    #[test]
    fn insert_past_end_appends() {
        assert_eq!(insert_stress("говорю", Some(5)), "говорю'");
        assert_eq!(insert_stress("го", Some(10)), "го'");
    }

    #[test]
    fn round_trip() {
        for word in ["шестого", "собака", "я"] {
            let len = word.chars().count();
            for p in 0..len {
                let marked = insert_stress(word, Some(p));
                assert_eq!(stress_position(&marked), Some(p));
                assert_eq!(strip_stress(&marked), word);
            }
        }
    }

    #[test]
    fn last_vowel() {
        assert_eq!(last_vowel_position("дорож"), Some(3));
        assert_eq!(last_vowel_position("соба'ка"), Some(5));
        assert_eq!(last_vowel_position("ств"), None);
    }

    #[test]
    fn single_vowel() {
        assert!(has_single_vowel("стол"));
        assert!(!has_single_vowel("собака"));
        assert!(!has_single_vowel("ств"));
    }

    #[test]
    fn supplement_is_idempotent() {
        assert_eq!(supplement_stress("соба'ка"), "соба'ка");
        let once = supplement_stress("щёлкать");
        assert_eq!(supplement_stress(&once), once);
    }

    #[test]
    fn supplement_jo() {
        assert_eq!(supplement_stress("щёлкать"), "щё'лкать");
    }

    #[test]
    fn supplement_single_vowel() {
        assert_eq!(supplement_stress("стол"), "сто'л");
    }

    #[test]
    fn supplement_ambiguous_is_noop() {
        assert_eq!(supplement_stress("собака"), "собака");
    }

    #[test]
    fn stressed_form_round_trip() {
        let f = StressedForm::new("соба'ка");
        assert_eq!(f.bare(), "собака");
        assert_eq!(f.stress(), Some(3));
        assert_eq!(insert_stress(f.bare(), f.stress()), f.accented());
    }

    #[test]
    fn stressed_form_unmarked() {
        let f = StressedForm::new("кофе");
        assert_eq!(f.bare(), "кофе");
        assert_eq!(f.stress(), None);
    }
}
