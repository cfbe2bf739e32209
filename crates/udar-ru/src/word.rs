// Orthographic concatenation of stem and ending, and the shared per-slot
// output contract of the paradigm generators.

use std::fmt;

use udar_core::letters::{EIGHT_LETTER_RULE, FIVE_LETTER_RULE, SEVEN_LETTER_RULE};
use udar_core::stress::insert_stress;

/// Errors raised while deriving or generating forms.
///
/// All of these are local to one headword or one slot: the batch layer
/// records them as diagnostics and keeps going.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum MorphError {
    /// The infinitive does not match any known verb-class ending.
    #[error("cannot split infinitive {0:?} into stem and ending")]
    UnsplittableInfinitive(String),

    /// The 2nd-person-singular form matches neither conjugation pattern.
    #[error("cannot classify conjugation from 2nd singular {0:?}")]
    UnclassifiableConjugation(String),

    /// A reference form needed for derivation is absent from the database.
    #[error("missing attested form: {0}")]
    MissingAttestedForm(String),

    /// A generated form contains Latin vowels. This is an engine defect,
    /// not bad input; it aborts the single generation that produced it.
    #[error("generated form {0:?} contains Latin vowels")]
    LatinVowel(String),
}

/// One paradigm cell: either generated candidate forms in canonical
/// accented spelling, or an explicit sentinel when no rule applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellForms {
    Generated(Vec<String>),
    Undetermined,
}

impl CellForms {
    pub fn one(form: String) -> Self {
        CellForms::Generated(vec![form])
    }

    /// The candidate forms; empty for `Undetermined`.
    pub fn forms(&self) -> &[String] {
        match self {
            CellForms::Generated(forms) => forms,
            CellForms::Undetermined => &[],
        }
    }

    pub fn is_undetermined(&self) -> bool {
        matches!(self, CellForms::Undetermined)
    }

    /// Slash-joined candidates; the report sentinel "?" for `Undetermined`.
    pub fn joined(&self) -> String {
        match self {
            CellForms::Generated(forms) => forms.join("/"),
            CellForms::Undetermined => "?".to_string(),
        }
    }
}

impl fmt::Display for CellForms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

/// Join a stem and an ending, applying the spelling rules in order:
/// the seven-letter rule ("ы" is written "и"), the eight-letter rule
/// ("я"/"ю" are written "а"/"у"), and the five-letter rule (an unstressed
/// "о" is written "е" -- skipped when the stress index sits on the
/// ending's first character).
///
/// `stress` is the stressed-vowel index tracked through the headword; it
/// is only consulted, never inserted here.
pub fn concatenate(stem: &str, ending: &str, stress: Option<usize>) -> String {
    if ending.is_empty() {
        return stem.to_string();
    }
    let mut ending_chars: Vec<char> = ending.chars().collect();
    if let Some(last) = stem.chars().last() {
        if SEVEN_LETTER_RULE.contains(last) && ending_chars[0] == 'ы' {
            ending_chars[0] = 'и';
        }
        if EIGHT_LETTER_RULE.contains(last) && ending_chars[0] == 'я' {
            ending_chars[0] = 'а';
        }
        if EIGHT_LETTER_RULE.contains(last) && ending_chars[0] == 'ю' {
            ending_chars[0] = 'у';
        }
        if FIVE_LETTER_RULE.contains(last)
            && ending_chars[0] == 'о'
            && stress != Some(stem.chars().count())
        {
            ending_chars[0] = 'е';
        }
    }
    let mut out = String::with_capacity(stem.len() + ending.len());
    out.push_str(stem);
    out.extend(ending_chars);
    out
}

/// Concatenate and re-insert the stress mark at the tracked position.
///
/// The result must not contain Latin vowels; a violation indicates a
/// defect in the generator that produced the stem/ending pair and fails
/// this single generation.
pub fn attach(stem: &str, ending: &str, stress: Option<usize>) -> Result<String, MorphError> {
    let accented = insert_stress(&concatenate(stem, ending, stress), stress);
    if accented.chars().any(|c| "aeiouy".contains(c)) {
        return Err(MorphError::LatinVowel(accented));
    }
    Ok(accented)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ending_returns_stem() {
        assert_eq!(concatenate("собак", "", Some(1)), "собак");
    }

    #[test]
    fn plain_concatenation() {
        assert_eq!(concatenate("собак", "ой", Some(1)), "собакой");
    }

    #[test]
    fn seven_letter_rule() {
        // "книг" + "ы" -> "книги"
        assert_eq!(concatenate("книг", "ы", Some(2)), "книги");
        assert_eq!(concatenate("товарищ", "ы", Some(3)), "товарищи");
    }

    #[test]
    fn eight_letter_rule() {
        assert_eq!(concatenate("товарищ", "я", Some(3)), "товарища");
        assert_eq!(concatenate("товарищ", "ю", Some(3)), "товарищу");
        assert_eq!(concatenate("отц", "я", Some(2)), "отца");
    }

    #[test]
    fn five_letter_rule_unstressed() {
        // му'ж + ом: stress at index 1, not on the ending -> "ем".
        assert_eq!(concatenate("муж", "ом", Some(1)), "мужем");
    }

    #[test]
    fn five_letter_rule_stressed_keeps_o() {
        // нож + о'м: stress index equals the stem length -> "о" stays.
        assert_eq!(concatenate("нож", "ом", Some(3)), "ножом");
    }

    #[test]
    fn attach_reinserts_mark() {
        assert_eq!(attach("собак", "ой", Some(1)).unwrap(), "со'бакой");
        assert_eq!(attach("нож", "ом", Some(3)).unwrap(), "ножо'м");
    }

    #[test]
    fn attach_rejects_latin_vowels() {
        let err = attach("плеер", "a", Some(2)).unwrap_err();
        assert!(matches!(err, MorphError::LatinVowel(_)));
    }

    #[test]
    fn cell_forms_join() {
        let cell = CellForms::Generated(vec!["но'вый".into(), "но'вого".into()]);
        assert_eq!(cell.joined(), "но'вый/но'вого");
        assert_eq!(CellForms::Undetermined.joined(), "?");
        assert!(CellForms::Undetermined.forms().is_empty());
    }
}
