// Verb paradigm generation: the six present/future cells, the two
// imperatives and the four past forms, derived from the infinitive and
// the attested 2nd-person-singular.

use std::fmt;

use udar_core::letters::{
    HUSHING_CONSONANTS, LABIAL_CONSONANTS, REFLEXIVE_SUFFIX, REFLEXIVE_SUFFIX_SHORT, is_vowel,
};
use udar_core::stress::{StressedForm, insert_stress, strip_stress};

use crate::word::{CellForms, MorphError};

/// Stem-final vowels admissible before the "-ть" infinitive suffix.
const THEME_VOWELS: [char; 6] = ['а', 'я', 'е', 'и', 'у', 'ы'];

/// The two regular conjugation patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConjugationClass {
    /// е-conjugation (1st): -ешь/-ёшь in the 2nd singular.
    First,
    /// и-conjugation (2nd): -ишь in the 2nd singular.
    Second,
}

/// Conjugation pattern detected from the attested 2nd singular, with a
/// flag for headwords whose infinitive stem disagrees with the pattern
/// (е-conjugation over an и-stem, or и-conjugation over a non-и stem).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conjugation {
    pub class: ConjugationClass,
    pub atypical_stem: bool,
}

impl Conjugation {
    /// Report code: "е-conj"/"и-conj", starred when the stem is atypical.
    pub fn code(self) -> String {
        let name = match self.class {
            ConjugationClass::First => "е-conj",
            ConjugationClass::Second => "и-conj",
        };
        if self.atypical_stem {
            format!("*{name}")
        } else {
            name.to_string()
        }
    }
}

impl fmt::Display for Conjugation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// The twelve verb paradigm cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbSlot {
    PresFutSg1,
    PresFutSg2,
    PresFutSg3,
    PresFutPl1,
    PresFutPl2,
    PresFutPl3,
    ImperativeSg,
    ImperativePl,
    PastM,
    PastF,
    PastN,
    PastPl,
}

impl VerbSlot {
    pub const ALL: [VerbSlot; 12] = [
        VerbSlot::PresFutSg1,
        VerbSlot::PresFutSg2,
        VerbSlot::PresFutSg3,
        VerbSlot::PresFutPl1,
        VerbSlot::PresFutPl2,
        VerbSlot::PresFutPl3,
        VerbSlot::ImperativeSg,
        VerbSlot::ImperativePl,
        VerbSlot::PastM,
        VerbSlot::PastF,
        VerbSlot::PastN,
        VerbSlot::PastPl,
    ];

    pub fn code(self) -> &'static str {
        match self {
            VerbSlot::PresFutSg1 => "presfut_sg1",
            VerbSlot::PresFutSg2 => "presfut_sg2",
            VerbSlot::PresFutSg3 => "presfut_sg3",
            VerbSlot::PresFutPl1 => "presfut_pl1",
            VerbSlot::PresFutPl2 => "presfut_pl2",
            VerbSlot::PresFutPl3 => "presfut_pl3",
            VerbSlot::ImperativeSg => "imperative_sg",
            VerbSlot::ImperativePl => "imperative_pl",
            VerbSlot::PastM => "past_m",
            VerbSlot::PastF => "past_f",
            VerbSlot::PastN => "past_n",
            VerbSlot::PastPl => "past_pl",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        VerbSlot::ALL.into_iter().find(|s| s.code() == code)
    }
}

impl fmt::Display for VerbSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Rule-based conjugation of a single verb headword.
///
/// Construction never fails: an infinitive that cannot be split or a
/// conjugation that cannot be classified leaves the corresponding field
/// empty, records a diagnostic and makes the dependent cells
/// `Undetermined`. Past-tense cells need only the stem.
#[derive(Debug, Clone)]
pub struct RussianVerb {
    word: StressedForm,
    reflexive: bool,
    stem: Option<String>,
    suffix: Option<String>,
    conjugation: Option<Conjugation>,
    diagnostics: Vec<MorphError>,
}

impl RussianVerb {
    /// `accented` is the infinitive with the stress mark; `attested_sg2`
    /// is the database 2nd-person-singular used to pick the conjugation.
    pub fn new(accented: &str, attested_sg2: Option<&str>) -> Self {
        let word = StressedForm::new(accented);
        let mut diagnostics = Vec::new();

        let mut body: Vec<char> = word.bare().chars().collect();
        let reflexive = body.ends_with(&['с', 'я']);
        if reflexive {
            body.truncate(body.len() - 2);
        }

        let (stem, suffix) = match split_infinitive(&body) {
            Some((stem, suffix)) => (Some(stem), Some(suffix)),
            None => {
                diagnostics.push(MorphError::UnsplittableInfinitive(word.bare().to_string()));
                (None, None)
            }
        };

        // Classified from the naive two-char split even when the split
        // above was rejected, matching how the headword row reports it.
        let conjugation = match attested_sg2 {
            None => {
                diagnostics.push(MorphError::MissingAttestedForm(format!(
                    "presfut_sg2 of {}",
                    word.bare()
                )));
                None
            }
            Some(sg2) => match classify_conjugation(&body, sg2) {
                Some(conjugation) => Some(conjugation),
                None => {
                    diagnostics.push(MorphError::UnclassifiableConjugation(sg2.to_string()));
                    None
                }
            },
        };

        Self {
            word,
            reflexive,
            stem,
            suffix,
            conjugation,
            diagnostics,
        }
    }

    pub fn stem(&self) -> Option<&str> {
        self.stem.as_deref()
    }

    /// Infinitive suffix for display, with "-ся" reattached.
    pub fn suffix(&self) -> Option<String> {
        self.suffix.as_ref().map(|suffix| {
            if self.reflexive {
                format!("{suffix}{REFLEXIVE_SUFFIX}")
            } else {
                suffix.clone()
            }
        })
    }

    pub fn conjugation(&self) -> Option<Conjugation> {
        self.conjugation
    }

    pub fn is_reflexive(&self) -> bool {
        self.reflexive
    }

    /// Derivation problems found at construction time.
    pub fn diagnostics(&self) -> &[MorphError] {
        &self.diagnostics
    }

    /// Generate the form for one slot.
    pub fn form(&self, slot: VerbSlot) -> Result<CellForms, MorphError> {
        let Some(stem) = self.stem.as_deref() else {
            return Ok(CellForms::Undetermined);
        };

        let Some((mut form, stress)) = self.raw_form(stem, slot) else {
            return Ok(CellForms::Undetermined);
        };

        if self.reflexive {
            let suffix = match form.chars().last() {
                Some(last) if is_vowel(last) => REFLEXIVE_SUFFIX_SHORT,
                _ => REFLEXIVE_SUFFIX,
            };
            form.push_str(suffix);
        }

        Ok(CellForms::one(insert_stress(&form, stress)))
    }

    /// Bare form and stressed-vowel index, before the reflexive suffix
    /// and the stress mark are applied. `None` means `Undetermined`.
    fn raw_form(&self, stem: &str, slot: VerbSlot) -> Option<(String, Option<usize>)> {
        let stress = self.word.stress();
        let stem_len = stem.chars().count();
        let chars: Vec<char> = stem.chars().collect();
        let last = *chars.last()?;
        let class = match slot {
            // The past tense is built on the stem alone.
            VerbSlot::PastM => return Some((format!("{stem}л"), stress)),
            VerbSlot::PastF => return Some((format!("{stem}ла"), stress)),
            VerbSlot::PastN => return Some((format!("{stem}ло"), stress)),
            VerbSlot::PastPl => return Some((format!("{stem}ли"), stress)),
            _ => self.conjugation?.class,
        };

        let trimmed = || -> String { chars[..chars.len() - 1].iter().collect() };
        let penultimate = (chars.len() >= 2).then(|| chars[chars.len() - 2]);

        let form = match (slot, class) {
            (VerbSlot::PresFutSg1, ConjugationClass::First) => {
                if is_vowel(last) {
                    (format!("{stem}ю"), stress)
                } else {
                    (format!("{stem}у"), stress)
                }
            }
            (VerbSlot::PresFutSg1, ConjugationClass::Second) => {
                let pen = penultimate?;
                if HUSHING_CONSONANTS.contains(pen) {
                    (format!("{}у", trimmed()), stress)
                } else if LABIAL_CONSONANTS.contains(pen) {
                    // An epenthetic "л" appears before the ending and a
                    // stem-final stress moves onto it: люби'ть -> люблю'.
                    let stress = match stress {
                        Some(pos) if pos == stem_len - 1 => Some(pos + 1),
                        other => other,
                    };
                    (format!("{}лю", trimmed()), stress)
                } else {
                    (format!("{}ю", trimmed()), stress)
                }
            }

            (VerbSlot::PresFutSg2, class) => self.present_cell(stem, class, "ешь", "ёшь", "ишь")?,
            (VerbSlot::PresFutSg3, class) => self.present_cell(stem, class, "ет", "ёт", "ит")?,
            (VerbSlot::PresFutPl1, class) => self.present_cell(stem, class, "ем", "ём", "им")?,
            (VerbSlot::PresFutPl2, class) => self.present_cell(stem, class, "ете", "ёте", "ите")?,

            (VerbSlot::PresFutPl3, ConjugationClass::First) => {
                if is_vowel(last) {
                    (format!("{stem}ют"), stress)
                } else {
                    (format!("{stem}ут"), stress)
                }
            }
            (VerbSlot::PresFutPl3, ConjugationClass::Second) => {
                let pen = penultimate?;
                if HUSHING_CONSONANTS.contains(pen) {
                    (format!("{}ат", trimmed()), stress)
                } else {
                    (format!("{}ят", trimmed()), stress)
                }
            }

            (VerbSlot::ImperativeSg, _) => (self.imperative_base(stem)?, stress),
            (VerbSlot::ImperativePl, _) => (format!("{}те", self.imperative_base(stem)?), stress),

            _ => return None,
        };
        Some(form)
    }

    /// Common shape of the sg2/sg3/pl1/pl2 present cells: the и-class
    /// replaces the theme vowel; the е-class appends, taking the ё
    /// spelling when the ending itself is stressed.
    fn present_cell(
        &self,
        stem: &str,
        class: ConjugationClass,
        e_ending: &str,
        jo_ending: &str,
        i_ending: &str,
    ) -> Option<(String, Option<usize>)> {
        let stress = self.word.stress();
        match class {
            ConjugationClass::First => {
                let ending = if stress == Some(stem.chars().count()) {
                    jo_ending
                } else {
                    e_ending
                };
                Some((format!("{stem}{ending}"), stress))
            }
            ConjugationClass::Second => {
                let trimmed: String = {
                    let chars: Vec<char> = stem.chars().collect();
                    if chars.is_empty() {
                        return None;
                    }
                    chars[..chars.len() - 1].iter().collect()
                };
                Some((format!("{trimmed}{i_ending}"), stress))
            }
        }
    }

    /// Singular imperative before the reflexive suffix: built on the
    /// 3rd-person-plural stem.
    fn imperative_base(&self, stem: &str) -> Option<String> {
        let (pl3, _) = self.raw_form(stem, VerbSlot::PresFutPl3)?;
        let pl3_chars: Vec<char> = pl3.chars().collect();
        if pl3_chars.len() <= 2 {
            return None;
        }
        let base: String = pl3_chars[..pl3_chars.len() - 2].iter().collect();
        let base_len = pl3_chars.len() - 2;
        let last = pl3_chars[base_len - 1];

        if is_vowel(last) {
            Some(format!("{base}й"))
        } else if self.word.stress() == Some(base_len) {
            // Ending-stressed verbs take the full "-и" imperative.
            Some(format!("{base}и"))
        } else {
            Some(format!("{base}ь"))
        }
    }
}

/// Split a bare infinitive (reflexive suffix already removed) into stem
/// and two-letter suffix; `None` when it fits no infinitive shape.
fn split_infinitive(body: &[char]) -> Option<(String, String)> {
    if body.len() < 3 {
        return None;
    }
    let stem: String = body[..body.len() - 2].iter().collect();
    let suffix: String = body[body.len() - 2..].iter().collect();
    let stem_last = body[body.len() - 3];

    if (suffix == "ть" && THEME_VOWELS.contains(&stem_last)) || suffix == "ти" || suffix == "чь" {
        Some((stem, suffix))
    } else {
        None
    }
}

/// Pick the conjugation from the bare attested 2nd singular.
fn classify_conjugation(infinitive_body: &[char], attested_sg2: &str) -> Option<Conjugation> {
    let mut sg2: Vec<char> = strip_stress(attested_sg2).chars().collect();
    if sg2.ends_with(&['с', 'я']) {
        sg2.truncate(sg2.len() - 2);
    }
    if sg2.len() < 3 {
        return None;
    }
    let ending: String = sg2[sg2.len() - 3..].iter().collect();

    let stem_ends_i = infinitive_body
        .len()
        .checked_sub(3)
        .map(|i| infinitive_body[i] == 'и')
        .unwrap_or(false);

    match ending.as_str() {
        "ешь" | "ёшь" => Some(Conjugation {
            class: ConjugationClass::First,
            atypical_stem: stem_ends_i,
        }),
        "ишь" => Some(Conjugation {
            class: ConjugationClass::Second,
            atypical_stem: !stem_ends_i,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(verb: &RussianVerb, code: &str) -> String {
        verb.form(VerbSlot::from_code(code).unwrap())
            .unwrap()
            .joined()
    }

    #[test]
    fn splits_regular_infinitives() {
        let verb = RussianVerb::new("ду'мать", Some("думаешь"));
        assert_eq!(verb.stem(), Some("дума"));
        assert_eq!(verb.suffix().as_deref(), Some("ть"));
        assert!(verb.diagnostics().is_empty());
    }

    #[test]
    fn rejects_consonant_stem_before_t() {
        let verb = RussianVerb::new("есть", Some("ешь"));
        assert_eq!(verb.stem(), None);
        assert!(matches!(
            verb.diagnostics()[0],
            MorphError::UnsplittableInfinitive(_)
        ));
        // The split failed but the conjugation is still reported.
        assert_eq!(
            verb.conjugation().map(|c| c.class),
            Some(ConjugationClass::First)
        );
        assert_eq!(form(&verb, "presfut_sg1"), "?");
    }

    #[test]
    fn first_conjugation_present() {
        let verb = RussianVerb::new("ду'мать", Some("думаешь"));
        assert_eq!(
            verb.conjugation(),
            Some(Conjugation {
                class: ConjugationClass::First,
                atypical_stem: false
            })
        );
        assert_eq!(form(&verb, "presfut_sg1"), "ду'маю");
        assert_eq!(form(&verb, "presfut_sg2"), "ду'маешь");
        assert_eq!(form(&verb, "presfut_sg3"), "ду'мает");
        assert_eq!(form(&verb, "presfut_pl1"), "ду'маем");
        assert_eq!(form(&verb, "presfut_pl2"), "ду'маете");
        assert_eq!(form(&verb, "presfut_pl3"), "ду'мают");
    }

    #[test]
    fn second_conjugation_present() {
        let verb = RussianVerb::new("говори'ть", Some("говоришь"));
        assert_eq!(
            verb.conjugation(),
            Some(Conjugation {
                class: ConjugationClass::Second,
                atypical_stem: false
            })
        );
        assert_eq!(form(&verb, "presfut_sg1"), "говорю'");
        assert_eq!(form(&verb, "presfut_sg2"), "говори'шь");
        assert_eq!(form(&verb, "presfut_sg3"), "говори'т");
        assert_eq!(form(&verb, "presfut_pl1"), "говори'м");
        assert_eq!(form(&verb, "presfut_pl2"), "говори'те");
        assert_eq!(form(&verb, "presfut_pl3"), "говоря'т");
    }

    #[test]
    fn hushing_stem_takes_hard_endings() {
        let verb = RussianVerb::new("учи'ть", Some("учишь"));
        assert_eq!(form(&verb, "presfut_sg1"), "учу'");
        assert_eq!(form(&verb, "presfut_pl3"), "уча'т");
    }

    #[test]
    fn labial_stem_takes_epenthetic_l() {
        let verb = RussianVerb::new("люби'ть", Some("любишь"));
        assert_eq!(form(&verb, "presfut_sg1"), "люблю'");
        // The shift is local to the 1st singular.
        assert_eq!(form(&verb, "presfut_sg2"), "люби'шь");
    }

    #[test]
    fn imperatives() {
        let think = RussianVerb::new("ду'мать", Some("думаешь"));
        assert_eq!(form(&think, "imperative_sg"), "ду'май");
        assert_eq!(form(&think, "imperative_pl"), "ду'майте");

        let speak = RussianVerb::new("говори'ть", Some("говоришь"));
        assert_eq!(form(&speak, "imperative_sg"), "говори'");
        assert_eq!(form(&speak, "imperative_pl"), "говори'те");
    }

    #[test]
    fn past_tense_needs_only_the_stem() {
        let verb = RussianVerb::new("ду'мать", None);
        assert!(matches!(
            verb.diagnostics()[0],
            MorphError::MissingAttestedForm(_)
        ));
        assert_eq!(form(&verb, "past_m"), "ду'мал");
        assert_eq!(form(&verb, "past_f"), "ду'мала");
        assert_eq!(form(&verb, "past_n"), "ду'мало");
        assert_eq!(form(&verb, "past_pl"), "ду'мали");
        // Present cells cannot be derived without a conjugation.
        assert_eq!(form(&verb, "presfut_sg1"), "?");
        assert_eq!(form(&verb, "imperative_sg"), "?");
    }

    #[test]
    fn reflexive_suffix_alternates() {
        let verb = RussianVerb::new("учи'ться", Some("учишься"));
        assert!(verb.is_reflexive());
        assert_eq!(verb.suffix().as_deref(), Some("ться"));
        assert_eq!(form(&verb, "presfut_sg2"), "учи'шься");
        assert_eq!(form(&verb, "past_m"), "учи'лся");
        assert_eq!(form(&verb, "past_f"), "учи'лась");
        assert_eq!(form(&verb, "imperative_sg"), "учи'сь");
        assert_eq!(form(&verb, "imperative_pl"), "учи'тесь");
    }

    #[test]
    fn atypical_stem_is_starred() {
        let verb = RussianVerb::new("жить", Some("живёшь"));
        assert_eq!(verb.conjugation().map(|c| c.code()).as_deref(), Some("*е-conj"));
    }

    #[test]
    fn unclassifiable_second_singular() {
        let verb = RussianVerb::new("дать", Some("дашь"));
        assert!(matches!(
            verb.diagnostics().last(),
            Some(MorphError::UnclassifiableConjugation(_))
        ));
        assert_eq!(form(&verb, "presfut_sg2"), "?");
    }
}
