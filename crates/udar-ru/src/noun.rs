// Noun paradigm generation: the 12 case-and-number cells.

use std::fmt;

use udar_core::grammar::{Case, Gender, Number};
use udar_core::letters::HUSHING_CONSONANTS;
use udar_core::stress::{StressedForm, insert_stress};

use crate::word::{CellForms, MorphError, attach};

/// The twelve noun paradigm cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NounSlot {
    pub case: Case,
    pub number: Number,
}

impl NounSlot {
    pub const fn new(case: Case, number: Number) -> Self {
        Self { case, number }
    }

    /// All twelve slots, in report column order.
    pub const ALL: [NounSlot; 12] = [
        NounSlot::new(Case::Nominative, Number::Singular),
        NounSlot::new(Case::Nominative, Number::Plural),
        NounSlot::new(Case::Genitive, Number::Singular),
        NounSlot::new(Case::Genitive, Number::Plural),
        NounSlot::new(Case::Dative, Number::Singular),
        NounSlot::new(Case::Dative, Number::Plural),
        NounSlot::new(Case::Accusative, Number::Singular),
        NounSlot::new(Case::Accusative, Number::Plural),
        NounSlot::new(Case::Instrumental, Number::Singular),
        NounSlot::new(Case::Instrumental, Number::Plural),
        NounSlot::new(Case::Prepositional, Number::Singular),
        NounSlot::new(Case::Prepositional, Number::Plural),
    ];

    /// Database/report code, e.g. "gen_sg".
    pub fn code(self) -> String {
        format!("{}_{}", self.case.code(), self.number.code())
    }

    pub fn from_code(code: &str) -> Option<Self> {
        NounSlot::ALL.into_iter().find(|s| s.code() == code)
    }
}

impl fmt::Display for NounSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// Synthetic terminal marker for masculine stems ending in a hard
/// consonant, distinguishing them from stems in "й" or "ь".
const HARD_MASCULINE_MARK: char = '#';

/// Rule-based declension of a single noun headword.
///
/// Constructed once per headword; every slot is an independent pure
/// computation over the derived stem and class character.
#[derive(Debug, Clone)]
pub struct RussianNoun {
    word: StressedForm,
    gender: Gender,
    animate: bool,
    /// Bare form with the synthetic "#" appended for hard masculines.
    class_char: char,
    stem: String,
}

impl RussianNoun {
    pub fn new(accented: &str, gender: Gender, animate: bool) -> Self {
        let word = StressedForm::new(accented);
        let mut marked: Vec<char> = word.bare().chars().collect();
        if gender == Gender::Masculine && !matches!(marked.last(), Some('й') | Some('ь')) {
            marked.push(HARD_MASCULINE_MARK);
        }
        let class_char = marked.pop().unwrap_or(HARD_MASCULINE_MARK);
        let stem: String = marked.into_iter().collect();
        Self {
            word,
            gender,
            animate,
            class_char,
            stem,
        }
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn animate(&self) -> bool {
        self.animate
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    /// Last stem letter, i.e. the letter preceding the class character.
    fn pre_class_char(&self) -> Option<char> {
        self.stem.chars().last()
    }

    /// Ending for a table-driven slot, or `None` when the gender/class
    /// pairing is outside the tables (e.g. an indeclinable loanword).
    /// Accusatives are resolved in [`form`](Self::form), not here.
    fn ending(&self, slot: NounSlot) -> Option<&'static str> {
        use Case::*;
        use Gender::*;
        use Number::*;

        let sibilant_stem = self
            .pre_class_char()
            .is_some_and(|c| HUSHING_CONSONANTS.contains(c));
        let i_stem = self.pre_class_char() == Some('и');

        let ending = match (self.gender, self.class_char, slot.case, slot.number) {
            (Masculine, '#', Nominative, Plural) => "ы",
            (Masculine, 'й' | 'ь', Nominative, Plural) => "и",
            (Feminine, 'а', Nominative, Plural) => "ы",
            (Feminine, 'я' | 'ь', Nominative, Plural) => "и",
            (Neuter, 'о', Nominative, Plural) => "а",
            (Neuter, 'е', Nominative, Plural) => "я",

            (Masculine, '#', Genitive, Singular) => "а",
            (Masculine, 'й' | 'ь', Genitive, Singular) => "я",
            (Feminine, 'а', Genitive, Singular) => "ы",
            (Feminine, 'я' | 'ь', Genitive, Singular) => "и",
            (Neuter, 'о', Genitive, Singular) => "а",
            (Neuter, 'е', Genitive, Singular) => "я",

            (Masculine, '#', Genitive, Plural) => {
                if sibilant_stem {
                    "ей"
                } else {
                    "ов"
                }
            }
            (Masculine, 'й', Genitive, Plural) => "ев",
            (Masculine, 'ь', Genitive, Plural) => "ей",
            (Feminine, 'а', Genitive, Plural) => "",
            (Feminine, 'я', Genitive, Plural) | (Neuter, 'е', Genitive, Plural) => {
                if i_stem {
                    "й"
                } else {
                    "ей"
                }
            }
            (Feminine, 'ь', Genitive, Plural) => "ей",
            (Neuter, 'о', Genitive, Plural) => "",

            (Masculine, '#', Dative, Singular) => "у",
            (Masculine, 'й' | 'ь', Dative, Singular) => "ю",
            (Feminine, 'а', Dative, Singular) => "е",
            (Feminine, 'я', Dative, Singular) => {
                if i_stem {
                    "и"
                } else {
                    "е"
                }
            }
            (Feminine, 'ь', Dative, Singular) => "и",
            (Neuter, 'о', Dative, Singular) => "у",
            (Neuter, 'е', Dative, Singular) => "ю",

            (Masculine, '#', Dative, Plural) => "ам",
            (Masculine, 'й' | 'ь', Dative, Plural) => "ям",
            (Feminine, 'а', Dative, Plural) => "ам",
            (Feminine, 'я' | 'ь', Dative, Plural) => "ям",
            (Neuter, 'о', Dative, Plural) => "ам",
            (Neuter, 'е', Dative, Plural) => "ям",

            (Feminine, 'а', Accusative, Singular) => "у",
            (Feminine, 'я', Accusative, Singular) => "ю",
            (Feminine, 'ь', Accusative, Singular) => "ь",

            (Masculine, '#', Instrumental, Singular) => "ом",
            (Masculine, 'й' | 'ь', Instrumental, Singular) => "ем",
            (Feminine, 'а', Instrumental, Singular) => "ой",
            (Feminine, 'я', Instrumental, Singular) => "ей",
            (Feminine, 'ь', Instrumental, Singular) => "ью",
            (Neuter, 'о', Instrumental, Singular) => "ом",
            (Neuter, 'е', Instrumental, Singular) => "ем",

            (Masculine, '#', Instrumental, Plural) => "ами",
            (Masculine, 'й' | 'ь', Instrumental, Plural) => "ями",
            (Feminine, 'а', Instrumental, Plural) => "ами",
            (Feminine, 'я' | 'ь', Instrumental, Plural) => "ями",
            (Neuter, 'о', Instrumental, Plural) => "ами",
            (Neuter, 'е', Instrumental, Plural) => "ями",

            (Masculine, '#' | 'й' | 'ь', Prepositional, Singular) => "е",
            (Feminine, 'а', Prepositional, Singular) => "е",
            (Feminine, 'я', Prepositional, Singular) | (Neuter, 'е', Prepositional, Singular) => {
                if i_stem {
                    "и"
                } else {
                    "е"
                }
            }
            (Feminine, 'ь', Prepositional, Singular) => "и",
            (Neuter, 'о', Prepositional, Singular) => "е",

            (Masculine, '#', Prepositional, Plural) => "ах",
            (Masculine, 'й' | 'ь', Prepositional, Plural) => "ях",
            (Feminine, 'а', Prepositional, Plural) => "ах",
            (Feminine, 'я' | 'ь', Prepositional, Plural) => "ях",
            (Neuter, 'о', Prepositional, Plural) => "ах",
            (Neuter, 'е', Prepositional, Plural) => "ях",

            _ => return None,
        };
        Some(ending)
    }

    /// Generate the form(s) for one slot.
    pub fn form(&self, slot: NounSlot) -> Result<CellForms, MorphError> {
        use Case::*;
        use Number::*;

        match (slot.case, slot.number) {
            (Nominative, Singular) => Ok(CellForms::one(insert_stress(
                self.word.bare(),
                self.word.stress(),
            ))),
            (Accusative, Singular) => match self.gender {
                Gender::Masculine => {
                    let target = if self.animate {
                        NounSlot::new(Genitive, Singular)
                    } else {
                        NounSlot::new(Nominative, Singular)
                    };
                    self.form(target)
                }
                Gender::Feminine => self.table_form(slot),
                Gender::Neuter => self.form(NounSlot::new(Nominative, Singular)),
            },
            (Accusative, Plural) => {
                let target = if self.gender != Gender::Neuter && self.animate {
                    NounSlot::new(Genitive, Plural)
                } else {
                    NounSlot::new(Nominative, Plural)
                };
                self.form(target)
            }
            _ => self.table_form(slot),
        }
    }

    fn table_form(&self, slot: NounSlot) -> Result<CellForms, MorphError> {
        match self.ending(slot) {
            Some(ending) => Ok(CellForms::one(attach(
                &self.stem,
                ending,
                self.word.stress(),
            )?)),
            None => Ok(CellForms::Undetermined),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(code: &str) -> NounSlot {
        NounSlot::from_code(code).unwrap()
    }

    fn form(noun: &RussianNoun, code: &str) -> String {
        noun.form(slot(code)).unwrap().joined()
    }

    #[test]
    fn slot_codes_round_trip() {
        for s in NounSlot::ALL {
            assert_eq!(NounSlot::from_code(&s.code()), Some(s));
        }
        assert_eq!(NounSlot::from_code("voc_sg"), None);
    }

    #[test]
    fn feminine_a_paradigm() {
        let n = RussianNoun::new("соба'ка", Gender::Feminine, true);
        assert_eq!(form(&n, "nom_sg"), "соба'ка");
        assert_eq!(form(&n, "nom_pl"), "соба'ки"); // seven-letter rule
        assert_eq!(form(&n, "gen_sg"), "соба'ки");
        assert_eq!(form(&n, "gen_pl"), "соба'к");
        assert_eq!(form(&n, "dat_sg"), "соба'ке");
        assert_eq!(form(&n, "acc_sg"), "соба'ку");
        assert_eq!(form(&n, "acc_pl"), "соба'к"); // animate -> genitive
        assert_eq!(form(&n, "inst_sg"), "соба'кой");
        assert_eq!(form(&n, "prep_sg"), "соба'ке");
        assert_eq!(form(&n, "prep_pl"), "соба'ках");
    }

    #[test]
    fn masculine_hard_inanimate() {
        let n = RussianNoun::new("сто'л", Gender::Masculine, false);
        assert_eq!(form(&n, "nom_sg"), "сто'л");
        assert_eq!(form(&n, "gen_sg"), "сто'ла");
        assert_eq!(form(&n, "acc_sg"), "сто'л"); // inanimate -> nominative
        assert_eq!(form(&n, "nom_pl"), "сто'лы");
        assert_eq!(form(&n, "gen_pl"), "сто'лов");
        assert_eq!(form(&n, "inst_sg"), "сто'лом");
    }

    #[test]
    fn masculine_animate_accusative_is_genitive() {
        let n = RussianNoun::new("студе'нт", Gender::Masculine, true);
        assert_eq!(form(&n, "acc_sg"), "студе'нта");
        assert_eq!(form(&n, "acc_pl"), "студе'нтов");
    }

    #[test]
    fn masculine_sibilant_genitive_plural() {
        let n = RussianNoun::new("това'рищ", Gender::Masculine, true);
        assert_eq!(form(&n, "gen_pl"), "това'рищей");
        // Eight-letter rule in the genitive singular.
        assert_eq!(form(&n, "gen_sg"), "това'рища");
    }

    #[test]
    fn masculine_soft_sign() {
        let n = RussianNoun::new("учи'тель", Gender::Masculine, true);
        assert_eq!(form(&n, "nom_pl"), "учи'тели");
        assert_eq!(form(&n, "gen_sg"), "учи'теля");
        assert_eq!(form(&n, "inst_sg"), "учи'телем");
        assert_eq!(form(&n, "gen_pl"), "учи'телей");
    }

    #[test]
    fn masculine_j_stem() {
        let n = RussianNoun::new("музе'й", Gender::Masculine, false);
        assert_eq!(form(&n, "nom_pl"), "музе'и");
        assert_eq!(form(&n, "gen_pl"), "музе'ев");
        assert_eq!(form(&n, "dat_sg"), "музе'ю");
        assert_eq!(form(&n, "prep_sg"), "музе'е");
    }

    #[test]
    fn feminine_ija_stem_takes_i() {
        // "и" before the class vowel: dat/prep in "-ии", gen_pl in "-й".
        let n = RussianNoun::new("ста'нция", Gender::Feminine, false);
        assert_eq!(form(&n, "dat_sg"), "ста'нции");
        assert_eq!(form(&n, "prep_sg"), "ста'нции");
        assert_eq!(form(&n, "gen_pl"), "ста'нций");
    }

    #[test]
    fn feminine_soft_sign() {
        let n = RussianNoun::new("жи'знь", Gender::Feminine, false);
        assert_eq!(form(&n, "gen_sg"), "жи'зни");
        assert_eq!(form(&n, "acc_sg"), "жи'знь");
        assert_eq!(form(&n, "inst_sg"), "жи'знью");
        assert_eq!(form(&n, "prep_sg"), "жи'зни");
    }

    #[test]
    fn neuter_o_and_e() {
        let o = RussianNoun::new("окно'", Gender::Neuter, false);
        assert_eq!(form(&o, "nom_pl"), "окна'");
        // Naive rule: bare stem, no fleeting vowel, mark carried past the end.
        assert_eq!(form(&o, "gen_pl"), "окн'");
        let e = RussianNoun::new("мо'ре", Gender::Neuter, false);
        assert_eq!(form(&e, "nom_pl"), "мо'ря");
        assert_eq!(form(&e, "gen_pl"), "мо'рей");
        assert_eq!(form(&e, "acc_sg"), "мо'ре");
        let zd = RussianNoun::new("зда'ние", Gender::Neuter, false);
        assert_eq!(form(&zd, "prep_sg"), "зда'нии");
        assert_eq!(form(&zd, "gen_pl"), "зда'ний");
    }

    #[test]
    fn unknown_class_is_undetermined() {
        // Indeclinable loanword whose final letter fits no table row.
        let n = RussianNoun::new("мада'м", Gender::Feminine, true);
        assert!(n.form(slot("gen_sg")).unwrap().is_undetermined());
        assert!(n.form(slot("acc_sg")).unwrap().is_undetermined());
    }
}
