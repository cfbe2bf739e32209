// Adjective paradigm generation: 24 declined cells, 4 short forms,
// comparative and superlative.

use std::fmt;
use std::sync::LazyLock;

use udar_core::grammar::Case;
use udar_core::letters::{EIGHT_LETTER_RULE, REFLEXIVE_SUFFIX};
use udar_core::stress::{StressedForm, has_single_vowel, insert_stress, last_vowel_position};

use crate::word::{CellForms, MorphError, attach};

/// Agreement column of the declension tables: the three genders plus
/// the single plural paradigm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Agreement {
    Masculine,
    Feminine,
    Neuter,
    Plural,
}

impl Agreement {
    pub const ALL: [Agreement; 4] = [
        Agreement::Masculine,
        Agreement::Feminine,
        Agreement::Neuter,
        Agreement::Plural,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Agreement::Masculine => "m",
            Agreement::Feminine => "f",
            Agreement::Neuter => "n",
            Agreement::Plural => "pl",
        }
    }

    fn column(self) -> usize {
        match self {
            Agreement::Masculine => 0,
            Agreement::Feminine => 1,
            Agreement::Neuter => 2,
            Agreement::Plural => 3,
        }
    }
}

/// The thirty adjective paradigm cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdjectiveSlot {
    Declined(Case, Agreement),
    Short(Agreement),
    Comparative,
    Superlative,
}

impl AdjectiveSlot {
    /// All slots in report column order: the six cases and the short row,
    /// each across m/f/n/pl, then comparative and superlative.
    pub fn all() -> Vec<AdjectiveSlot> {
        let mut slots = Vec::with_capacity(30);
        for case in Case::ALL {
            for agr in Agreement::ALL {
                slots.push(AdjectiveSlot::Declined(case, agr));
            }
        }
        for agr in Agreement::ALL {
            slots.push(AdjectiveSlot::Short(agr));
        }
        slots.push(AdjectiveSlot::Comparative);
        slots.push(AdjectiveSlot::Superlative);
        slots
    }

    /// Database/report code, e.g. "nom_f", "short_pl", "comparative".
    pub fn code(self) -> String {
        match self {
            AdjectiveSlot::Declined(case, agr) => format!("{}_{}", case.code(), agr.code()),
            AdjectiveSlot::Short(agr) => format!("short_{}", agr.code()),
            AdjectiveSlot::Comparative => "comparative".to_string(),
            AdjectiveSlot::Superlative => "superlative".to_string(),
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        AdjectiveSlot::all().into_iter().find(|s| s.code() == code)
    }
}

impl fmt::Display for AdjectiveSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

/// One declension-table cell: one ending, or two acceptable alternatives.
type Cell = &'static [&'static str];

/// Hard-stem endings; rows are the six cases plus the short row, columns
/// follow [`Agreement`]. Tuple cells hold genuinely optional endings
/// (animate/inanimate accusative, instrumental feminine "-ой"/"-ою").
const HARD_ENDINGS: [[Cell; 4]; 7] = [
    [&["ый"], &["ая"], &["ое"], &["ые"]],
    [&["ого"], &["ой"], &["ого"], &["ых"]],
    [&["ому"], &["ой"], &["ому"], &["ым"]],
    [&["ый", "ого"], &["ую"], &["ое"], &["ые", "ых"]],
    [&["ым"], &["ой", "ою"], &["ым"], &["ыми"]],
    [&["ом"], &["ой"], &["ом"], &["ых"]],
    [&[""], &["а"], &["о"], &["ы"]],
];

/// Map a hard ending onto its soft counterpart: only the first letter
/// changes (ы→и, а→я, о→е, у→ю).
fn soften(ending: &str) -> String {
    let mut chars = ending.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mapped = match first {
                'ы' => 'и',
                'а' => 'я',
                'о' => 'е',
                'у' => 'ю',
                other => other,
            };
            std::iter::once(mapped).chain(chars).collect()
        }
    }
}

/// Soft-stem endings, derived mechanically from the hard table once at
/// first use and addressed by the same row/column keys.
static SOFT_ENDINGS: LazyLock<Vec<Vec<Vec<String>>>> = LazyLock::new(|| {
    HARD_ENDINGS
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.iter().map(|e| soften(e)).collect())
                .collect()
        })
        .collect()
});

/// Stem-final consonant mutations for comparative/superlative formation,
/// scanned in order with the last match winning so that "ст" is not
/// shadowed by "т".
const COMPARATIVE_MUTATIONS: [(&str, &str); 6] = [
    ("г", "ж"),
    ("к", "ч"),
    ("х", "ш"),
    ("д", "ж"),
    ("т", "ч"),
    ("ст", "щ"),
];

const SHORT_ROW: usize = 6;

/// Rule-based declension and comparison of a single adjective headword.
#[derive(Debug, Clone)]
pub struct RussianAdjective {
    word: StressedForm,
    soft: bool,
    /// Masculine nominative ends in stressed "-ой" (большо'й).
    takes_oi: bool,
    reflexive: bool,
    stem: String,
    /// Stem-final consonant class mutated in comparative/superlative.
    mutation: Option<(&'static str, &'static str)>,
}

impl RussianAdjective {
    pub fn new(accented: &str) -> Self {
        let word = StressedForm::new(accented);
        let bare: Vec<char> = word.bare().chars().collect();

        let soft = bare.len() >= 3
            && bare.ends_with(&['и', 'й'])
            && !EIGHT_LETTER_RULE.contains(bare[bare.len() - 3]);
        let takes_oi = bare.ends_with(&['о', 'й']);
        let reflexive = bare.ends_with(&['с', 'я']);

        let mut stem_len = bare.len().saturating_sub(2);
        if reflexive {
            stem_len = stem_len.saturating_sub(2);
        }
        let stem: String = bare[..stem_len].iter().collect();

        let mut mutation = None;
        for &(pattern, replacement) in &COMPARATIVE_MUTATIONS {
            if stem.ends_with(pattern) {
                mutation = Some((pattern, replacement));
            }
        }

        Self {
            word,
            soft,
            takes_oi,
            reflexive,
            stem,
            mutation,
        }
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn is_soft(&self) -> bool {
        self.soft
    }

    fn endings(&self, row: usize, column: usize) -> Vec<String> {
        if self.soft {
            SOFT_ENDINGS[row][column].clone()
        } else {
            HARD_ENDINGS[row][column]
                .iter()
                .map(|e| e.to_string())
                .collect()
        }
    }

    /// Generate the form(s) for one slot.
    pub fn form(&self, slot: AdjectiveSlot) -> Result<CellForms, MorphError> {
        let (row, column) = match slot {
            AdjectiveSlot::Comparative => return Ok(CellForms::one(self.comparative())),
            AdjectiveSlot::Superlative => return Ok(CellForms::one(self.superlative())),
            AdjectiveSlot::Declined(case, agr) => {
                (Case::ALL.iter().position(|&c| c == case).unwrap_or(0), agr)
            }
            AdjectiveSlot::Short(agr) => (SHORT_ROW, agr),
        };

        let mut endings = self.endings(row, column.column());
        if matches!(
            slot,
            AdjectiveSlot::Declined(Case::Nominative | Case::Accusative, Agreement::Masculine)
        ) && self.takes_oi
        {
            for ending in &mut endings {
                if ending == "ый" {
                    *ending = "ой".to_string();
                }
            }
        }

        let mut forms = Vec::with_capacity(endings.len());
        for ending in &endings {
            let mut form = attach(&self.stem, ending, self.word.stress())?;
            if self.reflexive {
                form.push_str(REFLEXIVE_SUFFIX);
            }
            forms.push(form);
        }
        Ok(CellForms::Generated(forms))
    }

    /// Stem with the mutation class replaced by its counterpart.
    fn mutated_stem(&self, pattern: &str, replacement: &str) -> String {
        let keep = self.stem.chars().count() - pattern.chars().count();
        let mut out: String = self.stem.chars().take(keep).collect();
        out.push_str(replacement);
        out
    }

    fn comparative(&self) -> String {
        if let Some((pattern, replacement)) = self.mutation {
            let base = self.mutated_stem(pattern, replacement);
            let base_len = base.chars().count();
            let stress = match self.word.stress() {
                Some(pos) if pos >= base_len => last_vowel_position(&base),
                other => other,
            };
            insert_stress(&format!("{base}е"), stress)
        } else {
            let form = format!("{}ее", self.stem);
            let stress = if has_single_vowel(&self.stem) {
                Some(form.chars().count() - 2)
            } else {
                self.word.stress()
            };
            insert_stress(&form, stress)
        }
    }

    fn superlative(&self) -> String {
        // "ст" stems take the plain suffix; the mutation applies to the rest.
        let mutation = self.mutation.filter(|&(pattern, _)| pattern != "ст");
        if let Some((pattern, replacement)) = mutation {
            let form = format!("{}айший", self.mutated_stem(pattern, replacement));
            let stress = Some(form.chars().count() - 5);
            insert_stress(&form, stress)
        } else {
            let form = format!("{}ейший", self.stem);
            let stress = if has_single_vowel(&self.stem) {
                Some(form.chars().count() - 5)
            } else {
                self.word.stress()
            };
            insert_stress(&form, stress)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(adj: &RussianAdjective, code: &str) -> String {
        adj.form(AdjectiveSlot::from_code(code).unwrap())
            .unwrap()
            .joined()
    }

    #[test]
    fn slot_inventory() {
        let all = AdjectiveSlot::all();
        assert_eq!(all.len(), 30);
        assert_eq!(AdjectiveSlot::from_code("inst_f"), Some(AdjectiveSlot::Declined(Case::Instrumental, Agreement::Feminine)));
        assert_eq!(AdjectiveSlot::from_code("short_pl"), Some(AdjectiveSlot::Short(Agreement::Plural)));
        assert_eq!(AdjectiveSlot::from_code("vocative"), None);
    }

    #[test]
    fn hard_stem_declension() {
        let adj = RussianAdjective::new("но'вый");
        assert!(!adj.is_soft());
        assert_eq!(form(&adj, "nom_m"), "но'вый");
        assert_eq!(form(&adj, "nom_f"), "но'вая");
        assert_eq!(form(&adj, "nom_n"), "но'вое");
        assert_eq!(form(&adj, "nom_pl"), "но'вые");
        assert_eq!(form(&adj, "gen_m"), "но'вого");
        assert_eq!(form(&adj, "acc_m"), "но'вый/но'вого");
        assert_eq!(form(&adj, "inst_f"), "но'вой/но'вою");
        assert_eq!(form(&adj, "short_m"), "но'в");
        assert_eq!(form(&adj, "short_f"), "но'ва");
    }

    #[test]
    fn soft_stem_declension() {
        let adj = RussianAdjective::new("си'ний");
        assert!(adj.is_soft());
        assert_eq!(form(&adj, "nom_m"), "си'ний");
        assert_eq!(form(&adj, "nom_f"), "си'няя");
        assert_eq!(form(&adj, "nom_n"), "си'нее");
        assert_eq!(form(&adj, "gen_m"), "си'него");
        assert_eq!(form(&adj, "inst_f"), "си'ней/си'нею");
        assert_eq!(form(&adj, "nom_pl"), "си'ние");
    }

    #[test]
    fn velar_stem_is_not_soft() {
        // "-кий" after a velar is a seven-letter-rule spelling, not a
        // soft stem: the hard table applies and "ы" is rewritten "и".
        let adj = RussianAdjective::new("ру'сский");
        assert!(!adj.is_soft());
        assert_eq!(form(&adj, "nom_m"), "ру'сский");
        assert_eq!(form(&adj, "nom_f"), "ру'сская");
        assert_eq!(form(&adj, "nom_pl"), "ру'сские");
    }

    #[test]
    fn stressed_oi_masculine() {
        let adj = RussianAdjective::new("большо'й");
        assert_eq!(form(&adj, "nom_m"), "большо'й");
        assert_eq!(form(&adj, "acc_m"), "большо'й/большо'го");
        // Only nominative/accusative masculine are affected.
        assert_eq!(form(&adj, "gen_m"), "большо'го");
        assert_eq!(form(&adj, "nom_f"), "больша'я");
    }

    #[test]
    fn reflexive_suffix_reattached() {
        let adj = RussianAdjective::new("выдаю'щийся");
        assert_eq!(form(&adj, "nom_f"), "выдаю'щаяся");
        assert_eq!(form(&adj, "gen_m"), "выдаю'щегося");
    }

    #[test]
    fn comparative_mutations() {
        for (accented, expected) in [
            ("дорого'й", "доро'же"),  // г -> ж
            ("гро'мкий", "гро'мче"),  // к -> ч
            ("сухо'й", "су'ше"),      // х -> ш
            ("молодо'й", "моло'же"),  // д -> ж
            ("бога'тый", "бога'че"),  // т -> ч
            ("просто'й", "про'ще"),   // ст -> щ
        ] {
            let adj = RussianAdjective::new(accented);
            assert_eq!(form(&adj, "comparative"), expected, "for {accented}");
        }
    }

    #[test]
    fn comparative_without_mutation() {
        let adj = RussianAdjective::new("краси'вый");
        assert_eq!(form(&adj, "comparative"), "краси'вее");
    }

    #[test]
    fn comparative_single_vowel_stem_stresses_ending() {
        let adj = RussianAdjective::new("но'вый");
        assert_eq!(form(&adj, "comparative"), "нове'е");
    }

    #[test]
    fn superlative_excludes_st_mutation() {
        let adj = RussianAdjective::new("просто'й");
        assert_eq!(form(&adj, "superlative"), "просте'йший");
        // Comparative of the same stem does mutate.
        assert_eq!(form(&adj, "comparative"), "про'ще");
    }

    #[test]
    fn superlative_with_mutation() {
        let adj = RussianAdjective::new("стро'гий");
        assert_eq!(form(&adj, "superlative"), "строжа'йший");
    }

    #[test]
    fn superlative_plain() {
        let adj = RussianAdjective::new("краси'вый");
        assert_eq!(form(&adj, "superlative"), "краси'вейший");
    }
}
