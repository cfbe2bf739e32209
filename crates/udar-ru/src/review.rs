// Comparison of generated forms against attested database forms.
//
// The unit of comparison is one paradigm cell: the generated candidates
// are joined into a single reference string and every attested variant
// is measured against it, letter-wise and stress-wise. A handful of
// slot-specific exemptions keep spelling-level alternations that are
// not real irregularities out of the counts.

use std::collections::BTreeSet;

use udar_core::grammar::{Case, Gender, Number};
use udar_core::letters::FIVE_LETTER_RULE;
use udar_core::stress::{stress_position, strip_stress};

use crate::adjective::AdjectiveSlot;
use crate::noun::NounSlot;
use crate::word::CellForms;

/// One attested form of a paradigm cell, as stored in the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Variant ordinal within the cell (database column, 1-based).
    pub position: u32,
    pub bare: String,
    pub accented: String,
}

/// Slot-specific comparison behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotContext {
    Plain,
    /// Masculine instrumental singular: "-ом"/"-ем" after a sibilant is a
    /// spelling alternation, not an irregularity.
    NounInstSgMasculine,
    /// Feminine instrumental singular: the long "-ою"/"-ёю"/"-ею" variants
    /// are regular alternatives.
    NounInstSgFeminine,
    /// Genitive singular: a second "-у" variant (partitive) is excluded
    /// from the lax irregularity count.
    NounGenSg,
    /// Prepositional singular: a second "-у" variant (locative) is
    /// excluded from the lax irregularity count.
    NounPrepSg,
    /// Cells generated with two acceptable endings: a variant equal to
    /// either candidate is regular.
    AdjectiveTupleEnding,
    /// Comparatives: the "-ей" short variant and the "по-" prefix are
    /// regular alternatives.
    Comparative,
}

/// Comparison context for a noun cell.
pub fn noun_context(slot: NounSlot, gender: Gender) -> SlotContext {
    match (slot.case, slot.number, gender) {
        (Case::Instrumental, Number::Singular, Gender::Masculine) => {
            SlotContext::NounInstSgMasculine
        }
        (Case::Instrumental, Number::Singular, Gender::Feminine) => {
            SlotContext::NounInstSgFeminine
        }
        (Case::Genitive, Number::Singular, _) => SlotContext::NounGenSg,
        (Case::Prepositional, Number::Singular, _) => SlotContext::NounPrepSg,
        _ => SlotContext::Plain,
    }
}

/// Comparison context for an adjective cell.
pub fn adjective_context(slot: AdjectiveSlot) -> SlotContext {
    use crate::adjective::Agreement;
    match slot {
        AdjectiveSlot::Declined(Case::Accusative, Agreement::Masculine | Agreement::Plural)
        | AdjectiveSlot::Declined(Case::Instrumental, Agreement::Feminine) => {
            SlotContext::AdjectiveTupleEnding
        }
        AdjectiveSlot::Comparative => SlotContext::Comparative,
        _ => SlotContext::Plain,
    }
}

/// Outcome of reviewing one cell. Index sets refer to attested-variant
/// ordinals (0-based) in the order they were passed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotReview {
    /// Variants whose letters differ from the generated form.
    pub irregular: BTreeSet<usize>,
    /// `irregular` minus the second-case genitive/locative "-у" variants.
    pub lax_irregular: BTreeSet<usize>,
    /// Variants whose stress position differs from the generated form.
    pub stress_shift: BTreeSet<usize>,
    /// The cell has more than one attested variant.
    pub multiple_variants: bool,
}

impl SlotReview {
    pub fn is_clean(&self) -> bool {
        self.irregular.is_empty() && self.stress_shift.is_empty() && !self.multiple_variants
    }
}

fn last_chars(s: &str, n: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    chars[chars.len().saturating_sub(n)..].iter().collect()
}

fn drop_last_chars(s: &str, n: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    chars[..chars.len().saturating_sub(n)].iter().collect()
}

/// Some database cells wrap a rare variant in parentheses.
fn unwrap_parens(form: &str) -> &str {
    form.strip_prefix('(')
        .and_then(|f| f.strip_suffix(')'))
        .unwrap_or(form)
}

fn normalize_jo(s: &str) -> String {
    strip_stress(s).replace('ё', "е")
}

/// Compare one generated cell against its attested variants.
pub fn review_slot(generated: &CellForms, attested: &[Variant], context: SlotContext) -> SlotReview {
    let reference = match generated {
        CellForms::Generated(forms) => forms.join("/"),
        CellForms::Undetermined => String::new(),
    };
    let reference_bare = strip_stress(&reference);
    let reference_stress = stress_position(&reference);

    let mut review = SlotReview {
        multiple_variants: attested.len() > 1,
        ..SlotReview::default()
    };

    let accented: Vec<&str> = attested
        .iter()
        .map(|v| unwrap_parens(&v.accented))
        .collect();

    for (i, form) in accented.iter().enumerate() {
        if strip_stress(form) != reference_bare {
            review.irregular.insert(i);
        }
        if stress_position(form) != reference_stress {
            review.stress_shift.insert(i);
        }
    }

    match context {
        SlotContext::NounInstSgMasculine if !review.irregular.is_empty() => {
            for (i, form) in accented.iter().enumerate() {
                let gt = strip_stress(form);
                let gt_len = gt.chars().count();
                if gt_len > 3
                    && reference_bare.chars().count() > 3
                    && drop_last_chars(&gt, 2) == drop_last_chars(&reference_bare, 2)
                    && FIVE_LETTER_RULE.contains(gt.chars().nth(gt_len - 3).unwrap_or(' '))
                    && {
                        let pair =
                            BTreeSet::from([last_chars(&gt, 2), last_chars(&reference_bare, 2)]);
                        pair == BTreeSet::from(["ом".to_string(), "ем".to_string()])
                    }
                {
                    review.irregular.remove(&i);
                }
            }
        }
        SlotContext::NounInstSgFeminine => {
            for (i, form) in accented.iter().enumerate() {
                if matches!(last_chars(&strip_stress(form), 2).as_str(), "ою" | "ёю" | "ею") {
                    review.irregular.remove(&i);
                }
            }
        }
        SlotContext::AdjectiveTupleEnding => {
            let candidates = generated.forms();
            for (i, form) in accented.iter().enumerate() {
                if candidates.iter().any(|c| c == form) {
                    review.irregular.remove(&i);
                }
            }
        }
        SlotContext::Comparative => {
            let reference_norm = normalize_jo(&reference);
            let short = format!("{}ей", drop_last_chars(&reference_norm, 2));
            for (i, form) in accented.iter().enumerate() {
                let norm = normalize_jo(form);
                if norm == short
                    || norm == format!("по{reference_norm}")
                    || norm == format!("по{short}")
                {
                    review.irregular.remove(&i);
                }
            }
        }
        _ => {}
    }

    review.lax_irregular = review.irregular.clone();
    let second_case_final = match context {
        SlotContext::NounGenSg => Some(('а', 'у')),
        SlotContext::NounPrepSg => Some(('е', 'у')),
        _ => None,
    };
    if let Some((regular, second)) = second_case_final {
        let finals: BTreeSet<char> = accented
            .iter()
            .filter_map(|form| strip_stress(form).chars().last())
            .collect();
        if accented.len() == 2 && finals == BTreeSet::from([regular, second]) {
            if let Some(i) = accented
                .iter()
                .position(|form| strip_stress(form).ends_with(second))
            {
                review.lax_irregular.remove(&i);
            }
        }
    }

    review
}
