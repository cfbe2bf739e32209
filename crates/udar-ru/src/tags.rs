// Cell-tag encoding for the analysis reports.
//
// Each paradigm cell gets a compact annotation: a "#"-prefixed bit
// string naming which findings apply, followed by per-finding variant
// indices. A collector accumulates the same findings per headword for
// the aggregate columns at the end of the row.

use std::collections::BTreeSet;

use crate::review::SlotReview;

/// A reviewable finding with its report key and bit-string letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    Irregular,
    LaxIrregular,
    StressShift,
    MultipleVariants,
}

impl TagKind {
    pub fn key(self) -> &'static str {
        match self {
            TagKind::Irregular => "irreg_decl",
            TagKind::LaxIrregular => "Irreg_decl",
            TagKind::StressShift => "accent_chg",
            TagKind::MultipleVariants => "multi_vars",
        }
    }

    pub fn bit(self) -> char {
        match self {
            TagKind::Irregular => 'i',
            TagKind::LaxIrregular => 'I',
            TagKind::StressShift => 'a',
            TagKind::MultipleVariants => 'm',
        }
    }

    fn indices(self, review: &SlotReview) -> Option<&BTreeSet<usize>> {
        match self {
            TagKind::Irregular => Some(&review.irregular),
            TagKind::LaxIrregular => Some(&review.lax_irregular),
            TagKind::StressShift => Some(&review.stress_shift),
            TagKind::MultipleVariants => None,
        }
    }

    fn applies(self, review: &SlotReview) -> bool {
        match self.indices(review) {
            Some(set) => !set.is_empty(),
            None => review.multiple_variants,
        }
    }
}

/// Noun reports carry the lax irregularity column; the other reports
/// do not.
pub const NOUN_KINDS: [TagKind; 4] = [
    TagKind::Irregular,
    TagKind::LaxIrregular,
    TagKind::StressShift,
    TagKind::MultipleVariants,
];

pub const SIMPLE_KINDS: [TagKind; 3] = [
    TagKind::Irregular,
    TagKind::StressShift,
    TagKind::MultipleVariants,
];

/// Per-headword tag accumulator. `encode` renders one cell annotation
/// and feeds the aggregate columns read back via [`TagCollector::aggregate`].
#[derive(Debug)]
pub struct TagCollector {
    kinds: &'static [TagKind],
    aggregates: Vec<Vec<String>>,
}

impl TagCollector {
    pub fn new(kinds: &'static [TagKind]) -> Self {
        Self {
            kinds,
            aggregates: vec![Vec::new(); kinds.len()],
        }
    }

    pub fn kinds(&self) -> &'static [TagKind] {
        self.kinds
    }

    /// Render the tag cell for one slot and record its findings.
    pub fn encode(&mut self, slot_code: &str, review: &SlotReview) -> String {
        let mut bits: Vec<char> = vec!['_'; self.kinds.len()];
        let mut tags: Vec<String> = Vec::new();

        for (k, kind) in self.kinds.iter().enumerate() {
            if !kind.applies(review) {
                continue;
            }
            bits[k] = kind.bit();
            match kind.indices(review) {
                Some(set) => {
                    let list = set
                        .iter()
                        .map(|i| i.to_string())
                        .collect::<Vec<_>>()
                        .join(":");
                    tags.push(format!("{}:{}", kind.key(), list));
                    self.aggregates[k].push(format!("{slot_code}:{list}"));
                }
                None => self.aggregates[k].push(slot_code.to_string()),
            }
        }

        let bits_str: String = bits.iter().collect();
        if bits.iter().all(|&b| b == '_') {
            tags.join(", ")
        } else {
            format!("#{bits_str}, {}", tags.join(", "))
        }
    }

    /// Aggregate column value for one finding kind.
    pub fn aggregate(&self, kind: TagKind) -> String {
        self.kinds
            .iter()
            .position(|&k| k == kind)
            .map(|k| self.aggregates[k].join(","))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(
        irregular: &[usize],
        lax: &[usize],
        shift: &[usize],
        multiple: bool,
    ) -> SlotReview {
        SlotReview {
            irregular: irregular.iter().copied().collect(),
            lax_irregular: lax.iter().copied().collect(),
            stress_shift: shift.iter().copied().collect(),
            multiple_variants: multiple,
        }
    }

    #[test]
    fn clean_cell_is_empty() {
        let mut collector = TagCollector::new(&NOUN_KINDS);
        assert_eq!(collector.encode("nom_sg", &review(&[], &[], &[], false)), "");
        assert_eq!(collector.aggregate(TagKind::Irregular), "");
    }

    #[test]
    fn all_bits_set() {
        let mut collector = TagCollector::new(&NOUN_KINDS);
        let cell = collector.encode("gen_pl", &review(&[0, 1], &[0, 1], &[1], true));
        assert_eq!(
            cell,
            "#iIam, irreg_decl:0:1, Irreg_decl:0:1, accent_chg:1"
        );
    }

    #[test]
    fn lax_bit_can_differ_from_strict() {
        let mut collector = TagCollector::new(&NOUN_KINDS);
        let cell = collector.encode("gen_sg", &review(&[1], &[], &[], true));
        assert_eq!(cell, "#i__m, irreg_decl:1");
        assert_eq!(collector.aggregate(TagKind::Irregular), "gen_sg:1");
        assert_eq!(collector.aggregate(TagKind::LaxIrregular), "");
        assert_eq!(collector.aggregate(TagKind::MultipleVariants), "gen_sg");
    }

    #[test]
    fn aggregates_accumulate_across_slots() {
        let mut collector = TagCollector::new(&SIMPLE_KINDS);
        collector.encode("nom_pl", &review(&[0], &[0], &[], false));
        collector.encode("gen_pl", &review(&[0], &[0], &[0], false));
        assert_eq!(
            collector.aggregate(TagKind::Irregular),
            "nom_pl:0,gen_pl:0"
        );
        assert_eq!(collector.aggregate(TagKind::StressShift), "gen_pl:0");
        // The lax column does not exist in the simple layout.
        assert_eq!(collector.aggregate(TagKind::LaxIrregular), "");
    }

    #[test]
    fn simple_layout_has_three_bits() {
        let mut collector = TagCollector::new(&SIMPLE_KINDS);
        let cell = collector.encode("comparative", &review(&[0], &[0], &[0], false));
        assert_eq!(cell, "#ia_, irreg_decl:0, accent_chg:0");
    }
}
