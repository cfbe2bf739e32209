// Ground-truth patches.
//
// The database has known defects: wrong stress marks, truncated forms,
// swapped columns. Patches describe the corrections as data, keyed by
// the headword's bare form, so they can also be supplied as a JSON file
// next to the database.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use udar_core::stress::{insert_stress, strip_stress, stress_position};
use udar_ru::Variant;

use crate::headwords::{Headword, PartOfSpeech};
use crate::store::LexiconError;

/// Replacement cell content used by [`PatchOp::ReplaceSlot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchVariant {
    pub bare: String,
    pub accented: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PatchOp {
    /// Correct the headword's accented form.
    SetHeadwordAccent { accented: String },
    /// Correct the headword's bare form (флéшка arrived with a Latin
    /// "é" in the dictionary column).
    SetBare { bare: String },
    /// Correct one metadata column.
    SetMeta { key: String, value: String },
    /// Correct the accented spelling of one attested variant.
    SetVariantAccent {
        slot: String,
        index: usize,
        accented: String,
    },
    /// Replace one attested variant entirely.
    SetVariant {
        slot: String,
        index: usize,
        bare: String,
        accented: String,
    },
    /// Replace a whole cell.
    ReplaceSlot {
        slot: String,
        variants: Vec<PatchVariant>,
    },
    /// Copy a cell over another (министр: accusative = genitive).
    CopySlot { from: String, to: String },
    /// Swap two cells (ясный: instrumental and prepositional columns
    /// arrived interchanged).
    SwapSlots { a: String, b: String },
    /// Split a cell whose single variant holds several delimited forms.
    SplitVariants { slot: String, delimiter: String },
    /// Substring rewrite over every attested accented form (combining
    /// accents folded into the apostrophe convention).
    RewriteAccents { from: String, to: String },
    /// Prepend a prefix to every attested variant (MP3-плеер arrived
    /// with the "MP3-" part stripped from its forms).
    PrefixForms { prefix: String },
    /// Re-mark every attested form at the headword's stress position.
    NormalizeAccents,
}

/// All corrections for one headword.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patch {
    pub bare: String,
    pub ops: Vec<PatchOp>,
}

/// Read additional patches from a JSON array file.
pub fn load_patches(path: &Path) -> Result<Vec<Patch>, LexiconError> {
    let text = std::fs::read_to_string(path)?;
    serde_json::from_str(&text)
        .map_err(|e| LexiconError::Patch(path.display().to_string(), e))
}

/// Apply every matching patch in order.
pub fn apply_patches(headwords: &mut [Headword], patches: &[Patch]) {
    for patch in patches {
        for headword in headwords.iter_mut() {
            if headword.bare != patch.bare {
                continue;
            }
            debug!(bare = %patch.bare, ops = patch.ops.len(), "applying patch");
            for op in &patch.ops {
                apply_op(headword, op);
            }
        }
    }
}

fn apply_op(headword: &mut Headword, op: &PatchOp) {
    match op {
        PatchOp::SetHeadwordAccent { accented } => {
            headword.accented = accented.clone();
        }
        PatchOp::SetBare { bare } => {
            headword.bare = bare.clone();
        }
        PatchOp::SetMeta { key, value } => {
            headword.meta.insert(key.clone(), value.clone());
        }
        PatchOp::SetVariantAccent {
            slot,
            index,
            accented,
        } => {
            match headword
                .ground_truth
                .get_mut(slot)
                .and_then(|v| v.get_mut(*index))
            {
                Some(variant) => variant.accented = accented.clone(),
                None => warn!(bare = %headword.bare, slot, index, "patch target missing"),
            }
        }
        PatchOp::SetVariant {
            slot,
            index,
            bare,
            accented,
        } => {
            match headword
                .ground_truth
                .get_mut(slot)
                .and_then(|v| v.get_mut(*index))
            {
                Some(variant) => {
                    variant.bare = bare.clone();
                    variant.accented = accented.clone();
                }
                None => warn!(bare = %headword.bare, slot, index, "patch target missing"),
            }
        }
        PatchOp::ReplaceSlot { slot, variants } => {
            let cell = variants
                .iter()
                .enumerate()
                .map(|(i, v)| Variant {
                    position: i as u32 + 1,
                    bare: v.bare.clone(),
                    accented: v.accented.clone(),
                })
                .collect();
            headword.ground_truth.insert(slot.clone(), cell);
        }
        PatchOp::CopySlot { from, to } => match headword.ground_truth.get(from) {
            Some(cell) => {
                let cell = cell.clone();
                headword.ground_truth.insert(to.clone(), cell);
            }
            None => warn!(bare = %headword.bare, from, "patch source missing"),
        },
        PatchOp::SwapSlots { a, b } => {
            let first = headword.ground_truth.remove(a);
            let second = headword.ground_truth.remove(b);
            if let Some(cell) = second {
                headword.ground_truth.insert(a.clone(), cell);
            }
            if let Some(cell) = first {
                headword.ground_truth.insert(b.clone(), cell);
            }
        }
        PatchOp::SplitVariants { slot, delimiter } => {
            let Some(cell) = headword.ground_truth.get_mut(slot) else {
                warn!(bare = %headword.bare, slot, "patch target missing");
                return;
            };
            let Some(first) = cell.first() else {
                return;
            };
            let split: Vec<Variant> = first
                .accented
                .split(delimiter.as_str())
                .enumerate()
                .map(|(i, form)| Variant {
                    position: i as u32 + 1,
                    bare: strip_stress(form),
                    accented: form.to_string(),
                })
                .collect();
            *cell = split;
        }
        PatchOp::RewriteAccents { from, to } => {
            for cell in headword.ground_truth.values_mut() {
                for variant in cell {
                    variant.accented = variant.accented.replace(from.as_str(), to.as_str());
                }
            }
        }
        PatchOp::PrefixForms { prefix } => {
            for cell in headword.ground_truth.values_mut() {
                for variant in cell {
                    variant.bare = format!("{prefix}{}", variant.bare);
                    variant.accented = format!("{prefix}{}", variant.accented);
                }
            }
        }
        PatchOp::NormalizeAccents => {
            let stress = stress_position(&headword.accented);
            for cell in headword.ground_truth.values_mut() {
                for variant in cell {
                    variant.accented = insert_stress(&strip_stress(&variant.accented), stress);
                }
            }
        }
    }
}

/// Corrections for defects observed in the shipped database.
pub fn builtin_patches(pos: PartOfSpeech) -> Vec<Patch> {
    let patch = |bare: &str, ops: Vec<PatchOp>| Patch {
        bare: bare.to_string(),
        ops,
    };
    let accent = |slot: &str, index: usize, accented: &str| PatchOp::SetVariantAccent {
        slot: slot.to_string(),
        index,
        accented: accented.to_string(),
    };
    let copy = |from: &str, to: &str| PatchOp::CopySlot {
        from: from.to_string(),
        to: to.to_string(),
    };

    match pos {
        PartOfSpeech::Noun => vec![
            patch(
                "менеджер",
                vec![PatchOp::SetMeta {
                    key: "animate".into(),
                    value: "1".into(),
                }],
            ),
            patch(
                "использование",
                vec![accent("inst_sg", 0, "испо'льзованием")],
            ),
            patch("жизнь", vec![accent("prep_sg", 0, "жи'зни")]),
            patch("голубь", vec![accent("nom_sg", 0, "го'лубь")]),
            patch("фотоаппарат", vec![accent("inst_sg", 0, "фотоаппара'том")]),
            patch(
                "логин",
                vec![PatchOp::SetHeadwordAccent {
                    accented: "логи'н".into(),
                }],
            ),
            patch(
                "стих",
                vec![PatchOp::SetHeadwordAccent {
                    accented: "сти'х".into(),
                }],
            ),
            // Animate accusatives stored as nominatives.
            patch(
                "министр",
                vec![copy("gen_sg", "acc_sg"), copy("gen_pl", "acc_pl")],
            ),
            patch(
                "президент",
                vec![copy("gen_sg", "acc_sg"), copy("gen_pl", "acc_pl")],
            ),
            // Latin "é" in the dictionary column, combining acute in the
            // attested forms.
            patch(
                "фл\u{e9}шка",
                vec![
                    PatchOp::SetBare {
                        bare: "флешка".into(),
                    },
                    PatchOp::SetHeadwordAccent {
                        accented: "фле'шка".into(),
                    },
                    PatchOp::RewriteAccents {
                        from: "е\u{301}".into(),
                        to: "е'".into(),
                    },
                ],
            ),
            patch(
                "MP3-плеер",
                vec![
                    PatchOp::PrefixForms {
                        prefix: "MP3-".into(),
                    },
                    accent("gen_sg", 0, "MP3-пле'ера"),
                ],
            ),
        ],
        PartOfSpeech::Adjective => vec![
            patch(
                "рабочий",
                vec![
                    PatchOp::ReplaceSlot {
                        slot: "nom_n".into(),
                        variants: vec![PatchVariant {
                            bare: "рабочее".into(),
                            accented: "рабо'чее".into(),
                        }],
                    },
                    copy("nom_n", "acc_n"),
                ],
            ),
            patch(
                "спокойный",
                vec![PatchOp::ReplaceSlot {
                    slot: "prep_f".into(),
                    variants: vec![PatchVariant {
                        bare: "спокойной".into(),
                        accented: "споко'йной".into(),
                    }],
                }],
            ),
            patch(
                "серьёзный",
                vec![PatchOp::ReplaceSlot {
                    slot: "comparative".into(),
                    variants: vec![
                        PatchVariant {
                            bare: "серьёзнее".into(),
                            accented: "серьё'знее".into(),
                        },
                        PatchVariant {
                            bare: "серьёзней".into(),
                            accented: "серьё'зней".into(),
                        },
                    ],
                }],
            ),
            patch(
                "функциональный",
                vec![
                    PatchOp::ReplaceSlot {
                        slot: "prep_m".into(),
                        variants: vec![PatchVariant {
                            bare: "функциональном".into(),
                            accented: "функциона'льном".into(),
                        }],
                    },
                    PatchOp::ReplaceSlot {
                        slot: "prep_f".into(),
                        variants: vec![PatchVariant {
                            bare: "функциональной".into(),
                            accented: "функциона'льной".into(),
                        }],
                    },
                    copy("prep_m", "prep_n"),
                ],
            ),
            patch("готовимый", vec![PatchOp::NormalizeAccents]),
            patch("танцуемый", vec![PatchOp::NormalizeAccents]),
            patch(
                "украинский",
                vec![
                    PatchOp::NormalizeAccents,
                    PatchOp::SetVariant {
                        slot: "inst_f".into(),
                        index: 1,
                        bare: "(украинскою)".into(),
                        accented: "(украи'нскою)".into(),
                    },
                ],
            ),
            // Truncated stems in the doubled-ending cells.
            patch(
                "арестованный",
                vec![
                    PatchOp::SetVariant {
                        slot: "acc_m".into(),
                        index: 1,
                        bare: "арестованного".into(),
                        accented: "аресто'ванного".into(),
                    },
                    PatchOp::SetVariant {
                        slot: "acc_pl".into(),
                        index: 1,
                        bare: "арестованных".into(),
                        accented: "аресто'ванных".into(),
                    },
                    PatchOp::SetVariant {
                        slot: "inst_f".into(),
                        index: 1,
                        bare: "арестованною".into(),
                        accented: "аресто'ванною".into(),
                    },
                ],
            ),
            patch(
                "ясный",
                vec![
                    PatchOp::SwapSlots {
                        a: "inst_m".into(),
                        b: "prep_m".into(),
                    },
                    PatchOp::SwapSlots {
                        a: "inst_f".into(),
                        b: "prep_f".into(),
                    },
                    PatchOp::SwapSlots {
                        a: "inst_n".into(),
                        b: "prep_n".into(),
                    },
                ],
            ),
            patch(
                "точный",
                vec![
                    PatchOp::SwapSlots {
                        a: "inst_m".into(),
                        b: "prep_m".into(),
                    },
                    PatchOp::SwapSlots {
                        a: "inst_f".into(),
                        b: "prep_f".into(),
                    },
                    PatchOp::SwapSlots {
                        a: "inst_n".into(),
                        b: "prep_n".into(),
                    },
                    PatchOp::SplitVariants {
                        slot: "short_pl".into(),
                        delimiter: "//".into(),
                    },
                ],
            ),
            patch(
                "далёкий",
                vec![PatchOp::SplitVariants {
                    slot: "short_pl".into(),
                    delimiter: "//".into(),
                }],
            ),
            patch(
                "глупый",
                vec![PatchOp::SplitVariants {
                    slot: "short_pl".into(),
                    delimiter: "//".into(),
                }],
            ),
            patch(
                "новый",
                vec![PatchOp::SplitVariants {
                    slot: "short_pl".into(),
                    delimiter: " / ".into(),
                }],
            ),
            patch(
                "кислый",
                vec![PatchOp::SetVariant {
                    slot: "short_pl".into(),
                    index: 1,
                    bare: "кислы".into(),
                    accented: "кислы'".into(),
                }],
            ),
        ],
        PartOfSpeech::Verb => Vec::new(),
    }
}
