// Headword selection and assembly.
//
// A headword is a dictionary entry joined with its metadata row, its
// English translations and its attested paradigm cells. Selection runs
// over a corpus token set: an entry is kept when its dictionary form or
// any of its attested forms occurs in the corpus.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;
use udar_core::stress::supplement_stress;
use udar_ru::Variant;

use crate::store::Lexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    Verb,
}

impl PartOfSpeech {
    /// Value of the "type" column in words.csv.
    pub fn type_code(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Verb => "verb",
        }
    }

    /// Prefix of the "form_type" column in words_forms.csv.
    pub fn form_prefix(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "ru_noun_",
            PartOfSpeech::Adjective => "ru_adj_",
            PartOfSpeech::Verb => "ru_verb_",
        }
    }

    /// Map a database form type onto a paradigm slot code.
    ///
    /// The database orders noun and long-adjective keys number-first
    /// ("ru_noun_sg_nom"); the slot codes are case-first ("nom_sg"), so
    /// the parts are reversed. Short-adjective and verb keys are already
    /// in slot order.
    pub fn slot_code(self, form_type: &str) -> Option<String> {
        let key = form_type.strip_prefix(self.form_prefix())?;
        let reverse = match self {
            PartOfSpeech::Noun => true,
            PartOfSpeech::Adjective => !key.contains("short"),
            PartOfSpeech::Verb => false,
        };
        if reverse {
            let mut parts: Vec<&str> = key.split('_').collect();
            parts.reverse();
            Some(parts.join("_"))
        } else {
            Some(key.to_string())
        }
    }
}

/// One selected dictionary entry with everything the analysis needs.
#[derive(Debug, Clone)]
pub struct Headword {
    pub id: String,
    pub bare: String,
    pub accented: String,
    pub usage: String,
    /// Part-of-speech metadata columns, verbatim from the database.
    pub meta: BTreeMap<String, String>,
    /// Attested paradigm cells by slot code, in database order.
    pub ground_truth: BTreeMap<String, Vec<Variant>>,
    pub translations: Vec<String>,
}

impl Headword {
    pub fn meta(&self, key: &str) -> &str {
        self.meta.get(key).map(String::as_str).unwrap_or("")
    }

    /// Attested variants of one cell; empty when the database has none.
    pub fn attested(&self, slot_code: &str) -> &[Variant] {
        self.ground_truth
            .get(slot_code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Select and assemble the headwords of one part of speech. With a
/// token set, only entries the corpus mentions are kept; without one,
/// every entry of that part of speech is returned.
pub fn collect_headwords(
    lexicon: &Lexicon,
    pos: PartOfSpeech,
    tokens: Option<&BTreeSet<String>>,
) -> Vec<Headword> {
    let mentioned = |bare: &str| tokens.is_none_or(|set| set.contains(bare));

    let mut ids: BTreeSet<&str> = BTreeSet::new();
    for word in &lexicon.words {
        if word.word_type == pos.type_code() && mentioned(&word.bare) {
            ids.insert(&word.id);
        }
    }
    for form in &lexicon.words_forms {
        if form.form_type.starts_with(pos.form_prefix()) && mentioned(&form.form_bare) {
            ids.insert(&form.word_id);
        }
    }
    debug!(count = ids.len(), pos = pos.type_code(), "headword ids selected");

    let mut headwords: Vec<Headword> = Vec::new();
    let mut index: BTreeMap<&str, usize> = BTreeMap::new();
    for word in &lexicon.words {
        // Ids picked up through an inflected form may belong to another
        // part of speech; the type column decides.
        if !ids.contains(word.id.as_str()) || word.word_type != pos.type_code() {
            continue;
        }
        index.insert(&word.id, headwords.len());
        headwords.push(Headword {
            id: word.id.clone(),
            bare: word.bare.clone(),
            accented: supplement_stress(&word.accented),
            usage: word.usage_en.clone(),
            meta: BTreeMap::new(),
            ground_truth: BTreeMap::new(),
            translations: Vec::new(),
        });
    }

    match pos {
        PartOfSpeech::Noun => {
            for record in &lexicon.nouns {
                if let Some(&i) = index.get(record.word_id.as_str()) {
                    let meta = &mut headwords[i].meta;
                    meta.insert("gender".into(), record.gender.clone());
                    meta.insert("animate".into(), record.animate.clone());
                    meta.insert("indeclinable".into(), record.indeclinable.clone());
                    meta.insert("sg_only".into(), record.sg_only.clone());
                    meta.insert("pl_only".into(), record.pl_only.clone());
                    meta.insert("partner".into(), record.partner.clone());
                }
            }
        }
        PartOfSpeech::Adjective => {
            for record in &lexicon.adjectives {
                if let Some(&i) = index.get(record.word_id.as_str()) {
                    headwords[i]
                        .meta
                        .insert("incomparable".into(), record.incomparable.clone());
                }
            }
        }
        PartOfSpeech::Verb => {
            for record in &lexicon.verbs {
                if let Some(&i) = index.get(record.word_id.as_str()) {
                    let meta = &mut headwords[i].meta;
                    meta.insert("aspect".into(), record.aspect.clone());
                    meta.insert("partner".into(), record.partner.clone());
                }
            }
        }
    }

    for record in &lexicon.translations {
        if record.lang != "en" {
            continue;
        }
        if let Some(&i) = index.get(record.word_id.as_str()) {
            headwords[i].translations.push(record.tl.trim().to_string());
        }
    }

    for record in &lexicon.words_forms {
        let Some(&i) = index.get(record.word_id.as_str()) else {
            continue;
        };
        if record.form_bare.is_empty() {
            continue;
        }
        let Some(slot_code) = pos.slot_code(&record.form_type) else {
            continue;
        };
        headwords[i]
            .ground_truth
            .entry(slot_code)
            .or_default()
            .push(Variant {
                position: record.position.parse().unwrap_or(0),
                bare: record.form_bare.clone(),
                accented: supplement_stress(&record.form),
            });
    }

    headwords
}
