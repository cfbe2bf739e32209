// Analysis report assembly.
//
// One row per headword: identity and metadata columns, then per cell
// the generated form next to its tag annotation, then the aggregate
// tag columns. Rows are sorted by bare form before writing.

use std::path::Path;

use tracing::warn;
use udar_core::grammar::Gender;
use udar_core::letters::REFLEXIVE_SUFFIX;
use udar_ru::review::{adjective_context, noun_context, review_slot};
use udar_ru::tags::{NOUN_KINDS, SIMPLE_KINDS, TagCollector};
use udar_ru::{
    AdjectiveSlot, CellForms, NounSlot, RussianAdjective, RussianNoun, RussianVerb, SlotContext,
    VerbSlot,
};

use crate::headwords::Headword;
use crate::records::{flag_cell, parse_flag};
use crate::store::LexiconError;

const UNDETERMINED: &str = "?";

/// Column-ordered CSV assembly. The first pushed row fixes the header;
/// every row must present the same columns in the same order.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: Vec<(String, String)>) {
        if self.header.is_empty() {
            self.header = row.iter().map(|(k, _)| k.clone()).collect();
        }
        debug_assert_eq!(self.header.len(), row.len());
        self.rows.push(row.into_iter().map(|(_, v)| v).collect());
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sort rows by the first column (the bare form).
    pub fn sort_rows(&mut self) {
        self.rows.sort_by(|a, b| a[0].cmp(&b[0]));
    }

    pub fn write(&self, path: &Path) -> Result<(), LexiconError> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(&self.header)?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn col(key: &str, value: impl Into<String>) -> (String, String) {
    (key.to_string(), value.into())
}

/// Assemble the noun report row, or `None` when the metadata is too
/// broken to build a generator.
pub fn noun_row(headword: &Headword) -> Option<Vec<(String, String)>> {
    let gender = match Gender::from_code(headword.meta("gender")) {
        Ok(gender) => gender,
        Err(e) => {
            warn!(bare = %headword.bare, error = %e, "skipping noun with unusable gender");
            return None;
        }
    };
    let animate = parse_flag(headword.meta("animate")).unwrap_or(false);
    let noun = RussianNoun::new(&headword.accented, gender, animate);

    let mut row = vec![
        col("bare_form", headword.bare.clone()),
        col("accented_form", headword.accented.clone()),
        col(
            "last_letter",
            headword.bare.chars().last().map(String::from).unwrap_or_default(),
        ),
        col("gender", gender.code()),
        col("translations", headword.translations.join("; ")),
        col("is_animate", flag_cell(parse_flag(headword.meta("animate")))),
        col(
            "is_indeclinable",
            flag_cell(parse_flag(headword.meta("indeclinable"))),
        ),
        col("is_sg_only", flag_cell(parse_flag(headword.meta("sg_only")))),
        col("is_pl_only", flag_cell(parse_flag(headword.meta("pl_only")))),
        col("partner", headword.meta("partner")),
        col("usage", headword.usage.clone()),
    ];

    let mut collector = TagCollector::new(&NOUN_KINDS);
    for slot in NounSlot::ALL {
        let code = slot.code();
        let generated = generated_or_undetermined(&headword.bare, &code, noun.form(slot));
        let review = review_slot(
            &generated,
            headword.attested(&code),
            noun_context(slot, gender),
        );
        row.push(col(&code, generated.joined()));
        row.push((format!("{code}_tags"), collector.encode(&code, &review)));
    }
    for kind in NOUN_KINDS {
        row.push(col(kind.key(), collector.aggregate(kind)));
    }
    Some(row)
}

/// Assemble the adjective report row.
pub fn adjective_row(headword: &Headword) -> Vec<(String, String)> {
    let adjective = RussianAdjective::new(&headword.accented);
    // Three letters cover the long-form ending; reflexive stems show
    // "-ся" plus the ending.
    let suffix: String = {
        let chars: Vec<char> = headword.bare.chars().collect();
        let take = if headword.bare.ends_with(REFLEXIVE_SUFFIX) {
            5
        } else {
            3
        };
        chars[chars.len().saturating_sub(take)..].iter().collect()
    };

    let mut row = vec![
        col("bare_form", headword.bare.clone()),
        col("accented_form", headword.accented.clone()),
        col("suffix", suffix),
        col("translations", headword.translations.join("; ")),
        col(
            "is_incomparable",
            flag_cell(parse_flag(headword.meta("incomparable"))),
        ),
        col("usage", headword.usage.clone()),
    ];

    let mut collector = TagCollector::new(&SIMPLE_KINDS);
    for slot in AdjectiveSlot::all() {
        let code = slot.code();
        let generated = generated_or_undetermined(&headword.bare, &code, adjective.form(slot));
        let review = review_slot(&generated, headword.attested(&code), adjective_context(slot));
        row.push(col(&code, generated.joined()));
        row.push((format!("{code}_tags"), collector.encode(&code, &review)));
    }
    for kind in SIMPLE_KINDS {
        row.push(col(kind.key(), collector.aggregate(kind)));
    }
    row
}

/// Assemble the verb report row.
pub fn verb_row(headword: &Headword) -> Vec<(String, String)> {
    let attested_sg2 = headword
        .attested("presfut_sg2")
        .first()
        .map(|v| v.bare.clone());
    let verb = RussianVerb::new(&headword.accented, attested_sg2.as_deref());
    for diagnostic in verb.diagnostics() {
        warn!(bare = %headword.bare, %diagnostic, "verb derivation incomplete");
    }

    let mut row = vec![
        col("infinitive", headword.bare.clone()),
        col("accented_infinitive", headword.accented.clone()),
        col("stem", verb.stem().unwrap_or(UNDETERMINED)),
        col(
            "suffix",
            verb.suffix().unwrap_or_else(|| UNDETERMINED.to_string()),
        ),
        col("aspect", headword.meta("aspect")),
        col("partners", headword.meta("partner")),
        col(
            "conjugation_type",
            verb.conjugation()
                .map(|c| c.code())
                .unwrap_or_else(|| UNDETERMINED.to_string()),
        ),
    ];

    let mut collector = TagCollector::new(&SIMPLE_KINDS);
    for slot in VerbSlot::ALL {
        let code = slot.code();
        let generated =
            generated_or_undetermined(&headword.bare, code, verb.form(slot));
        let review = review_slot(&generated, headword.attested(code), SlotContext::Plain);
        row.push(col(code, generated.joined()));
        row.push((format!("{code}_tags"), collector.encode(code, &review)));
    }
    for kind in SIMPLE_KINDS {
        row.push(col(kind.key(), collector.aggregate(kind)));
    }
    row
}

fn generated_or_undetermined(
    bare: &str,
    slot_code: &str,
    result: Result<CellForms, udar_ru::MorphError>,
) -> CellForms {
    match result {
        Ok(forms) => forms,
        Err(e) => {
            warn!(bare, slot_code, error = %e, "generation failed");
            CellForms::Undetermined
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use udar_ru::Variant;

    fn noun_headword() -> Headword {
        let mut meta = BTreeMap::new();
        meta.insert("gender".to_string(), "f".to_string());
        meta.insert("animate".to_string(), "1".to_string());
        meta.insert("indeclinable".to_string(), "0".to_string());
        meta.insert("sg_only".to_string(), "0".to_string());
        meta.insert("pl_only".to_string(), "0".to_string());
        meta.insert("partner".to_string(), String::new());

        let mut ground_truth = BTreeMap::new();
        ground_truth.insert(
            "nom_pl".to_string(),
            vec![Variant {
                position: 1,
                bare: "собаки".into(),
                accented: "соба'ки".into(),
            }],
        );

        Headword {
            id: "1".into(),
            bare: "собака".into(),
            accented: "соба'ка".into(),
            usage: String::new(),
            meta,
            ground_truth,
            translations: vec!["dog".into()],
        }
    }

    #[test]
    fn noun_row_layout() {
        let row = noun_row(&noun_headword()).unwrap();
        // 11 meta columns, 12 cells with tags, 4 aggregates.
        assert_eq!(row.len(), 11 + 24 + 4);
        assert_eq!(row[0], ("bare_form".to_string(), "собака".to_string()));

        let cell = row.iter().find(|(k, _)| k == "nom_pl").unwrap();
        assert_eq!(cell.1, "соба'ки");
        let tags = row.iter().find(|(k, _)| k == "nom_pl_tags").unwrap();
        assert_eq!(tags.1, "");
        let aggregate = row.iter().find(|(k, _)| k == "irreg_decl").unwrap();
        assert_eq!(aggregate.1, "");
    }

    #[test]
    fn noun_row_requires_gender() {
        let mut headword = noun_headword();
        headword.meta.insert("gender".into(), "x".into());
        assert!(noun_row(&headword).is_none());
    }

    #[test]
    fn adjective_row_layout() {
        let headword = Headword {
            id: "1".into(),
            bare: "новый".into(),
            accented: "но'вый".into(),
            usage: String::new(),
            meta: BTreeMap::from([("incomparable".to_string(), "0".to_string())]),
            ground_truth: BTreeMap::new(),
            translations: vec!["new".into()],
        };
        let row = adjective_row(&headword);
        // 6 meta columns, 30 cells with tags, 3 aggregates.
        assert_eq!(row.len(), 6 + 60 + 3);
        let suffix = row.iter().find(|(k, _)| k == "suffix").unwrap();
        assert_eq!(suffix.1, "вый");
        let comparative = row.iter().find(|(k, _)| k == "comparative").unwrap();
        assert_eq!(comparative.1, "нове'е");
    }

    #[test]
    fn reflexive_adjective_suffix_column() {
        let headword = Headword {
            id: "2".into(),
            bare: "выдающийся".into(),
            accented: "выдаю'щийся".into(),
            usage: String::new(),
            meta: BTreeMap::from([("incomparable".to_string(), "1".to_string())]),
            ground_truth: BTreeMap::new(),
            translations: vec!["outstanding".into()],
        };
        let row = adjective_row(&headword);
        let suffix = row.iter().find(|(k, _)| k == "suffix").unwrap();
        assert_eq!(suffix.1, "щийся");
    }

    #[test]
    fn verb_row_layout() {
        let mut ground_truth = BTreeMap::new();
        ground_truth.insert(
            "presfut_sg2".to_string(),
            vec![Variant {
                position: 1,
                bare: "думаешь".into(),
                accented: "ду'маешь".into(),
            }],
        );
        let headword = Headword {
            id: "1".into(),
            bare: "думать".into(),
            accented: "ду'мать".into(),
            usage: String::new(),
            meta: BTreeMap::from([
                ("aspect".to_string(), "imperfective".to_string()),
                ("partner".to_string(), "подумать".to_string()),
            ]),
            ground_truth,
            translations: vec!["to think".into()],
        };
        let row = verb_row(&headword);
        // 7 meta columns, 12 cells with tags, 3 aggregates.
        assert_eq!(row.len(), 7 + 24 + 3);
        let conj = row.iter().find(|(k, _)| k == "conjugation_type").unwrap();
        assert_eq!(conj.1, "е-conj");
        let sg1 = row.iter().find(|(k, _)| k == "presfut_sg1").unwrap();
        assert_eq!(sg1.1, "ду'маю");
    }

    #[test]
    fn builder_sorts_by_bare_form() {
        let mut builder = ReportBuilder::new();
        builder.push(vec![col("bare_form", "собака"), col("x", "1")]);
        builder.push(vec![col("bare_form", "адрес"), col("x", "2")]);
        builder.sort_rows();
        assert_eq!(builder.rows[0][0], "адрес");
        assert_eq!(builder.len(), 2);
    }
}
