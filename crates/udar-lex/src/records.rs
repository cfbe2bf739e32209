// Row types of the CSV database files. Column names follow the files;
// columns not listed here are ignored by the reader.

use serde::Deserialize;

/// One row of words.csv: a dictionary headword.
#[derive(Debug, Clone, Deserialize)]
pub struct WordRecord {
    pub id: String,
    pub bare: String,
    pub accented: String,
    #[serde(rename = "type")]
    pub word_type: String,
    #[serde(default)]
    pub usage_en: String,
}

/// One row of nouns.csv: noun metadata keyed by headword id.
#[derive(Debug, Clone, Deserialize)]
pub struct NounRecord {
    pub word_id: String,
    pub gender: String,
    pub animate: String,
    pub indeclinable: String,
    pub sg_only: String,
    pub pl_only: String,
    #[serde(default)]
    pub partner: String,
}

/// One row of adjectives.csv.
#[derive(Debug, Clone, Deserialize)]
pub struct AdjectiveRecord {
    pub word_id: String,
    pub incomparable: String,
}

/// One row of verbs.csv.
#[derive(Debug, Clone, Deserialize)]
pub struct VerbRecord {
    pub word_id: String,
    pub aspect: String,
    #[serde(default)]
    pub partner: String,
}

/// One row of words_forms.csv: an attested inflected form.
#[derive(Debug, Clone, Deserialize)]
pub struct WordFormRecord {
    pub word_id: String,
    pub form_type: String,
    pub position: String,
    pub form: String,
    #[serde(rename = "_form_bare")]
    pub form_bare: String,
}

/// One row of translations.csv.
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationRecord {
    pub word_id: String,
    pub lang: String,
    pub tl: String,
}

/// Database boolean columns hold "0"/"1", or free text when unknown.
pub fn parse_flag(value: &str) -> Option<bool> {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_digit()) {
        Some(value.parse::<u64>().ok()? != 0)
    } else {
        None
    }
}

/// Render a parsed flag back into a report cell.
pub fn flag_cell(flag: Option<bool>) -> String {
    match flag {
        Some(value) => value.to_string(),
        None => String::new(),
    }
}
