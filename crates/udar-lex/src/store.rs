// Database loading and corpus token extraction.

use std::collections::BTreeSet;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use crate::records::{
    AdjectiveRecord, NounRecord, TranslationRecord, VerbRecord, WordFormRecord, WordRecord,
};

#[derive(Debug, thiserror::Error)]
pub enum LexiconError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("patch file {0:?}: {1}")]
    Patch(String, serde_json::Error),
}

/// The word database, loaded whole. The files are small enough that
/// random access through in-memory vectors is the simplest layout.
#[derive(Debug, Default)]
pub struct Lexicon {
    pub words: Vec<WordRecord>,
    pub nouns: Vec<NounRecord>,
    pub adjectives: Vec<AdjectiveRecord>,
    pub verbs: Vec<VerbRecord>,
    pub words_forms: Vec<WordFormRecord>,
    pub translations: Vec<TranslationRecord>,
}

fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LexiconError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

impl Lexicon {
    /// Load every database file from `dir`.
    pub fn load(dir: &Path) -> Result<Self, LexiconError> {
        let lexicon = Self {
            words: read_records(&dir.join("words.csv"))?,
            nouns: read_records(&dir.join("nouns.csv"))?,
            adjectives: read_records(&dir.join("adjectives.csv"))?,
            verbs: read_records(&dir.join("verbs.csv"))?,
            words_forms: read_records(&dir.join("words_forms.csv"))?,
            translations: read_records(&dir.join("translations.csv"))?,
        };
        info!(
            words = lexicon.words.len(),
            nouns = lexicon.nouns.len(),
            adjectives = lexicon.adjectives.len(),
            verbs = lexicon.verbs.len(),
            forms = lexicon.words_forms.len(),
            translations = lexicon.translations.len(),
            "lexicon loaded"
        );
        Ok(lexicon)
    }
}

/// Characters stripped from corpus tokens: whitespace, punctuation,
/// digits and Latin letters, plus the quote and dash marks the course
/// texts use.
fn is_strippable(c: char) -> bool {
    c == ' '
        || c.is_ascii_punctuation()
        || c.is_ascii_digit()
        || c.is_ascii_alphabetic()
        || "«»–—ー".contains(c)
}

fn push_tokens(tokens: &mut BTreeSet<String>, text: &str) {
    for raw in text.split_whitespace() {
        let token = raw.to_lowercase();
        let token = token.trim_matches(is_strippable);
        if !token.is_empty() {
            tokens.insert(token.to_string());
        }
    }
}

/// Extract the deduplicated, lowercased token set from the course JSON
/// files: a word list (objects with a "text" field) and an article list
/// (objects with "paras", each holding a "text" field).
pub fn read_tokens(
    words_path: Option<&Path>,
    articles_path: Option<&Path>,
) -> Result<BTreeSet<String>, LexiconError> {
    let mut tokens = BTreeSet::new();

    if let Some(path) = words_path {
        let entries: Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        for entry in entries.as_array().into_iter().flatten() {
            if let Some(text) = entry.get("text").and_then(Value::as_str) {
                push_tokens(&mut tokens, text);
            }
        }
    }

    if let Some(path) = articles_path {
        let entries: Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        for entry in entries.as_array().into_iter().flatten() {
            for para in entry
                .get("paras")
                .and_then(Value::as_array)
                .into_iter()
                .flatten()
            {
                if let Some(text) = para.get("text").and_then(Value::as_str) {
                    push_tokens(&mut tokens, text);
                }
            }
        }
    }

    info!(count = tokens.len(), "corpus tokens extracted");
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_stripping() {
        let mut tokens = BTreeSet::new();
        push_tokens(&mut tokens, "Я учу' ру'сский язы'к! (2024) «да»");
        // The stress mark is the ASCII apostrophe and is stripped from
        // the token edges only.
        assert!(tokens.contains("я"));
        assert!(tokens.contains("учу"));
        assert!(tokens.contains("да"));
        assert!(!tokens.contains("(2024)"));
        assert!(!tokens.iter().any(|t| t.is_empty()));
    }

    #[test]
    fn latin_and_digit_tokens_vanish() {
        let mut tokens = BTreeSet::new();
        push_tokens(&mut tokens, "hello 123 —");
        assert!(tokens.is_empty());
    }

    #[test]
    fn tokens_are_sorted_and_unique() {
        let mut tokens = BTreeSet::new();
        push_tokens(&mut tokens, "дом дом Дом");
        assert_eq!(tokens.iter().collect::<Vec<_>>(), ["дом"]);
    }
}
