// udar-nouns: build the noun analysis report.
//
// Declines every selected noun headword, reviews the result against the
// attested forms and writes one CSV row per headword.
//
// Usage:
//   udar-nouns [-r RESOURCE_PATH] [OPTIONS]

use tracing::info;
use udar_lex::PartOfSpeech;
use udar_lex::report::{ReportBuilder, noun_row};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if udar_cli::wants_help(&args) {
        println!("udar-nouns: build the noun analysis report.");
        println!();
        println!("Usage: udar-nouns [-r RESOURCE_PATH] [OPTIONS]");
        println!();
        udar_cli::print_common_options();
        return;
    }

    let options = udar_cli::parse_options(&args).unwrap_or_else(|e| udar_cli::fatal(&e));
    udar_cli::init_logging();

    let mut headwords = udar_cli::prepare_headwords(&options, PartOfSpeech::Noun)
        .unwrap_or_else(|e| udar_cli::fatal(&e));

    // Entries without an English translation are course artifacts.
    let before = headwords.len();
    headwords.retain(|h| !h.translations.is_empty());
    if headwords.len() < before {
        info!(removed = before - headwords.len(), "dropped untranslated nouns");
    }

    let mut builder = ReportBuilder::new();
    for headword in &headwords {
        if let Some(row) = noun_row(headword) {
            builder.push(row);
        }
    }

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| "noun_analyses.csv".into());
    udar_cli::write_report(builder, &output).unwrap_or_else(|e| udar_cli::fatal(&e));
}
