// udar-verbs: build the verb analysis report.
//
// Conjugates every selected verb headword, using the attested
// 2nd-person-singular to pick the conjugation, and writes one CSV row
// per headword.
//
// Usage:
//   udar-verbs [-r RESOURCE_PATH] [OPTIONS]

use udar_lex::PartOfSpeech;
use udar_lex::report::{ReportBuilder, verb_row};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if udar_cli::wants_help(&args) {
        println!("udar-verbs: build the verb analysis report.");
        println!();
        println!("Usage: udar-verbs [-r RESOURCE_PATH] [OPTIONS]");
        println!();
        udar_cli::print_common_options();
        return;
    }

    let options = udar_cli::parse_options(&args).unwrap_or_else(|e| udar_cli::fatal(&e));
    udar_cli::init_logging();

    let headwords = udar_cli::prepare_headwords(&options, PartOfSpeech::Verb)
        .unwrap_or_else(|e| udar_cli::fatal(&e));

    let mut builder = ReportBuilder::new();
    for headword in &headwords {
        builder.push(verb_row(headword));
    }

    let output = options
        .output
        .clone()
        .unwrap_or_else(|| "verb_analyses.csv".into());
    udar_cli::write_report(builder, &output).unwrap_or_else(|e| udar_cli::fatal(&e));
}
