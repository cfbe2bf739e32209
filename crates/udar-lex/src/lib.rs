// udar-lex: lexical-database layer.
//
// Loads the CSV word database and the JSON course corpus, selects the
// headwords a corpus mentions, applies ground-truth patches and
// assembles the per-part-of-speech analysis reports.

pub mod headwords;
pub mod patches;
pub mod records;
pub mod report;
pub mod store;

pub use headwords::{Headword, PartOfSpeech, collect_headwords};
pub use patches::{Patch, PatchOp, apply_patches, builtin_patches, load_patches};
pub use report::ReportBuilder;
pub use store::{Lexicon, LexiconError, read_tokens};
