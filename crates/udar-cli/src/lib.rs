// udar-cli: shared plumbing for the analyzer binaries.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use udar_lex::{
    Headword, Lexicon, PartOfSpeech, ReportBuilder, apply_patches, builtin_patches,
    collect_headwords, load_patches, read_tokens,
};

/// Marker file that identifies a resource directory.
const WORDS_CSV: &str = "words.csv";

/// Options shared by the three analyzer binaries.
#[derive(Debug, Default)]
pub struct Options {
    pub resource_path: Option<String>,
    pub output: Option<PathBuf>,
    pub corpus_words: Option<PathBuf>,
    pub corpus_articles: Option<PathBuf>,
    pub patches: Option<PathBuf>,
}

/// Parse the common flags. Unknown arguments are an error; the binaries
/// take no positional arguments.
pub fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut take_value = |name: &str| -> Result<String, String> {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{name} requires a value"))
        };
        match arg.as_str() {
            "-r" | "--resource-path" => options.resource_path = Some(take_value(arg)?),
            "-o" | "--output" => options.output = Some(PathBuf::from(take_value(arg)?)),
            "--corpus-words" => options.corpus_words = Some(PathBuf::from(take_value(arg)?)),
            "--corpus-articles" => options.corpus_articles = Some(PathBuf::from(take_value(arg)?)),
            "--patches" => options.patches = Some(PathBuf::from(take_value(arg)?)),
            other => {
                if let Some(value) = other.strip_prefix("--resource-path=") {
                    options.resource_path = Some(value.to_string());
                } else if let Some(value) = other.strip_prefix("--output=") {
                    options.output = Some(PathBuf::from(value));
                } else {
                    return Err(format!("unknown argument: {other}"));
                }
            }
        }
    }
    Ok(options)
}

/// Locate the resource directory.
///
/// Search order:
/// 1. `--resource-path` argument (if provided)
/// 2. `UDAR_RESOURCE_PATH` environment variable
/// 3. `./resource`
/// 4. Current working directory
pub fn find_resource_dir(resource_path: Option<&str>) -> Result<PathBuf, String> {
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(path) = resource_path {
        candidates.push(PathBuf::from(path));
    }
    if let Ok(path) = std::env::var("UDAR_RESOURCE_PATH") {
        candidates.push(PathBuf::from(path));
    }
    candidates.push(PathBuf::from("resource"));
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }

    for dir in &candidates {
        if dir.join(WORDS_CSV).is_file() {
            return Ok(dir.clone());
        }
    }
    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        WORDS_CSV,
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Install the log subscriber. RUST_LOG overrides the default level.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

pub fn print_common_options() {
    println!("Options:");
    println!("  -r, --resource-path PATH   Directory holding the database CSV files");
    println!("  -o, --output PATH          Output CSV file");
    println!("      --corpus-words PATH    Course word-list JSON; restricts the analysis");
    println!("      --corpus-articles PATH Course article JSON; restricts the analysis");
    println!("      --patches PATH         Extra ground-truth patches (JSON array)");
    println!("  -h, --help                 Print this help");
}

/// Load the database, select and patch the headwords of one part of
/// speech. Shared front half of every analyzer binary.
pub fn prepare_headwords(options: &Options, pos: PartOfSpeech) -> Result<Vec<Headword>, String> {
    let resource_dir = find_resource_dir(options.resource_path.as_deref())?;
    info!(dir = %resource_dir.display(), "using resource directory");

    let lexicon = Lexicon::load(&resource_dir).map_err(|e| e.to_string())?;

    let tokens: Option<BTreeSet<String>> =
        if options.corpus_words.is_some() || options.corpus_articles.is_some() {
            Some(
                read_tokens(
                    options.corpus_words.as_deref(),
                    options.corpus_articles.as_deref(),
                )
                .map_err(|e| e.to_string())?,
            )
        } else {
            warn!("no corpus given; analyzing every {}", pos.type_code());
            None
        };

    let mut headwords = collect_headwords(&lexicon, pos, tokens.as_ref());
    info!(count = headwords.len(), pos = pos.type_code(), "headwords selected");

    let mut patches = builtin_patches(pos);
    if let Some(path) = &options.patches {
        patches.extend(load_patches(path).map_err(|e| e.to_string())?);
    }
    apply_patches(&mut headwords, &patches);

    Ok(headwords)
}

/// Sort, write and log the finished report.
pub fn write_report(mut builder: ReportBuilder, output: &Path) -> Result<(), String> {
    builder.sort_rows();
    builder.write(output).map_err(|e| e.to_string())?;
    info!(rows = builder.len(), path = %output.display(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_flags() {
        let options = parse_options(&args(&[
            "-r",
            "/data/resource",
            "--output=out.csv",
            "--corpus-words",
            "words.ru.json",
        ]))
        .unwrap();
        assert_eq!(options.resource_path.as_deref(), Some("/data/resource"));
        assert_eq!(options.output.as_deref(), Some(Path::new("out.csv")));
        assert_eq!(
            options.corpus_words.as_deref(),
            Some(Path::new("words.ru.json"))
        );
        assert!(options.patches.is_none());
    }

    #[test]
    fn rejects_unknown_and_dangling() {
        assert!(parse_options(&args(&["--frobnicate"])).is_err());
        assert!(parse_options(&args(&["-o"])).is_err());
    }
}
