use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wordfreq_core::{parse_names, Language, Options, StopWordSet, StopWords, Term, WordFreq};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `count<TAB>term` line per term
    Text,
    /// A JSON array of `{term, count}` objects
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "wordfreq",
    about = "Count words and phrases in English and Chinese text"
)]
struct Cli {
    /// Input files; standard input is read when none are given
    inputs: Vec<PathBuf>,

    /// Options file (JSON); command line flags override it
    #[arg(long, env = "WORDFREQ_CONFIG")]
    config: Option<PathBuf>,

    /// Language to extract (chinese, english); repeatable
    #[arg(long = "language", value_name = "NAME")]
    languages: Vec<String>,

    /// Built-in stop word set (cjk, english1, english2); repeatable
    #[arg(long = "stop-word-set", value_name = "NAME")]
    stop_word_sets: Vec<String>,

    /// Disable every built-in stop word set
    #[arg(long, conflicts_with = "stop_word_sets")]
    no_stop_word_sets: bool,

    /// Extra stop word; repeatable
    #[arg(long = "stop-word", value_name = "WORD")]
    stop_words: Vec<String>,

    /// File of extra stop words, one per line
    #[arg(long)]
    stop_word_file: Option<PathBuf>,

    /// Leave out terms seen fewer times than this
    #[arg(long)]
    minimum_count: Option<usize>,

    /// Longest Chinese phrase, in characters
    #[arg(long)]
    max_phrase_length: Option<usize>,

    /// Keep Chinese substrings that only occur inside longer phrases
    #[arg(long)]
    no_filter_substring: bool,

    /// Match stop words regardless of case
    #[arg(long)]
    case_insensitive_stop_words: bool,

    /// Print only the first N terms
    #[arg(long, value_name = "N")]
    top: Option<usize>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

impl Cli {
    fn options(&self) -> anyhow::Result<Options> {
        let mut options = match &self.config {
            Some(path) => Options::from_path(path)
                .with_context(|| format!("loading options from {}", path.display()))?,
            None => Options::default(),
        };

        if !self.languages.is_empty() {
            options.languages = parse_names(&self.languages, "language", Language::from_name);
        }
        if self.no_stop_word_sets {
            options.stop_word_sets.clear();
        } else if !self.stop_word_sets.is_empty() {
            options.stop_word_sets =
                parse_names(&self.stop_word_sets, "stop word set", StopWordSet::from_name);
        }
        options.stop_words.extend(self.stop_words.iter().cloned());
        if let Some(path) = &self.stop_word_file {
            let extra = StopWords::from_file(path)
                .with_context(|| format!("reading stop words from {}", path.display()))?;
            options.stop_words.extend(extra.iter().map(str::to_owned));
        }
        if let Some(minimum_count) = self.minimum_count {
            options.minimum_count = minimum_count;
        }
        if let Some(max_phrase_length) = self.max_phrase_length {
            options.max_phrase_length = max_phrase_length;
        }
        options.no_filter_substring |= self.no_filter_substring;
        options.case_insensitive_stop_words |= self.case_insensitive_stop_words;
        Ok(options)
    }
}

fn main() -> anyhow::Result<()> {
    init_observability();

    let cli = Cli::parse();
    let mut engine = WordFreq::new(cli.options()?);

    if cli.inputs.is_empty() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("reading standard input")?;
        engine.process(&text);
    } else {
        for path in &cli.inputs {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let listed = engine.process(&text).len();
            info!("processed {} ({} terms listed)", path.display(), listed);
        }
    }

    let list = engine.list();
    let shown = &list[..cli.top.unwrap_or(list.len()).min(list.len())];
    let stdout = io::stdout();
    write_terms(&mut stdout.lock(), shown, cli.format)?;
    Ok(())
}

fn write_terms(out: &mut impl Write, terms: &[Term], format: Format) -> anyhow::Result<()> {
    match format {
        Format::Text => {
            for term in terms {
                writeln!(out, "{}\t{}", term.count, term.term)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, terms)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

fn init_observability() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_target(false);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .init();
}
