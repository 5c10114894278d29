//! Command line argument parsing for the termdex CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::analysis::TokenizerConfig;
use crate::analysis::token_filter::stop::DEFAULT_ENGLISH_STOP_WORDS;
use crate::error::Result;

/// termdex - n-gram tokenizing and an in-memory inverted index
#[derive(Parser, Debug, Clone)]
#[command(name = "termdex")]
#[command(about = "Tokenize text into n-grams and build term/document indexes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TermdexArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TermdexArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the n-grams of a text
    Tokenize(TokenizeArgs),

    /// Build an index snapshot from text files
    Index(IndexArgs),

    /// Show statistics of an index snapshot
    Stats(StatsArgs),

    /// Print the weighted document/term matrix of an index snapshot
    Matrix(MatrixArgs),

    /// Remove terms by document frequency
    Prune(PruneArgs),

    /// Add several index snapshots together
    Merge(MergeArgs),
}

/// Tokenizer options shared by `tokenize` and `index`.
///
/// Flags override values read from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct TokenizerArgs {
    /// Tokenizer configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Number of consecutive tokens per n-gram
    #[arg(short = 'n', long)]
    pub ngram_size: Option<usize>,

    /// Reject tokens shorter than this
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Keep tokens that parse as numbers
    #[arg(long)]
    pub keep_numeric: bool,

    /// Stemmer: identity, none or a Snowball language such as english
    #[arg(long)]
    pub stemmer: Option<String>,

    /// Additional stop words (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub stopwords: Vec<String>,

    /// Add the built-in English stop word list
    #[arg(long)]
    pub english_stopwords: bool,

    /// Keep the original casing
    #[arg(long)]
    pub retain_casing: bool,

    /// Keep punctuation and emit it as tokens
    #[arg(long)]
    pub retain_punctuation: bool,

    /// Emit whitespace runs as tokens
    #[arg(long)]
    pub tokenize_whitespace: bool,

    /// Fold text to ASCII before tokenizing
    #[arg(long)]
    pub normalize_unicode: bool,
}

impl TokenizerArgs {
    /// Load `--config` (or the defaults) and apply the flags on top.
    pub fn to_config(&self) -> Result<TokenizerConfig> {
        let mut config = match &self.config {
            Some(path) => TokenizerConfig::load(path)?,
            None => TokenizerConfig::default(),
        };

        if let Some(ngram_size) = self.ngram_size {
            config.ngram_size = ngram_size;
        }
        if let Some(min_length) = self.min_length {
            config.min_length = min_length;
        }
        if let Some(stemmer) = &self.stemmer {
            config.stemmer = stemmer.clone();
        }
        if self.keep_numeric {
            config.ignore_numeric = false;
        }
        config.stopwords.extend(self.stopwords.iter().cloned());
        if self.english_stopwords {
            config
                .stopwords
                .extend(DEFAULT_ENGLISH_STOP_WORDS.iter().map(|word| word.to_string()));
        }
        config.retain_casing |= self.retain_casing;
        config.retain_punctuation |= self.retain_punctuation;
        config.tokenize_whitespace |= self.tokenize_whitespace;
        config.normalize_unicode |= self.normalize_unicode;

        config.validate()?;
        Ok(config)
    }
}

/// Arguments for tokenizing
#[derive(Parser, Debug, Clone)]
pub struct TokenizeArgs {
    /// Text to tokenize
    #[arg(value_name = "TEXT", required_unless_present = "file")]
    pub text: Option<String>,

    /// Read the text from a file instead
    #[arg(long, value_name = "FILE", conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Stop after this many n-grams
    #[arg(short, long)]
    pub limit: Option<usize>,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,
}

/// Arguments for building an index
#[derive(Parser, Debug, Clone)]
pub struct IndexArgs {
    /// Text files to index; each file is one document
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Where to write the snapshot (JSON)
    #[arg(short, long, value_name = "SNAPSHOT")]
    pub output: PathBuf,

    /// Seed vocabulary file, one term per line
    #[arg(long, value_name = "TERMS_FILE")]
    pub seed_terms: Option<PathBuf>,

    /// Only count terms from the seed vocabulary
    #[arg(long, requires = "seed_terms")]
    pub freeze: bool,

    #[command(flatten)]
    pub tokenizer: TokenizerArgs,
}

/// Arguments for index statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Index snapshot (JSON)
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Number of most frequent terms to list
    #[arg(long, default_value = "10")]
    pub top: usize,

    /// Show detailed statistics for these terms
    #[arg(short, long)]
    pub term: Vec<String>,
}

/// Arguments for matrix generation
#[derive(Parser, Debug, Clone)]
pub struct MatrixArgs {
    /// Index snapshot (JSON)
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Weighting: tfidf, ntfidf, tf or ntf
    #[arg(short, long, default_value = "tfidf")]
    pub mode: String,

    /// Compute rows in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for pruning
#[derive(Parser, Debug, Clone)]
pub struct PruneArgs {
    /// Index snapshot (JSON)
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Where to write the pruned snapshot (JSON)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Remove terms with a lower document frequency
    #[arg(long)]
    pub min: Option<f64>,

    /// Remove terms with a higher document frequency
    #[arg(long)]
    pub max: Option<f64>,

    /// Treat bounds as fractions of the number of documents
    #[arg(long)]
    pub percentile: bool,
}

/// Arguments for merging
#[derive(Parser, Debug, Clone)]
pub struct MergeArgs {
    /// Index snapshots (JSON) to merge
    #[arg(value_name = "SNAPSHOTS", required = true)]
    pub snapshots: Vec<PathBuf>,

    /// Where to write the merged snapshot (JSON)
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: PathBuf,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity() {
        let args = TermdexArgs::parse_from(["termdex", "tokenize", "hello"]);
        assert_eq!(args.verbosity(), 1);

        let args = TermdexArgs::parse_from(["termdex", "-vv", "tokenize", "hello"]);
        assert_eq!(args.verbosity(), 2);

        let args = TermdexArgs::parse_from(["termdex", "tokenize", "hello", "-q", "-v"]);
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_parse_tokenize() {
        let args = TermdexArgs::parse_from([
            "termdex",
            "--format",
            "json",
            "tokenize",
            "Some text",
            "-n",
            "2",
            "--stopwords",
            "the,of",
            "--stemmer",
            "english",
        ]);
        assert_eq!(args.output_format, OutputFormat::Json);

        let Command::Tokenize(tokenize) = args.command else {
            panic!("expected tokenize");
        };
        assert_eq!(tokenize.text.as_deref(), Some("Some text"));

        let config = tokenize.tokenizer.to_config().unwrap();
        assert_eq!(config.ngram_size, 2);
        assert_eq!(config.stemmer, "english");
        assert!(config.stopwords.contains("the"));
        assert!(config.stopwords.contains("of"));
    }

    #[test]
    fn test_tokenize_requires_input() {
        assert!(TermdexArgs::try_parse_from(["termdex", "tokenize"]).is_err());
    }

    #[test]
    fn test_freeze_requires_seed_terms() {
        assert!(
            TermdexArgs::try_parse_from(["termdex", "index", "a.txt", "-o", "x.json", "--freeze"])
                .is_err()
        );
    }

    #[test]
    fn test_config_file_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tokenizer.json");
        std::fs::write(&path, r#"{"ngram_size": 3, "min_length": 2}"#).unwrap();

        let args = TokenizerArgs {
            config: Some(path),
            min_length: Some(4),
            keep_numeric: true,
            english_stopwords: true,
            ..Default::default()
        };
        let config = args.to_config().unwrap();
        assert_eq!(config.ngram_size, 3);
        assert_eq!(config.min_length, 4);
        assert!(!config.ignore_numeric);
        assert!(config.stopwords.contains("the"));
    }

    #[test]
    fn test_invalid_stemmer_flag() {
        let args = TokenizerArgs {
            stemmer: Some("klingon".to_string()),
            ..Default::default()
        };
        assert!(args.to_config().is_err());
    }
}
