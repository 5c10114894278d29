//! Command implementations for the termdex CLI.
//!
//! Each command has a function that does the work and returns its result,
//! and [`execute_command`] prints that result in the requested format.

use std::fs;
use std::path::Path;
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, TermdexError};
use crate::index::{HashedIndex, IndexSnapshot, PruneOptions, Weighting, merge};

/// Execute a CLI command.
pub fn execute_command(args: TermdexArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => {
            let result = tokenize_text(tokenize_args)?;
            output_result("Tokenized text", &result, &args)
        }
        Command::Index(index_args) => {
            let result = build_index(index_args)?;
            output_result("Index built successfully", &result, &args)
        }
        Command::Stats(stats_args) => {
            let result = index_stats(stats_args)?;
            output_result("Index statistics", &result, &args)
        }
        Command::Matrix(matrix_args) => {
            let result = feature_matrix(matrix_args)?;
            output_result("Feature matrix", &result, &args)
        }
        Command::Prune(prune_args) => {
            let result = prune_index(prune_args)?;
            output_result("Index pruned successfully", &result, &args)
        }
        Command::Merge(merge_args) => {
            let result = merge_indexes(merge_args)?;
            output_result("Indexes merged successfully", &result, &args)
        }
    }
}

/// Tokenize the given text or file into n-grams.
pub fn tokenize_text(args: &TokenizeArgs) -> Result<TokenizeResult> {
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            return Err(TermdexError::invalid_argument(
                "either a text or --file is required",
            ));
        }
    };

    let config = args.tokenizer.to_config()?;
    let tokenizer = config.build()?;
    debug!("tokenizing {} bytes with {tokenizer:?}", text.len());

    let ngrams = tokenizer
        .ngrams(&text)?
        .map(|ngram| config.ngram_term(&ngram));
    let ngrams = match args.limit {
        Some(limit) => ngrams.take(limit).collect(),
        None => ngrams.collect(),
    };

    Ok(TokenizeResult {
        ngram_size: config.ngram_size,
        ngrams,
    })
}

/// Tokenize every file into one document and write the index snapshot.
///
/// Each n-gram is recorded under [`TokenizerConfig::ngram_term`].
///
/// [`TokenizerConfig::ngram_term`]: crate::analysis::TokenizerConfig::ngram_term
pub fn build_index(args: &IndexArgs) -> Result<IndexBuildResult> {
    let start = Instant::now();
    let config = args.tokenizer.to_config()?;
    let tokenizer = config.build()?;

    let mut index: HashedIndex = match &args.seed_terms {
        Some(path) => HashedIndex::with_terms(load_seed_terms(path)?),
        None => HashedIndex::new(),
    };
    if args.freeze {
        index.freeze();
    }

    for path in &args.files {
        let document = path.display().to_string();
        info!("indexing {document}");

        let text = fs::read_to_string(path)?;
        for ngram in tokenizer.ngrams(&text)? {
            index.record_occurrence(config.ngram_term(&ngram), document.clone());
        }
    }

    write_index(&index, &args.output)?;

    Ok(IndexBuildResult {
        output: args.output.display().to_string(),
        documents: index.document_count(),
        terms: index.term_count(),
        occurrences: index.documents.total(),
        frozen: index.is_frozen(),
        duration_ms: start.elapsed().as_millis() as u64,
    })
}

/// Summarize an index snapshot.
pub fn index_stats(args: &StatsArgs) -> Result<IndexStats> {
    let index = load_index(&args.snapshot)?;

    let mut all_terms = index
        .terms()
        .into_iter()
        .map(|term| term_stats(&index, term))
        .collect::<Result<Vec<_>>>()?;
    all_terms.sort_by(|a, b| {
        b.total_frequency
            .cmp(&a.total_frequency)
            .then_with(|| a.term.cmp(&b.term))
    });
    all_terms.truncate(args.top);

    let requested_terms = args
        .term
        .iter()
        .map(|term| term_stats(&index, term.clone()))
        .collect::<Result<Vec<_>>>()?;

    Ok(IndexStats {
        documents: index.document_count(),
        terms: index.term_count(),
        occurrences: index.documents.total(),
        top_terms: all_terms,
        requested_terms,
    })
}

fn term_stats(index: &HashedIndex, term: String) -> Result<TermStats> {
    Ok(TermStats {
        total_frequency: index.total_term_frequency(&term)?,
        document_frequency: index.document_frequency(&term)?,
        total_tfidf: index.total_tfidf(&term)?,
        term,
    })
}

/// Compute the weighted document/term matrix of a snapshot.
pub fn feature_matrix(args: &MatrixArgs) -> Result<MatrixResult> {
    let weighting = Weighting::from_name(&args.mode)?;
    let index = load_index(&args.snapshot)?;

    let rows = if args.parallel {
        index.par_generate_feature_matrix(&weighting)?
    } else {
        index.generate_feature_matrix(&weighting)?
    };

    Ok(MatrixResult {
        mode: weighting.name().to_string(),
        documents: index.documents(),
        terms: index.terms(),
        rows,
    })
}

/// Prune a snapshot by document frequency and write the result.
pub fn prune_index(args: &PruneArgs) -> Result<PruneResult> {
    let mut index = load_index(&args.snapshot)?;

    let mut options = PruneOptions::new().use_percentile(args.percentile);
    if let Some(min) = args.min {
        options = options.min_value(min);
    }
    if let Some(max) = args.max {
        options = options.max_value(max);
    }

    let removed = index.prune(&options);
    write_index(&index, &args.output)?;

    Ok(PruneResult {
        output: args.output.display().to_string(),
        removed,
        remaining_terms: index.term_count(),
        documents: index.document_count(),
    })
}

/// Merge several snapshots and write the result.
pub fn merge_indexes(args: &MergeArgs) -> Result<MergeResult> {
    let indexes = args
        .snapshots
        .iter()
        .map(|path| load_index(path))
        .collect::<Result<Vec<_>>>()?;

    let merged = merge(&indexes);
    write_index(&merged, &args.output)?;

    Ok(MergeResult {
        inputs: indexes.len(),
        output: args.output.display().to_string(),
        documents: merged.document_count(),
        terms: merged.term_count(),
    })
}

/// Read an index snapshot (JSON) from disk.
pub fn load_index(path: &Path) -> Result<HashedIndex> {
    debug!("loading index from {}", path.display());
    let json = fs::read_to_string(path)?;
    Ok(HashedIndex::from_snapshot(IndexSnapshot::from_json(&json)?))
}

/// Write an index snapshot (JSON) to disk, creating parent directories.
pub fn write_index(index: &HashedIndex, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, index.to_snapshot().to_json_pretty()?)?;
    info!("wrote index snapshot to {}", path.display());
    Ok(())
}

/// One term per line; blank lines are skipped.
fn load_seed_terms(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_seed_terms() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terms.txt");
        fs::write(&path, "malta\n\n  phone \n").unwrap();
        assert_eq!(load_seed_terms(&path).unwrap(), vec!["malta", "phone"]);
    }

    #[test]
    fn test_write_and_load_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("index.json");

        let mut index: HashedIndex = HashedIndex::new();
        index.record_occurrence("word".to_string(), "a.txt".to_string());
        write_index(&index, &path).unwrap();

        assert_eq!(load_index(&path).unwrap(), index);
    }

    #[test]
    fn test_load_missing_index() {
        let err = load_index(Path::new("/nonexistent/index.json")).unwrap_err();
        assert!(matches!(err, TermdexError::Io(_)));
    }
}
