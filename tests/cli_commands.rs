use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use tempfile::TempDir;

use termdex::cli::args::{Command, TermdexArgs};
use termdex::cli::commands::*;
use termdex::error::{Result, TermdexError};

fn parse(args: &[&str]) -> Command {
    let mut argv = vec!["termdex"];
    argv.extend_from_slice(args);
    TermdexArgs::parse_from(argv).command
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn write_corpus(dir: &TempDir) -> (PathBuf, PathBuf) {
    let first = dir.path().join("malta.txt");
    let second = dir.path().join("phones.txt");
    fs::write(&first, "Malta is an island. Malta has 316 square kilometres.").unwrap();
    fs::write(&second, "My phone rings. Is that your phone? Malta calling.").unwrap();
    (first, second)
}

fn build(dir: &TempDir, name: &str, extra: &[&str]) -> Result<PathBuf> {
    let (first, second) = write_corpus(dir);
    let output = dir.path().join(name);
    let mut args = vec![
        "index",
        path_str(&first),
        path_str(&second),
        "-o",
        path_str(&output),
    ];
    args.extend_from_slice(extra);

    let Command::Index(index_args) = parse(&args) else {
        panic!("expected index command");
    };
    build_index(&index_args)?;
    Ok(output)
}

#[test]
fn tokenize_text_with_flags() -> Result<()> {
    let Command::Tokenize(args) = parse(&[
        "tokenize",
        "The cat's hat, the 2 cats' hats.",
        "--stopwords",
        "the",
        "--stemmer",
        "english",
    ]) else {
        panic!("expected tokenize command");
    };
    let result = tokenize_text(&args)?;
    assert_eq!(result.ngram_size, 1);
    assert_eq!(result.ngrams, vec!["cat", "hat", "cat", "hat"]);
    Ok(())
}

#[test]
fn tokenize_whitespace_terms_keep_the_separator() -> Result<()> {
    let Command::Tokenize(args) = parse(&[
        "tokenize",
        "sunny\tmalta",
        "--tokenize-whitespace",
        "-n",
        "3",
    ]) else {
        panic!("expected tokenize command");
    };
    let result = tokenize_text(&args)?;
    assert_eq!(result.ngrams, vec!["sunny\tmalta"]);

    let Command::Tokenize(args) = parse(&["tokenize", "sunny malta", "-n", "2"]) else {
        panic!("expected tokenize command");
    };
    assert_eq!(tokenize_text(&args)?.ngrams, vec!["sunny malta"]);
    Ok(())
}

#[test]
fn index_with_whitespace_tokens() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let snapshot = build(&dir, "index.json", &["--tokenize-whitespace", "-n", "3"])?;
    let index = load_index(&snapshot)?;

    let document = dir.path().join("malta.txt").display().to_string();
    assert_eq!(index.term_frequency(&"malta is".to_string(), &document)?, 1);
    assert_eq!(index.term_frequency(&"an island".to_string(), &document)?, 1);
    assert!(index.contains_term(&"malta calling".to_string()));
    assert!(!index.contains_term(&"malta  is".to_string()));
    assert!(index.terms().iter().all(|term| !term.contains("316")));
    Ok(())
}

#[test]
fn tokenize_file_with_limit() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("text.txt");
    fs::write(&path, "one two three four five")?;

    let Command::Tokenize(args) = parse(&["tokenize", "--file", path_str(&path), "-n", "2", "--limit", "2"])
    else {
        panic!("expected tokenize command");
    };
    let result = tokenize_text(&args)?;
    assert_eq!(result.ngrams, vec!["one two", "two three"]);
    Ok(())
}

#[test]
fn index_then_stats() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let snapshot = build(&dir, "index.json", &[])?;

    let Command::Stats(args) = parse(&["stats", path_str(&snapshot), "--top", "1", "--term", "phone"])
    else {
        panic!("expected stats command");
    };
    let stats = index_stats(&args)?;

    assert_eq!(stats.documents, 2);
    assert_eq!(stats.top_terms.len(), 1);
    assert_eq!(stats.top_terms[0].term, "malta");
    assert_eq!(stats.top_terms[0].total_frequency, 3);
    assert_eq!(stats.top_terms[0].document_frequency, 2);

    assert_eq!(stats.requested_terms.len(), 1);
    assert_eq!(stats.requested_terms[0].total_frequency, 2);
    assert_eq!(stats.requested_terms[0].document_frequency, 1);

    // 316 is numeric and dropped
    let index = load_index(&snapshot)?;
    assert!(!index.contains_term(&"316".to_string()));
    Ok(())
}

#[test]
fn stats_for_unknown_term_fails() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let snapshot = build(&dir, "index.json", &[])?;

    let Command::Stats(args) = parse(&["stats", path_str(&snapshot), "--term", "missing"]) else {
        panic!("expected stats command");
    };
    let err = index_stats(&args).unwrap_err();
    assert!(matches!(err, TermdexError::UnknownTerm(_)));
    Ok(())
}

#[test]
fn frozen_seed_vocabulary() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let seed = dir.path().join("terms.txt");
    fs::write(&seed, "malta\nphone\n")?;

    let snapshot = build(
        &dir,
        "seeded.json",
        &["--seed-terms", path_str(&seed), "--freeze"],
    )?;
    let index = load_index(&snapshot)?;

    let mut terms = index.terms();
    terms.sort();
    assert_eq!(terms, vec!["malta", "phone"]);
    assert_eq!(index.document_count(), 2);
    Ok(())
}

#[test]
fn matrix_modes() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let snapshot = build(&dir, "index.json", &[])?;

    let Command::Matrix(args) = parse(&["matrix", path_str(&snapshot), "--mode", "tf"]) else {
        panic!("expected matrix command");
    };
    let sequential = feature_matrix(&args)?;
    assert_eq!(sequential.mode, "tf");
    assert_eq!(sequential.rows.len(), sequential.documents.len());
    assert!(sequential.rows.iter().all(|row| row.len() == sequential.terms.len()));

    let malta = sequential.terms.iter().position(|term| term == "malta").unwrap();
    let total: f64 = sequential.rows.iter().map(|row| row[malta]).sum();
    assert_eq!(total, 3.0);

    let Command::Matrix(args) = parse(&["matrix", path_str(&snapshot), "--mode", "tf", "--parallel"])
    else {
        panic!("expected matrix command");
    };
    assert_eq!(feature_matrix(&args)?, sequential);

    let Command::Matrix(args) = parse(&["matrix", path_str(&snapshot), "--mode", "bm25"]) else {
        panic!("expected matrix command");
    };
    assert!(matches!(feature_matrix(&args), Err(TermdexError::InvalidMode(_))));
    Ok(())
}

#[test]
fn prune_writes_smaller_snapshot() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let snapshot = build(&dir, "index.json", &[])?;
    let pruned = dir.path().join("pruned.json");

    let Command::Prune(args) = parse(&[
        "prune",
        path_str(&snapshot),
        "-o",
        path_str(&pruned),
        "--min",
        "2",
    ]) else {
        panic!("expected prune command");
    };
    let result = prune_index(&args)?;

    let before = load_index(&snapshot)?;
    let after = load_index(&pruned)?;
    assert_eq!(result.remaining_terms, 2);
    assert_eq!(result.removed, before.term_count() - 2);

    let mut terms = after.terms();
    terms.sort();
    assert_eq!(terms, vec!["is", "malta"]);
    assert_eq!(after.document_count(), 2);
    Ok(())
}

#[test]
fn merge_snapshots() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let first = build(&dir, "first.json", &[])?;
    let second = build(&dir, "second.json", &["-n", "2"])?;
    let merged = dir.path().join("out").join("merged.json");

    let Command::Merge(args) = parse(&[
        "merge",
        path_str(&first),
        path_str(&second),
        "-o",
        path_str(&merged),
    ]) else {
        panic!("expected merge command");
    };
    let result = merge_indexes(&args)?;
    assert_eq!(result.inputs, 2);
    assert_eq!(result.documents, 2);

    let index = load_index(&merged)?;
    assert!(index.contains_term(&"malta".to_string()));
    assert!(index.contains_term(&"malta is".to_string()));
    assert_eq!(
        index.term_count(),
        load_index(&first)?.term_count() + load_index(&second)?.term_count()
    );
    Ok(())
}

#[test]
fn invalid_tokenizer_options_fail() {
    let Command::Tokenize(args) = parse(&["tokenize", "text", "-n", "0"]) else {
        panic!("expected tokenize command");
    };
    assert!(matches!(
        tokenize_text(&args),
        Err(TermdexError::InvalidArgument(_))
    ));

    let Command::Tokenize(args) = parse(&["tokenize", "text", "--stemmer", "klingon"]) else {
        panic!("expected tokenize command");
    };
    assert!(matches!(
        tokenize_text(&args),
        Err(TermdexError::InvalidStemmer(_))
    ));
}
