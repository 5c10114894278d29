//! Output formatting for CLI commands.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TermdexArgs};
use crate::error::Result;

/// A command result that can be printed in every [`OutputFormat`].
///
/// JSON output comes from `Serialize` and human output from `Display`. CSV
/// output defaults to one `key,value` row per top-level field.
pub trait CommandOutput: Serialize + fmt::Display {
    fn csv_records(&self) -> Result<Vec<Vec<String>>> {
        let value = serde_json::to_value(self)?;
        let mut records = vec![vec!["key".to_string(), "value".to_string()]];
        if let serde_json::Value::Object(obj) = value {
            for (key, value) in obj {
                records.push(vec![key, format_value(&value)]);
            }
        }
        Ok(records)
    }
}

/// Result structure for tokenizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizeResult {
    pub ngram_size: usize,
    /// N-grams as index terms: tokens joined by a single space, or
    /// concatenated when whitespace is tokenized
    pub ngrams: Vec<String>,
}

/// Result structure for building an index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexBuildResult {
    pub output: String,
    pub documents: usize,
    pub terms: usize,
    pub occurrences: u64,
    pub frozen: bool,
    pub duration_ms: u64,
}

/// Statistics of one term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermStats {
    pub term: String,
    pub total_frequency: u64,
    pub document_frequency: usize,
    pub total_tfidf: f64,
}

/// Index statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub documents: usize,
    pub terms: usize,
    pub occurrences: u64,
    pub top_terms: Vec<TermStats>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub requested_terms: Vec<TermStats>,
}

/// Result structure for matrix generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixResult {
    pub mode: String,
    pub documents: Vec<String>,
    pub terms: Vec<String>,
    /// One row per entry of `documents`, one column per entry of `terms`
    pub rows: Vec<Vec<f64>>,
}

/// Result structure for pruning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PruneResult {
    pub output: String,
    pub removed: usize,
    pub remaining_terms: usize,
    pub documents: usize,
}

/// Result structure for merging.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeResult {
    pub inputs: usize,
    pub output: String,
    pub documents: usize,
    pub terms: usize,
}

impl fmt::Display for TokenizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ngram in &self.ngrams {
            writeln!(f, "{ngram}")?;
        }
        Ok(())
    }
}

impl CommandOutput for TokenizeResult {
    fn csv_records(&self) -> Result<Vec<Vec<String>>> {
        let mut records = vec![vec!["ngram".to_string()]];
        records.extend(self.ngrams.iter().map(|ngram| vec![ngram.clone()]));
        Ok(records)
    }
}

impl fmt::Display for IndexBuildResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Snapshot: {}", self.output)?;
        writeln!(f, "Documents: {}", self.documents)?;
        writeln!(f, "Terms: {}", self.terms)?;
        writeln!(f, "Occurrences: {}", self.occurrences)?;
        if self.frozen {
            writeln!(f, "Vocabulary: frozen")?;
        }
        writeln!(f, "Time: {}ms", self.duration_ms)
    }
}

impl CommandOutput for IndexBuildResult {}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Index Statistics:")?;
        writeln!(f, "════════════════")?;
        writeln!(f, "Documents: {}", self.documents)?;
        writeln!(f, "Terms: {}", self.terms)?;
        writeln!(f, "Occurrences: {}", self.occurrences)?;

        if !self.top_terms.is_empty() {
            writeln!(f)?;
            writeln!(f, "Top Terms:")?;
            writeln!(f, "──────────")?;
            write_term_table(f, &self.top_terms)?;
        }

        if !self.requested_terms.is_empty() {
            writeln!(f)?;
            writeln!(f, "Requested Terms:")?;
            writeln!(f, "────────────────")?;
            write_term_table(f, &self.requested_terms)?;
        }
        Ok(())
    }
}

fn write_term_table(f: &mut fmt::Formatter<'_>, stats: &[TermStats]) -> fmt::Result {
    let width = stats
        .iter()
        .map(|stat| stat.term.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);
    writeln!(f, "{:<width$}  {:>8}  {:>6}  {:>10}", "term", "total", "df", "tfidf")?;
    for stat in stats {
        writeln!(
            f,
            "{:<width$}  {:>8}  {:>6}  {:>10.4}",
            stat.term, stat.total_frequency, stat.document_frequency, stat.total_tfidf
        )?;
    }
    Ok(())
}

impl CommandOutput for IndexStats {
    fn csv_records(&self) -> Result<Vec<Vec<String>>> {
        let mut records = vec![vec![
            "term".to_string(),
            "total_frequency".to_string(),
            "document_frequency".to_string(),
            "total_tfidf".to_string(),
        ]];
        let stats = if self.requested_terms.is_empty() {
            &self.top_terms
        } else {
            &self.requested_terms
        };
        for stat in stats {
            records.push(vec![
                stat.term.clone(),
                stat.total_frequency.to_string(),
                stat.document_frequency.to_string(),
                stat.total_tfidf.to_string(),
            ]);
        }
        Ok(records)
    }
}

impl fmt::Display for MatrixResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mode: {}", self.mode)?;
        write!(f, "document")?;
        for term in &self.terms {
            write!(f, "\t{term}")?;
        }
        writeln!(f)?;
        for (document, row) in self.documents.iter().zip(&self.rows) {
            write!(f, "{document}")?;
            for cell in row {
                write!(f, "\t{cell:.4}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl CommandOutput for MatrixResult {
    fn csv_records(&self) -> Result<Vec<Vec<String>>> {
        let mut header = vec!["document".to_string()];
        header.extend(self.terms.iter().cloned());

        let mut records = vec![header];
        for (document, row) in self.documents.iter().zip(&self.rows) {
            let mut record = vec![document.clone()];
            record.extend(row.iter().map(|cell| cell.to_string()));
            records.push(record);
        }
        Ok(records)
    }
}

impl fmt::Display for PruneResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Snapshot: {}", self.output)?;
        writeln!(f, "Removed terms: {}", self.removed)?;
        writeln!(f, "Remaining terms: {}", self.remaining_terms)?;
        writeln!(f, "Documents: {}", self.documents)
    }
}

impl CommandOutput for PruneResult {}

impl fmt::Display for MergeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Merged {} snapshots into {}", self.inputs, self.output)?;
        writeln!(f, "Documents: {}", self.documents)?;
        writeln!(f, "Terms: {}", self.terms)
    }
}

impl CommandOutput for MergeResult {}

/// Output a result in the specified format.
pub fn output_result<T: CommandOutput>(message: &str, result: &T, args: &TermdexArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result),
    }
}

/// Output in human-readable format.
fn output_human<T: CommandOutput>(message: &str, result: &T, args: &TermdexArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    print!("{result}");
    Ok(())
}

/// Output in JSON format.
fn output_json<T: CommandOutput>(result: &T, args: &TermdexArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
fn output_csv<T: CommandOutput>(result: &T) -> Result<()> {
    for record in result.csv_records()? {
        println!("{}", format_csv_record(&record));
    }
    Ok(())
}

/// Join one CSV record, quoting fields that need it.
pub fn format_csv_record(record: &[String]) -> String {
    record
        .iter()
        .map(|field| {
            if field.contains(',') || field.contains('"') || field.contains('\n') {
                let escaped = field.replace('"', "\"\"");
                format!("\"{escaped}\"")
            } else {
                field.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join("; ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
