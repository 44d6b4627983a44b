// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! Sequential lookup of a word list.
//!
//! Words are looked up one at a time with a fixed pause between them.
//! A word that fails is logged and skipped. Results are collected in
//! memory and written as a single JSON array once every word has been
//! attempted, so an interrupted run writes nothing.

use std::path::Path;
use std::time::Instant;

use crate::lookup::Dictionary;
use crate::output::write_json;
use crate::progress::{ProgressEvent, ProgressSink};
use crate::types::{DictError, DictResult, WordEntry};

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Successful entries in input order.
    pub entries: Vec<WordEntry>,
    /// Words that failed, with the reason.
    pub failures: Vec<(String, String)>,
}

/// Words from word-list text: one per line, trimmed, blank lines skipped.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read a UTF-8 word-list file.
pub fn read_word_list(path: &Path) -> DictResult<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|source| DictError::WordList {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_word_list(&text))
}

/// Look up every word in order, pausing between words (not after the last).
///
/// Per-word failures are recorded in the report and never stop the run.
/// Any other error is returned immediately.
pub async fn run_batch<S: ProgressSink>(
    dict: &Dictionary,
    words: &[String],
    mut sink: S,
) -> DictResult<BatchReport> {
    let started = Instant::now();
    let total = words.len();
    let delay = dict.config().delay();
    let mut report = BatchReport::default();

    sink.emit(ProgressEvent::BatchStarted { total });

    for (index, word) in words.iter().enumerate() {
        sink.emit(ProgressEvent::WordStarted {
            index,
            total,
            word: word.clone(),
        });

        match dict.lookup(word).await {
            Ok(entry) => {
                sink.emit(ProgressEvent::WordCompleted {
                    index,
                    word: word.clone(),
                    parts_of_speech: entry.parts_of_speech.len(),
                });
                report.entries.push(entry);
            }
            Err(e) if e.is_per_word() => {
                tracing::warn!("error processing word '{word}': {e}");
                sink.emit(ProgressEvent::WordFailed {
                    index,
                    word: word.clone(),
                    error: e.to_string(),
                });
                report.failures.push((word.clone(), e.to_string()));
            }
            Err(e) => return Err(e),
        }

        if index + 1 < total && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    let elapsed_ms = started.elapsed().as_millis().try_into().unwrap_or(u64::MAX);
    tracing::info!(
        "batch done: {} succeeded, {} failed in {elapsed_ms}ms",
        report.entries.len(),
        report.failures.len()
    );
    sink.emit(ProgressEvent::BatchCompleted {
        succeeded: report.entries.len(),
        failed: report.failures.len(),
        elapsed_ms,
    });

    Ok(report)
}

/// Read `words_file`, look up every word and write the entries to `output`.
pub async fn process_word_list<S: ProgressSink>(
    dict: &Dictionary,
    words_file: &Path,
    output: &Path,
    sink: S,
) -> DictResult<BatchReport> {
    let words = read_word_list(words_file)?;
    tracing::info!("processing {} words from {}", words.len(), words_file.display());

    let report = run_batch(dict, &words, sink).await?;
    write_json(output, &report.entries)?;
    Ok(report)
}
