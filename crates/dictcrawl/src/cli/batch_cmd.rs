// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! `dictcrawl --file <words> [output]` — look up every word in a file.

use std::path::Path;

use anyhow::{bail, Result};

use crate::batch::process_word_list;
use crate::cli::progress_bar::BarSink;
use crate::lookup::Dictionary;

/// Run the batch command.
pub async fn run(dict: &Dictionary, words_file: &Path, output: &Path, quiet: bool) -> Result<()> {
    if !words_file.exists() {
        bail!("File '{}' not found", words_file.display());
    }

    let sink = BarSink::new(words_file.display().to_string(), quiet);
    let report = process_word_list(dict, words_file, output, sink).await?;

    if !quiet {
        if !report.failures.is_empty() {
            println!(
                "{} of {} words failed",
                report.failures.len(),
                report.failures.len() + report.entries.len()
            );
        }
        println!("All processed data saved to {}", output.display());
    }

    Ok(())
}
