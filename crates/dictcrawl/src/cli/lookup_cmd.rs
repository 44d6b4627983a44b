// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! `dictcrawl <word> [output]` — look up a single word.

use std::path::Path;

use anyhow::Result;

use crate::lookup::Dictionary;
use crate::output::{to_pretty_json, write_json};

/// Run the single-word command. Any lookup failure is fatal.
pub async fn run(dict: &Dictionary, word: &str, output: &Path, quiet: bool) -> Result<()> {
    let entry = dict.lookup(word).await?;
    write_json(output, &entry)?;

    if !quiet {
        println!("Parsed data saved to {}", output.display());
        println!("\nExtracted data:");
        println!("{}", to_pretty_json(&entry, b"  ")?);
    }

    Ok(())
}
