// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! Resolve the positional arguments into a single-word or word-list run.

use std::path::{Path, PathBuf};

/// Extension that marks a positional argument as a word-list file.
pub const WORD_LIST_EXTENSION: &str = ".txt";

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Look up one word.
    Word { word: String, output: PathBuf },
    /// Look up every word in a file.
    WordList { path: PathBuf, output: PathBuf },
}

/// Work out the mode from `--file` and the positional arguments.
///
/// Returns a usage message when nothing to look up was given or there
/// are too many positionals.
pub fn resolve(file: Option<&str>, positional: &[String]) -> Result<InputMode, String> {
    if let Some(path) = file {
        return match positional {
            [] => Ok(word_list(path, None)),
            [output] => Ok(word_list(path, Some(output))),
            [_, extra, ..] => Err(format!("unexpected argument '{extra}'")),
        };
    }

    match positional {
        [] => Err("missing word or word-list file".to_string()),
        [first, rest @ ..] if rest.len() > 1 => {
            Err(format!("unexpected argument '{}' after '{first}'", rest[1]))
        }
        [first, rest @ ..] if first.ends_with(WORD_LIST_EXTENSION) => {
            Ok(word_list(first, rest.first()))
        }
        [word, rest @ ..] => Ok(InputMode::Word {
            output: rest
                .first()
                .map(PathBuf::from)
                .unwrap_or_else(|| default_word_output(word)),
            word: word.clone(),
        }),
    }
}

fn word_list(path: &str, output: Option<&String>) -> InputMode {
    let path = PathBuf::from(path);
    let output = output
        .map(PathBuf::from)
        .unwrap_or_else(|| default_list_output(&path));
    InputMode::WordList { path, output }
}

/// `result_<word>.json`
pub fn default_word_output(word: &str) -> PathBuf {
    PathBuf::from(format!("result_{word}.json"))
}

/// The list path with a trailing `.txt` dropped and `.json` added.
pub fn default_list_output(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    let base = raw.strip_suffix(WORD_LIST_EXTENSION).unwrap_or(&raw);
    PathBuf::from(format!("{base}.json"))
}
