// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core data types for extracted dictionary entries.

use serde::{Deserialize, Serialize};

/// A dictionary entry for one word: its canonical spelling and one
/// representative definition per part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Canonical headword, trimmed and lowercased.
    pub word: String,
    /// At most one entry per distinct label, in first-seen order.
    #[serde(rename = "partsOfSpeech")]
    pub parts_of_speech: Vec<PosEntry>,
}

impl WordEntry {
    /// Create an entry with no parts of speech yet.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            parts_of_speech: Vec::new(),
        }
    }

    /// Look up the entry for a part-of-speech label.
    pub fn pos(&self, label: &str) -> Option<&PosEntry> {
        self.parts_of_speech.iter().find(|p| p.pos_type == label)
    }
}

/// The chosen definition (and usage example, if any) for one part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosEntry {
    /// Lowercased label such as "noun" or "verb".
    #[serde(rename = "type")]
    pub pos_type: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Errors that can occur while looking up words.
#[derive(thiserror::Error, Debug)]
pub enum DictError {
    #[error("failed to fetch {url} after {attempts} attempts: {message}")]
    Fetch {
        url: String,
        attempts: u32,
        message: String,
    },

    #[error("word '{word}' not found in dictionary or invalid response received")]
    NotFound { word: String },

    #[error("invalid lookup URL: {0}")]
    InvalidUrl(String),

    #[error("cannot read word list {path}: {source}")]
    WordList {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DictError {
    /// Whether the error only concerns the word being looked up, so a
    /// batch can skip that word and carry on.
    pub fn is_per_word(&self) -> bool {
        matches!(
            self,
            DictError::Fetch { .. } | DictError::NotFound { .. } | DictError::InvalidUrl(_)
        )
    }
}

/// Convenience result type.
pub type DictResult<T> = Result<T, DictError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_entry_omits_missing_example() {
        let entry = PosEntry {
            pos_type: "noun".to_string(),
            definition: "a small animal".to_string(),
            example: None,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "noun", "definition": "a small animal" })
        );
    }

    #[test]
    fn test_word_entry_field_names() {
        let mut entry = WordEntry::new("run");
        entry.parts_of_speech.push(PosEntry {
            pos_type: "verb".to_string(),
            definition: "to move fast".to_string(),
            example: Some("He ran fast.".to_string()),
        });
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["word"], "run");
        assert_eq!(json["partsOfSpeech"][0]["type"], "verb");
        assert_eq!(json["partsOfSpeech"][0]["example"], "He ran fast.");
        assert!(entry.pos("verb").is_some());
        assert!(entry.pos("noun").is_none());
    }

    #[test]
    fn test_word_entry_round_trip() {
        let mut entry = WordEntry::new("café");
        entry.parts_of_speech.push(PosEntry {
            pos_type: "noun".to_string(),
            definition: "a small restaurant".to_string(),
            example: None,
        });
        let text = serde_json::to_string(&entry).unwrap();
        let back: WordEntry = serde_json::from_str(&text).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_error_scope() {
        assert!(DictError::NotFound {
            word: "zzz".to_string()
        }
        .is_per_word());
        assert!(DictError::Fetch {
            url: "http://x".to_string(),
            attempts: 3,
            message: "refused".to_string()
        }
        .is_per_word());
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        assert!(!DictError::Io(io).is_per_word());
    }

    #[test]
    fn test_not_found_message() {
        let err = DictError::NotFound {
            word: "qwzx".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "word 'qwzx' not found in dictionary or invalid response received"
        );
    }
}
