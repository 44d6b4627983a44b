// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! Turn dictionary page markup into a [`WordEntry`].

pub mod entry;
pub mod text;
pub mod validator;

use scraper::Html;

use crate::types::{DictResult, WordEntry};

pub use entry::extract;
pub use validator::validate;

/// Parse, validate and extract in one step.
///
/// `word` is the word as typed; it names the error on a miss and stands
/// in for the headword when the page has none.
pub fn parse_entry_page(html: &str, word: &str) -> DictResult<WordEntry> {
    let document = Html::parse_document(html);
    validate(&document, word)?;
    Ok(extract(&document, word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DictError;

    #[test]
    fn test_not_found_page() {
        let html = "<html><head><title>Cambridge English Dictionary: Meanings</title></head></html>";
        assert!(matches!(
            parse_entry_page(html, "qwzx"),
            Err(DictError::NotFound { .. })
        ));
    }

    #[test]
    fn test_entry_page_without_senses() {
        let html = r#"<html><head><title>HELLO | Cambridge English Dictionary</title></head>
            <body><div class="entry-body__el"></div></body></html>"#;
        let entry = parse_entry_page(html, "hello").unwrap();
        assert_eq!(entry.word, "hello");
        assert!(entry.parts_of_speech.is_empty());
    }
}
