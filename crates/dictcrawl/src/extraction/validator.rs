// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! Distinguish a real entry page from the site's "not found" page.
//!
//! The dictionary answers unknown words with its generic landing page,
//! so a page whose title is the site title and which has no entry body
//! is treated as a miss. Anything else passes, even if it later yields
//! no parts of speech.

use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::extraction::text::element_text;
use crate::types::{DictError, DictResult};

/// Title fragment of the dictionary's generic pages.
pub const SITE_TITLE: &str = "Cambridge English Dictionary";

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector is valid"));
/// Every entry body block carries this class fragment.
static ENTRY_BODY: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"div[class*="entry-body__el"]"#).expect("entry body selector is valid")
});

/// Fail with [`DictError::NotFound`] when the page looks like a miss.
pub fn validate(document: &Html, word: &str) -> DictResult<()> {
    if has_site_title(document) && !has_entry_body(document) {
        tracing::debug!("'{word}': generic site page without entry body");
        return Err(DictError::NotFound {
            word: word.to_string(),
        });
    }
    Ok(())
}

fn has_site_title(document: &Html) -> bool {
    document
        .select(&TITLE)
        .any(|t| element_text(&t).contains(SITE_TITLE))
}

fn has_entry_body(document: &Html) -> bool {
    document.select(&ENTRY_BODY).next().is_some()
}
