// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! Build a [`WordEntry`] from a parsed dictionary page.
//!
//! Page layout this walks (classes are matched as substrings):
//!
//! ```text
//! div.pos-header
//!   div.posgram > span[class="pos dpos"]   "verb"
//! div.pos-body                             following sibling of the header
//!   div.def-block                          one per sense
//!     div.def.ddef_d                       definition text, often ending in ':'
//!     div.examp.dexamp                     zero or more usage examples
//! ```
//!
//! Each distinct label keeps one sense: the first block that has an
//! example, or failing that the first block with a definition.

use std::collections::HashSet;
use std::ops::ControlFlow;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::extraction::text::{
    canonical, class_contains, element_text, has_own_text, strip_trailing_colon,
};
use crate::types::{PosEntry, WordEntry};

const POS_HEADER_CLASS: &str = "pos-header";
const POS_BODY_CLASS: &str = "pos-body";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("entry page selector is valid")
}

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static HEADWORD: LazyLock<Selector> = LazyLock::new(|| selector(r#"span[class*="hw dhw"]"#));
static POS_LABEL: LazyLock<Selector> = LazyLock::new(|| {
    selector(r#"div[class*="pos-header"] > div[class*="posgram"] > span[class="pos dpos"]"#)
});
static POS_SPAN: LazyLock<Selector> = LazyLock::new(|| selector(r#"span[class="pos dpos"]"#));
static DEF_BLOCK: LazyLock<Selector> = LazyLock::new(|| selector(r#"div[class*="def-block"]"#));
static DEFINITION: LazyLock<Selector> = LazyLock::new(|| selector(r#"div[class*="def ddef_d"]"#));
static EXAMPLE: LazyLock<Selector> = LazyLock::new(|| selector(r#"div[class*="examp dexamp"]"#));

/// One sense read from a definition block.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Sense {
    definition: String,
    example: Option<String>,
}

/// Fold state while scanning a label's blocks.
#[derive(Debug, Default)]
struct Selection {
    /// First block with a definition, captured once.
    fallback: Option<Sense>,
    /// First block with a non-empty example; ends the scan.
    preferred: Option<Sense>,
}

/// Extract the entry for a page that already passed validation.
///
/// `fallback_word` is used as the headword only when the page names none.
pub fn extract(document: &Html, fallback_word: &str) -> WordEntry {
    let mut entry = WordEntry::new(canonical_word(document, fallback_word));

    for label in pos_labels(document) {
        let blocks = blocks_for_label(document, &label);
        tracing::debug!("'{}': {} block(s) under '{label}'", entry.word, blocks.len());

        match choose_sense(blocks.iter().filter_map(read_block)) {
            Some(sense) => entry.parts_of_speech.push(PosEntry {
                pos_type: label,
                definition: sense.definition,
                example: sense.example,
            }),
            None => tracing::debug!("'{}': no definition under '{label}'", entry.word),
        }
    }

    entry
}

/// Title text before the first `|`, else the headword, else the typed word.
fn canonical_word(document: &Html, fallback_word: &str) -> String {
    title_word(document)
        .or_else(|| headword(document))
        .unwrap_or_else(|| canonical(fallback_word))
}

fn title_word(document: &Html) -> Option<String> {
    let title = document.select(&TITLE).next()?;
    let text: String = title.text().collect();
    let (before, _) = text.split_once('|')?;
    non_empty(canonical(before))
}

fn headword(document: &Html) -> Option<String> {
    let el = document.select(&HEADWORD).next()?;
    non_empty(canonical(&element_text(&el)))
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

/// Distinct labels in document order, first occurrence wins.
fn pos_labels(document: &Html) -> Vec<String> {
    let mut seen = HashSet::new();
    document
        .select(&POS_LABEL)
        .map(|el| canonical(&element_text(&el)))
        .filter(|label| seen.insert(label.clone()))
        .collect()
}

/// Every definition block inside a `pos-body` that follows a header
/// holding a label span whose text is exactly `label`.
///
/// Several headers can carry the same label, so the scope may span more
/// than one body. Blocks come back in document order without duplicates.
fn blocks_for_label<'a>(document: &'a Html, label: &str) -> Vec<ElementRef<'a>> {
    let mut in_scope = HashSet::new();

    for span in document.select(&POS_SPAN).filter(|s| has_own_text(s, label)) {
        let headers = span
            .ancestors()
            .filter_map(ElementRef::wrap)
            .filter(|el| is_div_with_class(el, POS_HEADER_CLASS));

        for header in headers {
            let bodies = header
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .filter(|el| is_div_with_class(el, POS_BODY_CLASS));

            for body in bodies {
                // Tree node ids, not the HTML `id` attribute.
                in_scope.extend(body.select(&DEF_BLOCK).map(|block| (*block).id()));
            }
        }
    }

    document
        .select(&DEF_BLOCK)
        .filter(|block| in_scope.contains(&(**block).id()))
        .collect()
}

fn is_div_with_class(el: &ElementRef<'_>, fragment: &str) -> bool {
    el.value().name() == "div" && class_contains(el, fragment)
}

/// `None` when the block has no definition element.
fn read_block(block: &ElementRef<'_>) -> Option<Sense> {
    let def_el = block.select(&DEFINITION).next()?;
    let text = element_text(&def_el);
    let definition = strip_trailing_colon(&text).to_string();

    let example = block
        .select(&EXAMPLE)
        .next()
        .map(|el| element_text(&el))
        .filter(|e| !e.is_empty());

    Some(Sense {
        definition,
        example,
    })
}

/// Scan senses in order, stopping at the first one with an example.
fn choose_sense<I>(mut senses: I) -> Option<Sense>
where
    I: Iterator<Item = Sense>,
{
    let scan = senses.try_fold(Selection::default(), |mut acc, sense| {
        if acc.fallback.is_none() {
            acc.fallback = Some(sense.clone());
        }
        if sense.example.is_some() {
            acc.preferred = Some(sense);
            return ControlFlow::Break(acc);
        }
        ControlFlow::Continue(acc)
    });

    let (ControlFlow::Break(selection) | ControlFlow::Continue(selection)) = scan;
    selection.preferred.or(selection.fallback)
}
