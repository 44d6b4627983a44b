// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! Text and class helpers shared by the validator and the extractor.

use scraper::ElementRef;

/// All descendant text of an element, concatenated and trimmed.
pub fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Whether the element's raw `class` attribute contains `fragment` as a
/// substring (so `"def ddef_d"` matches `class="def ddef_d db"`).
pub fn class_contains(el: &ElementRef<'_>, fragment: &str) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|class| class.contains(fragment))
}

/// Whether any direct text child of the element equals `text` exactly.
pub fn has_own_text(el: &ElementRef<'_>, text: &str) -> bool {
    el.children()
        .filter_map(|node| node.value().as_text())
        .any(|t| &**t == text)
}

/// Remove exactly one trailing `:` if present.
pub fn strip_trailing_colon(text: &str) -> &str {
    text.strip_suffix(':').unwrap_or(text)
}

/// Trimmed, lowercased form used for words and labels.
pub fn canonical(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
        let sel = Selector::parse(css).unwrap();
        doc.select(&sel).next().unwrap()
    }

    #[test]
    fn test_strip_trailing_colon() {
        assert_eq!(strip_trailing_colon("to move fast:"), "to move fast");
        assert_eq!(strip_trailing_colon("to move fast::"), "to move fast:");
        assert_eq!(strip_trailing_colon("to move fast"), "to move fast");
        assert_eq!(strip_trailing_colon(""), "");
    }

    #[test]
    fn test_element_text_joins_descendants() {
        let doc = Html::parse_fragment(r#"<div> to <a>move</a> <b>fast</b>: </div>"#);
        assert_eq!(element_text(&first(&doc, "div")), "to move fast:");
    }

    #[test]
    fn test_class_contains_is_substring() {
        let doc = Html::parse_fragment(r#"<div class="def ddef_d db">x</div>"#);
        let el = first(&doc, "div");
        assert!(class_contains(&el, "def ddef_d"));
        assert!(class_contains(&el, "ddef"));
        assert!(!class_contains(&el, "examp"));
    }

    #[test]
    fn test_has_own_text_ignores_nested() {
        let doc = Html::parse_fragment(r#"<span class="pos dpos">verb<i>noun</i></span>"#);
        let el = first(&doc, "span");
        assert!(has_own_text(&el, "verb"));
        assert!(!has_own_text(&el, "noun"));
        assert!(!has_own_text(&el, "Verb"));
    }

    #[test]
    fn test_canonical() {
        assert_eq!(canonical("  Run \n"), "run");
        assert_eq!(canonical("Éclair"), "éclair");
    }
}
