//! Shared fixtures: dictionary-shaped HTML and a mock dictionary site.

#![allow(dead_code)]

use dictcrawl::CrawlConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const DICT_PATH: &str = "/dictionary/english/";

/// One sense: definition text and optional example.
pub type Sense<'a> = (&'a str, Option<&'a str>);

/// An entry page with one `entry-body__el` per part-of-speech section.
pub fn entry_page(headword: &str, sections: Vec<(&str, Vec<Sense<'_>>)>) -> String {
    let mut body = String::new();
    for (label, senses) in &sections {
        let mut blocks = String::new();
        for (definition, example) in senses.iter() {
            let example = example
                .map(|e| format!(r#"<div class="examp dexamp"><span class="eg deg">{e}</span></div>"#))
                .unwrap_or_default();
            blocks.push_str(&format!(
                r#"<div class="def-block ddef_block">
                     <div class="ddef_h"><div class="def ddef_d db">{definition}: </div></div>
                     <div class="def-body ddef_b">{example}</div>
                   </div>"#
            ));
        }
        body.push_str(&format!(
            r#"<div class="pr entry-body__el">
                 <div class="pos-header dpos-h">
                   <div class="di-title"><span class="headword"><span class="hw dhw">{headword}</span></span></div>
                   <div class="posgram dpos-g hdib lmr-5"><span class="pos dpos">{label}</span></div>
                 </div>
                 <div class="pos-body"><div class="pr dsense"><div class="sense-body dsense_b">{blocks}</div></div></div>
               </div>"#
        ));
    }
    format!(
        r#"<!DOCTYPE html>
        <html lang="en"><head>
          <title>{} | English meaning - Cambridge Dictionary</title>
        </head><body><div class="page">{body}</div></body></html>"#,
        headword.to_uppercase()
    )
}

/// The generic page the site serves for unknown words.
pub fn not_found_page() -> String {
    r#"<!DOCTYPE html>
    <html lang="en"><head>
      <title>Cambridge English Dictionary: Meanings &amp; Definitions</title>
    </head><body><div class="hfl-s lt2b lmt-10">Search</div></body></html>"#
        .to_string()
}

/// Request path for `word`, percent-encoded the way the client sends it.
pub fn word_path(word: &str) -> String {
    url::Url::parse(&format!("http://localhost{DICT_PATH}{word}"))
        .unwrap()
        .path()
        .to_string()
}

/// Serve `html` for `word`.
pub async fn mount_word(server: &MockServer, word: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(word_path(word)))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(server)
        .await;
}

/// Config pointed at the mock server with no waiting.
pub fn test_config(server: &MockServer) -> CrawlConfig {
    CrawlConfig {
        base_url: format!("{}{DICT_PATH}", server.uri()),
        backoff_unit_ms: 0,
        delay_ms: 0,
        timeout_ms: 5000,
        ..CrawlConfig::default()
    }
}
