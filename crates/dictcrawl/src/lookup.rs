// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! Single-word lookup: fetch, validate, extract.

use crate::acquisition::http_client::DictionaryClient;
use crate::config::CrawlConfig;
use crate::extraction::parse_entry_page;
use crate::types::{DictError, DictResult, WordEntry};

/// A configured connection to the online dictionary.
#[derive(Clone)]
pub struct Dictionary {
    client: DictionaryClient,
    config: CrawlConfig,
}

impl Dictionary {
    pub fn new(config: CrawlConfig) -> DictResult<Self> {
        let client = DictionaryClient::new(&config)?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Look up one word.
    ///
    /// Fails with [`DictError::Fetch`] when every attempt hit a transport
    /// error and [`DictError::NotFound`] when the site has no entry. A page
    /// that passes validation but has no usable senses yields an entry with
    /// no parts of speech.
    pub async fn lookup(&self, word: &str) -> DictResult<WordEntry> {
        let url = self.config.word_url(word).map_err(|e| {
            DictError::InvalidUrl(format!("{}{word}: {e}", self.config.base_url))
        })?;

        let page = self.client.fetch(url.as_str()).await?;
        if page.status != 200 {
            tracing::debug!("'{word}': HTTP {} from {}", page.status, page.final_url);
        }

        let entry = parse_entry_page(&page.body, word)?;
        tracing::info!(
            "'{word}' -> '{}' with {} part(s) of speech after {} attempt(s)",
            entry.word,
            entry.parts_of_speech.len(),
            page.attempts
        );
        Ok(entry)
    }
}
