// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! Dictcrawl — fetch online dictionary pages and extract one definition
//! (with a usage example where available) per part of speech.
//!
//! The library exposes every stage so it can be driven directly or from
//! integration tests: [`acquisition`] fetches with bounded retry,
//! [`extraction`] validates and walks the page, [`lookup`] ties the two
//! together for one word and [`batch`] runs a word list.

pub mod acquisition;
pub mod batch;
pub mod cli;
pub mod config;
pub mod extraction;
pub mod lookup;
pub mod output;
pub mod progress;
pub mod types;

pub use batch::{process_word_list, read_word_list, run_batch, BatchReport};
pub use config::CrawlConfig;
pub use extraction::parse_entry_page;
pub use lookup::Dictionary;
pub use types::*;
