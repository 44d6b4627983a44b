// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! Progress events emitted while a batch runs.
//!
//! The batch runner calls [`ProgressSink::emit`] inline between words. There
//! is no channel or background task; a sink that wants to draw (the CLI's
//! progress bar) does so synchronously.

use serde::{Deserialize, Serialize};

/// A progress event emitted during a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProgressEvent {
    /// The word list was read.
    BatchStarted { total: usize },
    /// A lookup is about to begin. `index` is zero-based.
    WordStarted {
        index: usize,
        total: usize,
        word: String,
    },
    /// A lookup produced an entry.
    WordCompleted {
        index: usize,
        word: String,
        parts_of_speech: usize,
    },
    /// A lookup failed; the batch carries on.
    WordFailed {
        index: usize,
        word: String,
        error: String,
    },
    /// Every word was attempted.
    BatchCompleted {
        succeeded: usize,
        failed: usize,
        elapsed_ms: u64,
    },
}

/// Receiver of batch progress.
pub trait ProgressSink {
    fn emit(&mut self, event: ProgressEvent);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn emit(&mut self, _event: ProgressEvent) {}
}

/// Keeps every event in order, for inspection after the run.
#[derive(Debug, Default, Clone)]
pub struct EventLog {
    pub events: Vec<ProgressEvent>,
}

impl ProgressSink for EventLog {
    fn emit(&mut self, event: ProgressEvent) {
        self.events.push(event);
    }
}

impl<S: ProgressSink + ?Sized> ProgressSink for &mut S {
    fn emit(&mut self, event: ProgressEvent) {
        (**self).emit(event);
    }
}
