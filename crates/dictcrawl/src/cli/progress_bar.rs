// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! Terminal progress bar for batch runs.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use crate::progress::{ProgressEvent, ProgressSink};

/// Draws batch progress on stderr. Silent when `quiet`.
pub struct BarSink {
    bar: ProgressBar,
    /// Where the words came from, for the opening line.
    source: String,
    quiet: bool,
}

impl BarSink {
    pub fn new(source: String, quiet: bool) -> Self {
        let target = if quiet {
            ProgressDrawTarget::hidden()
        } else {
            ProgressDrawTarget::stderr()
        };
        let bar = ProgressBar::with_draw_target(Some(0), target);
        if let Ok(style) =
            ProgressStyle::with_template("Processing words {bar:30} {pos}/{len} {wide_msg}")
        {
            bar.set_style(style);
        }
        Self { bar, source, quiet }
    }

    fn say(&self, line: String) {
        if !self.quiet {
            self.bar.suspend(|| println!("{line}"));
        }
    }
}

impl ProgressSink for BarSink {
    fn emit(&mut self, event: ProgressEvent) {
        match event {
            ProgressEvent::BatchStarted { total } => {
                self.say(format!("Processing {total} words from {}...", self.source));
                self.bar.set_length(total as u64);
            }
            ProgressEvent::WordStarted { word, .. } => self.bar.set_message(word),
            // Failures are already logged by the batch runner.
            ProgressEvent::WordCompleted { .. } | ProgressEvent::WordFailed { .. } => {
                self.bar.inc(1)
            }
            ProgressEvent::BatchCompleted { .. } => self.bar.finish_and_clear(),
        }
    }
}
