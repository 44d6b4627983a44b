// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! Command implementations for the dictcrawl binary.

pub mod args;
pub mod batch_cmd;
pub mod lookup_cmd;
pub mod progress_bar;
