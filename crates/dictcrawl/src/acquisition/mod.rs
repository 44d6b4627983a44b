// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! Page acquisition: HTTP fetching with bounded retry.

pub mod http_client;
pub mod retry;
