// Copyright 2026 Dictcrawl Contributors
// SPDX-License-Identifier: Apache-2.0

//! JSON output files.
//!
//! Files are pretty-printed with a four-space indent. serde_json writes
//! non-ASCII characters as-is, so headwords like "café" stay readable.

use std::path::Path;

use serde::Serialize;

use crate::types::DictResult;

const FILE_INDENT: &[u8] = b"    ";

/// Serialize `value` pretty-printed with the given indent.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T, indent: &[u8]) -> DictResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(indent);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write `value` to `path` in the output file format.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> DictResult<()> {
    let mut text = to_pretty_json(value, FILE_INDENT)?;
    text.push('\n');
    std::fs::write(path, text)?;
    tracing::debug!("wrote {}", path.display());
    Ok(())
}
