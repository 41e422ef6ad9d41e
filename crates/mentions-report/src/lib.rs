//! JSON report writing.
//!
//! The final record list is serialized as a JSON array of objects
//! with keys `drug`, `title`, `ref_type`, `date_mention` (null when
//! absent), in list order, UTF-8 with non-ASCII characters unescaped,
//! pretty-printed with 4-space indentation.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use mentions_model::MentionRecord;

/// Serialize records with 4-space indentation.
pub fn render_mentions_json(records: &[MentionRecord]) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records
        .serialize(&mut serializer)
        .context("serialize mention records")?;
    let mut text = String::from_utf8(buffer).context("serialized json is valid utf-8")?;
    text.push('\n');
    Ok(text)
}

/// Write the aggregated record list to a JSON file.
///
/// Parent directories are created as needed. Returns the output path.
pub fn write_mentions_json(path: &Path, records: &[MentionRecord]) -> Result<PathBuf> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    let text = render_mentions_json(records)?;
    fs::write(path, text).with_context(|| format!("write report {}", path.display()))?;
    info!(
        path = %path.display(),
        records = records.len(),
        "wrote mentions report"
    );
    Ok(path.to_path_buf())
}
