//! JSON list snapshots for the `diff` command.
//!
//! A snapshot file is an array of objects. `id` is required and must be
//! unique; `section` and `order` decide placement, whatever order the file
//! lists rows in; every other field is the row's value and takes part in
//! change detection.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use itemlist_types::{ListEntry, SectionId, sort_entries};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRow {
    pub id: String,
    #[serde(default)]
    pub section: i32,
    #[serde(default)]
    pub order: i64,
    #[serde(flatten)]
    pub value: Map<String, Value>,
}

impl ListEntry for SnapshotRow {
    type Id = String;
    type Key = i64;

    fn stable_id(&self) -> String {
        self.id.clone()
    }

    fn section(&self) -> SectionId {
        SectionId::new(self.section)
    }

    fn sort_key(&self) -> i64 {
        self.order
    }
}

/// Read a snapshot, rejecting duplicate ids up front.
///
/// Rows come back sorted by section, then order.
pub fn read_snapshot(path: &Path) -> Result<Vec<SnapshotRow>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_snapshot(&content).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_snapshot(content: &str) -> Result<Vec<SnapshotRow>> {
    let mut rows: Vec<SnapshotRow> = serde_json::from_str(content)?;

    let mut seen = HashSet::with_capacity(rows.len());
    for row in &rows {
        if !seen.insert(row.id.as_str()) {
            bail!("duplicate row id {:?}", row.id);
        }
    }
    sort_entries(&mut rows);
    Ok(rows)
}
