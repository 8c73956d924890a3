use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{Field, Table};
use crate::metrics::count_by_category;

/// Provenance record for a generated table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetManifest {
    pub row_count: usize,
    pub seed: u64,
    pub generated_on: NaiveDate,
    pub hash_sha256: String,
    pub regions: BTreeMap<String, usize>,
    pub statuses: BTreeMap<String, usize>,
}

/// Directory the manifest binary writes to when no path is given.
pub const DEFAULT_MANIFEST_DIR: &str = "out";

/// `generated_on` is the `today` the table was generated against; start dates
/// are relative to it, so it is part of what makes the table reproducible.
pub fn manifest(table: &Table, seed: u64, generated_on: NaiveDate) -> Result<DatasetManifest> {
    Ok(DatasetManifest {
        row_count: table.len(),
        seed,
        generated_on,
        hash_sha256: table_sha256(table)?,
        regions: count_by_category(table, Field::Region).into_iter().collect(),
        statuses: count_by_category(table, Field::Status).into_iter().collect(),
    })
}

/// SHA-256 over the rows, one JSON document per line.
pub fn table_sha256(table: &Table) -> Result<String> {
    let mut hasher = Sha256::new();
    for row in table {
        serde_json::to_writer(&mut hasher, row)
            .with_context(|| format!("hashing {}", row.project_id))?;
        hasher.update(b"\n");
    }
    Ok(hex::encode(hasher.finalize()))
}

pub fn default_manifest_path(dir: &Path, seed: u64) -> PathBuf {
    dir.join(format!("projects-seed{}.manifest.json", seed))
}

/// Explicit path if given, else the seed-named file under `DEFAULT_MANIFEST_DIR`.
pub fn manifest_output_path(arg: Option<String>, seed: u64) -> PathBuf {
    arg.map(PathBuf::from)
        .unwrap_or_else(|| default_manifest_path(Path::new(DEFAULT_MANIFEST_DIR), seed))
}

pub fn write_manifest(path: &Path, manifest: &DatasetManifest) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let body = serde_json::to_string_pretty(manifest)?;
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
