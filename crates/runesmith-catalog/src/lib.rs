//! Runeword catalog ingestion.
//!
//! Reads a directory of JSON records (one runeword per `.json` file),
//! validates each record, and normalizes it into the strongly typed
//! [`RecipeDefinition`] shape. The query core never sees an invalid record:
//! a record that fails validation is rejected individually and reported in
//! [`LoadResult::rejected`] while the rest of the catalog still loads.
//!
//! Wire schema per record:
//!
//! ```json
//! {
//!   "id": "stealth_ward",
//!   "slots": ["shield"],
//!   "runes": ["ven", "yun"],
//!   "stats": [{ "stat": "cold_resistance", "min": 10, "max": 10, "type": "PERCENT" }]
//! }
//! ```
//!
//! Files are visited in file-name order so catalog order (and therefore
//! match order) is deterministic across runs and platforms.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Deserialize;
use thiserror::Error;
use walkdir::WalkDir;

use runesmith_model::{Catalog, EquipmentSlot, RecipeDefinition, RuneId, StatKind, StatModifier};

/// Errors raised while ingesting catalog records.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog directory {} does not exist or is not a directory", path.display())]
    MissingDirectory { path: PathBuf },

    #[error("failed to walk catalog directory: {source}")]
    Walk {
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid record in {}: {reason}", path.display())]
    Schema { path: PathBuf, reason: String },
}

/// A loaded catalog plus the records that were rejected along the way.
#[derive(Debug)]
pub struct LoadResult {
    pub catalog: Catalog,
    pub rejected: Vec<CatalogError>,
}

/// Raw wire shape of one record, before validation.
#[derive(Debug, Deserialize)]
struct RawRecipe {
    id: String,
    slots: Vec<String>,
    runes: Vec<String>,
    stats: Vec<RawStat>,
}

#[derive(Debug, Deserialize)]
struct RawStat {
    stat: String,
    min: f64,
    max: f64,
    #[serde(rename = "type")]
    kind: String,
}

/// Load every `.json` record under `path` into a catalog.
///
/// Returns `Err` only when the directory itself cannot be used; individual
/// bad records are rejected (and logged) without failing the load.
pub fn load_dir(path: impl AsRef<Path>) -> Result<LoadResult, CatalogError> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Err(CatalogError::MissingDirectory {
            path: path.to_path_buf(),
        });
    }

    let mut recipes = Vec::new();
    let mut rejected = Vec::new();

    for entry in WalkDir::new(path).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(source) => {
                let err = CatalogError::Walk { source };
                warn!("{}", err);
                rejected.push(err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.path().extension().and_then(|ext| ext.to_str()) != Some("json") {
            continue;
        }

        match load_file(entry.path()) {
            Ok(recipe) => {
                debug!("loaded runeword '{}' from {}", recipe.id, entry.path().display());
                recipes.push(recipe);
            }
            Err(err) => {
                warn!("rejected catalog record: {}", err);
                rejected.push(err);
            }
        }
    }

    Ok(LoadResult {
        catalog: Catalog::new(recipes),
        rejected,
    })
}

/// Read and validate a single record file.
pub fn load_file(path: &Path) -> Result<RecipeDefinition, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let raw: RawRecipe = serde_json::from_str(&content).map_err(|source| CatalogError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    validate(raw, path)
}

/// Check record invariants and normalize into the model shape.
fn validate(raw: RawRecipe, path: &Path) -> Result<RecipeDefinition, CatalogError> {
    if raw.slots.is_empty() {
        return Err(schema(path, "record has no slots"));
    }
    if raw.runes.is_empty() {
        return Err(schema(path, "record has no runes"));
    }

    let mut stats = Vec::with_capacity(raw.stats.len());
    for stat in raw.stats {
        let kind: StatKind = stat
            .kind
            .parse()
            .map_err(|reason: String| schema(path, reason))?;
        if stat.min > stat.max {
            return Err(schema(
                path,
                format!("stat '{}' has min {} greater than max {}", stat.stat, stat.min, stat.max),
            ));
        }
        stats.push(StatModifier::new(stat.stat, stat.min, stat.max, kind));
    }

    // Slots are a set with display order: deduplicate, keep first occurrence.
    let mut slots: Vec<EquipmentSlot> = Vec::with_capacity(raw.slots.len());
    for token in &raw.slots {
        let slot = EquipmentSlot::new(token);
        if !slots.contains(&slot) {
            slots.push(slot);
        }
    }

    let runes = raw.runes.iter().map(RuneId::new).collect();

    Ok(RecipeDefinition {
        id: raw.id,
        slots,
        runes,
        stats,
    })
}

fn schema(path: &Path, reason: impl Into<String>) -> CatalogError {
    CatalogError::Schema {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}
