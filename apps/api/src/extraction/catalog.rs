//! Skill catalog — the read-only reference database the matcher and
//! categorizer share.
//!
//! A missing source file is NOT fatal: downstream components must keep
//! working with zero skills, so `load_from_path` degrades to an empty
//! catalog and reports a warning to the caller. Only a structurally
//! unreadable source (bad JSON, I/O failure on an existing file) aborts
//! construction.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural failure while building a catalog. The caller decides whether
/// to proceed with an empty catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read skill database: {0}")]
    Io(#[from] std::io::Error),

    #[error("skill database is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid skill pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
}

/// Non-fatal load diagnostics. Returned to the caller rather than logged
/// in place, so the wiring site owns reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogWarning {
    /// Source file does not exist; the catalog was constructed empty.
    MissingSource { path: String },
    /// Record had no `name` field (or an empty one) and was skipped.
    MissingName { index: usize },
    /// A later record re-declared this name; the later record won.
    DuplicateName { name: String },
}

impl std::fmt::Display for CatalogWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogWarning::MissingSource { path } => {
                write!(f, "skill database '{path}' not found; starting with an empty catalog")
            }
            CatalogWarning::MissingName { index } => {
                write!(f, "skill record #{index} has no name and was skipped")
            }
            CatalogWarning::DuplicateName { name } => {
                write!(f, "duplicate skill '{name}'; the last definition wins")
            }
        }
    }
}

/// One catalog entry as stored in `skills_db.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRecord {
    /// Canonical name — the single authoritative label for the skill.
    #[serde(default)]
    pub name: String,
    /// Alternate surface forms that resolve to `name`.
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Canonical names of skills implied by this one.
    #[serde(default)]
    pub related_skills: Vec<String>,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "Technical".to_string()
}

/// Immutable skill reference data. Built once at startup, shared read-only
/// across documents (wrap in `Arc` for concurrent use).
#[derive(Debug, Default)]
pub struct SkillCatalog {
    records: Vec<SkillRecord>,
    by_name: HashMap<String, usize>,
}

impl SkillCatalog {
    /// Builds a catalog from raw records, skipping nameless records and
    /// resolving duplicates last-wins. Diagnostics come back alongside the
    /// catalog.
    pub fn from_records(records: Vec<SkillRecord>) -> (Self, Vec<CatalogWarning>) {
        let mut warnings = Vec::new();
        let mut catalog = SkillCatalog::default();

        for (index, record) in records.into_iter().enumerate() {
            if record.name.trim().is_empty() {
                warnings.push(CatalogWarning::MissingName { index });
                continue;
            }
            match catalog.by_name.get(&record.name) {
                Some(&slot) => {
                    warnings.push(CatalogWarning::DuplicateName {
                        name: record.name.clone(),
                    });
                    catalog.records[slot] = record;
                }
                None => {
                    catalog.by_name.insert(record.name.clone(), catalog.records.len());
                    catalog.records.push(record);
                }
            }
        }

        (catalog, warnings)
    }

    /// Loads the catalog from a JSON file. A missing file yields an empty
    /// catalog plus a `MissingSource` warning; an unreadable or malformed
    /// file is a `CatalogError`.
    pub fn load_from_path(path: &Path) -> Result<(Self, Vec<CatalogWarning>), CatalogError> {
        if !path.exists() {
            let warning = CatalogWarning::MissingSource {
                path: path.display().to_string(),
            };
            return Ok((SkillCatalog::default(), vec![warning]));
        }

        let content = std::fs::read_to_string(path)?;
        let records: Vec<SkillRecord> = serde_json::from_str(&content)?;
        Ok(Self::from_records(records))
    }

    pub fn lookup(&self, name: &str) -> Option<&SkillRecord> {
        self.by_name.get(name).map(|&slot| &self.records[slot])
    }

    pub fn all(&self) -> &[SkillRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
