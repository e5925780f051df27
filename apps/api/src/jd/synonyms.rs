//! Synonym dictionary — the lighter-weight skill matcher for requirement
//! text. Skills are matched present/absent only, no confidence tiers.
//!
//! Source format is a flat JSON mapping from canonical skill name to a
//! list of surface forms. The canonical spelling itself belongs in its own
//! list; only the list is consulted during matching.

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;

use crate::extraction::catalog::{CatalogError, CatalogWarning};

struct SynonymPlan {
    name: String,
    patterns: Vec<Regex>,
}

/// Compiled canonical-name → synonym-pattern dictionary. Entries are kept
/// sorted by canonical name so extraction output is deterministic.
pub struct SynonymDict {
    plans: Vec<SynonymPlan>,
}

impl SynonymDict {
    pub fn from_map(map: HashMap<String, Vec<String>>) -> Result<Self, CatalogError> {
        let mut entries: Vec<(String, Vec<String>)> = map.into_iter().collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut plans = Vec::with_capacity(entries.len());
        for (name, synonyms) in entries {
            let mut patterns = Vec::with_capacity(synonyms.len());
            for synonym in &synonyms {
                if synonym.trim().is_empty() {
                    continue;
                }
                patterns.push(compile_word_bounded(synonym)?);
            }
            plans.push(SynonymPlan { name, patterns });
        }
        Ok(SynonymDict { plans })
    }

    /// Loads the dictionary from a JSON file, degrading to an empty dict
    /// with a warning when the file is absent.
    pub fn load_from_path(path: &Path) -> Result<(Self, Vec<CatalogWarning>), CatalogError> {
        if !path.exists() {
            let warning = CatalogWarning::MissingSource {
                path: path.display().to_string(),
            };
            return Ok((SynonymDict { plans: vec![] }, vec![warning]));
        }
        let content = std::fs::read_to_string(path)?;
        let map: HashMap<String, Vec<String>> = serde_json::from_str(&content)?;
        Ok((Self::from_map(map)?, vec![]))
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Returns every canonical skill whose synonym list hits the text,
    /// sorted by name. Scanning a skill stops at its first matching
    /// synonym — finding "ML" means "Machine Learning" need not be tested.
    pub fn extract(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return vec![];
        }
        self.plans
            .iter()
            .filter(|plan| plan.patterns.iter().any(|p| p.is_match(text)))
            .map(|plan| plan.name.clone())
            .collect()
    }
}

fn compile_word_bounded(keyword: &str) -> Result<Regex, CatalogError> {
    let tokens: Vec<String> = keyword.split_whitespace().map(regex::escape).collect();
    let pattern = format!(r"(?i)\b{}\b", tokens.join(r"\s+"));
    Regex::new(&pattern).map_err(|source| CatalogError::Pattern {
        pattern: keyword.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(entries: &[(&str, &[&str])]) -> SynonymDict {
        let map = entries
            .iter()
            .map(|(name, synonyms)| {
                (
                    name.to_string(),
                    synonyms.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect();
        SynonymDict::from_map(map).unwrap()
    }

    #[test]
    fn test_extract_matches_any_listed_synonym() {
        let d = dict(&[("Machine Learning", &["machine learning", "ml"])]);
        assert_eq!(d.extract("strong ML background"), vec!["Machine Learning"]);
        assert_eq!(
            d.extract("machine learning experience"),
            vec!["Machine Learning"]
        );
    }

    #[test]
    fn test_word_boundaries_apply() {
        // "ML" must not fire inside "HTML".
        let d = dict(&[("Machine Learning", &["ml"])]);
        assert!(d.extract("we write HTML").is_empty());
    }

    #[test]
    fn test_output_sorted_by_canonical_name() {
        let d = dict(&[
            ("SQL", &["sql"]),
            ("Python", &["python"]),
            ("Angular", &["angular"]),
        ]);
        assert_eq!(
            d.extract("Angular, Python and SQL required"),
            vec!["Angular", "Python", "SQL"]
        );
    }

    #[test]
    fn test_skill_reported_once_despite_multiple_synonym_hits() {
        let d = dict(&[("Machine Learning", &["ml", "machine learning"])]);
        assert_eq!(
            d.extract("ML and machine learning"),
            vec!["Machine Learning"]
        );
    }

    #[test]
    fn test_empty_text_and_empty_dict() {
        let d = dict(&[("Python", &["python"])]);
        assert!(d.extract("").is_empty());
        let empty = dict(&[]);
        assert!(empty.extract("Python everywhere").is_empty());
    }

    #[test]
    fn test_missing_file_degrades_to_empty_dict() {
        let (d, warnings) =
            SynonymDict::load_from_path(Path::new("data/no_such_synonyms.json")).unwrap();
        assert!(d.is_empty());
        assert!(matches!(warnings[0], CatalogWarning::MissingSource { .. }));
    }
}
