//! Skill matcher — scans text against the catalog and scores each hit.
//!
//! Three confidence tiers: an exact canonical-name hit scores 1.0, the
//! first matching alias of a record scores 0.9, and the related skills of
//! any matched record are unioned in at 0.5. Merging is monotonic: a later
//! rule may raise a skill's confidence but never lower it.

use std::collections::HashMap;

use regex::Regex;

use crate::extraction::catalog::{CatalogError, SkillCatalog};

pub const EXACT_CONFIDENCE: f64 = 1.0;
pub const ALIAS_CONFIDENCE: f64 = 0.9;
pub const INFERRED_CONFIDENCE: f64 = 0.5;

/// Canonical skill name → confidence in [0, 1].
pub type MatchResult = HashMap<String, f64>;

struct RecordPlan {
    name: String,
    exact: Regex,
    aliases: Vec<Regex>,
    related: Vec<String>,
}

/// Precompiled matching plan for one catalog. Build once at startup and
/// share read-only; `match_skills` is a pure function of the input text.
pub struct SkillMatcher {
    plans: Vec<RecordPlan>,
}

impl SkillMatcher {
    pub fn new(catalog: &SkillCatalog) -> Result<Self, CatalogError> {
        let mut plans = Vec::with_capacity(catalog.len());

        for record in catalog.all() {
            let exact = compile_phrase(&record.name)?;
            let mut aliases = Vec::with_capacity(record.aliases.len());
            for alias in &record.aliases {
                if alias.trim().is_empty() {
                    continue;
                }
                aliases.push(compile_phrase(alias)?);
            }
            plans.push(RecordPlan {
                name: record.name.clone(),
                exact,
                aliases,
                related: record.related_skills.clone(),
            });
        }

        Ok(SkillMatcher { plans })
    }

    /// Scans `text` and returns every detected skill with its confidence.
    /// Never fails: unmatched text and empty text both yield an empty map.
    pub fn match_skills(&self, text: &str) -> MatchResult {
        let mut found = MatchResult::new();
        if text.trim().is_empty() {
            return found;
        }

        for plan in &self.plans {
            let confidence = if plan.exact.is_match(text) {
                EXACT_CONFIDENCE
            } else if plan.aliases.iter().any(|a| a.is_match(text)) {
                // One alias hit is enough; the rest of the record's aliases
                // are intentionally not consulted.
                ALIAS_CONFIDENCE
            } else {
                continue;
            };

            raise_confidence(&mut found, &plan.name, confidence);

            // Inference is exactly one hop: related skills of an inferred
            // skill do not propagate further.
            for related in &plan.related {
                raise_confidence(&mut found, related, INFERRED_CONFIDENCE);
            }
        }

        found
    }
}

/// Records `confidence` for `name` unless a higher confidence is already
/// present. This is the only write path into a `MatchResult`, which makes
/// the max-merge invariant hold for every tier.
fn raise_confidence(result: &mut MatchResult, name: &str, confidence: f64) {
    let entry = result.entry(name.to_string()).or_insert(0.0);
    if confidence > *entry {
        *entry = confidence;
    }
}

/// Compiles a skill keyword into a case-insensitive, word-bounded phrase
/// pattern. Multi-token keywords match as a contiguous phrase regardless of
/// internal whitespace run-length ("machine  learning" still hits
/// "Machine Learning").
fn compile_phrase(keyword: &str) -> Result<Regex, CatalogError> {
    let tokens: Vec<String> = keyword.split_whitespace().map(regex::escape).collect();
    let pattern = format!(r"(?i)\b{}\b", tokens.join(r"\s+"));
    Regex::new(&pattern).map_err(|source| CatalogError::Pattern {
        pattern: keyword.to_string(),
        source,
    })
}
