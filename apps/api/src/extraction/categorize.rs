//! Confidence categorizer — buckets matched skills by catalog category.
//!
//! Bucketing is by label containment, not equality, so catalog authors can
//! write "Soft Skill" or "Business / Management" and still land in the
//! right bucket. Anything unknown defaults to technical — inferred skills
//! are often not independently cataloged.

use serde::{Deserialize, Serialize};

use crate::extraction::catalog::SkillCatalog;
use crate::extraction::matcher::MatchResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSkill {
    pub skill: String,
    pub confidence: f64,
}

/// The categorized output payload: each bucket ordered by confidence
/// descending, ties broken by skill name ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedSkills {
    pub technical_skills: Vec<ScoredSkill>,
    pub business_skills: Vec<ScoredSkill>,
    pub soft_skills: Vec<ScoredSkill>,
}

pub fn categorize(matches: &MatchResult, catalog: &SkillCatalog) -> CategorizedSkills {
    let mut out = CategorizedSkills::default();

    for (name, &confidence) in matches {
        let label = catalog
            .lookup(name)
            .map(|record| record.category.to_lowercase())
            .unwrap_or_else(|| "technical".to_string());

        let entry = ScoredSkill {
            skill: name.clone(),
            confidence,
        };

        if label.contains("soft") {
            out.soft_skills.push(entry);
        } else if label.contains("business") || label.contains("management") {
            out.business_skills.push(entry);
        } else {
            out.technical_skills.push(entry);
        }
    }

    for bucket in [
        &mut out.technical_skills,
        &mut out.business_skills,
        &mut out.soft_skills,
    ] {
        bucket.sort_by(|a, b| {
            b.confidence
                .total_cmp(&a.confidence)
                .then_with(|| a.skill.cmp(&b.skill))
        });
    }

    out
}
