//! Résumé pipeline — clean → contact info → segmentation → skill match →
//! categorized payload.
//!
//! Upstream extraction failures surface here as empty text; the pipeline
//! degrades to an empty payload rather than propagating a failure.

use serde::{Deserialize, Serialize};

use crate::cleaning::clean_text;
use crate::contact::{extract_contact_info, NameExtractor};
use crate::extraction::catalog::SkillCatalog;
use crate::extraction::categorize::{categorize, CategorizedSkills};
use crate::extraction::matcher::SkillMatcher;
use crate::segmentation::segmenter::{DocumentSegmenter, SegmentedResume};

/// The full structured payload for one résumé.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub sections: SegmentedResume,
    pub total_skills_found: usize,
    pub extracted_skills: CategorizedSkills,
}

pub fn parse_resume_text(
    raw_text: &str,
    filename: Option<String>,
    catalog: &SkillCatalog,
    matcher: &SkillMatcher,
    segmenter: &DocumentSegmenter,
    name_extractor: Option<&dyn NameExtractor>,
) -> ParsedResume {
    let cleaned = clean_text(raw_text);
    if cleaned.is_empty() {
        return ParsedResume {
            filename,
            ..ParsedResume::default()
        };
    }

    let contact = extract_contact_info(&cleaned, name_extractor, catalog);
    let sections = segmenter.segment(&cleaned);
    let matches = matcher.match_skills(&cleaned);
    let total_skills_found = matches.len();
    let extracted_skills = categorize(&matches, catalog);

    ParsedResume {
        filename,
        name: contact.name,
        email: contact.email,
        phone: contact.phone,
        sections,
        total_skills_found,
        extracted_skills,
    }
}
