//! Document segmenter — partitions résumé text into named sections.
//!
//! A finite-state walk over lines: the current section starts at SUMMARY,
//! a recognized header line switches it (and is consumed), every other
//! non-blank line lands in the current section's bucket. No backtracking —
//! a header misread as body text is not corrected retroactively.

use serde::{Deserialize, Serialize};

use crate::segmentation::headers::{SectionHeaderClassifier, SectionTag};

/// One bucket per section tag, all seven always present (empty if the
/// document never reached them). Serialized keys are the tag names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentedResume {
    #[serde(rename = "CONTACT")]
    pub contact: Vec<String>,
    #[serde(rename = "EXPERIENCE")]
    pub experience: Vec<String>,
    #[serde(rename = "EDUCATION")]
    pub education: Vec<String>,
    #[serde(rename = "SKILLS")]
    pub skills: Vec<String>,
    #[serde(rename = "PROJECTS")]
    pub projects: Vec<String>,
    #[serde(rename = "CERTIFICATIONS")]
    pub certifications: Vec<String>,
    #[serde(rename = "SUMMARY")]
    pub summary: Vec<String>,
}

impl SegmentedResume {
    fn bucket_mut(&mut self, tag: SectionTag) -> &mut Vec<String> {
        match tag {
            SectionTag::Contact => &mut self.contact,
            SectionTag::Experience => &mut self.experience,
            SectionTag::Education => &mut self.education,
            SectionTag::Skills => &mut self.skills,
            SectionTag::Projects => &mut self.projects,
            SectionTag::Certifications => &mut self.certifications,
            SectionTag::Summary => &mut self.summary,
        }
    }
}

pub struct DocumentSegmenter {
    classifier: SectionHeaderClassifier,
}

impl DocumentSegmenter {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(DocumentSegmenter {
            classifier: SectionHeaderClassifier::new()?,
        })
    }

    pub fn segment(&self, text: &str) -> SegmentedResume {
        let mut sections = SegmentedResume::default();
        let mut current = SectionTag::Summary;

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            match self.classifier.classify(line) {
                // The header line itself is consumed, not stored.
                Some(tag) => current = tag,
                None => sections.bucket_mut(current).push(line.to_string()),
            }
        }

        sections
    }
}
