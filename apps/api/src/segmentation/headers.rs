//! Section header classifier — decides whether a single line names a
//! résumé section.
//!
//! The pattern table is an explicit priority list: the first tag whose
//! pattern set fully matches the header candidate wins. That makes short
//! ambiguous lines (a line that is literally just "college") resolve to
//! exactly one tag, deterministically.

use regex::Regex;
use serde::{Deserialize, Serialize};

/// The seven fixed résumé region labels. `Summary` is the sole default
/// state for text above the first recognized header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionTag {
    Contact,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Summary,
}

/// Headers are short; anything longer than this many words is body text.
const MAX_HEADER_WORDS: usize = 5;

/// Priority-ordered header patterns. Declaration order is normative.
const HEADER_PATTERNS: &[(SectionTag, &[&str])] = &[
    (
        SectionTag::Experience,
        &[
            "experience",
            "work experience",
            "work history",
            "employment",
            "employment history",
            "professional experience",
            "career history",
            "professional background",
            "job history",
        ],
    ),
    (
        SectionTag::Education,
        &[
            "education",
            "academic background",
            "academic history",
            "qualifications",
            "educational qualifications",
            "college",
            "university",
            "schooling",
        ],
    ),
    (
        SectionTag::Skills,
        &[
            "skills",
            "technical skills",
            "core competencies",
            "technologies",
            "tech stack",
            "programming languages",
            "expertise",
            "proficiencies",
        ],
    ),
    (
        SectionTag::Projects,
        &[
            "projects",
            "personal projects",
            "academic projects",
            "key projects",
            "capstone projects",
        ],
    ),
    (
        SectionTag::Certifications,
        &[
            "certifications",
            "certificates",
            "courses",
            "licenses",
            "trainings",
            "achievements",
            "awards",
        ],
    ),
    (
        SectionTag::Contact,
        &[
            "contact",
            "contact info",
            "contact details",
            "reach me",
            "personal info",
            "about me",
        ],
    ),
];

/// Compiled header classifier. Construct once and share; classification is
/// a pure function of the line.
pub struct SectionHeaderClassifier {
    table: Vec<(SectionTag, Vec<Regex>)>,
}

impl SectionHeaderClassifier {
    pub fn new() -> Result<Self, regex::Error> {
        let mut table = Vec::with_capacity(HEADER_PATTERNS.len());
        for (tag, patterns) in HEADER_PATTERNS {
            let mut compiled = Vec::with_capacity(patterns.len());
            for pattern in *patterns {
                // Anchored: a header takes up the whole candidate, a
                // partial hit is not a header.
                compiled.push(Regex::new(&format!("^(?:{pattern})$"))?);
            }
            table.push((*tag, compiled));
        }
        Ok(SectionHeaderClassifier { table })
    }

    /// Returns the section a line names, or `None` if the line is body
    /// text. "No header detected" is a valid, common outcome.
    pub fn classify(&self, line: &str) -> Option<SectionTag> {
        let candidate = header_candidate(line);
        if candidate.split_whitespace().count() > MAX_HEADER_WORDS {
            return None;
        }
        for (tag, patterns) in &self.table {
            if patterns.iter().any(|p| p.is_match(&candidate)) {
                return Some(*tag);
            }
        }
        None
    }
}

/// Strips everything that is not a letter or whitespace, then lowercases
/// and trims. "*** Professional Experience ***" becomes
/// "professional experience".
fn header_candidate(line: &str) -> String {
    line.chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> SectionHeaderClassifier {
        SectionHeaderClassifier::new().unwrap()
    }

    #[test]
    fn test_plain_upper_case_header() {
        assert_eq!(classifier().classify("EDUCATION"), Some(SectionTag::Education));
    }

    #[test]
    fn test_decorated_header_survives_stripping() {
        assert_eq!(
            classifier().classify("*** Professional Experience ***"),
            Some(SectionTag::Experience)
        );
    }

    #[test]
    fn test_long_line_is_not_a_header() {
        assert_eq!(
            classifier().classify("Experience Summary Details For This Role"),
            None
        );
    }

    #[test]
    fn test_partial_match_is_not_a_header() {
        // "experienced engineer" contains "experience" but is not a full
        // match, so it stays body text.
        assert_eq!(classifier().classify("experienced engineer"), None);
    }

    #[test]
    fn test_ambiguous_short_line_resolves_deterministically() {
        assert_eq!(classifier().classify("college"), Some(SectionTag::Education));
        assert_eq!(classifier().classify("University"), Some(SectionTag::Education));
    }

    #[test]
    fn test_skills_variants() {
        let c = classifier();
        assert_eq!(c.classify("Technical Skills"), Some(SectionTag::Skills));
        assert_eq!(c.classify("TECH STACK"), Some(SectionTag::Skills));
        assert_eq!(c.classify("Core Competencies:"), Some(SectionTag::Skills));
    }

    #[test]
    fn test_contact_and_certifications() {
        let c = classifier();
        assert_eq!(c.classify("About Me"), Some(SectionTag::Contact));
        assert_eq!(c.classify("Awards"), Some(SectionTag::Certifications));
    }

    #[test]
    fn test_body_text_yields_none() {
        let c = classifier();
        assert_eq!(c.classify("Built Angular apps"), None);
        assert_eq!(c.classify(""), None);
    }

    #[test]
    fn test_section_tag_serializes_upper_case() {
        assert_eq!(
            serde_json::to_string(&SectionTag::Certifications).unwrap(),
            r#""CERTIFICATIONS""#
        );
    }
}
