//! JD parser — splits a job description into mandatory and nice-to-have
//! requirement segments and extracts structured requirements from each.

pub mod requirements;
pub mod synonyms;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::cleaning::clean_text;
use crate::jd::requirements::{
    extract_education, extract_experience, DegreeRequirement, ExperienceRequirement,
};
use crate::jd::synonyms::SynonymDict;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JdRequirements {
    pub experience: ExperienceRequirement,
    pub education: DegreeRequirement,
    pub mandatory_skills: Vec<String>,
    pub nice_to_have_skills: Vec<String>,
}

/// Structured output of JD parsing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedJd {
    pub job_title: Option<String>,
    pub requirements: JdRequirements,
}

/// Parses cleaned JD text against a synonym dictionary. Pure: the same
/// text and dictionary always yield the same `ParsedJd`.
pub fn parse_jd(raw_text: &str, synonyms: &SynonymDict) -> ParsedJd {
    lazy_static! {
        static ref TITLE_RE: Regex = Regex::new(r"(?i)Job Title:\s*(.*)").unwrap();
    }

    let cleaned = clean_text(raw_text);

    let job_title = TITLE_RE
        .captures(&cleaned)
        .map(|cap| cap[1].trim().to_string())
        .filter(|title| !title.is_empty());

    let (mandatory_text, nice_to_have_text) = split_nice_to_have(&cleaned);

    ParsedJd {
        job_title,
        requirements: JdRequirements {
            experience: extract_experience(&cleaned),
            education: extract_education(&cleaned),
            mandatory_skills: synonyms.extract(mandatory_text),
            nice_to_have_skills: synonyms.extract(nice_to_have_text),
        },
    }
}

/// Splits at the first "nice to have" marker (optional trailing colon,
/// case-insensitive). Everything before is mandatory; no marker means the
/// whole text is mandatory. A skill mentioned in both segments legitimately
/// appears in both result sets.
fn split_nice_to_have(text: &str) -> (&str, &str) {
    lazy_static! {
        static ref MARKER_RE: Regex = Regex::new(r"(?i)nice to have:?").unwrap();
    }

    match MARKER_RE.find(text) {
        Some(marker) => (&text[..marker.start()], &text[marker.end()..]),
        None => (text, ""),
    }
}
