//! Experience and education requirement extraction from JD text.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Years-of-experience requirement. "3-5 years" fills both bounds,
/// "5+ years" only the minimum; no mention at all leaves zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceRequirement {
    pub min_years: u32,
    pub max_years: Option<u32>,
}

/// Degree requirement detected in the text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeRequirement {
    #[serde(rename = "Master's Degree")]
    Masters,
    #[serde(rename = "Bachelor's Degree")]
    Bachelors,
    #[default]
    #[serde(rename = "Not Specified")]
    NotSpecified,
}

pub fn extract_experience(text: &str) -> ExperienceRequirement {
    lazy_static! {
        static ref YEARS_RE: Regex =
            Regex::new(r"(?i)(\d+)(?:\s*-\s*(\d+))?\s*\+?\s*years?").unwrap();
    }

    match YEARS_RE.captures(text) {
        Some(cap) => ExperienceRequirement {
            min_years: cap[1].parse().unwrap_or(0),
            max_years: cap.get(2).and_then(|m| m.as_str().parse().ok()),
        },
        None => ExperienceRequirement::default(),
    }
}

pub fn extract_education(text: &str) -> DegreeRequirement {
    lazy_static! {
        static ref MASTERS_RE: Regex =
            Regex::new(r"(?i)\b(master's|masters|master|m\.s\.|ms)\b").unwrap();
        static ref BACHELORS_RE: Regex =
            Regex::new(r"(?i)\b(bachelor's|bachelors|bachelor|b\.s\.|bs|btech|b\.tech)\b").unwrap();
    }

    // Master's outranks Bachelor's when both appear.
    if MASTERS_RE.is_match(text) {
        DegreeRequirement::Masters
    } else if BACHELORS_RE.is_match(text) {
        DegreeRequirement::Bachelors
    } else {
        DegreeRequirement::NotSpecified
    }
}
