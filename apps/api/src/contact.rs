//! Contact extraction — email, phone, and a best-effort candidate name.
//!
//! Name extraction is an optional capability: a concrete `NameExtractor`
//! (an NER model, an external service) can be injected, but the pipeline
//! must run correctly with none present. A missing extractor degrades the
//! result, never the pipeline.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::extraction::catalog::SkillCatalog;

/// Pluggable person-name extraction capability. Carried in `AppState` as
/// `Option<Arc<dyn NameExtractor>>`.
pub trait NameExtractor: Send + Sync {
    fn extract_name(&self, text: &str) -> Option<String>;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Boilerplate labels that an extractor sometimes mistakes for a name.
const GENERIC_HEADERS: &[&str] = &["resume", "curriculum vitae", "profile", "bio"];

const MAX_NAME_LINE_LEN: usize = 50;

pub fn extract_contact_info(
    cleaned_text: &str,
    name_extractor: Option<&dyn NameExtractor>,
    catalog: &SkillCatalog,
) -> ContactInfo {
    lazy_static! {
        static ref EMAIL_RE: Regex =
            Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap();
        static ref PHONE_RE: Regex = Regex::new(r"(\+?\d{1,3}[-.\s]?)?(\d{10})").unwrap();
    }

    let email = EMAIL_RE
        .find(cleaned_text)
        .map(|m| m.as_str().to_string());
    let phone = PHONE_RE
        .find(cleaned_text)
        .map(|m| m.as_str().trim().to_string());

    let name = name_extractor
        .and_then(|extractor| extractor.extract_name(cleaned_text))
        .and_then(|candidate| accept_name_candidate(&candidate, catalog))
        .or_else(|| first_line_fallback(cleaned_text));

    ContactInfo { name, email, phone }
}

/// Filters an extractor's candidate: keep only the first line, and reject
/// skills ("Python" is a PERSON to some models) and generic headers.
fn accept_name_candidate(candidate: &str, catalog: &SkillCatalog) -> Option<String> {
    let candidate = candidate.trim().lines().next()?.trim();
    if candidate.is_empty() {
        return None;
    }
    if catalog.lookup(candidate).is_some() {
        return None;
    }
    if GENERIC_HEADERS.contains(&candidate.to_lowercase().as_str()) {
        return None;
    }
    Some(candidate.to_string())
}

/// The very first line of a résumé is usually the name. Reject lines that
/// look like contact details instead.
fn first_line_fallback(cleaned_text: &str) -> Option<String> {
    let first_line = cleaned_text.lines().next()?.trim();
    if first_line.is_empty() || first_line.contains('@') || first_line.len() >= MAX_NAME_LINE_LEN {
        return None;
    }
    Some(first_line.to_string())
}
