//! Skill extraction — catalog, matcher, and confidence categorizer.

pub mod catalog;
pub mod categorize;
pub mod matcher;
