use std::sync::Arc;

use crate::config::Config;
use crate::contact::NameExtractor;
use crate::extraction::catalog::SkillCatalog;
use crate::extraction::matcher::SkillMatcher;
use crate::jd::synonyms::SynonymDict;
use crate::segmentation::segmenter::DocumentSegmenter;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is immutable after startup, so documents
/// can be processed concurrently without locking.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<SkillCatalog>,
    pub matcher: Arc<SkillMatcher>,
    pub segmenter: Arc<DocumentSegmenter>,
    pub synonyms: Arc<SynonymDict>,
    /// Optional name extraction capability. None is a valid configuration:
    /// the pipeline falls back to its first-line heuristic.
    pub name_extractor: Option<Arc<dyn NameExtractor>>,
    pub config: Config,
}
