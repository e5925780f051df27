mod cleaning;
mod config;
mod contact;
mod errors;
mod extraction;
mod jd;
mod pipeline;
mod routes;
mod segmentation;
mod state;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::catalog::SkillCatalog;
use crate::extraction::matcher::SkillMatcher;
use crate::jd::synonyms::SynonymDict;
use crate::routes::build_router;
use crate::segmentation::segmenter::DocumentSegmenter;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume parser API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill catalog. A missing file is survivable (empty catalog);
    // only a structurally broken one aborts startup.
    let (catalog, catalog_warnings) =
        SkillCatalog::load_from_path(Path::new(&config.skills_db_path))?;
    for warning in &catalog_warnings {
        warn!("catalog: {warning}");
    }
    if catalog.is_empty() {
        warn!("Skill catalog is empty; matching will find nothing");
    } else {
        info!("Loaded {} skills from {}", catalog.len(), config.skills_db_path);
    }

    let matcher = SkillMatcher::new(&catalog)?;
    let segmenter = DocumentSegmenter::new()?;

    let (synonyms, synonym_warnings) =
        SynonymDict::load_from_path(Path::new(&config.synonyms_db_path))?;
    for warning in &synonym_warnings {
        warn!("synonyms: {warning}");
    }
    if synonyms.is_empty() {
        warn!("Synonym dictionary is empty; JD skill extraction will find nothing");
    } else {
        info!(
            "Loaded {} synonym entries from {}",
            synonyms.len(),
            config.synonyms_db_path
        );
    }

    let state = AppState {
        catalog: Arc::new(catalog),
        matcher: Arc::new(matcher),
        segmenter: Arc::new(segmenter),
        synonyms: Arc::new(synonyms),
        // No NER backend is wired in; the pipeline's first-line fallback
        // carries name extraction.
        name_extractor: None,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
