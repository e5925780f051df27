pub mod health;
pub mod parse;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/parse/resume", post(parse::handle_parse_resume_upload))
        .route("/api/v1/parse/resume/text", post(parse::handle_parse_resume_text))
        .route("/api/v1/parse/jd", post(parse::handle_parse_jd))
        .route("/api/v1/segment", post(parse::handle_segment))
        .with_state(state)
}
