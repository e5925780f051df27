//! Parse endpoints — résumé (PDF upload or plain text), job description,
//! and standalone segmentation.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;

use crate::errors::AppError;
use crate::jd::{parse_jd, ParsedJd};
use crate::pipeline::{parse_resume_text, ParsedResume};
use crate::segmentation::segmenter::SegmentedResume;
use crate::state::AppState;

#[derive(Debug, serde::Deserialize)]
pub struct TextRequest {
    pub text: String,
}

/// POST /api/v1/parse/resume
/// Multipart upload; the `file` field carries a PDF. Extraction failures
/// are a 422; a readable PDF with no text degrades to an empty payload.
pub async fn handle_parse_resume_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParsedResume>, AppError> {
    let mut file: Option<(Option<String>, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().map(String::from);
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            file = Some((filename, bytes));
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::Validation("Missing 'file' field".to_string()))?;

    // pdf-extract is CPU-bound; keep it off the async workers.
    let raw_text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("extraction task failed: {e}")))?
        .map_err(|e| AppError::Extraction(e.to_string()))?;

    let parsed = parse_resume_text(
        &raw_text,
        filename,
        &state.catalog,
        &state.matcher,
        &state.segmenter,
        state.name_extractor.as_deref(),
    );
    Ok(Json(parsed))
}

/// POST /api/v1/parse/resume/text
/// Plain-text variant for callers that already extracted the document.
pub async fn handle_parse_resume_text(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Json<ParsedResume> {
    Json(parse_resume_text(
        &request.text,
        None,
        &state.catalog,
        &state.matcher,
        &state.segmenter,
        state.name_extractor.as_deref(),
    ))
}

/// POST /api/v1/parse/jd
pub async fn handle_parse_jd(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Json<ParsedJd> {
    Json(parse_jd(&request.text, &state.synonyms))
}

/// POST /api/v1/segment
/// Segmentation only, for callers that want raw sections without skills.
pub async fn handle_segment(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Json<SegmentedResume> {
    Json(state.segmenter.segment(&crate::cleaning::clean_text(&request.text)))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::extraction::catalog::{SkillCatalog, SkillRecord};
    use crate::extraction::matcher::SkillMatcher;
    use crate::jd::synonyms::SynonymDict;
    use crate::routes::build_router;
    use crate::segmentation::segmenter::DocumentSegmenter;
    use crate::state::AppState;

    fn test_state() -> AppState {
        let (catalog, warnings) = SkillCatalog::from_records(vec![
            SkillRecord {
                name: "Python".to_string(),
                aliases: vec!["py".to_string()],
                related_skills: vec![],
                category: "Technical".to_string(),
            },
            SkillRecord {
                name: "Pandas".to_string(),
                aliases: vec![],
                related_skills: vec!["NumPy".to_string()],
                category: "Technical".to_string(),
            },
        ]);
        assert!(warnings.is_empty());

        let matcher = SkillMatcher::new(&catalog).unwrap();
        let segmenter = DocumentSegmenter::new().unwrap();
        let synonyms = SynonymDict::from_map(HashMap::from([
            ("Python".to_string(), vec!["python".to_string()]),
            ("Docker".to_string(), vec!["docker".to_string()]),
        ]))
        .unwrap();

        AppState {
            catalog: Arc::new(catalog),
            matcher: Arc::new(matcher),
            segmenter: Arc::new(segmenter),
            synonyms: Arc::new(synonyms),
            name_extractor: None,
            config: Config {
                skills_db_path: "data/skills_db.json".to_string(),
                synonyms_db_path: "data/synonyms_db.json".to_string(),
                port: 8080,
                rust_log: "info".to_string(),
            },
        }
    }

    async fn post_json(uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let app = build_router(test_state());
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn test_health_reports_catalog_sizes() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["skills_loaded"], 2);
        assert_eq!(json["synonyms_loaded"], 2);
    }

    #[tokio::test]
    async fn test_parse_resume_text_returns_full_payload() {
        let text = "Murthaja\nSKILLS\nPython and Pandas";
        let (status, json) =
            post_json("/api/v1/parse/resume/text", serde_json::json!({ "text": text })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["name"], "Murthaja");
        assert_eq!(json["sections"]["SKILLS"][0], "Python and Pandas");
        // Python, Pandas matched directly; NumPy inferred.
        assert_eq!(json["total_skills_found"], 3);
        let technical = json["extracted_skills"]["technical_skills"].as_array().unwrap();
        assert_eq!(technical.len(), 3);
        assert_eq!(technical[0]["confidence"], 1.0);
    }

    #[tokio::test]
    async fn test_parse_jd_splits_segments() {
        let text = "Job Title: Engineer\n5+ years Python. Nice to have: Docker.";
        let (status, json) = post_json("/api/v1/parse/jd", serde_json::json!({ "text": text })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["job_title"], "Engineer");
        assert_eq!(json["requirements"]["experience"]["min_years"], 5);
        assert_eq!(json["requirements"]["mandatory_skills"][0], "Python");
        assert_eq!(json["requirements"]["nice_to_have_skills"][0], "Docker");
    }

    #[tokio::test]
    async fn test_segment_endpoint_returns_all_seven_buckets() {
        let (status, json) = post_json(
            "/api/v1/segment",
            serde_json::json!({ "text": "Intro\nEDUCATION\nB.Tech in CS" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["SUMMARY"][0], "Intro");
        assert_eq!(json["EDUCATION"][0], "B.Tech in CS");
        assert!(json["CONTACT"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_text_degrades_to_empty_payload() {
        let (status, json) =
            post_json("/api/v1/parse/resume/text", serde_json::json!({ "text": "" })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["total_skills_found"], 0);
        assert_eq!(json["name"], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_resume_upload_without_file_field_is_rejected() {
        let app = build_router(test_state());
        let body = concat!(
            "--boundary\r\n",
            "Content-Disposition: form-data; name=\"other\"\r\n\r\n",
            "value\r\n",
            "--boundary--\r\n"
        );
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/parse/resume")
                    .header(header::CONTENT_TYPE, "multipart/form-data; boundary=boundary")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    }
}
