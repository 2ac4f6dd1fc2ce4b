//! HTTP surface for quotations and catalog chat.
//!
//! Endpoints:
//! - `GET  /`          — quotation form page (HTML)
//! - `POST /generate`  — form-encoded quotation request, `.docx` attachment
//! - `POST /chat`      — JSON `{ "message": ... }` -> `{ "reply": ... }`
//! - `GET  /health`    — liveness JSON
//! - `GET  /static/*`  — chat widget and page assets

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use stowquote_core::chat::replies;
use stowquote_core::config::AppConfig;
use stowquote_core::document::TemplateStore;
use stowquote_core::errors::{ApplicationError, InterfaceError};
use stowquote_core::quotation::QuotationRequest;
use stowquote_core::{default_router, normalize, RouteOutcome};
use stowquote_narrative::{FallbackChain, GenerativeHttpClient, ASSISTANT_INSTRUCTION};
use tera::{Context, Tera};
use tower_http::services::ServeDir;
use tracing::{info, warn};
use uuid::Uuid;

use crate::docx::{attachment_response, DocxGenerator};

#[derive(Clone)]
pub struct AppState {
    templates: TemplateStore,
    pages: Arc<Tera>,
    docx: Arc<DocxGenerator>,
    narrative: Option<Arc<FallbackChain<GenerativeHttpClient>>>,
    static_dir: std::path::PathBuf,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        let narrative = config
            .narrative
            .api_key
            .clone()
            .filter(|_| config.narrative_enabled())
            .and_then(|api_key| {
                match GenerativeHttpClient::new(
                    config.narrative.base_url.clone(),
                    api_key,
                    config.narrative.timeout_secs,
                ) {
                    Ok(client) => {
                        Some(Arc::new(FallbackChain::from_config(client, &config.narrative)))
                    }
                    Err(error) => {
                        warn!(error = %error, "narrative client unavailable, chat fallback is static");
                        None
                    }
                }
            });

        Self {
            templates: TemplateStore::new(config.assets.quote_templates_dir.clone()),
            pages: init_pages(&config.assets.pages_dir),
            docx: Arc::new(DocxGenerator::new(config.assets.output_dir.clone())),
            narrative,
            static_dir: config.assets.static_dir.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GenerateForm {
    pub storage_type: Option<String>,
    pub volume: Option<String>,
    pub days: Option<String>,
    pub wms: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatRequestBody {
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponseBody {
    pub reply: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    correlation_id: String,
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Built-in page shell used when the pages directory is absent.
fn init_pages(pages_dir: &std::path::Path) -> Arc<Tera> {
    let glob = format!("{}/**/*", pages_dir.display());
    let mut tera = match Tera::new(&glob) {
        Ok(tera) => tera,
        Err(error) => {
            warn!(error = %error, "failed to load page templates, using embedded shell");
            Tera::default()
        }
    };

    if tera.get_template_names().all(|name| name != "index.html") {
        tera.add_raw_template("index.html", include_str!("../../../templates/pages/index.html"))
            .ok();
    }

    Arc::new(tera)
}

pub fn router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();
    Router::new()
        .route("/", get(index_page))
        .route("/generate", post(generate_quotation))
        .route("/chat", post(chat_reply))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn index_page(State(state): State<AppState>) -> Response {
    let mut context = Context::new();
    context.insert(
        "storage_types",
        &[
            "AC",
            "Non-AC",
            "Open Shed",
            "Chemicals AC",
            "Chemicals Non-AC",
            "KIZAD Open Yard",
            "Mussafah Open Yard",
        ],
    );

    match state.pages.render("index.html", &context) {
        Ok(html) => Html(html).into_response(),
        Err(error) => {
            warn!(error = %error, "index page rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "page rendering failed").into_response()
        }
    }
}

async fn generate_quotation(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Response {
    let correlation_id = Uuid::new_v4().to_string();

    let request = match QuotationRequest::from_form(
        form.storage_type.as_deref(),
        form.volume.as_deref(),
        form.days.as_deref(),
        form.wms.as_deref(),
        form.email.as_deref(),
    ) {
        Ok(request) => request,
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "quotation request rejected");
            return error_response(ApplicationError::from(error).into_interface(correlation_id));
        }
    };

    let profile = request.profile();
    info!(
        correlation_id = %correlation_id,
        category = profile.category.as_str(),
        family = ?profile.family,
        total = %profile.fees.total_fee,
        "quotation computed"
    );

    let template = match state.templates.load(profile.family) {
        Ok(template) => template,
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "template load failed");
            return error_response(
                ApplicationError::Template(error.to_string()).into_interface(correlation_id),
            );
        }
    };

    let document = match request.assemble_document(&template, &profile, Utc::now().date_naive()) {
        Ok(document) => document,
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "document assembly failed");
            return error_response(ApplicationError::from(error).into_interface(correlation_id));
        }
    };

    let bytes = match DocxGenerator::render(&document) {
        Ok(bytes) => bytes,
        Err(error) => {
            warn!(correlation_id = %correlation_id, error = %error, "docx serialization failed");
            return error_response(InterfaceError::Internal {
                message: error.to_string(),
                correlation_id,
            });
        }
    };

    // The served copy is the artifact of record; a failed disk write should
    // not fail the download.
    if let Err(error) = state.docx.write_artifact(&bytes).await {
        warn!(correlation_id = %correlation_id, error = %error, "artifact write failed");
    }

    attachment_response(bytes, &request.download_file_name())
}

async fn chat_reply(
    State(state): State<AppState>,
    Json(body): Json<ChatRequestBody>,
) -> Json<ChatResponseBody> {
    let raw = body.message.unwrap_or_default();
    let normalized = normalize(&raw);

    let reply = match default_router().route(&normalized) {
        RouteOutcome::Reply(reply) => reply,
        RouteOutcome::Unmatched => match &state.narrative {
            Some(chain) => chain.reply(ASSISTANT_INSTRUCTION, &raw).await,
            None => replies::CLARIFICATION.to_owned(),
        },
    };

    Json(ChatResponseBody { reply })
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "service": "stowquote-server" }))
}

fn error_response(error: InterfaceError) -> Response {
    let (status, correlation_id) = match &error {
        InterfaceError::BadRequest { correlation_id, .. } => {
            (StatusCode::BAD_REQUEST, correlation_id.clone())
        }
        InterfaceError::ServiceUnavailable { correlation_id, .. } => {
            (StatusCode::SERVICE_UNAVAILABLE, correlation_id.clone())
        }
        InterfaceError::Internal { correlation_id, .. } => {
            (StatusCode::INTERNAL_SERVER_ERROR, correlation_id.clone())
        }
    };

    (status, Json(ErrorBody { error: error.user_message(), correlation_id })).into_response()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use stowquote_core::config::AppConfig;
    use tower::util::ServiceExt;

    use super::{router, AppState};

    const TEMPLATE_JSON: &str = r#"{
      "blocks": [
        {"kind": "paragraph", "text": "Quotation issued {{TODAY_DATE}}"},
        {"kind": "table", "rows": [
          {"cells": [{"paragraphs": ["Total"]}, {"paragraphs": ["{{TOTAL_FEE}}"]}]}
        ]},
        {"kind": "paragraph", "text": "[VAS_STANDARD]"},
        {"kind": "paragraph", "text": "Standard services"},
        {"kind": "paragraph", "text": "[/VAS_STANDARD]"},
        {"kind": "paragraph", "text": "[VAS_CHEMICAL]"},
        {"kind": "paragraph", "text": "Chemical services"},
        {"kind": "paragraph", "text": "[/VAS_CHEMICAL]"},
        {"kind": "paragraph", "text": "[VAS_OPENYARD]"},
        {"kind": "paragraph", "text": "Yard services"},
        {"kind": "paragraph", "text": "[/VAS_OPENYARD]"}
      ]
    }"#;

    fn test_app() -> (tempfile::TempDir, axum::Router) {
        let dir = tempfile::tempdir().expect("tempdir");
        let quotes = dir.path().join("quotes");
        fs::create_dir_all(&quotes).expect("quotes dir");
        for name in ["standard.json", "chemical.json", "open_yard.json"] {
            fs::write(quotes.join(name), TEMPLATE_JSON).expect("template asset");
        }

        let mut config = AppConfig::default();
        config.assets.quote_templates_dir = quotes;
        config.assets.output_dir = dir.path().join("generated");
        config.assets.pages_dir = dir.path().join("pages");
        config.assets.static_dir = dir.path().join("static");

        let app = router(AppState::from_config(&config));
        (dir, app)
    }

    async fn body_string(body: Body) -> String {
        let bytes = to_bytes(body, usize::MAX).await.expect("body");
        String::from_utf8(bytes.to_vec()).expect("utf8 body")
    }

    #[tokio::test]
    async fn health_answers_ok() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response.into_body()).await;
        assert!(body.contains("\"ok\""));
    }

    #[tokio::test]
    async fn chat_routes_catalog_questions() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"message": "calculate handling for 50 cbm"}"#))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response.into_body()).await;
        assert!(body.contains("1,000.00 AED"), "{body}");
    }

    #[tokio::test]
    async fn chat_without_narrative_falls_back_to_clarification() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"message": "xylophone lessons"}"#))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response.into_body()).await;
        assert!(body.contains("rephrase"), "{body}");
    }

    #[tokio::test]
    async fn generate_serves_a_docx_attachment() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(
                        "storage_type=AC&volume=10&days=40&wms=Yes&email=jane%40example.com",
                    ))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .expect("disposition")
            .to_str()
            .expect("ascii");
        assert!(disposition.contains("Quotation_jane.docx"), "{disposition}");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        assert_eq!(&bytes[..2], b"PK", "attachment must be an OOXML container");
    }

    #[tokio::test]
    async fn generate_rejects_missing_fields_without_an_artifact() {
        let (dir, app) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("volume=10&days=40"))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_string(response.into_body()).await;
        assert!(body.contains("correlation_id"), "{body}");
        assert!(!dir.path().join("generated").exists(), "no partial artifact may be written");
    }

    #[tokio::test]
    async fn generate_fails_closed_on_a_missing_template_asset() {
        let (dir, app) = test_app();
        fs::remove_file(dir.path().join("quotes").join("chemical.json")).expect("remove asset");

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("storage_type=Chemicals+AC&volume=5&days=10&wms=No"))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn generate_fails_closed_on_an_unterminated_section() {
        let (dir, app) = test_app();
        fs::write(
            dir.path().join("quotes").join("standard.json"),
            r#"{"blocks": [
                {"kind": "paragraph", "text": "[VAS_CHEMICAL]"},
                {"kind": "paragraph", "text": "never closed"}
            ]}"#,
        )
        .expect("write broken asset");

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/generate")
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from("storage_type=AC&volume=1&days=1"))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn index_page_renders_the_form_shell() {
        let (_dir, app) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).expect("request"))
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_string(response.into_body()).await;
        assert!(body.contains("storage_type"), "{body}");
    }
}
