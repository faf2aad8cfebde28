use crate::app::render::Site;
use crate::core::catalog::CatalogQuery;
use crate::core::contact::{self, ContactSubmission};
use crate::core::content::ContentClient;
use crate::core::pages;
use axum::{
    body::Bytes,
    extract::{Path, Query, Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentClient,
    pub site: Arc<Site>,
}

impl AppState {
    pub fn new(content: ContentClient, site: Site) -> Self {
        Self {
            content,
            site: Arc::new(site),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/shop", get(shop))
        .route("/shop/{category}", get(shop_category))
        .route("/product/{slug}", get(product))
        .route("/collections", get(collections))
        .route("/collections/{slug}", get(collection))
        .route("/artisans", get(artisans))
        .route("/artisans/{slug}", get(artisan))
        .route("/journal", get(journal))
        .route("/journal/{slug}", get(blog_post))
        .route("/impact", get(impact))
        .route("/press", get(press))
        .route("/healthz", get(health_check))
        .route("/api/contact", post(submit_contact))
        .fallback(not_found)
        .layer(middleware::from_fn(trace_request))
        .with_state(state)
}

/// Wraps each request in an `http.request` span so everything logged while
/// serving it carries the method and path.
async fn trace_request(request: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "http.request",
        method = %request.method(),
        path = %request.uri().path(),
    );
    let started = Instant::now();
    let response = next.run(request).instrument(span.clone()).await;
    span.in_scope(|| {
        tracing::info!(
            status = response.status().as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request served"
        )
    });
    response
}

fn not_found_page(site: &Site) -> Response {
    (StatusCode::NOT_FOUND, Html(site.not_found())).into_response()
}

/// Renders a detail page, or the 404 page when the record does not exist.
fn detail<T>(site: &Site, record: Option<T>, render: impl FnOnce(&Site, &T) -> String) -> Response {
    match record {
        Some(record) => Html(render(site, &record)).into_response(),
        None => not_found_page(site),
    }
}

async fn home(State(state): State<AppState>) -> Html<String> {
    let page = pages::load_home(&state.content).await;
    Html(state.site.home(&page))
}

async fn shop(State(state): State<AppState>, Query(query): Query<CatalogQuery>) -> Html<String> {
    let page = pages::load_shop(&state.content, &query).await;
    Html(state.site.shop(&page, query.price.as_deref()))
}

async fn shop_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<CatalogQuery>,
) -> Response {
    let page = pages::load_category(&state.content, &category, &query).await;
    detail(&state.site, page, |site, page| {
        site.category(page, query.price.as_deref())
    })
}

async fn product(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let page = pages::load_product(&state.content, &slug).await;
    detail(&state.site, page, Site::product)
}

async fn collections(State(state): State<AppState>) -> Html<String> {
    let collections = pages::load_collections(&state.content).await;
    Html(state.site.collections(&collections))
}

async fn collection(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let record = pages::load_collection(&state.content, &slug).await;
    detail(&state.site, record, Site::collection)
}

async fn artisans(State(state): State<AppState>) -> Html<String> {
    let artisans = pages::load_artisans(&state.content).await;
    Html(state.site.artisans(&artisans))
}

async fn artisan(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let record = pages::load_artisan(&state.content, &slug).await;
    detail(&state.site, record, Site::artisan)
}

async fn journal(State(state): State<AppState>) -> Html<String> {
    let posts = pages::load_journal(&state.content).await;
    Html(state.site.journal(&posts))
}

async fn blog_post(State(state): State<AppState>, Path(slug): Path<String>) -> Response {
    let record = pages::load_blog_post(&state.content, &slug).await;
    detail(&state.site, record, Site::blog_post)
}

async fn impact(State(state): State<AppState>) -> Html<String> {
    let metrics = pages::load_impact(&state.content).await;
    Html(state.site.impact(&metrics))
}

async fn press(State(state): State<AppState>) -> Html<String> {
    let items = pages::load_press(&state.content).await;
    Html(state.site.press(&items))
}

async fn not_found(State(state): State<AppState>) -> Response {
    not_found_page(&state.site)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub content_source: &'static str,
    pub timestamp: String,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        content_source: if state.content.is_configured() {
            "configured"
        } else {
            "placeholder"
        },
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// The body is decoded by hand so a malformed payload maps to the generic
/// failure response instead of the extractor's rejection.
async fn submit_contact(body: Bytes) -> Response {
    let submission: ContactSubmission = match serde_json::from_slice(&body) {
        Ok(submission) => submission,
        Err(e) => {
            tracing::error!("❌ Contact form error: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to process request" })),
            )
                .into_response();
        }
    };

    let missing = submission.missing_fields();
    if !missing.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Missing required fields", "missing": missing })),
        )
            .into_response();
    }

    match contact::submit(&submission) {
        Ok(_) => Json(json!({ "success": true })).into_response(),
        Err(e) => {
            tracing::error!("❌ Contact form error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Failed to process request" })),
            )
                .into_response()
        }
    }
}
