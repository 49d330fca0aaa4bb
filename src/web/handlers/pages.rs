// Page handlers for HTML rendering with Askama

use askama::Template;
use axum::extract::State;
use axum::response::{Html, IntoResponse};

use crate::api_server::AppState;

// ============================================================================
// Landing Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/landing.html")]
pub struct LandingTemplate {
    pub title: String,
}

pub async fn landing_page() -> impl IntoResponse {
    let template = LandingTemplate {
        title: "Flora - Plant Identifier".to_string(),
    };
    Html(template.render().unwrap_or_else(|e| {
        format!("Template error: {}", e)
    }))
}

// ============================================================================
// App Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub max_upload_mb: usize,
    pub allowed_extensions: String,
}

/// Main app page. Visiting it also sweeps expired uploads.
pub async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    state.uploads.cleanup_expired().await;

    let template = IndexTemplate {
        title: "Flora".to_string(),
        max_upload_mb: state.uploads.max_bytes() / (1024 * 1024),
        allowed_extensions: crate::uploads::ALLOWED_EXTENSIONS
            .iter()
            .map(|ext| format!(".{}", ext))
            .collect::<Vec<_>>()
            .join(","),
    };
    Html(template.render().unwrap_or_else(|e| {
        format!("Template error: {}", e)
    }))
}
