// Axum API Server Module
//
// Purpose: HTTP surface for plant identification (multipart upload) and the
// botanical chat. Image analysis is CPU-bound and runs on the blocking pool.

use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use std::path::PathBuf;

use crate::chat::{self, ChatReply};
use crate::config::{Capabilities, RandomSource, ServerConfig};
use crate::encyclopedia::{choose_description, wiki_url, WikipediaClient};
use crate::identify::identify_path;
use crate::uploads::{allowed_file, UploadError, UploadStore};
use crate::web::handlers::pages::{index_page, landing_page};

/// Multipart framing overhead allowed on top of the image size limit
pub const BODY_LIMIT_SLACK: usize = 1024 * 1024;

const MSG_NO_IMAGE: &str = "No image file provided";
const MSG_NO_FILE_SELECTED: &str = "No file selected";
const MSG_INVALID_TYPE: &str = "Invalid file type. Please upload PNG, JPG, JPEG, GIF, or WEBP images.";
const MSG_TOO_LARGE: &str = "File too large. Maximum size is 16MB.";
const MSG_PREDICT_FAILED: &str = "An error occurred while processing your image. Please try again.";
const MSG_NO_MESSAGE: &str = "No message provided";
const MSG_INVALID_JSON: &str = "Request body must be JSON with a \"message\" field";

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub capabilities: Capabilities,
    pub random: RandomSource,
    pub uploads: UploadStore,
    pub wikipedia: Option<WikipediaClient>,
    pub static_dir: PathBuf,
}

impl AppState {
    pub async fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        tracing::info!("Preparing upload directory {}", config.upload_dir.display());
        let uploads = UploadStore::new(&config.upload_dir, config.max_upload_bytes, config.upload_retention);
        uploads.ensure_dir().await?;

        let wikipedia = match &config.wikipedia {
            Some(wiki_config) => {
                tracing::info!("Initializing Wikipedia client ({})", wiki_config.rest_url);
                Some(WikipediaClient::new(wiki_config)?)
            }
            None => {
                tracing::info!("Encyclopedia enrichment disabled");
                None
            }
        };

        Ok(Self {
            capabilities: config.capabilities,
            random: config.random,
            uploads,
            wikipedia,
            static_dir: config.static_dir.clone(),
        })
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let body_limit = state.uploads.max_bytes() + BODY_LIMIT_SLACK;
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        // Pages
        .route("/", get(landing_page))
        .route("/app", get(index_page))

        // JSON API
        .route("/predict", post(predict))
        .route("/chat", post(chat_message))
        .route("/health", get(health_check))

        .nest_service("/static", static_files)

        // Middleware (applied in reverse order)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "model_loaded": state.capabilities.model_loaded,
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Image field pulled out of the multipart body
struct ImageUpload {
    filename: String,
    bytes: Vec<u8>,
}

/// Finds the `image` field. Name and extension are checked from the part
/// headers before the body is read, so an oversized file with a bad
/// extension reports the extension.
async fn read_image_field(multipart: &mut Multipart) -> Result<ImageUpload, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("image") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::BadRequest(MSG_NO_FILE_SELECTED.to_string()));
        }
        if !allowed_file(&filename) {
            return Err(UploadError::InvalidType(filename).into());
        }

        let bytes = field.bytes().await.map_err(multipart_error)?;
        return Ok(ImageUpload {
            filename,
            bytes: bytes.to_vec(),
        });
    }
    Err(AppError::BadRequest(MSG_NO_IMAGE.to_string()))
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::BadRequest(MSG_TOO_LARGE.to_string())
    } else {
        tracing::warn!("Malformed multipart body: {}", e);
        AppError::BadRequest(MSG_NO_IMAGE.to_string())
    }
}

/// POST /predict (multipart field `image`)
async fn predict(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, AppError> {
    let upload = read_image_field(&mut multipart).await?;
    let staged = state.uploads.save(&upload.filename, &upload.bytes).await?;
    tracing::info!("Received {} ({} bytes)", staged.original_name, staged.size);

    // CPU-bound work: run in blocking thread pool
    let path = staged.path.clone();
    let mut rng = state.random.rng();
    let identified = tokio::task::spawn_blocking(move || identify_path(&path, &mut rng)).await;

    state.uploads.remove(&staged).await;

    let result = identified.map_err(|e| {
        tracing::error!("Error in predict endpoint: task join error: {}", e);
        AppError::Internal(MSG_PREDICT_FAILED.to_string())
    })?;

    tracing::info!(
        "Plant identified: {} ({:?}, confidence {:.2})",
        result.plant_name,
        result.specificity,
        result.confidence
    );

    let external = match &state.wikipedia {
        Some(client) => client.summary(&result.plant_name).await,
        None => None,
    };
    let description = choose_description(&result.description, external.as_deref());

    Ok(Json(serde_json::json!({
        "plant": result.plant_name,
        "confidence": result.confidence,
        "description": description,
        "wiki_url": wiki_url(&result.plant_name),
        "care_tips": result.care_tips,
        "category": result.category,
        "specificity": result.specificity,
    })))
}

#[derive(serde::Deserialize, Debug)]
struct ChatRequest {
    #[serde(default)]
    message: Option<String>,
}

/// POST /chat
async fn chat_message(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, AppError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected chat body: {}", e);
        AppError::BadRequest(MSG_INVALID_JSON.to_string())
    })?;

    let message = request.message.unwrap_or_default();
    let message = message.trim();
    if message.is_empty() {
        return Err(AppError::BadRequest(MSG_NO_MESSAGE.to_string()));
    }

    let mut rng = state.random.rng();
    Ok(Json(chat::answer(message, &mut rng)))
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Internal(String),
}

impl From<UploadError> for AppError {
    fn from(e: UploadError) -> Self {
        match e {
            UploadError::InvalidType(_) => AppError::BadRequest(MSG_INVALID_TYPE.to_string()),
            UploadError::TooLarge { .. } => AppError::BadRequest(MSG_TOO_LARGE.to_string()),
            UploadError::Io(e) => {
                tracing::error!("Error in predict endpoint: {}", e);
                AppError::Internal(MSG_PREDICT_FAILED.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
