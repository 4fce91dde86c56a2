use std::sync::Arc;

use asciify::{Charset, ConvertOptions, Converter};
use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State, multipart::MultipartError},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

const INDEX_HTML: &str = include_str!("index.html");

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub converter: Arc<Converter>,
}

impl AppState {
    pub fn new(converter: Converter) -> Self {
        Self {
            converter: Arc::new(converter),
        }
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Multipart(#[from] MultipartError),

    #[error("Conversion failed: {0}")]
    Convert(#[from] asciify::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Multipart(e) => e.status(),
            ApiError::Convert(asciify::Error::InvalidConfiguration(_)) => StatusCode::BAD_REQUEST,
            ApiError::Convert(e) if e.is_decode() => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Convert(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self {
            ApiError::Multipart(e) => e.body_text(),
            _ => self.to_string(),
        };

        if status.is_server_error() {
            log::error!("{message}");
        } else {
            log::warn!("rejected request: {message}");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub ascii: String,
}

pub fn create_router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/convert", post(convert))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// `POST /convert`
///
/// Multipart form with an `image` file and optional `width`, `height`,
/// `charset`, `colored` and `inverted` fields. Empty fields count as unset.
async fn convert(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ConvertResponse>, ApiError> {
    let mut image: Option<Vec<u8>> = None;
    let mut options = ConvertOptions::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "image" => image = Some(field.bytes().await?.to_vec()),
            "width" => {
                if let Some(width) = parse_form_u32(&name, &field.text().await?)? {
                    options.width = Some(width);
                }
            }
            "height" => {
                if let Some(height) = parse_form_u32(&name, &field.text().await?)? {
                    options.height = Some(height);
                }
            }
            "charset" => {
                let text = field.text().await?;
                if !text.is_empty() {
                    options.charset = Some(Charset::new(&text)?);
                }
            }
            "colored" | "inverted" => {
                let text = field.text().await?;
                if text.trim().is_empty() {
                    continue;
                }
                let value = parse_form_bool(&text).ok_or_else(|| {
                    ApiError::BadRequest(format!("Invalid boolean for {name}: {text}"))
                })?;
                if name == "colored" {
                    options.colored = Some(value);
                } else {
                    options.inverted = Some(value);
                }
            }
            _ => log::debug!("ignoring form field {name:?}"),
        }
    }

    let image = image.ok_or_else(|| ApiError::BadRequest("No image file provided".to_string()))?;
    log::info!("converting {} byte upload", image.len());

    let converter = Arc::clone(&state.converter);
    let ascii = tokio::task::spawn_blocking(move || converter.convert_bytes(&image, &options))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    Ok(Json(ConvertResponse { ascii }))
}

fn parse_form_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_form_u32(name: &str, value: &str) -> Result<Option<u32>, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ApiError::BadRequest(format!("Invalid {name}: {value}")))
}
