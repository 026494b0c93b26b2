use axum::body::Body;
use axum::extract::{Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::commands;
use crate::errors::CommandError;
use crate::model::{CommandOutcome, Reading, ReadingsPage};
use crate::store::ReadingStore;

/// Hard cap on command request bodies. Larger uploads are cut off rather
/// than answered with a JSON error.
const MAX_BODY_BYTES: usize = 1_000_000;

#[derive(Debug, Clone)]
struct AppState {
    store: ReadingStore,
}

#[derive(Debug, Deserialize)]
pub struct DataQuery {
    #[serde(rename = "type")]
    kind: Option<String>,
    // Kept as raw strings: bad values fall back to defaults instead of
    // failing extraction with a 400.
    page: Option<String>,
    limit: Option<String>,
}

pub fn create_router(store: ReadingStore) -> Router {
    let state = AppState { store };

    // Unmatched methods on known paths get the same 404 as unknown paths,
    // not the default 405.
    Router::new()
        .route("/data", get(get_data).fallback(not_found))
        .route("/commands", post(post_command).fallback(not_found))
        .fallback(not_found)
        .with_state(state)
}

/// GET /data: filter the seed set by exact `type`, then slice out one page.
/// This endpoint never fails.
async fn get_data(
    State(state): State<AppState>,
    Query(params): Query<DataQuery>,
) -> Json<ReadingsPage> {
    let filtered: Vec<Reading> = state
        .store
        .list()
        .iter()
        .filter(|reading| match params.kind.as_deref() {
            Some(kind) => reading.kind == kind,
            None => true,
        })
        .cloned()
        .collect();

    let total = filtered.len();
    let page = positive_or(params.page.as_deref(), 1);
    let limit = positive_or(params.limit.as_deref(), total);

    // Out-of-range pages clamp to an empty slice.
    let start = (page - 1).saturating_mul(limit);
    let data: Vec<Reading> = filtered.into_iter().skip(start).take(limit).collect();

    Json(ReadingsPage {
        data,
        total,
        page,
        limit,
    })
}

/// Lenient positive-integer parse: absent, non-numeric, negative and zero
/// all resolve to the default.
fn positive_or(raw: Option<&str>, default: usize) -> usize {
    raw.and_then(|s| s.parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(default)
}

/// POST /commands: enforce Content-Type, read the body under the size cap,
/// then run the staged command validation.
async fn post_command(
    headers: HeaderMap,
    body: Body,
) -> Result<Json<CommandOutcome>, CommandError> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    if content_type != Some("application/json") {
        return Err(CommandError::UnsupportedContentType);
    }

    let payload = collect_body(body).await?;
    let command = commands::parse_payload(&payload)?;
    debug!("Executing command '{}'", command.name());

    Ok(Json(commands::execute(command)))
}

/// Accumulates the request body up to `MAX_BODY_BYTES`.
///
/// On overflow the rest of the stream is abandoned; the 413 goes out with
/// the remainder of the upload unread, so the connection is torn down.
async fn collect_body(mut body: Body) -> Result<Vec<u8>, CommandError> {
    let mut payload = Vec::new();

    while let Some(frame) = body.frame().await {
        let frame = frame.map_err(|_| CommandError::BodyRead)?;
        if let Ok(data) = frame.into_data() {
            if payload.len() + data.len() > MAX_BODY_BYTES {
                return Err(CommandError::BodyTooLarge);
            }
            payload.extend_from_slice(&data);
        }
    }

    Ok(payload)
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}
