use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::config::ServerConfig;

/// Uploaded CSVs are small; anything past this is a mistake.
const UPLOAD_BODY_LIMIT: usize = 20 * 1024 * 1024;

pub fn router(config: ServerConfig) -> Router {
    let state = Arc::new(config);
    Router::new()
        .route("/", get(root))
        .route("/api/health", get(health))
        .route("/api/colleges", get(colleges))
        .route("/api/predictions", get(predictions))
        .route(
            "/api/admin/upload",
            post(upload)
                .layer::<_, std::convert::Infallible>(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(UPLOAD_BODY_LIMIT)),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "NIRF Rankings Portal API",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/api/docs",
        "status": "online",
    }))
}

async fn health(State(config): State<Arc<ServerConfig>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "csv_data_exists": config.combined_csv.exists(),
        "predictions_exists": config.predictions_csv.exists(),
    }))
}

/// Full combined dataset. Handled errors come back as 200 with an error
/// payload and an empty list, which is what the frontend expects.
async fn colleges(State(config): State<Arc<ServerConfig>>) -> Json<Value> {
    if !config.combined_csv.exists() {
        return Json(json!({ "error": "Data file not found", "colleges": [] }));
    }
    match rankscan_dataset::load_records(&config.combined_csv) {
        Ok(records) => Json(records_array(records)),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load combined dataset");
            Json(json!({ "error": e.to_string(), "colleges": [] }))
        }
    }
}

async fn predictions(State(config): State<Arc<ServerConfig>>) -> Json<Value> {
    if !config.predictions_csv.exists() {
        return Json(json!([]));
    }
    match rankscan_dataset::load_records(&config.predictions_csv) {
        Ok(records) => Json(records_array(records)),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load predictions");
            Json(json!({ "error": e.to_string(), "predictions": [] }))
        }
    }
}

/// Demo upload: the file lands in the ephemeral upload dir and nothing else
/// happens to it.
async fn upload(
    State(config): State<Arc<ServerConfig>>,
    multipart: Multipart,
) -> Json<Value> {
    match save_upload(&config, multipart).await {
        Ok(file_name) => Json(json!({
            "message": "File uploaded successfully (saved to temporary storage)",
            "status": "success",
            "filename": file_name,
            "note": "Uploads are ephemeral; promote them to real storage separately.",
        })),
        Err(e) => Json(json!({ "message": e.to_string(), "status": "error" })),
    }
}

async fn save_upload(config: &ServerConfig, mut multipart: Multipart) -> anyhow::Result<String> {
    while let Some(field) = multipart.next_field().await? {
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await?;

        tokio::fs::create_dir_all(&config.upload_dir).await?;
        let dest = config.upload_dir.join(format!("{}-{file_name}", Uuid::new_v4()));
        tokio::fs::write(&dest, &data).await?;

        tracing::info!(file = %dest.display(), bytes = data.len(), "Stored upload");
        return Ok(file_name);
    }
    anyhow::bail!("multipart request contained no file field")
}

fn records_array(records: Vec<rankscan_dataset::Record>) -> Value {
    Value::Array(records.into_iter().map(Value::Object).collect())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
