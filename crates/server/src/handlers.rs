use super::{errors::AppError, state::AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use filewise::providers::factory::create_dynamic_provider;
use filewise::{
    ExtractionRequest, FileRecord, FileUpdate, FolderRecord, Metadata, MetadataClient,
    MetadataClientBuilder,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

// --- API Payloads ---

#[derive(Serialize)]
pub struct WorkspaceResponse {
    pub files: Vec<FileRecord>,
    pub folders: Vec<FolderRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFileRequest {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub modified: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessContentRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub file_type: String,
    /// Overrides the server's configured model for this call.
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateFolderRequest {
    pub name: String,
}

// --- Helper Functions ---

/// Writes the workspace snapshot through to disk after a mutation.
fn persist(app_state: &AppState) -> Result<(), AppError> {
    app_state.store.save_to(&app_state.snapshot_path)?;
    Ok(())
}

// --- Handlers ---

pub async fn root() -> &'static str {
    "filewise server is running."
}

pub async fn health_check() -> &'static str {
    "OK"
}

/// Returns the full workspace listing.
pub async fn workspace_handler(
    State(app_state): State<AppState>,
) -> Result<Json<WorkspaceResponse>, AppError> {
    Ok(Json(WorkspaceResponse {
        files: app_state.store.files()?,
        folders: app_state.store.folders()?,
    }))
}

/// Adds a file record. An id and modified date are assigned when absent.
pub async fn add_file_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<AddFileRequest>,
) -> Result<Json<FileRecord>, AppError> {
    let record = FileRecord {
        id: payload
            .id
            .unwrap_or_else(|| format!("file-{}", Uuid::new_v4())),
        name: payload.name,
        file_type: payload.file_type,
        size: payload.size.unwrap_or_default(),
        modified: payload
            .modified
            .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string()),
        content: payload.content,
        metadata: None,
        processing: false,
    };
    info!(file_id = %record.id, "Adding file '{}'", record.name);
    app_state.store.add_file(record.clone())?;
    persist(&app_state)?;
    Ok(Json(record))
}

/// Applies a partial update to a file record.
pub async fn update_file_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    Json(updates): Json<FileUpdate>,
) -> Result<Json<FileRecord>, AppError> {
    let updated = app_state.store.update_file(&id, updates)?;
    persist(&app_state)?;
    Ok(Json(updated))
}

/// Deletes a file record.
pub async fn delete_file_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    app_state.store.delete_file(&id)?;
    persist(&app_state)?;
    Ok(Json(json!({ "success": true })))
}

/// Creates a folder.
pub async fn create_folder_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateFolderRequest>,
) -> Result<Json<FolderRecord>, AppError> {
    let folder = app_state.store.create_folder(&payload.name)?;
    persist(&app_state)?;
    Ok(Json(folder))
}

/// Deletes a folder.
pub async fn delete_folder_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, AppError> {
    app_state.store.delete_folder(&id)?;
    persist(&app_state)?;
    Ok(Json(json!({ "success": true })))
}

/// Runs metadata extraction on content supplied directly in the request.
///
/// Missing or empty content is rejected before any provider call. A
/// response the model mangled still returns 200 with the fallback metadata;
/// only a transport failure maps to an error status.
pub async fn process_content_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<ProcessContentRequest>,
) -> Result<Json<Metadata>, AppError> {
    let content = match payload.content {
        Some(content) if !content.is_empty() => content,
        _ => return Err(AppError::BadRequest("No content provided".to_string())),
    };

    // A per-request model override builds its own client; everything else
    // goes through the shared one.
    let client: Arc<MetadataClient> = match payload.model.as_deref() {
        Some(model) => {
            let provider = create_dynamic_provider(model)?;
            Arc::new(MetadataClientBuilder::new().ai_provider(provider).build()?)
        }
        None => app_state.metadata_client.clone(),
    };

    info!(file_name = %payload.file_name, "Processing content");
    let request = ExtractionRequest {
        content,
        file_name: payload.file_name,
        file_type: payload.file_type,
        ..Default::default()
    };
    let metadata = client.extract_metadata_with_options(request).await?;
    Ok(Json(metadata))
}

/// Runs metadata extraction for a stored file and persists the result.
pub async fn process_file_handler(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Metadata>, AppError> {
    info!(file_id = %id, "Processing stored file");
    let metadata = app_state
        .store
        .process_file(&id, &app_state.metadata_client)
        .await?;
    persist(&app_state)?;
    Ok(Json(metadata))
}
