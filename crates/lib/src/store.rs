//! # Workspace Store
//!
//! The aggregate owning the workspace's file and folder records. All
//! mutation goes through explicit commands; readers get clones. Persistence
//! is an explicit snapshot boundary (`snapshot`/`restore`, `save_to`/
//! `load_from`) rather than anything implicit.
//!
//! `process_file` wires a record to the metadata pipeline. There is no
//! per-file in-flight guard: concurrent calls for the same id race, and the
//! last response to land overwrites the record's metadata.

use crate::errors::MetadataError;
use crate::types::{Metadata, MetadataClient};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

/// Custom error types for the workspace store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("File not found: {0}")]
    FileNotFound(String),
    #[error("Folder not found: {0}")]
    FolderNotFound(String),
    #[error("File has no content to analyze: {0}")]
    NoContent(String),
    #[error("Workspace store lock was poisoned")]
    LockPoisoned,
    #[error("Failed to serialize workspace snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error("Snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

/// A file record in the workspace.
///
/// `content` is present for text-like files and is the input to metadata
/// extraction. `processing` is transient: true only while one extraction
/// call is in flight, and omitted from serialized output when false.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub modified: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub processing: bool,
}

/// A partial update applied to a file record.
///
/// Only the supplied fields change. Updating content does not clear
/// previously extracted metadata; re-processing overwrites it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileUpdate {
    pub name: Option<String>,
    pub size: Option<String>,
    pub modified: Option<String>,
    pub content: Option<String>,
}

/// A folder record. Folders are a flat namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderRecord {
    pub id: String,
    pub name: String,
}

/// A serializable snapshot of the whole workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSnapshot {
    #[serde(default)]
    pub files: Vec<FileRecord>,
    #[serde(default)]
    pub folders: Vec<FolderRecord>,
}

/// The workspace aggregate.
pub struct WorkspaceStore {
    inner: RwLock<WorkspaceSnapshot>,
}

impl Default for WorkspaceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceStore {
    /// Creates an empty workspace store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(WorkspaceSnapshot::default()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, WorkspaceSnapshot>, StoreError> {
        self.inner.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, WorkspaceSnapshot>, StoreError> {
        self.inner.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Adds a file record to the workspace.
    pub fn add_file(&self, file: FileRecord) -> Result<(), StoreError> {
        let mut state = self.write()?;
        state.files.push(file);
        Ok(())
    }

    /// Applies a partial update to a file record and returns the result.
    pub fn update_file(&self, id: &str, updates: FileUpdate) -> Result<FileRecord, StoreError> {
        let mut state = self.write()?;
        let file = state
            .files
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| StoreError::FileNotFound(id.to_string()))?;
        if let Some(name) = updates.name {
            file.name = name;
        }
        if let Some(size) = updates.size {
            file.size = size;
        }
        if let Some(modified) = updates.modified {
            file.modified = modified;
        }
        if let Some(content) = updates.content {
            file.content = Some(content);
        }
        Ok(file.clone())
    }

    /// Removes a file record.
    pub fn delete_file(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.write()?;
        let before = state.files.len();
        state.files.retain(|f| f.id != id);
        if state.files.len() == before {
            return Err(StoreError::FileNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Creates a folder and returns its record.
    pub fn create_folder(&self, name: &str) -> Result<FolderRecord, StoreError> {
        let folder = FolderRecord {
            id: format!("folder-{}", Uuid::new_v4()),
            name: name.to_string(),
        };
        let mut state = self.write()?;
        state.folders.push(folder.clone());
        Ok(folder)
    }

    /// Removes a folder record.
    pub fn delete_folder(&self, id: &str) -> Result<(), StoreError> {
        let mut state = self.write()?;
        let before = state.folders.len();
        state.folders.retain(|f| f.id != id);
        if state.folders.len() == before {
            return Err(StoreError::FolderNotFound(id.to_string()));
        }
        Ok(())
    }

    /// Returns a clone of a file record, if present.
    pub fn get_file(&self, id: &str) -> Result<Option<FileRecord>, StoreError> {
        Ok(self.read()?.files.iter().find(|f| f.id == id).cloned())
    }

    /// Returns a clone of all file records.
    pub fn files(&self) -> Result<Vec<FileRecord>, StoreError> {
        Ok(self.read()?.files.clone())
    }

    /// Returns a clone of all folder records.
    pub fn folders(&self) -> Result<Vec<FolderRecord>, StoreError> {
        Ok(self.read()?.folders.clone())
    }

    fn set_processing(&self, id: &str, processing: bool) -> Result<(), StoreError> {
        let mut state = self.write()?;
        if let Some(file) = state.files.iter_mut().find(|f| f.id == id) {
            file.processing = processing;
        }
        Ok(())
    }

    /// Runs metadata extraction for a file record.
    ///
    /// Validates that the record exists and has non-empty content before the
    /// provider is ever called. While the call is in flight the record's
    /// `processing` flag is set; it is cleared on every outcome. A parsed or
    /// fallback result overwrites `metadata`; a transport failure leaves the
    /// prior `metadata` untouched and propagates.
    pub async fn process_file(
        &self,
        id: &str,
        client: &MetadataClient,
    ) -> Result<Metadata, StoreError> {
        let (content, name, file_type) = {
            let state = self.read()?;
            let file = state
                .files
                .iter()
                .find(|f| f.id == id)
                .ok_or_else(|| StoreError::FileNotFound(id.to_string()))?;
            let content = file
                .content
                .clone()
                .filter(|c| !c.is_empty())
                .ok_or_else(|| StoreError::NoContent(id.to_string()))?;
            (content, file.name.clone(), file.file_type.clone())
        };

        self.set_processing(id, true)?;

        let result = client.extract_metadata(&content, &name, &file_type).await;

        {
            let mut state = self.write()?;
            // The record may have been deleted while the call was in flight.
            if let Some(file) = state.files.iter_mut().find(|f| f.id == id) {
                file.processing = false;
                if let Ok(metadata) = &result {
                    file.metadata = Some(metadata.clone());
                }
            }
        }

        match result {
            Ok(metadata) => Ok(metadata),
            Err(e) => {
                warn!(file_id = %id, "Metadata extraction failed: {e}");
                Err(e.into())
            }
        }
    }

    /// Installs sample records when the workspace is completely empty.
    pub fn seed_if_empty(&self) -> Result<(), StoreError> {
        let mut state = self.write()?;
        if !state.files.is_empty() || !state.folders.is_empty() {
            return Ok(());
        }

        info!("Workspace is empty. Seeding sample data.");
        let today = Utc::now().format("%Y-%m-%d").to_string();
        state.files.push(FileRecord {
            id: "sample-1".to_string(),
            name: "README.md".to_string(),
            file_type: "text".to_string(),
            size: "2.1 KB".to_string(),
            modified: today.clone(),
            content: Some(
                "# Welcome to File Manager\n\nThis is a sample README file to demonstrate the \
                 file management system.\n\n## Features\n\n- Upload files\n- Edit text files\n\
                 - AI processing\n- Folder organization"
                    .to_string(),
            ),
            metadata: Some(Metadata {
                language: "Markdown".to_string(),
                line_count: 9,
                entities: vec![
                    "File Manager".to_string(),
                    "README".to_string(),
                    "AI processing".to_string(),
                ],
                ..Metadata::default()
            }),
            processing: false,
        });
        state.files.push(FileRecord {
            id: "sample-2".to_string(),
            name: "sample.txt".to_string(),
            file_type: "text".to_string(),
            size: "856 B".to_string(),
            modified: today,
            content: Some(
                "This is a sample text file.\n\nIt contains some example content to demonstrate \
                 the file viewer and editor capabilities."
                    .to_string(),
            ),
            metadata: Some(Metadata {
                language: "Plain Text".to_string(),
                line_count: 3,
                entities: vec![
                    "sample".to_string(),
                    "text file".to_string(),
                    "content".to_string(),
                ],
                ..Metadata::default()
            }),
            processing: false,
        });
        state.folders.push(FolderRecord {
            id: "folder-1".to_string(),
            name: "Documents".to_string(),
        });
        Ok(())
    }

    /// Returns a serializable snapshot of the workspace.
    pub fn snapshot(&self) -> Result<WorkspaceSnapshot, StoreError> {
        Ok(self.read()?.clone())
    }

    /// Replaces the workspace contents with a snapshot.
    pub fn restore(&self, snapshot: WorkspaceSnapshot) -> Result<(), StoreError> {
        *self.write()? = snapshot;
        Ok(())
    }

    /// Writes the workspace snapshot to disk as JSON.
    pub fn save_to(&self, path: &Path) -> Result<(), StoreError> {
        let snapshot = self.snapshot()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
        Ok(())
    }

    /// Loads a workspace from a JSON snapshot on disk.
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        let snapshot: WorkspaceSnapshot = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        info!(
            files = snapshot.files.len(),
            folders = snapshot.folders.len(),
            "Loaded workspace snapshot."
        );
        Ok(Self {
            inner: RwLock::new(snapshot),
        })
    }
}
