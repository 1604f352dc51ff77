//! # Workspace Store Tests
//!
//! Tests for the store commands, the process-file orchestration (flag
//! handling, overwrite semantics, error paths), seeding, and the snapshot
//! persistence boundary.

mod common;

use common::{setup_tracing, FailingAiProvider, MockAiProvider};
use filewise::{
    fallback_metadata, FileRecord, FileUpdate, Metadata, MetadataClient, MetadataClientBuilder,
    StoreError, WorkspaceStore,
};

fn sample_file(id: &str, content: Option<&str>) -> FileRecord {
    FileRecord {
        id: id.to_string(),
        name: "notes.txt".to_string(),
        file_type: "text".to_string(),
        size: "1 KB".to_string(),
        modified: "2025-01-01".to_string(),
        content: content.map(String::from),
        metadata: None,
        processing: false,
    }
}

fn client_with_responses(responses: Vec<&str>) -> (MetadataClient, MockAiProvider) {
    let provider = MockAiProvider::new(responses.into_iter().map(String::from).collect());
    let client = MetadataClientBuilder::new()
        .ai_provider(Box::new(provider.clone()))
        .build()
        .unwrap();
    (client, provider)
}

#[test]
fn test_file_commands() {
    let store = WorkspaceStore::new();
    store.add_file(sample_file("f1", Some("hello"))).unwrap();

    let fetched = store.get_file("f1").unwrap().expect("file should exist");
    assert_eq!(fetched.name, "notes.txt");

    let updated = store
        .update_file(
            "f1",
            FileUpdate {
                name: Some("renamed.txt".to_string()),
                content: Some("hello world".to_string()),
                ..FileUpdate::default()
            },
        )
        .unwrap();
    assert_eq!(updated.name, "renamed.txt");
    assert_eq!(updated.content.as_deref(), Some("hello world"));
    // Untouched fields survive a partial update.
    assert_eq!(updated.size, "1 KB");

    store.delete_file("f1").unwrap();
    assert!(store.get_file("f1").unwrap().is_none());
    assert!(matches!(
        store.delete_file("f1"),
        Err(StoreError::FileNotFound(_))
    ));
    assert!(matches!(
        store.update_file("missing", FileUpdate::default()),
        Err(StoreError::FileNotFound(_))
    ));
}

#[test]
fn test_folder_commands() {
    let store = WorkspaceStore::new();
    let folder = store.create_folder("Documents").unwrap();
    assert_eq!(folder.name, "Documents");
    assert!(folder.id.starts_with("folder-"));
    assert_eq!(store.folders().unwrap().len(), 1);

    store.delete_folder(&folder.id).unwrap();
    assert!(store.folders().unwrap().is_empty());
    assert!(matches!(
        store.delete_folder(&folder.id),
        Err(StoreError::FolderNotFound(_))
    ));
}

#[tokio::test]
async fn test_process_file_stores_parsed_metadata_and_clears_flag() {
    setup_tracing();
    let store = WorkspaceStore::new();
    store.add_file(sample_file("f1", Some("a\nb"))).unwrap();
    let (client, provider) = client_with_responses(vec![
        "```json\n{\"language\":\"Plain Text\",\"lineCount\":2,\"entities\":[\"a\"],\"themes\":[\"b\"],\"summary\":\"s\"}\n```",
    ]);

    let metadata = store.process_file("f1", &client).await.unwrap();
    assert_eq!(metadata.language, "Plain Text");

    let file = store.get_file("f1").unwrap().unwrap();
    assert!(!file.processing, "processing flag must be cleared");
    assert_eq!(file.metadata, Some(metadata));
    assert_eq!(provider.call_history.read().unwrap().len(), 1);
}

#[tokio::test]
async fn test_process_file_fallback_overwrites_prior_metadata() {
    setup_tracing();
    let store = WorkspaceStore::new();
    let mut file = sample_file("f1", Some("a\nb\nc"));
    file.metadata = Some(Metadata {
        language: "Markdown".to_string(),
        line_count: 99,
        ..Metadata::default()
    });
    store.add_file(file).unwrap();
    let (client, _) = client_with_responses(vec!["no json to be found here"]);

    let metadata = store.process_file("f1", &client).await.unwrap();
    assert_eq!(metadata, fallback_metadata("a\nb\nc", "text"));

    let stored = store.get_file("f1").unwrap().unwrap();
    assert_eq!(
        stored.metadata,
        Some(fallback_metadata("a\nb\nc", "text")),
        "a fallback result replaces the prior metadata"
    );
    assert!(!stored.processing);
}

#[tokio::test]
async fn test_process_file_transport_error_preserves_prior_metadata() {
    setup_tracing();
    let store = WorkspaceStore::new();
    let prior = Metadata {
        language: "Markdown".to_string(),
        line_count: 9,
        ..Metadata::default()
    };
    let mut file = sample_file("f1", Some("# Title"));
    file.metadata = Some(prior.clone());
    store.add_file(file).unwrap();

    let client = MetadataClientBuilder::new()
        .ai_provider(Box::new(FailingAiProvider))
        .build()
        .unwrap();

    let result = store.process_file("f1", &client).await;
    assert!(matches!(result, Err(StoreError::Metadata(_))));

    let stored = store.get_file("f1").unwrap().unwrap();
    assert_eq!(stored.metadata, Some(prior), "prior metadata must survive");
    assert!(!stored.processing, "processing flag must be cleared");
}

#[tokio::test]
async fn test_process_file_without_content_never_calls_provider() {
    setup_tracing();
    let store = WorkspaceStore::new();
    store.add_file(sample_file("f1", None)).unwrap();
    store.add_file(sample_file("f2", Some(""))).unwrap();
    let (client, provider) = client_with_responses(vec![]);

    assert!(matches!(
        store.process_file("f1", &client).await,
        Err(StoreError::NoContent(_))
    ));
    assert!(matches!(
        store.process_file("f2", &client).await,
        Err(StoreError::NoContent(_))
    ));
    assert!(matches!(
        store.process_file("missing", &client).await,
        Err(StoreError::FileNotFound(_))
    ));
    assert!(
        provider.call_history.read().unwrap().is_empty(),
        "validation failures must be rejected before the provider is called"
    );
}

#[tokio::test]
async fn test_reprocessing_is_last_write_wins() {
    setup_tracing();
    let store = std::sync::Arc::new(WorkspaceStore::new());
    store.add_file(sample_file("f1", Some("a"))).unwrap();
    let (client, _) = client_with_responses(vec![
        "{\"language\":\"First\",\"lineCount\":1,\"entities\":[],\"themes\":[],\"summary\":\"\"}",
        "{\"language\":\"Second\",\"lineCount\":1,\"entities\":[],\"themes\":[],\"summary\":\"\"}",
    ]);

    let first = store.process_file("f1", &client).await.unwrap();
    let second = store.process_file("f1", &client).await.unwrap();
    assert_ne!(first, second);

    let stored = store.get_file("f1").unwrap().unwrap();
    assert_eq!(
        stored.metadata,
        Some(second),
        "the last response to land owns the record"
    );
}

#[test]
fn test_seed_if_empty_is_idempotent() {
    let store = WorkspaceStore::new();
    store.seed_if_empty().unwrap();
    assert_eq!(store.files().unwrap().len(), 2);
    assert_eq!(store.folders().unwrap().len(), 1);

    store.seed_if_empty().unwrap();
    assert_eq!(store.files().unwrap().len(), 2, "seeding must not duplicate");

    let readme = store.get_file("sample-1").unwrap().unwrap();
    assert_eq!(readme.name, "README.md");
    assert_eq!(
        readme.metadata.as_ref().map(|m| m.language.as_str()),
        Some("Markdown")
    );
}

#[test]
fn test_seed_if_empty_leaves_populated_store_alone() {
    let store = WorkspaceStore::new();
    store.add_file(sample_file("f1", None)).unwrap();
    store.seed_if_empty().unwrap();
    assert_eq!(store.files().unwrap().len(), 1);
    assert!(store.folders().unwrap().is_empty());
}

#[test]
fn test_snapshot_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("workspace.json");

    let store = WorkspaceStore::new();
    store.seed_if_empty().unwrap();
    store.create_folder("Projects").unwrap();
    store.save_to(&path).unwrap();

    let restored = WorkspaceStore::load_from(&path).unwrap();
    assert_eq!(restored.snapshot().unwrap(), store.snapshot().unwrap());
}

#[test]
fn test_restore_replaces_contents() {
    let store = WorkspaceStore::new();
    store.seed_if_empty().unwrap();

    store.restore(Default::default()).unwrap();
    assert!(store.files().unwrap().is_empty());
    assert!(store.folders().unwrap().is_empty());
}
