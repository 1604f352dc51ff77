use super::{handlers, state::AppState};
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/api/workspace", get(handlers::workspace_handler))
        .route("/api/files", post(handlers::add_file_handler))
        .route(
            "/api/files/{id}",
            patch(handlers::update_file_handler).delete(handlers::delete_file_handler),
        )
        .route("/api/files/{id}/process", post(handlers::process_file_handler))
        .route("/api/folders", post(handlers::create_folder_handler))
        .route("/api/folders/{id}", delete(handlers::delete_folder_handler))
        .route("/api/process-file", post(handlers::process_content_handler))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
