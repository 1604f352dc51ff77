//! # Filewise Server
//!
//! A thin HTTP boundary over the `filewise` core: workspace CRUD routes, a
//! stateless content-analysis route, and store-wired file processing.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod router;
pub mod state;

use crate::state::AppState;
use tracing::info;

/// Serves the application on the given listener until shutdown.
pub async fn run(listener: tokio::net::TcpListener, app_state: AppState) -> anyhow::Result<()> {
    let app = router::create_router(app_state);
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
