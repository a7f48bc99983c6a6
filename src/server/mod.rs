//! HTTP surface of the query service.
//!
//! # Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/launches/failed` | Failed launches |
//! | GET | `/launches/succeeded` | Successful launches |
//! | GET | `/launches/details` | Launches joined with rocket and core |
//! | GET | `/launches/count` | Total launches |
//! | GET | `/launches/countSuccess` | Successful launches count |
//! | GET | `/launches/countFailed` | Failed launches count |
//! | GET | `/launches/byRocketID/{rocket_id}` | Launches of one rocket |
//! | GET | `/rockets/highStage` | Rockets with the most stages |
//! | GET | `/rockets/stagesAscending?limit=` | Rockets by stage count |
//! | GET | `/cores/reuseCount?limit=` | Cores by reuse count |
//! | GET | `/health` | Liveness |

pub mod handlers;

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;
use tracing::info;

use crate::error::Result;
use crate::store::Store;

/// Shared state for handlers: only the store handle, no connection.
#[derive(Clone)]
pub struct AppState {
    pub store: Store,
}

pub fn build_router(store: Store) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/launches/failed", get(handlers::failed_launches))
        .route("/launches/succeeded", get(handlers::succeeded_launches))
        .route("/launches/details", get(handlers::launch_details))
        .route("/launches/count", get(handlers::count_launches))
        .route("/launches/countSuccess", get(handlers::count_successes))
        .route("/launches/countFailed", get(handlers::count_failures))
        .route("/launches/byRocketID/{rocket_id}", get(handlers::launches_for_rocket))
        .route("/rockets/highStage", get(handlers::high_stage_rockets))
        .route("/rockets/stagesAscending", get(handlers::rockets_by_stages))
        .route("/cores/reuseCount", get(handlers::cores_by_reuse))
        .route("/health", get(handlers::health))
        .with_state(state)
}

/// Bootstrap the schema and serve until the process is stopped
pub async fn serve(store: Store, addr: SocketAddr) -> Result<()> {
    store.create_tables()?;

    let app = build_router(store.clone());
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Serving {:?} on http://{}", store.path(), addr);
    axum::serve(listener, app).await?;

    Ok(())
}
