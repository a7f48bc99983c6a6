//! Query handlers.
//!
//! Each handler opens its own connection on the blocking pool, runs one
//! query, and drops the connection before the response is built.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use tracing::error;

use super::AppState;
use crate::error::Error;
use crate::query::{
    self, FailCount, HighStageRockets, LaunchDetailList, LaunchList, LimitedCores, LimitedRockets,
    RocketLaunches, SuccessCount, TotalCount, DEFAULT_CORE_LIMIT, DEFAULT_ROCKET_LIMIT,
};

pub const NO_LAUNCHES_DETAIL: &str = "Rocket has no launches yet";

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Error returned from a handler, rendered as `{"detail": ...}`
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            Error::NoLaunchesForRocket(_) => (StatusCode::NOT_FOUND, NO_LAUNCHES_DETAIL.to_string()),
            other => {
                error!("Query failed: {other}");
                (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Run `f` against a fresh connection on the blocking pool
async fn with_connection<T, F>(state: &AppState, f: F) -> ApiResult<T>
where
    T: Send + 'static,
    F: FnOnce(&Connection) -> crate::Result<T> + Send + 'static,
{
    let store = state.store.clone();
    let result = tokio::task::spawn_blocking(move || -> crate::Result<T> {
        let conn = store.connect()?;
        f(&conn)
    })
    .await
    .map_err(|e| Error::TaskJoin(e.to_string()))?;

    Ok(Json(result?))
}

#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

/// GET /launches/failed
pub async fn failed_launches(State(state): State<AppState>) -> ApiResult<LaunchList> {
    with_connection(&state, query::failed_launches).await
}

/// GET /launches/succeeded
pub async fn succeeded_launches(State(state): State<AppState>) -> ApiResult<LaunchList> {
    with_connection(&state, query::succeeded_launches).await
}

/// GET /launches/details
pub async fn launch_details(State(state): State<AppState>) -> ApiResult<LaunchDetailList> {
    with_connection(&state, query::launch_details).await
}

/// GET /launches/count
pub async fn count_launches(State(state): State<AppState>) -> ApiResult<TotalCount> {
    with_connection(&state, query::count_launches).await
}

/// GET /launches/countSuccess
pub async fn count_successes(State(state): State<AppState>) -> ApiResult<SuccessCount> {
    with_connection(&state, query::count_successes).await
}

/// GET /launches/countFailed
pub async fn count_failures(State(state): State<AppState>) -> ApiResult<FailCount> {
    with_connection(&state, query::count_failures).await
}

/// GET /launches/byRocketID/{rocket_id}
pub async fn launches_for_rocket(
    State(state): State<AppState>,
    Path(rocket_id): Path<String>,
) -> ApiResult<RocketLaunches> {
    with_connection(&state, move |conn| query::launches_for_rocket(conn, &rocket_id)).await
}

/// GET /rockets/highStage
pub async fn high_stage_rockets(State(state): State<AppState>) -> ApiResult<HighStageRockets> {
    with_connection(&state, query::high_stage_rockets).await
}

/// GET /rockets/stagesAscending?limit=
pub async fn rockets_by_stages(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> ApiResult<LimitedRockets> {
    let limit = params.limit.unwrap_or(DEFAULT_ROCKET_LIMIT);
    with_connection(&state, move |conn| query::rockets_by_stages(conn, limit)).await
}

/// GET /cores/reuseCount?limit=
pub async fn cores_by_reuse(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> ApiResult<LimitedCores> {
    let limit = params.limit.unwrap_or(DEFAULT_CORE_LIMIT);
    with_connection(&state, move |conn| query::cores_by_reuse(conn, limit)).await
}

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}
