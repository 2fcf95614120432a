//! Liveness endpoint. Mounted at the root, not under `/api/v1`, so load
//! balancers can probe it without the API prefix.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
    database: &'static str,
}

/// GET /health
async fn health(State(state): State<AppState>) -> Json<Health> {
    let db_ok = profashion_db::health_check(&state.pool).await.is_ok();

    Json(Health {
        status: if db_ok { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if db_ok { "up" } else { "down" },
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
