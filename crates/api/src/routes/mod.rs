pub mod batches;
pub mod catalog;
pub mod events;
pub mod gallery;
pub mod health;
pub mod projects;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /events                                  WebSocket (batch progress)
///
/// /poses                                   list pose catalog
/// /models                                  list built-in models
/// /backgrounds                             list built-in backgrounds
/// /shot-types                              list shot compositions
///
/// /gallery                                 flat library listing
/// /batches                                 submit batch (POST, multipart)
/// /batches/{id}                            batch progress snapshot
///
/// /projects                                list
/// /projects/{id}                           get (with item summaries), delete
/// /projects/{project_id}/items/{id}        delete item
/// /projects/{project_id}/items/{id}/image  raw image bytes
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(catalog::router())
        .merge(events::router())
        .route("/gallery", axum::routing::get(gallery::library))
        .nest("/batches", batches::router())
        .nest("/projects", projects::router())
        .nest("/projects/{project_id}/items", gallery::router())
}
