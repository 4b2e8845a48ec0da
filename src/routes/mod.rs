pub mod estimate;
pub mod health;
pub mod projects;
pub mod upgrades;

use axum::{routing::delete, routing::get, routing::post, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Public health
        .route("/health", get(health::health_check))
        // Upgrade facility catalog + customization
        .route("/upgrades/facilities", get(upgrades::list_facilities))
        .route("/upgrades/customize", post(upgrades::customize_upgrade))
        // Saved projects (persistence collaborator)
        .route("/projects/save", post(projects::save_project))
        // Registered with and without the trailing slash; axum matches
        // these as distinct paths and clients use both spellings.
        .route("/projects", get(projects::list_projects))
        .route("/projects/", get(projects::list_projects))
        .route("/projects/:project_id", delete(projects::delete_project))
        // Estimation - the project type is the leading path segment,
        // e.g. POST /own-house/estimate
        .route("/:project_type/estimate", post(estimate::estimate_project))
}
