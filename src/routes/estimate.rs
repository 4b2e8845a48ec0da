use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::app::AppState;
use crate::domain::{EstimateResult, ProjectConfiguration, ProjectKind};
use crate::engine;
use crate::error::{ApiError, ApiResult};

/// Compute an estimate for a project type.
///
/// The pipeline is pure and constant-time, so it runs inline on the
/// request task. Retries are the caller's concern; identical input always
/// yields an identical estimate.
pub async fn estimate_project(
    State(state): State<Arc<AppState>>,
    Path(project_type): Path<String>,
    Json(req): Json<ProjectConfiguration>,
) -> ApiResult<Json<EstimateResult>> {
    let kind = ProjectKind::parse(&project_type)
        .ok_or_else(|| ApiError::NotFound(format!("Unknown project type '{project_type}'")))?;

    let result = engine::estimate(&state.policy, &req)?;

    tracing::info!(
        project_type = %kind,
        total_cost = result.total_cost,
        items = result.breakdown.len(),
        "Estimate computed"
    );

    Ok(Json(result))
}
