use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{Created, NoContent, Paginated, PaginationParams};
use crate::app::AppState;
use crate::domain::{ProjectKind, SaveProjectRequest, SavedProject};
use crate::error::{ApiError, ApiResult};

/// Persist a computed estimate. Saving is explicit and happens at most
/// once per client confirmation; the estimation core itself never writes.
pub async fn save_project(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveProjectRequest>,
) -> ApiResult<Created<SavedProject>> {
    if ProjectKind::parse(&req.project_type).is_none() {
        return Err(ApiError::BadRequest(format!(
            "Unknown project type '{}'",
            req.project_type
        )));
    }
    if req.total_cost <= 0 {
        return Err(ApiError::BadRequest(
            "total_cost must be positive".to_string(),
        ));
    }

    let record = sqlx::query_as::<_, SavedProject>(
        r#"
        INSERT INTO saved_projects (id, project_type, input_json, total_cost, breakdown_json)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id, project_type, input_json, total_cost, breakdown_json, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&req.project_type)
    .bind(&req.input_json)
    .bind(req.total_cost)
    .bind(&req.breakdown_json)
    .fetch_one(&state.db)
    .await?;

    tracing::info!(
        project_id = %record.id,
        project_type = %record.project_type,
        total_cost = record.total_cost,
        "Project saved"
    );

    Ok(Created(record))
}

/// List saved projects, newest first.
pub async fn list_projects(
    State(state): State<Arc<AppState>>,
    Query(pagination): Query<PaginationParams>,
) -> ApiResult<Paginated<SavedProject>> {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM saved_projects")
        .fetch_one(&state.db)
        .await?;

    let records = sqlx::query_as::<_, SavedProject>(
        r#"
        SELECT id, project_type, input_json, total_cost, breakdown_json, created_at
        FROM saved_projects
        ORDER BY created_at DESC
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(pagination.limit() as i64)
    .bind(pagination.offset() as i64)
    .fetch_all(&state.db)
    .await?;

    Ok(Paginated::new(records, &pagination, total as u64))
}

/// Delete one saved project.
pub async fn delete_project(
    State(state): State<Arc<AppState>>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<NoContent> {
    let result = sqlx::query("DELETE FROM saved_projects WHERE id = $1")
        .bind(project_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!(
            "Saved project {project_id} not found"
        )));
    }

    tracing::info!(project_id = %project_id, "Saved project deleted");
    Ok(NoContent)
}
