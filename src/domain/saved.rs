use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted estimate. The estimation core never writes these; saving is
/// an explicit, separate operation triggered by the client.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SavedProject {
    pub id: Uuid,
    pub project_type: String,
    pub input_json: serde_json::Value,
    pub total_cost: i64,
    pub breakdown_json: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for saving a computed estimate.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveProjectRequest {
    pub project_type: String,
    pub input_json: serde_json::Value,
    pub total_cost: i64,
    pub breakdown_json: serde_json::Value,
}
