use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::app::AppState;
use crate::domain::facilities::{self, TierFacilities};
use crate::domain::Grade;
use crate::engine::upgrades::{compose_facilities, FacilityComposition, FacilitySelection};
use crate::error::ApiResult;

#[derive(Serialize)]
pub struct FacilityCatalogResponse {
    pub tiers: &'static [TierFacilities],
}

/// Static per-tier facility catalog, so clients can render the
/// customization screen without hard-coding prices.
pub async fn list_facilities(State(_state): State<Arc<AppState>>) -> Json<FacilityCatalogResponse> {
    Json(FacilityCatalogResponse {
        tiers: facilities::TIERS,
    })
}

#[derive(Deserialize)]
pub struct CustomizeUpgradeRequest {
    pub tier: Grade,
    pub base_amount: i64,
    #[serde(default)]
    pub selections: Vec<FacilitySelection>,
}

/// Facility-level customization within a chosen upgrade tier.
pub async fn customize_upgrade(
    State(_state): State<Arc<AppState>>,
    Json(req): Json<CustomizeUpgradeRequest>,
) -> ApiResult<Json<FacilityComposition>> {
    let composition = compose_facilities(req.tier, req.base_amount, &req.selections)?;

    tracing::info!(
        tier = %composition.tier,
        selected = composition.items.len(),
        total_upgrade_amount = composition.total_upgrade_amount,
        "Upgrade customized"
    );

    Ok(Json(composition))
}
