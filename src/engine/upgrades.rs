//! Grade re-rating, upgrade suggestions and facility-level customization.

use serde::{Deserialize, Serialize};

use crate::domain::facilities;
use crate::domain::{Grade, UpgradeSuggestion};

use super::EstimateError;

/// Re-rate a total under a different grade multiplier.
///
/// Divides out the current multiplier before applying the new one, so the
/// result is independent of which grade the estimate started from and
/// round-trips within a rupee.
pub fn rerate_total(total_cost: i64, from: Grade, to: Grade) -> i64 {
    (total_cost as f64 / from.multiplier() * to.multiplier()).round() as i64
}

/// Precompute "what if" pricing for every non-current tier so clients can
/// present alternates without a second round trip. Downgrades appear with
/// negative deltas.
pub fn suggestions(total_cost: i64, current: Grade) -> Vec<UpgradeSuggestion> {
    Grade::ALL
        .iter()
        .filter(|&&tier| tier != current)
        .map(|&tier| UpgradeSuggestion {
            tier,
            upgrade_cost: rerate_total(total_cost, current, tier) - total_cost,
        })
        .collect()
}

/// One facility picked by the client, optionally with an edited amount.
#[derive(Debug, Clone, Deserialize)]
pub struct FacilitySelection {
    pub id: String,
    #[serde(default)]
    pub amount: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComposedFacility {
    pub id: &'static str,
    pub label: &'static str,
    pub amount: i64,
    pub description: &'static str,
}

/// Result of facility-level customization within a chosen upgrade tier.
#[derive(Debug, Clone, Serialize)]
pub struct FacilityComposition {
    pub tier: Grade,
    pub items: Vec<ComposedFacility>,
    pub total_upgrade_amount: i64,
    pub total_amount: i64,
}

/// Sum only the currently selected facilities of `tier`, honoring
/// per-facility amount edits (clamped at zero). An empty selection is
/// valid and composes to an upgrade amount of 0.
pub fn compose_facilities(
    tier: Grade,
    base_amount: i64,
    selections: &[FacilitySelection],
) -> Result<FacilityComposition, EstimateError> {
    let Some(tier_facilities) = facilities::for_tier(tier) else {
        return Err(EstimateError::validation("tier"));
    };

    let mut items = Vec::with_capacity(selections.len());
    let mut unknown = Vec::new();
    for selection in selections {
        match tier_facilities
            .facilities
            .iter()
            .find(|facility| facility.id == selection.id)
        {
            Some(facility) => items.push(ComposedFacility {
                id: facility.id,
                label: facility.label,
                amount: selection.amount.unwrap_or(facility.amount).max(0),
                description: facility.description,
            }),
            None => unknown.push(format!("selections.{}", selection.id)),
        }
    }

    if !unknown.is_empty() {
        return Err(EstimateError::Validation { fields: unknown });
    }

    let total_upgrade_amount: i64 = items.iter().map(|item| item.amount).sum();
    Ok(FacilityComposition {
        tier,
        items,
        total_upgrade_amount,
        total_amount: base_amount + total_upgrade_amount,
    })
}
