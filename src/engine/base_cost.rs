//! Baseline construction cost from area, floor count and grade.

use crate::domain::NormalizedConfig;

use super::policy::{self, PricingPolicy};
use super::EstimateError;

/// Compute the base cost in whole rupees.
///
/// `area × levels × rate × grade × zone`, then fixed additive deltas for
/// discrete choices (extra bedrooms, lift, pooja room, terrace guest
/// bedroom). The dimensions already reflect the chosen plot tier, so
/// plot_size never scales the area a second time.
pub fn compute(policy: &PricingPolicy, cfg: &NormalizedConfig) -> Result<i64, EstimateError> {
    let area_sqft = cfg.area_sqft();
    if area_sqft == 0 {
        return Err(EstimateError::Calculation(format!(
            "non-positive built-up area from dimensions {}",
            cfg.dimensions()
        )));
    }
    if cfg.floor_levels == 0 {
        return Err(EstimateError::Calculation(
            "non-positive floor level count".to_string(),
        ));
    }

    let rated = area_sqft as f64
        * cfg.floor_levels as f64
        * policy.rate_per_sqft
        * cfg.grade.multiplier()
        * cfg.zone.factor();

    let mut cost = rated.round() as i64;
    if cost <= 0 {
        return Err(EstimateError::Calculation(format!(
            "rated base cost collapsed to {cost} (rate {})",
            policy.rate_per_sqft
        )));
    }

    let extra_bedrooms = cfg.bedrooms.saturating_sub(policy::BASELINE_BEDROOMS) as i64;
    cost += extra_bedrooms * policy::EXTRA_BEDROOM_COST;

    if cfg.lift_required {
        cost += policy::LIFT_COST;
    }
    if cfg.pooja_room {
        cost += policy::POOJA_ROOM_COST;
    }
    if cfg.terrace_guest_bedroom {
        // Surcharge factor applies to the fixed add-on amount only.
        cost += (policy::TERRACE_BEDROOM_BASE as f64 * policy::TERRACE_BEDROOM_SURCHARGE).round()
            as i64;
    }

    Ok(cost)
}
