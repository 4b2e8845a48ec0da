//! The estimation core.
//!
//! A pure, stateless pipeline: normalize the raw configuration, derive the
//! base cost, decompose it into categorized line items, then attach
//! alternate-tier pricing. Each request is computed fresh from its input;
//! nothing here touches shared mutable state or performs I/O.

pub mod base_cost;
pub mod breakdown;
pub mod normalize;
pub mod policy;
pub mod upgrades;

use thiserror::Error;

use crate::domain::{EstimateResult, ProjectConfiguration, ProjectSummary};

use self::policy::PricingPolicy;

#[derive(Debug, Error)]
pub enum EstimateError {
    /// Missing or malformed input; `fields` names every offender. Never
    /// retried, surfaced to the caller immediately.
    #[error("invalid configuration: {}", fields.join(", "))]
    Validation { fields: Vec<String> },

    /// An internal invariant was violated. Fatal for the request; no
    /// partial estimate is ever returned.
    #[error("calculation failed: {0}")]
    Calculation(String),
}

impl EstimateError {
    pub fn validation(field: impl Into<String>) -> Self {
        Self::Validation {
            fields: vec![field.into()],
        }
    }
}

/// Run the full pipeline for one request.
pub fn estimate(
    policy: &PricingPolicy,
    raw: &ProjectConfiguration,
) -> Result<EstimateResult, EstimateError> {
    let cfg = normalize::normalize(raw)?;
    let base = base_cost::compute(policy, &cfg)?;
    let (breakdown, total_cost) = breakdown::generate(&cfg, base);
    let upgrade_suggestions = upgrades::suggestions(total_cost, cfg.grade);

    Ok(EstimateResult {
        project_summary: ProjectSummary::from(&cfg),
        total_cost,
        breakdown,
        upgrade_suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Grade, InteriorPackage, PlotSize, Zone};

    fn request() -> ProjectConfiguration {
        ProjectConfiguration {
            plot_size: Some(PlotSize::Full),
            dimensions: Some("40x50".to_string()),
            grade: Some(Grade::Classic),
            zone: Some(Zone::A),
            bedrooms: Some(4),
            lift_required: Some(true),
            interior_package: Some(InteriorPackage::Base),
            compound_wall: Some(true),
            ..Default::default()
        }
    }

    #[test]
    fn full_pipeline_reconciles_breakdown_and_total() {
        let policy = PricingPolicy::default();
        let result = estimate(&policy, &request()).unwrap();

        assert!(result.total_cost > 0);
        let sum: i64 = result.breakdown.iter().map(|i| i.amount).sum();
        assert_eq!(sum, result.total_cost);

        let pct: f64 = result.breakdown.iter().map(|i| i.percentage).sum();
        assert!((pct - 100.0).abs() < 1e-9);

        // Three alternates to a Classic estimate.
        assert_eq!(result.upgrade_suggestions.len(), 3);
    }

    #[test]
    fn identical_inputs_produce_identical_estimates() {
        let policy = PricingPolicy::default();
        let first = estimate(&policy, &request()).unwrap();
        let second = estimate(&policy, &request()).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn summary_echoes_normalized_inputs() {
        let policy = PricingPolicy::default();
        let result = estimate(&policy, &request()).unwrap();
        let summary = &result.project_summary;

        assert_eq!(summary.dimensions, "40x50");
        assert_eq!(summary.bedrooms, "4 BHK");
        assert_eq!(summary.floors, "G+2");
        assert_eq!(summary.grade, Grade::Classic);
        assert_eq!(summary.lift, "Included");
        assert_eq!(summary.interior, "Base Package");
        assert_eq!(summary.compound_wall, "Included");
        assert_eq!(summary.car_parking, "Not Added");
    }
}
