use serde::{Deserialize, Serialize};

use super::configuration::{Grade, NormalizedConfig, PlotSize};

/// Breakdown line-item category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Structure,
    Utilities,
    Flooring,
    Exterior,
    Optional,
}

/// One categorized line entry in a cost estimate.
///
/// Amounts are whole rupees. The generator guarantees that the amounts of
/// all items in an estimate sum exactly to `total_cost`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdownItem {
    pub category: Category,
    pub component: String,
    pub amount: i64,
    /// Share of total_cost, 0–100, rounded to two decimals.
    pub percentage: f64,
}

/// Precomputed alternate-tier pricing offered alongside the primary
/// estimate. `upgrade_cost` is negative when the tier is cheaper than the
/// current one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpgradeSuggestion {
    pub tier: Grade,
    pub upgrade_cost: i64,
}

/// Human-readable recap of the normalized inputs, echoed back to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub plot_size: PlotSize,
    pub dimensions: String,
    pub bedrooms: String,
    pub floors: String,
    pub grade: Grade,
    pub members: String,
    pub lift: String,
    pub pooja_room: String,
    pub interior: String,
    pub compound_wall: String,
    pub rainwater_harvesting: String,
    pub car_parking: String,
}

fn included(flag: bool) -> String {
    let label = if flag { "Included" } else { "Not Added" };
    label.to_string()
}

impl From<&NormalizedConfig> for ProjectSummary {
    fn from(cfg: &NormalizedConfig) -> Self {
        use super::configuration::InteriorPackage;

        let interior = match cfg.interior_package {
            InteriorPackage::None => "Not Added".to_string(),
            pkg => format!("{} Package", pkg.label()),
        };

        Self {
            plot_size: cfg.plot_size,
            dimensions: cfg.dimensions(),
            bedrooms: format!("{} BHK", cfg.bedrooms),
            floors: cfg.floor_label.clone(),
            grade: cfg.grade,
            members: format!("{} persons", cfg.family_count),
            lift: included(cfg.lift_required),
            pooja_room: included(cfg.pooja_room),
            interior,
            compound_wall: included(cfg.compound_wall),
            rainwater_harvesting: included(cfg.rainwater_harvesting),
            car_parking: included(cfg.car_parking),
        }
    }
}

/// Immutable estimate produced once per request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub project_summary: ProjectSummary,
    pub total_cost: i64,
    pub breakdown: Vec<CostBreakdownItem>,
    pub upgrade_suggestions: Vec<UpgradeSuggestion>,
}
