//! Pricing policy data.
//!
//! Everything here is tunable policy rather than algorithm: per-sqft rates,
//! fixed add-on prices, component weightings and the keyword rules that
//! assign components to categories. The pipeline stages consume these
//! tables; they never hard-code prices of their own.

use crate::domain::{Category, InteriorPackage};

/// Default construction rate in rupees per sqft of built-up area
/// (zone B, Base grade). Overridable via `BASE_RATE_PER_SQFT`.
pub const DEFAULT_RATE_PER_SQFT: f64 = 1_750.0;

/// Bedrooms included in the rated cost; each one above this adds a fixed
/// surcharge.
pub const BASELINE_BEDROOMS: u32 = 3;

pub const EXTRA_BEDROOM_COST: i64 = 300_000;
pub const LIFT_COST: i64 = 250_000;
pub const POOJA_ROOM_COST: i64 = 75_000;

/// The terrace guest bedroom is priced as a fixed base amount with a
/// surcharge factor applied to that amount only, never to the total.
pub const TERRACE_BEDROOM_BASE: i64 = 100_000;
pub const TERRACE_BEDROOM_SURCHARGE: f64 = 2.25;

// Discretionary add-ons, each a fixed independently priced line item.
pub const COMPOUND_WALL_COST: i64 = 300_000;
pub const RAINWATER_HARVESTING_COST: i64 = 60_000;
pub const CAR_PARKING_COST: i64 = 55_000;

/// Component weights are expressed in basis points of the base cost.
pub const WEIGHT_SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy)]
pub struct ComponentWeight {
    pub component: &'static str,
    pub weight_bp: i64,
}

/// Ordered base-cost allocation. Weights sum to `WEIGHT_SCALE`, grouped by
/// category share: STRUCTURE 45%, UTILITIES 20%, FLOORING 20%, EXTERIOR
/// 10%, OPTIONAL 5%.
pub const COMPONENT_WEIGHTS: &[ComponentWeight] = &[
    ComponentWeight { component: "Excavation & Earthwork", weight_bp: 500 },
    ComponentWeight { component: "Foundation & Footing", weight_bp: 900 },
    ComponentWeight { component: "RCC Framework", weight_bp: 1_600 },
    ComponentWeight { component: "Masonry & Brickwork", weight_bp: 1_000 },
    ComponentWeight { component: "Steel Reinforcement", weight_bp: 500 },
    ComponentWeight { component: "Electrical Wiring & Fixtures", weight_bp: 800 },
    ComponentWeight { component: "Plumbing & Sanitary Lines", weight_bp: 700 },
    ComponentWeight { component: "Septic & Drainage", weight_bp: 500 },
    ComponentWeight { component: "Main Flooring & Tiles", weight_bp: 900 },
    ComponentWeight { component: "Painting & Surface Finish", weight_bp: 600 },
    ComponentWeight { component: "Doors & Windows", weight_bp: 500 },
    ComponentWeight { component: "Compound & Elevation Works", weight_bp: 400 },
    ComponentWeight { component: "Waterproofing & Terracing", weight_bp: 300 },
    ComponentWeight { component: "Staircase Railing", weight_bp: 300 },
    ComponentWeight { component: "Interior Provisions", weight_bp: 500 },
];

pub fn interior_package_cost(pkg: InteriorPackage) -> i64 {
    match pkg {
        InteriorPackage::None => 0,
        InteriorPackage::Base => 250_000,
        InteriorPackage::Semi => 650_000,
        InteriorPackage::FullFurnished => 1_400_000,
    }
}

/// Ordered keyword rules for the category classifier. First match wins.
const CLASSIFIER_RULES: &[(&str, Category)] = &[
    ("excavation", Category::Structure),
    ("rcc", Category::Structure),
    ("foundation", Category::Structure),
    ("masonry", Category::Structure),
    ("brick", Category::Structure),
    ("steel", Category::Structure),
    ("concrete", Category::Structure),
    ("plumb", Category::Utilities),
    ("elect", Category::Utilities),
    ("sanit", Category::Utilities),
    ("septic", Category::Utilities),
    ("drain", Category::Utilities),
    ("floor", Category::Flooring),
    ("paint", Category::Flooring),
    ("plaster", Category::Flooring),
    ("tile", Category::Flooring),
    ("door", Category::Flooring),
    ("window", Category::Flooring),
    ("compound", Category::Exterior),
    ("parking", Category::Exterior),
    ("rain", Category::Exterior),
    ("lift", Category::Exterior),
    ("waterproof", Category::Exterior),
    ("solar", Category::Exterior),
    ("staircase", Category::Exterior),
    ("interior", Category::Optional),
];

/// Map a component name to its breakdown category. Unmatched names fall
/// back to STRUCTURE.
pub fn classify(component: &str) -> Category {
    let needle = component.to_ascii_lowercase();
    CLASSIFIER_RULES
        .iter()
        .find(|(pattern, _)| needle.contains(pattern))
        .map(|&(_, category)| category)
        .unwrap_or(Category::Structure)
}

/// Runtime-tunable pricing knobs, held in application state.
#[derive(Debug, Clone)]
pub struct PricingPolicy {
    pub rate_per_sqft: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            rate_per_sqft: DEFAULT_RATE_PER_SQFT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_weights_sum_to_scale() {
        let total: i64 = COMPONENT_WEIGHTS.iter().map(|w| w.weight_bp).sum();
        assert_eq!(total, WEIGHT_SCALE);
    }

    #[test]
    fn classifier_covers_known_keywords() {
        assert_eq!(classify("Excavation & Earthwork"), Category::Structure);
        assert_eq!(classify("RCC Framework"), Category::Structure);
        assert_eq!(classify("Electrical Wiring & Fixtures"), Category::Utilities);
        assert_eq!(classify("Septic & Drainage"), Category::Utilities);
        assert_eq!(classify("Main Flooring & Tiles"), Category::Flooring);
        assert_eq!(classify("Doors & Windows"), Category::Flooring);
        assert_eq!(classify("Compound Wall"), Category::Exterior);
        assert_eq!(classify("Rainwater Harvesting"), Category::Exterior);
        assert_eq!(classify("Car Parking Covering"), Category::Exterior);
        assert_eq!(classify("Interior Finishing Package (Semi)"), Category::Optional);
    }

    #[test]
    fn classifier_defaults_to_structure() {
        assert_eq!(classify("Mystery Line Item"), Category::Structure);
    }

    #[test]
    fn every_weighted_component_classifies_deliberately() {
        // No policy component should hit the STRUCTURE fallback by accident:
        // the five listed under non-structure keywords must not classify as
        // STRUCTURE, and the structure ones must.
        for w in COMPONENT_WEIGHTS {
            let category = classify(w.component);
            match w.component {
                "Excavation & Earthwork"
                | "Foundation & Footing"
                | "RCC Framework"
                | "Masonry & Brickwork"
                | "Steel Reinforcement" => assert_eq!(category, Category::Structure),
                "Electrical Wiring & Fixtures" | "Plumbing & Sanitary Lines" | "Septic & Drainage" => {
                    assert_eq!(category, Category::Utilities)
                }
                "Main Flooring & Tiles" | "Painting & Surface Finish" | "Doors & Windows" => {
                    assert_eq!(category, Category::Flooring)
                }
                "Compound & Elevation Works" | "Waterproofing & Terracing" | "Staircase Railing" => {
                    assert_eq!(category, Category::Exterior)
                }
                "Interior Provisions" => assert_eq!(category, Category::Optional),
                other => panic!("unclassified policy component: {other}"),
            }
        }
    }
}
