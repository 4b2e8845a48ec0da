//! Base-cost decomposition into categorized line items.

use crate::domain::{CostBreakdownItem, InteriorPackage, NormalizedConfig};

use super::policy;

/// Allocate `base_cost` across the weighted component table, fold in the
/// selected add-ons and interior package, and return the items together
/// with the grand total.
///
/// Rounding policy: every weighted item floors to a whole rupee and the
/// last weighted item absorbs the residual, so the weighted amounts sum to
/// `base_cost` exactly. Add-on items carry fixed amounts, so the overall
/// sum equals the returned total with no drift.
pub fn generate(cfg: &NormalizedConfig, base_cost: i64) -> (Vec<CostBreakdownItem>, i64) {
    let weights = policy::COMPONENT_WEIGHTS;
    let mut items = Vec::with_capacity(weights.len() + 4);

    let mut allocated = 0i64;
    for (index, weight) in weights.iter().enumerate() {
        let amount = if index == weights.len() - 1 {
            base_cost - allocated
        } else {
            base_cost * weight.weight_bp / policy::WEIGHT_SCALE
        };
        allocated += amount;
        items.push(CostBreakdownItem {
            category: policy::classify(weight.component),
            component: weight.component.to_string(),
            amount,
            percentage: 0.0,
        });
    }

    push_addons(cfg, &mut items);

    let total: i64 = items.iter().map(|item| item.amount).sum();
    fill_percentages(&mut items, total);

    (items, total)
}

fn push_addons(cfg: &NormalizedConfig, items: &mut Vec<CostBreakdownItem>) {
    let mut push_fixed = |component: &str, amount: i64| {
        items.push(CostBreakdownItem {
            category: policy::classify(component),
            component: component.to_string(),
            amount,
            percentage: 0.0,
        });
    };

    if cfg.compound_wall {
        push_fixed("Compound Wall", policy::COMPOUND_WALL_COST);
    }
    if cfg.rainwater_harvesting {
        push_fixed("Rainwater Harvesting", policy::RAINWATER_HARVESTING_COST);
    }
    if cfg.car_parking {
        push_fixed("Car Parking Covering", policy::CAR_PARKING_COST);
    }
    if cfg.interior_package != InteriorPackage::None {
        push_fixed(
            &format!("Interior Finishing Package ({})", cfg.interior_package.label()),
            policy::interior_package_cost(cfg.interior_package),
        );
    }
}

/// Percentages round to two decimals; the last item is reconciled so the
/// column sums to exactly 100.00.
fn fill_percentages(items: &mut [CostBreakdownItem], total: i64) {
    if total <= 0 || items.is_empty() {
        return;
    }

    let round2 = |value: f64| (value * 100.0).round() / 100.0;
    let last = items.len() - 1;
    let mut accumulated = 0.0;
    for (index, item) in items.iter_mut().enumerate() {
        item.percentage = if index == last {
            round2(100.0 - accumulated)
        } else {
            let share = round2(item.amount as f64 * 100.0 / total as f64);
            accumulated += share;
            share
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Grade, PlotSize, VastuDirection, Zone};

    fn config() -> NormalizedConfig {
        NormalizedConfig {
            plot_size: PlotSize::Full,
            width_ft: 30,
            depth_ft: 40,
            floor_levels: 3,
            floor_label: "G+2".to_string(),
            grade: Grade::Base,
            bedrooms: 3,
            family_count: 4,
            children_count: 0,
            grandparents_living: false,
            lift_required: false,
            pooja_room: false,
            vastu_direction: VastuDirection::East,
            zone: Zone::B,
            interior_package: InteriorPackage::None,
            terrace_guest_bedroom: false,
            compound_wall: false,
            rainwater_harvesting: false,
            car_parking: false,
        }
    }

    #[test]
    fn amounts_sum_exactly_to_total() {
        // A base cost chosen to not divide evenly by the weights.
        for base in [6_300_001i64, 4_199_999, 7_777_777] {
            let (items, total) = generate(&config(), base);
            assert_eq!(total, base);
            let sum: i64 = items.iter().map(|i| i.amount).sum();
            assert_eq!(sum, total);
        }
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let (items, _) = generate(&config(), 6_300_001);
        let sum: f64 = items.iter().map(|i| i.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9, "percentages summed to {sum}");
    }

    #[test]
    fn addons_append_as_fixed_exterior_items() {
        let mut cfg = config();
        cfg.compound_wall = true;
        cfg.rainwater_harvesting = true;
        cfg.car_parking = true;

        let base = 6_000_000;
        let (items, total) = generate(&cfg, base);
        assert_eq!(
            total,
            base + policy::COMPOUND_WALL_COST
                + policy::RAINWATER_HARVESTING_COST
                + policy::CAR_PARKING_COST
        );

        let wall = items.iter().find(|i| i.component == "Compound Wall").unwrap();
        assert_eq!(wall.category, Category::Exterior);
        assert_eq!(wall.amount, policy::COMPOUND_WALL_COST);

        let sum: i64 = items.iter().map(|i| i.amount).sum();
        assert_eq!(sum, total);
    }

    #[test]
    fn interior_package_appends_optional_item() {
        let mut cfg = config();
        cfg.interior_package = InteriorPackage::Semi;

        let (items, total) = generate(&cfg, 6_000_000);
        let interior = items
            .iter()
            .find(|i| i.component == "Interior Finishing Package (Semi)")
            .unwrap();
        assert_eq!(interior.category, Category::Optional);
        assert_eq!(interior.amount, policy::interior_package_cost(InteriorPackage::Semi));
        assert_eq!(total, 6_000_000 + interior.amount);
    }

    #[test]
    fn category_shares_match_declared_weights() {
        // With no add-ons, each category's weighted share of base_cost
        // should land within a rupee-rounding neighborhood of its declared
        // percentage.
        let base = 10_000_000i64;
        let (items, _) = generate(&config(), base);
        let share = |cat: Category| -> i64 {
            items
                .iter()
                .filter(|i| i.category == cat)
                .map(|i| i.amount)
                .sum()
        };
        let tolerance = policy::COMPONENT_WEIGHTS.len() as i64;
        assert!((share(Category::Structure) - 4_500_000).abs() <= tolerance);
        assert!((share(Category::Utilities) - 2_000_000).abs() <= tolerance);
        assert!((share(Category::Flooring) - 2_000_000).abs() <= tolerance);
        assert!((share(Category::Exterior) - 1_000_000).abs() <= tolerance);
        assert!((share(Category::Optional) - 500_000).abs() <= tolerance);
    }
}
