//! Input normalization: fill defaults, parse dimensions and floor labels,
//! and reject configurations that cannot be defaulted safely.

use crate::domain::{
    FloorSpec, Grade, InteriorPackage, NormalizedConfig, ProjectConfiguration, VastuDirection, Zone,
};

use super::EstimateError;

/// Produce a fully-populated configuration or fail with the list of
/// offending fields. Pure function, no side effects.
pub fn normalize(raw: &ProjectConfiguration) -> Result<NormalizedConfig, EstimateError> {
    // plot_size and dimensions are the two hard requirements; everything
    // else has a documented default. Both are checked before returning so
    // the error names every offending field, including a dimensions value
    // that is present but unparseable.
    let mut fields = Vec::new();
    if raw.plot_size.is_none() {
        fields.push("plot_size".to_string());
    }
    let parsed_dims = raw
        .dimensions
        .as_deref()
        .and_then(|dims| parse_dimensions(dims).ok());
    if parsed_dims.is_none() {
        fields.push("dimensions".to_string());
    }
    let (Some(plot_size), Some((width_ft, depth_ft))) = (raw.plot_size, parsed_dims) else {
        return Err(EstimateError::Validation { fields });
    };
    let (floor_levels, floor_label) = resolve_floor(raw.floor.as_ref())?;

    let bedrooms = raw.bedrooms.unwrap_or(3);
    if bedrooms == 0 {
        return Err(EstimateError::validation("bedrooms"));
    }

    Ok(NormalizedConfig {
        plot_size,
        width_ft,
        depth_ft,
        floor_levels,
        floor_label,
        grade: raw.grade.unwrap_or(Grade::Base),
        bedrooms,
        family_count: raw.family_count.unwrap_or(4),
        children_count: raw.children_count.unwrap_or(0),
        grandparents_living: raw.grandparents_living.unwrap_or(false),
        lift_required: raw.lift_required.unwrap_or(false),
        pooja_room: raw.pooja_room.unwrap_or(false),
        vastu_direction: raw.vastu_direction.unwrap_or(VastuDirection::East),
        zone: raw.zone.unwrap_or(Zone::B),
        interior_package: raw.interior_package.unwrap_or(InteriorPackage::None),
        terrace_guest_bedroom: raw.terrace_guest_bedroom.unwrap_or(false),
        compound_wall: raw.compound_wall.unwrap_or(false),
        rainwater_harvesting: raw.rainwater_harvesting.unwrap_or(false),
        car_parking: raw.car_parking.unwrap_or(false),
    })
}

/// Parse `"WxD"` into two positive dimensions in feet.
fn parse_dimensions(dimensions: &str) -> Result<(u32, u32), EstimateError> {
    let invalid = || EstimateError::validation("dimensions");

    let (width, depth) = dimensions
        .split_once(['x', 'X'])
        .ok_or_else(invalid)?;

    let width: u32 = width.trim().parse().map_err(|_| invalid())?;
    let depth: u32 = depth.trim().parse().map_err(|_| invalid())?;

    if width == 0 || depth == 0 {
        return Err(invalid());
    }

    Ok((width, depth))
}

/// Resolve the floor field into build levels plus a canonical label.
/// "G+N" means ground plus N, i.e. N+1 levels; a bare count is treated the
/// same way. Defaults to "G+2".
fn resolve_floor(floor: Option<&FloorSpec>) -> Result<(u32, String), EstimateError> {
    let above_ground = match floor {
        None => 2,
        Some(FloorSpec::Count(n)) => *n,
        Some(FloorSpec::Label(label)) => {
            let trimmed = label.trim();
            let digits = trimmed
                .strip_prefix("G+")
                .or_else(|| trimmed.strip_prefix("g+"))
                .unwrap_or(trimmed);
            digits
                .parse::<u32>()
                .map_err(|_| EstimateError::validation("floor"))?
        }
    };

    Ok((above_ground + 1, format!("G+{above_ground}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlotSize;

    fn minimal() -> ProjectConfiguration {
        ProjectConfiguration {
            plot_size: Some(PlotSize::Full),
            dimensions: Some("30x40".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn missing_required_fields_are_both_named() {
        let err = normalize(&ProjectConfiguration::default()).unwrap_err();
        match err {
            EstimateError::Validation { fields } => {
                assert_eq!(fields, vec!["plot_size", "dimensions"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_dimensions_reported_alongside_missing_plot_size() {
        let err = normalize(&ProjectConfiguration {
            dimensions: Some("thirty by forty".to_string()),
            ..Default::default()
        })
        .unwrap_err();
        match err {
            EstimateError::Validation { fields } => {
                assert_eq!(fields, vec!["plot_size", "dimensions"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn minimal_input_gets_documented_defaults() {
        let cfg = normalize(&minimal()).unwrap();
        assert_eq!(cfg.width_ft, 30);
        assert_eq!(cfg.depth_ft, 40);
        assert_eq!(cfg.area_sqft(), 1_200);
        assert_eq!(cfg.floor_levels, 3); // G+2 default
        assert_eq!(cfg.floor_label, "G+2");
        assert_eq!(cfg.grade, Grade::Base);
        assert_eq!(cfg.zone, Zone::B);
        assert_eq!(cfg.bedrooms, 3);
        assert_eq!(cfg.interior_package, InteriorPackage::None);
        assert!(!cfg.lift_required);
        assert!(!cfg.compound_wall);
    }

    #[test]
    fn floor_labels_and_counts_resolve_to_levels() {
        for (spec, levels, label) in [
            (FloorSpec::Label("G+1".to_string()), 2, "G+1"),
            (FloorSpec::Label("g+3".to_string()), 4, "G+3"),
            (FloorSpec::Label("2".to_string()), 3, "G+2"),
            (FloorSpec::Count(4), 5, "G+4"),
        ] {
            let cfg = normalize(&ProjectConfiguration {
                floor: Some(spec),
                ..minimal()
            })
            .unwrap();
            assert_eq!(cfg.floor_levels, levels);
            assert_eq!(cfg.floor_label, label);
        }
    }

    #[test]
    fn malformed_dimensions_are_rejected() {
        for dims in ["30", "x40", "30x", "30xforty", "0x40", "30x0"] {
            let err = normalize(&ProjectConfiguration {
                dimensions: Some(dims.to_string()),
                ..minimal()
            })
            .unwrap_err();
            match err {
                EstimateError::Validation { fields } => assert_eq!(fields, vec!["dimensions"]),
                other => panic!("expected validation error for {dims:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn garbage_floor_label_is_rejected() {
        let err = normalize(&ProjectConfiguration {
            floor: Some(FloorSpec::Label("penthouse".to_string())),
            ..minimal()
        })
        .unwrap_err();
        assert!(matches!(err, EstimateError::Validation { .. }));
    }

    #[test]
    fn zero_bedrooms_is_rejected() {
        let err = normalize(&ProjectConfiguration {
            bedrooms: Some(0),
            ..minimal()
        })
        .unwrap_err();
        assert!(matches!(err, EstimateError::Validation { .. }));
    }
}
