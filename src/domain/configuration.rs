use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse plot category constraining the available dimension choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotSize {
    Full,
    Double,
}

/// Construction quality tier driving the cost multiplier.
///
/// "Elite" is the canonical name for the top tier; legacy clients still
/// send "Luxury" for the same tier, so we accept it as an alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    Base,
    Classic,
    Premium,
    #[serde(alias = "Luxury")]
    Elite,
}

impl Grade {
    pub const ALL: [Grade; 4] = [Grade::Base, Grade::Classic, Grade::Premium, Grade::Elite];

    pub fn multiplier(self) -> f64 {
        match self {
            Self::Base => 1.00,
            Self::Classic => 1.15,
            Self::Premium => 1.30,
            Self::Elite => 1.45,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Classic => "Classic",
            Self::Premium => "Premium",
            Self::Elite => "Elite",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Location zone; zone A carries a premium, zone C a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Zone {
    A,
    B,
    C,
}

impl Zone {
    pub fn factor(self) -> f64 {
        match self {
            Self::A => 1.1,
            Self::B => 1.0,
            Self::C => 0.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteriorPackage {
    None,
    Base,
    Semi,
    FullFurnished,
}

impl InteriorPackage {
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Base => "Base",
            Self::Semi => "Semi",
            Self::FullFurnished => "Full Furnished",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VastuDirection {
    North,
    South,
    East,
    West,
}

/// Project type segment of the estimate URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectKind {
    OwnHouse,
    Rental,
    Villa,
    Commercial,
}

impl ProjectKind {
    /// Parse a URL path segment, accepting both hyphenated and
    /// underscored spellings plus the legacy marketing names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.replace('-', "_").as_str() {
            "own_house" | "dream_house" => Some(Self::OwnHouse),
            "rental" | "rental_homes" => Some(Self::Rental),
            "villa" | "villas" => Some(Self::Villa),
            "commercial" => Some(Self::Commercial),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OwnHouse => "own_house",
            Self::Rental => "rental",
            Self::Villa => "villa",
            Self::Commercial => "commercial",
        }
    }
}

impl fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The `floor` field arrives either as a "G+N" label or a bare floor count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FloorSpec {
    Count(u32),
    Label(String),
}

/// Raw project configuration as submitted by a client.
///
/// Every field is optional at the wire level; the input normalizer fills
/// defaults for everything except `plot_size` and `dimensions`, which are
/// hard requirements. Legacy field spellings from the wizard UI are
/// accepted as serde aliases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfiguration {
    pub plot_size: Option<PlotSize>,
    /// Plot dimensions as "WxD" in feet, e.g. "30x40".
    pub dimensions: Option<String>,
    pub floor: Option<FloorSpec>,
    #[serde(alias = "structural_style")]
    pub grade: Option<Grade>,
    pub bedrooms: Option<u32>,
    pub family_count: Option<u32>,
    pub children_count: Option<u32>,
    pub grandparents_living: Option<bool>,
    pub lift_required: Option<bool>,
    pub pooja_room: Option<bool>,
    pub vastu_direction: Option<VastuDirection>,
    pub zone: Option<Zone>,
    pub interior_package: Option<InteriorPackage>,
    pub terrace_guest_bedroom: Option<bool>,
    #[serde(alias = "include_compound_wall")]
    pub compound_wall: Option<bool>,
    #[serde(alias = "include_rainwater_harvesting")]
    pub rainwater_harvesting: Option<bool>,
    #[serde(alias = "include_car_parking")]
    pub car_parking: Option<bool>,
}

/// Fully-populated configuration produced by the input normalizer.
///
/// Passed by value between pipeline stages; never mutated after
/// normalization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedConfig {
    pub plot_size: PlotSize,
    pub width_ft: u32,
    pub depth_ft: u32,
    pub floor_levels: u32,
    pub floor_label: String,
    pub grade: Grade,
    pub bedrooms: u32,
    pub family_count: u32,
    pub children_count: u32,
    pub grandparents_living: bool,
    pub lift_required: bool,
    pub pooja_room: bool,
    pub vastu_direction: VastuDirection,
    pub zone: Zone,
    pub interior_package: InteriorPackage,
    pub terrace_guest_bedroom: bool,
    pub compound_wall: bool,
    pub rainwater_harvesting: bool,
    pub car_parking: bool,
}

impl NormalizedConfig {
    pub fn area_sqft(&self) -> u64 {
        self.width_ft as u64 * self.depth_ft as u64
    }

    pub fn dimensions(&self) -> String {
        format!("{}x{}", self.width_ft, self.depth_ft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_accepts_luxury_alias() {
        let grade: Grade = serde_json::from_str("\"Luxury\"").unwrap();
        assert_eq!(grade, Grade::Elite);
        // Canonical name round-trips as Elite
        assert_eq!(serde_json::to_string(&grade).unwrap(), "\"Elite\"");
    }

    #[test]
    fn floor_spec_accepts_label_and_count() {
        let label: FloorSpec = serde_json::from_str("\"G+2\"").unwrap();
        assert_eq!(label, FloorSpec::Label("G+2".to_string()));

        let count: FloorSpec = serde_json::from_str("2").unwrap();
        assert_eq!(count, FloorSpec::Count(2));
    }

    #[test]
    fn configuration_accepts_legacy_field_names() {
        let raw = serde_json::json!({
            "plot_size": "full",
            "dimensions": "30x40",
            "structural_style": "Classic",
            "include_compound_wall": true,
        });
        let cfg: ProjectConfiguration = serde_json::from_value(raw).unwrap();
        assert_eq!(cfg.grade, Some(Grade::Classic));
        assert_eq!(cfg.compound_wall, Some(true));
    }

    #[test]
    fn project_kind_parses_url_spellings() {
        assert_eq!(ProjectKind::parse("own-house"), Some(ProjectKind::OwnHouse));
        assert_eq!(ProjectKind::parse("dream-house"), Some(ProjectKind::OwnHouse));
        assert_eq!(ProjectKind::parse("rental"), Some(ProjectKind::Rental));
        assert_eq!(ProjectKind::parse("villas"), Some(ProjectKind::Villa));
        assert_eq!(ProjectKind::parse("warehouse"), None);
    }
}
