//! Static per-tier upgrade facility catalog.
//!
//! Each paid grade carries a fixed set of material facilities with list
//! prices. The composer lets clients select a subset (with per-facility
//! amount edits) when customizing an upgrade, so this data is definitional,
//! not computed.

use serde::Serialize;

use super::configuration::Grade;

/// One selectable facility within an upgrade tier.
#[derive(Debug, Clone, Serialize)]
pub struct UpgradeFacility {
    pub id: &'static str,
    pub label: &'static str,
    pub amount: i64,
    pub description: &'static str,
}

/// The facility set for one grade.
#[derive(Debug, Clone, Serialize)]
pub struct TierFacilities {
    pub tier: Grade,
    pub description: &'static str,
    pub facilities: &'static [UpgradeFacility],
}

const CLASSIC: &[UpgradeFacility] = &[
    UpgradeFacility {
        id: "flooring",
        label: "Granite Flooring",
        amount: 45_000,
        description: "High-grade polished granite across living areas",
    },
    UpgradeFacility {
        id: "stairs",
        label: "Granite Stairs",
        amount: 35_000,
        description: "Granite with anti-slip finish",
    },
    UpgradeFacility {
        id: "counters",
        label: "Granite Kitchen Counters",
        amount: 28_000,
        description: "Thick granite counter with edges",
    },
    UpgradeFacility {
        id: "window_frames",
        label: "Premium Wooden Window Frames",
        amount: 52_000,
        description: "Teak wood with high-quality glass",
    },
    UpgradeFacility {
        id: "doors",
        label: "Premium Wooden Doors",
        amount: 38_000,
        description: "Solid wood doors with modern hardware",
    },
];

const PREMIUM: &[UpgradeFacility] = &[
    UpgradeFacility {
        id: "flooring",
        label: "Imported Marble Flooring",
        amount: 78_000,
        description: "Italian marble flooring throughout",
    },
    UpgradeFacility {
        id: "stairs",
        label: "Imported Marble Stairs",
        amount: 65_000,
        description: "Italian marble stairs with beveled edges",
    },
    UpgradeFacility {
        id: "counters",
        label: "Italian Marble Counters",
        amount: 52_000,
        description: "Premium Italian marble kitchen counters",
    },
    UpgradeFacility {
        id: "wall_cladding",
        label: "Marble Wall Cladding",
        amount: 42_000,
        description: "Partial marble wall cladding in main areas",
    },
    UpgradeFacility {
        id: "jacuzzi",
        label: "Jacuzzi Tub",
        amount: 85_000,
        description: "Premium heated jacuzzi installation",
    },
    UpgradeFacility {
        id: "lighting",
        label: "Designer Lighting",
        amount: 48_000,
        description: "Premium designer light fixtures",
    },
];

const ELITE: &[UpgradeFacility] = &[
    UpgradeFacility {
        id: "flooring",
        label: "Italian Marble Flooring",
        amount: 125_000,
        description: "Premium Italian marble throughout all areas",
    },
    UpgradeFacility {
        id: "stairs",
        label: "Italian Marble Stairs",
        amount: 95_000,
        description: "Hand-cut Italian marble with gold accents",
    },
    UpgradeFacility {
        id: "counters",
        label: "Italian Marble Counters",
        amount: 78_000,
        description: "Premium Italian marble with edge detailing",
    },
    UpgradeFacility {
        id: "wall_cladding",
        label: "Full Marble Wall Cladding",
        amount: 65_000,
        description: "Complete marble cladding in living & bedrooms",
    },
    UpgradeFacility {
        id: "jacuzzi",
        label: "Premium Jacuzzi Tub",
        amount: 125_000,
        description: "Luxury heated jacuzzi with spa features",
    },
    UpgradeFacility {
        id: "lightning_smart",
        label: "Smart Home Lighting",
        amount: 68_000,
        description: "App-controlled smart lighting system",
    },
    UpgradeFacility {
        id: "home_automation",
        label: "Home Automation",
        amount: 95_000,
        description: "Complete home automation & security",
    },
    UpgradeFacility {
        id: "steam_shower",
        label: "Steam Shower",
        amount: 85_000,
        description: "Luxury steam shower with therapy features",
    },
];

/// All tiers that carry a facility set. The Base grade has none by
/// definition: there is nothing to upgrade to.
pub const TIERS: &[TierFacilities] = &[
    TierFacilities {
        tier: Grade::Classic,
        description: "Granite Premium Grade Flooring",
        facilities: CLASSIC,
    },
    TierFacilities {
        tier: Grade::Premium,
        description: "Italian Marble Premium Grade",
        facilities: PREMIUM,
    },
    TierFacilities {
        tier: Grade::Elite,
        description: "Italian Marble Ultra Luxury Grade",
        facilities: ELITE,
    },
];

pub fn for_tier(tier: Grade) -> Option<&'static TierFacilities> {
    TIERS.iter().find(|t| t.tier == tier)
}
