use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The type/category of a held asset.
/// Determines which allocation bucket the asset falls into on the type chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    /// Individual equities
    Stock,
    /// Pooled funds (OEICs, ETFs, index trackers)
    Fund,
    /// Self-invested personal pension wrapper
    Sipp,
    /// Cash and cash-like holdings
    Cash,
}

impl std::fmt::Display for AssetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetType::Stock => write!(f, "Stock"),
            AssetType::Fund => write!(f, "Fund"),
            AssetType::Sipp => write!(f, "SIPP"),
            AssetType::Cash => write!(f, "Cash"),
        }
    }
}

/// A six-step risk scale, ordered from least to most adventurous.
///
/// Used in two distinct roles: as an asset's own `risk_profile`, and as its
/// `pot` — a user-chosen grouping bucket that need not match the risk profile
/// (a cautious asset can live in an adventurous pot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RiskBand {
    VeryCautious,
    ModeratelyCautious,
    Balanced,
    ModeratelyAdventurous,
    Adventurous,
    VeryAdventurous,
}

impl RiskBand {
    /// All bands in ascending risk order.
    pub const ALL: [RiskBand; 6] = [
        RiskBand::VeryCautious,
        RiskBand::ModeratelyCautious,
        RiskBand::Balanced,
        RiskBand::ModeratelyAdventurous,
        RiskBand::Adventurous,
        RiskBand::VeryAdventurous,
    ];

    /// Display label when the band names a pot (e.g., "Balanced Pot").
    pub fn pot_label(&self) -> String {
        format!("{self} Pot")
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskBand::VeryCautious => write!(f, "Very Cautious"),
            RiskBand::ModeratelyCautious => write!(f, "Moderately Cautious"),
            RiskBand::Balanced => write!(f, "Balanced"),
            RiskBand::ModeratelyAdventurous => write!(f, "Moderately Adventurous"),
            RiskBand::Adventurous => write!(f, "Adventurous"),
            RiskBand::VeryAdventurous => write!(f, "Very Adventurous"),
        }
    }
}

/// Sort order for asset listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSortOrder {
    /// Largest value first (default for display)
    ValueDesc,
    /// Smallest value first
    ValueAsc,
    /// Alphabetical by name
    NameAsc,
    /// Reverse alphabetical by name
    NameDesc,
}

/// A single held asset.
///
/// The engine never mutates an asset in place — it only derives new records,
/// e.g. a copy with `allocation` filled in. `value` is in currency-agnostic
/// units; the engine does no conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Unique identifier
    pub id: Uuid,

    /// Human-readable name (e.g., "Global Index Fund")
    pub name: String,

    /// Current monetary value (non-negative; validated at the facade boundary)
    pub value: f64,

    /// Asset category — determines the type-allocation bucket
    #[serde(rename = "type")]
    pub asset_type: AssetType,

    /// The asset's own risk classification
    #[serde(rename = "riskProfile")]
    pub risk_profile: RiskBand,

    /// The pot this asset is assigned to (grouping key, independent of risk)
    pub pot: RiskBand,

    /// Percentage of total portfolio value, attached by the engine.
    /// `None` until computed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allocation: Option<f64>,
}

impl Asset {
    pub fn new(
        name: impl Into<String>,
        value: f64,
        asset_type: AssetType,
        risk_profile: RiskBand,
        pot: RiskBand,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            value,
            asset_type,
            risk_profile,
            pot,
            allocation: None,
        }
    }
}
