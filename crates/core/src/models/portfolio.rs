use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::asset::{Asset, RiskBand};

/// Derived snapshot of the whole portfolio at a point in time.
///
/// The core generates these — the frontend just renders them. The `assets`
/// list carries allocation percentages already attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Sum of all asset values
    #[serde(rename = "totalValue")]
    pub total_value: f64,

    /// All assets, each annotated with its allocation percentage
    pub assets: Vec<Asset>,

    /// When this snapshot was computed
    #[serde(rename = "lastUpdated")]
    pub last_updated: DateTime<Utc>,

    /// Optional overall risk classification chosen by the user
    #[serde(rename = "riskProfile", default, skip_serializing_if = "Option::is_none")]
    pub risk_profile: Option<RiskBand>,
}
