use serde::{Deserialize, Serialize};

use super::asset::Asset;

/// Portfolio share of one asset type (stock, fund, SIPP, cash).
///
/// Derived and ephemeral — recomputed in full on every call, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAllocation {
    /// Uppercased type label (e.g., "STOCK")
    #[serde(rename = "type")]
    pub label: String,

    /// Summed value of all assets of this type
    pub value: f64,

    /// Share of total portfolio value, 0–100. 0 when the portfolio is empty.
    pub percentage: f64,

    /// Chart color token for this bucket
    pub color: String,
}

/// Portfolio share of one risk band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAllocation {
    /// Risk band display label (e.g., "Moderately Cautious")
    #[serde(rename = "riskProfile")]
    pub label: String,

    pub value: f64,

    pub percentage: f64,

    pub color: String,
}

/// Portfolio share of one pot, with the member assets retained so the
/// frontend can offer a drill-down view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PotAllocation {
    /// Pot display label (e.g., "Balanced Pot")
    #[serde(rename = "pot")]
    pub label: String,

    pub value: f64,

    pub percentage: f64,

    pub color: String,

    /// Assets belonging to this pot, in input order
    pub assets: Vec<Asset>,
}
