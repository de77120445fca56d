use chrono::Utc;

use crate::models::allocation::{PotAllocation, RiskAllocation, TypeAllocation};
use crate::models::asset::{Asset, AssetType, RiskBand};
use crate::models::portfolio::Portfolio;

/// Neutral fallback for any grouping key missing from a color table.
const DEFAULT_COLOR: &str = "#6B7280";

/// Chart colors per asset type, in enum order.
const TYPE_COLORS: &[(AssetType, &str)] = &[
    (AssetType::Stock, "#3B82F6"),
    (AssetType::Fund, "#059669"),
    (AssetType::Sipp, "#7C3AED"),
    (AssetType::Cash, "#D97706"),
];

/// Chart colors per risk band (green through red), in ascending risk order.
const RISK_COLORS: &[(RiskBand, &str)] = &[
    (RiskBand::VeryCautious, "#10B981"),
    (RiskBand::ModeratelyCautious, "#34D399"),
    (RiskBand::Balanced, "#FBBF24"),
    (RiskBand::ModeratelyAdventurous, "#F59E0B"),
    (RiskBand::Adventurous, "#EF4444"),
    (RiskBand::VeryAdventurous, "#DC2626"),
];

/// Chart colors per pot (slate through purple) — deliberately a different
/// palette from the risk chart, so the two are distinguishable side by side.
const POT_COLORS: &[(RiskBand, &str)] = &[
    (RiskBand::VeryCautious, "#64748B"),
    (RiskBand::ModeratelyCautious, "#94A3B8"),
    (RiskBand::Balanced, "#3B82F6"),
    (RiskBand::ModeratelyAdventurous, "#6366F1"),
    (RiskBand::Adventurous, "#8B5CF6"),
    (RiskBand::VeryAdventurous, "#A855F7"),
];

fn color_for<K: Copy + PartialEq>(table: &[(K, &'static str)], key: K) -> &'static str {
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

/// `value / total` as a 0–100 percentage; 0 when the total is 0.
fn share(value: f64, total: f64) -> f64 {
    if total > 0.0 {
        (value / total) * 100.0
    } else {
        0.0
    }
}

/// Groups assets along one classification dimension and computes per-group
/// totals and portfolio shares.
///
/// Pure business logic — no I/O, no stored state. Groups keep first-seen
/// order so repeated calls on unchanged data produce chart-stable output.
pub struct AllocationService;

impl AllocationService {
    pub fn new() -> Self {
        Self
    }

    /// Total portfolio value — the plain sum of asset values.
    pub fn portfolio_value(&self, assets: &[Asset]) -> f64 {
        assets.iter().map(|a| a.value).sum()
    }

    /// Allocation breakdown by asset type.
    pub fn allocations_by_type(&self, assets: &[Asset]) -> Vec<TypeAllocation> {
        let total = self.portfolio_value(assets);
        Self::grouped(assets, |a| a.asset_type)
            .into_iter()
            .map(|(asset_type, value)| TypeAllocation {
                label: asset_type.to_string().to_uppercase(),
                value,
                percentage: share(value, total),
                color: color_for(TYPE_COLORS, asset_type).to_string(),
            })
            .collect()
    }

    /// Allocation breakdown by risk band.
    pub fn allocations_by_risk(&self, assets: &[Asset]) -> Vec<RiskAllocation> {
        let total = self.portfolio_value(assets);
        Self::grouped(assets, |a| a.risk_profile)
            .into_iter()
            .map(|(band, value)| RiskAllocation {
                label: band.to_string(),
                value,
                percentage: share(value, total),
                color: color_for(RISK_COLORS, band).to_string(),
            })
            .collect()
    }

    /// Allocation breakdown by pot, retaining each pot's member assets for
    /// drill-down display.
    pub fn allocations_by_pot(&self, assets: &[Asset]) -> Vec<PotAllocation> {
        let total = self.portfolio_value(assets);
        let mut groups: Vec<(RiskBand, f64, Vec<Asset>)> = Vec::new();

        for asset in assets {
            match groups.iter_mut().find(|(pot, _, _)| *pot == asset.pot) {
                Some((_, value, members)) => {
                    *value += asset.value;
                    members.push(asset.clone());
                }
                None => groups.push((asset.pot, asset.value, vec![asset.clone()])),
            }
        }

        groups
            .into_iter()
            .map(|(pot, value, members)| PotAllocation {
                label: pot.pot_label(),
                value,
                percentage: share(value, total),
                color: color_for(POT_COLORS, pot).to_string(),
                assets: members,
            })
            .collect()
    }

    /// Derive a copy of the asset list with each asset's individual share of
    /// the portfolio attached. The input is never mutated.
    pub fn with_allocation_percentages(&self, assets: &[Asset]) -> Vec<Asset> {
        let total = self.portfolio_value(assets);
        assets
            .iter()
            .map(|asset| {
                let mut annotated = asset.clone();
                annotated.allocation = Some(share(asset.value, total));
                annotated
            })
            .collect()
    }

    /// Build a full portfolio snapshot: total value, allocation-annotated
    /// assets, and a fresh timestamp.
    pub fn create_portfolio(&self, assets: &[Asset]) -> Portfolio {
        Portfolio {
            total_value: self.portfolio_value(assets),
            assets: self.with_allocation_percentages(assets),
            last_updated: Utc::now(),
            risk_profile: None,
        }
    }

    /// Sum values per key, keeping first-seen key order.
    fn grouped<K: Copy + PartialEq>(assets: &[Asset], key: impl Fn(&Asset) -> K) -> Vec<(K, f64)> {
        let mut groups: Vec<(K, f64)> = Vec::new();
        for asset in assets {
            let k = key(asset);
            match groups.iter_mut().find(|(existing, _)| *existing == k) {
                Some((_, value)) => *value += asset.value,
                None => groups.push((k, asset.value)),
            }
        }
        groups
    }
}

impl Default for AllocationService {
    fn default() -> Self {
        Self::new()
    }
}
