pub mod errors;
pub mod models;
pub mod services;

use models::{
    allocation::{PotAllocation, RiskAllocation, TypeAllocation},
    asset::{Asset, AssetSortOrder, AssetType, RiskBand},
    plan::Plan,
    portfolio::Portfolio,
    retirement::{RetirementAssumptions, RetirementData, RetirementReadiness},
};
use services::{allocation_service::AllocationService, projection_service::ProjectionService};
use uuid::Uuid;

use errors::CoreError;

/// Main entry point for the Financial Planning Tracker core library.
/// Holds the plan (assets + retirement assumptions) and the services that
/// operate on it.
#[must_use]
pub struct FinancialPlanner {
    plan: Plan,
    allocation_service: AllocationService,
    projection_service: ProjectionService,
    /// Tracks whether any mutation has occurred since the last save/load.
    dirty: bool,
}

impl std::fmt::Debug for FinancialPlanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinancialPlanner")
            .field("assets", &self.plan.assets.len())
            .field("has_assumptions", &self.plan.assumptions.is_some())
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl FinancialPlanner {
    /// Create a brand new empty plan.
    pub fn create_new() -> Self {
        Self::build(Plan::default())
    }

    /// Load an existing plan from its JSON form. The frontend (or whatever
    /// storage layer it uses) handles the actual file/localStorage I/O.
    pub fn load_from_json(json: &str) -> Result<Self, CoreError> {
        let plan: Plan = serde_json::from_str(json)?;
        Ok(Self::build(plan))
    }

    /// Serialize the current plan to JSON for the storage layer to persist.
    /// Clears the unsaved-changes flag on success.
    pub fn save_to_json(&mut self) -> Result<String, CoreError> {
        let json = serde_json::to_string_pretty(&self.plan)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize plan: {e}")))?;
        self.dirty = false;
        Ok(json)
    }

    /// Snapshot the plan as JSON without touching the unsaved-changes flag.
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.plan)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize plan: {e}")))
    }

    // ── Asset Management ────────────────────────────────────────────

    /// Add an asset to the plan. Returns the new asset's ID.
    pub fn add_asset(
        &mut self,
        name: impl Into<String>,
        value: f64,
        asset_type: AssetType,
        risk_profile: RiskBand,
        pot: RiskBand,
    ) -> Result<Uuid, CoreError> {
        let asset = Asset::new(name, value, asset_type, risk_profile, pot);
        Self::validate_asset(&asset)?;
        let id = asset.id;
        self.plan.assets.push(asset);
        self.dirty = true;
        Ok(id)
    }

    /// Update an existing asset by its ID. Validates before committing.
    pub fn update_asset(
        &mut self,
        asset_id: Uuid,
        name: impl Into<String>,
        value: f64,
        asset_type: AssetType,
        risk_profile: RiskBand,
        pot: RiskBand,
    ) -> Result<(), CoreError> {
        let updated = Asset {
            id: asset_id,
            name: name.into(),
            value,
            asset_type,
            risk_profile,
            pot,
            allocation: None,
        };
        Self::validate_asset(&updated)?;

        let asset = self
            .plan
            .assets
            .iter_mut()
            .find(|a| a.id == asset_id)
            .ok_or_else(|| CoreError::AssetNotFound(asset_id.to_string()))?;
        *asset = updated;
        self.dirty = true;
        Ok(())
    }

    /// Remove an asset by its ID.
    pub fn remove_asset(&mut self, asset_id: Uuid) -> Result<(), CoreError> {
        let idx = self
            .plan
            .assets
            .iter()
            .position(|a| a.id == asset_id)
            .ok_or_else(|| CoreError::AssetNotFound(asset_id.to_string()))?;
        self.plan.assets.remove(idx);
        self.dirty = true;
        Ok(())
    }

    /// Get a single asset by its ID.
    #[must_use]
    pub fn get_asset(&self, asset_id: Uuid) -> Option<&Asset> {
        self.plan.assets.iter().find(|a| a.id == asset_id)
    }

    /// Get all assets with their allocation percentages attached, in input
    /// order.
    #[must_use]
    pub fn get_assets(&self) -> Vec<Asset> {
        self.allocation_service
            .with_allocation_percentages(&self.plan.assets)
    }

    /// Get the total number of assets.
    #[must_use]
    pub fn asset_count(&self) -> usize {
        self.plan.assets.len()
    }

    // ── Search & Sorting ────────────────────────────────────────────

    /// Search assets by name (case-insensitive substring match).
    #[must_use]
    pub fn search_assets(&self, query: &str) -> Vec<&Asset> {
        let q = query.to_lowercase();
        self.plan
            .assets
            .iter()
            .filter(|a| a.name.to_lowercase().contains(&q))
            .collect()
    }

    /// Get assets sorted by a specific order.
    #[must_use]
    pub fn get_assets_sorted(&self, order: &AssetSortOrder) -> Vec<&Asset> {
        let mut assets: Vec<&Asset> = self.plan.assets.iter().collect();
        match order {
            AssetSortOrder::ValueDesc => assets.sort_by(|a, b| {
                b.value
                    .partial_cmp(&a.value)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            AssetSortOrder::ValueAsc => assets.sort_by(|a, b| {
                a.value
                    .partial_cmp(&b.value)
                    .unwrap_or(std::cmp::Ordering::Equal)
            }),
            AssetSortOrder::NameAsc => assets.sort_by(|a, b| a.name.cmp(&b.name)),
            AssetSortOrder::NameDesc => assets.sort_by(|a, b| b.name.cmp(&a.name)),
        }
        assets
    }

    /// Get assets filtered by type (e.g., show all funds).
    #[must_use]
    pub fn get_assets_by_type(&self, asset_type: AssetType) -> Vec<&Asset> {
        self.plan
            .assets
            .iter()
            .filter(|a| a.asset_type == asset_type)
            .collect()
    }

    /// Get assets filtered by pot.
    #[must_use]
    pub fn get_assets_by_pot(&self, pot: RiskBand) -> Vec<&Asset> {
        self.plan.assets.iter().filter(|a| a.pot == pot).collect()
    }

    // ── Portfolio & Allocations ─────────────────────────────────────

    /// Total portfolio value.
    #[must_use]
    pub fn portfolio_value(&self) -> f64 {
        self.allocation_service.portfolio_value(&self.plan.assets)
    }

    /// Full portfolio snapshot: total value, allocation-annotated assets,
    /// and a fresh timestamp.
    #[must_use]
    pub fn portfolio_summary(&self) -> Portfolio {
        self.allocation_service.create_portfolio(&self.plan.assets)
    }

    /// Allocation breakdown by asset type.
    #[must_use]
    pub fn allocations_by_type(&self) -> Vec<TypeAllocation> {
        self.allocation_service.allocations_by_type(&self.plan.assets)
    }

    /// Allocation breakdown by risk band.
    #[must_use]
    pub fn allocations_by_risk(&self) -> Vec<RiskAllocation> {
        self.allocation_service.allocations_by_risk(&self.plan.assets)
    }

    /// Allocation breakdown by pot, with member assets for drill-down.
    #[must_use]
    pub fn allocations_by_pot(&self) -> Vec<PotAllocation> {
        self.allocation_service.allocations_by_pot(&self.plan.assets)
    }

    // ── Retirement Planning ─────────────────────────────────────────

    /// Store a set of retirement assumptions and project the timeline.
    ///
    /// Validates that the retirement age is not before the current age; the
    /// simulator itself accepts anything, but such input only produces
    /// nonsense.
    pub fn plan_retirement(
        &mut self,
        assumptions: RetirementAssumptions,
    ) -> Result<Vec<RetirementData>, CoreError> {
        if assumptions.retirement_age < assumptions.current_age {
            return Err(CoreError::ValidationError(format!(
                "Retirement age {} is before current age {}",
                assumptions.retirement_age, assumptions.current_age
            )));
        }

        let timeline = self.projection_service.retirement_timeline(&assumptions);
        self.plan.assumptions = Some(assumptions);
        self.dirty = true;
        Ok(timeline)
    }

    /// Get the stored retirement assumptions, if any.
    #[must_use]
    pub fn get_assumptions(&self) -> Option<&RetirementAssumptions> {
        self.plan.assumptions.as_ref()
    }

    /// Re-project the timeline from the stored assumptions.
    /// `None` until `plan_retirement` has been called.
    #[must_use]
    pub fn retirement_timeline(&self) -> Option<Vec<RetirementData>> {
        self.plan
            .assumptions
            .as_ref()
            .map(|a| self.projection_service.retirement_timeline(a))
    }

    /// Readiness verdict over the projected timeline.
    /// `None` until `plan_retirement` has been called.
    #[must_use]
    pub fn retirement_readiness(&self) -> Option<RetirementReadiness> {
        self.retirement_timeline()
            .map(|timeline| self.projection_service.retirement_readiness(&timeline))
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export all assets as a JSON string (without allocation annotations).
    pub fn export_assets_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.plan.assets)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize assets to JSON: {e}")))
    }

    /// Import assets from a JSON string. All assets are validated first;
    /// if any asset fails validation, none are added (all-or-nothing).
    /// Returns the number of assets imported.
    pub fn import_assets_from_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let assets: Vec<Asset> = serde_json::from_str(json)?;
        for asset in &assets {
            Self::validate_asset(asset)?;
        }
        let count = assets.len();
        self.plan.assets.extend(assets);
        if count > 0 {
            self.dirty = true;
        }
        Ok(count)
    }

    /// Export all assets as a CSV string.
    /// Columns: id, name, value, type, risk_profile, pot
    #[must_use]
    pub fn export_assets_to_csv(&self) -> String {
        let mut csv = String::from("id,name,value,type,risk_profile,pot\n");
        for asset in &self.plan.assets {
            // Escape CSV: quote names containing commas, quotes, or newlines
            let escaped_name = if asset.name.contains(',')
                || asset.name.contains('"')
                || asset.name.contains('\n')
            {
                format!("\"{}\"", asset.name.replace('"', "\"\""))
            } else {
                asset.name.clone()
            };
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                asset.id, escaped_name, asset.value, asset.asset_type, asset.risk_profile, asset.pot,
            ));
        }
        csv
    }

    // ── Dirty State ─────────────────────────────────────────────────

    /// Returns `true` if the plan has been modified since the last save or
    /// load.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Internal ────────────────────────────────────────────────────

    fn validate_asset(asset: &Asset) -> Result<(), CoreError> {
        if asset.name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Asset name must not be empty".into(),
            ));
        }
        if !asset.value.is_finite() || asset.value < 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Asset value must be a non-negative number, got {}",
                asset.value
            )));
        }
        Ok(())
    }

    fn build(plan: Plan) -> Self {
        Self {
            plan,
            allocation_service: AllocationService::new(),
            projection_service: ProjectionService::new(),
            dirty: false,
        }
    }
}
