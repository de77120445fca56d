use serde::{Deserialize, Serialize};

use super::asset::Asset;
use super::retirement::RetirementAssumptions;

/// The main data container. Everything in here is what a collaborating
/// storage layer persists (as plain JSON, unchanged).
///
/// Contains the held assets and, once the user has planned, the retirement
/// assumptions. Timelines and allocations are never stored — they are fully
/// re-derivable from this container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// All held assets
    pub assets: Vec<Asset>,

    /// Retirement-planning assumptions, if the user has set them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assumptions: Option<RetirementAssumptions>,
}
