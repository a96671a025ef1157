//! Edge cost tuning.
//!
//! The two constants that shape effective edge costs live in one value type
//! so a deployment can override them.  The defaults reproduce the recorded
//! behaviour and must stay fixed for replays recorded with them.

use crate::{CoreError, CoreResult};

/// Multiplier applied to a highway flagged `UNDER_MAINTENANCE`.
pub const DEFAULT_MAINTENANCE_PENALTY: f32 = 1.25;

/// Fixed cost of traversing a gateway.
pub const DEFAULT_GATEWAY_COST: f32 = 0.01;

/// Cost parameters used when building the filtered adjacency.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostModel {
    /// Highway cost multiplier while under maintenance.  Must be `>= 1.0`.
    pub maintenance_penalty: f32,

    /// Cost of one gateway hop.  Must be `>= 0.0`.
    pub gateway_cost: f32,
}

impl CostModel {
    /// Reject values that would break the shortest-path search (negative or
    /// non-finite weights) or invert the meaning of the penalty.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.maintenance_penalty.is_finite() || self.maintenance_penalty < 1.0 {
            return Err(CoreError::Config(format!(
                "maintenance_penalty must be finite and >= 1.0, got {}",
                self.maintenance_penalty
            )));
        }
        if !self.gateway_cost.is_finite() || self.gateway_cost < 0.0 {
            return Err(CoreError::Config(format!(
                "gateway_cost must be finite and >= 0.0, got {}",
                self.gateway_cost
            )));
        }
        Ok(())
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            maintenance_penalty: DEFAULT_MAINTENANCE_PENALTY,
            gateway_cost:        DEFAULT_GATEWAY_COST,
        }
    }
}
