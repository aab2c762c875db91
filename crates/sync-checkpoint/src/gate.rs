//! Decides whether sync checkpoint enforcement is active.

use synchk_params::{ActivationParams, ActivationPoint};
use tracing::debug;

use crate::resolver::ActivationResolver;

/// Checks if enforcement under `params` is active for a block at `height`
/// with time `timestamp`.
///
/// Only one of the two inputs is consulted, depending on how `active_at`
/// classifies. The comparison is strict in both cases.
pub fn is_active(params: &ActivationParams, height: i64, timestamp: i64) -> bool {
    let point = params.activation_point();
    let active = point.is_reached(height, timestamp);

    if active {
        match point {
            ActivationPoint::Height(active_at) => debug!(
                target: "synchk::gate",
                %height, %active_at, "sync checkpoint is active"
            ),
            ActivationPoint::Timestamp(active_at) => debug!(
                target: "synchk::gate",
                %timestamp, %active_at, "sync checkpoint is active"
            ),
        }
    }

    active
}

impl ActivationResolver {
    /// Like [`is_active`] for the running chain. Inactive whenever the chain has
    /// no parameters.
    pub fn is_active(&self, height: i64, timestamp: i64) -> bool {
        self.active_params(height, timestamp).is_some()
    }

    /// Returns the running chain's parameters if enforcement is active.
    pub fn active_params(&self, height: i64, timestamp: i64) -> Option<ActivationParams> {
        let params = self.resolve_current().ok()?;
        is_active(&params, height, timestamp).then_some(params)
    }
}
