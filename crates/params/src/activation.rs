//! Activation parameters and the height/timestamp classification rule.

use serde::{Deserialize, Serialize};

/// Values of `active_at` below this are block heights, values at or above it are
/// Unix timestamps. Same threshold the lock time field of a transaction uses.
pub const LOCKTIME_THRESHOLD: i64 = 500_000_000;

/// When and under which master key sync checkpoint enforcement applies to a chain.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct ActivationParams {
    /// Block height or Unix timestamp, see [`ActivationPoint::classify`].
    pub active_at: i64,

    /// Hex encoded compressed public key checkpoints must be signed with.
    ///
    /// Not validated here, key parsing belongs to whoever needs the key.
    pub master_pubkey: String,
}

impl ActivationParams {
    pub fn new(active_at: i64, master_pubkey: impl Into<String>) -> Self {
        Self {
            active_at,
            master_pubkey: master_pubkey.into(),
        }
    }

    pub fn activation_point(&self) -> ActivationPoint {
        ActivationPoint::classify(self.active_at)
    }
}

/// An `active_at` value after it has been told apart as a height or a timestamp.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ActivationPoint {
    Height(i64),
    Timestamp(i64),
}

impl ActivationPoint {
    /// The one place the [`LOCKTIME_THRESHOLD`] rule is applied.
    pub fn classify(active_at: i64) -> Self {
        if active_at < LOCKTIME_THRESHOLD {
            Self::Height(active_at)
        } else {
            Self::Timestamp(active_at)
        }
    }

    /// Checks if a block at `height` with time `timestamp` is past this point.
    ///
    /// Strictly greater, a block exactly at the activation point is not active.
    pub fn is_reached(&self, height: i64, timestamp: i64) -> bool {
        match *self {
            Self::Height(h) => height > h,
            Self::Timestamp(t) => timestamp > t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundary() {
        assert_eq!(ActivationPoint::classify(0), ActivationPoint::Height(0));
        assert_eq!(
            ActivationPoint::classify(LOCKTIME_THRESHOLD - 1),
            ActivationPoint::Height(LOCKTIME_THRESHOLD - 1)
        );
        assert_eq!(
            ActivationPoint::classify(LOCKTIME_THRESHOLD),
            ActivationPoint::Timestamp(LOCKTIME_THRESHOLD)
        );
        assert_eq!(
            ActivationPoint::classify(1_700_000_000),
            ActivationPoint::Timestamp(1_700_000_000)
        );
    }

    #[test]
    fn test_negative_values_are_heights() {
        assert_eq!(ActivationPoint::classify(-5), ActivationPoint::Height(-5));
        assert!(ActivationPoint::Height(-5).is_reached(0, 0));
    }

    #[test]
    fn test_height_ignores_timestamp() {
        let point = ActivationPoint::Height(1000);
        assert!(!point.is_reached(1000, i64::MAX));
        assert!(point.is_reached(1001, 0));
    }

    #[test]
    fn test_timestamp_ignores_height() {
        let point = ActivationPoint::Timestamp(1_700_000_000);
        assert!(!point.is_reached(i64::MAX, 1_700_000_000));
        assert!(point.is_reached(0, 1_700_000_001));
    }

    #[test]
    fn test_params_delegate_to_classifier() {
        let params = ActivationParams::new(1_700_000_000, "02aa");
        assert_eq!(
            params.activation_point(),
            ActivationPoint::Timestamp(1_700_000_000)
        );
    }
}
