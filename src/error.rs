use std::error::Error;
use std::fmt;

use glam::IVec2;

/// Failures of the motion queries.
///
/// None of these happen for a correctly sequenced stream of samples, so they indicate a logic
/// error on the caller side or a broken internal invariant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionError {
    /// A time delta was needed while one or both timestamps were absent.
    DeltaTimeInvalid {
        previous: Option<f64>,
        current: Option<f64>,
    },
    /// A displacement was needed but could not be derived from the history.
    DeltaPositionInvalid {
        previous: Option<IVec2>,
        current: Option<IVec2>,
    },
    /// The history did not match any motion regime.
    VelocityInvalid,
}

impl fmt::Display for MotionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotionError::DeltaTimeInvalid { previous, current } => write!(
                f,
                "invalid time delta between timestamps {previous:?} and {current:?}"
            ),
            MotionError::DeltaPositionInvalid { previous, current } => write!(
                f,
                "invalid position delta between positions {previous:?} and {current:?}"
            ),
            MotionError::VelocityInvalid => f.write_str("motion history matches no regime"),
        }
    }
}

impl Error for MotionError {}
