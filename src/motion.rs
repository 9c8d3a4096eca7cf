use std::fmt;

use serde::Serialize;

use crate::error::MotionError;
use crate::kinematics::{Braking, Coast, CoastVelocity};
use crate::state::History;

/// Motion regime of the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Motion {
    /// Nothing is moving.
    ///
    /// This includes the first touch sample after idle, which has nothing to be compared to yet.
    Idle,
    /// The last two samples are touches.
    TouchDriven,
    /// The touch was released while moving and the pointer keeps going under braking.
    Coasting,
    /// Braking has used up the coast velocity.
    ///
    /// Observably the same as [`Motion::Idle`] once the stop is committed.
    Stopped,
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Motion::Idle => "idle",
            Motion::TouchDriven => "touch-driven",
            Motion::Coasting => "coasting",
            Motion::Stopped => "stopped",
        })
    }
}

/// Decides which motion regime `history` is in.
///
/// `coast_velocity` is the velocity captured at the previous sample without touch.
pub fn classify(
    history: &History,
    coast_velocity: Option<CoastVelocity>,
    braking: &Braking,
) -> Result<Motion, MotionError> {
    if history.is_empty() {
        return Ok(Motion::Idle);
    }

    let previous = history.previous().position;
    let current = history.current().position;

    match (previous, current, coast_velocity) {
        (None, Some(_), _) => Ok(Motion::Idle),
        (Some(_), Some(_), _) => Ok(Motion::TouchDriven),
        (_, None, Some(velocity)) => match braking.coast(velocity, history.delta_time()?) {
            Coast::Rolling(_) => Ok(Motion::Coasting),
            Coast::Exhausted => Ok(Motion::Stopped),
        },
        (_, None, None) => Err(MotionError::VelocityInvalid),
    }
}

#[cfg(test)]
mod tests {
    use glam::{DVec2, IVec2};

    use super::*;
    use crate::state::State;

    fn history(states: &[State]) -> History {
        let mut history = History::new();
        for state in states {
            history.push(*state);
        }
        history
    }

    fn coasting(x: f64, y: f64) -> CoastVelocity {
        CoastVelocity::from_velocity(DVec2::new(x, y))
    }

    #[test]
    fn empty_history_is_idle() {
        let braking = Braking::new(1.);
        assert_eq!(classify(&History::new(), None, &braking), Ok(Motion::Idle));
        assert_eq!(
            classify(&History::new(), Some(coasting(1., 0.)), &braking),
            Ok(Motion::Idle)
        );
    }

    #[test]
    fn first_touch_is_idle() {
        let history = history(&[State::new(0., Some(IVec2::ZERO))]);
        assert_eq!(classify(&history, None, &Braking::new(1.)), Ok(Motion::Idle));
    }

    #[test]
    fn two_touches_are_touch_driven() {
        let history = history(&[
            State::new(0., Some(IVec2::ZERO)),
            State::new(1., Some(IVec2::ONE)),
        ]);
        assert_eq!(
            classify(&history, None, &Braking::new(1.)),
            Ok(Motion::TouchDriven)
        );
    }

    #[test]
    fn release_with_velocity_is_coasting() {
        let history = history(&[
            State::new(0., Some(IVec2::ONE)),
            State::new(1., None),
        ]);
        let braking = Braking::new(1.);
        assert_eq!(
            classify(&history, Some(coasting(3., 4.)), &braking),
            Ok(Motion::Coasting)
        );
        assert_eq!(
            classify(&history, Some(coasting(0.5, 0.)), &braking),
            Ok(Motion::Stopped)
        );
    }

    #[test]
    fn release_without_velocity_is_inconsistent() {
        let history = history(&[
            State::new(0., Some(IVec2::ONE)),
            State::new(1., None),
        ]);
        assert_eq!(
            classify(&history, None, &Braking::new(1.)),
            Err(MotionError::VelocityInvalid)
        );
    }

    #[test]
    fn display() {
        assert_eq!(Motion::TouchDriven.to_string(), "touch-driven");
        assert_eq!(Motion::Stopped.to_string(), "stopped");
    }
}
