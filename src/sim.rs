use glam::{DVec2, IVec2};

use crate::error::MotionError;
use crate::kinematics::{self, Braking, Coast, CoastVelocity};
use crate::motion::{self, Motion};
use crate::state::{History, State};

/// Simulates a single pointer driven by touch samples.
///
/// While touched, the pointer follows the touch. When the touch is released while moving, the
/// pointer keeps coasting in the same direction with its speed decaying under constant braking,
/// until it comes to a stop.
///
/// Samples are expected in non-decreasing timestamp order.
#[derive(Debug, Clone)]
pub struct PointerMotionSim {
    braking: Braking,
    history: History,
    /// Velocity at the previous sample, captured on every sample without touch.
    ///
    /// Present only while coasting. Kept as direction and speed so that braking only ever
    /// subtracts from the speed.
    coast_velocity: Option<CoastVelocity>,
}

impl PointerMotionSim {
    /// Creates a simulator braking with `braking` position units per second squared.
    pub fn new(braking: f64) -> Self {
        Self {
            braking: Braking::new(braking),
            history: History::new(),
            coast_velocity: None,
        }
    }

    pub fn from_config(config: &pointer_brakes_config::Braking) -> Self {
        Self::new(config.deceleration())
    }

    /// Records a sample taken at `timestamp` seconds.
    ///
    /// `position` is the touch position, or `None` when nothing is touching. Samples without touch
    /// are ignored while the pointer isn't moving.
    ///
    /// A sample at which braking uses up the coast velocity stops the pointer right away: the
    /// history is cleared, so [`state`](Self::state) and [`last_state`](Self::last_state) have no
    /// timestamp afterwards rather than holding this sample.
    pub fn tick(&mut self, timestamp: f64, position: Option<IVec2>) -> Result<(), MotionError> {
        let _span = tracy_client::span!("PointerMotionSim::tick");

        if let Some(last) = self.history.current().timestamp {
            if timestamp < last {
                trace!("sample timestamp {timestamp} is earlier than last {last}");
            }
        }

        match position {
            Some(position) => {
                if self.coast_velocity.take().is_some() {
                    debug!("touch at {position} interrupted coasting");
                } else if self.history.current().position.is_none() {
                    debug!("touch started at {position}");
                }
            }
            None => {
                let Some(coast) = self.coast()? else {
                    trace!("ignoring sample without touch at {timestamp}: not moving");
                    return Ok(());
                };

                if self.coast_velocity.is_none() {
                    debug!("touch released with velocity {}, coasting", coast.velocity());
                }
                self.coast_velocity = Some(coast);
            }
        }

        self.history.push(State::new(timestamp, position));

        if self.motion()? == Motion::Stopped {
            debug!("braking stopped the pointer at {timestamp}");
            self.stop_motion();
        }

        Ok(())
    }

    /// Returns the current motion regime.
    pub fn motion(&self) -> Result<Motion, MotionError> {
        motion::classify(&self.history, self.coast_velocity, &self.braking)
    }

    /// Computes the current velocity in position units per second.
    ///
    /// Returns `None` when the pointer isn't moving, including right after the first touch.
    pub fn velocity(&self) -> Result<Option<DVec2>, MotionError> {
        match self.motion()? {
            Motion::Idle | Motion::Stopped => Ok(None),
            Motion::TouchDriven => kinematics::touch_velocity(&self.history).map(Some),
            Motion::Coasting => Ok(self.coasting()?.map(|coast| coast.velocity())),
        }
    }

    /// Velocity at the current sample, to be carried into coasting.
    fn coast(&self) -> Result<Option<CoastVelocity>, MotionError> {
        match self.motion()? {
            Motion::Idle | Motion::Stopped => Ok(None),
            Motion::TouchDriven => {
                let velocity = kinematics::touch_velocity(&self.history)?;
                Ok(Some(CoastVelocity::from_velocity(velocity)))
            }
            Motion::Coasting => self.coasting(),
        }
    }

    fn coasting(&self) -> Result<Option<CoastVelocity>, MotionError> {
        let Some(initial) = self.coast_velocity else {
            return Err(MotionError::VelocityInvalid);
        };

        match self.braking.coast(initial, self.history.delta_time()?) {
            Coast::Rolling(coast) => Ok(Some(coast)),
            Coast::Exhausted => Ok(None),
        }
    }

    /// Computes the displacement between the previous and the current sample.
    pub fn delta_position(&self) -> Result<Option<DVec2>, MotionError> {
        match self.motion()? {
            Motion::Idle | Motion::Stopped => Ok(None),
            Motion::TouchDriven => kinematics::touch_displacement(&self.history).map(Some),
            Motion::Coasting => {
                let Some(initial) = self.coast_velocity else {
                    return Err(MotionError::DeltaPositionInvalid {
                        previous: self.history.previous().position,
                        current: self.history.current().position,
                    });
                };

                let delta_time = self.history.delta_time()?;
                Ok(Some(self.braking.coast_displacement(initial, delta_time)))
            }
        }
    }

    /// Seconds elapsed between the previous and the current sample.
    pub fn delta_time(&self) -> Result<f64, MotionError> {
        self.history.delta_time()
    }

    /// Stops all motion and forgets the sample history.
    ///
    /// The braking magnitude is kept.
    pub fn stop_motion(&mut self) {
        self.history.clear();
        self.coast_velocity = None;
    }

    /// Returns the most recent sample.
    pub fn state(&self) -> &State {
        self.history.current()
    }

    /// Returns the sample before the most recent one.
    pub fn last_state(&self) -> &State {
        self.history.previous()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn braking(&self) -> f64 {
        self.braking.magnitude()
    }

    /// Returns the velocity captured at the previous sample while coasting.
    pub fn coast_velocity(&self) -> Option<DVec2> {
        self.coast_velocity.map(|coast| coast.velocity())
    }
}
