//! Velocity and displacement for touch-driven and coasting motion.
//!
//! Touch-driven motion is derived directly from the difference between the last two samples.
//! Coasting motion starts from the velocity captured when the touch was released and slows down
//! under a constant-magnitude deceleration in the opposite direction of travel.

use glam::DVec2;

use crate::error::MotionError;
use crate::state::History;

/// Constant-magnitude deceleration applied while coasting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Braking {
    magnitude: f64,
}

/// Velocity of a coasting pointer, split into a unit direction and a speed.
///
/// Braking only ever changes the speed, so the direction is kept as captured on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoastVelocity {
    pub direction: DVec2,
    pub speed: f64,
}

/// Outcome of braking a coasting velocity over a time interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coast {
    /// Still moving with this velocity.
    Rolling(CoastVelocity),
    /// Braking has used up all of the velocity.
    Exhausted,
}

impl CoastVelocity {
    pub fn from_velocity(velocity: DVec2) -> Self {
        Self {
            direction: velocity.normalize_or_zero(),
            speed: velocity.length(),
        }
    }

    pub fn velocity(&self) -> DVec2 {
        self.direction * self.speed
    }
}

impl Braking {
    /// Creates braking with the given deceleration magnitude.
    ///
    /// Negative and non-finite magnitudes are replaced with zero.
    pub fn new(magnitude: f64) -> Self {
        if !magnitude.is_finite() || magnitude < 0. {
            warn!("invalid braking magnitude {magnitude}, using 0");
            return Self { magnitude: 0. };
        }

        Self { magnitude }
    }

    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Brakes `initial` for `delta_time` seconds.
    pub fn coast(&self, initial: CoastVelocity, delta_time: f64) -> Coast {
        let speed = initial.speed - self.magnitude * delta_time;
        if speed <= 0. {
            return Coast::Exhausted;
        }

        Coast::Rolling(CoastVelocity {
            direction: initial.direction,
            speed,
        })
    }

    /// Distance covered while braking `initial` for `delta_time` seconds.
    pub fn coast_displacement(&self, initial: CoastVelocity, delta_time: f64) -> DVec2 {
        let distance = initial.speed * delta_time - self.magnitude / 2. * delta_time.powi(2);
        initial.direction * distance
    }
}

/// Difference between the last two touch positions.
pub fn touch_displacement(history: &History) -> Result<DVec2, MotionError> {
    let Some((previous, current)) = history.touch_positions() else {
        return Err(MotionError::DeltaPositionInvalid {
            previous: history.previous().position,
            current: history.current().position,
        });
    };

    // Positions span the whole i32 range, so subtract in f64 where the difference is still exact.
    Ok(current.as_dvec2() - previous.as_dvec2())
}

/// Velocity between the last two touch positions.
///
/// Two touches with the same timestamp give zero velocity.
pub fn touch_velocity(history: &History) -> Result<DVec2, MotionError> {
    let delta_position = touch_displacement(history)?;
    let delta_time = history.delta_time()?;

    if delta_time == 0. {
        return Ok(DVec2::ZERO);
    }

    Ok(delta_position / delta_time)
}
