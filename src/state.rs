use glam::IVec2;

use crate::error::MotionError;

/// Snapshot of one input sample.
///
/// Both fields are absent in the empty state, which is what the history holds right after
/// construction or after motion has stopped.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct State {
    /// Sample time in seconds.
    pub timestamp: Option<f64>,
    /// Touch position, absent when nothing is touching.
    pub position: Option<IVec2>,
}

impl State {
    pub const fn empty() -> Self {
        Self {
            timestamp: None,
            position: None,
        }
    }

    pub const fn new(timestamp: f64, position: Option<IVec2>) -> Self {
        Self {
            timestamp: Some(timestamp),
            position,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.timestamp.is_none() && self.position.is_none()
    }
}

/// The current and previous samples.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct History {
    current: State,
    previous: State,
}

impl History {
    pub const fn new() -> Self {
        Self {
            current: State::empty(),
            previous: State::empty(),
        }
    }

    /// Shifts the current state into the previous slot and stores `state` as current.
    pub fn push(&mut self, state: State) {
        self.previous = self.current;
        self.current = state;
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn current(&self) -> &State {
        &self.current
    }

    pub fn previous(&self) -> &State {
        &self.previous
    }

    /// Returns whether no sample has been recorded since construction or the last clear.
    pub fn is_empty(&self) -> bool {
        self.current.timestamp.is_none() && self.previous.timestamp.is_none()
    }

    /// Returns both positions when the last two samples were touches.
    pub fn touch_positions(&self) -> Option<(IVec2, IVec2)> {
        Some((self.previous.position?, self.current.position?))
    }

    /// Seconds elapsed between the previous and the current sample.
    pub fn delta_time(&self) -> Result<f64, MotionError> {
        match (self.previous.timestamp, self.current.timestamp) {
            (Some(previous), Some(current)) => Ok(current - previous),
            (previous, current) => Err(MotionError::DeltaTimeInvalid { previous, current }),
        }
    }
}
