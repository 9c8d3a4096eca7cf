#[macro_use]
extern crate tracing;

pub mod cli;
pub mod error;
pub mod kinematics;
pub mod motion;
pub mod replay;
pub mod sim;
pub mod state;

#[cfg(test)]
mod tests;

pub use crate::error::MotionError;
pub use crate::motion::Motion;
pub use crate::sim::PointerMotionSim;
pub use crate::state::{History, State};
