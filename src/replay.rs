//! Replaying recorded touch samples through a simulator.
//!
//! Recordings are JSON lines, one sample per line:
//!
//! ```text
//! {"timestamp": 0.016, "position": [120, 48]}
//! {"timestamp": 0.033, "position": null}
//! ```

use std::error::Error;
use std::fmt;
use std::io::{self, BufRead};

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use crate::error::MotionError;
use crate::motion::Motion;
use crate::sim::PointerMotionSim;

/// One recorded input sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Sample time in seconds.
    pub timestamp: f64,
    /// Touch position, absent when nothing is touching.
    #[serde(default)]
    pub position: Option<IVec2>,
}

/// Simulator output after one sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub timestamp: f64,
    pub motion: Motion,
    pub velocity: Option<DVec2>,
    pub delta_position: Option<DVec2>,
}

#[derive(Debug)]
pub enum ReplayError {
    Io(io::Error),
    Parse {
        /// One-based line number.
        line: usize,
        source: serde_json::Error,
    },
    Motion {
        /// Zero-based sample index.
        index: usize,
        source: MotionError,
    },
}

/// Reads JSON-lines samples, skipping blank lines.
pub fn read_samples(reader: impl BufRead) -> Result<Vec<Sample>, ReplayError> {
    let mut samples = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.map_err(ReplayError::Io)?;
        if line.trim().is_empty() {
            continue;
        }

        let sample = serde_json::from_str(&line).map_err(|source| ReplayError::Parse {
            line: idx + 1,
            source,
        })?;
        samples.push(sample);
    }

    Ok(samples)
}

/// Feeds `samples` into `sim` in order, recording a frame after every sample.
pub fn replay(
    sim: &mut PointerMotionSim,
    samples: impl IntoIterator<Item = Sample>,
) -> Result<Vec<Frame>, ReplayError> {
    samples
        .into_iter()
        .enumerate()
        .map(|(index, sample)| {
            frame(sim, sample).map_err(|source| ReplayError::Motion { index, source })
        })
        .collect()
}

fn frame(sim: &mut PointerMotionSim, sample: Sample) -> Result<Frame, MotionError> {
    sim.tick(sample.timestamp, sample.position)?;

    Ok(Frame {
        timestamp: sample.timestamp,
        motion: sim.motion()?,
        velocity: sim.velocity()?,
        delta_position: sim.delta_position()?,
    })
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} {}", self.timestamp, self.motion)?;
        if let Some(v) = self.velocity {
            write!(f, " velocity=({:.3}, {:.3})", v.x, v.y)?;
        }
        if let Some(d) = self.delta_position {
            write!(f, " delta=({:.3}, {:.3})", d.x, d.y)?;
        }
        Ok(())
    }
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Io(_) => f.write_str("error reading samples"),
            ReplayError::Parse { line, .. } => write!(f, "error parsing sample on line {line}"),
            ReplayError::Motion { index, .. } => write!(f, "error simulating sample {index}"),
        }
    }
}

impl Error for ReplayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReplayError::Io(err) => Some(err),
            ReplayError::Parse { source, .. } => Some(source),
            ReplayError::Motion { source, .. } => Some(source),
        }
    }
}
