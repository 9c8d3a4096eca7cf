use crate::FloatOrInt;

pub const DEFAULT_DECELERATION: f64 = 1500.;

/// Braking applied to the pointer while it coasts after a touch is released.
#[derive(knuffel::Decode, Debug, Clone, Copy, PartialEq)]
pub struct Braking {
    /// Constant deceleration magnitude, in position units per second squared.
    #[knuffel(child, unwrap(argument), default = FloatOrInt(DEFAULT_DECELERATION))]
    pub deceleration: FloatOrInt<0, 1_000_000>,
}

impl Default for Braking {
    fn default() -> Self {
        Self {
            deceleration: FloatOrInt(DEFAULT_DECELERATION),
        }
    }
}

impl Braking {
    pub fn deceleration(&self) -> f64 {
        self.deceleration.0
    }
}
