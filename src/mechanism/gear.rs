use serde::{Deserialize, Serialize};

/// A gear in the drivetrain. The first gear decoded in a run is the motor.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Gear {
    pub name: String,
    pub number_of_teeth: u32,
    /// Gear module (tooth size), fixed per run by configuration.
    pub module: f64,
}

impl Gear {
    pub fn pitch_radius(&self) -> f64 {
        self.module * self.number_of_teeth as f64 / 2.0
    }
}
