use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator as _};
use thiserror::Error;

/// Kind of workout reported by the sensor block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum ActivityKind {
    Swimming,
    Running,
    SportsWalking,
}

impl ActivityKind {
    /// Code used by sensor packets to tag the workout kind.
    pub const fn code(self) -> &'static str {
        match self {
            ActivityKind::Swimming => "SWM",
            ActivityKind::Running => "RUN",
            ActivityKind::SportsWalking => "WLK",
        }
    }

    /// Positional layout of the values carried by a packet of this kind.
    pub const fn parameters(self) -> &'static [&'static str] {
        match self {
            ActivityKind::Swimming => &["action", "duration", "weight", "length_pool", "count_pool"],
            ActivityKind::Running => &["action", "duration", "weight"],
            ActivityKind::SportsWalking => &["action", "duration", "weight", "height"],
        }
    }

    pub const fn parameter_count(self) -> usize {
        self.parameters().len()
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::iter().find(|kind| kind.code() == code)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown workout code `{0}`")]
pub struct UnknownCode(pub String);

impl FromStr for ActivityKind {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownCode(s.to_owned()))
    }
}

/// A single packet as received from the sensor block: a workout code and the
/// raw positional readings for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl TrainingPackage {
    pub fn new(workout_type: impl Into<String>, data: impl Into<Vec<f64>>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data: data.into(),
        }
    }
}
