use fittrack_types::trainings::ActivityKind;

use crate::{
    calories::{RunningCalories, SwimmingCalories, WalkingCalories},
    constants::{LEN_STEP, LEN_STROKE, M_IN_KM},
    info_message::InfoMessage,
};

/// A single workout reconstructed from a sensor packet.
///
/// `action` counts steps for running and walking and strokes for swimming,
/// `duration` is in hours and `weight` in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    pub action: u64,
    pub duration: f64,
    pub weight: f64,
    pub details: TrainingDetails,
}

/// Per-kind readings on top of the shared ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrainingDetails {
    Running,
    /// `height` in centimetres.
    SportsWalking { height: f64 },
    /// `length_pool` in metres, `count_pool` is the number of pool lengths swum.
    Swimming { length_pool: f64, count_pool: f64 },
}

impl Training {
    pub fn running(action: u64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            details: TrainingDetails::Running,
        }
    }

    pub fn sports_walking(action: u64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            details: TrainingDetails::SportsWalking { height },
        }
    }

    pub fn swimming(
        action: u64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> Self {
        Self {
            action,
            duration,
            weight,
            details: TrainingDetails::Swimming {
                length_pool,
                count_pool,
            },
        }
    }

    pub fn kind(&self) -> ActivityKind {
        match self.details {
            TrainingDetails::Running => ActivityKind::Running,
            TrainingDetails::SportsWalking { .. } => ActivityKind::SportsWalking,
            TrainingDetails::Swimming { .. } => ActivityKind::Swimming,
        }
    }

    /// Metres covered by one action.
    pub fn step_length(&self) -> f64 {
        match self.details {
            TrainingDetails::Running | TrainingDetails::SportsWalking { .. } => LEN_STEP,
            TrainingDetails::Swimming { .. } => LEN_STROKE,
        }
    }

    /// Distance in km.
    pub fn distance(&self) -> f64 {
        self.action as f64 * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h over the whole workout.
    ///
    /// Swimming measures speed by pool lengths rather than by strokes.
    pub fn mean_speed(&self) -> f64 {
        match self.details {
            TrainingDetails::Swimming {
                length_pool,
                count_pool,
            } => length_pool * count_pool / M_IN_KM / self.duration,
            _ => self.step_mean_speed(),
        }
    }

    /// Mean speed derived from the step distance, regardless of kind.
    pub fn step_mean_speed(&self) -> f64 {
        self.distance() / self.duration
    }

    /// Energy spent in kcal.
    pub fn spent_calories(&self) -> f64 {
        match self.details {
            TrainingDetails::Running => {
                RunningCalories::calculate(self.step_mean_speed(), self.weight, self.duration)
            }
            TrainingDetails::SportsWalking { height } => WalkingCalories::calculate(
                self.step_mean_speed(),
                self.weight,
                height,
                self.duration,
            ),
            TrainingDetails::Swimming { .. } => {
                SwimmingCalories::calculate(self.mean_speed(), self.weight)
            }
        }
    }

    pub fn show_training_info(&self) -> InfoMessage {
        InfoMessage {
            training_type: self.kind(),
            duration: self.duration,
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.spent_calories(),
        }
    }
}
