use std::fmt::Display;

use fittrack_types::trainings::ActivityKind;
use serde::Serialize;
use strum::{Display as StrumDisplay, EnumString};

/// Language of the rendered workout summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum MessageLocale {
    #[default]
    En,
    Ru,
}

/// Snapshot of the metrics computed for one workout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: ActivityKind,
    /// Hours.
    pub duration: f64,
    /// Kilometres.
    pub distance: f64,
    /// km/h.
    pub speed: f64,
    /// kcal.
    pub calories: f64,
}

impl InfoMessage {
    /// Renders the summary line. Every number is printed with exactly three
    /// decimals, rounded to nearest from its binary value.
    pub fn get_message(&self, locale: MessageLocale) -> String {
        match locale {
            MessageLocale::En => format!(
                "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; Mean speed: {:.3} km/h; Spent kcal: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
            MessageLocale::Ru => format!(
                "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
                self.training_type, self.duration, self.distance, self.speed, self.calories
            ),
        }
    }
}

impl Display for InfoMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.get_message(MessageLocale::default()))
    }
}
