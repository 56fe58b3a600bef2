use fittrack_types::trainings::{ActivityKind, TrainingPackage, UnknownCode};

use crate::{Training, TrainingError};

/// Builds a [`Training`] from a workout code and its positional readings.
///
/// | code  | readings                                          |
/// |-------|---------------------------------------------------|
/// | `SWM` | action, duration, weight, length_pool, count_pool |
/// | `RUN` | action, duration, weight                          |
/// | `WLK` | action, duration, weight, height                  |
///
/// `action` must be a whole count below 2^64. Every reading must be finite and
/// non-negative; `duration` and `height` must also be non-zero. Zero `weight`,
/// `length_pool` and `count_pool` are accepted and simply yield zero terms.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Training, TrainingError> {
    let kind = workout_type
        .parse::<ActivityKind>()
        .map_err(|UnknownCode(code)| TrainingError::UnknownActivityKind(code))?;

    let readings = PackageReadings::new(kind, data)?;
    let training = match kind {
        ActivityKind::Swimming => Training::swimming(
            readings.action()?,
            readings.divisor(1)?,
            readings.value(2),
            readings.value(3),
            readings.value(4),
        ),
        ActivityKind::Running => Training::running(
            readings.action()?,
            readings.divisor(1)?,
            readings.value(2),
        ),
        ActivityKind::SportsWalking => Training::sports_walking(
            readings.action()?,
            readings.divisor(1)?,
            readings.value(2),
            readings.divisor(3)?,
        ),
    };

    Ok(training)
}

impl TryFrom<&TrainingPackage> for Training {
    type Error = TrainingError;

    fn try_from(package: &TrainingPackage) -> Result<Self, Self::Error> {
        read_package(&package.workout_type, &package.data)
    }
}

/// Readings already checked for count and sign.
struct PackageReadings<'a> {
    kind: ActivityKind,
    data: &'a [f64],
}

impl<'a> PackageReadings<'a> {
    fn new(kind: ActivityKind, data: &'a [f64]) -> Result<Self, TrainingError> {
        let expected = kind.parameter_count();
        if data.len() != expected {
            return Err(TrainingError::InvalidParameters {
                kind,
                reason: format!(
                    "expected {} values [{}], got {}",
                    expected,
                    kind.parameters().join(", "),
                    data.len()
                ),
            });
        }

        for (name, value) in kind.parameters().iter().zip(data) {
            if !value.is_finite() || (value.is_sign_negative() && *value != 0.0) {
                return Err(TrainingError::InvalidParameters {
                    kind,
                    reason: format!("{name} must be a finite non-negative number, got {value}"),
                });
            }
        }

        Ok(Self { kind, data })
    }

    fn value(&self, index: usize) -> f64 {
        self.data[index]
    }

    fn action(&self) -> Result<u64, TrainingError> {
        let action = self.value(0);
        if action.fract() != 0.0 || action >= u64::MAX as f64 {
            return Err(TrainingError::InvalidParameters {
                kind: self.kind,
                reason: format!("action must be a whole count, got {action}"),
            });
        }
        Ok(action as u64)
    }

    /// A reading the metrics divide by.
    fn divisor(&self, index: usize) -> Result<f64, TrainingError> {
        let value = self.value(index);
        if value == 0.0 {
            return Err(TrainingError::ArithmeticDegenerate {
                kind: self.kind,
                field: self.kind.parameters()[index],
            });
        }
        Ok(value)
    }
}
