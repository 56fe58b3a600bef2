use crate::{
    constants::{M_IN_KM, MIN_IN_HOUR},
    helpers::float_math::floor_div,
};

pub struct RunningCalories;

/// Running energy expenditure:
/// `(18 x speed - 20) x weight / 1000 x duration_min`
impl RunningCalories {
    const SPEED_MULTIPLIER: f64 = 18.0;
    const SPEED_SHIFT: f64 = 20.0;

    /// `mean_speed` in km/h, `weight` in kg, `duration` in hours.
    pub fn calculate(mean_speed: f64, weight: f64, duration: f64) -> f64 {
        (Self::SPEED_MULTIPLIER * mean_speed - Self::SPEED_SHIFT) * weight / M_IN_KM
            * duration
            * MIN_IN_HOUR
    }
}

pub struct WalkingCalories;

/// Sports walking energy expenditure:
/// `(0.035 x weight + (speed^2 // height) x 0.029 x weight) x duration_min`
///
/// `speed^2 // height` is a floor division. With realistic walking speeds and
/// heights in centimetres it is almost always zero, which leaves only the
/// weight term. Kept as is so reports stay comparable with existing ones.
impl WalkingCalories {
    const WEIGHT_MULTIPLIER: f64 = 0.035;
    const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    /// `mean_speed` in km/h, `weight` in kg, `height` in cm, `duration` in hours.
    pub fn calculate(mean_speed: f64, weight: f64, height: f64, duration: f64) -> f64 {
        (Self::WEIGHT_MULTIPLIER * weight
            + floor_div(mean_speed.powi(2), height) * Self::SPEED_HEIGHT_MULTIPLIER * weight)
            * duration
            * MIN_IN_HOUR
    }
}

pub struct SwimmingCalories;

/// Swimming energy expenditure: `(speed + 1.1) x 2 x weight`
impl SwimmingCalories {
    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_MULTIPLIER: f64 = 2.0;

    /// `mean_speed` in km/h, `weight` in kg.
    pub fn calculate(mean_speed: f64, weight: f64) -> f64 {
        (mean_speed + Self::SPEED_SHIFT) * Self::WEIGHT_MULTIPLIER * weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn running_reference_value() {
        // (18 x 9.75 - 20) x 75 / 1000 x 1 x 60 = 699.75
        let kcal = RunningCalories::calculate(9.75, 75.0, 1.0);
        assert!((kcal - 699.75).abs() < EPS, "got {kcal}");
    }

    #[test]
    fn running_below_threshold_speed_is_negative() {
        // the formula is linear with a negative intercept
        let kcal = RunningCalories::calculate(1.0, 70.0, 1.0);
        assert!(kcal < 0.0, "got {kcal}");
    }

    #[test]
    fn walking_floor_division_drops_fraction() {
        // 5.85^2 = 34.2225, 34.2225 // 180 = 0
        let kcal = WalkingCalories::calculate(5.85, 75.0, 180.0, 1.0);
        assert!((kcal - 157.5).abs() < EPS, "got {kcal}");

        let true_division = (0.035 * 75.0 + 5.85_f64.powi(2) / 180.0 * 0.029 * 75.0) * 60.0;
        assert!((kcal - true_division).abs() > 1.0);
    }

    #[test]
    fn walking_floor_division_keeps_whole_part() {
        // 19.5^2 = 380.25, 380.25 // 180 = 2 (true quotient 2.1125)
        let kcal = WalkingCalories::calculate(19.5, 75.0, 180.0, 1.0);
        let expected = (0.035 * 75.0 + 2.0 * 0.029 * 75.0) * 60.0;
        assert!((kcal - expected).abs() < EPS, "got {kcal}");
        assert!((kcal - 418.5).abs() < EPS, "got {kcal}");
    }

    #[test]
    fn swimming_reference_value() {
        // (1.0 + 1.1) x 2 x 80 = 336
        let kcal = SwimmingCalories::calculate(1.0, 80.0);
        assert!((kcal - 336.0).abs() < EPS, "got {kcal}");
    }

    #[test]
    fn calories_scale_with_duration() {
        let one = RunningCalories::calculate(12.0, 70.0, 1.0);
        let two = RunningCalories::calculate(12.0, 70.0, 2.0);
        assert!((two - 2.0 * one).abs() < EPS);

        let one = WalkingCalories::calculate(6.0, 70.0, 175.0, 1.0);
        let two = WalkingCalories::calculate(6.0, 70.0, 175.0, 2.0);
        assert!((two - 2.0 * one).abs() < EPS);
    }
}
