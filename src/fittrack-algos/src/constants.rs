/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour.
pub const MIN_IN_HOUR: f64 = 60.0;

/// Distance covered by a single running or walking step, in metres.
pub const LEN_STEP: f64 = 0.65;

/// Distance covered by a single swimming stroke, in metres.
pub const LEN_STROKE: f64 = 1.38;
