/// Floor division of two floats, rounding the quotient towards negative infinity.
///
/// The quotient is derived from the exact remainder rather than from `a / b`, so a
/// true quotient just below an integer never rounds up to it:
/// `floor_div(1.0, 0.1) == 9.0` while `(1.0 / 0.1).floor() == 10.0`.
///
/// Division by zero yields NaN; callers are expected to reject zero divisors.
pub fn floor_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return f64::NAN;
    }

    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && (b < 0.0) != (rem < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0_f64.copysign(a / b);
    }

    let mut floor = div.floor();
    if div - floor > 0.5 {
        floor += 1.0;
    }
    floor
}
