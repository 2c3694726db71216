//! Unit conversion utilities
//!
//! The sketch works in feet, board and joist dimensions are entered in inches.
//! Display helpers format feet with a trailing `'` and inches as sixteenths.

use crate::constants::INCHES_PER_FOOT;

/// Convert inches to feet
pub fn inches_to_feet(inches: f64) -> f64 {
    inches / INCHES_PER_FOOT
}

/// Round to the nearest integer, with `.5` going towards positive infinity.
///
/// Matches JavaScript's `Math.round` for every finite input, including values
/// just below a half and integers beyond 2^52.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to `decimals` places using [`round_half_up`].
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = round_half_up(value * factor) / factor;
    // Avoid printing "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a length in feet for display, e.g. `12.5'`
///
/// * `feet` - Value in feet, rounded to two decimals
pub fn format_feet(feet: f64) -> String {
    format!("{}'", round_to(feet, 2))
}

/// Format a length in inches as a reduced fraction of 1/16", e.g. `5 1/2"`
///
/// * `inches` - Value in inches
pub fn format_inches_fraction(inches: f64) -> String {
    const DENOMINATOR: u32 = 16;

    let sign = if inches < 0.0 { "-" } else { "" };
    let magnitude = inches.abs();
    let whole = (magnitude + 1e-9).floor();
    let sixteenths = round_half_up((magnitude - whole) * DENOMINATOR as f64) as u32;

    if sixteenths == 0 {
        return format!("{}{}\"", sign, whole as i64);
    }
    if sixteenths == DENOMINATOR {
        return format!("{}{}\"", sign, whole as i64 + 1);
    }

    let divisor = gcd(sixteenths, DENOMINATOR);
    let whole_part = if whole > 0.0 {
        format!("{} ", whole as i64)
    } else {
        String::new()
    };
    format!(
        "{}{}{}/{}\"",
        sign,
        whole_part,
        sixteenths / divisor,
        DENOMINATOR / divisor
    )
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a.max(1)
}
