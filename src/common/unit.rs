//! Fixed-point measurement units used throughout the presentation markup.
//!
//! All lengths are English Metric Units (EMU, 914,400 per inch); angles are
//! 1/60,000 of a degree; percentage-like values are thousandths of a percent.
//! Conversions from physical units truncate toward zero, matching the
//! fixed-point convention of the target format.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_MM: i64 = 36_000;
pub const EMUS_PER_PT: i64 = 12_700;

/// One degree in the 1/60,000-degree angle unit.
pub const ANGLE_PER_DEGREE: i64 = 60_000;

/// A full turn (360 degrees) in the 1/60,000-degree angle unit.
pub const ANGLE_FULL_TURN: i64 = 21_600_000;

/// Full coverage (100%) in the thousandths-of-a-percent unit used by
/// gradient stop positions.
pub const PERCENT_FULL: u32 = 100_000;

#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

#[inline]
pub fn inch_to_emu(inch: f64) -> i64 {
    (inch * EMUS_PER_INCH as f64) as i64
}

#[inline]
pub fn cm_to_emu(cm: f64) -> i64 {
    (cm * EMUS_PER_CM as f64) as i64
}

#[inline]
pub fn mm_to_emu(mm: f64) -> i64 {
    (mm * EMUS_PER_MM as f64) as i64
}

#[inline]
pub fn emu_to_pt(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_PT as f64
}

#[inline]
pub fn degrees_to_angle(degrees: f64) -> i64 {
    (degrees * ANGLE_PER_DEGREE as f64) as i64
}

/// Normalize a signed cyclic angle into `0..ANGLE_FULL_TURN`.
///
/// Callers may pass negative angles or angles beyond a full turn; the stored
/// value is the non-negative Euclidean remainder.
///
/// # Examples
///
/// ```
/// use pitaya::common::unit::{normalize_angle, ANGLE_PER_DEGREE};
///
/// assert_eq!(normalize_angle(-90 * ANGLE_PER_DEGREE), 16_200_000);
/// assert_eq!(normalize_angle(450 * ANGLE_PER_DEGREE), 5_400_000);
/// ```
#[inline]
pub fn normalize_angle(angle: i64) -> u32 {
    angle.rem_euclid(ANGLE_FULL_TURN) as u32
}
