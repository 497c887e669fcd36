//! Azimuth normalization from signed radians to compass degrees

use core::f32::consts::PI;
use core::fmt;

use crate::math::{FULL_TURN, HALF_TURN};

/// Convert a signed azimuth in radians to degrees in `[0, 360)`
///
/// The orientation routine reports azimuth in `(-π, π]`: 0 when facing north,
/// π/2 facing east, ±π facing south and -π/2 facing west. Non-negative angles
/// map linearly onto `[0°, 180°]`; negative angles are shifted by π and land in
/// the upper half of the circle, so that `0 → π → -π → 0` sweeps
/// `0° → 180° → 180° → 360°`.
///
/// Input outside `(-π, π]` is not rejected; the same formula extrapolates.
/// Rounding can turn a tiny negative angle into exactly 360°, which folds back
/// onto 0°.
///
/// # Example
/// ```
/// use compass_rose::angle::normalize;
///
/// assert_eq!(normalize(0.0), 0.0);
/// assert_eq!(normalize(core::f32::consts::PI), 180.0);
/// assert_eq!(normalize(-core::f32::consts::PI), 180.0);
/// assert!((normalize(-core::f32::consts::FRAC_PI_2) - 270.0).abs() < 1e-4);
/// ```
#[inline]
pub fn normalize(azimuth_radians: f32) -> f32 {
    if azimuth_radians < 0.0 {
        let degrees = (PI + azimuth_radians) / PI * HALF_TURN + HALF_TURN;
        if degrees >= FULL_TURN {
            degrees - FULL_TURN
        } else {
            degrees
        }
    } else {
        azimuth_radians / PI * HALF_TURN
    }
}

/// Azimuth in compass degrees, `[0, 360)` for in-range input
///
/// Only produced by [`AzimuthDegrees::from_radians`], which runs [`normalize`].
/// There is no way to wrap an arbitrary degree value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct AzimuthDegrees(f32);

impl AzimuthDegrees {
    /// Normalize a signed radian azimuth
    #[inline]
    pub fn from_radians(azimuth_radians: f32) -> Self {
        Self(normalize(azimuth_radians))
    }

    /// Degree value
    #[inline]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl From<AzimuthDegrees> for f32 {
    fn from(azimuth: AzimuthDegrees) -> Self {
        azimuth.0
    }
}

impl fmt::Display for AzimuthDegrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*}°", precision, self.0),
            None => write!(f, "{}°", self.0),
        }
    }
}
