//! Core types and settings for the compass pipeline

use crate::math::RAD_TO_DEG;

/// Standard gravity in m/s²
pub const STANDARD_GRAVITY: f32 = 9.80665;

/// Orientation fusion settings
///
/// Thresholds used when turning an accelerometer/magnetometer pair into a
/// rotation matrix. Readings are expected in the sensor framework's native
/// units: m/s² for the accelerometer and µT for the magnetometer.
///
/// # Example
/// ```
/// use compass_rose::FusionSettings;
///
/// // Accelerometer reporting in g instead of m/s²
/// let settings = FusionSettings {
///     free_fall_gravity_squared: 0.01,
///     ..Default::default()
/// };
/// assert_eq!(settings.min_horizontal_field, 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct FusionSettings {
    /// Squared gravity magnitude below which the device is considered in free fall
    ///
    /// Defaults to one hundredth of standard gravity squared. With no gravity
    /// vector there is no "down" to align the magnetic field against.
    pub free_fall_gravity_squared: f32,
    /// Minimum magnitude of the horizontal field vector (gravity × magnetic field)
    ///
    /// Smaller values mean the magnetic field is nearly parallel to gravity,
    /// as near a magnetic pole, and the heading is meaningless.
    pub min_horizontal_field: f32,
}

impl Default for FusionSettings {
    fn default() -> Self {
        Self {
            free_fall_gravity_squared: 0.01 * STANDARD_GRAVITY * STANDARD_GRAVITY,
            min_horizontal_field: 0.1,
        }
    }
}

/// Device orientation angles in radians
///
/// - `azimuth`: rotation about the -z axis, in `(-π, π]`. 0 facing magnetic
///   north, π/2 facing east, ±π facing south and -π/2 facing west.
/// - `pitch`: rotation about the x axis, in `[-π/2, π/2]`.
/// - `roll`: rotation about the y axis, in `(-π, π]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Orientation {
    pub azimuth: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl Orientation {
    /// Angles as `[azimuth, pitch, roll]`
    pub fn to_array(self) -> [f32; 3] {
        [self.azimuth, self.pitch, self.roll]
    }

    /// Angles converted to degrees, still signed
    pub fn to_degrees(self) -> [f32; 3] {
        self.to_array().map(|angle| angle * RAD_TO_DEG)
    }
}
