//! Orientation from gravity and geomagnetic readings
//!
//! Aligns the measured gravity vector with "up" and the horizontal part of the
//! magnetic field with "north" to build a rotation matrix, then extracts
//! azimuth, pitch and roll from it.
//!
//! The device frame has x pointing to the right of the screen, y toward the
//! top of the screen and z out of the screen. A device lying flat reads
//! `(0, 0, +g)` on the accelerometer.

use crate::error::CompassError;
use crate::math::Vector3Ext;
use crate::types::{FusionSettings, Orientation};
use nalgebra::{ComplexField, Matrix3, RealField, Vector3};

/// Calculate the rotation matrix from device coordinates to world coordinates
///
/// World coordinates are east, north and up. The rows of the returned matrix
/// are the east, north and up axes expressed in device coordinates.
///
/// # Arguments
/// * `gravity` - Accelerometer reading while the device is not accelerating
/// * `geomagnetic` - Magnetometer reading
/// * `settings` - Rejection thresholds
///
/// # Errors
/// * [`CompassError::FreeFall`] when the gravity reading is too weak
/// * [`CompassError::DegenerateField`] when the field is nearly parallel to gravity
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_rose::{FusionSettings, fusion::rotation_matrix};
///
/// let gravity = Vector3::new(0.0, 0.0, 9.81);       // lying flat
/// let geomagnetic = Vector3::new(0.0, 22.0, -40.0); // top of the device faces north
/// let rotation = rotation_matrix(gravity, geomagnetic, &FusionSettings::default()).unwrap();
/// assert!((rotation[(0, 0)] - 1.0).abs() < 1e-6);
/// ```
pub fn rotation_matrix(
    gravity: Vector3<f32>,
    geomagnetic: Vector3<f32>,
    settings: &FusionSettings,
) -> Result<Matrix3<f32>, CompassError> {
    if gravity.norm_squared() < settings.free_fall_gravity_squared {
        return Err(CompassError::FreeFall);
    }

    // East: field × gravity
    let (east, horizontal_field) = geomagnetic
        .cross(&gravity)
        .unit_and_norm()
        .ok_or(CompassError::DegenerateField)?;
    if horizontal_field < settings.min_horizontal_field {
        return Err(CompassError::DegenerateField);
    }

    let up = gravity.unit_and_norm().ok_or(CompassError::FreeFall)?.0;

    // North: up × east, already unit length
    let north = up.cross(&east);

    Ok(Matrix3::from_rows(&[
        east.transpose(),
        north.transpose(),
        up.transpose(),
    ]))
}

/// Extract orientation angles from a rotation matrix built by [`rotation_matrix`]
///
/// # Returns
/// Azimuth, pitch and roll in radians
pub fn orientation(rotation: &Matrix3<f32>) -> Orientation {
    Orientation {
        azimuth: RealField::atan2(rotation[(0, 1)], rotation[(1, 1)]),
        pitch: ComplexField::asin(-rotation[(2, 1)]),
        roll: RealField::atan2(-rotation[(2, 0)], rotation[(2, 2)]),
    }
}

/// Fuse an accelerometer/magnetometer pair into orientation angles
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_rose::{FusionSettings, fusion::orientation_from_sensors};
///
/// let gravity = Vector3::new(0.0, 0.0, 9.81);
/// let geomagnetic = Vector3::new(-22.0, 0.0, -40.0); // top of the device faces east
/// let angles = orientation_from_sensors(gravity, geomagnetic, &FusionSettings::default()).unwrap();
/// assert!((angles.azimuth - core::f32::consts::FRAC_PI_2).abs() < 1e-5);
/// ```
pub fn orientation_from_sensors(
    gravity: Vector3<f32>,
    geomagnetic: Vector3<f32>,
    settings: &FusionSettings,
) -> Result<Orientation, CompassError> {
    rotation_matrix(gravity, geomagnetic, settings).map(|rotation| orientation(&rotation))
}
