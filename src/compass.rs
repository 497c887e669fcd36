//! Heading pipeline: sensor readings to azimuth degrees and direction label

use core::fmt;

use crate::angle::AzimuthDegrees;
use crate::direction::{COMPASS_ROSE, Direction, DirectionTable, UNKNOWN_LABEL};
use crate::error::CompassError;
use crate::fusion::orientation_from_sensors;
use crate::types::{FusionSettings, Orientation};
use nalgebra::Vector3;

/// Azimuth in degrees together with its compass direction
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct Heading {
    /// Azimuth as reported by the orientation routine, in radians
    pub azimuth_radians: f32,
    /// Normalized azimuth
    pub degrees: AzimuthDegrees,
    /// `None` only when the azimuth was NaN
    pub direction: Option<Direction>,
}

impl Heading {
    /// Direction label, or `"N/A"` when no direction matched
    pub fn label(&self) -> &'static str {
        self.direction.map_or(UNKNOWN_LABEL, Direction::label)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} {}", self.degrees, self.label())
    }
}

/// Map an azimuth in radians to degrees and a direction
///
/// This is the whole pure pipeline; it keeps no state between calls.
///
/// # Example
/// ```
/// use compass_rose::{Direction, heading};
///
/// let heading = heading(-1.5708);
/// assert!((heading.degrees.value() - 270.0).abs() < 1e-2);
/// assert_eq!(heading.direction, Some(Direction::West));
/// ```
#[inline]
pub fn heading(azimuth_radians: f32) -> Heading {
    heading_with_table(azimuth_radians, &COMPASS_ROSE)
}

/// [`heading`] against a caller supplied table
pub fn heading_with_table(azimuth_radians: f32, table: &DirectionTable) -> Heading {
    let degrees = AzimuthDegrees::from_radians(azimuth_radians);
    Heading {
        azimuth_radians,
        degrees,
        direction: table.classify(degrees.value()),
    }
}

/// Latest accelerometer and magnetometer readings
///
/// Holds the most recent sample from each sensor. Updates arrive independently
/// and at irregular rates; a heading can be produced once both sensors have
/// reported at least once.
///
/// # Example
/// ```
/// use nalgebra::Vector3;
/// use compass_rose::{Compass, CompassError, Direction};
///
/// let mut compass = Compass::new();
/// assert_eq!(compass.heading(), Err(CompassError::MissingAccelerometer));
///
/// compass.update_accelerometer(Vector3::new(0.0, 0.0, 9.81));
/// compass.update_magnetometer(Vector3::new(0.0, -22.0, -40.0));
///
/// let heading = compass.heading().unwrap();
/// assert_eq!(heading.direction, Some(Direction::South));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Compass {
    settings: FusionSettings,
    accelerometer: Option<Vector3<f32>>,
    magnetometer: Option<Vector3<f32>>,
}

impl Compass {
    /// Create a compass with default fusion settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compass with custom fusion settings
    pub fn with_settings(settings: FusionSettings) -> Self {
        Self {
            settings,
            accelerometer: None,
            magnetometer: None,
        }
    }

    /// Fusion settings in use
    pub fn settings(&self) -> &FusionSettings {
        &self.settings
    }

    /// Replace the fusion settings, keeping the latest readings
    pub fn set_settings(&mut self, settings: FusionSettings) {
        self.settings = settings;
    }

    /// Store the latest accelerometer reading
    pub fn update_accelerometer(&mut self, accelerometer: Vector3<f32>) {
        self.accelerometer = Some(accelerometer);
    }

    /// Store the latest magnetometer reading
    pub fn update_magnetometer(&mut self, magnetometer: Vector3<f32>) {
        self.magnetometer = Some(magnetometer);
    }

    /// Store an accelerometer reading from a raw sample buffer
    ///
    /// Only the first three values are used. A shorter buffer leaves the
    /// previous reading untouched.
    pub fn update_accelerometer_values(&mut self, values: &[f32]) -> Result<(), CompassError> {
        self.accelerometer = Some(vector_from_values(values)?);
        Ok(())
    }

    /// Store a magnetometer reading from a raw sample buffer
    ///
    /// Only the first three values are used. A shorter buffer leaves the
    /// previous reading untouched.
    pub fn update_magnetometer_values(&mut self, values: &[f32]) -> Result<(), CompassError> {
        self.magnetometer = Some(vector_from_values(values)?);
        Ok(())
    }

    /// Latest accelerometer reading
    pub fn accelerometer(&self) -> Option<Vector3<f32>> {
        self.accelerometer
    }

    /// Latest magnetometer reading
    pub fn magnetometer(&self) -> Option<Vector3<f32>> {
        self.magnetometer
    }

    /// Whether both sensors have reported
    pub fn is_ready(&self) -> bool {
        self.accelerometer.is_some() && self.magnetometer.is_some()
    }

    /// Drop both readings
    pub fn reset(&mut self) {
        self.accelerometer = None;
        self.magnetometer = None;
    }

    /// Orientation from the latest pair of readings
    pub fn orientation(&self) -> Result<Orientation, CompassError> {
        let accelerometer = self
            .accelerometer
            .ok_or(CompassError::MissingAccelerometer)?;
        let magnetometer = self.magnetometer.ok_or(CompassError::MissingMagnetometer)?;

        let result = orientation_from_sensors(accelerometer, magnetometer, &self.settings);

        #[cfg(feature = "defmt-03")]
        if let Err(error) = &result {
            defmt::debug!("sample pair rejected: {}", error);
        }

        result
    }

    /// Heading from the latest pair of readings
    pub fn heading(&self) -> Result<Heading, CompassError> {
        self.orientation()
            .map(|orientation| heading(orientation.azimuth))
    }
}

/// Copy the first three components of a sample buffer
pub fn vector_from_values(values: &[f32]) -> Result<Vector3<f32>, CompassError> {
    match values {
        [x, y, z, ..] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(CompassError::ShortSample { len: values.len() }),
    }
}
