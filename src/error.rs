//! Errors reported by orientation fusion and the sample latch

use thiserror::Error;

/// Why a heading could not be produced from sensor readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum CompassError {
    /// No accelerometer reading has been received yet
    #[error("no accelerometer reading yet")]
    MissingAccelerometer,
    /// No magnetometer reading has been received yet
    #[error("no magnetometer reading yet")]
    MissingMagnetometer,
    /// Gravity reading too weak to define a down direction
    #[error("device in free fall, gravity vector too short")]
    FreeFall,
    /// Magnetic field nearly parallel to gravity
    #[error("magnetic field has no usable horizontal component")]
    DegenerateField,
    /// Raw sample buffer with fewer than three components
    #[error("sensor sample has {len} values, expected at least 3")]
    ShortSample { len: usize },
}
