#![no_std]

//! Compass Rose - azimuth to compass direction for phone-style sensor stacks
//!
//! Turns accelerometer and magnetometer readings into a device orientation,
//! normalizes the signed azimuth into compass degrees and names the nearest of
//! the eight cardinal and intercardinal directions.
//!
//! # Features
//!
//! - Azimuth normalization from `(-π, π]` radians to `[0°, 360°)`
//! - Eight-point direction classification with a compile-time window table
//! - Gravity/geomagnetic orientation fusion with free-fall and pole rejection
//! - Sample latch for independently arriving sensor readings
//! - `#![no_std]` and allocation-free, optional `defmt` support
//!
//! # Quick Start
//!
//! ```rust
//! use nalgebra::Vector3;
//! use compass_rose::{Compass, Direction};
//!
//! let mut compass = Compass::new();
//!
//! // Sensor readings
//! compass.update_accelerometer(Vector3::new(0.0, 0.0, 9.81)); // m/s²
//! compass.update_magnetometer(Vector3::new(-22.0, 0.0, -40.0)); // µT
//!
//! let heading = compass.heading().unwrap();
//! assert_eq!(heading.direction, Some(Direction::East));
//! assert_eq!(heading.label(), "E");
//! ```
//!
//! When the azimuth comes from elsewhere, the pure pipeline is a single call:
//!
//! ```rust
//! let heading = compass_rose::heading(3.14159);
//! assert_eq!(heading.label(), "S");
//! ```

pub mod angle;
mod compass;
pub mod direction;
mod error;
pub mod fusion;
mod math;
mod types;

// Re-export all public types and functions
pub use angle::{AzimuthDegrees, normalize};
pub use compass::{Compass, Heading, heading, heading_with_table, vector_from_values};
pub use direction::{COMPASS_ROSE, Direction, DirectionTable, Window, classify};
pub use error::CompassError;
pub use math::{DEG_TO_RAD, RAD_TO_DEG};
pub use types::*;
