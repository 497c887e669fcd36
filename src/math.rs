//! Angle constants and nalgebra extensions used by the compass pipeline

use nalgebra::{ComplexField, Vector3};

/// Mathematical constants
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// One full turn in degrees
pub const FULL_TURN: f32 = 360.0;

/// Half a turn in degrees
pub const HALF_TURN: f32 = 180.0;

/// Extension trait for Vector3 operations
pub trait Vector3Ext {
    /// Unit vector plus the original magnitude, or `None` for the zero vector
    fn unit_and_norm(&self) -> Option<(Vector3<f32>, f32)>;
}

impl Vector3Ext for Vector3<f32> {
    fn unit_and_norm(&self) -> Option<(Vector3<f32>, f32)> {
        let norm = ComplexField::sqrt(self.norm_squared());
        if norm > 0.0 {
            Some((*self / norm, norm))
        } else {
            None
        }
    }
}
