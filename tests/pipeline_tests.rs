use compass_rose::{Compass, CompassError, Direction, FusionSettings, heading};
use nalgebra::Vector3;
use rand::prelude::*;
use rand_pcg::Pcg64;
use std::f32::consts::PI;

const EPSILON: f32 = 1e-2;

/// Horizontal strength of Earth's field (µT) used for synthetic readings
const FIELD_HORIZONTAL: f32 = 22.0;
/// Downward strength of Earth's field (µT) in the northern hemisphere
const FIELD_DOWN: f32 = 40.0;

/// Readings for a device lying flat with its top facing `azimuth` radians
fn level_readings(azimuth: f32) -> (Vector3<f32>, Vector3<f32>) {
    let gravity = Vector3::new(0.0, 0.0, 9.81);
    // Magnetic north rotates opposite to the device
    let geomagnetic = Vector3::new(
        -FIELD_HORIZONTAL * azimuth.sin(),
        FIELD_HORIZONTAL * azimuth.cos(),
        -FIELD_DOWN,
    );
    (gravity, geomagnetic)
}

/// Azimuth radians straight from the orientation routine
#[test]
fn test_end_to_end_scenarios() {
    let cases = [
        (1.5708, 90.0, Direction::East),
        (-1.5708, 270.0, Direction::West),
        (3.14159, 180.0, Direction::South),
        (-3.14159, 180.0, Direction::South),
    ];

    for (radians, degrees, direction) in cases {
        let result = heading(radians);
        assert!(
            (result.degrees.value() - degrees).abs() < EPSILON,
            "{} rad gave {}°, expected {}°",
            radians,
            result.degrees.value(),
            degrees
        );
        assert_eq!(result.direction, Some(direction), "{} rad", radians);
    }
}

/// ±π collapse onto the same heading
#[test]
fn test_pi_collapse() {
    assert_eq!(heading(PI).degrees, heading(-PI).degrees);
    assert_eq!(heading(PI).label(), heading(-PI).label());
}

/// Sensor vectors through fusion, normalization and classification
#[test]
fn test_sensor_pipeline_all_directions() {
    let mut compass = Compass::new();

    for direction in Direction::ALL {
        let bearing = direction.bearing();
        // Keep within (-π, π] the way the orientation routine reports it
        let signed = if bearing > 180.0 { bearing - 360.0 } else { bearing };
        let (gravity, geomagnetic) = level_readings(signed.to_radians());

        compass.update_accelerometer(gravity);
        compass.update_magnetometer(geomagnetic);

        let result = compass.heading().unwrap();
        let error = (result.degrees.value() - bearing).abs();
        assert!(
            error < EPSILON || (360.0 - error) < EPSILON,
            "{} read as {}°",
            direction,
            result.degrees.value()
        );
        assert_eq!(result.direction, Some(direction));
    }
}

/// Random headings through the sensor pipeline never come back unknown
#[test]
fn test_sensor_pipeline_random_headings() {
    let mut rng = Pcg64::seed_from_u64(7);
    let mut compass = Compass::new();

    for _ in 0..10_000 {
        let azimuth: f32 = rng.random_range(-PI..PI);
        let (gravity, geomagnetic) = level_readings(azimuth);
        compass.update_accelerometer(gravity);
        compass.update_magnetometer(geomagnetic);

        let result = compass.heading().unwrap();
        assert!((0.0..360.0).contains(&result.degrees.value()));
        assert!(result.direction.is_some(), "no direction for {}", azimuth);
        assert!(
            (result.azimuth_radians - azimuth).abs() < 1e-3
                || (result.azimuth_radians - azimuth).abs() > 2.0 * PI - 1e-3,
            "fused {} for true {}",
            result.azimuth_radians,
            azimuth
        );
    }
}

/// Readings from a host framework arrive as raw arrays, possibly longer than three
#[test]
fn test_raw_sensor_events() {
    let mut compass = Compass::with_settings(FusionSettings::default());
    assert_eq!(compass.heading(), Err(CompassError::MissingAccelerometer));

    compass
        .update_magnetometer_values(&[22.0, 0.0, -40.0, 0.0, 0.0, 0.0])
        .unwrap();
    assert_eq!(compass.heading(), Err(CompassError::MissingAccelerometer));

    compass.update_accelerometer_values(&[0.0, 0.0, 9.81]).unwrap();
    let result = compass.heading().unwrap();
    assert_eq!(result.label(), "W");
    assert_eq!(result.to_string(), "270.0° W");

    assert_eq!(
        compass.update_accelerometer_values(&[]),
        Err(CompassError::ShortSample { len: 0 })
    );
}

/// Errors render a readable message
#[test]
fn test_error_messages() {
    assert_eq!(
        CompassError::ShortSample { len: 2 }.to_string(),
        "sensor sample has 2 values, expected at least 3"
    );
    assert_eq!(
        CompassError::MissingMagnetometer.to_string(),
        "no magnetometer reading yet"
    );
}
