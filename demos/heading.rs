use compass_rose::{Compass, heading};
use nalgebra::Vector3;

fn main() {
    let mut compass = Compass::new();

    // Turn a level device through a full circle in 30° steps
    for step in 0..12 {
        let facing = (step as f32 * 30.0).to_radians();

        // replace these with actual sensor data, accelerometer in m/s² and magnetometer in µT
        let accelerometer = Vector3::new(0.0, 0.0, 9.81);
        let magnetometer = Vector3::new(-22.0 * facing.sin(), 22.0 * facing.cos(), -40.0);

        compass.update_accelerometer(accelerometer);
        compass.update_magnetometer(magnetometer);

        match compass.heading() {
            Ok(heading) => println!("Azimuthal: {:.1}  {}", heading.degrees, heading.label()),
            Err(error) => println!("Initializing... ({error})"),
        }
    }

    // Azimuth from another orientation source
    for radians in [0.0, 1.5708, 3.14159, -3.14159, -1.5708] {
        println!("{radians:>9.5} rad -> {}", heading(radians));
    }
}
