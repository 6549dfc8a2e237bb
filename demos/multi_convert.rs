//! One field declaration, three serialization forms.
//!
//! Run with: cargo run --example multi_convert

use std::error::Error;
use triform::{convert_fields, Binary, Delimited, Json};

#[derive(Debug, Default, PartialEq)]
struct Imu {
    temperature: i16,
    gyro: [f32; 3],
}

convert_fields!(Imu { temperature, gyro });

#[derive(Debug, Default, PartialEq)]
struct Telemetry {
    id: u8,
    counter: u16,
    imu: Imu,
}

convert_fields!(Telemetry { id, counter, imu });

fn main() -> Result<(), Box<dyn Error>> {
    let telemetry = Telemetry {
        id: 1,
        counter: 2,
        imu: Imu {
            temperature: 23,
            gyro: [0.5, -0.25, 0.0],
        },
    };

    println!("Input:          {}", telemetry);
    println!("Header (CSV):   {}", telemetry.csv_header(false)?);
    println!("Output (CSV):   {}", telemetry.to_csv(false)?);
    println!("Output (JSON):  {}", telemetry.to_json_string()?);
    println!("Output (wire):  {:02X?}", telemetry.to_bytes()?);

    // Round-trip through the wire form; sequence fields keep their length,
    // so the default-constructed destination already matches.
    let mut back = Telemetry::default();
    back.read_at(&telemetry.to_bytes()?, 0)?;
    assert_eq!(back, telemetry);
    println!("Round-trip successful");

    Ok(())
}
