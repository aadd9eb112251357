//! Calibrate on a synthetic frame, then track the blob and print the
//! geometry record as JSON.

use color_target::{color_range, in_range, single_target, CalibrationParams};
use color_target_core::{init_with_level, HsvImage, RgbFrame};
use log::{info, LevelFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_with_level(LevelFilter::Debug)?;

    // frame dominated by the target color, plus an off-color corner
    let mut frame = HsvImage::filled(160, 120, [100, 150, 200]);
    for y in 0..20 {
        for x in 0..24 {
            frame.set_pixel(x, y, [10, 220, 60]);
        }
    }

    let params = CalibrationParams {
        margin: 10,
        ..CalibrationParams::default()
    };
    let range = color_range(&frame.view(), &params)?;
    info!("calibrated range: {range:?}");

    let mask = in_range(&frame.view(), &range);
    let mut canvas = RgbFrame::black(160, 120);
    match single_target(&mask, Some(&mut canvas)) {
        Some(target) => println!("{}", serde_json::to_string_pretty(&target)?),
        None => println!("no target"),
    }
    Ok(())
}
