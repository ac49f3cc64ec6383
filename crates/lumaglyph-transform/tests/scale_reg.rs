//! Scale regression test
//!
//! Resizes synthetic images with the Lanczos filter and checks
//! geometry, flat regions and ramp monotonicity.

use lumaglyph_core::color;
use lumaglyph_test::{RegParams, synth};
use lumaglyph_transform::{aspect_height, scale_to_size};

#[test]
fn scale_reg() {
    let mut rp = RegParams::new("scale");

    // --- Aspect-corrected target heights ---
    rp.compare_values(33.0, aspect_height(100, 50, 120, 0.55) as f64, 0.0);
    rp.compare_values(21.0, aspect_height(640, 480, 50, 0.55) as f64, 0.0);
    rp.compare_values(375.0, aspect_height(640, 480, 500, 1.0) as f64, 0.0);

    // --- Downscale a ramp: still non-decreasing left to right ---
    let ramp = synth::rgb_ramp(200, 40).unwrap();
    let small = scale_to_size(&ramp, 50, 10).unwrap();
    rp.compare_values(50.0, small.width() as f64, 0.0);
    rp.compare_values(10.0, small.height() as f64, 0.0);
    let mut prev = 0u8;
    let mut monotonic = true;
    for x in 0..50 {
        let v = color::red(small.get_pixel(x, 5).unwrap());
        monotonic &= v >= prev;
        prev = v;
    }
    rp.compare_values(1.0, monotonic as u8 as f64, 0.0);
    rp.write_pix_for_display(&small, "ramp_down").unwrap();

    // --- Upscale a disk: the background corners stay exact ---
    let disk = synth::disk_on_background(30, 30, 8.0, (250, 20, 20), (10, 10, 200)).unwrap();
    let big = scale_to_size(&disk, 90, 45).unwrap();
    rp.compare_values(90.0, big.width() as f64, 0.0);
    rp.compare_values(45.0, big.height() as f64, 0.0);
    let (r, g, b) = big.get_rgb(0, 0).unwrap();
    rp.compare_values(10.0, r as f64, 0.0);
    rp.compare_values(10.0, g as f64, 0.0);
    rp.compare_values(200.0, b as f64, 0.0);
    let (r, _, _) = big.get_rgb(45, 22).unwrap();
    rp.compare_values(250.0, r as f64, 0.0);
    rp.write_pix_for_display(&big, "disk_up").unwrap();

    assert!(rp.cleanup());
}
