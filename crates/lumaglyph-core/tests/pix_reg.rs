//! Pix container regression test
//!
//! Exercises channel extraction, gray conversion, histograms, alpha
//! blending and the mean-color statistic on synthetic images.

use lumaglyph_core::{FPix, Pix, PixMut, PixelDepth, RgbComponent, color};
use lumaglyph_test::{RegParams, synth};

#[test]
fn pix_reg() {
    let mut rp = RegParams::new("pix");

    // Writing a channel back into a copy reproduces the source.
    let noise = synth::noise_rgb(17, 9, 7).unwrap();
    let g = noise.get_rgb_component(RgbComponent::Green).unwrap();
    let mut copy = noise.to_mut();
    copy.set_rgb_component(&g, RgbComponent::Green).unwrap();
    rp.compare_pix(&noise, &copy.into());
    let (_, g0, _) = noise.get_rgb(3, 4).unwrap();
    rp.compare_values(g0 as f64, g.get_pixel(3, 4).unwrap() as f64, 0.0);

    // Luminance of a ramp is the ramp itself.
    let ramp = synth::rgb_ramp(64, 3).unwrap();
    let lum = ramp.convert_rgb_to_luminance().unwrap();
    rp.compare_pix(&synth::gray_ramp(64, 3).unwrap(), &lum);

    // Histogram of a ramp: one count per column per row.
    let hist = lum.gray_histogram().unwrap();
    rp.compare_values(3.0, hist[0] as f64, 0.0);
    rp.compare_values(3.0, hist[255] as f64, 0.0);
    rp.compare_values(192.0, hist.iter().sum::<u32>() as f64, 0.0);

    // FPix conversion keeps values exactly.
    let fpix = FPix::from_pix(&lum).unwrap();
    for x in [0, 17, 63] {
        rp.compare_values(
            lum.get_pixel(x, 1).unwrap() as f64,
            fpix.get_pixel(x, 1).unwrap() as f64,
            0.0,
        );
    }

    assert!(rp.cleanup());
}

#[test]
fn pix_alpha_reg() {
    let mut rp = RegParams::new("pix_alpha");

    let mut pm = PixMut::new(4, 1, PixelDepth::Bit32).unwrap();
    pm.set_rgba(0, 0, 0, 0, 0, 255).unwrap();
    pm.set_rgba(1, 0, 0, 0, 0, 0).unwrap();
    pm.set_rgba(2, 0, 200, 100, 0, 255).unwrap();
    pm.set_rgba(3, 0, 100, 0, 50, 64).unwrap();
    pm.set_spp(4).unwrap();
    let pix: Pix = pm.into();

    // Mean over pixels with alpha > 128: pixels 0 and 2.
    let mean = pix.mean_rgb_where_alpha_above(128).unwrap().unwrap();
    rp.compare_values(100.0, mean.0, 1e-9);
    rp.compare_values(50.0, mean.1, 1e-9);
    rp.compare_values(0.0, mean.2, 1e-9);

    // Compositing over gray.
    let flat = pix.blend_over_color((128, 128, 128)).unwrap();
    rp.compare_values(0.0, flat.spp() as f64 - 3.0, 0.0);
    let (r1, g1, b1) = flat.get_rgb(1, 0).unwrap();
    rp.compare_values(128.0, r1 as f64, 0.0);
    rp.compare_values(128.0, g1 as f64, 0.0);
    rp.compare_values(128.0, b1 as f64, 0.0);
    let p3 = flat.get_pixel(3, 0).unwrap();
    // 100 * 64/255 + 128 * 191/255 = 121.0
    rp.compare_values(121.0, color::red(p3) as f64, 0.0);
    rp.compare_values(255.0, color::alpha(p3) as f64, 0.0);

    assert!(rp.cleanup());
}
