//! Histogram equalization
//!
//! The histogram has 256 equal bins over `[0, 255]`, so bin `i` starts
//! at `i * 255 / 256` and the last bin is closed on the right. Each
//! intensity is mapped by linear interpolation between the bin starts
//! and the normalized cumulative counts scaled to 255. Intensities past
//! the last bin start map to 255.

use crate::{ColorError, ColorResult};
use lumaglyph_core::{FPix, Pix, PixelDepth};

const BINS: usize = 256;

fn bin_start(i: usize) -> f64 {
    i as f64 * 255.0 / BINS as f64
}

fn bin_of(v: u8) -> usize {
    ((v as usize * BINS) / 255).min(BINS - 1)
}

/// Equalization curve sampled at every 8-bit intensity.
pub fn equalization_curve(hist: &[u32; 256]) -> [f32; 256] {
    // Re-bin: the intensity histogram and the equalization bins differ.
    let mut counts = [0u64; BINS];
    for (v, &c) in hist.iter().enumerate() {
        counts[bin_of(v as u8)] += c as u64;
    }
    let total: u64 = counts.iter().sum();

    let mut cdf = [0.0f64; BINS];
    let mut acc = 0u64;
    for (i, &c) in counts.iter().enumerate() {
        acc += c;
        cdf[i] = if total == 0 {
            0.0
        } else {
            acc as f64 / total as f64 * 255.0
        };
    }

    let mut curve = [0.0f32; 256];
    for (v, out) in curve.iter_mut().enumerate() {
        let x = v as f64;
        let last = bin_start(BINS - 1);
        *out = if x >= last {
            cdf[BINS - 1]
        } else {
            let j = bin_of(v as u8);
            let (x0, x1) = (bin_start(j), bin_start(j + 1));
            cdf[j] + (cdf[j + 1] - cdf[j]) * (x - x0) / (x1 - x0)
        } as f32;
    }
    curve
}

/// Equalize an 8 bpp image into float intensities in `[0, 255]`.
///
/// The relative order of intensities is preserved; ties may merge.
pub fn equalize_histogram(pix: &Pix) -> ColorResult<FPix> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(ColorError::UnsupportedDepth {
            expected: "8 bpp",
            actual: pix.depth().bits(),
        });
    }
    let curve = equalization_curve(&pix.gray_histogram()?);
    let (w, h) = pix.dimensions();
    let mut out = FPix::new(w, h)?;
    for y in 0..h {
        for x in 0..w {
            let v = pix.get_pixel_unchecked(x, y) as usize;
            out.set_pixel_unchecked(x, y, curve[v]);
        }
    }
    Ok(out)
}
