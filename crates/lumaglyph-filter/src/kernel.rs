//! Convolution kernels
//!
//! A kernel holds float weights, a center, and an offset added to every
//! convolved value. The named 3x3 kernels carry their divisor already
//! folded into the weights.

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
    /// Constant added after weighting
    offset: f32,
}

impl Kernel {
    /// Create a zeroed kernel with the center in the middle.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidKernel`] for zero dimensions.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        Ok(Kernel {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
            data: vec![0.0; (width * height) as usize],
            offset: 0.0,
        })
    }

    /// Create a kernel from row-major values.
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> FilterResult<Self> {
        let mut kernel = Self::new(width, height)?;
        if data.len() != kernel.data.len() {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} values for a {}x{} kernel, got {}",
                kernel.data.len(),
                width,
                height,
                data.len()
            )));
        }
        kernel.data.copy_from_slice(data);
        Ok(kernel)
    }

    /// Build a 3x3 kernel from integer weights, a divisor and an offset.
    fn fixed3(weights: [f32; 9], divisor: f32, offset: f32) -> Self {
        Kernel {
            width: 3,
            height: 3,
            cx: 1,
            cy: 1,
            data: weights.iter().map(|w| w / divisor).collect(),
            offset,
        }
    }

    /// One-dimensional horizontal Gaussian kernel.
    ///
    /// The half-width is `ceil(3 * sigma)` (at least 1) and the weights
    /// sum to 1.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidParameters`] if `sigma <= 0`.
    pub fn gaussian_1d(sigma: f32) -> FilterResult<Self> {
        if sigma.is_nan() || sigma <= 0.0 {
            return Err(FilterError::InvalidParameters(format!(
                "gaussian sigma must be > 0, got {}",
                sigma
            )));
        }
        let half = ((3.0 * sigma).ceil() as u32).max(1);
        let size = 2 * half + 1;
        let denom = 2.0 * sigma * sigma;
        let mut kernel = Self::new(size, 1)?;
        for (i, w) in kernel.data.iter_mut().enumerate() {
            let d = i as f32 - half as f32;
            *w = (-d * d / denom).exp();
        }
        kernel.normalize();
        Ok(kernel)
    }

    /// Edge enhancement: `[-1 -1 -1; -1 10 -1; -1 -1 -1] / 2`.
    pub fn edge_enhance() -> Self {
        Self::fixed3([-1., -1., -1., -1., 10., -1., -1., -1., -1.], 2.0, 0.0)
    }

    /// Edge detection: `[-1 -1 -1; -1 8 -1; -1 -1 -1]`.
    pub fn find_edges() -> Self {
        Self::fixed3([-1., -1., -1., -1., 8., -1., -1., -1., -1.], 1.0, 0.0)
    }

    /// Smoothing: `[1 1 1; 1 5 1; 1 1 1] / 13`.
    pub fn smooth() -> Self {
        Self::fixed3([1., 1., 1., 1., 5., 1., 1., 1., 1.], 13.0, 0.0)
    }

    /// Emboss: `[-1 0 0; 0 1 0; 0 0 0]` plus 128.
    pub fn emboss() -> Self {
        Self::fixed3([-1., 0., 0., 0., 1., 0., 0., 0., 0.], 1.0, 128.0)
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Constant added to every convolved value.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.data[(y * self.width + x) as usize])
        } else {
            None
        }
    }

    /// Set a value at (x, y). Out-of-range positions are ignored.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        if x < self.width && y < self.height {
            self.data[(y * self.width + x) as usize] = value;
        }
    }

    /// Normalize the kernel so that values sum to 1.
    ///
    /// Kernels summing to zero are left unchanged.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum.abs() > f32::EPSILON {
            for v in &mut self.data {
                *v /= sum;
            }
        }
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }

    /// Swap rows and columns.
    pub fn transposed(&self) -> Self {
        let mut out = Kernel {
            width: self.height,
            height: self.width,
            cx: self.cy,
            cy: self.cx,
            data: vec![0.0; self.data.len()],
            offset: self.offset,
        };
        for y in 0..self.height {
            for x in 0..self.width {
                out.data[(x * self.height + y) as usize] = self.data[(y * self.width + x) as usize];
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_length_check() {
        assert!(Kernel::from_slice(3, 3, &[0.0; 8]).is_err());
        assert!(Kernel::new(0, 3).is_err());
        let k = Kernel::from_slice(3, 1, &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(k.get(2, 0), Some(3.0));
        assert_eq!(k.get(3, 0), None);
    }

    #[test]
    fn test_gaussian_normalized_and_symmetric() {
        let k = Kernel::gaussian_1d(1.5).unwrap();
        assert_eq!(k.width(), 11);
        assert!((k.sum() - 1.0).abs() < 1e-5);
        assert_eq!(k.get(0, 0), k.get(10, 0));
        assert!(k.get(5, 0).unwrap() > k.get(4, 0).unwrap());
        assert!(Kernel::gaussian_1d(0.0).is_err());
    }

    #[test]
    fn test_named_kernel_sums() {
        assert!((Kernel::edge_enhance().sum() - 1.0).abs() < 1e-6);
        assert!(Kernel::find_edges().sum().abs() < 1e-6);
        assert!((Kernel::smooth().sum() - 1.0).abs() < 1e-6);
        assert_eq!(Kernel::emboss().offset(), 128.0);
    }

    #[test]
    fn test_transposed() {
        let k = Kernel::from_slice(3, 1, &[1.0, 2.0, 3.0]).unwrap();
        let t = k.transposed();
        assert_eq!((t.width(), t.height()), (1, 3));
        assert_eq!(t.get(0, 2), Some(3.0));
        assert_eq!(t.center_y(), 1);
    }
}
