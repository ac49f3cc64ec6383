//! lumaglyph-test - Regression test framework for lumaglyph
//!
//! Provides [`RegParams`], which records value, image and string
//! comparisons and reports them all at the end of a test, plus builders
//! for the synthetic images the tests use as input.
//!
//! # Usage
//!
//! ```ignore
//! use lumaglyph_test::RegParams;
//!
//! let mut rp = RegParams::new("resize");
//! rp.compare_values(33.0, height as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "display" to also write intermediate images
//!   under `tests/regout` at the workspace root

mod error;
mod params;
pub mod synth;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // lumaglyph-test is at crates/lumaglyph-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
