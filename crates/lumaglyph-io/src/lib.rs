//! lumaglyph-io - Image decoding for the lumaglyph pipeline
//!
//! Every reader normalizes its source to a 32 bpp [`Pix`]. Sources with an
//! alpha channel (RGBA PNG, transparent GIF, WebP with alpha, ...) come
//! back with `spp = 4`; all others are opaque with `spp = 3`.
//!
//! Format support is selected through Cargo features. All formats are
//! enabled by default.

mod error;
pub mod format;
pub mod samples;

#[cfg(feature = "bmp")]
pub mod bmp;
#[cfg(feature = "gif-format")]
pub mod gif;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "tiff-format")]
pub mod tiff;
#[cfg(feature = "webp-format")]
pub mod webp;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use log::debug;
use lumaglyph_core::Pix;
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

/// Read an image from a file path, detecting the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    debug!("reading {} as {:?}", path.display(), format);
    let file = File::open(path)?;
    read_image_format(BufReader::new(file), format)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    debug!("decoding {} bytes as {:?}", data.len(), format);
    read_image_format(Cursor::new(data), format)
}

/// Decode an image of a known format.
pub fn read_image_format<R>(reader: R, format: ImageFormat) -> IoResult<Pix>
where
    R: std::io::BufRead + std::io::Seek,
{
    match format {
        #[cfg(feature = "bmp")]
        ImageFormat::Bmp => bmp::read_bmp(reader),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[cfg(feature = "gif-format")]
        ImageFormat::Gif => gif::read_gif(reader),
        #[cfg(feature = "tiff-format")]
        ImageFormat::Tiff => tiff::read_tiff(reader),
        #[cfg(feature = "webp-format")]
        ImageFormat::WebP => webp::read_webp(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Write an image as PNG to a file path.
#[cfg(feature = "png-format")]
pub fn write_png_file<P: AsRef<Path>>(pix: &Pix, path: P) -> IoResult<()> {
    use std::io::Write;

    let file = File::create(path.as_ref())?;
    let mut writer = std::io::BufWriter::new(file);
    png::write_png(pix, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image as PNG into memory.
#[cfg(feature = "png-format")]
pub fn write_png_mem(pix: &Pix) -> IoResult<Vec<u8>> {
    let mut buf = Vec::new();
    png::write_png(pix, &mut buf)?;
    Ok(buf)
}
