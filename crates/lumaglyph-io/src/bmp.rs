//! BMP image format support
//!
//! Reads uncompressed Windows Bitmap (BMP) files with 1, 4, 8, 24 or
//! 32 bits per pixel.

use crate::samples::{SampleLayout, pix_from_samples};
use crate::{IoError, IoResult};
use lumaglyph_core::Pix;
use std::io::{self, Read};

/// BMP file header size
const BMP_FILE_HEADER_SIZE: usize = 14;

/// BMP info header size (BITMAPINFOHEADER)
const BMP_INFO_HEADER_SIZE: u32 = 40;

fn le_u16(b: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([b[at], b[at + 1]])
}

fn le_u32(b: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
}

/// Read a BMP image
///
/// Palette images are expanded to RGB. 32-bit images are treated as
/// carrying alpha only if some alpha byte is nonzero.
///
/// Buffers grow with the bytes actually read, so a header that claims
/// more pixels than the stream holds fails with an I/O error instead of
/// allocating up front.
pub fn read_bmp<R: Read>(mut reader: R) -> IoResult<Pix> {
    let mut file_header = [0u8; BMP_FILE_HEADER_SIZE];
    reader.read_exact(&mut file_header)?;
    if &file_header[0..2] != b"BM" {
        return Err(IoError::InvalidData("not a BMP file".to_string()));
    }
    let pixel_offset = le_u32(&file_header, 10) as u64;

    let mut info_header = [0u8; BMP_INFO_HEADER_SIZE as usize];
    reader.read_exact(&mut info_header)?;
    let header_size = le_u32(&info_header, 0);
    if header_size < BMP_INFO_HEADER_SIZE {
        return Err(IoError::InvalidData(format!(
            "unsupported BMP header size: {}",
            header_size
        )));
    }

    let width = le_u32(&info_header, 4) as i32;
    let height = le_u32(&info_header, 8) as i32;
    let planes = le_u16(&info_header, 12);
    if planes != 1 {
        return Err(IoError::InvalidData(format!(
            "unsupported number of planes: {}",
            planes
        )));
    }
    let bits_per_pixel = le_u16(&info_header, 14);
    let compression = le_u32(&info_header, 16);
    if compression != 0 && compression != 3 {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP compression: {}",
            compression
        )));
    }
    if !matches!(bits_per_pixel, 1 | 4 | 8 | 24 | 32) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported BMP bit depth: {}",
            bits_per_pixel
        )));
    }

    let width = width.unsigned_abs();
    let top_down = height < 0;
    let height = height.unsigned_abs();
    if width == 0 || height == 0 {
        return Err(lumaglyph_core::Error::InvalidDimension { width, height }.into());
    }

    skip(&mut reader, (header_size - BMP_INFO_HEADER_SIZE) as u64)?;

    // Palette entries are stored as BGRA quads.
    let mut palette = Vec::new();
    if bits_per_pixel <= 8 {
        let stated = le_u32(&info_header, 32) as usize;
        let num_colors = if stated == 0 {
            1usize << bits_per_pixel
        } else {
            stated.min(1 << bits_per_pixel)
        };
        let mut raw = vec![0u8; num_colors * 4];
        reader.read_exact(&mut raw)?;
        palette = raw.chunks_exact(4).map(|q| [q[2], q[1], q[0]]).collect();
    }

    let current_pos =
        BMP_FILE_HEADER_SIZE as u64 + header_size as u64 + palette.len() as u64 * 4;
    if pixel_offset > current_pos {
        skip(&mut reader, pixel_offset - current_pos)?;
    }

    // Rows are 4-byte aligned.
    let row_stride = (width as usize)
        .checked_mul(bits_per_pixel as usize)
        .map(|bits| bits.div_ceil(32) * 4)
        .ok_or_else(|| IoError::InvalidData(format!("BMP width {} too large", width)))?;
    let samples = if bits_per_pixel == 32 { 4 } else { 3 };
    let row_bytes = width as usize * samples;
    let mut row_buffer = Vec::new();
    let mut data = Vec::new();

    for _ in 0..height {
        row_buffer.clear();
        let read = reader
            .by_ref()
            .take(row_stride as u64)
            .read_to_end(&mut row_buffer)?;
        if read < row_stride {
            return Err(IoError::Io(io::Error::from(io::ErrorKind::UnexpectedEof)));
        }

        for x in 0..width as usize {
            match bits_per_pixel {
                24 => {
                    let p = &row_buffer[x * 3..x * 3 + 3];
                    data.extend_from_slice(&[p[2], p[1], p[0]]);
                }
                32 => {
                    let p = &row_buffer[x * 4..x * 4 + 4];
                    data.extend_from_slice(&[p[2], p[1], p[0], p[3]]);
                }
                bits => {
                    let index = palette_index(&row_buffer, x, bits);
                    let rgb = palette.get(index).ok_or_else(|| {
                        IoError::InvalidData(format!("palette index {} out of range", index))
                    })?;
                    data.extend_from_slice(rgb);
                }
            }
        }
    }

    // Bottom-up files store the last row first.
    if !top_down {
        data = data
            .chunks_exact(row_bytes)
            .rev()
            .flatten()
            .copied()
            .collect();
    }

    if bits_per_pixel == 32 {
        if data.chunks_exact(4).any(|p| p[3] != 0) {
            return pix_from_samples(width, height, SampleLayout::Rgba, &data);
        }
        let rgb: Vec<u8> = data.chunks_exact(4).flat_map(|p| [p[0], p[1], p[2]]).collect();
        return pix_from_samples(width, height, SampleLayout::Rgb, &rgb);
    }
    pix_from_samples(width, height, SampleLayout::Rgb, &data)
}

/// Discard `n` bytes, failing if the stream ends first.
fn skip<R: Read>(reader: &mut R, n: u64) -> IoResult<()> {
    let skipped = io::copy(&mut reader.by_ref().take(n), &mut io::sink())?;
    if skipped < n {
        return Err(IoError::Io(io::Error::from(io::ErrorKind::UnexpectedEof)));
    }
    Ok(())
}

fn palette_index(row: &[u8], x: usize, bits: u16) -> usize {
    match bits {
        1 => ((row[x / 8] >> (7 - (x % 8))) & 1) as usize,
        4 => {
            let byte = row[x / 2];
            if x % 2 == 0 {
                (byte >> 4) as usize
            } else {
                (byte & 0xF) as usize
            }
        }
        _ => row[x] as usize,
    }
}
