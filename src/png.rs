use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};
use log::debug;
use thiserror::Error;

use crate::synth::Pixel;

/// The fixed eight-byte PNG signature.
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("invalid dimensions: {width}x{height} with {pixels} pixels")]
    InvalidDimensions {
        width: u32,
        height: u32,
        pixels: usize,
    },
    #[error("failed to compress scanline data")]
    Compression(#[from] std::io::Error),
}

/// Wrap a payload as a PNG chunk: big-endian length, four-byte type tag,
/// payload, then a CRC-32 over tag + payload. The CRC is always computed
/// fresh from the bytes being written.
fn make_chunk(tag: [u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut chunk = Vec::with_capacity(12 + payload.len());
    chunk.extend_from_slice(&(payload.len() as u32).to_be_bytes());
    chunk.extend_from_slice(&tag);
    chunk.extend_from_slice(payload);

    let mut crc = Crc::new();
    crc.update(&tag);
    crc.update(payload);
    chunk.extend_from_slice(&crc.sum().to_be_bytes());
    chunk
}

/// Serialize a row-major RGBA buffer as a complete PNG byte stream:
/// signature, IHDR, one zlib-compressed IDAT, IEND.
///
/// Every pixel in this tool is fully opaque, so the scanlines carry plain
/// 8-bit RGB (color type 2) and the uniform alpha byte is dropped at the
/// container boundary.
pub fn encode(width: u32, height: u32, pixels: &[Pixel]) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 || pixels.len() != width as usize * height as usize {
        return Err(EncodeError::InvalidDimensions {
            width,
            height,
            pixels: pixels.len(),
        });
    }

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    // Bit depth 8, color type 2, then compression/filter/interlace method 0.
    ihdr.extend_from_slice(&[8, 2, 0, 0, 0]);

    // One filter-type byte ("None") per scanline, then the row's RGB bytes.
    let mut raw = Vec::with_capacity(height as usize * (1 + width as usize * 3));
    for row in pixels.chunks(width as usize) {
        raw.push(0);
        for &[r, g, b, _] in row {
            raw.extend_from_slice(&[r, g, b]);
        }
    }

    let mut compressor = ZlibEncoder::new(Vec::new(), Compression::best());
    compressor.write_all(&raw)?;
    let idat = compressor.finish()?;
    debug!(
        "compressed {} scanline bytes down to {}",
        raw.len(),
        idat.len()
    );

    let mut out = Vec::with_capacity(SIGNATURE.len() + 12 + ihdr.len() + 12 + idat.len() + 12);
    out.extend_from_slice(&SIGNATURE);
    out.extend_from_slice(&make_chunk(*b"IHDR", &ihdr));
    out.extend_from_slice(&make_chunk(*b"IDAT", &idat));
    out.extend_from_slice(&make_chunk(*b"IEND", &[]));
    Ok(out)
}
