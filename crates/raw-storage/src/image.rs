// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Fixed-size PPM (`P6`) image encoders.
//!
//! Both encoders emit the same textual header, `P6\n{width} {height}\n255\n`,
//! followed by `height` rows of `width * 3` channel-interleaved bytes.
//! [`write_rgba_image`] accepts 4-channel input and drops the fourth channel
//! of every pixel before writing.
//!
//! There is no matching decoder. Readers that need the pixels back load the
//! file as a raw blob and skip the header themselves.

use crate::StorageError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Bytes per pixel in the encoded image.
const RGB_CHANNELS: usize = 3;

/// Bytes per pixel in 4-channel source data.
const RGBA_CHANNELS: usize = 4;

/// Width and height of a fixed-size image frame, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageDims {
    pub width: usize,
    pub height: usize,
}

impl ImageDims {
    /// Creates a new dimension pair.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of pixels in one image, or `None` on overflow.
    pub fn pixels(&self) -> Option<usize> {
        self.width.checked_mul(self.height)
    }

    /// Size in bytes of a 3-channel image, or `None` on overflow.
    pub fn rgb_len(&self) -> Option<usize> {
        self.pixels()?.checked_mul(RGB_CHANNELS)
    }

    /// Size in bytes of a 4-channel image, or `None` on overflow.
    pub fn rgba_len(&self) -> Option<usize> {
        self.pixels()?.checked_mul(RGBA_CHANNELS)
    }

    /// Image size and row length in bytes for `channels` bytes per pixel.
    fn layout(&self, channels: usize) -> Result<(usize, usize), StorageError> {
        let too_large = || StorageError::ImageTooLarge {
            width: self.width,
            height: self.height,
        };
        let row_len = self.width.checked_mul(channels).ok_or_else(too_large)?;
        let total = row_len.checked_mul(self.height).ok_or_else(too_large)?;
        Ok((total, row_len))
    }

    /// The PPM header that precedes the pixel data.
    pub fn ppm_header(&self) -> String {
        format!("P6\n{} {}\n255\n", self.width, self.height)
    }
}

/// Writes 3-channel pixel data as a PPM image.
///
/// `data` must hold at least `dims.rgb_len()` bytes; anything beyond that is
/// ignored. Returns the total file size in bytes (header included).
pub fn write_rgb_image(path: &Path, data: &[u8], dims: ImageDims) -> Result<usize, StorageError> {
    let (expected, row_len) = dims.layout(RGB_CHANNELS)?;
    if data.len() < expected {
        return Err(StorageError::ImageTooSmall {
            expected,
            actual: data.len(),
        });
    }

    let mut out = create(path)?;
    let header = dims.ppm_header();
    write(&mut out, path, header.as_bytes())?;

    if expected > 0 {
        for row in data[..expected].chunks_exact(row_len) {
            write(&mut out, path, row)?;
        }
    }
    flush(&mut out, path)?;

    tracing::debug!(
        "wrote {}x{} RGB image to '{}'",
        dims.width,
        dims.height,
        path.display()
    );
    Ok(header.len() + expected)
}

/// Writes 4-channel pixel data as a 3-channel PPM image.
///
/// Each row is packed into a scratch row buffer that lives only for the
/// duration of this call. `data` must hold at least `dims.rgba_len()` bytes.
/// Returns the total file size in bytes (header included).
pub fn write_rgba_image(path: &Path, data: &[u8], dims: ImageDims) -> Result<usize, StorageError> {
    let (expected, src_row_len) = dims.layout(RGBA_CHANNELS)?;
    let (rgb_len, rgb_row_len) = dims.layout(RGB_CHANNELS)?;
    if data.len() < expected {
        return Err(StorageError::ImageTooSmall {
            expected,
            actual: data.len(),
        });
    }

    let mut out = create(path)?;
    let header = dims.ppm_header();
    write(&mut out, path, header.as_bytes())?;

    if expected > 0 {
        let mut row = vec![0u8; rgb_row_len];
        for src_row in data[..expected].chunks_exact(src_row_len) {
            rgba_to_rgb(src_row, &mut row);
            write(&mut out, path, &row)?;
        }
    }
    flush(&mut out, path)?;

    tracing::debug!(
        "wrote {}x{} RGBA->RGB image to '{}'",
        dims.width,
        dims.height,
        path.display()
    );
    Ok(header.len() + rgb_len)
}

/// Packs RGBA pixels from `src` into RGB pixels in `dest`.
///
/// Converts `min(src.len() / 4, dest.len() / 3)` pixels and returns that
/// count. Trailing partial pixels on either side are left alone.
pub fn rgba_to_rgb(src: &[u8], dest: &mut [u8]) -> usize {
    let mut converted = 0;
    for (rgba, rgb) in src
        .chunks_exact(RGBA_CHANNELS)
        .zip(dest.chunks_exact_mut(RGB_CHANNELS))
    {
        rgb.copy_from_slice(&rgba[..RGB_CHANNELS]);
        converted += 1;
    }
    converted
}

fn create(path: &Path) -> Result<BufWriter<File>, StorageError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| StorageError::Open {
            path: path.to_path_buf(),
            source,
        })
}

fn write(out: &mut BufWriter<File>, path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    out.write_all(bytes).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn flush(out: &mut BufWriter<File>, path: &Path) -> Result<(), StorageError> {
    out.flush().map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })
}
