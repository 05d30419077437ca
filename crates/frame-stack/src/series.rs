// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Dumping frames to files and reloading them.
//!
//! Two persistence shapes are supported:
//!
//! 1. **Blob** — [`FrameStack::dump_all`] writes the committed prefix of
//!    the buffer as one headerless file. Frame boundaries are lost.
//! 2. **Series** — [`FrameStack::dump_frame_series`] writes one file per
//!    finalized frame, and [`FrameStack::load_frame_series`] pushes one
//!    frame per file back onto a stack, re-establishing the boundaries from
//!    the file sizes. File names follow [`ContentKind`].

use crate::{ContentKind, FrameStack, StackError};
use raw_storage::{read_blob, write_blob, write_rgb_image, write_rgba_image, ImageDims};
use std::path::Path;

impl FrameStack<'_> {
    /// Writes `[0, used_space())` to `path` as a single raw blob.
    ///
    /// Returns the number of bytes written.
    pub fn dump_all(&self, path: &Path) -> Result<usize, StackError> {
        let written = write_blob(path, self.used_bytes())?;
        tracing::info!("dumped {written} bytes to '{}'", path.display());
        Ok(written)
    }

    /// Writes every finalized frame to its own file.
    ///
    /// Plain and packet frames are written as raw bytes of the frame's
    /// length. Picture frames go through the PPM encoders with `dims`, which
    /// is required for those kinds; a frame shorter than `dims` demands is
    /// reported as a storage error.
    ///
    /// Returns the number of files written.
    pub fn dump_frame_series(
        &self,
        base: &str,
        kind: ContentKind,
        dims: Option<ImageDims>,
    ) -> Result<usize, StackError> {
        if kind.is_picture() && dims.is_none() {
            return Err(StackError::MissingImageDims { kind });
        }

        let count = self.frame_count();
        for index in 0..count {
            let data = self
                .frame(index)
                .ok_or(StackError::IndexOutOfRange { index, count })?;
            let path = kind.dump_path(base, index);

            match (kind, dims) {
                (ContentKind::RgbPicture, Some(dims)) => {
                    write_rgb_image(&path, data, dims)?;
                }
                (ContentKind::RgbaPicture, Some(dims)) => {
                    write_rgba_image(&path, data, dims)?;
                }
                _ => {
                    write_blob(&path, data)?;
                }
            }
        }

        tracing::info!("dumped {count} {kind} frames with base '{base}'");
        Ok(count)
    }

    /// Reloads `count` frames from a series, pushing one frame per file.
    ///
    /// Each file is read into the write head, up to `remaining_space()`
    /// bytes, and the number of bytes read is pushed. A file that cannot be
    /// opened or read still produces a zero-length frame, so check
    /// [`frame_size`](Self::frame_size) afterwards to find gaps.
    ///
    /// Returns the total number of bytes loaded.
    pub fn load_frame_series(
        &mut self,
        base: &str,
        kind: ContentKind,
        count: usize,
    ) -> Result<usize, StackError> {
        let mut total = 0;
        for index in 0..count {
            let path = kind.load_path(base, index);
            let read = match read_blob(&path, self.write_head_mut()) {
                Ok(n) => n,
                Err(e) => {
                    tracing::warn!("frame {index}: {e}; pushing an empty frame");
                    0
                }
            };
            self.push(read)?;
            total += read;
        }

        tracing::info!(
            "loaded {count} {kind} frames ({total} bytes) with base '{base}'"
        );
        Ok(total)
    }
}
