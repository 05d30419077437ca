// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for raw file storage.

use std::path::PathBuf;

/// Errors that can occur while moving bytes between memory and disk.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The target file could not be opened or created.
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing to an already-open file failed.
    #[error("write to '{}' failed: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an already-open file failed.
    #[error("read from '{}' failed: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pixel data is shorter than the declared image dimensions require.
    #[error("image data too small: need {expected} bytes, got {actual}")]
    ImageTooSmall { expected: usize, actual: usize },

    /// The image byte size does not fit in `usize`.
    #[error("image dimensions {width}x{height} overflow the addressable size")]
    ImageTooLarge { width: usize, height: usize },
}

impl StorageError {
    /// Returns `true` if the failure happened while opening the file.
    pub fn is_open_failure(&self) -> bool {
        matches!(self, Self::Open { .. })
    }
}
