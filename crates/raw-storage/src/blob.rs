// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Headerless single-blob file I/O.
//!
//! A blob file holds exactly the bytes that were written, nothing more. No
//! length prefix or framing is stored, so the reader decides how much to
//! take by the size of its destination slice.

use crate::StorageError;
use std::fs::File;
use std::io::{ErrorKind, Read, Write};
use std::path::Path;

/// Writes `data` to `path`, creating or truncating the file.
///
/// Returns the number of bytes written, which is always `data.len()` on
/// success.
pub fn write_blob(path: &Path, data: &[u8]) -> Result<usize, StorageError> {
    let mut file = File::create(path).map_err(|source| StorageError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(data).map_err(|source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("wrote {} bytes to '{}'", data.len(), path.display());
    Ok(data.len())
}

/// Reads up to `dest.len()` bytes from `path` into the front of `dest`.
///
/// Keeps reading until the file is exhausted or `dest` is full, so a short
/// count means the file was shorter than the destination. Returns the
/// number of bytes read.
pub fn read_blob(path: &Path, dest: &mut [u8]) -> Result<usize, StorageError> {
    let mut file = File::open(path).map_err(|source| StorageError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut filled = 0;
    while filled < dest.len() {
        match file.read(&mut dest[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(StorageError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }

    tracing::debug!("read {filled} bytes from '{}'", path.display());
    Ok(filled)
}
