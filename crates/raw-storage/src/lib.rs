// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # raw-storage
//!
//! Stateless file primitives used to persist frame-stack contents.
//!
//! # Key Components
//!
//! - [`write_blob`] / [`read_blob`] — move a byte span to or from a named
//!   file, returning the number of bytes actually transferred.
//! - [`write_rgb_image`] / [`write_rgba_image`] — emit a fixed-size PPM
//!   image (`P6`) from 3-channel data, or from 4-channel data packed down
//!   to 3 channels on the way out.
//! - [`ImageDims`] — the `width × height` pair shared by both encoders.
//!
//! None of these functions keep state between calls. Every open, write and
//! read failure comes back as a [`StorageError`] carrying the offending path.
//!
//! # Example
//! ```no_run
//! use raw_storage::{read_blob, write_blob};
//! use std::path::Path;
//!
//! let written = write_blob(Path::new("/tmp/frame0"), b"hello").unwrap();
//! assert_eq!(written, 5);
//!
//! let mut dest = [0u8; 16];
//! let read = read_blob(Path::new("/tmp/frame0"), &mut dest).unwrap();
//! assert_eq!(&dest[..read], b"hello");
//! ```

mod blob;
mod error;
mod image;

pub use blob::{read_blob, write_blob};
pub use error::StorageError;
pub use image::{rgba_to_rgb, write_rgb_image, write_rgba_image, ImageDims};
