// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for the frame stack.

use crate::ContentKind;

/// Errors that can occur while pushing, popping, or persisting frames.
#[derive(Debug, thiserror::Error)]
pub enum StackError {
    /// The push would take the stack past its capacity.
    #[error("insufficient space: requested {requested} bytes, but only {available} available (capacity: {capacity})")]
    InsufficientSpace {
        requested: usize,
        available: usize,
        capacity: usize,
    },

    /// Attempted to pop with no finalized frame below the write head.
    #[error("stack underflow: no finalized frame to pop")]
    StackUnderflow,

    /// A frame index past the last finalized frame.
    #[error("frame index {index} out of range ({count} frames)")]
    IndexOutOfRange { index: usize, count: usize },

    /// A picture kind was dumped without image dimensions.
    #[error("content kind '{kind}' requires image dimensions")]
    MissingImageDims { kind: ContentKind },

    /// Attempted to allocate a zero-sized backing buffer.
    #[error("cannot allocate zero-sized buffer")]
    ZeroSizedAllocation,

    /// The system allocator could not provide the backing buffer.
    #[error("{bytes}-byte allocation failed")]
    AllocationFailed { bytes: usize },

    /// A capacity string could not be parsed.
    #[error("invalid capacity: {0}")]
    InvalidCapacity(String),

    /// An unrecognised content kind name.
    #[error("unknown content kind '{0}'; expected 'plain-data', 'packet-data', 'rgb-picture', or 'rgba-picture'")]
    UnknownKind(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A file read or write failed.
    #[error("storage error: {0}")]
    Storage(#[from] raw_storage::StorageError),
}
