// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Backing-buffer capacity and human-readable parsing.
//!
//! A [`Capacity`] is the size of the buffer a frame stack carves frames out
//! of. It parses the suffixed strings used on the command line and in TOML
//! configuration.

use crate::StackError;
use std::fmt;

const KB: usize = 1024;
const MB: usize = 1024 * KB;
const GB: usize = 1024 * MB;

/// The size of a frame stack's backing buffer.
///
/// # Parsing
/// Supports human-readable strings with binary suffixes:
/// - `"64M"` or `"64MB"` → 64 × 1024² bytes
/// - `"1G"` or `"1GB"` → 1 × 1024³ bytes
/// - `"512K"` or `"512KB"` → 512 × 1024 bytes
/// - `"300"` or `"300B"` → raw byte count
///
/// # Examples
/// ```
/// use frame_stack::Capacity;
///
/// let c = Capacity::from_mb(64);
/// assert_eq!(c.as_bytes(), 64 * 1024 * 1024);
///
/// let c = Capacity::parse("512K").unwrap();
/// assert_eq!(c.as_bytes(), 512 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Capacity {
    bytes: usize,
}

impl Capacity {
    /// Creates a capacity from a byte count.
    pub fn from_bytes(bytes: usize) -> Self {
        Self { bytes }
    }

    /// Creates a capacity from kilobytes.
    pub fn from_kb(kb: usize) -> Self {
        Self { bytes: kb * KB }
    }

    /// Creates a capacity from megabytes.
    pub fn from_mb(mb: usize) -> Self {
        Self { bytes: mb * MB }
    }

    /// Returns the capacity in bytes.
    pub fn as_bytes(&self) -> usize {
        self.bytes
    }

    /// Parses a human-readable capacity string. Case-insensitive.
    pub fn parse(s: &str) -> Result<Self, StackError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(StackError::InvalidCapacity("empty string".into()));
        }

        let upper = s.to_uppercase();
        let (num_str, multiplier) = [
            ("GB", GB),
            ("G", GB),
            ("MB", MB),
            ("M", MB),
            ("KB", KB),
            ("K", KB),
            ("B", 1),
        ]
        .iter()
        .find(|(suffix, _)| upper.ends_with(suffix))
        .and_then(|(suffix, mult)| {
            let end = s.len().checked_sub(suffix.len())?;
            s.get(..end).map(|num| (num, *mult))
        })
        .unwrap_or((s, 1));

        let value: usize = num_str.trim().parse().map_err(|_| {
            StackError::InvalidCapacity(format!(
                "'{s}': expected a number followed by an optional suffix (K, M, G)"
            ))
        })?;

        let bytes = value
            .checked_mul(multiplier)
            .ok_or_else(|| StackError::InvalidCapacity(format!("'{s}' overflows")))?;

        if bytes == 0 {
            return Err(StackError::ZeroSizedAllocation);
        }

        Ok(Self { bytes })
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bytes >= GB && self.bytes % GB == 0 {
            write!(f, "{} GB", self.bytes / GB)
        } else if self.bytes >= MB && self.bytes % MB == 0 {
            write!(f, "{} MB", self.bytes / MB)
        } else if self.bytes >= KB && self.bytes % KB == 0 {
            write!(f, "{} KB", self.bytes / KB)
        } else {
            write!(f, "{} B", self.bytes)
        }
    }
}
