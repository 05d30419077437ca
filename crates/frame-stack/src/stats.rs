// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Push/pop statistics for diagnostics.
//!
//! [`StackStats`] accumulates over the whole life of a
//! [`FrameStack`](crate::FrameStack), surviving `reset` and `initialize`, so
//! a capture loop that reuses one stack still reports its high-water mark.

/// Cumulative statistics about frame-stack usage.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct StackStats {
    /// Successful pushes.
    pub pushes: u64,
    /// Pushes rejected for lack of space.
    pub rejected_pushes: u64,
    /// Successful pops.
    pub pops: u64,
    /// Pops attempted with nothing to pop.
    pub underflows: u64,
    /// Total bytes committed by successful pushes.
    pub pushed_bytes: u64,
    /// Highest `used_space()` ever observed.
    pub peak_used_bytes: usize,
    /// Number of times the stack was reset or re-initialized.
    pub resets: u64,
}

impl StackStats {
    pub(crate) fn record_push(&mut self, size: usize, used_after: usize) {
        self.pushes += 1;
        self.pushed_bytes += size as u64;
        if used_after > self.peak_used_bytes {
            self.peak_used_bytes = used_after;
        }
    }

    pub(crate) fn record_rejected_push(&mut self) {
        self.rejected_pushes += 1;
    }

    pub(crate) fn record_pop(&mut self) {
        self.pops += 1;
    }

    pub(crate) fn record_underflow(&mut self) {
        self.underflows += 1;
    }

    pub(crate) fn record_reset(&mut self) {
        self.resets += 1;
    }

    /// Returns a human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "Frames: {} pushed ({} rejected), {} popped ({} underflows), \
             {} bytes pushed, peak {} bytes used, {} resets",
            self.pushes,
            self.rejected_pushes,
            self.pops,
            self.underflows,
            self.pushed_bytes,
            self.peak_used_bytes,
            self.resets,
        )
    }
}
