// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Stack-discipline sub-allocator over a borrowed byte buffer.
//!
//! The [`FrameStack`] is the central data structure of the crate. It:
//!
//! 1. Carves consecutive, non-overlapping frames out of one caller-owned
//!    buffer. Each push finalizes the region at the write head and moves the
//!    head forward.
//! 2. Enforces a hard capacity: a push that would take `used_space()` past
//!    the buffer length returns `Err(InsufficientSpace)` and changes nothing.
//! 3. Tracks push/pop statistics for diagnostics.
//!
//! # Layout
//! ```text
//!  offset 0                                                  capacity
//!  ├── frame 0 ──┼──── frame 1 ────┼── head ─────────────────────┤
//!  │   len = a   │     len = b     │  next write goes here       │
//! ```
//!
//! Frames are stored as `{offset, len}` pairs into the buffer, never as
//! addresses. Every byte access goes through slice indexing, so a frame can
//! never reach past the end of the buffer.
//!
//! # Pop semantics
//! [`FrameStack::pop`] drops the most recently introduced frame *boundary*;
//! it does not reclaim the bytes of the most recent push. Popping discards
//! the head and re-opens the last finalized frame as the new head, which
//! keeps its old length. `used_space()` is reduced by the discarded head's
//! length, which is zero for a head that was never re-opened:
//!
//! ```
//! use frame_stack::FrameStack;
//!
//! let mut buf = [0u8; 300];
//! let mut stack = FrameStack::new(&mut buf);
//! stack.push(100).unwrap();
//! stack.pop().unwrap();
//! assert_eq!(stack.used_space(), 100);
//! assert_eq!(stack.frame_count(), 0);
//! ```

use crate::{StackError, StackStats};

/// One region of the backing buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    /// Byte offset from the start of the buffer.
    pub offset: usize,
    /// Length in bytes.
    pub len: usize,
}

impl Frame {
    /// One past the last byte of the frame.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// A push/pop sub-allocator over a borrowed buffer.
///
/// # Example
/// ```
/// use frame_stack::FrameStack;
///
/// let mut buf = [0u8; 300];
/// let mut stack = FrameStack::new(&mut buf);
///
/// // `push` returns the offset where the *next* frame will start.
/// assert_eq!(stack.push(100).unwrap(), 100);
/// assert_eq!(stack.push(150).unwrap(), 250);
/// assert_eq!(stack.used_space(), 250);
///
/// // 250 + 60 > 300: rejected, nothing changes.
/// assert!(stack.push(60).is_err());
/// assert_eq!(stack.frame_count(), 2);
/// ```
pub struct FrameStack<'a> {
    /// The borrowed backing buffer. Its length is the capacity.
    buffer: &'a mut [u8],
    /// Bytes committed by pushes.
    used: usize,
    /// Finalized frames, oldest first.
    frames: Vec<Frame>,
    /// The open entry at the write head. `len` is non-zero only after a pop
    /// has re-opened a finalized frame.
    head: Frame,
    stats: StackStats,
}

impl<'a> FrameStack<'a> {
    /// Creates an empty stack over `buffer`.
    pub fn new(buffer: &'a mut [u8]) -> Self {
        tracing::debug!("frame stack created over {} bytes", buffer.len());
        Self {
            buffer,
            used: 0,
            frames: Vec::new(),
            head: Frame::default(),
            stats: StackStats::default(),
        }
    }

    /// Re-targets the stack at `buffer` and discards all frame history.
    ///
    /// Statistics are kept.
    pub fn initialize(&mut self, buffer: &'a mut [u8]) {
        self.buffer = buffer;
        self.reset();
    }

    /// Discards all frame history, keeping the current buffer.
    pub fn reset(&mut self) {
        self.used = 0;
        self.frames.clear();
        self.head = Frame::default();
        self.stats.record_reset();
        tracing::debug!("frame stack reset ({} bytes)", self.buffer.len());
    }

    /// Offset at which the next frame will be written.
    pub fn current_handle(&self) -> usize {
        self.head.offset
    }

    /// Start offset of frame `index`, counting the head as the entry after
    /// the last finalized frame.
    ///
    /// Returns `None` for `index > frame_count()`.
    pub fn handle_at(&self, index: usize) -> Option<usize> {
        match index.cmp(&self.frames.len()) {
            std::cmp::Ordering::Less => Some(self.frames[index].offset),
            std::cmp::Ordering::Equal => Some(self.head.offset),
            std::cmp::Ordering::Greater => None,
        }
    }

    /// Number of finalized frames. The head is not counted.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Length of finalized frame `index`, or 0 if `index >= frame_count()`.
    ///
    /// A zero return is ambiguous with a legitimately empty frame; check the
    /// index against [`frame_count`](Self::frame_count) to tell them apart.
    pub fn frame_size(&self, index: usize) -> usize {
        self.frames.get(index).map_or(0, |f| f.len)
    }

    /// Total size of the backing buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes still available to push: `capacity - used`.
    pub fn remaining_space(&self) -> usize {
        self.capacity() - self.used
    }

    /// Bytes committed by pushes.
    pub fn used_space(&self) -> usize {
        self.used
    }

    /// Finalizes `size` bytes at the write head as a new frame.
    ///
    /// Returns the offset of the *new* write head, i.e. where the next frame
    /// will start. The frame just pushed starts at the previous head, which
    /// is also `handle_at(frame_count() - 1)`.
    ///
    /// Returns `Err(InsufficientSpace)` if `used_space() + size` would exceed
    /// the capacity; the stack is left unchanged.
    pub fn push(&mut self, size: usize) -> Result<usize, StackError> {
        let capacity = self.capacity();
        if size > capacity - self.used {
            self.stats.record_rejected_push();
            tracing::warn!(
                "push of {size} bytes rejected: {} of {capacity} bytes available",
                capacity - self.used,
            );
            return Err(StackError::InsufficientSpace {
                requested: size,
                available: capacity - self.used,
                capacity,
            });
        }

        let mut finalized = self.head;
        finalized.len = size;
        self.frames.push(finalized);
        self.head = Frame {
            offset: finalized.end(),
            len: 0,
        };
        self.used += size;
        self.stats.record_push(size, self.used);

        tracing::trace!(
            "pushed frame {} ({size} bytes at offset {})",
            self.frames.len() - 1,
            finalized.offset,
        );
        Ok(self.head.offset)
    }

    /// Drops the most recent frame boundary.
    ///
    /// The last finalized frame becomes the head again and its offset is
    /// returned. `used_space()` drops by the discarded head's length, which
    /// is zero unless an earlier pop re-opened it, so a pop straight after a
    /// push does not give back the bytes of that push.
    ///
    /// Returns `Err(StackUnderflow)` if there is no finalized frame.
    pub fn pop(&mut self) -> Result<usize, StackError> {
        let Some(reopened) = self.frames.pop() else {
            self.stats.record_underflow();
            tracing::warn!("pop on a frame stack with no finalized frames");
            return Err(StackError::StackUnderflow);
        };

        self.used -= self.head.len;
        self.head = reopened;
        self.stats.record_pop();

        tracing::trace!("popped to offset {} ({} bytes used)", self.head.offset, self.used);
        Ok(self.head.offset)
    }

    /// Copies `data` to the write head and pushes it as a frame.
    ///
    /// Fails like [`push`](Self::push), without touching the buffer.
    pub fn push_bytes(&mut self, data: &[u8]) -> Result<usize, StackError> {
        if data.len() > self.remaining_space() {
            return self.push(data.len());
        }
        self.write_head_mut()[..data.len()].copy_from_slice(data);
        self.push(data.len())
    }

    /// The writable region at the head: up to `remaining_space()` bytes
    /// starting at `current_handle()`.
    pub fn write_head_mut(&mut self) -> &mut [u8] {
        let start = self.head.offset.min(self.buffer.len());
        let end = start
            .saturating_add(self.remaining_space())
            .min(self.buffer.len());
        &mut self.buffer[start..end]
    }

    /// Bytes of finalized frame `index`.
    pub fn frame(&self, index: usize) -> Option<&[u8]> {
        let f = self.frames.get(index)?;
        self.buffer.get(f.offset..f.end())
    }

    /// Mutable bytes of finalized frame `index`.
    pub fn frame_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        let f = *self.frames.get(index)?;
        self.buffer.get_mut(f.offset..f.end())
    }

    /// The committed prefix of the buffer, `[0, used_space())`.
    pub fn used_bytes(&self) -> &[u8] {
        &self.buffer[..self.used.min(self.buffer.len())]
    }

    /// Iterates over the finalized frames, oldest first.
    pub fn frames(&self) -> impl ExactSizeIterator<Item = Frame> + '_ {
        self.frames.iter().copied()
    }

    /// Returns a snapshot of the push/pop statistics.
    pub fn stats(&self) -> StackStats {
        self.stats.clone()
    }
}

impl std::fmt::Debug for FrameStack<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameStack")
            .field("capacity", &self.capacity())
            .field("used", &self.used)
            .field("frames", &self.frames.len())
            .field("head", &self.head)
            .finish()
    }
}
