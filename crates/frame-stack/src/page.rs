// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Page-aligned backing buffers.
//!
//! [`PageBuffer`] is the owner a [`FrameStack`](crate::FrameStack) borrows
//! from. The stack never allocates or frees; the buffer is released when the
//! `PageBuffer` is dropped, and the borrow checker keeps any stack over it
//! from outliving it.

use crate::StackError;
use std::alloc::{self, Layout};
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

/// Alignment of every backing buffer.
pub const PAGE_SIZE: usize = 4096;

/// A zeroed, page-aligned, heap-allocated byte buffer.
///
/// # Example
/// ```
/// use frame_stack::{FrameStack, PageBuffer};
///
/// let mut buf = PageBuffer::new(8192).unwrap();
/// assert_eq!(buf.as_ptr() as usize % 4096, 0);
///
/// let mut stack = FrameStack::new(&mut buf);
/// stack.push(128).unwrap();
/// assert_eq!(stack.used_space(), 128);
/// ```
pub struct PageBuffer {
    ptr: NonNull<u8>,
    layout: Layout,
}

impl PageBuffer {
    /// Allocates `len` zeroed bytes aligned to [`PAGE_SIZE`].
    ///
    /// Returns `Err(ZeroSizedAllocation)` for `len == 0` and
    /// `Err(AllocationFailed)` if the system allocator refuses.
    pub fn new(len: usize) -> Result<Self, StackError> {
        if len == 0 {
            return Err(StackError::ZeroSizedAllocation);
        }

        let layout = Layout::from_size_align(len, PAGE_SIZE).map_err(|_| {
            tracing::error!("{len}-byte allocation failed.");
            StackError::AllocationFailed { bytes: len }
        })?;

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(raw).ok_or_else(|| {
            tracing::error!("{len}-byte allocation failed.");
            StackError::AllocationFailed { bytes: len }
        })?;

        tracing::debug!("allocated {len}-byte page-aligned buffer");
        Ok(Self { ptr, layout })
    }

    /// Returns the buffer length in bytes.
    pub fn len(&self) -> usize {
        self.layout.size()
    }

    /// Always `false`; zero-length buffers cannot be constructed.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Deref for PageBuffer {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        // SAFETY: `ptr` points to `layout.size()` initialised bytes owned by
        // `self` until drop.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.layout.size()) }
    }
}

impl DerefMut for PageBuffer {
    fn deref_mut(&mut self) -> &mut [u8] {
        // SAFETY: as in `deref`, and `&mut self` guarantees exclusivity.
        unsafe { std::slice::from_raw_parts_mut(self.ptr.as_ptr(), self.layout.size()) }
    }
}

impl Drop for PageBuffer {
    fn drop(&mut self) {
        // SAFETY: allocated in `new` with this exact layout.
        unsafe { alloc::dealloc(self.ptr.as_ptr(), self.layout) }
    }
}

// PageBuffer uniquely owns its allocation, like Vec<u8>.
unsafe impl Send for PageBuffer {}
unsafe impl Sync for PageBuffer {}

impl std::fmt::Debug for PageBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageBuffer")
            .field("len", &self.len())
            .field("align", &PAGE_SIZE)
            .finish()
    }
}
