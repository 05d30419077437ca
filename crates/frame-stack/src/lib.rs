// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # frame-stack
//!
//! A stack-discipline sub-allocator that carves variable-length frames out of
//! one fixed-size, caller-owned buffer, plus a file-series format that dumps
//! those frames and reloads them with the same boundaries.
//!
//! # Key Components
//!
//! - [`FrameStack`] — the allocator: push/pop over a borrowed `&mut [u8]`,
//!   with a hard capacity and frame queries by index.
//! - [`ContentKind`] — how frame bytes are persisted (raw data, packets,
//!   RGB or RGBA pictures) and which file names a series uses.
//! - [`PageBuffer`] — a page-aligned owned buffer for the stack to borrow.
//! - [`Capacity`] — human-readable buffer sizes (`"64M"`, `"512K"`).
//! - [`SeriesConfig`] — TOML description of a series.
//! - [`StackStats`] — cumulative push/pop metrics.
//!
//! # Ownership Model
//!
//! ```text
//!   PageBuffer (owns bytes)
//!       │  &mut [u8]
//!       ▼
//!   FrameStack<'a>  ── push/pop ──► frames: {offset, len}
//!       │
//!       │  dump_frame_series / load_frame_series
//!       ▼
//!   raw-storage ──► {base}{i}[.pkt|.pgm]
//! ```
//!
//! The stack borrows its buffer mutably, so nothing else can touch the
//! bytes while it is live and the buffer cannot be dropped out from under it.
//!
//! # Example
//! ```
//! use frame_stack::{ContentKind, FrameStack, PageBuffer};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let base = format!("{}/frame_", dir.path().display());
//!
//! let mut buf = PageBuffer::new(4096).unwrap();
//! let mut stack = FrameStack::new(&mut buf);
//! stack.push_bytes(b"first").unwrap();
//! stack.push_bytes(b"second").unwrap();
//! stack.dump_frame_series(&base, ContentKind::PlainData, None).unwrap();
//!
//! let mut dest = PageBuffer::new(4096).unwrap();
//! let mut reloaded = FrameStack::new(&mut dest);
//! reloaded.load_frame_series(&base, ContentKind::PlainData, 2).unwrap();
//! assert_eq!(reloaded.frame(1).unwrap(), b"second");
//! ```

mod capacity;
mod config;
mod error;
mod kind;
mod page;
mod series;
mod stack;
mod stats;

pub use capacity::Capacity;
pub use config::SeriesConfig;
pub use error::StackError;
pub use kind::ContentKind;
pub use page::{PageBuffer, PAGE_SIZE};
pub use raw_storage::ImageDims;
pub use stack::{Frame, FrameStack};
pub use stats::StackStats;
