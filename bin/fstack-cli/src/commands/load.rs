// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fstack load` command: reload a frame series and print its boundaries.
//!
//! Frames whose file was missing or unreadable reload as empty frames; they
//! are flagged in the table rather than treated as fatal.

use frame_stack::{FrameStack, PageBuffer, SeriesConfig};
use std::path::PathBuf;

pub fn execute(series: SeriesConfig, blob: Option<PathBuf>) -> anyhow::Result<()> {
    let capacity = series.parse_capacity()?;
    let mut buffer = PageBuffer::new(capacity.as_bytes())?;
    let mut stack = FrameStack::new(&mut buffer);

    let total = stack.load_frame_series(&series.base_name, series.kind, series.count)?;

    println!(
        "Series '{}' ({}): {} frames, {total} bytes, {} of {capacity} free",
        series.base_name,
        series.kind,
        stack.frame_count(),
        stack.remaining_space(),
    );
    println!("  {:<6} {:>12} {:>12}  {}", "Index", "Offset", "Size", "File");
    println!("  {}", "-".repeat(60));

    let mut empty = 0;
    for (index, frame) in stack.frames().enumerate() {
        let path = series.kind.load_path(&series.base_name, index);
        let note = if frame.len == 0 {
            empty += 1;
            "  (empty)"
        } else {
            ""
        };
        println!(
            "  {:<6} {:>12} {:>12}  {}{note}",
            index,
            frame.offset,
            frame.len,
            path.display(),
        );
    }
    println!();

    if empty > 0 {
        println!("  WARNING: {empty} frame(s) reloaded empty (missing or unreadable file)");
    }
    println!("{}", stack.stats().summary());

    if let Some(path) = blob {
        let written = stack.dump_all(&path)?;
        println!("Wrote {written} bytes to '{}'", path.display());
    }

    Ok(())
}
