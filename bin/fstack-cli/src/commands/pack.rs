// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `fstack pack` command: push files as frames, then dump them.

use frame_stack::{FrameStack, PageBuffer, SeriesConfig};
use std::path::PathBuf;

pub fn execute(
    series: SeriesConfig,
    inputs: Vec<PathBuf>,
    blob: Option<PathBuf>,
) -> anyhow::Result<()> {
    if inputs.is_empty() {
        anyhow::bail!("no input files given");
    }

    let dims = series.dump_dims()?;
    let capacity = series.parse_capacity()?;
    let mut buffer = PageBuffer::new(capacity.as_bytes())?;
    let mut stack = FrameStack::new(&mut buffer);

    for input in &inputs {
        let data = std::fs::read(input)
            .map_err(|e| anyhow::anyhow!("cannot read '{}': {e}", input.display()))?;
        stack.push_bytes(&data).map_err(|e| {
            anyhow::anyhow!("frame from '{}' does not fit: {e}", input.display())
        })?;
    }

    let files = stack.dump_frame_series(&series.base_name, series.kind, dims)?;
    println!(
        "Packed {files} {} frames ({} of {capacity} used) with base '{}'",
        series.kind,
        stack.used_space(),
        series.base_name,
    );

    if let Some(path) = blob {
        let written = stack.dump_all(&path)?;
        println!("Wrote {written} bytes to '{}'", path.display());
    }

    tracing::debug!("{}", stack.stats().summary());
    Ok(())
}
