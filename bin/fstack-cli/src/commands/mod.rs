// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Subcommand implementations and shared CLI plumbing.

pub mod load;
pub mod pack;

use frame_stack::{ContentKind, ImageDims, SeriesConfig};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Series settings as given on the command line.
pub struct SeriesArgs {
    pub capacity: String,
    pub kind: String,
    pub base: Option<String>,
    pub count: usize,
    pub width: Option<usize>,
    pub height: Option<usize>,
}

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the level follows `-v` count:
/// none → warn, `-v` → info, `-vv` → debug, `-vvv` → trace.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the series description, preferring a TOML config when given.
pub fn resolve_series(config: Option<&Path>, args: SeriesArgs) -> anyhow::Result<SeriesConfig> {
    if let Some(path) = config {
        let series = SeriesConfig::from_file(path)
            .map_err(|e| anyhow::anyhow!("failed to load config: {e}"))?;
        tracing::info!("using series config '{}'", path.display());
        return Ok(series);
    }

    let kind: ContentKind = args.kind.parse()?;
    let image = match (args.width, args.height) {
        (Some(width), Some(height)) => Some(ImageDims::new(width, height)),
        (None, None) => None,
        _ => anyhow::bail!("--width and --height must be given together"),
    };

    let Some(base_name) = args.base else {
        anyhow::bail!("--out is required when no --config is given");
    };

    let series = SeriesConfig {
        capacity: args.capacity,
        base_name,
        kind,
        count: args.count,
        image,
    };
    series.validate()?;
    Ok(series)
}
