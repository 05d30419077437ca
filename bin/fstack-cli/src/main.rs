// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # fstack
//!
//! Command-line interface for the frame-stack sub-allocator.
//!
//! ## Usage
//! ```bash
//! # Push each input file as one frame and dump the stack as a series
//! fstack pack --capacity 64M --kind packet-data --out dump/pkt_ a.bin b.bin
//!
//! # Dump RGBA captures as PPM images
//! fstack pack --kind rgba-picture --width 640 --height 480 --out img/f_ f0.raw f1.raw
//!
//! # Reload a series and print its frame table
//! fstack load --capacity 64M --kind packet-data --base dump/pkt_ --count 2
//!
//! # Same, driven by a TOML description of the series
//! fstack --config series.toml load
//! ```

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fstack",
    about = "Pack files into a frame stack and dump or reload frame series",
    version,
    author
)]
struct Cli {
    /// Path to a TOML series configuration (overrides CLI arguments).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (repeat for more: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Push input files as frames, then dump the stack.
    Pack {
        /// Backing buffer size (e.g., "512K", "64M").
        #[arg(short = 'b', long, default_value = "64M")]
        capacity: String,

        /// Content kind: plain-data, packet-data, rgb-picture, rgba-picture.
        #[arg(short, long, default_value = "plain-data")]
        kind: String,

        /// File name prefix for the dumped series (required without --config).
        #[arg(short, long)]
        out: Option<String>,

        /// Also write the whole used region to this file.
        #[arg(long)]
        blob: Option<PathBuf>,

        /// Image width in pixels (picture kinds).
        #[arg(long)]
        width: Option<usize>,

        /// Image height in pixels (picture kinds).
        #[arg(long)]
        height: Option<usize>,

        /// Files to push, one frame each, in order.
        inputs: Vec<PathBuf>,
    },

    /// Reload a frame series and print its frame table.
    Load {
        /// Backing buffer size (e.g., "512K", "64M").
        #[arg(short = 'b', long, default_value = "64M")]
        capacity: String,

        /// Content kind: plain-data, packet-data, rgb-picture, rgba-picture.
        #[arg(short, long, default_value = "plain-data")]
        kind: String,

        /// File name prefix of the series.
        #[arg(long, default_value = "frame_")]
        base: String,

        /// Number of frames to reload.
        #[arg(short = 'n', long, default_value_t = 0)]
        count: usize,

        /// Also write the reloaded used region to this file.
        #[arg(long)]
        blob: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    commands::init_tracing(cli.verbose);

    match cli.command {
        Commands::Pack {
            capacity,
            kind,
            out,
            blob,
            width,
            height,
            inputs,
        } => {
            let series = commands::resolve_series(
                cli.config.as_deref(),
                commands::SeriesArgs {
                    capacity,
                    kind,
                    base: out,
                    count: inputs.len(),
                    width,
                    height,
                },
            )?;
            commands::pack::execute(series, inputs, blob)
        }
        Commands::Load {
            capacity,
            kind,
            base,
            count,
            blob,
        } => {
            let series = commands::resolve_series(
                cli.config.as_deref(),
                commands::SeriesArgs {
                    capacity,
                    kind,
                    base: Some(base),
                    count,
                    width: None,
                    height: None,
                },
            )?;
            commands::load::execute(series, blob)
        }
    }
}
