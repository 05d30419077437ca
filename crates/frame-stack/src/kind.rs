// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Content kinds and the file-naming convention of a frame series.
//!
//! Every frame in a series is stored in its own file named
//! `{base}{index}` plus a kind-specific extension. The index is a plain
//! decimal number with no padding.
//!
//! | kind           | dumped as         | reloaded from     |
//! |----------------|-------------------|-------------------|
//! | `PlainData`    | `{base}{i}`       | `{base}{i}`       |
//! | `PacketData`   | `{base}{i}.pkt`   | `{base}{i}.pkt`   |
//! | `RgbPicture`   | `{base}{i}.pgm`   | `{base}{i}.pgm`   |
//! | `RgbaPicture`  | `{base}{i}.pgm`   | `{base}{i}`       |
//!
//! RGBA frames are dumped as packed 3-channel images but reloaded from the
//! plain numeric name, so a dump of RGBA frames does not reload unchanged.

use crate::StackError;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// How the bytes of a frame are interpreted when persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentKind {
    /// Raw bytes.
    PlainData,
    /// Raw bytes of one network packet.
    PacketData,
    /// A `width × height × 3` image.
    RgbPicture,
    /// A `width × height × 4` image, written with the fourth channel dropped.
    RgbaPicture,
}

impl ContentKind {
    /// All kinds, in declaration order.
    pub const ALL: [ContentKind; 4] = [
        ContentKind::PlainData,
        ContentKind::PacketData,
        ContentKind::RgbPicture,
        ContentKind::RgbaPicture,
    ];

    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainData => "plain-data",
            Self::PacketData => "packet-data",
            Self::RgbPicture => "rgb-picture",
            Self::RgbaPicture => "rgba-picture",
        }
    }

    /// Whether frames of this kind are written through an image encoder.
    pub fn is_picture(&self) -> bool {
        matches!(self, Self::RgbPicture | Self::RgbaPicture)
    }

    /// Extension appended when dumping frame files.
    fn dump_suffix(&self) -> &'static str {
        match self {
            Self::PlainData => "",
            Self::PacketData => ".pkt",
            Self::RgbPicture | Self::RgbaPicture => ".pgm",
        }
    }

    /// Extension appended when reloading frame files.
    fn load_suffix(&self) -> &'static str {
        match self {
            Self::PlainData | Self::RgbaPicture => "",
            Self::PacketData => ".pkt",
            Self::RgbPicture => ".pgm",
        }
    }

    /// File name frame `index` is dumped to.
    pub fn dump_path(&self, base: &str, index: usize) -> PathBuf {
        PathBuf::from(format!("{base}{index}{}", self.dump_suffix()))
    }

    /// File name frame `index` is reloaded from.
    pub fn load_path(&self, base: &str, index: usize) -> PathBuf {
        PathBuf::from(format!("{base}{index}{}", self.load_suffix()))
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentKind {
    type Err = StackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plain" | "plain-data" => Ok(Self::PlainData),
            "packet" | "packet-data" => Ok(Self::PacketData),
            "rgb" | "rgb-picture" => Ok(Self::RgbPicture),
            "rgba" | "rgba-picture" => Ok(Self::RgbaPicture),
            other => Err(StackError::UnknownKind(other.to_string())),
        }
    }
}
