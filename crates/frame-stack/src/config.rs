// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Series configuration loaded from TOML files or constructed programmatically.
//!
//! # TOML Format
//! ```toml
//! capacity = "64M"
//! base_name = "capture/frame_"
//! kind = "rgba-picture"
//! count = 30
//!
//! [image]
//! width = 640
//! height = 480
//! ```

use crate::{Capacity, ContentKind, StackError};
use raw_storage::ImageDims;
use std::path::Path;

/// Describes one frame series: where it lives, what it holds, and how big a
/// buffer it needs.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeriesConfig {
    /// Backing buffer size (human-readable, e.g. `"64M"`).
    pub capacity: String,
    /// File name prefix; frame files are `{base_name}{index}[.ext]`.
    pub base_name: String,
    /// How frame bytes are interpreted.
    #[serde(default = "default_kind")]
    pub kind: ContentKind,
    /// Number of frames to reload.
    #[serde(default)]
    pub count: usize,
    /// Image dimensions, required for picture kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageDims>,
}

fn default_kind() -> ContentKind {
    ContentKind::PlainData
}

impl SeriesConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, StackError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            StackError::Config(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, StackError> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| StackError::Config(format!("TOML parse error: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialises configuration to TOML.
    pub fn to_toml(&self) -> Result<String, StackError> {
        toml::to_string_pretty(self)
            .map_err(|e| StackError::Config(format!("TOML serialise error: {e}")))
    }

    /// Parses the capacity string into a [`Capacity`].
    pub fn parse_capacity(&self) -> Result<Capacity, StackError> {
        Capacity::parse(&self.capacity)
    }

    /// Image dimensions for picture kinds; `None` for data kinds.
    pub fn image_dims(&self) -> Option<ImageDims> {
        if self.kind.is_picture() {
            self.image
        } else {
            None
        }
    }

    /// Image dimensions needed to dump this series.
    ///
    /// Picture kinds go through the image encoders and must carry `[image]`;
    /// reloading reads raw bytes and does not need it.
    pub fn dump_dims(&self) -> Result<Option<ImageDims>, StackError> {
        match self.image_dims() {
            None if self.kind.is_picture() => Err(StackError::MissingImageDims { kind: self.kind }),
            dims => Ok(dims),
        }
    }

    /// Checks that the capacity parses and the base name is set.
    pub fn validate(&self) -> Result<(), StackError> {
        self.parse_capacity()?;
        if self.base_name.is_empty() {
            return Err(StackError::Config("base_name must not be empty".into()));
        }
        Ok(())
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            capacity: "64M".to_string(),
            base_name: "frame_".to_string(),
            kind: default_kind(),
            count: 0,
            image: None,
        }
    }
}
