// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::check::RecordKind;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub log: Log,

    #[serde(default, rename = "payload")]
    pub payloads: Vec<Payload>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Log {
    /// One of `trace`, `debug`, `info`, `warn`, `error`, `critical`.
    ///
    /// Default: info
    pub level: Option<String>,

    /// Emit bunyan JSON records instead of terminal output.
    #[serde(default)]
    pub json: bool,
}

/// A payload file to check.
#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Payload {
    pub kind: RecordKind,

    /// Relative paths are resolved against the directory of the config file.
    pub path: PathBuf,
}

impl Log {
    pub fn level(&self) -> anyhow::Result<Option<slog::Level>> {
        self.level.as_deref().map(crate::parse_log_level).transpose()
    }
}

pub fn parse(path: &Path) -> anyhow::Result<Config> {
    let file_data = std::fs::read(path).with_context(|| {
        format!("Failed to read config {}", path.display())
    })?;
    let mut config = toml::from_str::<Config>(
        std::str::from_utf8(&file_data)
            .context("config should be valid utf-8")?,
    )
    .with_context(|| format!("Failed to parse config {}", path.display()))?;

    if let Some(dir) = path.parent() {
        for payload in config.payloads.iter_mut() {
            if payload.path.is_relative() {
                payload.path = dir.join(&payload.path);
            }
        }
    }
    Ok(config)
}
