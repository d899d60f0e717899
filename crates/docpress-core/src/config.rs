// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Batch printing configuration.

use std::path::Path;

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DocpressError, Result};

/// Line written after every printed document.
pub const DEFAULT_DELIMITER: &str = "--------------------------------";

/// strftime pattern for the `Data:` field of the header line.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Settings for a batch run. Omitted fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Delimiter line emitted after each document (must be a single non-empty line).
    pub delimiter: String,
    /// `chrono` format string used when rendering creation timestamps.
    pub timestamp_format: String,
    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_owned(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_owned(),
            log_filter: "info".to_owned(),
        }
    }
}

impl BatchConfig {
    /// Read a JSON config file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        debug!(path = %path.as_ref().display(), "batch config loaded");
        Ok(config)
    }

    /// Like [`BatchConfig::load`], but any failure yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            warn!(path = %path.display(), "config file not found — using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "config unusable — using defaults");
                Self::default()
            }
        }
    }

    /// Write the config as pretty-printed JSON.
    pub fn persist(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// The delimiter has to stay exactly one line per document, and the
    /// timestamp pattern has to be renderable.
    pub fn validate(&self) -> Result<()> {
        if self.delimiter.is_empty() {
            return Err(DocpressError::InvalidConfig("delimiter is empty".into()));
        }
        if self.delimiter.contains(['\n', '\r']) {
            return Err(DocpressError::InvalidConfig(
                "delimiter must not contain line breaks".into(),
            ));
        }
        if !is_valid_timestamp_format(&self.timestamp_format) {
            return Err(DocpressError::InvalidConfig(format!(
                "unrecognised timestamp format: {:?}",
                self.timestamp_format
            )));
        }
        Ok(())
    }
}

/// True when every specifier in `format` is one `chrono` can render.
pub fn is_valid_timestamp_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}
