// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Docpress.

use thiserror::Error;

/// Top-level error type for all Docpress operations.
///
/// Formatting and mutating documents is total; only the output sink and the
/// configuration file can fail.
#[derive(Debug, Error)]
pub enum DocpressError {
    // -- Output / persistence --
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Configuration --
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DocpressError>;
