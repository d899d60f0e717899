// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Docpress — Core types and error definitions shared across all crates.

pub mod clock;
pub mod config;
pub mod error;
pub mod integrity;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::BatchConfig;
pub use error::DocpressError;
pub use types::*;
