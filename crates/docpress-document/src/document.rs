// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared document metadata and the polymorphic printing contract.

use std::io::{self, Write};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use docpress_core::config::is_valid_timestamp_format;
use docpress_core::error::Result;
use docpress_core::integrity;
use docpress_core::{Clock, DocumentKind};

/// Metadata common to every document kind.
///
/// `created_at` is sampled once from the clock at construction and has no
/// setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMeta {
    title: String,
    author: String,
    created_at: DateTime<Utc>,
}

impl DocumentMeta {
    pub fn new(title: impl Into<String>, author: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            created_at: clock.now(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_author(&mut self, author: impl Into<String>) {
        self.author = author.into();
    }

    /// The header line every document prints first.
    ///
    /// An unrenderable `timestamp_format` falls back to RFC 3339 so that
    /// printing stays total.
    pub fn header_line(&self, timestamp_format: &str) -> String {
        let stamp = if is_valid_timestamp_format(timestamp_format) {
            self.created_at.format(timestamp_format).to_string()
        } else {
            self.created_at.to_rfc3339()
        };
        format!(
            "Título: {}, Autor: {}, Data: {}",
            self.title, self.author, stamp
        )
    }
}

/// A printable document.
///
/// Implementors supply their formatted content and the lines that follow the
/// header; [`Document::print`] always writes the header first.
pub trait Document: std::fmt::Debug + Send + Sync {
    fn meta(&self) -> &DocumentMeta;

    fn kind(&self) -> DocumentKind;

    /// Final renderable form of the content, per kind.
    fn formatted_content(&self) -> String;

    /// Kind-specific lines written after the header.
    fn write_details(&self, out: &mut dyn Write) -> io::Result<()>;

    /// Write the header line followed by the kind-specific lines.
    fn print(&self, out: &mut dyn Write, timestamp_format: &str) -> Result<()> {
        writeln!(out, "{}", self.meta().header_line(timestamp_format))?;
        self.write_details(out)?;
        Ok(())
    }

    /// SHA-256 hex digest of [`Document::formatted_content`].
    fn fingerprint(&self) -> String {
        integrity::fingerprint(&self.formatted_content())
    }
}
