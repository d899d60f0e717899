// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF-like documents with an optional watermark.

use std::io::{self, Write};

use docpress_core::{Clock, DocumentKind, SystemClock};

use crate::document::{Document, DocumentMeta};

/// Label placed before the watermark in both formatted content and printout.
pub const WATERMARK_PREFIX: &str = "Marca d'água: ";

/// A PDF-like document. An empty watermark means "no watermark".
#[derive(Debug, Clone)]
pub struct PdfDocument {
    meta: DocumentMeta,
    text: String,
    watermark: String,
}

impl PdfDocument {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::with_clock(title, author, text, &SystemClock)
    }

    pub fn with_clock(
        title: impl Into<String>,
        author: impl Into<String>,
        text: impl Into<String>,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            meta: DocumentMeta::new(title, author, clock),
            text: text.into(),
            watermark: String::new(),
        }
    }

    pub fn meta_mut(&mut self) -> &mut DocumentMeta {
        &mut self.meta
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn watermark(&self) -> &str {
        &self.watermark
    }

    /// Replace the watermark. Last write wins.
    pub fn set_watermark(&mut self, watermark: impl Into<String>) {
        self.watermark = watermark.into();
    }
}

impl Document for PdfDocument {
    fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::Pdf
    }

    fn formatted_content(&self) -> String {
        if self.watermark.is_empty() {
            self.text.clone()
        } else {
            format!("{}\n{}{}", self.text, WATERMARK_PREFIX, self.watermark)
        }
    }

    fn write_details(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Texto:")?;
        writeln!(out, "{}", self.text)?;
        if !self.watermark.is_empty() {
            writeln!(out, "{}{}", WATERMARK_PREFIX, self.watermark)?;
        }
        Ok(())
    }
}
