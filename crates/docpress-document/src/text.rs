// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plain text documents.

use std::io::{self, Write};

use docpress_core::{Clock, DocumentKind, SystemClock};

use crate::document::{Document, DocumentMeta};

/// Separators recognised by [`TextDocument::word_count`].
const WORD_SEPARATORS: [char; 3] = [' ', '\t', '\n'];

/// A plain text document. Its formatted content is the body, untouched.
#[derive(Debug, Clone)]
pub struct TextDocument {
    meta: DocumentMeta,
    content: String,
}

impl TextDocument {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self::with_clock(title, author, content, &SystemClock)
    }

    pub fn with_clock(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            meta: DocumentMeta::new(title, author, clock),
            content: content.into(),
        }
    }

    pub fn meta_mut(&mut self) -> &mut DocumentMeta {
        &mut self.meta
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Number of non-empty tokens between spaces, tabs, and newlines.
    pub fn word_count(&self) -> usize {
        self.content
            .split(WORD_SEPARATORS)
            .filter(|token| !token.is_empty())
            .count()
    }
}

impl Document for TextDocument {
    fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::Text
    }

    fn formatted_content(&self) -> String {
        self.content.clone()
    }

    fn write_details(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Conteúdo:")?;
        writeln!(out, "{}", self.content)
    }
}
