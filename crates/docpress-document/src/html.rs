// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// HTML documents with an accumulating stylesheet.

use std::io::{self, Write};

use docpress_core::{Clock, DocumentKind, SystemClock};

use crate::document::{Document, DocumentMeta};

/// An HTML document. `css` starts empty and only grows through
/// [`HtmlDocument::add_style`].
#[derive(Debug, Clone)]
pub struct HtmlDocument {
    meta: DocumentMeta,
    html: String,
    css: String,
}

impl HtmlDocument {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        html: impl Into<String>,
    ) -> Self {
        Self::with_clock(title, author, html, &SystemClock)
    }

    pub fn with_clock(
        title: impl Into<String>,
        author: impl Into<String>,
        html: impl Into<String>,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            meta: DocumentMeta::new(title, author, clock),
            html: html.into(),
            css: String::new(),
        }
    }

    pub fn meta_mut(&mut self) -> &mut DocumentMeta {
        &mut self.meta
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn set_html(&mut self, html: impl Into<String>) {
        self.html = html.into();
    }

    pub fn css(&self) -> &str {
        &self.css
    }

    /// Append `fragment` to the stylesheet. No separator is inserted.
    pub fn add_style(&mut self, fragment: &str) {
        self.css.push_str(fragment);
    }
}

impl Document for HtmlDocument {
    fn meta(&self) -> &DocumentMeta {
        &self.meta
    }

    fn kind(&self) -> DocumentKind {
        DocumentKind::Html
    }

    /// `<style>` block first, even when empty, then the markup.
    fn formatted_content(&self) -> String {
        format!("<style>{}</style>{}", self.css, self.html)
    }

    fn write_details(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "HTML:")?;
        writeln!(out, "{}", self.html)?;
        writeln!(out, "CSS:")?;
        writeln!(out, "{}", self.css)
    }
}
