// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// docpress-document — The document kinds Docpress can print.
//
// Every kind shares `DocumentMeta` (title, author, creation stamp) and
// implements the `Document` trait: a formatted-content rule plus the
// kind-specific lines written after the common header.

pub mod document;
pub mod html;
pub mod pdf;
pub mod text;

// Re-export the primary structs so callers can use `docpress_document::TextDocument` etc.
pub use document::{Document, DocumentMeta};
pub use html::HtmlDocument;
pub use pdf::{PdfDocument, WATERMARK_PREFIX};
pub use text::TextDocument;
