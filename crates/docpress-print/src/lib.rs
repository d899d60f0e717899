// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Docpress Print — writes batches of documents to an output sink, one
// delimiter line after each document, in input order.

pub mod batch;

pub use batch::DocumentBatchProcessor;
