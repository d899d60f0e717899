// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sequential batch printer.
//
// Documents are printed synchronously, in the order given, to a single sink.
// Each document is followed by the same delimiter line, the last one
// included. An empty batch writes nothing.

use std::io::Write;

use tracing::{debug, info, instrument};

use docpress_core::BatchConfig;
use docpress_core::config::{DEFAULT_DELIMITER, DEFAULT_TIMESTAMP_FORMAT};
use docpress_core::error::Result;
use docpress_document::Document;

/// Prints a batch of heterogeneous documents uniformly.
#[derive(Debug, Clone)]
pub struct DocumentBatchProcessor {
    delimiter: String,
    timestamp_format: String,
}

impl Default for DocumentBatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBatchProcessor {
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_owned(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_owned(),
        }
    }

    pub fn from_config(config: &BatchConfig) -> Self {
        Self {
            delimiter: config.delimiter.clone(),
            timestamp_format: config.timestamp_format.clone(),
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Print every document followed by the delimiter line, then flush `out`.
    #[instrument(skip_all, fields(count = documents.len()))]
    pub fn process_batch<W: Write>(
        &self,
        documents: &[Box<dyn Document>],
        out: &mut W,
    ) -> Result<()> {
        info!("processing document batch");

        for (index, doc) in documents.iter().enumerate() {
            debug!(
                index,
                kind = %doc.kind(),
                title = doc.meta().title(),
                fingerprint = %doc.fingerprint(),
                "printing document"
            );
            doc.print(&mut *out, &self.timestamp_format)?;
            writeln!(out, "{}", self.delimiter)?;
        }

        out.flush()?;
        info!(count = documents.len(), "document batch printed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use docpress_core::FixedClock;
    use docpress_document::{HtmlDocument, PdfDocument, TextDocument};

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2026, 10, 19, 8, 30, 0).unwrap())
    }

    fn render(processor: &DocumentBatchProcessor, documents: &[Box<dyn Document>]) -> String {
        let mut out = Vec::new();
        processor.process_batch(documents, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_batch_writes_nothing() {
        let output = render(&DocumentBatchProcessor::new(), &[]);
        assert!(output.is_empty());
    }

    #[test]
    fn delimiter_after_every_document() {
        let clock = clock();
        let docs: Vec<Box<dyn Document>> = vec![
            Box::new(TextDocument::with_clock("One", "A", "x", &clock)),
            Box::new(TextDocument::with_clock("Two", "B", "y", &clock)),
        ];
        let processor = DocumentBatchProcessor::new();
        let output = render(&processor, &docs);

        assert_eq!(output.matches(DEFAULT_DELIMITER).count(), 2);
        assert!(output.ends_with(&format!("{DEFAULT_DELIMITER}\n")));

        let mut expected = Vec::new();
        docs[0].print(&mut expected, DEFAULT_TIMESTAMP_FORMAT).unwrap();
        writeln!(expected, "{DEFAULT_DELIMITER}").unwrap();
        docs[1].print(&mut expected, DEFAULT_TIMESTAMP_FORMAT).unwrap();
        writeln!(expected, "{DEFAULT_DELIMITER}").unwrap();
        assert_eq!(output, String::from_utf8(expected).unwrap());
    }

    #[test]
    fn mixed_batch_prints_in_order() {
        let clock = clock();
        let text = TextDocument::with_clock("Report", "Alice", "hello world", &clock);
        let mut html = HtmlDocument::with_clock("Page", "Bob", "<h1>Hi</h1>", &clock);
        html.add_style("h1{color:blue;}");
        let mut pdf = PdfDocument::with_clock("Contract", "Carlos", "Official text.", &clock);
        pdf.set_watermark("Confidential");

        let docs: Vec<Box<dyn Document>> = vec![Box::new(text), Box::new(html), Box::new(pdf)];
        let output = render(&DocumentBatchProcessor::new(), &docs);

        let dashes = DEFAULT_DELIMITER;
        let expected = format!(
            "Título: Report, Autor: Alice, Data: 19/10/2026 08:30:00\n\
             Conteúdo:\n\
             hello world\n\
             {dashes}\n\
             Título: Page, Autor: Bob, Data: 19/10/2026 08:30:00\n\
             HTML:\n\
             <h1>Hi</h1>\n\
             CSS:\n\
             h1{{color:blue;}}\n\
             {dashes}\n\
             Título: Contract, Autor: Carlos, Data: 19/10/2026 08:30:00\n\
             Texto:\n\
             Official text.\n\
             Marca d'água: Confidential\n\
             {dashes}\n"
        );
        assert_eq!(output, expected);
    }

    #[test]
    fn config_controls_delimiter_and_timestamp() {
        let config = BatchConfig {
            delimiter: "====".into(),
            timestamp_format: "%Y-%m-%d".into(),
            ..BatchConfig::default()
        };
        let processor = DocumentBatchProcessor::from_config(&config);
        assert_eq!(processor.delimiter(), "====");

        let docs: Vec<Box<dyn Document>> = vec![Box::new(PdfDocument::with_clock(
            "Memo", "Dana", "body", &clock(),
        ))];
        assert_eq!(
            render(&processor, &docs),
            "Título: Memo, Autor: Dana, Data: 2026-10-19\nTexto:\nbody\n====\n"
        );
    }

    #[test]
    fn sink_failure_is_reported() {
        struct BrokenSink;

        impl Write for BrokenSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("sink closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let docs: Vec<Box<dyn Document>> =
            vec![Box::new(TextDocument::with_clock("T", "A", "x", &clock()))];
        let err = DocumentBatchProcessor::new()
            .process_batch(&docs, &mut BrokenSink)
            .unwrap_err();
        assert!(matches!(err, docpress_core::DocpressError::Io(_)));
    }
}
