// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Docpress — Document batch printer
//
// Entry point. Loads configuration, initialises logging, builds the sample
// batch, and prints it to stdout. Logs go to stderr.

use std::process::ExitCode;

use docpress_core::BatchConfig;
use docpress_core::error::DocpressError;
use docpress_document::{Document, HtmlDocument, PdfDocument, TextDocument};
use docpress_print::DocumentBatchProcessor;
use tracing::{error, info, warn};

/// Environment variable naming an optional JSON config file.
const CONFIG_ENV: &str = "DOCPRESS_CONFIG";

fn main() -> ExitCode {
    let (config, config_error) = load_config();
    init_tracing(&config.log_filter);

    if let Some(e) = config_error {
        warn!(error = %e, "config unusable — using defaults");
    }
    info!("Docpress starting");

    let documents = sample_batch();
    let processor = DocumentBatchProcessor::from_config(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match processor.process_batch(&documents, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "batch printing failed");
            ExitCode::FAILURE
        }
    }
}

/// Config from `DOCPRESS_CONFIG` if set. The error is returned rather than
/// logged because the subscriber is not installed yet.
fn load_config() -> (BatchConfig, Option<DocpressError>) {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => match BatchConfig::load(&path) {
            Ok(config) => (config, None),
            Err(e) => (BatchConfig::default(), Some(e)),
        },
        None => (BatchConfig::default(), None),
    }
}

fn init_tracing(fallback_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// The fixed demonstration batch. Kind-specific calls are made on the
/// concrete values before they are boxed.
fn sample_batch() -> Vec<Box<dyn Document>> {
    let report = TextDocument::new("Relatório", "Alice", "Este é um relatório de exemplo.");

    let mut page = HtmlDocument::new(
        "Página Web",
        "Bob",
        "<h1>Bem-vindo</h1><p>Este é um documento HTML.</p>",
    );
    page.add_style("h1 { color: blue; }");

    let mut contract = PdfDocument::new("Contrato", "Carlos", "Este é um contrato oficial.");
    contract.set_watermark("Confidencial");

    vec![Box::new(report), Box::new(page), Box::new(contract)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use docpress_core::DocumentKind;

    #[test]
    fn sample_batch_order_and_mutations() {
        let docs = sample_batch();
        let kinds: Vec<_> = docs.iter().map(|d| d.kind()).collect();
        assert_eq!(
            kinds,
            [DocumentKind::Text, DocumentKind::Html, DocumentKind::Pdf]
        );
        assert_eq!(
            docs[1].formatted_content(),
            "<style>h1 { color: blue; }</style><h1>Bem-vindo</h1><p>Este é um documento HTML.</p>"
        );
        assert_eq!(
            docs[2].formatted_content(),
            "Este é um contrato oficial.\nMarca d'água: Confidencial"
        );
    }

    #[test]
    fn sample_batch_prints_three_sections() {
        let mut out = Vec::new();
        DocumentBatchProcessor::new()
            .process_batch(&sample_batch(), &mut out)
            .unwrap();
        let output = String::from_utf8(out).unwrap();

        let sections: Vec<_> = output
            .split("--------------------------------\n")
            .collect();
        // Trailing delimiter leaves an empty final piece.
        assert_eq!(sections.len(), 4);
        assert!(sections[0].starts_with("Título: Relatório, Autor: Alice, Data: "));
        assert!(sections[1].contains("CSS:\nh1 { color: blue; }\n"));
        assert!(sections[2].ends_with("Marca d'água: Confidencial\n"));
        assert_eq!(sections[3], "");
    }
}
