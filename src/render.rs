//! Seams for the presentation layer. The core hands over a [`ChartSpec`] or
//! [`ReportPayload`] and never draws or lays out pages itself; a failure on
//! this side of the boundary cannot corrupt an already computed projection.

use crate::report::{ChartRef, ChartSpec, ReportPayload};

use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    Chart(String),
    Document(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Chart(e) => write!(f, "Failed to render chart: {}", e),
            RenderError::Document(e) => write!(f, "Failed to write document: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

/// Turns a chart spec into an image and returns a reference to it.
pub trait ChartRenderer {
    fn render(&self, spec: &ChartSpec) -> Result<ChartRef, RenderError>;
}

/// Turns a report payload into document bytes (PDF, text, ...).
pub trait DocumentWriter {
    fn write(&self, payload: &ReportPayload) -> Result<Vec<u8>, RenderError>;
}

/// Minimal plain-text document writer used by the demo binary.
pub struct TextDocumentWriter;

impl DocumentWriter for TextDocumentWriter {
    fn write(&self, payload: &ReportPayload) -> Result<Vec<u8>, RenderError> {
        let width = payload
            .lines
            .iter()
            .map(|l| l.label.len())
            .max()
            .unwrap_or(0);

        let mut document = String::new();
        document.push_str(&payload.title);
        document.push('\n');
        document.push_str(&"=".repeat(payload.title.len()));
        document.push('\n');

        for line in &payload.lines {
            document.push_str(&format!("{:<width$}  {}\n", line.label, line.value));
        }

        document.push_str(&format!("\n[chart: {}]\n", payload.chart.0));

        Ok(document.into_bytes())
    }
}
