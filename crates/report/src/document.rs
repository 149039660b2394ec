//! Binary document port.

use std::path::PathBuf;

use thiserror::Error;

use crate::summary::Summary;

/// The document could not be produced. Always an infrastructure condition (missing font,
/// failed serialisation); never caused by the report data itself.
#[derive(Debug, Error)]
pub enum RenderingError {
    #[error("font file {} unavailable: {source}", path.display())]
    FontUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("font could not be loaded: {0}")]
    Font(String),

    #[error("document could not be written: {0}")]
    Output(String),
}

/// Renders a [`Summary`] into a named binary document.
pub trait DocumentRenderer: Send + Sync + core::fmt::Debug {
    fn render(&self, summary: &Summary) -> Result<Vec<u8>, RenderingError>;

    /// Attachment file name, e.g. `finance_report.pdf`.
    fn file_name(&self) -> &str;

    fn content_type(&self) -> &'static str;
}

/// A rendered document ready to be attached to a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Render `summary` with `renderer` and bundle the bytes with their name and type.
pub fn format_document(
    renderer: &dyn DocumentRenderer,
    summary: &Summary,
) -> Result<Document, RenderingError> {
    let bytes = renderer.render(summary)?;
    tracing::debug!(
        file_name = renderer.file_name(),
        size = bytes.len(),
        entries = summary.transactions.len(),
        "document rendered"
    );

    Ok(Document {
        file_name: renderer.file_name().to_string(),
        content_type: renderer.content_type(),
        bytes,
    })
}
