//! Report formatting: pure projections of ledger query results.
//!
//! A [`Summary`] is built from ledger query results and rendered either as plain text
//! ([`format_text`]) or as a binary document through a [`DocumentRenderer`].

pub mod document;
pub mod pdf;
pub mod summary;
pub mod text;

pub use document::{Document, DocumentRenderer, RenderingError, format_document};
pub use pdf::{PdfRenderer, PdfSettings};
pub use summary::{ReportLine, Summary, TIMESTAMP_FORMAT};
pub use text::format_text;
