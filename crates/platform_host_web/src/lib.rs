//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! Native builds compile the same adapters with target-gated fallbacks so runtime crates can
//! depend on this crate unconditionally.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod export;

pub use export::WebFileExportService;

/// Returns the file-export adapter for the active host.
pub fn file_export_service() -> WebFileExportService {
    WebFileExportService
}
