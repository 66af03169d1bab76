//! Host service for handing user-authored text to the host as a downloadable file.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`FileExportService`].
pub type FileExportFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A text payload to be saved by the host under a suggested file name.
pub struct TextFileExport {
    /// Suggested file name (for example `notepad.txt`).
    pub file_name: String,
    /// MIME type of the payload.
    pub mime_type: String,
    /// File contents.
    pub contents: String,
}

impl TextFileExport {
    /// Creates a `text/plain` export.
    pub fn plain_text(file_name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: "text/plain".to_string(),
            contents: contents.into(),
        }
    }
}

/// Host service that saves text payloads outside the desktop shell.
pub trait FileExportService {
    /// Exports `file` through the host's download mechanism.
    fn export_text<'a>(
        &'a self,
        file: &'a TextFileExport,
    ) -> FileExportFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op export service for unsupported targets.
pub struct NoopFileExportService;

impl FileExportService for NoopFileExportService {
    fn export_text<'a>(
        &'a self,
        _file: &'a TextFileExport,
    ) -> FileExportFuture<'a, Result<(), String>> {
        Box::pin(async { Err("file export is not supported on this host".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory export service that records every exported file.
pub struct MemoryFileExportService {
    inner: Rc<RefCell<Vec<TextFileExport>>>,
}

impl MemoryFileExportService {
    /// Returns all files exported so far, oldest first.
    pub fn exported(&self) -> Vec<TextFileExport> {
        self.inner.borrow().clone()
    }
}

impl FileExportService for MemoryFileExportService {
    fn export_text<'a>(
        &'a self,
        file: &'a TextFileExport,
    ) -> FileExportFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.inner.borrow_mut().push(file.clone());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_service_records_exports_in_order() {
        let service = MemoryFileExportService::default();
        let first = TextFileExport::plain_text("notepad.txt", "hello");
        let second = TextFileExport::plain_text("notepad.txt", "");

        block_on(service.export_text(&first)).expect("first export");
        block_on(service.export_text(&second)).expect("second export");

        assert_eq!(service.exported(), vec![first, second]);
    }

    #[test]
    fn noop_service_reports_unsupported_host() {
        let file = TextFileExport::plain_text("notepad.txt", "x");
        assert!(block_on(NoopFileExportService.export_text(&file)).is_err());
    }

    #[test]
    fn plain_text_sets_mime_type() {
        let file = TextFileExport::plain_text("a.txt", "b");
        assert_eq!(file.mime_type, "text/plain");
    }
}
