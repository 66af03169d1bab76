//! Text-file export contracts and adapters.

mod service;

pub use service::{
    FileExportFuture, FileExportService, MemoryFileExportService, NoopFileExportService,
    TextFileExport,
};
