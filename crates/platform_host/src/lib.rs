//! Typed host-domain contracts shared by the desktop runtime, hosted apps, and browser adapters.
//!
//! This crate has no browser dependency of its own: concrete adapters live in
//! `platform_host_web`, while in-memory doubles here keep runtime and app logic testable natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod export;
pub mod time;

pub use export::{
    FileExportFuture, FileExportService, MemoryFileExportService, NoopFileExportService,
    TextFileExport,
};
pub use time::{unix_time_ms_now, ClockTime};
