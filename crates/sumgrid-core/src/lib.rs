//! sumgrid-core - UI-agnostic document model, recompute sweep and storage.

pub mod config;
pub mod display;
pub mod document;
pub mod error;
pub mod storage;

pub use config::SheetConfig;
pub use display::{DisplaySink, ERROR_DISPLAY, RecordingSink};
pub use document::Document;
pub use error::{Result, SheetError};

pub use sumgrid_engine::engine::CellRef;
