//! # Eloquent Common Utilities
//!
//! Shared pieces for the chapter crates: the datasets the exercises compute
//! over, the error type for loading them, and a logging setup for the demo
//! binaries.
//!
//! ## Modules
//!
//! - [`dataset`]: Embedded genealogy and mountain datasets, plus file loading
//! - [`error`]: Error and `Result` types for dataset access
//! - [`logging`]: `tracing` subscriber setup shared by the demo binaries
//!
//! ## Design Principles
//!
//! 1. **Load once**: datasets are parsed into typed records up front, so no
//!    exercise inspects raw JSON at runtime
//! 2. **Borrow, don't clone**: statistics borrow from the loaded records
//! 3. **No global state**: callers own the loaded data

pub mod dataset;
pub mod error;
pub mod logging;

// Re-export main types for convenience
pub use dataset::{Person, Sex};
pub use error::{Error, Result};
