//! Core domain models for scrub
//!
//! This crate contains:
//! - The error type shared across the workspace
//! - Run summary models (redaction records, per-file failures)

pub mod error;
pub mod summary;

pub use error::{Error, Result};
pub use summary::{FileFailure, Redaction, RunSummary};
