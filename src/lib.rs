//! Dataset adapter for logo-annotated image directories.

mod common;
pub mod config;
pub mod dataset;
pub mod error;
pub mod transform;
