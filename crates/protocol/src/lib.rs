//! # pr-protocol
//!
//! Core data models for the plugin repository.
//!
//! This crate defines the shared structures that describe a repository
//! index: the plugin collection served to clients and everything a single
//! plugin entry carries (version, authors, downloadable binaries).
//!
//! ## Modules
//!
//! - [`plugin_models`]: Plugin registry entries and the top-level collection
//!
//! ## Design Principles
//!
//! - Minimal dependencies: only serde, serde_json, and chrono
//! - Independent compilation: no dependencies on other workspace crates

pub mod plugin_models;

// Re-export all public types for convenience
pub use plugin_models::*;
