//! # pr-core
//!
//! Registry parsing and model population for plugin-repo.
//!
//! This crate provides:
//! - Parsing of the repository index file (one YAML document) into a
//!   generic value tree
//! - Normalization of the decoded tree into a canonical form
//! - Population of an injected plugin model from the normalized tree
//!
//! ## Modules
//!
//! - [`parser`]: Registry file parsing and document normalization
//! - [`registry`]: The plugin model seam and its in-memory implementation

pub mod parser;
pub mod registry;
