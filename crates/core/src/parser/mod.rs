//! Registry index parsing.
//!
//! This module turns the repository's YAML index file into a normalized
//! generic value tree and hands it to a plugin model:
//! - [`yaml_parser`]: file access, decoding, orchestration
//! - [`normalize`]: canonical rebuild of the decoded document
//! - [`error`]: parser error types

pub mod error;
pub mod normalize;
pub mod yaml_parser;
