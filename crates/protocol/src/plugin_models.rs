//! Plugin registry models for the repository index file.
//!
//! This module defines the structure of the YAML index that describes every
//! installable plugin the repository serves.

use chrono::DateTime;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Top-level shape of the repository index document.
///
/// The index is a single YAML document with one `plugins` key holding the
/// full list of registry entries.
///
/// # Example
///
/// ```yaml
/// plugins:
///   - name: deploy-helper
///     description: Stages and deploys applications in one step
///     version: 1.2.0
///     created: 2015-02-15T22:09:33Z
///     updated: 2016-01-08T10:44:02Z
///     company: Example Corp
///     authors:
///       - name: Jo Dev
///         homepage: https://example.com/jo
///         contact: jo@example.com
///     homepage: https://github.com/example/deploy-helper
///     binaries:
///       - platform: linux64
///         url: https://example.com/deploy-helper/linux64
///         checksum: 2a087d5cddcfb057fbda91e611c33f46
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Plugins {
    /// All registry entries, in the order the index file lists them.
    #[serde(default)]
    pub plugins: Vec<Plugin>,
}

/// A single installable plugin as described by the repository index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Plugin {
    /// Unique name clients install the plugin by.
    pub name: String,

    /// Human-readable summary shown in listings.
    #[serde(default)]
    pub description: String,

    /// Released version of the plugin (the index carries one entry per
    /// plugin, always the latest release).
    pub version: String,

    /// When the plugin was first published to the repository.
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,

    /// When the current version was published.
    #[serde(default)]
    pub updated: Option<DateTime<Utc>>,

    /// Publishing company, if the plugin is not an individual contribution.
    #[serde(default)]
    pub company: String,

    /// People or teams maintaining the plugin.
    #[serde(default)]
    pub authors: Vec<Author>,

    /// Project homepage or source repository.
    #[serde(default)]
    pub homepage: String,

    /// Downloadable builds, one per supported platform.
    #[serde(default)]
    pub binaries: Vec<Binary>,
}

/// A plugin author or maintainer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Author {
    pub name: String,

    #[serde(default)]
    pub homepage: String,

    #[serde(default)]
    pub contact: String,
}

/// A downloadable plugin build for one platform.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Binary {
    /// Platform identifier, e.g. `linux64`, `osx`, `win64`.
    pub platform: String,

    /// Direct download URL for this build.
    pub url: String,

    /// Hex-encoded digest of the binary at `url`.
    #[serde(default)]
    pub checksum: String,
}
