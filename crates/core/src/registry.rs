//! The plugin model seam and its in-memory implementation.
//!
//! The parser never interprets the registry schema itself; it hands the
//! normalized document to a [`PluginModel`] and returns whatever collection
//! that model exposes. [`RegistryModel`] is the default implementation
//! backed by the typed models in `pr-protocol`.

use pr_protocol::plugin_models::Plugins;
use serde_yaml::Value;

/// Population seam between the parser and the plugin collection.
///
/// Implementations own the registry state: `populate_model` rebuilds it
/// from a normalized index document, `plugins_model` snapshots the current
/// collection. Population is total; documents that don't describe a
/// registry leave an implementation-defined (typically empty) collection.
pub trait PluginModel {
    /// Rebuild internal state from a normalized index document.
    fn populate_model(&mut self, document: &Value);

    /// Snapshot of the currently held plugin collection.
    fn plugins_model(&self) -> Plugins;
}

/// In-memory registry model.
///
/// Deserializes the normalized document straight into [`Plugins`]. A
/// document that does not match the registry schema resets the model to
/// the empty collection rather than failing — the parser's error contract
/// covers file access and decoding only.
#[derive(Debug, Default)]
pub struct RegistryModel {
    plugins: Plugins,
}

impl PluginModel for RegistryModel {
    fn populate_model(&mut self, document: &Value) {
        self.plugins = serde_yaml::from_value(document.clone()).unwrap_or_default();
    }

    fn plugins_model(&self) -> Plugins {
        self.plugins.clone()
    }
}
