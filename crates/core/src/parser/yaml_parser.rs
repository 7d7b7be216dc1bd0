//! Repository index file parser.
//!
//! This module orchestrates a single pass over the registry's YAML index:
//! open the file, decode it into a generic value tree, normalize the tree,
//! and hand it to an injected plugin model.

use crate::parser::error::ParserError;
use crate::parser::error::ParserResult;
use crate::parser::normalize::normalize;
use crate::registry::PluginModel;
use pr_protocol::plugin_models::Plugins;
use serde_yaml::Value;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Parses the repository index file into a plugin collection.
///
/// The parser owns three injected collaborators:
/// - the path of the index file to read,
/// - a diagnostic sink that receives a human-readable message on each
///   failure path,
/// - a [`PluginModel`] that is populated from the normalized document and
///   asked for the resulting collection.
///
/// # Example
///
/// ```rust,no_run
/// use pr_core::parser::yaml_parser::YamlParser;
/// use pr_core::registry::RegistryModel;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut parser = YamlParser::new(
///     "repo-index.yml",
///     std::io::stderr(),
///     RegistryModel::default(),
/// );
/// let plugins = parser.parse()?;
/// println!("Loaded {} plugins", plugins.plugins.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct YamlParser<W, M> {
    file_path: PathBuf,
    logger: W,
    model: M,
}

impl<W: Write, M: PluginModel> YamlParser<W, M> {
    /// Create a parser for the index file at `file_path`.
    pub fn new(file_path: impl Into<PathBuf>, logger: W, model: M) -> Self {
        Self {
            file_path: file_path.into(),
            logger,
            model,
        }
    }

    /// Parse the index file and return the populated plugin collection.
    ///
    /// The file is read and decoded as one generic YAML document, the
    /// decoded tree is normalized, and the model is populated exactly once
    /// with the result. Diagnostics for the two failure paths go to the
    /// injected logger; a failed logger write never masks the parse error.
    ///
    /// # Errors
    ///
    /// Returns `ParserError::FileAccess` if the file cannot be opened and
    /// `ParserError::Decode` if its contents are not one well-formed YAML
    /// document. Normalization reports no errors for the decoded variant
    /// set; its error list is collected and dropped here.
    pub fn parse(&mut self) -> ParserResult<Plugins> {
        let file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(source) => {
                let _ = write!(self.logger, "File does not exist:{source}");
                return Err(ParserError::FileAccess {
                    path: self.file_path.clone(),
                    source,
                });
            }
        };

        // The handle moves into the decoder and is closed when it drops,
        // whether or not decoding succeeds.
        let document: Value = match serde_yaml::from_reader(file) {
            Ok(document) => document,
            Err(source) => {
                let _ = write!(self.logger, "Failed to decode document:{source}");
                return Err(ParserError::Decode {
                    path: self.file_path.clone(),
                    source,
                });
            }
        };

        let (document, _errs) = normalize(document);

        self.model.populate_model(&document);

        Ok(self.model.plugins_model())
    }
}
