//! Test fixtures for creating sample registry index files.

use pr_protocol::plugin_models::Author;
use pr_protocol::plugin_models::Binary;
use pr_protocol::plugin_models::Plugin;
use std::path::PathBuf;
use tempfile::TempDir;

/// A complete, realistic index document covering timestamps, authors,
/// multiple binaries, and a minimal second entry.
pub const SAMPLE_INDEX: &str = r#"plugins:
  - name: deploy-helper
    description: Stages and deploys applications in one step
    version: 1.2.0
    created: 2015-02-15T22:09:33Z
    updated: 2016-01-08T10:44:02Z
    company: Example Corp
    authors:
      - name: Jo Dev
        homepage: https://example.com/jo
        contact: jo@example.com
    homepage: https://github.com/example/deploy-helper
    binaries:
      - platform: linux64
        url: https://example.com/deploy-helper/linux64
        checksum: 2a087d5cddcfb057fbda91e611c33f46
      - platform: osx
        url: https://example.com/deploy-helper/osx
        checksum: 8a7d891d8f8a7c764a8e4a9a8c8d98e1
  - name: quota-report
    version: 0.3.1
"#;

/// Write `document` to `repo-index.yml` inside a fresh temp directory.
///
/// Returns the directory (keep it alive for the test duration) and the
/// index file path.
pub fn create_test_index(document: &str) -> std::io::Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("repo-index.yml");
    std::fs::write(&path, document)?;
    Ok((dir, path))
}

/// Create a minimal test Plugin with the given name and version.
#[allow(dead_code)]
pub fn create_test_plugin(name: &str, version: &str) -> Plugin {
    Plugin {
        name: name.to_string(),
        description: format!("Test plugin {name}"),
        version: version.to_string(),
        created: None,
        updated: None,
        company: String::new(),
        authors: vec![Author {
            name: "Test Author".to_string(),
            ..Author::default()
        }],
        homepage: String::new(),
        binaries: vec![Binary {
            platform: "linux64".to_string(),
            url: format!("https://example.com/{name}/linux64"),
            checksum: String::new(),
        }],
    }
}
