//! Configuration for locating fixture files
//!
//! Test suites usually run with the defaults (the `fixtures/resources`
//! directory bundled with the crate). A JSON file can move the fixture root or
//! rename individual fixture files without recompiling.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fixtures::FixtureKey;

/// Default fixture directory bundled with the crate sources.
pub const DEFAULT_FIXTURE_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/resources");

/// Complete mock configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MockConfig {
    /// Directory containing the fixture files
    #[serde(default = "default_fixture_root")]
    pub fixture_root: PathBuf,
    /// Per-key file name overrides, relative to `fixture_root`
    #[serde(default)]
    pub file_names: HashMap<FixtureKey, String>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            fixture_root: default_fixture_root(),
            file_names: HashMap::new(),
        }
    }
}

impl MockConfig {
    /// Configuration rooted at `root` with default file names.
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            fixture_root: root.into(),
            ..Self::default()
        }
    }

    /// Load configuration from JSON file
    ///
    /// # Returns
    /// The parsed configuration, or the defaults if the file is missing or
    /// its JSON is invalid.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!(
                    "[Config] Failed to read config file {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }

    /// File name used for `key`, honouring overrides.
    pub fn file_name(&self, key: FixtureKey) -> &str {
        self.file_names
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_file_name())
    }

    /// Absolute or root-relative path of the fixture file for `key`.
    pub fn path_for(&self, key: FixtureKey) -> PathBuf {
        self.fixture_root.join(self.file_name(key))
    }
}

fn default_fixture_root() -> PathBuf {
    PathBuf::from(DEFAULT_FIXTURE_ROOT)
}
