// Fixture error types and constants

use crate::error::ErrorCode;
use crate::fixtures::FixtureKey;
use std::fmt;
use std::path::PathBuf;
use tracing::error;

/// Fixture error code constants
///
/// Error code range: 1101-1105
pub struct FixtureErrorCodes {}

impl FixtureErrorCodes {
    /// Fixture file does not exist under the fixture root
    pub const FIXTURE_MISSING: i32 = 1101;

    /// Fixture file exists but could not be read
    pub const FIXTURE_UNREADABLE: i32 = 1102;

    /// Text fixture is not valid UTF-8
    pub const INVALID_UTF8: i32 = 1103;

    /// In-memory fixture set was built without every key
    pub const INCOMPLETE_SET: i32 = 1104;

    /// Shared resolver was requested before `shared::init`
    pub const NOT_INITIALIZED: i32 = 1105;
}

/// Log a fixture error with structured context
///
/// Emits error_code, component and message so test-suite setup failures are
/// easy to grep for in CI output.
pub fn log_fixture_error(err: &FixtureError, context: &str) {
    error!(
        error_code = err.code(),
        component = "FixtureSet",
        "Fixture error in {}: {}",
        context,
        err.message()
    );
}

/// Errors raised while building the fixture set.
///
/// Resolution itself never fails; every variant here belongs to startup.
#[derive(Debug, Clone, PartialEq)]
pub enum FixtureError {
    /// Fixture file is missing
    FixtureMissing { key: FixtureKey, path: PathBuf },

    /// Fixture file could not be read
    FixtureUnreadable {
        key: FixtureKey,
        path: PathBuf,
        reason: String,
    },

    /// Style document is not UTF-8
    InvalidUtf8 { key: FixtureKey },

    /// In-memory construction lacked a key
    IncompleteSet { key: FixtureKey },

    /// Shared resolver not installed yet
    NotInitialized,
}

impl ErrorCode for FixtureError {
    fn code(&self) -> i32 {
        match self {
            FixtureError::FixtureMissing { .. } => FixtureErrorCodes::FIXTURE_MISSING,
            FixtureError::FixtureUnreadable { .. } => FixtureErrorCodes::FIXTURE_UNREADABLE,
            FixtureError::InvalidUtf8 { .. } => FixtureErrorCodes::INVALID_UTF8,
            FixtureError::IncompleteSet { .. } => FixtureErrorCodes::INCOMPLETE_SET,
            FixtureError::NotInitialized => FixtureErrorCodes::NOT_INITIALIZED,
        }
    }

    fn message(&self) -> String {
        match self {
            FixtureError::FixtureMissing { key, path } => {
                format!("Fixture {} not found at {}", key, path.display())
            }
            FixtureError::FixtureUnreadable { key, path, reason } => {
                format!(
                    "Failed to read fixture {} from {}: {}",
                    key,
                    path.display(),
                    reason
                )
            }
            FixtureError::InvalidUtf8 { key } => {
                format!("Fixture {} must be valid UTF-8", key)
            }
            FixtureError::IncompleteSet { key } => {
                format!("Fixture set is missing a buffer for {}", key)
            }
            FixtureError::NotInitialized => {
                "Shared fixture resolver not initialized. Call shared::init() first.".to_string()
            }
        }
    }
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixtureError (code {}): {}", self.code(), self.message())
    }
}

impl std::error::Error for FixtureError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_error_codes() {
        assert_eq!(
            FixtureError::FixtureMissing {
                key: FixtureKey::Glyph,
                path: PathBuf::from("glyphs.pbf"),
            }
            .code(),
            FixtureErrorCodes::FIXTURE_MISSING
        );
        assert_eq!(
            FixtureError::FixtureUnreadable {
                key: FixtureKey::Glyph,
                path: PathBuf::from("glyphs.pbf"),
                reason: "denied".to_string(),
            }
            .code(),
            FixtureErrorCodes::FIXTURE_UNREADABLE
        );
        assert_eq!(
            FixtureError::InvalidUtf8 {
                key: FixtureKey::StyleRaster
            }
            .code(),
            FixtureErrorCodes::INVALID_UTF8
        );
        assert_eq!(
            FixtureError::IncompleteSet {
                key: FixtureKey::TileVector
            }
            .code(),
            FixtureErrorCodes::INCOMPLETE_SET
        );
        assert_eq!(
            FixtureError::NotInitialized.code(),
            FixtureErrorCodes::NOT_INITIALIZED
        );
    }

    #[test]
    fn test_fixture_error_messages() {
        let err = FixtureError::FixtureMissing {
            key: FixtureKey::SpritePng,
            path: PathBuf::from("/tmp/sprite.png"),
        };
        assert_eq!(err.message(), "Fixture sprite_png not found at /tmp/sprite.png");

        let err = FixtureError::InvalidUtf8 {
            key: FixtureKey::StyleVector,
        };
        assert!(err.message().contains("style_vector"));

        let err = FixtureError::NotInitialized;
        assert!(err.to_string().contains("code 1105"));
    }
}
