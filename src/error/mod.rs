// Error types for the fixture mock
//
// Loading a fixture set is the only fallible step; resolution never errors.

mod fixture;

pub use fixture::{log_fixture_error, FixtureError, FixtureErrorCodes};

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}
