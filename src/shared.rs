//! Process-wide fixture resolver.
//!
//! Test suites call [`init`] once from their setup hook and then fetch the
//! resolver anywhere with [`resolver`]. The instance is never torn down.

use once_cell::sync::OnceCell;

use crate::config::MockConfig;
use crate::error::{log_fixture_error, FixtureError};
use crate::fixtures::FixtureSet;
use crate::resolver::FixtureResolver;

static RESOLVER: OnceCell<FixtureResolver> = OnceCell::new();

/// Load fixtures described by `config` and install the shared resolver.
///
/// Only the first successful call touches disk; later calls return the
/// installed resolver and ignore `config`. A failed load leaves the cell
/// empty so setup can be retried with a corrected config.
pub fn init(config: &MockConfig) -> Result<&'static FixtureResolver, FixtureError> {
    RESOLVER.get_or_try_init(|| {
        FixtureSet::load(config)
            .map(FixtureResolver::new)
            .map_err(|err| {
                log_fixture_error(&err, "shared::init");
                err
            })
    })
}

/// Installed shared resolver.
pub fn resolver() -> Result<&'static FixtureResolver, FixtureError> {
    RESOLVER.get().ok_or(FixtureError::NotInitialized)
}
