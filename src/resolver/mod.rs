//! Request-to-fixture resolution.
//!
//! [`FixtureResolver::resolve`] is a pure function of the request URL: it
//! walks [`RULES`] and lends out the buffer of the first matching rule.

use serde::{Deserialize, Serialize};

use crate::fixtures::{FixtureKey, FixtureSet};

pub mod rules;

pub use rules::{classify, match_url, Matcher, Rule, RULES};

/// Read-only description of an outgoing request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub url: Option<String>,
}

impl Request {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            url: Some(url.into()),
        }
    }

    /// Request with no URL (for example a cancelled or synthetic request).
    pub fn without_url() -> Self {
        Self::default()
    }
}

/// Outcome of resolving a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// Mocked response body for the request.
    Fixture { key: FixtureKey, data: &'a [u8] },
    /// The request has no mocked response.
    NoFixture,
}

impl<'a> Resolution<'a> {
    pub fn key(&self) -> Option<FixtureKey> {
        match self {
            Resolution::Fixture { key, .. } => Some(*key),
            Resolution::NoFixture => None,
        }
    }

    pub fn data(&self) -> Option<&'a [u8]> {
        match self {
            Resolution::Fixture { data, .. } => Some(*data),
            Resolution::NoFixture => None,
        }
    }

    pub fn is_fixture(&self) -> bool {
        matches!(self, Resolution::Fixture { .. })
    }
}

/// Owns a [`FixtureSet`] and maps requests onto it.
#[derive(Debug, Clone)]
pub struct FixtureResolver {
    fixtures: FixtureSet,
}

impl FixtureResolver {
    pub fn new(fixtures: FixtureSet) -> Self {
        Self { fixtures }
    }

    /// Underlying buffers, for test setup that needs the style documents.
    pub fn fixtures(&self) -> &FixtureSet {
        &self.fixtures
    }

    pub fn resolve(&self, request: &Request) -> Resolution<'_> {
        self.resolve_url(request.url.as_deref())
    }

    pub fn resolve_url(&self, url: Option<&str>) -> Resolution<'_> {
        let Some(url) = url else {
            return Resolution::NoFixture;
        };

        match match_url(url) {
            Some(rule) => {
                tracing::trace!("[Resolver] {} matched rule {}", url, rule.name);
                Resolution::Fixture {
                    key: rule.key,
                    data: self.fixtures.get(rule.key),
                }
            }
            None => {
                tracing::trace!("[Resolver] No fixture for {}", url);
                Resolution::NoFixture
            }
        }
    }
}
