//! Ordered URL matching rules.
//!
//! Predicates overlap, so evaluation is first-match-wins over [`RULES`].
//! All checks are case-sensitive byte comparisons; URLs are never parsed.

use serde::Serialize;

use crate::fixtures::FixtureKey;

/// Tile metadata URL the vector style requests through HTTPS.
pub const VECTOR_SOURCE_URL: &str =
    "https://api.maptiler.com/tiles/v3/tiles.json?key=uwvyvzaF2P7UWbyOEvjU";

/// Custom-scheme alias for [`VECTOR_SOURCE_URL`].
pub const VECTOR_SOURCE_URI: &str = "maptiler://sources/v3";

/// Predicate applied to a request URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Matcher {
    /// URL contains `needle`.
    Contains { needle: &'static str },
    /// URL contains `needle` and ends with one of `suffixes`.
    ContainsWithSuffix {
        needle: &'static str,
        suffixes: &'static [&'static str],
    },
    /// URL equals one of `candidates` exactly.
    Exact { candidates: &'static [&'static str] },
}

impl Matcher {
    pub fn matches(&self, url: &str) -> bool {
        match self {
            Matcher::Contains { needle } => url.contains(needle),
            Matcher::ContainsWithSuffix { needle, suffixes } => {
                url.contains(needle) && suffixes.iter().any(|suffix| url.ends_with(suffix))
            }
            Matcher::Exact { candidates } => candidates.iter().any(|candidate| *candidate == url),
        }
    }
}

/// A named predicate and the fixture it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub name: &'static str,
    pub matcher: Matcher,
    pub key: FixtureKey,
}

/// Rule table in evaluation order.
pub const RULES: &[Rule] = &[
    Rule {
        name: "sprite_json",
        matcher: Matcher::ContainsWithSuffix {
            needle: "sprite",
            suffixes: &[".json"],
        },
        key: FixtureKey::SpriteJson,
    },
    Rule {
        name: "sprite_png",
        matcher: Matcher::ContainsWithSuffix {
            needle: "sprite",
            suffixes: &[".png"],
        },
        key: FixtureKey::SpritePng,
    },
    Rule {
        name: "glyph",
        matcher: Matcher::ContainsWithSuffix {
            needle: "fonts/",
            suffixes: &[".pbf"],
        },
        key: FixtureKey::Glyph,
    },
    Rule {
        name: "source_raster",
        matcher: Matcher::Contains {
            needle: "sources/satellite",
        },
        key: FixtureKey::SourceRaster,
    },
    Rule {
        name: "tile_raster",
        // Suffixes carry no leading dot.
        matcher: Matcher::ContainsWithSuffix {
            needle: "tiles/satellite",
            suffixes: &["png", "webp", "jpg"],
        },
        key: FixtureKey::TileRaster,
    },
    Rule {
        name: "source_vector",
        matcher: Matcher::Exact {
            candidates: &[VECTOR_SOURCE_URL, VECTOR_SOURCE_URI],
        },
        key: FixtureKey::SourceVector,
    },
    Rule {
        name: "tile_vector",
        matcher: Matcher::ContainsWithSuffix {
            needle: "tiles/tiles",
            suffixes: &["pbf"],
        },
        key: FixtureKey::TileVector,
    },
];

/// First rule matching `url`, if any.
pub fn match_url(url: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.matcher.matches(url))
}

/// Fixture key for `url` without needing a loaded fixture set.
pub fn classify(url: Option<&str>) -> Option<FixtureKey> {
    url.and_then(match_url).map(|rule| rule.key)
}
