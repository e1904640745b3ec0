//! Fixture buffers standing in for network responses.
//!
//! A [`FixtureSet`] holds one byte buffer per [`FixtureKey`]. It is read once
//! from the fixture directory, never mutated afterwards, and handed to the
//! resolver which lends out slices of it.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::MockConfig;
use crate::error::FixtureError;

/// Logical names of the canned responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FixtureKey {
    StyleRaster,
    StyleVector,
    SpriteJson,
    SpritePng,
    Glyph,
    SourceRaster,
    SourceVector,
    TileRaster,
    TileVector,
}

impl FixtureKey {
    /// Every key, in storage order.
    pub const ALL: [FixtureKey; 9] = [
        FixtureKey::StyleRaster,
        FixtureKey::StyleVector,
        FixtureKey::SpriteJson,
        FixtureKey::SpritePng,
        FixtureKey::Glyph,
        FixtureKey::SourceRaster,
        FixtureKey::SourceVector,
        FixtureKey::TileRaster,
        FixtureKey::TileVector,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FixtureKey::StyleRaster => "style_raster",
            FixtureKey::StyleVector => "style_vector",
            FixtureKey::SpriteJson => "sprite_json",
            FixtureKey::SpritePng => "sprite_png",
            FixtureKey::Glyph => "glyph",
            FixtureKey::SourceRaster => "source_raster",
            FixtureKey::SourceVector => "source_vector",
            FixtureKey::TileRaster => "tile_raster",
            FixtureKey::TileVector => "tile_vector",
        }
    }

    /// File name inside the fixture directory when no override is configured.
    pub fn default_file_name(self) -> &'static str {
        match self {
            FixtureKey::StyleRaster => "style_raster.json",
            FixtureKey::StyleVector => "style_vector.json",
            FixtureKey::SpriteJson => "sprite.json",
            FixtureKey::SpritePng => "sprite.png",
            FixtureKey::Glyph => "glyphs.pbf",
            FixtureKey::SourceRaster => "source_raster.json",
            FixtureKey::SourceVector => "source_vector.json",
            FixtureKey::TileRaster => "raster.tile",
            FixtureKey::TileVector => "vector.tile",
        }
    }

    /// Style documents are consumed as text and must be UTF-8.
    pub fn is_text(self) -> bool {
        matches!(self, FixtureKey::StyleRaster | FixtureKey::StyleVector)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FixtureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FixtureKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FixtureKey::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .ok_or_else(|| format!("unknown fixture key '{value}'"))
    }
}

/// Immutable set of fixture buffers, one per [`FixtureKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSet {
    // Indexed by `FixtureKey::index`; always holds `FixtureKey::ALL.len()` entries.
    buffers: Vec<Vec<u8>>,
}

impl FixtureSet {
    /// Read every fixture file named by `config`.
    ///
    /// Fails on the first missing or unreadable file so a broken fixture
    /// directory stops test setup instead of surfacing as odd mismatches later.
    pub fn load(config: &MockConfig) -> Result<Self, FixtureError> {
        let mut buffers = Vec::with_capacity(FixtureKey::ALL.len());
        let mut total_bytes = 0usize;

        for key in FixtureKey::ALL {
            let path = config.path_for(key);
            let data = fs::read(&path).map_err(|err| {
                if err.kind() == ErrorKind::NotFound {
                    FixtureError::FixtureMissing {
                        key,
                        path: path.clone(),
                    }
                } else {
                    FixtureError::FixtureUnreadable {
                        key,
                        path: path.clone(),
                        reason: err.to_string(),
                    }
                }
            })?;
            tracing::debug!("[FixtureSet] Loaded {} ({} bytes) from {:?}", key, data.len(), path);
            total_bytes += data.len();
            buffers.push(data);
        }

        let set = Self::checked(buffers)?;
        tracing::info!(
            "[FixtureSet] Loaded {} fixtures ({} bytes) from {:?}",
            FixtureKey::ALL.len(),
            total_bytes,
            config.fixture_root
        );
        Ok(set)
    }

    /// Build a set from in-memory buffers. Every key must be present; later
    /// duplicates replace earlier ones.
    pub fn from_buffers<I>(entries: I) -> Result<Self, FixtureError>
    where
        I: IntoIterator<Item = (FixtureKey, Vec<u8>)>,
    {
        let mut slots: Vec<Option<Vec<u8>>> = vec![None; FixtureKey::ALL.len()];
        for (key, data) in entries {
            slots[key.index()] = Some(data);
        }

        let buffers = FixtureKey::ALL
            .into_iter()
            .zip(slots)
            .map(|(key, slot)| slot.ok_or(FixtureError::IncompleteSet { key }))
            .collect::<Result<Vec<_>, _>>()?;
        Self::checked(buffers)
    }

    fn checked(buffers: Vec<Vec<u8>>) -> Result<Self, FixtureError> {
        for key in FixtureKey::ALL.into_iter().filter(|key| key.is_text()) {
            if std::str::from_utf8(&buffers[key.index()]).is_err() {
                return Err(FixtureError::InvalidUtf8 { key });
            }
        }
        Ok(Self { buffers })
    }

    /// Raw bytes for `key`.
    pub fn get(&self, key: FixtureKey) -> &[u8] {
        &self.buffers[key.index()]
    }

    /// Iterate `(key, bytes)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (FixtureKey, &[u8])> {
        FixtureKey::ALL
            .into_iter()
            .map(move |key| (key, self.get(key)))
    }

    pub fn style_raster(&self) -> &str {
        self.text(FixtureKey::StyleRaster)
    }

    pub fn style_vector(&self) -> &str {
        self.text(FixtureKey::StyleVector)
    }

    pub fn sprite_json(&self) -> &[u8] {
        self.get(FixtureKey::SpriteJson)
    }

    pub fn sprite_png(&self) -> &[u8] {
        self.get(FixtureKey::SpritePng)
    }

    pub fn glyph(&self) -> &[u8] {
        self.get(FixtureKey::Glyph)
    }

    pub fn source_raster(&self) -> &[u8] {
        self.get(FixtureKey::SourceRaster)
    }

    pub fn source_vector(&self) -> &[u8] {
        self.get(FixtureKey::SourceVector)
    }

    pub fn tile_raster(&self) -> &[u8] {
        self.get(FixtureKey::TileRaster)
    }

    pub fn tile_vector(&self) -> &[u8] {
        self.get(FixtureKey::TileVector)
    }

    // UTF-8 validity of text keys is checked on construction.
    fn text(&self, key: FixtureKey) -> &str {
        std::str::from_utf8(self.get(key)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests;
