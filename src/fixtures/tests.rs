use std::fs;
use std::path::Path;

use super::*;
use crate::config::MockConfig;
use crate::error::{ErrorCode, FixtureErrorCodes};

fn write_all_fixtures(root: &Path) {
    for key in FixtureKey::ALL {
        fs::write(root.join(key.default_file_name()), key.as_str()).unwrap();
    }
}

#[test]
fn key_names_round_trip_through_from_str() {
    for key in FixtureKey::ALL {
        assert_eq!(key.as_str().parse::<FixtureKey>().unwrap(), key);
        assert_eq!(key.to_string(), key.as_str());
    }
    assert!("tiles".parse::<FixtureKey>().is_err());
}

#[test]
fn key_serializes_as_snake_case() {
    let json = serde_json::to_string(&FixtureKey::SourceVector).unwrap();
    assert_eq!(json, "\"source_vector\"");
}

#[test]
fn load_reads_every_fixture() {
    let dir = tempfile::tempdir().unwrap();
    write_all_fixtures(dir.path());

    let set = FixtureSet::load(&MockConfig::with_root(dir.path())).unwrap();
    assert_eq!(set.style_raster(), "style_raster");
    assert_eq!(set.style_vector(), "style_vector");
    assert_eq!(set.sprite_json(), b"sprite_json");
    assert_eq!(set.sprite_png(), b"sprite_png");
    assert_eq!(set.glyph(), b"glyph");
    assert_eq!(set.source_raster(), b"source_raster");
    assert_eq!(set.source_vector(), b"source_vector");
    assert_eq!(set.tile_raster(), b"tile_raster");
    assert_eq!(set.tile_vector(), b"tile_vector");
    assert_eq!(set.iter().count(), FixtureKey::ALL.len());
}

#[test]
fn load_fails_fast_on_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    write_all_fixtures(dir.path());
    fs::remove_file(dir.path().join("vector.tile")).unwrap();

    let err = FixtureSet::load(&MockConfig::with_root(dir.path())).unwrap_err();
    match &err {
        FixtureError::FixtureMissing { key, path } => {
            assert_eq!(*key, FixtureKey::TileVector);
            assert!(path.ends_with("vector.tile"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.code(), FixtureErrorCodes::FIXTURE_MISSING);
}

#[test]
fn load_reports_directory_in_place_of_file_as_unreadable() {
    let dir = tempfile::tempdir().unwrap();
    write_all_fixtures(dir.path());
    fs::remove_file(dir.path().join("glyphs.pbf")).unwrap();
    fs::create_dir(dir.path().join("glyphs.pbf")).unwrap();

    let err = FixtureSet::load(&MockConfig::with_root(dir.path())).unwrap_err();
    assert!(
        matches!(err, FixtureError::FixtureUnreadable { key: FixtureKey::Glyph, .. }),
        "unexpected error: {err:?}"
    );
}

#[test]
fn load_honours_file_name_overrides() {
    let dir = tempfile::tempdir().unwrap();
    write_all_fixtures(dir.path());
    fs::write(dir.path().join("0-255.pbf"), b"override").unwrap();

    let mut config = MockConfig::with_root(dir.path());
    config
        .file_names
        .insert(FixtureKey::Glyph, "0-255.pbf".to_string());

    let set = FixtureSet::load(&config).unwrap();
    assert_eq!(set.glyph(), b"override");
}

#[test]
fn load_rejects_binary_style_document() {
    let dir = tempfile::tempdir().unwrap();
    write_all_fixtures(dir.path());
    fs::write(dir.path().join("style_vector.json"), [0xffu8, 0xfe, 0x00]).unwrap();

    let err = FixtureSet::load(&MockConfig::with_root(dir.path())).unwrap_err();
    assert_eq!(
        err,
        FixtureError::InvalidUtf8 {
            key: FixtureKey::StyleVector
        }
    );
}

#[test]
fn binary_fixtures_may_hold_any_bytes() {
    let set = FixtureSet::from_buffers(FixtureKey::ALL.into_iter().map(|key| {
        let data = if key.is_text() { b"{}".to_vec() } else { vec![0xff, 0x00] };
        (key, data)
    }))
    .unwrap();
    assert_eq!(set.sprite_png(), &[0xffu8, 0x00]);
}

#[test]
fn from_buffers_requires_every_key() {
    let entries = FixtureKey::ALL
        .into_iter()
        .filter(|key| *key != FixtureKey::SpritePng)
        .map(|key| (key, Vec::new()));

    let err = FixtureSet::from_buffers(entries).unwrap_err();
    assert_eq!(
        err,
        FixtureError::IncompleteSet {
            key: FixtureKey::SpritePng
        }
    );
}

#[test]
fn from_buffers_keeps_last_duplicate() {
    let mut entries: Vec<_> = FixtureKey::ALL
        .into_iter()
        .map(|key| (key, Vec::new()))
        .collect();
    entries.push((FixtureKey::Glyph, b"second".to_vec()));

    let set = FixtureSet::from_buffers(entries).unwrap();
    assert_eq!(set.glyph(), b"second");
}

#[test]
fn bundled_fixture_directory_loads() {
    let set = FixtureSet::load(&MockConfig::default()).unwrap();
    assert!(!set.sprite_json().is_empty());
    assert!(set.style_raster().contains("\"version\""));
}
