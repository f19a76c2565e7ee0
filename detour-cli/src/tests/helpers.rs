//! Test helpers for writing solve request fixtures.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

/// Request with one zero-width stop on the equator midpoint and no slack.
pub(super) const MIDPOINT_REQUEST: &str = r#"{
    "start": {"lat": 0.0, "lng": 0.0},
    "end": {"lat": 0.0, "lng": 1.0},
    "kappa": 0.0,
    "locations": [
        {"coordinate": [{"lat": 0.0, "lng": 0.5}, {"lat": 0.0, "lng": 0.5}], "time": 0}
    ]
}"#;

/// Request with one zero-width stop on the equator and two slightly north
/// of it, leaving 10% slack. Round 0 clearly prefers the on-line stop and
/// round 1 prefers the stop furthest east.
pub(super) const CHAIN_REQUEST: &str = r#"{
    "start": {"lat": 0.0, "lng": 0.0},
    "end": {"lat": 0.0, "lng": 1.0},
    "kappa": 0.1,
    "locations": [
        {"coordinate": [{"lat": 0.0, "lng": 0.2}, {"lat": 0.0, "lng": 0.2}], "time": 0},
        {"coordinate": [{"lat": 0.01, "lng": 0.4}, {"lat": 0.01, "lng": 0.4}], "time": 0},
        {"coordinate": [{"lat": 0.01, "lng": 0.6}, {"lat": 0.01, "lng": 0.6}], "time": 0}
    ]
}"#;

/// Request whose second location lists a single coordinate.
pub(super) const MALFORMED_LOCATION_REQUEST: &str = r#"{
    "start": {"lat": 0.0, "lng": 0.0},
    "end": {"lat": 0.0, "lng": 1.0},
    "kappa": 0.5,
    "locations": [
        {"coordinate": [{"lat": 0.0, "lng": 0.5}, {"lat": 0.0, "lng": 0.6}], "time": 0},
        {"coordinate": [{"lat": 0.0, "lng": 0.7}], "time": 1}
    ]
}"#;

/// Request with a negative detour factor.
pub(super) const NEGATIVE_KAPPA_REQUEST: &str = r#"{
    "start": {"lat": 0.0, "lng": 0.0},
    "end": {"lat": 0.0, "lng": 1.0},
    "kappa": -0.5,
    "locations": []
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path, contents).expect("write fixture file");
}

/// Create a temporary workspace and return it with its UTF-8 root.
pub(super) fn utf8_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}
