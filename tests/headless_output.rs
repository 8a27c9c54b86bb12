//! Startup wiring and headless JSON output

use std::fs;

use puppies::{build_state, write_screen};
use puppy_core::{Error, Route};
use serde_json::Value;
use tempfile::tempdir;

fn render_json(route: Option<&str>) -> Value {
    let dir = tempdir().unwrap();
    let state = build_state(route, dir.path()).unwrap();
    let mut out = Vec::new();
    write_screen(&mut out, &state).unwrap();
    serde_json::from_slice(&out).unwrap()
}

#[test]
fn test_default_route_is_list() {
    let json = render_json(None);
    assert_eq!(json["route"], "list");
    assert_eq!(json["screen"], "list");

    let tiles = json["view"].as_array().unwrap();
    let ids: Vec<i64> = tiles.iter().map(|t| t["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(tiles[0]["name"], "Bob");
    assert_eq!(tiles[0]["image"], "dog1");
}

#[test]
fn test_detail_route() {
    let json = render_json(Some("details/3"));
    assert_eq!(json["route"], "details/3");
    assert_eq!(json["screen"], "detail");
    assert_eq!(json["view"]["kind"], "puppy");
    assert_eq!(json["view"]["name"], "Star");
    assert_eq!(json["view"]["age"], 1);
}

#[test]
fn test_malformed_detail_argument_is_empty() {
    let json = render_json(Some("details/abc"));
    assert_eq!(json["screen"], "detail");
    assert_eq!(json["view"]["kind"], "empty");
}

#[test]
fn test_unknown_route_is_an_error() {
    let dir = tempdir().unwrap();
    let err = build_state(Some("settings"), dir.path()).unwrap_err();
    assert!(matches!(err, Error::InvalidRoute { .. }));
    assert!(err.is_fatal());
}

#[test]
fn test_settings_are_applied() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("config.toml"),
        "[ui]\ntitle = \"Shelter\"\n[behavior]\nback_quits_at_root = false\n",
    )
    .unwrap();

    let state = build_state(Some("details/1"), dir.path()).unwrap();
    assert_eq!(state.settings.ui.title, "Shelter");
    assert!(!state.settings.behavior.back_quits_at_root);
    assert_eq!(state.route(), &Route::detail(puppy_core::PuppyId(1)));
    assert_eq!(state.selected, 0);
}
