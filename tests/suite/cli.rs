//! End-to-end runs of the itemlist binary

use std::fs;

use serde_json::Value;

use crate::common::run_itemlist;

fn stdout_json(output: &std::process::Output) -> Value {
    assert!(
        output.status.success(),
        "itemlist failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn diff_reports_positions() {
    let home = tempfile::tempdir().unwrap();
    let old = home.path().join("old.json");
    let new = home.path().join("new.json");
    fs::write(
        &old,
        r#"[
            {"id": "a", "order": 0, "title": "Alpha"},
            {"id": "b", "order": 1, "title": "Beta"},
            {"id": "c", "order": 2, "title": "Gamma"}
        ]"#,
    )
    .unwrap();
    fs::write(
        &new,
        r#"[
            {"id": "a", "order": 0, "title": "Alpha"},
            {"id": "c", "order": 1, "title": "Gamma!"},
            {"id": "d", "order": 2, "title": "Delta"}
        ]"#,
    )
    .unwrap();

    let output = run_itemlist(
        home.path(),
        &["diff", old.to_str().unwrap(), new.to_str().unwrap()],
    );
    let transition = stdout_json(&output);

    assert_eq!(transition["deletions"], serde_json::json!([{"index": 1}]));
    assert_eq!(transition["insertions"][0]["index"], 2);
    assert_eq!(transition["insertions"][0]["item"]["id"], "d");
    assert_eq!(transition["updates"][0]["index"], 1);
    assert_eq!(transition["updates"][0]["previous_index"], 2);
    assert_eq!(transition["updates"][0]["item"]["title"], "Gamma!");
}

#[test]
fn diff_force_updates_identical_snapshots() {
    let home = tempfile::tempdir().unwrap();
    let snapshot = home.path().join("rows.json");
    fs::write(&snapshot, r#"[{"id": "a"}, {"id": "b"}]"#).unwrap();
    let path = snapshot.to_str().unwrap();

    let plain = stdout_json(&run_itemlist(home.path(), &["diff", path, path]));
    assert_eq!(plain["updates"], serde_json::json!([]));

    let forced = stdout_json(&run_itemlist(home.path(), &["diff", path, path, "--force"]));
    assert_eq!(forced["updates"].as_array().unwrap().len(), 2);
    assert_eq!(forced["insertions"], serde_json::json!([]));
}

#[test]
fn diff_places_rows_by_order_not_file_position() {
    let home = tempfile::tempdir().unwrap();
    let old = home.path().join("old.json");
    let new = home.path().join("new.json");
    fs::write(&old, r#"[{"id": "a", "order": 1}, {"id": "b", "order": 2}]"#).unwrap();
    fs::write(&new, r#"[{"id": "b", "order": 2}, {"id": "a", "order": 1}]"#).unwrap();

    let output = run_itemlist(
        home.path(),
        &["diff", old.to_str().unwrap(), new.to_str().unwrap()],
    );
    let transition = stdout_json(&output);

    assert_eq!(transition["deletions"], serde_json::json!([]));
    assert_eq!(transition["insertions"], serde_json::json!([]));
    assert_eq!(transition["updates"], serde_json::json!([]));
}

#[test]
fn diff_rejects_duplicate_ids() {
    let home = tempfile::tempdir().unwrap();
    let snapshot = home.path().join("dup.json");
    fs::write(&snapshot, r#"[{"id": "a"}, {"id": "a"}]"#).unwrap();
    let path = snapshot.to_str().unwrap();

    let output = run_itemlist(home.path(), &["diff", path, path]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("duplicate row id"));
}

#[test]
fn languages_use_configured_catalog() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("config.toml");
    fs::write(
        &config,
        r#"
[[languages]]
title = "German"
subtitle = "Deutsch"
code = "de"

[[languages]]
title = "French"
subtitle = "Français"
code = "fr"
"#,
    )
    .unwrap();

    let output = run_itemlist(
        home.path(),
        &[
            "--config",
            config.to_str().unwrap(),
            "--json",
            "languages",
            "--active",
            "fr",
        ],
    );
    let rows = stdout_json(&output);

    assert_eq!(rows[0]["title"], "German");
    assert_eq!(rows[0]["checked"], false);
    assert_eq!(rows[1]["title"], "French");
    assert_eq!(rows[1]["checked"], true);
    assert_eq!(rows[1]["action"]["kind"], "select_localization");
    assert_eq!(rows[1]["action"]["code"], "fr");
}

#[test]
fn languages_offline_shows_loading() {
    let home = tempfile::tempdir().unwrap();
    let output = run_itemlist(home.path(), &["languages", "--offline"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Loading...");
}

#[test]
fn discover_renders_sections_as_text() {
    let home = tempfile::tempdir().unwrap();
    let output = run_itemlist(home.path(), &["discover"]);

    assert!(output.status.success());
    let text = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "  Scan a QR code to log in to your account on another device.",
            "Link Desktop Device >",
            "",
            "People Nearby >",
            "Help >",
        ]
    );
}

#[test]
fn set_theme_round_trips_through_config() {
    let home = tempfile::tempdir().unwrap();
    let config = home.path().join("settings").join("config.toml");
    let config_arg = config.to_str().unwrap();

    let output = run_itemlist(home.path(), &["--config", config_arg, "set-theme", "night"]);
    assert!(output.status.success());
    assert!(fs::read_to_string(&config).unwrap().contains("theme = \"night\""));

    let output = run_itemlist(home.path(), &["--config", config_arg, "--json", "helper"]);
    let rows = stdout_json(&output);
    assert_eq!(rows[0]["title"], "Language");
    assert_eq!(rows[0]["action"]["kind"], "open_language");
}
