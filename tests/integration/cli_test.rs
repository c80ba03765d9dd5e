//! Integration tests for the vidctl command line

use predicates::prelude::*;
use serde_json::Value;

use crate::helpers::TestEnv;

fn inspect_json(env: &TestEnv, args: &[&str]) -> Value {
    let output = env
        .vidctl()
        .arg("inspect")
        .args(args)
        .output()
        .expect("Failed to run vidctl");
    assert!(
        output.status.success(),
        "inspect failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("inspect output is not JSON")
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    TestEnv::new()
        .vidctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_shows_package_version() {
    TestEnv::new()
        .vidctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn play_help_documents_source_format() {
    TestEnv::new()
        .vidctl()
        .args(["play", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("URL[#MIME]"))
        .stdout(predicate::str::contains("--autohide-delay"))
        .stdout(predicate::str::contains("--log-file"));
}

// ============================================================================
// inspect
// ============================================================================

#[test]
fn inspect_reports_initial_state() {
    let env = TestEnv::new();
    let json = inspect_json(&env, &["clip.mp4", "--duration", "75"]);

    assert_eq!(json["root_classes"], "player");
    assert_eq!(json["state"]["is_playing"], false);
    assert_eq!(json["state"]["show_controls"], true);
    assert_eq!(json["state"]["remaining_time"], 75);
    assert_eq!(json["view"]["remaining_label"], "01:15");
    assert_eq!(json["view"]["play_icon"], "play");
    assert_eq!(json["view"]["sources"][0]["mime_type"], "video/mp4");
}

#[test]
fn inspect_with_autoplay_hides_controls() {
    let env = TestEnv::new();
    let json = inspect_json(&env, &["clip.webm", "--autoplay", "--muted"]);

    assert_eq!(json["root_classes"], "player player--controls-hidden");
    assert_eq!(json["state"]["is_playing"], true);
    assert_eq!(json["view"]["sound_icon"], "volume-off");
}

#[test]
fn inspect_uses_config_file_defaults() {
    let env = TestEnv::new();
    env.write_config("[player]\nautoplay = true\n\n[simulation]\nduration_secs = 30.0\n");

    let json = inspect_json(&env, &["clip.mp4"]);
    assert_eq!(json["state"]["is_playing"], true);
    assert_eq!(json["state"]["remaining_time"], 30);
}

#[test]
fn negated_flags_override_config_file() {
    let env = TestEnv::new();
    env.write_config("[player]\nautoplay = true\nmuted = true\n");

    let json = inspect_json(&env, &["clip.mp4", "--no-autoplay", "--no-muted"]);
    assert_eq!(json["state"]["is_playing"], false);
    assert_eq!(json["state"]["muted"], false);
    assert_eq!(json["state"]["show_controls"], true);
}

#[test]
fn inspect_renders_media_attributes() {
    let env = TestEnv::new();
    let json = inspect_json(
        &env,
        &["clip.mp4", "--attr", "poster=cover.jpg", "--attr", "controls=true"],
    );

    let attributes = json["view"]["media_attributes"].as_array().unwrap();
    assert!(attributes.contains(&serde_json::json!(["poster", "cover.jpg"])));
    assert_eq!(attributes.last().unwrap(), &serde_json::json!(["controls", "false"]));
}

#[test]
fn inspect_without_sources_is_a_usage_error() {
    TestEnv::new().vidctl().arg("inspect").assert().code(2);
}

#[test]
fn inspect_rejects_unknown_media_type() {
    TestEnv::new()
        .vidctl()
        .args(["inspect", "movie.xyz"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot infer media type"));
}

#[test]
fn inspect_rejects_unknown_attribute() {
    TestEnv::new()
        .vidctl()
        .args(["inspect", "clip.mp4", "--attr", "autoplay"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown media attribute 'autoplay'"));
}

// ============================================================================
// config and completions
// ============================================================================

#[test]
fn config_path_honours_environment() {
    let env = TestEnv::new();
    env.vidctl()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            env.config_path().display().to_string(),
        ));
}

#[test]
fn config_show_prints_effective_toml() {
    let env = TestEnv::new();
    env.write_config("[player]\nmuted = true\n");

    env.vidctl()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[player]"))
        .stdout(predicate::str::contains("muted = true"))
        .stdout(predicate::str::contains("autohide_controls_delay_ms = 3000"));
}

#[test]
fn invalid_config_file_fails() {
    let env = TestEnv::new();
    env.write_config("[player]\nautoplay = \"often\"\n");

    env.vidctl()
        .args(["inspect", "clip.mp4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn completions_are_generated() {
    TestEnv::new()
        .vidctl()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vidctl"));
}

#[test]
fn play_requires_a_terminal() {
    let env = TestEnv::new();
    let log_file = env.dir.path().join("vidctl.log");
    env.vidctl()
        .args(["play", "clip.mp4", "--log-file"])
        .arg(&log_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
