//! Tests for the JSON entrypoint.

use serde_json::{Value, json};
use stylo_core::config::StyloConfig;
use stylo_core::ffi::{MODES, run_json, run_json_with_config, run_json_with_config_file};

fn call(mode: &str, args: Value) -> Value {
    serde_json::from_str(&run_json(mode, &args.to_string())).expect("envelope is valid JSON")
}

fn error_code(reply: &Value) -> &str {
    assert_eq!(reply["ok"], false, "expected an error envelope: {reply}");
    reply["error"]["code"].as_str().expect("code is a string")
}

#[test]
fn metrics_on_empty_text_succeeds() {
    let reply = call("metrics", json!({"text": ""}));
    assert_eq!(reply["ok"], true);
    assert_eq!(reply["data"]["burstiness"]["cv"], 0.0);
    assert_eq!(reply["data"]["hapax_rate"]["label"], "Insufficient text");
    assert_eq!(reply["data"]["discipline"], "default");
    assert!(reply.get("error").is_none());
}

#[test]
fn metrics_accepts_every_argument() {
    let reply = call(
        "metrics",
        json!({
            "text": "Honestly, I didn't expect much. We fed them nothing at all.",
            "pattern_score": 40,
            "structural_penalty": 12.5,
            "non_native": true,
            "scoring_version": "v2",
            "discipline": "stem",
        }),
    );
    assert_eq!(reply["ok"], true);
    let composite = &reply["data"]["composite"];
    assert_eq!(composite["scoring_version"], "v2");
    assert_eq!(composite["components"]["pattern_score"], 40.0);
    assert_eq!(composite["components"]["structural_penalty"], 12.5);
    assert!(composite["components"].get("discourse_penalty").is_none());
    assert_eq!(reply["data"]["discipline_profile"]["name"], "stem");
}

#[test]
fn unknown_mode_is_reported() {
    let reply = call("humanize", json!({}));
    assert_eq!(error_code(&reply), "unknown_mode");
}

#[test]
fn malformed_json_is_reported() {
    let reply: Value = serde_json::from_str(&run_json("metrics", "{not json")).unwrap();
    assert_eq!(error_code(&reply), "invalid_json");
}

#[test]
fn wrongly_typed_fields_are_invalid_settings() {
    for (mode, args) in [
        ("metrics", json!({"text": 42})),
        ("metrics", json!({"text": "a b c.", "pattern_score": "high"})),
        ("metrics", json!({"text": "a b c.", "non_native": "yes"})),
        ("metrics", json!({"text": "a b c.", "scoring_version": "v1"})),
        ("metrics", json!({"text": "a b c.", "discipline": 7})),
        ("status", json!({"text": "a b c.", "target": "thirty"})),
        ("verify", json!({"original_text": "a", "humanized_text": "b", "pattern_score_after": []})),
    ] {
        let reply = call(mode, args.clone());
        assert_eq!(error_code(&reply), "invalid_settings", "{mode} {args}");
    }
}

#[test]
fn missing_required_text_is_invalid_settings() {
    assert_eq!(error_code(&call("diff", json!({"original_text": "x"}))), "invalid_settings");
    assert_eq!(error_code(&call("status", json!({}))), "invalid_settings");
}

#[test]
fn null_fields_fall_back_to_defaults() {
    let reply = call(
        "metrics",
        json!({"text": "One two three four.", "pattern_score": null, "scoring_version": null}),
    );
    assert_eq!(reply["ok"], true);
    assert_eq!(reply["data"]["composite"]["scoring_version"], "v3");
}

#[test]
fn verify_and_diff_round_trip() {
    let args = json!({
        "original_text": "The results show a trend. The results show a trend.",
        "humanized_text": "Honestly? We saw a trend, though it wasn't what anyone expected at first.",
        "pattern_score_before": 60,
        "pattern_score_after": 10,
    });
    let verify = call("verify", args.clone());
    assert_eq!(verify["ok"], true);
    assert!(verify["data"]["needs_another_pass"].is_boolean());
    assert_eq!(verify["data"]["before"]["composite"]["components"]["pattern_score"], 60.0);

    let diff = call("diff", args);
    assert_eq!(diff["ok"], true);
    assert_eq!(diff["data"]["deltas"].as_object().unwrap().len(), 20);
}

#[test]
fn status_defaults_target_to_thirty() {
    let reply = call("status", json!({"text": "Short text here."}));
    assert_eq!(reply["ok"], true);
    assert_eq!(reply["data"]["target_composite"], 30.0);
    assert_eq!(reply["data"]["readiness"], "needs_work");
    assert_eq!(reply["data"]["metrics"].as_object().unwrap().len(), 12);
}

#[test]
fn discourse_mode_returns_targets_and_flags() {
    let reply = call("discourse", json!({"text": "The data are clean. The model is fine.", "discipline": "education"}));
    assert_eq!(reply["ok"], true);
    assert_eq!(reply["data"]["discipline"], "education");
    assert_eq!(reply["data"]["discipline_targets"]["contraction_target"], 0.15);
    assert!(!reply["data"]["flags"].as_array().unwrap().is_empty());
}

#[test]
fn profiles_lists_the_table() {
    let reply = call("profiles", json!({}));
    let profiles = reply["data"].as_array().unwrap();
    assert_eq!(profiles.len(), 7);
    assert_eq!(profiles[0]["name"], "default");
    assert_eq!(profiles[4]["name"], "stem");
}

#[test]
fn every_advertised_mode_is_dispatched() {
    for mode in MODES {
        let reply = call(
            mode,
            json!({"text": "x", "original_text": "x", "humanized_text": "y"}),
        );
        assert_eq!(reply["ok"], true, "{mode}: {reply}");
    }
}

#[test]
fn config_supplies_defaults() {
    let config = StyloConfig::from_toml(
        r#"
        scoring_version = "v2"
        discipline = "humanities"
        target_composite = 50.0
        "#,
    )
    .unwrap();

    let metrics: Value = serde_json::from_str(&run_json_with_config(
        "metrics",
        r#"{"text": "The cat sat on the mat."}"#,
        &config,
    ))
    .unwrap();
    assert_eq!(metrics["data"]["composite"]["scoring_version"], "v2");
    assert_eq!(metrics["data"]["discipline"], "humanities");

    let status: Value = serde_json::from_str(&run_json_with_config(
        "status",
        r#"{"text": "The cat sat on the mat."}"#,
        &config,
    ))
    .unwrap();
    assert_eq!(status["data"]["target_composite"], 50.0);
    assert_eq!(status["data"]["discipline"], "humanities");
}

#[test]
fn config_file_supplies_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stylo.toml");
    std::fs::write(&path, "discipline = \"stem\"\ntarget_composite = 45.0\n").unwrap();

    let reply: Value = serde_json::from_str(&run_json_with_config_file(
        "status",
        r#"{"text": "The cat sat on the mat."}"#,
        &path,
    ))
    .unwrap();
    assert_eq!(reply["ok"], true);
    assert_eq!(reply["data"]["discipline"], "stem");
    assert_eq!(reply["data"]["target_composite"], 45.0);
}

#[test]
fn missing_config_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let reply: Value = serde_json::from_str(&run_json_with_config_file(
        "version",
        "{}",
        &dir.path().join("absent.toml"),
    ))
    .unwrap();
    assert_eq!(error_code(&reply), "io_error");
}

#[test]
fn out_of_range_config_value_is_invalid_settings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stylo.toml");
    std::fs::write(&path, "pass_threshold = 250.0\n").unwrap();
    let reply: Value =
        serde_json::from_str(&run_json_with_config_file("version", "{}", &path)).unwrap();
    assert_eq!(error_code(&reply), "invalid_settings");
    assert!(reply["error"]["message"].as_str().unwrap().contains("pass_threshold"));
}

#[test]
fn malformed_config_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stylo.toml");
    std::fs::write(&path, "scoring_version = \"v9\"\n").unwrap();
    let reply: Value =
        serde_json::from_str(&run_json_with_config_file("version", "{}", &path)).unwrap();
    assert_eq!(error_code(&reply), "config_error");
}
