use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn tmp_dir(prefix: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be available")
        .as_nanos();
    dir.push(format!("{}_{}_{}", prefix, std::process::id(), nanos));
    fs::create_dir_all(&dir).expect("tmp dir should be created");
    dir
}

fn gattai() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gattai"))
}

const IDS: &str = "\
;; test IDS table
U+660E\t明\t⿰日月\n\
U+60F3\t想\t⿱相心\n\
U+76F8\t相\t⿰木目\n";

const CONFIG: &str = r#"{
    "atomic_parts": ["日", "月", "木", "目", "心"],
    "manual_overrides": {}
}"#;

const WORDS: &str = "\
# words
想像,そうぞう,imagination\n\
明暗,めいあん,light and dark\n";

fn write_inputs(dir: &PathBuf) -> (PathBuf, PathBuf, PathBuf) {
    let ids = dir.join("ids.txt");
    let known = dir.join("known.txt");
    let config = dir.join("dictionary_config.json");
    fs::write(&ids, IDS).expect("write ids");
    fs::write(&known, "明想相").expect("write known");
    fs::write(&config, CONFIG).expect("write config");
    (ids, known, config)
}

#[test]
fn help_lists_all_subcommands() {
    let output = gattai().arg("--help").output().expect("run gattai --help");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for cmd in ["generate", "validate", "check", "problems"] {
        assert!(stdout.contains(cmd), "help should list `{cmd}`");
    }
}

#[test]
fn generate_then_validate_round_trip() {
    let dir = tmp_dir("gattai_pipeline");
    let (ids, known, config) = write_inputs(&dir);
    let dict = dir.join("ids-map.json");

    let output = gattai()
        .args(["generate", "--ids"])
        .arg(&ids)
        .arg("--known")
        .arg(&known)
        .arg("--config")
        .arg(&config)
        .arg("--out")
        .arg(&dict)
        .output()
        .expect("run generate");
    assert!(
        output.status.success(),
        "generate failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let map: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&dict).expect("dict written")).expect("json");
    assert_eq!(map["明"][0], "日");
    assert_eq!(map["明"][1], "月");
    // 想 flattens through 相 into three parts and needs one intermediate.
    assert_eq!(map["想"][0], "&想_0");
    assert_eq!(map["&想_0"][0], "木");

    let output = gattai()
        .args(["validate", "--dict"])
        .arg(&dict)
        .arg("--config")
        .arg(&config)
        .output()
        .expect("run validate");
    assert!(
        output.status.success(),
        "validate failed: {}",
        String::from_utf8_lossy(&output.stdout)
    );
}

#[test]
fn validate_reports_missing_root_cause_and_exits_nonzero() {
    let dir = tmp_dir("gattai_validate_fail");
    let (_ids, _known, config) = write_inputs(&dir);
    let dict = dir.join("broken.json");
    // 謎 depends on an undefined part.
    fs::write(&dict, r#"{"謎": ["言", "迷"]}"#).expect("write dict");

    let words = dir.join("words.txt");
    fs::write(&words, WORDS).expect("write words");

    let report = dir.join("report.json");
    let output = gattai()
        .args(["validate", "--dict"])
        .arg(&dict)
        .arg("--config")
        .arg(&config)
        .arg("--words")
        .arg(&words)
        .arg("--out")
        .arg(&report)
        .output()
        .expect("run validate");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("missing `言`"), "stdout was: {stdout}");

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).expect("report written")).expect("json");
    assert_eq!(value["schema_version"], 1);
    assert!(value["dictionary_fingerprint"].as_str().is_some());
    assert!(!value["root_causes"].as_array().expect("array").is_empty());
}

#[test]
fn check_flags_oversized_override() {
    let dir = tmp_dir("gattai_check");
    let dict = dir.join("dict.json");
    fs::write(&dict, r#"{"明": ["日", "月"]}"#).expect("write dict");
    let config = dir.join("config.json");
    fs::write(
        &config,
        r#"{"atomic_parts": ["日", "月"], "manual_overrides": {"謎": ["言", "迷", "心"]}}"#,
    )
    .expect("write config");

    let output = gattai()
        .args(["check", "--dict"])
        .arg(&dict)
        .arg("--config")
        .arg(&config)
        .output()
        .expect("run check");
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("oversized_override"), "stdout was: {stdout}");
}

#[test]
fn problems_command_writes_scored_database() {
    let dir = tmp_dir("gattai_problems");
    let (ids, known, config) = write_inputs(&dir);
    let dict = dir.join("ids-map.json");
    let status = gattai()
        .args(["generate", "--ids"])
        .arg(&ids)
        .arg("--known")
        .arg(&known)
        .arg("--config")
        .arg(&config)
        .arg("--out")
        .arg(&dict)
        .status()
        .expect("run generate");
    assert!(status.success());

    let words = dir.join("words.txt");
    fs::write(&words, WORDS).expect("write words");
    let out = dir.join("problems.json");

    let output = gattai()
        .args(["problems", "--dict"])
        .arg(&dict)
        .arg("--words")
        .arg(&words)
        .arg("--out")
        .arg(&out)
        .output()
        .expect("run problems");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("problems written")).expect("json");
    let problems = value.as_array().expect("array");
    assert_eq!(problems.len(), 2);
    assert_eq!(problems[0]["kanji"], "想像");
    let difficulty = problems[0]["difficulty"].as_u64().expect("difficulty");
    assert!((1..=10).contains(&difficulty));

    let missing = gattai()
        .args(["problems", "--dict"])
        .arg(dir.join("nope.json"))
        .arg("--words")
        .arg(&words)
        .arg("--out")
        .arg(&out)
        .output()
        .expect("run problems with missing dict");
    assert!(!missing.status.success());
}
