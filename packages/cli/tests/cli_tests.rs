//! End-to-end runs of the `openbuild` binary

use std::path::Path;
use std::process::{Command, Output};

fn openbuild(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_openbuild"))
        .current_dir(cwd)
        .args(args)
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run openbuild")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Id printed by `openbuild add`
fn added_id(output: &Output) -> String {
    let text = stdout(output);
    let line = text.lines().find(|line| line.contains("Added")).expect("add output");
    line.split_whitespace()
        .find(|word| word.contains('-') && word.chars().last().is_some_and(|c| c.is_ascii_digit()))
        .map(|word| {
            word.trim_matches(|c: char| !c.is_ascii_alphanumeric() && c != '-')
                .to_string()
        })
        .expect("id in add output")
}

#[test]
fn test_build_and_export_page() {
    let dir = tempfile::tempdir().unwrap();
    let cwd = dir.path();

    assert!(openbuild(cwd, &["new", "site.openbuild", "--title", "Spring Sale"]).status.success());
    assert!(cwd.join("openbuild.config.json").exists());

    let added = openbuild(cwd, &["add", "site.openbuild", "div"]);
    assert!(added.status.success());
    let div = added_id(&added);

    let button = openbuild(cwd, &["add", "site.openbuild", "button", "--parent", &div]);
    assert!(button.status.success());
    assert!(stdout(&button).contains(&format!("inside {}", div)));

    let tree = openbuild(cwd, &["tree", "site.openbuild"]);
    assert!(stdout(&tree).contains("<button>"));

    let export = openbuild(cwd, &["export", "site.openbuild"]);
    assert!(export.status.success());

    let html = std::fs::read_to_string(cwd.join("dist").join("spring-sale.html")).unwrap();
    assert!(html.contains("<title>Spring Sale</title>"));
    assert!(html.contains(">Click Me</button></div>"));
}

#[test]
fn test_errors_exit_with_status_one() {
    let dir = tempfile::tempdir().unwrap();
    let cwd = dir.path();

    let missing = openbuild(cwd, &["tree", "nope.openbuild"]);
    assert_eq!(missing.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&missing.stderr).contains("Error:"));

    assert!(openbuild(cwd, &["new", "p.openbuild"]).status.success());
    let again = openbuild(cwd, &["new", "p.openbuild"]);
    assert_eq!(again.status.code(), Some(1));

    let ghost = openbuild(cwd, &["remove", "p.openbuild", "ghost"]);
    assert_eq!(ghost.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&ghost.stderr).contains("Node not found: ghost"));
}

#[test]
fn test_page_settings_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let cwd = dir.path();

    assert!(openbuild(cwd, &["new", "p.openbuild"]).status.success());
    let set = openbuild(cwd, &["page", "p.openbuild", "googleTagManagerId", "GTM-TEST1"]);
    assert!(set.status.success());

    let shown = openbuild(cwd, &["page", "p.openbuild", "googleTagManagerId"]);
    assert_eq!(stdout(&shown).trim(), "GTM-TEST1");

    let html = stdout(&openbuild(cwd, &["export", "p.openbuild", "--stdout"]));
    assert!(html.contains("GTM-TEST1"));

    let quiet = stdout(&openbuild(cwd, &["export", "p.openbuild", "--stdout", "--no-tracking"]));
    assert!(!quiet.contains("GTM-TEST1"));
}
