//! Integration tests for the promptc binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn promptc() -> Command {
    Command::cargo_bin("promptc").expect("binary builds")
}

#[test]
fn generates_module_to_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("hello1.prompt");
    std::fs::write(&path, "say hello to <!username>").expect("write fixture");

    promptc()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "export function hello1(username) {",
        ))
        .stdout(predicate::str::contains("`say hello to ${username}`"));
}

#[test]
fn writes_module_into_out_dir() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("greet.prompt");
    std::fs::write(&path, ".title hello user\nsay hello to <!username>").expect("write fixture");

    promptc()
        .arg(&path)
        .arg("--out")
        .arg(out.path())
        .assert()
        .success();

    let module = std::fs::read_to_string(out.path().join("greet.js")).expect("module written");
    assert!(module.contains("export function helloUser(username) {"));
}

#[test]
fn missing_title_fails_and_writes_nothing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.prompt");
    std::fs::write(&path, "leading body\n.title second\nmore").expect("write fixture");

    promptc()
        .arg(&path)
        .arg("--out")
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("prompt 0 has no title"));

    let leftovers = std::fs::read_dir(out.path()).expect("out dir").count();
    assert_eq!(leftovers, 0);
}

#[test]
fn empty_file_fails_with_no_prompts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.prompt");
    std::fs::write(&path, "").expect("write fixture");

    promptc()
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no prompts in file"));
}

#[test]
fn unknown_backend_lists_the_known_ones() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("x.prompt");
    std::fs::write(&path, "hi").expect("write fixture");

    promptc()
        .arg(&path)
        .arg("--backend")
        .arg("cobol")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Backend 'cobol' not found"))
        .stderr(predicate::str::contains("js"));
}

#[test]
fn tokens_mode_dumps_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("hello.prompt");
    std::fs::write(&path, ".title greet\nhi <!name>").expect("write fixture");

    promptc()
        .arg(&path)
        .arg("--tokens")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"title\""))
        .stdout(predicate::str::contains("\"kind\": \"var\""));
}

#[test]
fn max_line_length_override_wraps_parameters() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("wrap.prompt");
    std::fs::write(&path, ".title go\n<!ab> <!cd>").expect("write fixture");

    promptc()
        .arg(&path)
        .arg("--max-line-length")
        .arg("24")
        .assert()
        .success()
        .stdout(predicate::str::contains("export function go(\n\tab,\n\tcd,\n) {"));
}

#[test]
fn lists_backends() {
    promptc()
        .arg("--list-backends")
        .assert()
        .success()
        .stdout(predicate::str::contains("js (.js)"));
}
