//! CLI contract tests for the `tag-cloud` binary.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

fn tag_cloud() -> assert_cmd::Command {
    cargo_bin_cmd!("tag-cloud")
}

const STORY: &str = "the cat sat. The CAT ran!\n";

#[test]
fn writes_cloud_from_arguments() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("story.txt");
    let output = tmp.path().join("story.html");
    fs::write(&input, STORY).expect("write input");

    tag_cloud()
        .args([
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
            "--count",
            "2",
            "--title",
            "story.txt",
        ])
        .assert()
        .success();

    let page = fs::read_to_string(&output).expect("read output");
    assert!(page.contains("<h2>Top 2 words in story.txt</h2>"));
    assert!(page.contains("class=\"f11\" title=\"count: 2\">cat</span>"));
    assert!(page.contains("class=\"f11\" title=\"count: 2\">the</span>"));
    assert!(!page.contains(">sat<"));
}

#[test]
fn prompts_for_missing_values() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("story.txt");
    let output = tmp.path().join("story.html");
    fs::write(&input, STORY).expect("write input");

    let answers = format!(
        "{}\n{}\n9\n-2\n4\n",
        input.to_str().unwrap(),
        output.to_str().unwrap()
    );
    tag_cloud()
        .write_stdin(answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the name of the input file"))
        .stdout(predicate::str::contains("Enter the name of the output file"))
        .stdout(predicate::str::contains(
            "greater than the number of unique words",
        ));

    let page = fs::read_to_string(&output).expect("read output");
    assert_eq!(page.matches("<span").count(), 4);
    assert!(page.contains(&format!("Top 4 words in {}", input.display())));
}

#[test]
fn stdout_output_keeps_prompts_off_the_page() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("words.txt");
    fs::write(&input, "a b b").expect("write input");

    tag_cloud()
        .args([input.to_str().unwrap(), "-o", "-", "--title", "words"])
        .write_stdin("1\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<html>"))
        .stdout(predicate::str::contains(">b</span>"))
        .stdout(predicate::str::contains("Enter").not())
        .stderr(predicate::str::contains("Enter a positive integer"));
}

#[test]
fn oversized_count_argument_fails_without_output() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("story.txt");
    let output = tmp.path().join("story.html");
    fs::write(&input, STORY).expect("write input");

    tag_cloud()
        .args([
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
            "-n",
            "5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid word count 5"));

    assert!(!output.exists());
}

#[test]
fn missing_input_file_fails() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("absent.txt");

    tag_cloud()
        .args([input.to_str().unwrap(), "-o", "-", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn json_format_and_legacy_encoding() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("cafe.txt");
    // "café café thé" in windows-1252
    fs::write(&input, b"caf\xe9 caf\xe9 th\xe9").expect("write input");

    tag_cloud()
        .args([
            input.to_str().unwrap(),
            "-o",
            "-",
            "-n",
            "2",
            "--format",
            "json",
            "--encoding",
            "windows-1252",
            "--title",
            "cafe",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""word": "café""#))
        .stdout(predicate::str::contains(r#""total_words": 3"#));
}

#[test]
fn bad_configuration_is_rejected() {
    tag_cloud()
        .args(["unused.txt", "-o", "-", "-n", "0", "--min-font", "40", "--max-font", "20"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));

    tag_cloud()
        .args(["unused.txt", "-o", "-", "-n", "0", "--encoding", "klingon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown text encoding"));
}

#[test]
fn malformed_utf8_is_a_read_failure() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("bad.txt");
    fs::write(&input, b"caf\xe9 caf\xe9 tea").expect("write input");

    tag_cloud()
        .args([input.to_str().unwrap(), "-o", "-", "-n", "2", "--format", "json"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not valid UTF-8"));
}

#[test]
fn byte_order_mark_overrides_encoding_label() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("bom.txt");
    fs::write(&input, b"\xef\xbb\xbfthe the cat").expect("write input");

    let output = tag_cloud()
        .args([
            input.to_str().unwrap(),
            "-o",
            "-",
            "-n",
            "2",
            "--format",
            "json",
            "--encoding",
            "windows-1252",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).expect("json report");
    assert_eq!(report["distinct_words"], 2);
    assert_eq!(
        report["entries"],
        serde_json::json!([
            {"word": "cat", "count": 1, "font_size": 11},
            {"word": "the", "count": 2, "font_size": 48},
        ])
    );
}

#[test]
fn custom_stylesheet_is_the_first_link() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("words.txt");
    fs::write(&input, "a b b").expect("write input");

    let output = tag_cloud()
        .args([
            input.to_str().unwrap(),
            "-o",
            "-",
            "-n",
            "2",
            "--stylesheet-url",
            "https://example.org/cloud.css",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let page = String::from_utf8(output).expect("utf-8 page");
    let links: Vec<&str> = page.lines().filter(|l| l.contains("<link")).collect();
    assert_eq!(links.len(), 2);
    assert!(links[0].contains(r#"href="https://example.org/cloud.css""#));
    assert!(links[1].contains(r#"href="data/tagcloud.css""#));
}

#[test]
fn usage_errors_exit_with_status_one() {
    tag_cloud()
        .args(["words.txt", "-o", "-", "-n", "-1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("-1"));

    tag_cloud().arg("--help").assert().success();
}

#[test]
fn missing_input_fails_before_output_question() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("absent.txt");

    tag_cloud()
        .write_stdin(format!("{}\nout.html\n", input.to_str().unwrap()))
        .assert()
        .failure()
        .stdout(predicate::str::contains("Enter the name of the input file"))
        .stdout(predicate::str::contains("Enter the name of the output file").not())
        .stderr(predicate::str::contains("cannot read"));
}
