use std::fs;
use std::io::Write;
use std::process::{Command, Stdio};

fn wiki_toc() -> Command {
    Command::new(env!("CARGO_BIN_EXE_wiki-toc"))
}

#[test]
fn test_substitutes_file_to_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("page.wiki");
    let output = temp_dir.path().join("page.html");
    fs::write(&input, "{TOC}\n==Intro==\n===Setup===\n==Usage==\n").unwrap();

    let status = wiki_toc()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .status()
        .unwrap();
    assert!(status.success());

    let rendered = fs::read_to_string(&output).unwrap();
    assert!(rendered.starts_with("<div id=\"sidebar\"><div id=\"toc-parent\"><div id=\"toc\"><h5>Table of Contents</h5>\n"));
    assert!(rendered.contains(r##"<span class="number">1.1</span> <a href="#Setup_1">Setup</a>"##));
    assert!(rendered.contains(r##"<span class="number">2</span> <a href="#Usage_2">Usage</a>"##));
    assert!(rendered.ends_with("\n==Intro==\n===Setup===\n==Usage==\n"));
}

#[test]
fn test_stdin_to_stdout_without_headings() {
    let mut child = wiki_toc()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    let mut stdin = child.stdin.take().unwrap();
    stdin.write_all(b"intro {toc} body").unwrap();
    drop(stdin);

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "intro  body");
}

#[test]
fn test_markdown_syntax_with_config_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = temp_dir.path().join("toc.toml");
    let input = temp_dir.path().join("README.md");
    fs::write(&config, "title = \"Contents\"\nplaceholder = \"<!-- toc -->\"\nsyntax = \"markdown\"\n").unwrap();
    fs::write(&input, "<!-- TOC -->\n\n# Guide\n\n## Install\n").unwrap();

    let output = wiki_toc()
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<h5>Contents</h5>"));
    assert!(stdout.contains(r##"<span class="number">1.1</span> <a href="#Install_1">Install</a>"##));
}

#[test]
fn test_headings_flag_prints_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    let input = temp_dir.path().join("page.wiki");
    fs::write(&input, "==One==\n===Two===\n").unwrap();

    let output = wiki_toc().arg(&input).arg("--headings").output().unwrap();
    assert!(output.status.success());

    let headings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        headings,
        serde_json::json!([
            { "level": 1, "position": 0, "text": "One", "id": "0" },
            { "level": 2, "position": 8, "text": "Two", "id": "1" }
        ])
    );
}

#[test]
fn test_bad_config_exits_non_zero() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = temp_dir.path().join("toc.toml");
    fs::write(&config, "syntax = \"latex\"\n").unwrap();

    let output = wiki_toc()
        .arg("--config")
        .arg(&config)
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("toc.toml"));
}
