use assert_cmd::Command;
use predicates::str::contains;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("imgtext").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("IMGTEXT_SERVER_URL");
    cmd
}

#[test]
fn extract_requires_an_image_source() {
    cmd().arg("extract").assert().failure().stderr(contains("--file"));
}

#[test]
fn invalid_image_url_is_reported_once() {
    let output = cmd()
        .args(["extract", "--url", "https://cdn.test/doc.pdf", "--server", "http://127.0.0.1:9"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(
        stderr.matches("Please enter a valid image URL (jpg, png, webp)").count(),
        1,
        "stderr was: {stderr}"
    );
    assert!(!stderr.contains("Extraction failed"));
    // not a terminal, so no status line and no escape codes
    assert!(!stderr.contains("Extracting text..."));
    assert!(!stderr.contains('\x1b'));
}
