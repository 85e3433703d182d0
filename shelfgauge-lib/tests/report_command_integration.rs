//! Integration tests for the `report` and `secret` commands.
//!
//! These only touch local files, so they run without network access.

use camino::Utf8PathBuf;
use shelfgauge_lib::Host;
use std::fs;

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, _code: i32) {}
}

const CURRENT_SUITE: &str = r#"{
    "ref": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
    "name": "nightly",
    "ranAt": "2024-01-02T03:04:05Z",
    "env": { "source": "travis", "info": "linux x86_64" },
    "tests": [
        { "name": "parse", "value": "90" },
        { "name": "render", "value": 105 },
        { "name": "startup", "value": 12.25 },
        { "value": 7 }
    ]
}"#;

const PREVIOUS_SUITE: &str = r#"{
    "ref": "553c2077f0edc3d5dc5d17262f6aa498e69d6f8e",
    "name": "nightly",
    "tests": [
        { "name": "parse", "value": 100 },
        { "name": "render", "value": 100 },
        { "name": "removed", "value": 1 }
    ]
}"#;

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::from(dir.path().to_string_lossy().to_string()).join(name);
    fs::write(&path, contents).expect("Failed to write test file");
    path
}

#[tokio::test]
async fn test_report_against_previous() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let current = write_file(&temp_dir, "current.json", CURRENT_SUITE);
    let previous = write_file(&temp_dir, "previous.json", PREVIOUS_SUITE);

    let mut host = TestHost::new();
    let result = shelfgauge_lib::run(
        &mut host,
        ["shelfgauge", "report", current.as_str(), "--previous", previous.as_str()],
    )
    .await;

    assert!(result.is_ok(), "report should succeed: {result:?}");
    insta::assert_snapshot!(host.output_str(), @r"
    ### Benchmark results: nightly @ `6dcb09b`

    - `parse`: 90 (-10.00%)
    - `render`: 105 (+5.00%)
    - `startup`: 12.25 (new)
    ");
}

#[tokio::test]
async fn test_report_title_from_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let current = write_file(&temp_dir, "current.json", CURRENT_SUITE);
    let config = write_file(&temp_dir, "shelfgauge.toml", "comment_title = \"Perf\"\n");

    let mut host = TestHost::new();
    let result = shelfgauge_lib::run(
        &mut host,
        ["shelfgauge", "report", current.as_str(), "--config", config.as_str()],
    )
    .await;

    assert!(result.is_ok(), "report should succeed: {result:?}");
    let output = host.output_str();
    assert!(output.starts_with("### Perf: nightly"), "got: {output}");
    assert_eq!(output.matches("(new)").count(), 3);
}

#[tokio::test]
async fn test_report_title_flag_wins() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let current = write_file(&temp_dir, "current.json", CURRENT_SUITE);

    let mut host = TestHost::new();
    let result = shelfgauge_lib::run(
        &mut host,
        ["shelfgauge", "report", current.as_str(), "--title", "Startup times"],
    )
    .await;

    assert!(result.is_ok(), "report should succeed: {result:?}");
    assert!(host.output_str().starts_with("### Startup times: nightly"));
}

#[tokio::test]
async fn test_report_missing_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let missing = Utf8PathBuf::from(temp_dir.path().to_string_lossy().to_string()).join("missing.json");

    let mut host = TestHost::new();
    let result = shelfgauge_lib::run(&mut host, ["shelfgauge", "report", missing.as_str()]).await;

    assert!(result.is_err(), "a missing suite file should fail");
    assert!(host.output_str().is_empty());
}

#[tokio::test]
async fn test_secret_command() {
    let mut host = TestHost::new();
    let result = shelfgauge_lib::run(&mut host, ["shelfgauge", "secret", "--bytes", "32"]).await;
    assert!(result.is_ok(), "secret should succeed: {result:?}");

    let output = host.output_str();
    let mut lines = output.lines();
    let key = lines.next().and_then(|line| line.strip_prefix("key: ")).expect("key line");
    let digest = lines.next().and_then(|line| line.strip_prefix("digest: ")).expect("digest line");

    // 32 bytes in padded base64 take 44 characters, as does a SHA-256 digest
    assert_eq!(key.len(), 44);
    assert_eq!(digest.len(), 44);
    assert_ne!(key, digest);
}

#[tokio::test]
async fn test_secret_command_rejects_small_sizes() {
    let mut host = TestHost::new();
    let result = shelfgauge_lib::run(&mut host, ["shelfgauge", "secret", "--bytes", "4"]).await;
    assert!(result.is_err(), "too few bytes should be rejected");
}
