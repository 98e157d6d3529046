use assert_cmd::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const SAMPLE_TRIG: &str = r#"
@prefix ex: <http://example.org/> .

ex:people {
    ex:alice ex:name "Alice" ;
             ex:age 30 ;
             ex:knows ex:bob .
    ex:bob ex:name "Bob" .
}

ex:alice ex:active true .
"#;

/// Helper to create a `valeros` command running in an isolated temp
/// directory with no environment leakage between tests.
fn valeros_cmd(work_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("valeros");
    cmd.current_dir(work_dir.path());
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("VALEROS_URL");
    cmd.env_remove("VALEROS_INDEX");
    cmd.env_remove("VALEROS_REPLACE_DOTS");
    cmd
}

// ============================================================================
// Basics
// ============================================================================

#[test]
fn version_flag() {
    cargo_bin_cmd!("valeros")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("valeros"));
}

#[test]
fn help_flag() {
    cargo_bin_cmd!("valeros")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("load"))
        .stdout(predicate::str::contains("convert"));
}

#[test]
fn verbose_quiet_conflict() {
    let tmp = TempDir::new().unwrap();
    valeros_cmd(&tmp)
        .args(["--verbose", "--quiet", "convert", "x.trig", "x.nt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// ============================================================================
// convert: single-file mode
// ============================================================================

#[test]
fn convert_single_file() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("data.trig"), SAMPLE_TRIG).unwrap();

    valeros_cmd(&tmp)
        .args(["convert", "data.trig", "data.nt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted"));

    let nt = std::fs::read_to_string(tmp.path().join("data.nt")).unwrap();
    assert_eq!(nt.lines().count(), 5);
    assert!(nt.contains("<http://example.org/alice> <http://example.org/name> \"Alice\" ."));
    // N-Triples output drops the graph label
    assert!(!nt.contains("example.org/people"));
}

#[test]
fn convert_single_file_to_nquads_keeps_graph() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("data.trig"), SAMPLE_TRIG).unwrap();

    valeros_cmd(&tmp)
        .args(["convert", "--format", "nquads", "data.trig", "data.nq"])
        .assert()
        .success();

    let nq = std::fs::read_to_string(tmp.path().join("data.nq")).unwrap();
    assert!(nq.contains("<http://example.org/people> ."));
    // The default-graph statement carries no label
    assert!(nq.contains("\"true\"^^<http://www.w3.org/2001/XMLSchema#boolean> ."));
}

#[test]
fn convert_single_file_requires_output_path() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("data.trig"), SAMPLE_TRIG).unwrap();

    valeros_cmd(&tmp)
        .args(["convert", "data.trig"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("output path is required"));
}

#[test]
fn convert_missing_input_fails() {
    let tmp = TempDir::new().unwrap();
    valeros_cmd(&tmp)
        .args(["convert", "nope.trig", "out.nt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn convert_parse_error_is_reported() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("bad.trig"), "this is not trig at all").unwrap();

    valeros_cmd(&tmp)
        .args(["convert", "bad.trig", "bad.nt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

// ============================================================================
// convert: directory mode
// ============================================================================

#[test]
fn convert_directory_continues_past_failures() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("chunks");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join("a.trig"), SAMPLE_TRIG).unwrap();
    std::fs::write(dir.join("b.trig"), "@prefix broken").unwrap();
    std::fs::write(dir.join("c.trig"), SAMPLE_TRIG).unwrap();

    valeros_cmd(&tmp)
        .args(["convert", "chunks"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Converted 2 of 3 files"))
        .stderr(predicate::str::contains("b.trig"));

    // N - M output files were still produced
    assert!(dir.join("a.nt").exists());
    assert!(!dir.join("b.nt").exists());
    assert!(dir.join("c.nt").exists());
}

#[test]
fn convert_directory_all_good() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("chunks");
    let out = tmp.path().join("out");
    std::fs::create_dir(&dir).unwrap();
    std::fs::write(dir.join("a.trig"), SAMPLE_TRIG).unwrap();
    std::fs::write(dir.join("b.trig"), SAMPLE_TRIG).unwrap();

    valeros_cmd(&tmp)
        .args(["convert", "chunks", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted 2 of 2 files"));

    assert!(out.join("a.nt").exists());
    assert!(out.join("b.nt").exists());
}

#[test]
fn convert_empty_directory_fails() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("chunks");
    std::fs::create_dir(&dir).unwrap();

    valeros_cmd(&tmp)
        .args(["convert", "chunks"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no .trig files"));
}

// ============================================================================
// load
// ============================================================================

#[test]
fn load_end_to_end_against_mock_backend() {
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let rt = tokio::runtime::Runtime::new().unwrap();
    let server = rt.block_on(async {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("HEAD"))
            .and(path("/valeros"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/valeros"))
            .and(body_string_contains("date_detection"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/_bulk"))
            .and(body_string_contains("\"_id\":\"http://example.org/alice\""))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "errors": false, "items": [] })),
            )
            .mount(&server)
            .await;

        server
    });

    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("data.trig"), SAMPLE_TRIG).unwrap();

    valeros_cmd(&tmp)
        .args(["load", "data.trig"])
        .env("VALEROS_URL", server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("Indexed 2 documents into 'valeros'"));

    drop(server);
    drop(rt);
}

#[test]
fn load_unreachable_backend_fails_before_mutation() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("data.trig"), SAMPLE_TRIG).unwrap();

    valeros_cmd(&tmp)
        .args(["load", "data.trig", "--url", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("backend unreachable"));
}

#[test]
fn load_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    valeros_cmd(&tmp)
        .args(["load", "nope.trig"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
