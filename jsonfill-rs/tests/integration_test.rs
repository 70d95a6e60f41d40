//! Integration tests for the jsonfill CLI using fixture projects.

use pretty_assertions::assert_eq;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

/// Get the path to a fixture project.
fn fixture_path(name: &str) -> PathBuf {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    PathBuf::from(manifest_dir)
        .parent()
        .unwrap()
        .join("fixtures")
        .join(name)
}

/// Run jsonfill and return (stdout, stderr, exit code).
fn run_jsonfill(args: &[&str]) -> (String, String, i32) {
    let binary = env!("CARGO_BIN_EXE_jsonfill");

    let output = Command::new(binary)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute jsonfill");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn draft(name: &str) -> String {
    fixture_path(name).join("draft.md").to_string_lossy().to_string()
}

mod fill_command {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fill_basic_project() {
        let (stdout, _, code) = run_jsonfill(&["fill", &draft("basic")]);
        assert_eq!(code, 0);
        assert_eq!(stdout, "Hello Ada, you scored 20.\n");
    }

    #[test]
    fn fill_uses_source_fallback() {
        let (stdout, _, code) = run_jsonfill(&["fill", &draft("fallback")]);
        assert_eq!(code, 0);
        assert_eq!(stdout, "Found via source folder.\n");
    }

    #[test]
    fn fill_reads_project_config() {
        let (stdout, _, code) = run_jsonfill(&["fill", &draft("delims")]);
        assert_eq!(code, 0);
        assert_eq!(stdout, "v=5, untouched {{x}}\n");
    }

    #[test]
    fn fill_leaves_missing_placeholders() {
        let (stdout, stderr, code) = run_jsonfill(&["fill", &draft("missing")]);
        assert_eq!(code, 0);
        assert_eq!(stdout, "{{a.b}} and Ada\n");
        assert!(stderr.contains("a.b"));
    }

    #[test]
    fn fill_quiet_suppresses_warnings() {
        let (_, stderr, code) = run_jsonfill(&["--quiet", "fill", &draft("missing")]);
        assert_eq!(code, 0);
        assert!(stderr.is_empty());
    }

    #[test]
    fn fill_strict_missing_fails() {
        let (stdout, stderr, code) =
            run_jsonfill(&["fill", &draft("missing"), "--error-on-missing"]);
        assert_eq!(code, 4);
        assert!(stdout.is_empty());
        assert!(stderr.contains("Missing value for placeholder path: a.b"));
    }

    #[test]
    fn fill_strict_without_placeholders_fails() {
        let (_, stderr, code) = run_jsonfill(&[
            "fill",
            &draft("basic"),
            "--start-delim",
            "<%",
            "--end-delim",
            "%>",
            "--error-on-missing",
        ]);
        assert_eq!(code, 5);
        assert!(stderr.contains("No placeholders found"));
    }

    #[test]
    fn fill_missing_json_file() {
        let (_, stderr, code) = run_jsonfill(&["fill", &draft("nodata")]);
        assert_eq!(code, 2);
        assert!(stderr.contains("JSON file not found"));
    }

    #[test]
    fn fill_invalid_json_file() {
        let (stdout, stderr, code) = run_jsonfill(&["fill", &draft("invalid")]);
        assert_eq!(code, 3);
        assert!(stdout.is_empty());
        assert!(stderr.contains("Invalid JSON"));
    }

    #[test]
    fn fill_explicit_data_file() {
        let data = fixture_path("delims").join("data.json");
        let (stdout, _, code) = run_jsonfill(&[
            "fill",
            &draft("nodata"),
            "--data",
            &data.to_string_lossy(),
        ]);
        assert_eq!(code, 0);
        assert_eq!(stdout, "No data here: 5\n");
    }

    #[test]
    fn fill_to_output_file_prints_report() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("filled.md");
        let (stdout, _, code) = run_jsonfill(&[
            "--quiet",
            "fill",
            &draft("missing"),
            "--output",
            &out.to_string_lossy(),
        ]);
        assert_eq!(code, 0);

        let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(report["found"], 2);
        assert_eq!(report["replaced"], 1);
        assert_eq!(report["unresolved"], serde_json::json!(["a.b"]));

        let written = std::fs::read_to_string(&out).unwrap();
        assert_eq!(written, "{{a.b}} and Ada\n");
    }

    #[test]
    fn fill_debug_log_goes_to_stderr() {
        let (stdout, stderr, code) = run_jsonfill(&["fill", &draft("basic"), "--debug-log"]);
        assert_eq!(code, 0);
        assert_eq!(stdout, "Hello Ada, you scored 20.\n");
        assert!(stderr.contains("found placeholders"));
    }
}

mod scan_command {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scan_lists_placeholders() {
        let (stdout, _, code) = run_jsonfill(&["scan", &draft("basic")]);
        assert_eq!(code, 0);

        let response: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(response["total"], 2);
        assert_eq!(response["placeholders"][0]["path"], "name");
        assert_eq!(response["placeholders"][1]["path"], "scores[1]");
        assert_eq!(
            response["placeholders"][1]["tokens"],
            serde_json::json!(["scores", "1"])
        );
    }

    #[test]
    fn scan_reads_project_config() {
        let (stdout, _, code) = run_jsonfill(&["scan", &draft("delims")]);
        assert_eq!(code, 0);

        let response: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(response["total"], 1);
        assert_eq!(response["placeholders"][0]["text"], "<<x>>");
    }

    #[test]
    fn scan_custom_delimiters() {
        let (stdout, _, code) = run_jsonfill(&[
            "scan",
            &draft("delims"),
            "--start-delim",
            "<<",
            "--end-delim",
            ">>",
        ]);
        assert_eq!(code, 0);
        assert!(stdout.contains("\"total\": 1"));
        assert!(stdout.contains("<<x>>"));
    }
}

mod get_command {
    use super::*;
    use pretty_assertions::assert_eq;

    fn data() -> String {
        fixture_path("basic")
            .join("results.json")
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn get_nested_value() {
        let (stdout, _, code) = run_jsonfill(&["get", "meta.tags[1]", "--data", &data()]);
        assert_eq!(code, 0);

        let response: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(response["path"], "meta.tags[1]");
        assert_eq!(response["value"], "b");
    }

    #[test]
    fn get_scalar_as_toml() {
        let (stdout, _, code) = run_jsonfill(&["--toml", "get", "name", "--data", &data()]);
        assert_eq!(code, 0);
        assert!(stdout.contains("value = \"Ada\""));
    }

    #[test]
    fn get_unresolved_path() {
        let (_, stderr, code) = run_jsonfill(&["get", "scores.0x", "--data", &data()]);
        assert_eq!(code, 4);
        assert!(stderr.contains("scores.0x"));
    }

    #[test]
    fn get_malformed_path() {
        let (_, _, code) = run_jsonfill(&["get", "scores[0", "--data", &data()]);
        assert_eq!(code, 6);
    }
}
