//! CLI integration tests for lucidshark-sloc

use std::path::PathBuf;
use std::process::{Command, Output};

/// Get the path to the test fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get the path to the built binary
fn binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lucidshark-sloc"))
}

/// Create a temporary file list with the given fixture files
fn create_file_list(files: &[&str]) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    for f in files {
        let path = fixtures_dir().join(f);
        writeln!(file, "{}", path.display()).expect("Failed to write to temp file");
    }
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(binary_path())
        .args(args)
        .output()
        .expect("Failed to run binary")
}

mod cli_behavior {
    use super::*;

    #[test]
    fn test_help_flag() {
        let output = run(&["--help"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Count blank, comment and code lines"));
        assert!(stdout.contains("--json"));
        assert!(stdout.contains("--by-file"));
    }

    #[test]
    fn test_version_flag() {
        let output = run(&["--version"]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("lucidshark-sloc"));
    }

    #[test]
    fn test_conflicting_output_formats() {
        let fixtures = fixtures_dir();
        let output = run(&["--json", "--xml", fixtures.to_str().unwrap()]);

        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Output format conflict"));
    }

    #[test]
    fn test_nonexistent_file_list() {
        let output = run(&["--list", "/nonexistent/file/list.txt"]);

        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Cannot open"));
    }

    #[test]
    fn test_directory_input() {
        let fixtures = fixtures_dir();
        let output = run(&["--quiet", fixtures.to_str().unwrap()]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        // notes.xyz has no known language and is skipped by the walk
        assert!(stdout.contains("Files analyzed: 5"));
        assert!(stdout.contains("Total lines: 55"));
        assert!(!stdout.contains("Unknown"));
    }

    #[test]
    fn test_explicit_unknown_file_is_counted() {
        let notes = fixtures_dir().join("notes.xyz");
        let output = run(&["-q", notes.to_str().unwrap()]);

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Unknown"));
        assert!(stdout.contains("Comment lines: 1 (25.0%)"));
    }

    #[test]
    fn test_progress_on_stderr_unless_quiet() {
        let list = create_file_list(&["hello.py"]);
        let list_path = list.path().to_str().unwrap();

        let noisy = run(&["--list", list_path]);
        assert!(String::from_utf8_lossy(&noisy.stderr).contains("Classifying 1 files"));

        let quiet = run(&["--quiet", "--list", list_path]);
        assert!(quiet.stderr.is_empty());
    }

    #[test]
    fn test_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("report.txt");
        let list = create_file_list(&["style.css"]);

        let output = run(&[
            "-q",
            "--list",
            list.path().to_str().unwrap(),
            "-o",
            out.to_str().unwrap(),
        ]);

        assert!(output.status.success());
        assert!(output.stdout.is_empty());
        let written = std::fs::read_to_string(out).unwrap();
        assert!(written.contains("CSS"));
    }
}

mod exit_codes {
    use super::*;

    #[test]
    fn test_exit_code_0_when_all_files_read() {
        let list = create_file_list(&["hello.py", "build.bat"]);
        let output = run(&["-q", "--list", list.path().to_str().unwrap()]);

        assert_eq!(output.status.code(), Some(0));
    }

    #[test]
    fn test_exit_code_1_when_a_file_fails() {
        let list = create_file_list(&["hello.py", "does_not_exist.rs"]);
        let output = run(&["--list", list.path().to_str().unwrap()]);

        // The report is still produced for the readable file
        assert_eq!(output.status.code(), Some(1));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Files analyzed: 1"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Warning: Cannot open file"));
    }

    #[test]
    fn test_exit_code_2_when_no_inputs_found() {
        let dir = tempfile::tempdir().unwrap();
        let output = run(&["-q", dir.path().to_str().unwrap()]);

        assert_eq!(output.status.code(), Some(2));
    }
}
