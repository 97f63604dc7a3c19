// tests/integration_test.rs
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = "tests/fixtures/CHANGELOG.yml";

const FIRST_RELEASE: &str = r#"
- Version: 1.0.0
  Date: 2024-01-01
  Summary: First
  Added:
    - Thing A
"#;

/// Helper to get the changelog binary command, isolated from any user config
fn changelog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("changelog").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("XDG_CONFIG_HOME", std::env::temp_dir().join("changelog-tests-no-config"));
    cmd
}

mod help {
    use super::*;

    #[test]
    fn no_command_prints_usage() {
        changelog_cmd()
            .assert()
            .success()
            .stdout(predicate::str::contains("Manage a semantic changelog"));
    }

    #[test]
    fn help_command_prints_usage_without_changelog() {
        let dir = TempDir::new().unwrap();
        changelog_cmd()
            .current_dir(dir.path())
            .arg("help")
            .assert()
            .success()
            .stdout(predicate::str::contains("changelog to markdown"));
    }

    #[test]
    fn clap_help_flag() {
        changelog_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("YAML semantic changelog"));
    }
}

mod release {
    use super::*;

    #[test]
    fn prints_version_summary_and_date_from_stdin() {
        changelog_cmd()
            .args(["release", "version"])
            .write_stdin(FIRST_RELEASE)
            .assert()
            .success()
            .stdout("1.0.0\n");
        changelog_cmd()
            .args(["release", "summary"])
            .write_stdin(FIRST_RELEASE)
            .assert()
            .success()
            .stdout("First\n");
        changelog_cmd()
            .args(["release", "date"])
            .write_stdin(FIRST_RELEASE)
            .assert()
            .success()
            .stdout("2024-01-01\n");
    }

    #[test]
    fn check_is_silent_on_valid_changelog() {
        changelog_cmd()
            .args(["--file", FIXTURE, "release"])
            .assert()
            .success()
            .stdout("");
    }

    #[test]
    fn check_fails_on_invalid_version() {
        changelog_cmd()
            .args(["--file", "tests/fixtures/invalid_version.yml", "release"])
            .assert()
            .code(3)
            .stdout("")
            .stderr(predicate::str::contains("2.0.0-GAMMA"));
    }

    #[test]
    fn shift_selects_older_release() {
        changelog_cmd()
            .args(["--file", FIXTURE, "next", "release", "version"])
            .assert()
            .success()
            .stdout("1.1.0-rc-2\n");
        changelog_cmd()
            .args(["--file", FIXTURE, "-2", "release", "version"])
            .assert()
            .success()
            .stdout("1.0.0\n");
    }

    #[test]
    fn shift_past_oldest_release_fails() {
        changelog_cmd()
            .args(["--file", FIXTURE, "-3", "release", "version"])
            .assert()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("Bad shift '-3'"));
    }

    #[test]
    fn non_numeric_shift_is_a_selection_error() {
        for token in ["-x", "-1x", "--1"] {
            changelog_cmd()
                .args(["--file", FIXTURE, token, "release"])
                .assert()
                .code(1)
                .stdout("")
                .stderr(predicate::str::contains(format!("Bad shift '{}'", token)));
        }
    }

    #[test]
    fn date_check_fails_on_old_release() {
        changelog_cmd()
            .args(["release", "date", "check"])
            .write_stdin(FIRST_RELEASE)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Release date 2024-01-01 is wrong"));
    }

    #[test]
    fn release_to_markdown() {
        changelog_cmd()
            .args(["--file", FIXTURE, "next", "release", "to", "markdown"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Release candidate\n\n# Changed\n"))
            .stdout(predicate::str::contains("# Notes\n\n- Second candidate for 1.1.0\n"))
            .stdout(predicate::str::contains("Release 1.1.0").not());
    }

    #[test]
    fn release_description() {
        changelog_cmd()
            .args(["release", "description"])
            .write_stdin(FIRST_RELEASE)
            .assert()
            .success()
            .stdout("# Added\n\n- Thing A\n");
    }

    #[test]
    fn unknown_release_argument() {
        changelog_cmd()
            .args(["release", "author"])
            .write_stdin(FIRST_RELEASE)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Unknown release argument 'author'"));
    }
}

mod transform {
    use super::*;

    #[test]
    fn to_markdown() {
        changelog_cmd()
            .args(["to", "markdown"])
            .write_stdin(FIRST_RELEASE)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "## Release 1.0.0 (2024-01-01)\n\nFirst\n\n### Added\n\n- Thing A\n",
            ))
            .stdout(predicate::str::contains("### Changed").not());
    }

    #[test]
    fn to_markdown_is_reproducible() {
        let first = changelog_cmd()
            .args(["--file", FIXTURE, "to", "markdown"])
            .output()
            .expect("Failed to execute");
        let second = changelog_cmd()
            .args(["--file", FIXTURE, "to", "markdown"])
            .output()
            .expect("Failed to execute");

        assert!(first.status.success());
        assert_eq!(first.stdout, second.stdout);
    }

    #[test]
    fn to_html_with_stylesheets() {
        let dir = TempDir::new().unwrap();
        let css = dir.path().join("extra.css");
        fs::write(&css, "h1 { color: teal; }").unwrap();

        changelog_cmd()
            .args(["--file", FIXTURE, "to", "html", "style"])
            .arg(&css)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("h1 { color: teal; }"))
            .stdout(predicate::str::contains("<h2>Release 1.1.0-rc-2 (2024-02-10)</h2>"))
            .stdout(predicate::str::contains("<h3>Rejected</h3>"));
    }

    #[test]
    fn to_html_missing_stylesheet() {
        changelog_cmd()
            .args(["--file", FIXTURE, "to", "html", "missing.css"])
            .assert()
            .code(4)
            .stderr(predicate::str::contains("missing.css"));
    }

    #[test]
    fn to_html_title_from_config() {
        changelog_cmd()
            .args([
                "--config",
                "tests/fixtures/config_utc.toml",
                "--file",
                FIXTURE,
                "to",
                "html",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("<title>Release history</title>"))
            .stdout(predicate::str::contains("<style type=\"text/css\">"));
    }

    #[test]
    fn unknown_format() {
        changelog_cmd()
            .args(["--file", FIXTURE, "to", "pdf"])
            .assert()
            .code(4)
            .stderr(predicate::str::contains("Unknown format 'pdf'"));
    }
}

mod input {
    use super::*;

    #[test]
    fn finds_changelog_in_current_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("change-log.yaml"), FIRST_RELEASE).unwrap();

        changelog_cmd()
            .current_dir(dir.path())
            .args(["release", "version"])
            .assert()
            .success()
            .stdout("1.0.0\n");
    }

    #[test]
    fn no_changelog_found() {
        let dir = TempDir::new().unwrap();
        changelog_cmd()
            .current_dir(dir.path())
            .args(["release", "version"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("no changelog file found"));
    }

    #[test]
    fn malformed_document() {
        changelog_cmd()
            .args(["release"])
            .write_stdin("Version: 1.0.0\nDate: 2024-01-01\n")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Error parsing changelog"));
    }

    #[test]
    fn missing_config_file_names_the_failed_step() {
        changelog_cmd()
            .args(["--config", "tests/fixtures/does_not_exist.toml", "release"])
            .write_stdin(FIRST_RELEASE)
            .assert()
            .code(1)
            .stderr(predicate::str::contains(
                "Failed to load configuration: Configuration error",
            ));
    }

    #[test]
    fn unknown_command() {
        changelog_cmd()
            .args(["publish"])
            .write_stdin(FIRST_RELEASE)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Command 'publish' unknown"));
    }
}
