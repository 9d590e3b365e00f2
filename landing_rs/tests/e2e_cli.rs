//! End-to-End CLI Tests for bhx
//!
//! Runs the real binary against the catalogs in `tests/fixtures`.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// Get path to test fixtures
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// `bhx` pointed at the default fixture catalog
fn bhx() -> Command {
    let mut cmd = cargo_bin_cmd!("bhx");
    cmd.arg("--data").arg(fixtures_path().join("data"));
    cmd
}

/// `bhx` pointed at the fixture catalog that ships a config file
fn bhx_custom() -> Command {
    let mut cmd = cargo_bin_cmd!("bhx");
    cmd.arg("--data").arg(fixtures_path().join("custom"));
    cmd
}

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        cargo_bin_cmd!("bhx")
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("render"))
            .stdout(predicate::str::contains("meta"))
            .stdout(predicate::str::contains("build"));
    }

    #[test]
    fn shows_version() {
        cargo_bin_cmd!("bhx")
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn missing_data_dir_fails() {
        let temp = TempDir::new().unwrap();
        cargo_bin_cmd!("bhx")
            .arg("--data")
            .arg(temp.path().join("nope"))
            .arg("list")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("services.json"));
    }

    #[test]
    fn log_level_flag_enables_debug_logs() {
        bhx()
            .env_remove("RUST_LOG")
            .args(["--log-level", "debug", "list"])
            .assert()
            .success()
            .stderr(predicate::str::contains("catalog loaded"));
    }

    #[test]
    fn default_log_level_is_quiet() {
        bhx()
            .env_remove("RUST_LOG")
            .arg("list")
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }

    #[test]
    fn rust_log_overrides_log_level_flag() {
        bhx()
            .env("RUST_LOG", "off")
            .args(["--log-level", "debug", "list"])
            .assert()
            .success()
            .stderr(predicate::str::contains("catalog loaded").not());
    }

    #[test]
    fn lists_slugs() {
        bhx()
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("moving-companies\tMoving Services"))
            .stdout(predicate::str::contains("astoria\tAstoria"));
    }
}

// ============================================
// Render Tests
// ============================================

mod render {
    use super::*;

    #[test]
    fn renders_page_to_stdout() {
        bhx()
            .args(["render", "plumbers", "brooklyn"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains(
                "<span class=\"headline-accent\">Brooklyn</span>",
            ))
            .stdout(predicate::str::contains(
                "<title>Plumbers in Brooklyn, NYC | Building Health X</title>",
            ))
            .stdout(predicate::str::contains("Who fixes leaks in a rental?"))
            .stdout(predicate::str::contains("data-location-slug=\"brooklyn\""));
    }

    #[test]
    fn renders_page_to_file() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("pages/plumbers-astoria.html");

        bhx()
            .args(["render", "plumbers", "astoria", "-o"])
            .arg(&out)
            .assert()
            .success();

        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.contains("Compare Plumbers Options in "));
        assert!(html.contains("Are plumber quotes free?"));
    }

    #[test]
    fn unknown_service_is_not_found() {
        bhx()
            .args(["render", "plumbers-typo", "brooklyn"])
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("not found"))
            .stderr(predicate::str::contains("plumbers-typo"));
    }

    #[test]
    fn unknown_location_is_not_found() {
        bhx()
            .args(["render", "plumbers", "hoboken"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("location"));
    }

    #[test]
    fn config_overrides_copy_and_templates() {
        bhx_custom()
            .args(["render", "plumbers", "brooklyn"])
            .assert()
            .success()
            .stdout(predicate::str::contains("https://cdn.example.com/services/plumbers.png"))
            .stdout(predicate::str::contains(
                "src=\"https://cdn.example.com/icons/drop.svg\"",
            ))
            .stdout(predicate::str::contains("src=\"/icons/").not())
            .stdout(predicate::str::contains("Compare Quotes"))
            .stdout(predicate::str::contains(
                "<title>Trusted Plumbers in Brooklyn | BHX Preview</title>",
            ));
    }
}

// ============================================
// Headline & Metadata Tests
// ============================================

mod headline_and_meta {
    use super::*;

    #[test]
    fn headline_is_stable_across_runs() {
        let first = bhx()
            .args(["headline", "moving-companies", "brooklyn"])
            .output()
            .unwrap();
        let second = bhx()
            .args(["headline", "moving-companies", "brooklyn"])
            .output()
            .unwrap();

        assert!(first.status.success());
        assert_eq!(first.stdout, second.stdout);
        assert_eq!(
            String::from_utf8_lossy(&first.stdout).trim(),
            "Moving in Brooklyn, NYC With Clear Next Steps"
        );
    }

    #[test]
    fn headline_for_unknown_slug_is_not_found() {
        bhx()
            .args(["headline", "plumbers", "hoboken"])
            .assert()
            .code(2);
    }

    #[test]
    fn meta_prints_title_and_description() {
        let output = bhx()
            .args(["meta", "moving-companies", "astoria"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let meta: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        let title = meta["title"].as_str().unwrap();
        assert!(title.ends_with(" | Building Health X"));
        assert!(title.contains("Astoria"));
        assert_eq!(
            meta["description"],
            "Get connected with moving professionals serving Astoria."
        );
    }

    #[test]
    fn meta_for_unknown_slug_is_empty() {
        bhx()
            .args(["meta", "plumbers-typo", "brooklyn"])
            .assert()
            .success()
            .stdout(predicate::str::diff("{}\n"));
    }
}

// ============================================
// Build Tests
// ============================================

mod build {
    use super::*;

    #[test]
    fn builds_every_pair() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("dist");

        bhx()
            .arg("build")
            .arg("-o")
            .arg(&out)
            .assert()
            .success()
            .stderr(predicate::str::contains("built 4 pages"));

        for (service, location) in [
            ("moving-companies", "astoria"),
            ("moving-companies", "brooklyn"),
            ("plumbers", "astoria"),
            ("plumbers", "brooklyn"),
        ] {
            let page = out
                .join("services")
                .join(service)
                .join(location)
                .join("index.html");
            assert!(page.exists(), "missing {}", page.display());
        }

        let manifest: serde_json::Value = serde_json::from_str(
            &std::fs::read_to_string(out.join("manifest.json")).unwrap(),
        )
        .unwrap();
        let entries = manifest.as_array().unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0]["path"], "/services/moving-companies/astoria");
    }
}
