/// End-to-end tests for config file support
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MINIMAL: &str =
    r#"{"bomFormat":"CycloneDX","specVersion":"1.6","version":1,"components":[],"dependencies":[]}"#;

/// Helper: write a config file into a directory
fn write_config(dir: &Path, filename: &str, content: &str) {
    fs::write(dir.join(filename), content).unwrap();
}

// ============================================================
// Auto-discovery tests
// ============================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovers_config_in_cwd() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            "ai-bom-visualizer.config.yml",
            "title: Discovered title\noutput: from-config.html\n",
        );

        let output = cargo_bin_cmd!("ai-bom-visualizer")
            .current_dir(dir.path())
            .write_stdin(MINIMAL)
            .output()
            .unwrap();

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(output.status.success(), "stderr: {}", stderr);
        assert!(stderr.contains("Auto-discovered config file"));

        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(stdout.trim(), "from-config.html");

        let content = fs::read_to_string(dir.path().join("from-config.html")).unwrap();
        assert!(content.contains("<title>Discovered title</title>"));
    }

    #[test]
    fn test_no_config_file_uses_defaults() {
        let dir = TempDir::new().unwrap();

        let output = cargo_bin_cmd!("ai-bom-visualizer")
            .current_dir(dir.path())
            .args(["--output", "viewer.html"])
            .write_stdin(MINIMAL)
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(!stderr.contains("Auto-discovered"));

        let content = fs::read_to_string(dir.path().join("viewer.html")).unwrap();
        assert!(content.contains("<title>AI-BOM Visualizer</title>"));
    }
}

// ============================================================
// Explicit --config tests
// ============================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "custom.yml", "title: Custom config\n");

        let output = cargo_bin_cmd!("ai-bom-visualizer")
            .current_dir(dir.path())
            .args(["--config", "custom.yml", "--output", "viewer.html"])
            .write_stdin(MINIMAL)
            .output()
            .unwrap();

        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        let content = fs::read_to_string(dir.path().join("viewer.html")).unwrap();
        assert!(content.contains("<title>Custom config</title>"));
    }

    #[test]
    fn test_explicit_config_skips_discovery() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            "ai-bom-visualizer.config.yml",
            "title: Discovered\n",
        );
        write_config(dir.path(), "custom.yml", "title: Explicit\n");

        let output = cargo_bin_cmd!("ai-bom-visualizer")
            .current_dir(dir.path())
            .args(["-c", "custom.yml", "-o", "viewer.html"])
            .write_stdin(MINIMAL)
            .output()
            .unwrap();

        assert!(output.status.success());
        let content = fs::read_to_string(dir.path().join("viewer.html")).unwrap();
        assert!(content.contains("<title>Explicit</title>"));
    }

    #[test]
    fn test_cli_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            "ai-bom-visualizer.config.yml",
            "title: From config\noutput: config.html\n",
        );

        let output = cargo_bin_cmd!("ai-bom-visualizer")
            .current_dir(dir.path())
            .args(["--title", "From CLI", "--output", "cli.html"])
            .write_stdin(MINIMAL)
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(!dir.path().join("config.html").exists());
        let content = fs::read_to_string(dir.path().join("cli.html")).unwrap();
        assert!(content.contains("<title>From CLI</title>"));
    }
}

// ============================================================
// Error handling tests
// ============================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_nonexistent_config_file() {
        let dir = TempDir::new().unwrap();

        let output = cargo_bin_cmd!("ai-bom-visualizer")
            .current_dir(dir.path())
            .args(["--config", "missing.yml"])
            .write_stdin(MINIMAL)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to read config file"));
        assert!(stderr.contains("❌ error: ai-bom-visualizer:"));
        assert!(stderr.contains("Caused by:"));
    }

    #[test]
    fn test_invalid_yaml() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            "ai-bom-visualizer.config.yml",
            "invalid: yaml: [[[broken",
        );

        let output = cargo_bin_cmd!("ai-bom-visualizer")
            .current_dir(dir.path())
            .write_stdin(MINIMAL)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to parse config file"));
    }

    #[test]
    fn test_blank_title_in_config() {
        let dir = TempDir::new().unwrap();
        write_config(dir.path(), "ai-bom-visualizer.config.yml", "title: \"  \"\n");

        let output = cargo_bin_cmd!("ai-bom-visualizer")
            .current_dir(dir.path())
            .write_stdin(MINIMAL)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("title must not be empty"));
    }

    #[test]
    fn test_non_html_output_in_config() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            "ai-bom-visualizer.config.yml",
            "output: viewer.json\n",
        );

        let output = cargo_bin_cmd!("ai-bom-visualizer")
            .current_dir(dir.path())
            .write_stdin(MINIMAL)
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(3));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("must end in .html or .htm"));
        assert!(!dir.path().join("viewer.json").exists());
    }

    #[test]
    fn test_unknown_fields_warn_but_succeed() {
        let dir = TempDir::new().unwrap();
        write_config(
            dir.path(),
            "ai-bom-visualizer.config.yml",
            "output: viewer.html\ntheme: dark\n",
        );

        let output = cargo_bin_cmd!("ai-bom-visualizer")
            .current_dir(dir.path())
            .write_stdin(MINIMAL)
            .output()
            .unwrap();

        assert!(output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unknown config field 'theme'"));
    }
}
