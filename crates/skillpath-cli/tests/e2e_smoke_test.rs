use std::fs;

use tempfile::tempdir;

use skillpath_cli::{Args, run};

/// Patterns the surrounding product actually ships in build guides.
const VALID_PATTERNS: &[&str] = &[
    "0",
    "0123",
    "12033",
    "[12]03",
    "(0)1[23]",
    "-0[12](3)012",
    "([01])23",
];

/// Patterns with known defects, one per validator rule.
const INVALID_PATTERNS: &[&str] = &["", "[1]", "[123]", "1x2", "]1", "()", "0-"];

fn args_for(pattern: &str, output: Option<String>) -> Args {
    Args {
        pattern: pattern.to_string(),
        output,
        config: None,
        log_level: "off".to_string(),
    }
}

#[test]
fn e2e_smoke_test_valid_patterns() {
    // Create a temporary directory for test outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let mut failed_patterns = Vec::new();

    for (index, pattern) in VALID_PATTERNS.iter().enumerate() {
        let output_path = temp_dir.path().join(format!("diagram_{index}.json"));
        let args = args_for(pattern, Some(output_path.to_string_lossy().to_string()));

        if let Err(e) = run(&args) {
            failed_patterns.push((pattern, e));
            continue;
        }

        // The emitted file must be valid JSON with the expected shape.
        let content = fs::read_to_string(&output_path).expect("Failed to read output");
        let value: serde_json::Value =
            serde_json::from_str(&content).expect("Output is not valid JSON");
        assert!(
            value.get("groups").is_some_and(|g| g.is_array()),
            "output for `{pattern}` misses groups"
        );
        assert!(
            value.get("validation").is_some(),
            "output for `{pattern}` misses validation"
        );
    }

    if !failed_patterns.is_empty() {
        eprintln!("\nValid patterns that failed:");
        for (pattern, err) in &failed_patterns {
            eprintln!("  - `{pattern}`: {err}");
        }
        panic!(
            "{} valid pattern(s) failed unexpectedly",
            failed_patterns.len()
        );
    }
}

#[test]
fn e2e_smoke_test_invalid_patterns() {
    let mut accepted_patterns = Vec::new();

    for pattern in INVALID_PATTERNS {
        let args = args_for(pattern, None);
        if run(&args).is_ok() {
            accepted_patterns.push(pattern);
        }
    }

    assert!(
        accepted_patterns.is_empty(),
        "invalid pattern(s) accepted: {accepted_patterns:?}"
    );
}

#[test]
fn e2e_invalid_pattern_error_carries_diagnostics() {
    let err = run(&args_for("[123]", None)).expect_err("pattern must be rejected");

    match err {
        skillpath::SkillpathError::Parse { err, src } => {
            assert!(!err.diagnostics().is_empty());
            assert_eq!(src, "[123]");
        }
        other => panic!("expected a parse error, got {other}"),
    }
}
