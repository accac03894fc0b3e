//! Integration Test: Core Layering
//!
//! `marquee-core` holds the console semantics and must build without a
//! terminal. Drawing and key decoding belong to `marquee-tui`.

use std::fs;

use architectural_enforcement::{code_part, rust_sources, workspace_root};

const TERMINAL_CRATES: &[&str] = &["ratatui", "crossterm"];

#[test]
fn test_core_manifest_has_no_terminal_dependencies() {
    let manifest = workspace_root().join("marquee/core/Cargo.toml");
    let content = fs::read_to_string(&manifest).expect("core manifest should exist");

    for line in content.lines() {
        let line = line.split('#').next().unwrap_or(line);
        for krate in TERMINAL_CRATES {
            assert!(
                !line.trim_start().starts_with(krate),
                "marquee-core must not depend on {krate}: {line}"
            );
        }
    }
}

#[test]
fn test_core_sources_do_not_use_terminal_crates() {
    let mut violations = Vec::new();

    for path in rust_sources("marquee/core") {
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, line) in content.lines().enumerate() {
            let code = code_part(line);
            if TERMINAL_CRATES
                .iter()
                .any(|krate| code.contains(&format!("{krate}::")))
            {
                violations.push(format!("{}:{} - {}", path.display(), idx + 1, line.trim()));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Terminal crates used in marquee-core:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tui_depends_on_core() {
    let manifest = workspace_root().join("tui/Cargo.toml");
    let content = fs::read_to_string(&manifest).expect("tui manifest should exist");
    assert!(content.contains("marquee-core"));
}
