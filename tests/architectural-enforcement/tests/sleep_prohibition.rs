//! Integration Test: Sleep Prohibition
//!
//! **Policy**: Production code MUST NOT call sleep methods. The loop waits
//! on terminal input with a timeout instead.
//! **Exception**: The frame limiter in the TUI run loop (`tui/src/app.rs`).

use std::fs;
use std::path::Path;

use architectural_enforcement::{code_part, rust_sources};

#[test]
fn test_no_sleep_in_production_code() {
    let mut violations = Vec::new();

    for path in rust_sources("marquee/core/src") {
        check_file(&path, false, &mut violations);
    }
    for path in rust_sources("tui/src") {
        check_file(&path, true, &mut violations);
    }

    if !violations.is_empty() {
        eprintln!("\nSleep calls found in production code:\n");
        for violation in &violations {
            eprintln!("  {violation}");
        }
        eprintln!("\nAcceptable: frame limiting in the TUI run loop.");
        eprintln!("Forbidden: sleeping to wait for input, commands or timers.");

        panic!("\nFound {} sleep violation(s).", violations.len());
    }
}

#[test]
fn test_frame_limiter_is_present() {
    let app = architectural_enforcement::workspace_root().join("tui/src/app.rs");
    let content = fs::read_to_string(&app).expect("tui/src/app.rs should exist");
    assert!(
        content.contains("tokio::select!"),
        "The run loop should wait on events and the frame tick together"
    );
}

fn check_file(path: &Path, allow_frame_limiting: bool, violations: &mut Vec<String>) {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return,
    };
    let lines: Vec<&str> = content.lines().collect();

    for (idx, line) in lines.iter().enumerate() {
        let code = code_part(line);
        if !(code.contains("::sleep(") || code.contains(".sleep(")) {
            continue;
        }

        if allow_frame_limiting
            && path.ends_with("tui/src/app.rs")
            && is_frame_limiting_context(&lines, idx)
        {
            continue;
        }

        violations.push(format!("{}:{} - {}", path.display(), idx + 1, line.trim()));
    }
}

/// Sleep used to cap the loop rate, recognised by nearby frame wording
fn is_frame_limiting_context(lines: &[&str], current_idx: usize) -> bool {
    let context_range = current_idx.saturating_sub(10)..(current_idx + 5).min(lines.len());

    lines[context_range].iter().any(|line| {
        let line = line.to_lowercase();
        line.contains("frame") || line.contains("fps") || line.contains("tick_rate")
    })
}

#[test]
fn test_frame_limiting_detection() {
    let code = [
        "async fn run() {",
        "    let frame_tick = Duration::from_millis(10);",
        "    loop {",
        "        tokio::time::sleep(frame_tick).await;",
        "    }",
        "}",
    ];
    assert!(is_frame_limiting_context(&code, 3));

    let polling = [
        "fn wait_for_command() {",
        "    while queue.is_empty() {",
        "        std::thread::sleep(Duration::from_millis(10));",
        "    }",
        "}",
    ];
    assert!(!is_frame_limiting_context(&polling, 2));
}
