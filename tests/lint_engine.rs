//! Lint: keep the engine free of console output and panicking shortcuts.
//!
//! Everything under `src/game/` runs inside the presentation layer's frame loop.
//! It reports through `Event`s and `tracing`, never stdout/stderr, and it must not
//! panic on bad input. This test scans the non-test part of each engine source
//! file (everything before the first `#[cfg(test)]`) for forbidden patterns.

use std::fs;
use std::path::Path;

const FORBIDDEN: &[&str] = &[
    "println!(",
    "eprintln!(",
    "print!(",
    "dbg!(",
    ".unwrap()",
    ".expect(",
    "panic!(",
    "unreachable!(",
];

/// Source up to the first test module.
fn non_test_part(source: &str) -> &str {
    match source.find("#[cfg(test)]") {
        Some(idx) => &source[..idx],
        None => source,
    }
}

fn find_forbidden(source: &str) -> Vec<(usize, String)> {
    let mut violations = Vec::new();
    for (line_num_0, line) in non_test_part(source).lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") {
            continue;
        }
        if FORBIDDEN.iter().any(|p| line.contains(p)) {
            violations.push((line_num_0 + 1, trimmed.to_string()));
        }
    }
    violations
}

#[test]
fn engine_has_no_console_output_or_panics() {
    let game_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/game");
    let mut all_violations = Vec::new();
    visit_sources(&game_dir, &mut all_violations);

    if !all_violations.is_empty() {
        let mut msg = String::from(
            "Found console output or panicking calls in engine code.\n\
             Report through Event / tracing and return rejections instead.\n\n",
        );
        for (file, line_num, line) in &all_violations {
            msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
        }
        panic!("{}", msg);
    }
}

fn visit_sources(dir: &Path, violations: &mut Vec<(String, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            visit_sources(&path, violations);
        } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
            let Ok(source) = fs::read_to_string(&path) else {
                continue;
            };
            let display_path = path.display().to_string();
            for (line_num, line) in find_forbidden(&source) {
                violations.push((display_path.clone(), line_num, line));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_unwrap_in_engine_code() {
        let source = "fn f(x: Option<u8>) -> u8 { x.unwrap() }";
        assert_eq!(find_forbidden(source).len(), 1);
    }

    #[test]
    fn ignores_test_modules() {
        let source = "fn f() {}\n#[cfg(test)]\nmod tests { fn g() { println!(\"hi\"); } }";
        assert!(find_forbidden(source).is_empty());
    }

    #[test]
    fn ignores_comments() {
        let source = "// never call .unwrap() here\nfn f() {}";
        assert!(find_forbidden(source).is_empty());
    }

    #[test]
    fn unwrap_or_is_allowed() {
        let source = "fn f(x: Option<u8>) -> u8 { x.unwrap_or(0) }";
        assert!(find_forbidden(source).is_empty());
    }
}
