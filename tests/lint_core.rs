//! Lint: the adventure core stays front-end agnostic.
//!
//! Everything under `src/adventure/` reports through returned events, so it
//! must never write to stdout/stderr, end the process, or reach for a
//! browser or terminal crate. This scans the sources for such calls.

use std::fs;
use std::path::Path;

const FORBIDDEN_CALLS: &[&str] = &[
    "println!(",
    "print!(",
    "eprintln!(",
    "eprint!(",
    "dbg!(",
    "process::exit(",
];

const FORBIDDEN_CRATES: &[&str] = &["ratzilla", "ratatui", "web_sys", "env_logger"];

/// Offending `(line_number, line)` pairs in `source`. Comment lines are skipped.
fn find_violations(source: &str) -> Vec<(usize, String)> {
    let mut violations = Vec::new();
    for (index, line) in source.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") {
            continue;
        }
        let call = FORBIDDEN_CALLS.iter().any(|c| trimmed.contains(c));
        let import = FORBIDDEN_CRATES
            .iter()
            .any(|c| trimmed.contains(&format!("{}::", c)));
        if call || import {
            violations.push((index + 1, trimmed.to_string()));
        }
    }
    violations
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
            for (line_num, line) in find_violations(&source) {
                violations.push((display_path.clone(), line_num, line));
            }
        }
    }
}

#[test]
fn core_never_prints_or_exits() {
    let core_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/adventure");
    assert!(core_dir.is_dir(), "missing {}", core_dir.display());

    let mut all_violations = Vec::new();
    visit_sources(&core_dir, &mut all_violations);

    if !all_violations.is_empty() {
        let mut msg = String::from(
            "The adventure core must report through events, not I/O or front-end crates.\n\n",
        );
        for (file, line_num, line) in &all_violations {
            msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
        }
        panic!("{}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_print_macros() {
        assert_eq!(find_violations(r#"println!("You win");"#).len(), 1);
        assert_eq!(find_violations(r#"    eprint!("oops");"#).len(), 1);
        assert_eq!(find_violations("dbg!(state);").len(), 1);
    }

    #[test]
    fn detects_process_exit() {
        let violations = find_violations("    std::process::exit(0);");
        assert_eq!(violations, vec![(1, "std::process::exit(0);".to_string())]);
    }

    #[test]
    fn detects_front_end_crates() {
        assert_eq!(find_violations("use ratzilla::ratatui::Frame;").len(), 1);
        assert_eq!(find_violations("web_sys::console::log_1(&v);").len(), 1);
    }

    #[test]
    fn allows_log_macros_and_writes() {
        let source = "info!(\"moved\");\ndebug!(\"{:?}\", cmd);\nwriteln!(out, \"x\")?;";
        assert!(find_violations(source).is_empty());
    }

    #[test]
    fn ignores_comments() {
        assert!(find_violations("// println!(\"debug\");").is_empty());
        assert!(find_violations("/// Never calls process::exit(1).").is_empty());
    }

    #[test]
    fn reports_line_numbers() {
        let source = "let a = 1;\n\nprintln!(\"{}\", a);";
        assert_eq!(find_violations(source)[0].0, 3);
    }
}
