//! Go source file discovery

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Buildable `.go` files directly inside `dir`, sorted by path.
///
/// Test files and files excluded with an `ignore` build constraint are
/// skipped; subdirectories are separate packages and are not entered.
pub fn discover_go_files(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !is_candidate_name(path) {
            continue;
        }
        let source = std::fs::read_to_string(path)?;
        if has_ignore_constraint(&source) {
            continue;
        }
        files.push(path.to_path_buf());
    }
    Ok(files)
}

fn is_candidate_name(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".go")
        && !name.ends_with("_test.go")
        && !name.starts_with('.')
        && !name.starts_with('_')
}

/// `//go:build ignore` (or the legacy `// +build ignore`) before the package
/// clause.
pub fn has_ignore_constraint(source: &str) -> bool {
    for line in source.lines() {
        let line = line.trim();
        if line.starts_with("package ") {
            break;
        }
        let expr = line
            .strip_prefix("//go:build")
            .or_else(|| line.strip_prefix("// +build"));
        if let Some(expr) = expr {
            if expr.split_whitespace().any(|term| term == "ignore") {
                return true;
            }
        }
    }
    false
}
