use std::{
    fs,
    path::{Path, PathBuf},
};

#[test]
fn direct_printing_is_log_module_only() {
    let workspace_root = workspace_root();
    let allowed = workspace_root
        .join("crates")
        .join("patternbook-core")
        .join("src")
        .join("log.rs");
    let mut violations = Vec::new();

    scan_dir(&workspace_root.join("crates"), &allowed, &mut violations);

    assert!(
        violations.is_empty(),
        "stdout/stderr printing outside the log module: {violations:?}"
    );
}

fn scan_dir(root: &Path, allowed: &Path, violations: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(root) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path
            .file_name()
            .is_some_and(|name| name == "target" || name == ".git" || name == "tests")
        {
            continue;
        }

        if path.is_dir() {
            scan_dir(&path, allowed, violations);
            continue;
        }

        if path.extension().and_then(|ext| ext.to_str()) != Some("rs") || path == allowed {
            continue;
        }

        let Ok(source) = fs::read_to_string(&path) else {
            continue;
        };

        if ["println!", "eprintln!", "print!(", "eprint!("]
            .iter()
            .any(|needle| source.contains(needle))
        {
            violations.push(path);
        }
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")))
}
