use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Every `t!("...")` literal in `src/` must exist in the fallback locale.
#[test]
fn referenced_keys_exist_in_fallback() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fallback = fs::read_to_string(crate_root.join("i18n/en-US/automl-ui.ftl"))
        .expect("fallback FTL file is readable");
    let defined = parse_ftl_keys(&fallback);

    let mut referenced = BTreeSet::new();
    collect_source_keys(&crate_root.join("src"), &mut referenced);
    assert!(referenced.contains("nav-home"), "scanner found no keys");

    let missing: Vec<&String> = referenced.iter().filter(|k| !defined.contains(*k)).collect();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in en-US:\n{}",
        missing.iter().map(|k| k.as_str()).collect::<Vec<_>>().join("\n")
    );
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

/// Direct literal first arguments only; doc examples inside comments are skipped.
fn collect_source_keys(dir: &Path, found: &mut BTreeSet<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|e| e.path()) {
        if path.is_dir() {
            collect_source_keys(&path, found);
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for line in content.lines() {
            if line.trim_start().starts_with("//") {
                continue;
            }
            for (_, rest) in line.match_indices("t!(\"").map(|(i, m)| (i, &line[i + m.len()..])) {
                if let Some(end) = rest.find('"') {
                    let key = &rest[..end];
                    if !key.is_empty() && key.chars().all(valid_key_char) {
                        found.insert(key.to_string());
                    }
                }
            }
        }
    }
}
