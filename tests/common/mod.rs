use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

pub fn tagdex_cmd() -> Command {
    let mut cmd = Command::cargo_bin("tagdex").unwrap();
    cmd.env_remove("TAGDEX_ROOT");
    cmd.env_remove("TAGDEX_MANIFEST");
    cmd.env_remove("TAGDEX_LOG");
    cmd
}

/// Write a manifest with the given `value = [tags]` lines
#[allow(dead_code)]
pub fn write_manifest(dir: &Path, entries: &[(&str, &[&str])]) -> PathBuf {
    let mut contents = String::from("[values]\n");
    for (value, tags) in entries {
        let tags: Vec<String> = tags.iter().map(|t| format!("\"{}\"", t)).collect();
        contents.push_str(&format!("\"{}\" = [{}]\n", value, tags.join(", ")));
    }

    let path = dir.join("tags.toml");
    fs::write(&path, contents).unwrap();
    path
}
