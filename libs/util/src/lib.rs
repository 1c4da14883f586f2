use std::path::{Path, PathBuf};

use anyhow::Context;
use toml::{map::Map, Value};

pub fn workspace_dir() -> PathBuf {
    let output = std::process::Command::new(env!("CARGO"))
        .arg("locate-project")
        .arg("--workspace")
        .arg("--message-format=plain")
        .output()
        .unwrap()
        .stdout;
    let cargo_path = Path::new(std::str::from_utf8(&output).unwrap().trim());
    cargo_path.parent().unwrap().to_path_buf()
}

/// Reads a TOML file (`Config.toml`, `Secrets.toml`, ...) located at the
/// workspace root.
pub fn load_toml(name: &str) -> anyhow::Result<Map<String, Value>> {
    let path = workspace_dir().join(name);
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    toml::from_str::<Map<String, Value>>(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))
}
