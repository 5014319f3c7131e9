use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use trigsmith_core::DuplicateOptions;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct OptionsFile {
    duplicate: DuplicateOptions,
}

/// Load the duplication options. A missing or unreadable-as-JSON file is
/// replaced with defaults on disk and defaults are returned; unknown or
/// missing keys fall back field by field.
pub fn load_options(path: &Path) -> anyhow::Result<DuplicateOptions> {
    if !path.exists() {
        let defaults = DuplicateOptions::default();
        save_options(path, &defaults)?;
        return Ok(defaults);
    }
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    match serde_json::from_str::<OptionsFile>(&raw) {
        Ok(file) => Ok(file.duplicate),
        Err(_) => {
            let defaults = DuplicateOptions::default();
            save_options(path, &defaults)?;
            Ok(defaults)
        }
    }
}

pub fn save_options(path: &Path, options: &DuplicateOptions) -> anyhow::Result<()> {
    let file = OptionsFile {
        duplicate: options.clone(),
    };
    let raw = serde_json::to_string_pretty(&file).context("serialize options")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
