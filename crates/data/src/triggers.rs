use anyhow::{bail, Context};
use std::fs;
use std::path::Path;
use trigsmith_core::TriggerCollection;

/// Load a trigger-set document. The document is this tool's own JSON
/// format; reading the game's scenario container is the job of a scenario
/// parser upstream of us.
pub fn load_trigger_set(path: &Path) -> anyhow::Result<TriggerCollection> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let collection: TriggerCollection =
        serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    if !collection.display_order_consistent() {
        bail!(
            "{}: display order is not a permutation of the trigger list",
            path.display()
        );
    }
    Ok(collection)
}

pub fn save_trigger_set(path: &Path, collection: &TriggerCollection) -> anyhow::Result<()> {
    let raw = serde_json::to_string_pretty(collection).context("serialize trigger set")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
