//! HyperForge - Entry Point
//!
//! Exports the built-in catalog tables to assets/data/, then expands the
//! starter town bundle and writes the generated content as JSON under
//! assets/export/.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use hyperforge::catalog::export_builtin_data;
use hyperforge::generate::apply_asset_bundle;
use hyperforge::Catalog;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting HyperForge v{}", env!("CARGO_PKG_VERSION"));

    export_builtin_data().map_err(anyhow::Error::msg)?;

    let catalog = Catalog::load_or_builtin();
    let result = apply_asset_bundle(&catalog, "starter_town");
    log::info!("{}", result.summary.description);

    let out_dir = Path::new("assets/export");
    fs::create_dir_all(out_dir).context("creating assets/export")?;

    write_json(&out_dir.join("items.json"), &result.items)?;
    write_json(&out_dir.join("mobs.json"), &result.mobs)?;
    write_json(&out_dir.join("npcs.json"), &result.npcs)?;

    log::info!("HyperForge finished cleanly");
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
