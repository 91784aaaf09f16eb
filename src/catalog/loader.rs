//! RON catalog loader
//!
//! Loads catalog tables from external RON files, with fallback to the
//! built-in defaults. Also exports the built-ins back out as RON for easy
//! editing.

use std::fs;
use std::path::Path;

use super::bundles::default_bundle_templates;
use super::items::default_item_templates;
use super::materials::default_material_tiers;
use super::mob_tiers::default_mob_tiers;
use super::mobs::default_mob_templates;
use super::npcs::default_npc_templates;
use super::Catalog;

const DATA_DIR: &str = "assets/data";

impl Catalog {
    /// Load a catalog from `assets/data/`, falling back per-table to the
    /// built-ins when a file is missing or malformed.
    pub fn load_or_builtin() -> Self {
        let base = Path::new(DATA_DIR);
        Self {
            materials: load_table(base, "materials.ron", default_material_tiers),
            mob_tiers: load_table(base, "mob_tiers.ron", default_mob_tiers),
            items: load_table(base, "item_templates.ron", default_item_templates),
            mobs: load_table(base, "mob_templates.ron", default_mob_templates),
            npcs: load_table(base, "npc_templates.ron", default_npc_templates),
            bundles: load_table(base, "bundles.ron", default_bundle_templates),
        }
    }
}

fn load_table<T, F>(base: &Path, file: &str, fallback: F) -> T
where
    T: serde::de::DeserializeOwned,
    F: FnOnce() -> T,
{
    let path = base.join(file);
    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(content) => match ron::from_str(&content) {
                Ok(table) => return table,
                Err(e) => log::warn!("Failed to parse {}: {}. Using built-ins.", file, e),
            },
            Err(e) => log::warn!("Failed to read {}: {}. Using built-ins.", file, e),
        }
    }
    fallback()
}

/// Export the built-in tables to RON files for editing
pub fn export_builtin_data() -> Result<(), String> {
    let base = Path::new(DATA_DIR);

    if !base.exists() {
        fs::create_dir_all(base)
            .map_err(|e| format!("Failed to create {} directory: {}", DATA_DIR, e))?;
    }

    write_table(base, "materials.ron", &default_material_tiers())?;
    write_table(base, "mob_tiers.ron", &default_mob_tiers())?;
    write_table(base, "item_templates.ron", &default_item_templates())?;
    write_table(base, "mob_templates.ron", &default_mob_templates())?;
    write_table(base, "npc_templates.ron", &default_npc_templates())?;
    write_table(base, "bundles.ron", &default_bundle_templates())?;

    log::info!("Exported built-in catalog tables to {}", DATA_DIR);
    Ok(())
}

fn write_table<T: serde::Serialize>(base: &Path, file: &str, table: &T) -> Result<(), String> {
    let text = ron::ser::to_string_pretty(table, ron::ser::PrettyConfig::default())
        .map_err(|e| format!("Failed to serialize {}: {}", file, e))?;
    fs::write(base.join(file), text).map_err(|e| format!("Failed to write {}: {}", file, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::materials::MaterialTiers;
    use crate::catalog::mob_tiers::MobTiers;

    #[test]
    fn test_export_then_load() {
        export_builtin_data().expect("export failed");

        let base = Path::new(DATA_DIR);
        assert!(base.join("materials.ron").exists());
        assert!(base.join("bundles.ron").exists());

        let catalog = Catalog::load_or_builtin();
        assert!(!catalog.materials().is_empty());
        assert!(!catalog.items().is_empty());
    }

    #[test]
    fn test_missing_files_fall_back() {
        // A directory with no files present loads pure built-ins.
        let loaded: MaterialTiers =
            load_table(Path::new("definitely/not/here"), "materials.ron", default_material_tiers);
        assert_eq!(loaded.ids(), default_material_tiers().ids());
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = std::env::temp_dir().join("hyperforge_loader_test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("mob_tiers.ron"), "(this is not ron").unwrap();

        let loaded: MobTiers = load_table(&dir, "mob_tiers.ron", default_mob_tiers);
        assert_eq!(loaded.ids(), vec!["weak", "medium", "boss"]);
    }
}
