//! Composite template application
//!
//! Tier sets, mob packs, and asset bundles resolve their member references
//! lazily and expand them through the single-entity creators. Unknown ids
//! are logged and skipped; a partially-misconfigured catalog degrades to a
//! partial result, it never aborts.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::generate::item::{create_item, GeneratedItem};
use crate::generate::mob::{create_mob, GeneratedMob};
use crate::generate::npc::{create_npc_from_template, GeneratedNpc};

/// Counts and a one-line description of what a composite produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleSummary {
    pub item_count: usize,
    pub mob_count: usize,
    pub npc_count: usize,
    pub description: String,
}

/// Result of applying a composite template
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BundleResult {
    pub items: Vec<GeneratedItem>,
    pub mobs: Vec<GeneratedMob>,
    pub npcs: Vec<GeneratedNpc>,
    pub summary: BundleSummary,
}

impl BundleResult {
    fn finish(mut self, label: &str) -> Self {
        self.summary.item_count = self.items.len();
        self.summary.mob_count = self.mobs.len();
        self.summary.npc_count = self.npcs.len();
        self.summary.description = format!(
            "{}: {} items, {} mobs, {} NPCs",
            label,
            self.items.len(),
            self.mobs.len(),
            self.npcs.len()
        );
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.mobs.is_empty() && self.npcs.is_empty()
    }
}

/// Expand every member of a tier set once per requested material.
pub fn apply_tier_set(catalog: &Catalog, template_id: &str, materials: &[&str]) -> BundleResult {
    let mut result = BundleResult::default();

    let Some(set) = catalog.bundles().find_tier_set(template_id) else {
        log::warn!("Unknown tier set '{}'; skipping", template_id);
        return result.finish(template_id);
    };

    for material_id in materials {
        for base_id in &set.member_item_ids {
            match create_item(catalog, base_id, material_id) {
                Ok(item) => result.items.push(item),
                Err(e) => log::warn!("Skipping tier set member '{}': {}", base_id, e),
            }
        }
    }

    result.finish(&set.name)
}

/// Expand every member of a mob pack at its declared tier.
pub fn apply_mob_pack(catalog: &Catalog, template_id: &str) -> BundleResult {
    let mut result = BundleResult::default();

    let Some(pack) = catalog.bundles().find_mob_pack(template_id) else {
        log::warn!("Unknown mob pack '{}'; skipping", template_id);
        return result.finish(template_id);
    };

    for member in &pack.members {
        match create_mob(catalog, &member.mob_id, &member.tier_id) {
            Ok(mob) => result.mobs.push(mob),
            Err(e) => log::warn!("Skipping mob pack member '{}': {}", member.mob_id, e),
        }
    }

    result.finish(&pack.name)
}

/// Expand a full asset bundle: items, mobs, and NPCs.
pub fn apply_asset_bundle(catalog: &Catalog, template_id: &str) -> BundleResult {
    let mut result = BundleResult::default();

    let Some(bundle) = catalog.bundles().find_bundle(template_id) else {
        log::warn!("Unknown asset bundle '{}'; skipping", template_id);
        return result.finish(template_id);
    };

    for item_ref in &bundle.items {
        match create_item(catalog, &item_ref.template_id, &item_ref.material_id) {
            Ok(item) => result.items.push(item),
            Err(e) => log::warn!("Skipping bundle item '{}': {}", item_ref.template_id, e),
        }
    }

    for mob_ref in &bundle.mobs {
        match create_mob(catalog, &mob_ref.mob_id, &mob_ref.tier_id) {
            Ok(mob) => result.mobs.push(mob),
            Err(e) => log::warn!("Skipping bundle mob '{}': {}", mob_ref.mob_id, e),
        }
    }

    for npc_id in &bundle.npcs {
        match catalog.npc_template(npc_id) {
            Some(template) => result.npcs.push(create_npc_from_template(template)),
            None => log::warn!("Skipping bundle NPC '{}': unknown template", npc_id),
        }
    }

    result.finish(&bundle.name)
}
