//! Template catalogs
//!
//! All constant tables the generator expands from: material tiers, mob
//! tiers, item/mob/NPC templates, and composite bundle definitions.
//! A `Catalog` is assembled once and never mutated afterwards; everything
//! else reads it through the accessors here.

pub mod bundles;
pub mod items;
pub mod loader;
pub mod materials;
pub mod mob_tiers;
pub mod mobs;
pub mod npcs;

pub use bundles::{
    AssetBundleTemplate, BundleTemplates, ItemRef, MobPackTemplate, MobRef, TierSetTemplate,
};
pub use items::{
    AttackType, EquipSlot, ItemKind, ItemTemplate, ItemTemplates, Skill, StatBonuses, ToolProfile,
    WeaponProfile, WeaponType,
};
pub use loader::export_builtin_data;
pub use materials::{MaterialTier, MaterialTiers, Rarity};
pub use mob_tiers::{MobTier, MobTiers};
pub use mobs::{Biome, CombatConfig, Faction, MobStats, MobTemplate, MobTemplates};
pub use npcs::{DialogueType, NpcService, NpcTemplate, NpcTemplates};

/// The full set of immutable content tables.
///
/// Fields are private; construction goes through [`Catalog::builtin`] or the
/// loader, and afterwards the tables are read-only.
#[derive(Debug, Clone)]
pub struct Catalog {
    materials: MaterialTiers,
    mob_tiers: MobTiers,
    items: ItemTemplates,
    mobs: MobTemplates,
    npcs: NpcTemplates,
    bundles: BundleTemplates,
}

impl Catalog {
    /// Assemble the built-in catalog
    pub fn builtin() -> Self {
        Self {
            materials: materials::default_material_tiers(),
            mob_tiers: mob_tiers::default_mob_tiers(),
            items: items::default_item_templates(),
            mobs: mobs::default_mob_templates(),
            npcs: npcs::default_npc_templates(),
            bundles: bundles::default_bundle_templates(),
        }
    }

    /// Assemble a catalog from explicit tables
    pub fn new(
        materials: MaterialTiers,
        mob_tiers: MobTiers,
        items: ItemTemplates,
        mobs: MobTemplates,
        npcs: NpcTemplates,
        bundles: BundleTemplates,
    ) -> Self {
        Self { materials, mob_tiers, items, mobs, npcs, bundles }
    }

    pub fn materials(&self) -> &MaterialTiers {
        &self.materials
    }

    pub fn mob_tiers(&self) -> &MobTiers {
        &self.mob_tiers
    }

    pub fn items(&self) -> &ItemTemplates {
        &self.items
    }

    pub fn mobs(&self) -> &MobTemplates {
        &self.mobs
    }

    pub fn npcs(&self) -> &NpcTemplates {
        &self.npcs
    }

    pub fn bundles(&self) -> &BundleTemplates {
        &self.bundles
    }

    /// Shorthand lookups
    pub fn material(&self, id: &str) -> Option<&MaterialTier> {
        self.materials.find(id)
    }

    pub fn mob_tier(&self, id: &str) -> Option<&MobTier> {
        self.mob_tiers.find(id)
    }

    pub fn item_template(&self, base_id: &str) -> Option<&ItemTemplate> {
        self.items.find(base_id)
    }

    pub fn mob_template(&self, base_id: &str) -> Option<&MobTemplate> {
        self.mobs.find(base_id)
    }

    pub fn npc_template(&self, base_id: &str) -> Option<&NpcTemplate> {
        self.npcs.find(base_id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_populated() {
        let catalog = Catalog::builtin();
        assert!(!catalog.materials().is_empty());
        assert_eq!(catalog.mob_tiers().ids().len(), 3);
        assert!(!catalog.items().is_empty());
        assert!(!catalog.mobs().is_empty());
        assert!(!catalog.npcs().is_empty());
        assert!(catalog.bundles().find_tier_set("melee_starter").is_some());
    }
}
