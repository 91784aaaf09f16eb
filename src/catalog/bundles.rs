//! Composite templates
//!
//! Tier sets, mob packs, and asset bundles reference base templates by id
//! and are resolved lazily at expansion time. A malformed reference is a
//! catalog bug, not a runtime failure; the generator logs and skips it.

use serde::{Deserialize, Serialize};

/// A set of item templates expanded together across chosen materials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierSetTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Base item template ids expanded per material
    pub member_item_ids: Vec<String>,
}

/// One mob reference inside a pack or bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobRef {
    pub mob_id: String,
    pub tier_id: String,
}

/// A themed group of mobs at fixed tiers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobPackTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub members: Vec<MobRef>,
}

/// One item reference inside a bundle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRef {
    pub template_id: String,
    pub material_id: String,
}

/// A mixed bundle of items, mobs, and NPCs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetBundleTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub items: Vec<ItemRef>,
    pub mobs: Vec<MobRef>,
    /// NPC template ids
    pub npcs: Vec<String>,
}

/// All composite templates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BundleTemplates {
    pub tier_sets: Vec<TierSetTemplate>,
    pub mob_packs: Vec<MobPackTemplate>,
    pub bundles: Vec<AssetBundleTemplate>,
}

impl BundleTemplates {
    pub fn find_tier_set(&self, id: &str) -> Option<&TierSetTemplate> {
        self.tier_sets.iter().find(|t| t.id == id)
    }

    pub fn find_mob_pack(&self, id: &str) -> Option<&MobPackTemplate> {
        self.mob_packs.iter().find(|t| t.id == id)
    }

    pub fn find_bundle(&self, id: &str) -> Option<&AssetBundleTemplate> {
        self.bundles.iter().find(|t| t.id == id)
    }
}

fn mob_ref(mob_id: &str, tier_id: &str) -> MobRef {
    MobRef { mob_id: mob_id.to_string(), tier_id: tier_id.to_string() }
}

fn item_ref(template_id: &str, material_id: &str) -> ItemRef {
    ItemRef {
        template_id: template_id.to_string(),
        material_id: material_id.to_string(),
    }
}

/// Create the built-in composite template tables
pub fn default_bundle_templates() -> BundleTemplates {
    BundleTemplates {
        tier_sets: vec![
            TierSetTemplate {
                id: "melee_starter".to_string(),
                name: "Melee Starter Set".to_string(),
                description: "Sword, chainbody, and shield for a fresh fighter.".to_string(),
                member_item_ids: vec![
                    "sword".to_string(),
                    "chainbody".to_string(),
                    "kiteshield".to_string(),
                ],
            },
            TierSetTemplate {
                id: "warrior_set".to_string(),
                name: "Warrior Set".to_string(),
                description: "Full melee kit, head to toe.".to_string(),
                member_item_ids: vec![
                    "sword".to_string(),
                    "full_helm".to_string(),
                    "platebody".to_string(),
                    "platelegs".to_string(),
                    "kiteshield".to_string(),
                ],
            },
            TierSetTemplate {
                id: "gatherer_set".to_string(),
                name: "Gatherer Set".to_string(),
                description: "One of each gathering tool.".to_string(),
                member_item_ids: vec![
                    "pickaxe".to_string(),
                    "hatchet".to_string(),
                    "fishing_rod".to_string(),
                ],
            },
        ],
        mob_packs: vec![
            MobPackTemplate {
                id: "goblin_camp".to_string(),
                name: "Goblin Camp".to_string(),
                description: "A camp of goblins led by their chieftain.".to_string(),
                members: vec![
                    mob_ref("goblin", "weak"),
                    mob_ref("goblin", "weak"),
                    mob_ref("goblin", "medium"),
                    mob_ref("goblin", "boss"),
                ],
            },
            MobPackTemplate {
                id: "wolf_pack".to_string(),
                name: "Wolf Pack".to_string(),
                description: "Wolves hunt in numbers.".to_string(),
                members: vec![
                    mob_ref("wolf", "weak"),
                    mob_ref("wolf", "weak"),
                    mob_ref("wolf", "medium"),
                ],
            },
            MobPackTemplate {
                id: "bandit_hideout".to_string(),
                name: "Bandit Hideout".to_string(),
                description: "Outlaws and the brute who keeps them in line.".to_string(),
                members: vec![
                    mob_ref("bandit", "weak"),
                    mob_ref("bandit", "medium"),
                    mob_ref("bandit", "boss"),
                ],
            },
        ],
        bundles: vec![
            AssetBundleTemplate {
                id: "starter_town".to_string(),
                name: "Starter Town".to_string(),
                description: "Everything a starting zone needs.".to_string(),
                items: vec![
                    item_ref("sword", "bronze"),
                    item_ref("chainbody", "bronze"),
                    item_ref("pickaxe", "bronze"),
                    item_ref("hatchet", "bronze"),
                ],
                mobs: vec![mob_ref("rat", "weak"), mob_ref("goblin", "weak")],
                npcs: vec![
                    "shopkeeper".to_string(),
                    "banker".to_string(),
                    "quest_giver".to_string(),
                ],
            },
            AssetBundleTemplate {
                id: "frontier_outpost".to_string(),
                name: "Frontier Outpost".to_string(),
                description: "A mid-level outpost on contested ground.".to_string(),
                items: vec![
                    item_ref("scimitar", "steel"),
                    item_ref("platebody", "steel"),
                    item_ref("kiteshield", "mithril"),
                ],
                mobs: vec![
                    mob_ref("bandit", "weak"),
                    mob_ref("bandit", "medium"),
                    mob_ref("wolf", "weak"),
                ],
                npcs: vec!["shopkeeper".to_string(), "villager".to_string()],
            },
        ],
    }
}
