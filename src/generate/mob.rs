//! Mob expansion
//!
//! Scales a base mob template through a mob tier. Health and combat stats
//! scale by the stat multiplier; level scales by the level multiplier.
//! Respawn timing also scales by the level multiplier; that asymmetry is
//! intentional and load-bearing (elites and bosses return on a slower clock
//! tied to their level band, not their stat budget).

use serde::{Deserialize, Serialize};

use crate::catalog::{Biome, Catalog, CombatConfig, Faction, MobStats, MobTemplate, MobTier};
use crate::error::GenerateError;
use crate::generate::item::model_path;

/// One entry in a mob drop table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropEntry {
    pub item_id: String,
    pub chance: f64,
    pub min_quantity: u32,
    pub max_quantity: u32,
}

/// A concrete mob produced from a template and a tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMob {
    /// "{base_id}{tier suffix}"
    pub id: String,
    /// Base name, with the tier name appended for medium/boss
    pub name: String,
    pub description: String,
    pub faction: Faction,
    pub aggressive: bool,
    pub spawn_biomes: Vec<Biome>,
    pub stats: MobStats,
    pub combat: CombatConfig,
    /// Visual model scale per tier
    pub scale: f32,
    /// Left empty; drop tables are owned by external systems
    pub drop_table: Vec<DropEntry>,
    pub model_path: String,
}

/// Expand a template with a mob tier into a concrete mob.
pub fn create_mob_from_template(
    catalog: &Catalog,
    template: &MobTemplate,
    tier_id: &str,
) -> Result<GeneratedMob, GenerateError> {
    let tier = catalog
        .mob_tier(tier_id)
        .ok_or_else(|| GenerateError::UnknownMobTier(tier_id.to_string()))?;
    Ok(expand_mob(template, tier))
}

/// Convenience lookup by template id
pub fn create_mob(
    catalog: &Catalog,
    base_id: &str,
    tier_id: &str,
) -> Result<GeneratedMob, GenerateError> {
    let template = catalog
        .mob_template(base_id)
        .ok_or_else(|| GenerateError::UnknownMobTemplate(base_id.to_string()))?;
    create_mob_from_template(catalog, template, tier_id)
}

fn expand_mob(template: &MobTemplate, tier: &MobTier) -> GeneratedMob {
    let stat = |v: i32| (v as f64 * tier.stat_multiplier).round() as i32;
    let base = &template.base_stats;

    let name = if tier.name.is_empty() {
        template.base_name.clone()
    } else {
        format!("{} {}", template.base_name, tier.name)
    };

    GeneratedMob {
        id: format!("{}{}", template.base_id, tier.suffix),
        name,
        description: template.description.clone(),
        faction: template.faction,
        aggressive: template.aggressive,
        spawn_biomes: template.spawn_biomes.clone(),
        stats: MobStats {
            level: (base.level as f64 * tier.level_multiplier).round() as u32,
            health: stat(base.health),
            attack: stat(base.attack),
            strength: stat(base.strength),
            defense: stat(base.defense),
        },
        combat: CombatConfig {
            attack_speed_ticks: template.combat.attack_speed_ticks,
            combat_range: template.combat.combat_range,
            aggro_range: template.combat.aggro_range,
            // Deliberately the level multiplier, not the stat multiplier.
            respawn_ticks: (template.combat.respawn_ticks as f64 * tier.level_multiplier).round()
                as u32,
        },
        scale: tier.scale,
        drop_table: Vec::new(),
        model_path: model_path(&template.base_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_goblin_identity() {
        let catalog = Catalog::builtin();
        let mob = create_mob(&catalog, "goblin", "weak").unwrap();
        assert_eq!(mob.id, "goblin");
        assert_eq!(mob.name, "Goblin");
        assert_eq!(mob.stats, catalog.mob_template("goblin").unwrap().base_stats);
        assert_eq!(mob.scale, 1.0);
    }

    #[test]
    fn test_boss_goblin_chieftain() {
        let catalog = Catalog::builtin();
        let mob = create_mob(&catalog, "goblin", "boss").unwrap();
        assert_eq!(mob.id, "goblin_boss");
        assert_eq!(mob.name, "Goblin Chieftain");
        // Level scales by the level multiplier: round(2 * 5.0) = 10.
        assert_eq!(mob.stats.level, 10);
        // Stats scale by the stat multiplier.
        assert_eq!(mob.stats.health, 250);
        assert_eq!(mob.stats.attack, 50);
        assert_eq!(mob.scale, 1.5);
    }

    #[test]
    fn test_respawn_scales_with_level_multiplier() {
        // Intentional asymmetry: respawn follows the level multiplier even
        // though every other combat number follows the stat multiplier.
        let catalog = Catalog::builtin();
        let base = catalog.mob_template("goblin").unwrap().combat.respawn_ticks;

        let elite = create_mob(&catalog, "goblin", "medium").unwrap();
        assert_eq!(elite.combat.respawn_ticks, base * 2);

        let boss = create_mob(&catalog, "goblin", "boss").unwrap();
        assert_eq!(boss.combat.respawn_ticks, base * 5);
    }

    #[test]
    fn test_attack_pacing_unscaled() {
        let catalog = Catalog::builtin();
        let template = catalog.mob_template("wolf").unwrap().clone();
        let boss = create_mob(&catalog, "wolf", "boss").unwrap();
        assert_eq!(boss.combat.attack_speed_ticks, template.combat.attack_speed_ticks);
        assert_eq!(boss.combat.aggro_range, template.combat.aggro_range);
    }

    #[test]
    fn test_drop_table_starts_empty() {
        let catalog = Catalog::builtin();
        let mob = create_mob(&catalog, "bandit", "medium").unwrap();
        assert!(mob.drop_table.is_empty());
    }

    #[test]
    fn test_unknown_tier_is_hard_error() {
        let catalog = Catalog::builtin();
        let err = create_mob(&catalog, "goblin", "legendary").unwrap_err();
        assert_eq!(err, GenerateError::UnknownMobTier("legendary".to_string()));
    }
}
