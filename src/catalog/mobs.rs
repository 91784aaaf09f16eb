//! Mob base templates
//!
//! Each template describes the weak-tier mob; elite and boss variants are
//! produced by the generator from the mob tier table.

use serde::{Deserialize, Serialize};

/// Factions mobs and NPCs can belong to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Faction {
    Monster,
    Bandit,
    Wildlife,
    Undead,
    Villager,
}

/// Biomes a mob can spawn in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Plains,
    Forest,
    Swamp,
    Mountains,
    Caves,
}

/// Core combat statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobStats {
    pub level: u32,
    pub health: i32,
    pub attack: i32,
    pub strength: i32,
    pub defense: i32,
}

/// Combat pacing and engagement configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombatConfig {
    /// Ticks between attacks
    pub attack_speed_ticks: u32,
    /// Melee reach in tiles
    pub combat_range: f32,
    /// Distance at which an aggressive mob engages
    pub aggro_range: f32,
    /// Ticks until the mob respawns after death
    pub respawn_ticks: u32,
}

/// A base mob template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobTemplate {
    pub base_id: String,
    pub base_name: String,
    pub description: String,
    pub faction: Faction,
    pub aggressive: bool,
    pub spawn_biomes: Vec<Biome>,
    pub base_stats: MobStats,
    pub combat: CombatConfig,
}

/// Collection of mob templates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MobTemplates {
    pub templates: Vec<MobTemplate>,
}

impl MobTemplates {
    /// Find a template by base id
    pub fn find(&self, base_id: &str) -> Option<&MobTemplate> {
        self.templates.iter().find(|t| t.base_id == base_id)
    }

    /// All mobs that can spawn in a biome
    pub fn for_biome(&self, biome: Biome) -> Vec<&MobTemplate> {
        self.templates
            .iter()
            .filter(|t| t.spawn_biomes.contains(&biome))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MobTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn mob(
    base_id: &str,
    base_name: &str,
    description: &str,
    faction: Faction,
    aggressive: bool,
    spawn_biomes: Vec<Biome>,
    base_stats: MobStats,
    combat: CombatConfig,
) -> MobTemplate {
    MobTemplate {
        base_id: base_id.to_string(),
        base_name: base_name.to_string(),
        description: description.to_string(),
        faction,
        aggressive,
        spawn_biomes,
        base_stats,
        combat,
    }
}

/// Create the built-in mob template table
pub fn default_mob_templates() -> MobTemplates {
    MobTemplates {
        templates: vec![
            mob(
                "goblin",
                "Goblin",
                "A scrawny green menace with a rusty blade.",
                Faction::Monster,
                true,
                vec![Biome::Plains, Biome::Forest],
                MobStats { level: 2, health: 25, attack: 5, strength: 4, defense: 3 },
                CombatConfig {
                    attack_speed_ticks: 4,
                    combat_range: 1.0,
                    aggro_range: 5.0,
                    respawn_ticks: 100,
                },
            ),
            mob(
                "wolf",
                "Wolf",
                "A lean grey hunter that circles before it strikes.",
                Faction::Wildlife,
                true,
                vec![Biome::Forest, Biome::Mountains],
                MobStats { level: 4, health: 30, attack: 7, strength: 6, defense: 4 },
                CombatConfig {
                    attack_speed_ticks: 3,
                    combat_range: 1.0,
                    aggro_range: 7.0,
                    respawn_ticks: 120,
                },
            ),
            mob(
                "bandit",
                "Bandit",
                "A highwayman who has chosen his last victim poorly.",
                Faction::Bandit,
                true,
                vec![Biome::Plains, Biome::Forest],
                MobStats { level: 8, health: 45, attack: 10, strength: 9, defense: 8 },
                CombatConfig {
                    attack_speed_ticks: 4,
                    combat_range: 1.0,
                    aggro_range: 6.0,
                    respawn_ticks: 150,
                },
            ),
            mob(
                "skeleton",
                "Skeleton",
                "Old bones that refuse to stay buried.",
                Faction::Undead,
                true,
                vec![Biome::Caves, Biome::Swamp],
                MobStats { level: 12, health: 55, attack: 13, strength: 11, defense: 10 },
                CombatConfig {
                    attack_speed_ticks: 5,
                    combat_range: 1.0,
                    aggro_range: 5.0,
                    respawn_ticks: 180,
                },
            ),
            mob(
                "cave_troll",
                "Cave Troll",
                "Slow, enormous, and perpetually hungry.",
                Faction::Monster,
                true,
                vec![Biome::Caves, Biome::Mountains],
                MobStats { level: 20, health: 120, attack: 18, strength: 22, defense: 16 },
                CombatConfig {
                    attack_speed_ticks: 7,
                    combat_range: 1.5,
                    aggro_range: 4.0,
                    respawn_ticks: 300,
                },
            ),
            mob(
                "rat",
                "Giant Rat",
                "Larger than it has any right to be.",
                Faction::Wildlife,
                false,
                vec![Biome::Plains, Biome::Caves, Biome::Swamp],
                MobStats { level: 1, health: 10, attack: 2, strength: 2, defense: 1 },
                CombatConfig {
                    attack_speed_ticks: 3,
                    combat_range: 1.0,
                    aggro_range: 2.0,
                    respawn_ticks: 60,
                },
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find() {
        let mobs = default_mob_templates();
        assert_eq!(mobs.find("goblin").unwrap().base_stats.level, 2);
        assert!(mobs.find("dragon_whelp").is_none());
    }

    #[test]
    fn test_for_biome() {
        let mobs = default_mob_templates();
        let cave_mobs = mobs.for_biome(Biome::Caves);
        assert!(cave_mobs.iter().any(|m| m.base_id == "skeleton"));
        assert!(cave_mobs.iter().all(|m| m.spawn_biomes.contains(&Biome::Caves)));
    }
}
