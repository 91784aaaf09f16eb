//! Mob tier table
//!
//! Three canonical tiers: weak, medium, boss. The tier drives level and
//! stat scaling, the id suffix, the display-name suffix, and visual scale.

use serde::{Deserialize, Serialize};

/// A mob tier entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MobTier {
    /// Tier id ("weak", "medium", "boss")
    pub id: String,
    /// Appended to the base id ("" for weak)
    pub suffix: String,
    /// Appended to the display name ("" for weak)
    pub name: String,
    /// Multiplier for level and respawn timing
    pub level_multiplier: f64,
    /// Multiplier for health and combat stats
    pub stat_multiplier: f64,
    /// Visual model scale
    pub scale: f32,
}

/// Collection of mob tiers
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MobTiers {
    pub tiers: Vec<MobTier>,
}

impl MobTiers {
    /// Find a tier by id
    pub fn find(&self, id: &str) -> Option<&MobTier> {
        self.tiers.iter().find(|t| t.id == id)
    }

    /// All tier ids in ascending power order
    pub fn ids(&self) -> Vec<&str> {
        self.tiers.iter().map(|t| t.id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MobTier> {
        self.tiers.iter()
    }
}

/// Create the built-in mob tier table
pub fn default_mob_tiers() -> MobTiers {
    MobTiers {
        tiers: vec![
            MobTier {
                id: "weak".to_string(),
                suffix: String::new(),
                name: String::new(),
                level_multiplier: 1.0,
                stat_multiplier: 1.0,
                scale: 1.0,
            },
            MobTier {
                id: "medium".to_string(),
                suffix: "_elite".to_string(),
                name: "Elite".to_string(),
                level_multiplier: 2.0,
                stat_multiplier: 2.5,
                scale: 1.2,
            },
            MobTier {
                id: "boss".to_string(),
                suffix: "_boss".to_string(),
                name: "Chieftain".to_string(),
                level_multiplier: 5.0,
                stat_multiplier: 10.0,
                scale: 1.5,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_canonical_tiers() {
        let tiers = default_mob_tiers();
        assert_eq!(tiers.ids(), vec!["weak", "medium", "boss"]);
    }

    #[test]
    fn test_weak_is_identity() {
        let tiers = default_mob_tiers();
        let weak = tiers.find("weak").unwrap();
        assert!(weak.suffix.is_empty());
        assert!(weak.name.is_empty());
        assert_eq!(weak.level_multiplier, 1.0);
        assert_eq!(weak.stat_multiplier, 1.0);
        assert_eq!(weak.scale, 1.0);
    }

    #[test]
    fn test_boss_multipliers() {
        let tiers = default_mob_tiers();
        let boss = tiers.find("boss").unwrap();
        assert_eq!(boss.level_multiplier, 5.0);
        assert_eq!(boss.stat_multiplier, 10.0);
        assert_eq!(boss.scale, 1.5);
    }
}
