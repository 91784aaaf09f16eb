//! Material tier table
//!
//! Materials drive every item expansion: stat and value multipliers,
//! rarity, and the level requirement all come from the material, not the
//! base template. The canonical ordering (bronze through dragon) has
//! strictly increasing level and multipliers.

use serde::{Deserialize, Serialize};

/// Item rarity tiers, fully determined by material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Get display color RGB
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Rarity::Common => (200, 200, 200),
            Rarity::Uncommon => (100, 255, 100),
            Rarity::Rare => (100, 150, 255),
            Rarity::Epic => (200, 100, 255),
            Rarity::Legendary => (255, 180, 50),
        }
    }

    /// Get rarity name
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }

    /// Parse a rarity from its display name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "common" => Some(Rarity::Common),
            "uncommon" => Some(Rarity::Uncommon),
            "rare" => Some(Rarity::Rare),
            "epic" => Some(Rarity::Epic),
            "legendary" => Some(Rarity::Legendary),
            _ => None,
        }
    }

    /// Get numeric value for sorting (higher = rarer)
    pub fn sort_value(&self) -> u8 {
        match self {
            Rarity::Common => 0,
            Rarity::Uncommon => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
        }
    }
}

/// A material tier entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialTier {
    /// Lowercase id used in generated item ids ("bronze", "rune", ...)
    pub id: String,
    /// Display name used as the item name prefix
    pub name: String,
    /// Level requirement for items of this material
    pub level: u32,
    /// Multiplier applied to every template base stat
    pub stat_multiplier: f64,
    /// Multiplier applied to the per-kind base value
    pub value_multiplier: f64,
    /// Rarity of every item made from this material
    pub rarity: Rarity,
    /// Display color (RGB)
    pub color: (u8, u8, u8),
    /// Flavor text
    pub description: String,
}

/// Collection of material tiers, kept in canonical progression order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialTiers {
    pub tiers: Vec<MaterialTier>,
}

impl MaterialTiers {
    /// Find a tier by id
    pub fn find(&self, id: &str) -> Option<&MaterialTier> {
        self.tiers.iter().find(|t| t.id == id)
    }

    /// All tier ids in canonical (ascending level) order
    pub fn ids(&self) -> Vec<&str> {
        self.tiers.iter().map(|t| t.id.as_str()).collect()
    }

    /// Iterate tiers in canonical order
    pub fn iter(&self) -> impl Iterator<Item = &MaterialTier> {
        self.tiers.iter()
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

fn tier(
    id: &str,
    name: &str,
    level: u32,
    stat_multiplier: f64,
    value_multiplier: f64,
    rarity: Rarity,
    color: (u8, u8, u8),
    description: &str,
) -> MaterialTier {
    MaterialTier {
        id: id.to_string(),
        name: name.to_string(),
        level,
        stat_multiplier,
        value_multiplier,
        rarity,
        color,
        description: description.to_string(),
    }
}

/// Create the built-in material tier table
pub fn default_material_tiers() -> MaterialTiers {
    MaterialTiers {
        tiers: vec![
            tier(
                "bronze",
                "Bronze",
                1,
                1.0,
                1.0,
                Rarity::Common,
                (176, 117, 68),
                "Soft alloy, the first thing anyone smiths.",
            ),
            tier(
                "iron",
                "Iron",
                10,
                1.5,
                2.5,
                Rarity::Common,
                (120, 120, 125),
                "Honest metal. Rusts if you look at it wrong.",
            ),
            tier(
                "steel",
                "Steel",
                20,
                2.0,
                5.0,
                Rarity::Uncommon,
                (170, 175, 185),
                "Folded iron, holds an edge twice as long.",
            ),
            tier(
                "mithril",
                "Mithril",
                30,
                2.6,
                12.0,
                Rarity::Uncommon,
                (110, 110, 220),
                "Pale blue ore that rings like a bell when struck.",
            ),
            tier(
                "adamant",
                "Adamant",
                40,
                3.4,
                30.0,
                Rarity::Rare,
                (80, 160, 90),
                "Green-tinged and dense; blunts lesser picks.",
            ),
            tier(
                "rune",
                "Rune",
                50,
                4.5,
                80.0,
                Rarity::Epic,
                (90, 200, 210),
                "Metal quickened with old magic.",
            ),
            tier(
                "dragon",
                "Dragon",
                60,
                6.0,
                200.0,
                Rarity::Legendary,
                (200, 40, 40),
                "Forged in dragonfire. Nothing mortal dents it.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order_strictly_increasing() {
        let tiers = default_material_tiers();
        for pair in tiers.tiers.windows(2) {
            assert!(pair[0].level < pair[1].level, "{} level", pair[1].id);
            assert!(
                pair[0].stat_multiplier < pair[1].stat_multiplier,
                "{} stat multiplier",
                pair[1].id
            );
            assert!(
                pair[0].value_multiplier < pair[1].value_multiplier,
                "{} value multiplier",
                pair[1].id
            );
        }
    }

    #[test]
    fn test_canonical_ids() {
        let tiers = default_material_tiers();
        assert_eq!(
            tiers.ids(),
            vec!["bronze", "iron", "steel", "mithril", "adamant", "rune", "dragon"]
        );
    }

    #[test]
    fn test_find() {
        let tiers = default_material_tiers();
        assert_eq!(tiers.find("dragon").unwrap().name, "Dragon");
        assert!(tiers.find("cardboard").is_none());
    }

    #[test]
    fn test_rarity_from_name() {
        assert_eq!(Rarity::from_name("Epic"), Some(Rarity::Epic));
        assert_eq!(Rarity::from_name("legendary"), Some(Rarity::Legendary));
        assert_eq!(Rarity::from_name("divine"), None);
    }
}
