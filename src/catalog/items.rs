//! Item base templates
//!
//! Weapon, armor, and tool archetypes. Templates carry the base stats and
//! identity of an item; everything material-dependent (value, rarity,
//! level, final stats) is applied at expansion time.

use serde::{Deserialize, Serialize};

/// Item categories the generator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Armor,
    Tool,
}

impl ItemKind {
    /// Base gold value before the material multiplier is applied
    pub fn base_value(&self) -> f64 {
        match self {
            ItemKind::Weapon => 100.0,
            ItemKind::Armor => 150.0,
            ItemKind::Tool => 50.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "weapon",
            ItemKind::Armor => "armor",
            ItemKind::Tool => "tool",
        }
    }
}

/// Equipment slot for wearable items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipSlot {
    MainHand,
    OffHand,
    Head,
    Body,
    Legs,
    Hands,
    Feet,
    Tool,
}

/// Trainable skills referenced by requirements and tools
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    Attack,
    Strength,
    Defense,
    Ranged,
    Magic,
    Mining,
    Woodcutting,
    Fishing,
}

/// Weapon subtypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponType {
    Sword,
    Scimitar,
    Dagger,
    Mace,
    Battleaxe,
}

/// How a weapon deals damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttackType {
    Slash,
    Stab,
    Crush,
}

/// Combat stat bonuses carried by items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonuses {
    pub attack: i32,
    pub strength: i32,
    pub defense: i32,
    pub ranged: i32,
    pub magic: i32,
}

impl StatBonuses {
    /// Look up a stat by field name
    pub fn get(&self, stat: &str) -> Option<i32> {
        match stat {
            "attack" => Some(self.attack),
            "strength" => Some(self.strength),
            "defense" => Some(self.defense),
            "ranged" => Some(self.ranged),
            "magic" => Some(self.magic),
            _ => None,
        }
    }

    /// Mutable lookup by field name (used by the field-path updater)
    pub fn get_mut(&mut self, stat: &str) -> Option<&mut i32> {
        match stat {
            "attack" => Some(&mut self.attack),
            "strength" => Some(&mut self.strength),
            "defense" => Some(&mut self.defense),
            "ranged" => Some(&mut self.ranged),
            "magic" => Some(&mut self.magic),
            _ => None,
        }
    }

    /// Scale every stat by a multiplier, rounding to nearest.
    /// Zero stays zero whatever the multiplier.
    pub fn scaled(&self, multiplier: f64) -> Self {
        let scale = |v: i32| (v as f64 * multiplier).round() as i32;
        Self {
            attack: scale(self.attack),
            strength: scale(self.strength),
            defense: scale(self.defense),
            ranged: scale(self.ranged),
            magic: scale(self.magic),
        }
    }
}

/// Weapon-specific template fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeaponProfile {
    pub weapon_type: WeaponType,
    pub attack_type: AttackType,
    /// Ticks between attacks
    pub attack_speed: u32,
    /// Melee reach in tiles
    pub attack_range: f32,
    pub two_handed: bool,
}

/// Tool-specific template fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolProfile {
    /// Skill this tool trains and requires
    pub skill: Skill,
}

/// A base item template, expanded per material at generation time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemTemplate {
    pub base_id: String,
    pub base_name: String,
    pub kind: ItemKind,
    pub equip_slot: EquipSlot,
    /// Carry weight in kg
    pub weight: f32,
    pub description: String,
    pub base_stats: StatBonuses,
    /// Present iff kind == Weapon
    pub weapon: Option<WeaponProfile>,
    /// Present iff kind == Tool
    pub tool: Option<ToolProfile>,
}

/// Collection of item templates across all categories
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemTemplates {
    pub templates: Vec<ItemTemplate>,
}

impl ItemTemplates {
    /// Find a template by base id
    pub fn find(&self, base_id: &str) -> Option<&ItemTemplate> {
        self.templates.iter().find(|t| t.base_id == base_id)
    }

    /// All templates of one kind
    pub fn by_kind(&self, kind: ItemKind) -> Vec<&ItemTemplate> {
        self.templates.iter().filter(|t| t.kind == kind).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn weapon(
    base_id: &str,
    base_name: &str,
    description: &str,
    weight: f32,
    base_stats: StatBonuses,
    profile: WeaponProfile,
) -> ItemTemplate {
    ItemTemplate {
        base_id: base_id.to_string(),
        base_name: base_name.to_string(),
        kind: ItemKind::Weapon,
        equip_slot: EquipSlot::MainHand,
        weight,
        description: description.to_string(),
        base_stats,
        weapon: Some(profile),
        tool: None,
    }
}

fn armor(
    base_id: &str,
    base_name: &str,
    description: &str,
    equip_slot: EquipSlot,
    weight: f32,
    base_stats: StatBonuses,
) -> ItemTemplate {
    ItemTemplate {
        base_id: base_id.to_string(),
        base_name: base_name.to_string(),
        kind: ItemKind::Armor,
        equip_slot,
        weight,
        description: description.to_string(),
        base_stats,
        weapon: None,
        tool: None,
    }
}

fn tool(
    base_id: &str,
    base_name: &str,
    description: &str,
    weight: f32,
    base_stats: StatBonuses,
    skill: Skill,
) -> ItemTemplate {
    ItemTemplate {
        base_id: base_id.to_string(),
        base_name: base_name.to_string(),
        kind: ItemKind::Tool,
        equip_slot: EquipSlot::Tool,
        weight,
        description: description.to_string(),
        base_stats,
        weapon: None,
        tool: Some(ToolProfile { skill }),
    }
}

/// Create the built-in item template tables
pub fn default_item_templates() -> ItemTemplates {
    let stats = |attack: i32, strength: i32, defense: i32| StatBonuses {
        attack,
        strength,
        defense,
        ranged: 0,
        magic: 0,
    };

    ItemTemplates {
        templates: vec![
            // === Weapons ===
            weapon(
                "sword",
                "Sword",
                "A dependable straight blade.",
                1.8,
                stats(8, 7, 0),
                WeaponProfile {
                    weapon_type: WeaponType::Sword,
                    attack_type: AttackType::Slash,
                    attack_speed: 4,
                    attack_range: 1.0,
                    two_handed: false,
                },
            ),
            weapon(
                "scimitar",
                "Scimitar",
                "A curved blade favored for its speed.",
                1.6,
                stats(7, 8, 0),
                WeaponProfile {
                    weapon_type: WeaponType::Scimitar,
                    attack_type: AttackType::Slash,
                    attack_speed: 3,
                    attack_range: 1.0,
                    two_handed: false,
                },
            ),
            weapon(
                "dagger",
                "Dagger",
                "Short, quick, and easy to hide.",
                0.5,
                stats(5, 4, 0),
                WeaponProfile {
                    weapon_type: WeaponType::Dagger,
                    attack_type: AttackType::Stab,
                    attack_speed: 2,
                    attack_range: 1.0,
                    two_handed: false,
                },
            ),
            weapon(
                "mace",
                "Mace",
                "A flanged head that cares nothing for armor.",
                2.2,
                stats(6, 9, 0),
                WeaponProfile {
                    weapon_type: WeaponType::Mace,
                    attack_type: AttackType::Crush,
                    attack_speed: 4,
                    attack_range: 1.0,
                    two_handed: false,
                },
            ),
            weapon(
                "battleaxe",
                "Battleaxe",
                "Two hands, one argument-ender.",
                3.5,
                stats(9, 12, 0),
                WeaponProfile {
                    weapon_type: WeaponType::Battleaxe,
                    attack_type: AttackType::Slash,
                    attack_speed: 6,
                    attack_range: 1.0,
                    two_handed: true,
                },
            ),
            // === Armor ===
            armor(
                "full_helm",
                "Full Helm",
                "Covers everything but your doubts.",
                EquipSlot::Head,
                1.5,
                stats(0, 0, 6),
            ),
            armor(
                "chainbody",
                "Chainbody",
                "Interlocking rings over padded cloth.",
                EquipSlot::Body,
                6.0,
                stats(0, 0, 10),
            ),
            armor(
                "platebody",
                "Platebody",
                "Full plate. Loud, heavy, effective.",
                EquipSlot::Body,
                9.0,
                stats(0, 0, 14),
            ),
            armor(
                "platelegs",
                "Platelegs",
                "Articulated leg plates.",
                EquipSlot::Legs,
                7.0,
                stats(0, 0, 9),
            ),
            armor(
                "kiteshield",
                "Kiteshield",
                "A tall shield tapering to a point.",
                EquipSlot::OffHand,
                5.0,
                stats(0, 0, 8),
            ),
            // === Tools ===
            tool(
                "pickaxe",
                "Pickaxe",
                "For persuading ore out of rock.",
                2.5,
                stats(2, 3, 0),
                Skill::Mining,
            ),
            tool(
                "hatchet",
                "Hatchet",
                "A single-bit felling axe.",
                2.0,
                stats(2, 3, 0),
                Skill::Woodcutting,
            ),
            tool(
                "fishing_rod",
                "Fishing Rod",
                "Patience, weaponized.",
                0.8,
                StatBonuses::default(),
                Skill::Fishing,
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_specific_fields_present() {
        let templates = default_item_templates();
        for t in templates.iter() {
            match t.kind {
                ItemKind::Weapon => assert!(t.weapon.is_some(), "{}", t.base_id),
                ItemKind::Tool => assert!(t.tool.is_some(), "{}", t.base_id),
                ItemKind::Armor => {
                    assert!(t.weapon.is_none() && t.tool.is_none(), "{}", t.base_id)
                }
            }
        }
    }

    #[test]
    fn test_find_and_by_kind() {
        let templates = default_item_templates();
        assert!(templates.find("sword").is_some());
        assert!(templates.find("banana").is_none());
        assert_eq!(templates.by_kind(ItemKind::Tool).len(), 3);
    }

    #[test]
    fn test_stat_scaling_rounds() {
        let stats = StatBonuses { attack: 7, strength: 8, defense: 0, ranged: 0, magic: 0 };
        let scaled = stats.scaled(1.5);
        assert_eq!(scaled.attack, 11); // 10.5 rounds up
        assert_eq!(scaled.strength, 12);
        assert_eq!(scaled.defense, 0); // absent stats stay zero
    }
}
