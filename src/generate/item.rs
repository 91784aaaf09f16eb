//! Item expansion
//!
//! Turns a `(template, material)` pair into a fully-populated item record.
//! Pure and deterministic: identical inputs always produce identical output.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    Catalog, EquipSlot, ItemKind, ItemTemplate, MaterialTier, Rarity, Skill, StatBonuses,
    ToolProfile, WeaponProfile,
};
use crate::error::GenerateError;

/// Level and skill requirements on a generated item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    pub level: u32,
    pub skills: BTreeMap<Skill, u32>,
}

/// A concrete item produced from a template and a material tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedItem {
    /// "{material}_{base_id}", lowercase
    pub id: String,
    /// "{Material} {Base Name}"
    pub name: String,
    pub kind: ItemKind,
    pub equip_slot: EquipSlot,
    pub weight: f32,
    pub description: String,
    /// Rounded base value × material value multiplier
    pub value: i64,
    /// Determined entirely by the material
    pub rarity: Rarity,
    pub bonuses: StatBonuses,
    pub requirements: Requirements,
    pub model_path: String,
    pub icon_path: String,
    /// Weapons only: model aligned to the hand bone
    pub equipped_model_path: Option<String>,
    pub weapon: Option<WeaponProfile>,
    pub tool: Option<ToolProfile>,
}

/// Deterministic model path for a slug
pub fn model_path(slug: &str) -> String {
    format!("asset://models/{slug}/{slug}.glb")
}

/// Deterministic icon path for a slug
pub fn icon_path(slug: &str) -> String {
    format!("asset://icons/{slug}.png")
}

/// Insert "-aligned" before the extension of a model path
fn aligned_path(path: &str) -> String {
    match path.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem}-aligned.{ext}"),
        None => format!("{path}-aligned"),
    }
}

/// Expand a template with a material tier into a concrete item.
///
/// Unknown material ids are a hard error here; bulk callers downgrade it.
pub fn create_item_from_template(
    catalog: &Catalog,
    template: &ItemTemplate,
    material_id: &str,
) -> Result<GeneratedItem, GenerateError> {
    let tier = catalog
        .material(material_id)
        .ok_or_else(|| GenerateError::UnknownMaterial(material_id.to_string()))?;
    Ok(expand_item(template, tier))
}

/// Convenience lookup by template id
pub fn create_item(
    catalog: &Catalog,
    base_id: &str,
    material_id: &str,
) -> Result<GeneratedItem, GenerateError> {
    let template = catalog
        .item_template(base_id)
        .ok_or_else(|| GenerateError::UnknownItemTemplate(base_id.to_string()))?;
    create_item_from_template(catalog, template, material_id)
}

fn expand_item(template: &ItemTemplate, tier: &MaterialTier) -> GeneratedItem {
    let slug = format!("{}_{}", tier.id, template.base_id).to_lowercase();
    let name = format!("{} {}", tier.name, template.base_name);
    let value = (template.kind.base_value() * tier.value_multiplier).round() as i64;

    let mut skills = BTreeMap::new();
    let required_skill = match template.kind {
        ItemKind::Weapon => Skill::Attack,
        ItemKind::Armor => Skill::Defense,
        ItemKind::Tool => template.tool.map(|t| t.skill).unwrap_or(Skill::Attack),
    };
    skills.insert(required_skill, tier.level);

    let model = model_path(&slug);
    let equipped_model_path = match template.kind {
        ItemKind::Weapon => Some(aligned_path(&model)),
        _ => None,
    };

    GeneratedItem {
        id: slug.clone(),
        name,
        kind: template.kind,
        equip_slot: template.equip_slot,
        weight: template.weight,
        description: template.description.clone(),
        value,
        rarity: tier.rarity,
        bonuses: template.base_stats.scaled(tier.stat_multiplier),
        requirements: Requirements { level: tier.level, skills },
        icon_path: icon_path(&slug),
        model_path: model,
        equipped_model_path,
        weapon: template.weapon,
        tool: template.tool,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dragon_sword_identity() {
        let catalog = Catalog::builtin();
        let item = create_item(&catalog, "sword", "dragon").unwrap();
        assert_eq!(item.id, "dragon_sword");
        assert_eq!(item.name, "Dragon Sword");
        assert_eq!(item.rarity, Rarity::Legendary);
    }

    #[test]
    fn test_requirement_level_tracks_material() {
        let catalog = Catalog::builtin();
        for tier in catalog.materials().iter() {
            let item = create_item(&catalog, "sword", &tier.id).unwrap();
            assert_eq!(item.requirements.level, tier.level, "{}", tier.id);
            assert_eq!(item.requirements.skills.get(&Skill::Attack), Some(&tier.level));
        }
    }

    #[test]
    fn test_value_and_stats_strictly_increase() {
        let catalog = Catalog::builtin();
        let items: Vec<_> = catalog
            .materials()
            .iter()
            .map(|t| create_item(&catalog, "sword", &t.id).unwrap())
            .collect();
        for pair in items.windows(2) {
            assert!(pair[0].value < pair[1].value);
            assert!(pair[0].bonuses.attack < pair[1].bonuses.attack);
        }
    }

    #[test]
    fn test_per_kind_base_value() {
        let catalog = Catalog::builtin();
        // Bronze has value multiplier 1.0, so values equal the per-kind bases.
        assert_eq!(create_item(&catalog, "sword", "bronze").unwrap().value, 100);
        assert_eq!(create_item(&catalog, "chainbody", "bronze").unwrap().value, 150);
        assert_eq!(create_item(&catalog, "pickaxe", "bronze").unwrap().value, 50);
    }

    #[test]
    fn test_skill_requirement_per_kind() {
        let catalog = Catalog::builtin();
        let armor = create_item(&catalog, "chainbody", "iron").unwrap();
        assert_eq!(armor.requirements.skills.get(&Skill::Defense), Some(&10));
        let tool = create_item(&catalog, "pickaxe", "iron").unwrap();
        assert_eq!(tool.requirements.skills.get(&Skill::Mining), Some(&10));
    }

    #[test]
    fn test_paths() {
        let catalog = Catalog::builtin();
        let item = create_item(&catalog, "sword", "rune").unwrap();
        assert_eq!(item.model_path, "asset://models/rune_sword/rune_sword.glb");
        assert_eq!(item.icon_path, "asset://icons/rune_sword.png");
        assert_eq!(
            item.equipped_model_path.as_deref(),
            Some("asset://models/rune_sword/rune_sword-aligned.glb")
        );

        let armor = create_item(&catalog, "chainbody", "rune").unwrap();
        assert!(armor.equipped_model_path.is_none());
    }

    #[test]
    fn test_unknown_material_is_hard_error() {
        let catalog = Catalog::builtin();
        let err = create_item(&catalog, "sword", "plastic").unwrap_err();
        assert_eq!(err, GenerateError::UnknownMaterial("plastic".to_string()));
    }

    #[test]
    fn test_idempotent() {
        let catalog = Catalog::builtin();
        let a = create_item(&catalog, "mace", "adamant").unwrap();
        let b = create_item(&catalog, "mace", "adamant").unwrap();
        assert_eq!(a, b);
    }
}
