//! Heuristic template detection
//!
//! Classifies an arbitrary asset record into weapon/armor/tool and finds
//! the closest base template, so existing one-off items can be expanded
//! into material variants. Best-effort by design: an explicit kind field
//! wins, then type-string matching, then keyword matching over the name
//! and description, then a fixed per-category fallback. A mis-detection is
//! an accepted limitation of the heuristic, not a bug.

use crate::catalog::{Catalog, ItemKind, ItemTemplate};
use crate::generate::clone::AssetRecord;

const WEAPON_KEYWORDS: &[&str] =
    &["sword", "scimitar", "dagger", "mace", "battleaxe", "blade", "axe", "weapon"];
const ARMOR_KEYWORDS: &[&str] =
    &["helm", "body", "plate", "chain", "shield", "legs", "armor", "armour"];
const TOOL_KEYWORDS: &[&str] =
    &["pickaxe", "hatchet", "rod", "pick", "tool"];

/// Fallback template per category when nothing else matches
fn fallback_id(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Weapon => "sword",
        ItemKind::Armor => "chainbody",
        ItemKind::Tool => "pickaxe",
    }
}

fn kind_from_str(s: &str) -> Option<ItemKind> {
    let s = s.to_ascii_lowercase();
    if s.contains("weapon") {
        Some(ItemKind::Weapon)
    } else if s.contains("armor") || s.contains("armour") {
        Some(ItemKind::Armor)
    } else if s.contains("tool") {
        Some(ItemKind::Tool)
    } else {
        None
    }
}

fn kind_from_keywords(text: &str) -> Option<ItemKind> {
    let text = text.to_ascii_lowercase();
    // Tools before armor: "pickaxe" would otherwise trip the weapon "axe".
    if TOOL_KEYWORDS.iter().any(|k| text.contains(k)) {
        return Some(ItemKind::Tool);
    }
    if ARMOR_KEYWORDS.iter().any(|k| text.contains(k)) {
        return Some(ItemKind::Armor);
    }
    if WEAPON_KEYWORDS.iter().any(|k| text.contains(k)) {
        return Some(ItemKind::Weapon);
    }
    None
}

/// Detect the item kind of a record. Defaults to Weapon when no signal
/// exists at all.
pub fn detect_item_kind(record: &AssetRecord) -> ItemKind {
    match record {
        AssetRecord::Item(item) => item.kind,
        // Mobs and NPCs carry no item kind; the weapon default applies.
        AssetRecord::Mob(_) | AssetRecord::Npc(_) => ItemKind::Weapon,
        AssetRecord::External(map) => {
            if let Some(kind) = map
                .get("kind")
                .or_else(|| map.get("type"))
                .and_then(|v| v.as_str())
                .and_then(kind_from_str)
            {
                return kind;
            }
            let name = map.get("name").and_then(|v| v.as_str()).unwrap_or("");
            let description = map.get("description").and_then(|v| v.as_str()).unwrap_or("");
            kind_from_keywords(&format!("{} {}", name, description)).unwrap_or(ItemKind::Weapon)
        }
    }
}

/// Find the base template that best matches a record.
///
/// Prefers a template whose base id appears in the record's id or name,
/// then the fixed default for the detected kind, then any template of that
/// kind, then any template at all. `None` only when the catalog's item
/// table is empty; loaded catalogs may lack the built-in defaults.
pub fn find_matching_template<'a>(
    catalog: &'a Catalog,
    record: &AssetRecord,
) -> Option<&'a ItemTemplate> {
    let kind = detect_item_kind(record);

    let haystack = format!(
        "{} {}",
        record.id().unwrap_or(""),
        record.name().unwrap_or("")
    )
    .to_ascii_lowercase();

    let candidates = catalog.items().by_kind(kind);
    if let Some(template) = candidates.iter().find(|t| haystack.contains(&t.base_id)) {
        return Some(*template);
    }

    catalog
        .item_template(fallback_id(kind))
        .or_else(|| candidates.first().copied())
        .or_else(|| catalog.items().iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn external(fields: &[(&str, &str)]) -> AssetRecord {
        let mut map = Map::new();
        for (k, v) in fields {
            map.insert(k.to_string(), json!(v));
        }
        AssetRecord::External(map)
    }

    #[test]
    fn test_explicit_kind_field_wins() {
        let record = external(&[("type", "armor"), ("name", "Ceremonial Dagger")]);
        // The explicit type beats the weapon-flavored name.
        assert_eq!(detect_item_kind(&record), ItemKind::Armor);
    }

    #[test]
    fn test_keyword_detection() {
        let record = external(&[("name", "Rusty Scimitar")]);
        assert_eq!(detect_item_kind(&record), ItemKind::Weapon);

        let record = external(&[("name", "Old Pickaxe")]);
        assert_eq!(detect_item_kind(&record), ItemKind::Tool);

        let record = external(&[("name", "Dented Kiteshield")]);
        assert_eq!(detect_item_kind(&record), ItemKind::Armor);
    }

    #[test]
    fn test_no_signal_falls_back_to_weapon_sword() {
        let catalog = Catalog::builtin();
        let record = external(&[("name", "Mysterious Trinket")]);
        assert_eq!(detect_item_kind(&record), ItemKind::Weapon);
        assert_eq!(find_matching_template(&catalog, &record).unwrap().base_id, "sword");
    }

    #[test]
    fn test_template_matched_by_name() {
        let catalog = Catalog::builtin();
        let record = external(&[("name", "Ancient Mace of Kings")]);
        assert_eq!(find_matching_template(&catalog, &record).unwrap().base_id, "mace");
    }

    #[test]
    fn test_generated_item_uses_its_own_kind() {
        let catalog = Catalog::builtin();
        let item = crate::generate::item::create_item(&catalog, "platelegs", "steel").unwrap();
        let record = AssetRecord::Item(item);
        assert_eq!(detect_item_kind(&record), ItemKind::Armor);
        assert_eq!(
            find_matching_template(&catalog, &record).unwrap().base_id,
            "platelegs"
        );
    }

    fn custom_catalog(templates: Vec<ItemTemplate>) -> Catalog {
        use crate::catalog::{
            bundles::default_bundle_templates, items::ItemTemplates,
            materials::default_material_tiers, mob_tiers::default_mob_tiers,
            mobs::default_mob_templates, npcs::default_npc_templates,
        };
        Catalog::new(
            default_material_tiers(),
            default_mob_tiers(),
            ItemTemplates { templates },
            default_mob_templates(),
            default_npc_templates(),
            default_bundle_templates(),
        )
    }

    fn glaive_template() -> ItemTemplate {
        use crate::catalog::{
            AttackType, EquipSlot, StatBonuses, WeaponProfile, WeaponType,
        };
        ItemTemplate {
            base_id: "glaive".to_string(),
            base_name: "Glaive".to_string(),
            kind: ItemKind::Weapon,
            equip_slot: EquipSlot::MainHand,
            weight: 2.0,
            description: String::new(),
            base_stats: StatBonuses::default(),
            weapon: Some(WeaponProfile {
                weapon_type: WeaponType::Sword,
                attack_type: AttackType::Slash,
                attack_speed: 4,
                attack_range: 1.0,
                two_handed: false,
            }),
            tool: None,
        }
    }

    #[test]
    fn test_loaded_catalog_without_default_templates_does_not_panic() {
        // A user-edited item table may lack the built-in fallback ids.
        let catalog = custom_catalog(vec![glaive_template()]);
        let record = external(&[("name", "Mysterious Trinket")]);
        let template = find_matching_template(&catalog, &record).unwrap();
        assert_eq!(template.base_id, "glaive");
    }

    #[test]
    fn test_empty_item_table_matches_nothing() {
        let catalog = custom_catalog(Vec::new());
        let record = external(&[("name", "Mysterious Trinket")]);
        assert!(find_matching_template(&catalog, &record).is_none());
    }
}
