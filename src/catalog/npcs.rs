//! NPC base templates
//!
//! NPCs are non-hostile service providers. The dialogue type selects which
//! dialogue graph the generator synthesizes for them.

use serde::{Deserialize, Serialize};

use super::mobs::Faction;

/// Which canned dialogue graph an NPC gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogueType {
    Shop,
    Bank,
    Quest,
    Generic,
}

/// Services an NPC offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NpcService {
    Shop,
    Banking,
    Quests,
}

/// A base NPC template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcTemplate {
    pub base_id: String,
    pub base_name: String,
    pub description: String,
    /// Always "neutral"; NPCs are never attackable
    pub category: String,
    pub faction: Faction,
    pub services: Vec<NpcService>,
    pub dialogue_type: DialogueType,
}

/// Collection of NPC templates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NpcTemplates {
    pub templates: Vec<NpcTemplate>,
}

impl NpcTemplates {
    /// Find a template by base id
    pub fn find(&self, base_id: &str) -> Option<&NpcTemplate> {
        self.templates.iter().find(|t| t.base_id == base_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NpcTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

fn npc(
    base_id: &str,
    base_name: &str,
    description: &str,
    services: Vec<NpcService>,
    dialogue_type: DialogueType,
) -> NpcTemplate {
    NpcTemplate {
        base_id: base_id.to_string(),
        base_name: base_name.to_string(),
        description: description.to_string(),
        category: "neutral".to_string(),
        faction: Faction::Villager,
        services,
        dialogue_type,
    }
}

/// Create the built-in NPC template table
pub fn default_npc_templates() -> NpcTemplates {
    NpcTemplates {
        templates: vec![
            npc(
                "shopkeeper",
                "Shopkeeper",
                "Sells general goods from behind a worn counter.",
                vec![NpcService::Shop],
                DialogueType::Shop,
            ),
            npc(
                "banker",
                "Banker",
                "Keeps your valuables safer than you would.",
                vec![NpcService::Banking],
                DialogueType::Bank,
            ),
            npc(
                "quest_giver",
                "Quest Giver",
                "Always has a problem only an adventurer can solve.",
                vec![NpcService::Quests],
                DialogueType::Quest,
            ),
            npc(
                "villager",
                "Villager",
                "Happy to chat about the weather.",
                vec![],
                DialogueType::Generic,
            ),
        ],
    }
}
