//! NPC expansion and dialogue synthesis
//!
//! Each dialogue type produces a small fixed graph: a greeting node with
//! one to three response branches and a terminal farewell node. Response
//! effects ("openStore", "openBank", "openQuests") are contract tags for an
//! external dialogue-effect dispatcher; nothing here resolves them.

use serde::{Deserialize, Serialize};

use crate::catalog::{DialogueType, Faction, NpcService, NpcTemplate};
use crate::generate::item::model_path;

/// A player response branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueResponse {
    pub text: String,
    /// Next node id, if the conversation continues
    pub next: Option<String>,
    /// Contract tag dispatched externally
    pub effect: Option<String>,
}

/// A single dialogue node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueNode {
    pub id: String,
    pub text: String,
    pub responses: Vec<DialogueResponse>,
}

/// A synthesized dialogue graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueTree {
    pub nodes: Vec<DialogueNode>,
}

impl DialogueTree {
    pub fn find(&self, id: &str) -> Option<&DialogueNode> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// A concrete NPC produced from a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedNpc {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub faction: Faction,
    pub services: Vec<NpcService>,
    /// Always false
    pub attackable: bool,
    /// Always "stationary"
    pub movement_type: String,
    /// Always 0
    pub move_speed: f32,
    pub dialogue: DialogueTree,
    pub model_path: String,
}

/// Expand an NPC template. Infallible: the template carries everything.
pub fn create_npc_from_template(template: &NpcTemplate) -> GeneratedNpc {
    GeneratedNpc {
        id: template.base_id.clone(),
        name: template.base_name.clone(),
        description: template.description.clone(),
        category: template.category.clone(),
        faction: template.faction,
        services: template.services.clone(),
        attackable: false,
        movement_type: "stationary".to_string(),
        move_speed: 0.0,
        dialogue: build_dialogue(template.dialogue_type, &template.base_name),
        model_path: model_path(&template.base_id),
    }
}

fn response(text: &str, next: Option<&str>, effect: Option<&str>) -> DialogueResponse {
    DialogueResponse {
        text: text.to_string(),
        next: next.map(str::to_string),
        effect: effect.map(str::to_string),
    }
}

fn node(id: &str, text: &str, responses: Vec<DialogueResponse>) -> DialogueNode {
    DialogueNode { id: id.to_string(), text: text.to_string(), responses }
}

/// Synthesize the fixed dialogue graph for a dialogue type
pub fn build_dialogue(dialogue_type: DialogueType, npc_name: &str) -> DialogueTree {
    let farewell = node("farewell", "Safe travels.", vec![]);

    let greeting = match dialogue_type {
        DialogueType::Shop => node(
            "greeting",
            "Welcome! Care to browse my wares?",
            vec![
                response("Let me see what you have.", Some("farewell"), Some("openStore")),
                response("Just passing through.", Some("farewell"), None),
            ],
        ),
        DialogueType::Bank => node(
            "greeting",
            "Good day. Would you like to access your vault?",
            vec![
                response("Open my bank, please.", Some("farewell"), Some("openBank")),
                response("Not right now.", Some("farewell"), None),
            ],
        ),
        DialogueType::Quest => node(
            "greeting",
            "You look capable. I may have work for you.",
            vec![
                response("What do you need done?", Some("farewell"), Some("openQuests")),
                response("I'm busy at the moment.", Some("farewell"), None),
            ],
        ),
        DialogueType::Generic => node(
            "greeting",
            &format!("Hello there. {} at your service.", npc_name),
            vec![
                response("Lovely weather, isn't it?", Some("farewell"), None),
                response("Goodbye.", Some("farewell"), None),
            ],
        ),
    };

    DialogueTree { nodes: vec![greeting, farewell] }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_npc_is_stationary_and_unattackable() {
        let catalog = Catalog::builtin();
        for template in catalog.npcs().iter() {
            let npc = create_npc_from_template(template);
            assert!(!npc.attackable, "{}", npc.id);
            assert_eq!(npc.movement_type, "stationary");
            assert_eq!(npc.move_speed, 0.0);
        }
    }

    #[test]
    fn test_dialogue_effect_tags() {
        let catalog = Catalog::builtin();
        let effect_of = |id: &str| {
            let npc = create_npc_from_template(catalog.npc_template(id).unwrap());
            npc.dialogue
                .find("greeting")
                .unwrap()
                .responses
                .iter()
                .find_map(|r| r.effect.clone())
        };
        assert_eq!(effect_of("shopkeeper").as_deref(), Some("openStore"));
        assert_eq!(effect_of("banker").as_deref(), Some("openBank"));
        assert_eq!(effect_of("quest_giver").as_deref(), Some("openQuests"));
        assert_eq!(effect_of("villager"), None);
    }

    #[test]
    fn test_dialogue_graph_shape() {
        // Greeting with branches, plus a terminal farewell with none.
        let tree = build_dialogue(DialogueType::Shop, "Shopkeeper");
        let greeting = tree.find("greeting").unwrap();
        assert!(!greeting.responses.is_empty() && greeting.responses.len() <= 3);
        let farewell = tree.find("farewell").unwrap();
        assert!(farewell.responses.is_empty());
        // Every branch points at a node that exists.
        for r in &greeting.responses {
            let next = r.next.as_deref().unwrap();
            assert!(tree.find(next).is_some());
        }
    }
}
