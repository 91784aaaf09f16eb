//! Content generation
//!
//! Single-entity creators (items, mobs, NPCs), composite expansion, bulk
//! orchestration, cloning with modifications, and the template-detection
//! heuristic. Everything here is pure over an immutable
//! [`Catalog`](crate::catalog::Catalog): the same inputs always produce
//! the same outputs.

pub mod bulk;
pub mod bundle;
pub mod clone;
pub mod detect;
pub mod item;
pub mod mob;
pub mod npc;

pub use bulk::{
    create_all_for_material, create_all_mobs_for_tier, create_material_variants, create_mob_pack,
    create_tier_set, BulkOperationResult, BulkSummary, CancelToken, Phase, Progress,
};
pub use bundle::{apply_asset_bundle, apply_mob_pack, apply_tier_set, BundleResult, BundleSummary};
pub use clone::{batch_update_field, clone_with_modifications, AssetRecord, FieldPath, Modifications};
pub use detect::{detect_item_kind, find_matching_template};
pub use item::{create_item, create_item_from_template, GeneratedItem, Requirements};
pub use mob::{create_mob, create_mob_from_template, DropEntry, GeneratedMob};
pub use npc::{
    build_dialogue, create_npc_from_template, DialogueNode, DialogueResponse, DialogueTree,
    GeneratedNpc,
};
