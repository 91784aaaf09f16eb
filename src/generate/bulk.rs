//! Bulk generation orchestration
//!
//! Batch pipelines over the single-entity creators. Every batch reports
//! progress through an optional callback, collects per-unit failures as
//! formatted strings instead of aborting, and returns one uniform result
//! shape. A `CancelToken` stops a batch between units; the partial result
//! is still returned.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::generate::clone::AssetRecord;
use crate::generate::detect::find_matching_template;
use crate::generate::item::{create_item, create_item_from_template, GeneratedItem};
use crate::generate::mob::{create_mob, create_mob_from_template, GeneratedMob};

/// Which stage of a batch a progress event describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Preparing,
    Generating,
    Complete,
}

/// One progress event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub phase: Phase,
    pub current: usize,
    pub total: usize,
    pub current_item: String,
}

/// Progress callback type accepted by every bulk operation
pub type ProgressFn<'a> = &'a mut dyn FnMut(&Progress);

/// Cooperative cancellation flag, checked between units.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Totals for a finished batch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkSummary {
    pub total_created: usize,
    pub items_created: usize,
    pub mobs_created: usize,
    pub materials_used: Vec<String>,
    pub duration: Duration,
}

/// Uniform result of every bulk operation.
///
/// `success` is exactly `errors.is_empty()`; a partially-failed batch can
/// carry both outputs and errors, so callers must inspect both.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BulkOperationResult {
    pub success: bool,
    pub items: Vec<GeneratedItem>,
    pub mobs: Vec<GeneratedMob>,
    pub errors: Vec<String>,
    pub summary: BulkSummary,
}

// The callback borrow is invariant, so it carries its own lifetime instead
// of sharing the catalog's.
struct Batch<'a, 'p> {
    started: Instant,
    catalog: &'a Catalog,
    cancel: &'a CancelToken,
    on_progress: Option<ProgressFn<'p>>,
    items: Vec<GeneratedItem>,
    mobs: Vec<GeneratedMob>,
    errors: Vec<String>,
    materials_used: Vec<String>,
}

impl<'a, 'p> Batch<'a, 'p> {
    fn new(
        catalog: &'a Catalog,
        cancel: &'a CancelToken,
        on_progress: Option<ProgressFn<'p>>,
    ) -> Self {
        Self {
            started: Instant::now(),
            catalog,
            cancel,
            on_progress,
            items: Vec::new(),
            mobs: Vec::new(),
            errors: Vec::new(),
            materials_used: Vec::new(),
        }
    }

    fn report(&mut self, phase: Phase, current: usize, total: usize, current_item: &str) {
        if let Some(f) = self.on_progress.as_mut() {
            f(&Progress { phase, current, total, current_item: current_item.to_string() });
        }
    }

    /// Returns true when the batch should stop; records the cancellation.
    fn cancelled(&mut self, done: usize, total: usize) -> bool {
        if self.cancel.is_cancelled() {
            self.errors.push(format!("cancelled after {}/{} units", done, total));
            true
        } else {
            false
        }
    }

    fn finish(mut self, total: usize) -> BulkOperationResult {
        self.report(Phase::Complete, total, total, "");
        let items_created = self.items.len();
        let mobs_created = self.mobs.len();
        BulkOperationResult {
            success: self.errors.is_empty(),
            items: self.items,
            mobs: self.mobs,
            errors: self.errors,
            summary: BulkSummary {
                total_created: items_created + mobs_created,
                items_created,
                mobs_created,
                materials_used: self.materials_used,
                duration: self.started.elapsed(),
            },
        }
    }
}

/// Expand the template matching an existing record once per material.
///
/// The template is chosen by the best-effort heuristic in
/// [`crate::generate::detect`]; a mis-detected source produces variants of
/// a fallback template rather than failing. Only a catalog with no item
/// templates at all yields an error entry.
pub fn create_material_variants(
    catalog: &Catalog,
    source: &AssetRecord,
    materials: &[&str],
    cancel: &CancelToken,
    on_progress: Option<ProgressFn<'_>>,
) -> BulkOperationResult {
    let mut batch = Batch::new(catalog, cancel, on_progress);
    let Some(template) = find_matching_template(catalog, source).cloned() else {
        batch.errors.push(format!(
            "no item template matches '{}'",
            source.name().or_else(|| source.id()).unwrap_or("<unnamed record>")
        ));
        return batch.finish(0);
    };
    let total = materials.len();
    batch.materials_used = materials.iter().map(|m| m.to_string()).collect();

    batch.report(Phase::Preparing, 0, total, &template.base_id);
    for (i, material) in materials.iter().enumerate() {
        if batch.cancelled(i, total) {
            break;
        }
        let label = format!("{}_{}", material, template.base_id);
        batch.report(Phase::Generating, i + 1, total, &label);
        match create_item_from_template(batch.catalog, &template, material) {
            Ok(item) => batch.items.push(item),
            Err(e) => batch.errors.push(format!("Failed to generate {}: {}", label, e)),
        }
    }
    batch.finish(total)
}

/// Expand every member of a tier set across the requested materials.
pub fn create_tier_set(
    catalog: &Catalog,
    template_id: &str,
    materials: &[&str],
    cancel: &CancelToken,
    on_progress: Option<ProgressFn<'_>>,
) -> BulkOperationResult {
    let mut batch = Batch::new(catalog, cancel, on_progress);

    let Some(set) = catalog.bundles().find_tier_set(template_id) else {
        batch.errors.push(format!("unknown tier set template '{}'", template_id));
        return batch.finish(0);
    };
    let members = set.member_item_ids.clone();
    let total = members.len() * materials.len();
    batch.materials_used = materials.iter().map(|m| m.to_string()).collect();

    batch.report(Phase::Preparing, 0, total, template_id);
    let mut done = 0;
    'outer: for material in materials {
        for base_id in &members {
            if batch.cancelled(done, total) {
                break 'outer;
            }
            done += 1;
            let label = format!("{}_{}", material, base_id);
            batch.report(Phase::Generating, done, total, &label);
            match create_item(batch.catalog, base_id, material) {
                Ok(item) => batch.items.push(item),
                Err(e) => batch.errors.push(format!("Failed to generate {}: {}", label, e)),
            }
        }
    }
    batch.finish(total)
}

/// Expand every member of a mob pack at its declared tier.
pub fn create_mob_pack(
    catalog: &Catalog,
    template_id: &str,
    cancel: &CancelToken,
    on_progress: Option<ProgressFn<'_>>,
) -> BulkOperationResult {
    let mut batch = Batch::new(catalog, cancel, on_progress);

    let Some(pack) = catalog.bundles().find_mob_pack(template_id) else {
        batch.errors.push(format!("unknown mob pack template '{}'", template_id));
        return batch.finish(0);
    };
    let members = pack.members.clone();
    let total = members.len();

    batch.report(Phase::Preparing, 0, total, template_id);
    for (i, member) in members.iter().enumerate() {
        if batch.cancelled(i, total) {
            break;
        }
        let label = format!("{} ({})", member.mob_id, member.tier_id);
        batch.report(Phase::Generating, i + 1, total, &label);
        match create_mob(batch.catalog, &member.mob_id, &member.tier_id) {
            Ok(mob) => batch.mobs.push(mob),
            Err(e) => batch.errors.push(format!("Failed to generate {}: {}", label, e)),
        }
    }
    batch.finish(total)
}

/// Expand every item template in the catalog for one material.
pub fn create_all_for_material(
    catalog: &Catalog,
    material_id: &str,
    cancel: &CancelToken,
    on_progress: Option<ProgressFn<'_>>,
) -> BulkOperationResult {
    let mut batch = Batch::new(catalog, cancel, on_progress);

    if catalog.material(material_id).is_none() {
        batch.errors.push(format!("unknown material tier '{}'", material_id));
        return batch.finish(0);
    }
    let templates: Vec<_> = catalog.items().iter().cloned().collect();
    let total = templates.len();
    batch.materials_used = vec![material_id.to_string()];

    batch.report(Phase::Preparing, 0, total, material_id);
    for (i, template) in templates.iter().enumerate() {
        if batch.cancelled(i, total) {
            break;
        }
        let label = format!("{}_{}", material_id, template.base_id);
        batch.report(Phase::Generating, i + 1, total, &label);
        match create_item_from_template(batch.catalog, template, material_id) {
            Ok(item) => batch.items.push(item),
            Err(e) => batch.errors.push(format!("Failed to generate {}: {}", label, e)),
        }
    }
    batch.finish(total)
}

/// Expand every mob template in the catalog at one tier.
pub fn create_all_mobs_for_tier(
    catalog: &Catalog,
    tier_id: &str,
    cancel: &CancelToken,
    on_progress: Option<ProgressFn<'_>>,
) -> BulkOperationResult {
    let mut batch = Batch::new(catalog, cancel, on_progress);

    if catalog.mob_tier(tier_id).is_none() {
        batch.errors.push(format!("unknown mob tier '{}'", tier_id));
        return batch.finish(0);
    }
    let templates: Vec<_> = catalog.mobs().iter().cloned().collect();
    let total = templates.len();

    batch.report(Phase::Preparing, 0, total, tier_id);
    for (i, template) in templates.iter().enumerate() {
        if batch.cancelled(i, total) {
            break;
        }
        let label = format!("{} ({})", template.base_id, tier_id);
        batch.report(Phase::Generating, i + 1, total, &label);
        match create_mob_from_template(batch.catalog, template, tier_id) {
            Ok(mob) => batch.mobs.push(mob),
            Err(e) => batch.errors.push(format!("Failed to generate {}: {}", label, e)),
        }
    }
    batch.finish(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_cancel() -> CancelToken {
        CancelToken::new()
    }

    #[test]
    fn test_tier_set_counts_and_summary() {
        let catalog = Catalog::builtin();
        let result =
            create_tier_set(&catalog, "melee_starter", &["bronze", "steel"], &no_cancel(), None);
        assert!(result.success);
        assert_eq!(result.items.len(), 6);
        assert_eq!(result.summary.items_created, 6);
        assert_eq!(result.summary.total_created, 6);
        assert_eq!(result.summary.materials_used, vec!["bronze", "steel"]);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_progress_phases_in_order() {
        let catalog = Catalog::builtin();
        let mut events: Vec<Progress> = Vec::new();
        let mut record = |p: &Progress| events.push(p.clone());
        let result = create_tier_set(
            &catalog,
            "gatherer_set",
            &["iron"],
            &no_cancel(),
            Some(&mut record),
        );
        assert!(result.success);
        assert_eq!(events.first().unwrap().phase, Phase::Preparing);
        assert_eq!(events.last().unwrap().phase, Phase::Complete);
        let generating: Vec<_> =
            events.iter().filter(|p| p.phase == Phase::Generating).collect();
        assert_eq!(generating.len(), 3);
        assert_eq!(generating[0].current, 1);
        assert_eq!(generating[2].current, 3);
        assert!(generating.iter().all(|p| p.total == 3));
        assert!(!generating[0].current_item.is_empty());
    }

    #[test]
    fn test_one_failing_unit_leaves_partial_result() {
        let catalog = Catalog::builtin();
        let source = AssetRecord::Item(create_item(&catalog, "sword", "bronze").unwrap());
        let result = create_material_variants(
            &catalog,
            &source,
            &["bronze", "unobtainium", "steel"],
            &no_cancel(),
            None,
        );
        assert!(!result.success);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("unobtainium"));
    }

    #[test]
    fn test_unknown_composite_is_one_error() {
        let catalog = Catalog::builtin();
        let result = create_tier_set(&catalog, "no_such_set", &["bronze"], &no_cancel(), None);
        assert!(!result.success);
        assert!(result.items.is_empty());
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_cancellation_stops_batch() {
        let catalog = Catalog::builtin();
        let cancel = CancelToken::new();
        cancel.cancel();
        let result = create_all_for_material(&catalog, "rune", &cancel, None);
        assert!(!result.success);
        assert!(result.items.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("cancelled"));
    }

    #[test]
    fn test_all_mobs_for_tier() {
        let catalog = Catalog::builtin();
        let result = create_all_mobs_for_tier(&catalog, "boss", &no_cancel(), None);
        assert!(result.success);
        assert_eq!(result.mobs.len(), catalog.mobs().len());
        assert!(result.mobs.iter().all(|m| m.name.ends_with("Chieftain")));
        assert_eq!(result.summary.mobs_created, result.mobs.len());
    }

    #[test]
    fn test_all_for_material_covers_catalog() {
        let catalog = Catalog::builtin();
        let result = create_all_for_material(&catalog, "dragon", &no_cancel(), None);
        assert!(result.success);
        assert_eq!(result.items.len(), catalog.items().len());
        assert!(result.items.iter().all(|i| i.id.starts_with("dragon_")));
    }

    #[test]
    fn test_variants_with_empty_item_table_is_error_not_panic() {
        use crate::catalog::{
            bundles::default_bundle_templates, items::ItemTemplates,
            materials::default_material_tiers, mob_tiers::default_mob_tiers,
            mobs::default_mob_templates, npcs::default_npc_templates,
        };
        let catalog = Catalog::new(
            default_material_tiers(),
            default_mob_tiers(),
            ItemTemplates::default(),
            default_mob_templates(),
            default_npc_templates(),
            default_bundle_templates(),
        );
        let mut map = serde_json::Map::new();
        map.insert("name".to_string(), serde_json::json!("Mysterious Trinket"));
        let source = AssetRecord::External(map);

        let result =
            create_material_variants(&catalog, &source, &["bronze"], &no_cancel(), None);
        assert!(!result.success);
        assert!(result.items.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("Mysterious Trinket"));
    }

    #[test]
    fn test_mob_pack_bulk() {
        let catalog = Catalog::builtin();
        let result = create_mob_pack(&catalog, "wolf_pack", &no_cancel(), None);
        assert!(result.success);
        assert_eq!(result.mobs.len(), 3);
        assert_eq!(result.summary.items_created, 0);
    }
}
