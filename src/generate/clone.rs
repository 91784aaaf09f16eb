//! Cloning with modifications and batch field updates
//!
//! `AssetRecord` is the tagged union the clone tooling works over: the
//! three concrete generated kinds stay fully typed, and only records that
//! arrived from outside the generator travel as a key-value bag.
//!
//! Field paths are parsed into explicit segments and matched against known
//! typed fields; blind string indexing only happens on `External` records.

use serde_json::{Map, Value};

use crate::catalog::Rarity;
use crate::error::FieldPathError;
use crate::generate::item::GeneratedItem;
use crate::generate::mob::GeneratedMob;
use crate::generate::npc::GeneratedNpc;

/// Any record the clone/batch tooling can operate on
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "record", rename_all = "snake_case")]
pub enum AssetRecord {
    Item(GeneratedItem),
    Mob(GeneratedMob),
    Npc(GeneratedNpc),
    /// A record not produced by this generator; loosely typed by necessity
    External(Map<String, Value>),
}

impl AssetRecord {
    pub fn id(&self) -> Option<&str> {
        match self {
            AssetRecord::Item(i) => Some(&i.id),
            AssetRecord::Mob(m) => Some(&m.id),
            AssetRecord::Npc(n) => Some(&n.id),
            AssetRecord::External(map) => map.get("id").and_then(Value::as_str),
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            AssetRecord::Item(i) => Some(&i.name),
            AssetRecord::Mob(m) => Some(&m.name),
            AssetRecord::Npc(n) => Some(&n.name),
            AssetRecord::External(map) => map.get("name").and_then(Value::as_str),
        }
    }
}

/// Optional transforms applied by [`clone_with_modifications`], in the
/// order the fields are declared. Custom fields merge last so they can
/// override anything computed by the earlier steps.
#[derive(Debug, Clone, Default)]
pub struct Modifications {
    pub id_prefix: Option<String>,
    pub id_suffix: Option<String>,
    pub name_prefix: Option<String>,
    pub name_suffix: Option<String>,
    pub description_append: Option<String>,
    pub value_multiplier: Option<f64>,
    pub bonus_multiplier: Option<f64>,
    pub level_offset: Option<i32>,
    pub rarity_override: Option<Rarity>,
    /// Substring replacement applied to model/icon paths
    pub path_replace: Option<(String, String)>,
    /// Applied last via field paths; dotted keys are allowed
    pub custom_fields: Option<Map<String, Value>>,
}

/// Deep-copy a record and apply the modification pipeline in order.
/// The original record is never touched.
pub fn clone_with_modifications(asset: &AssetRecord, mods: &Modifications) -> AssetRecord {
    let mut out = asset.clone();

    if let Some(prefix) = &mods.id_prefix {
        edit_string(&mut out, TextField::Id, |id| format!("{}_{}", prefix, id));
    }
    if let Some(suffix) = &mods.id_suffix {
        edit_string(&mut out, TextField::Id, |id| format!("{}_{}", id, suffix));
    }
    if let Some(prefix) = &mods.name_prefix {
        edit_string(&mut out, TextField::Name, |name| format!("{} {}", prefix, name));
    }
    if let Some(suffix) = &mods.name_suffix {
        edit_string(&mut out, TextField::Name, |name| format!("{} {}", name, suffix));
    }
    if let Some(append) = &mods.description_append {
        edit_string(&mut out, TextField::Description, |desc| {
            if desc.is_empty() {
                append.clone()
            } else {
                format!("{} {}", desc, append)
            }
        });
    }
    if let Some(mult) = mods.value_multiplier {
        apply_value_multiplier(&mut out, mult);
    }
    if let Some(mult) = mods.bonus_multiplier {
        apply_bonus_multiplier(&mut out, mult);
    }
    if let Some(offset) = mods.level_offset {
        apply_level_offset(&mut out, offset);
    }
    if let Some(rarity) = mods.rarity_override {
        apply_rarity(&mut out, rarity);
    }
    if let Some((from, to)) = &mods.path_replace {
        apply_path_replace(&mut out, from, to);
    }
    if let Some(fields) = &mods.custom_fields {
        for (key, value) in fields {
            match FieldPath::parse(key) {
                Ok(path) => {
                    if let Err(e) = set_field(&mut out, &path, value) {
                        log::warn!("Skipping custom field '{}': {}", key, e);
                    }
                }
                Err(e) => log::warn!("Skipping custom field '{}': {}", key, e),
            }
        }
    }

    out
}

/// The text fields the string transforms may touch
#[derive(Debug, Clone, Copy)]
enum TextField {
    Id,
    Name,
    Description,
}

impl TextField {
    fn key(self) -> &'static str {
        match self {
            TextField::Id => "id",
            TextField::Name => "name",
            TextField::Description => "description",
        }
    }
}

fn edit_string(record: &mut AssetRecord, field: TextField, f: impl FnOnce(&str) -> String) {
    match record {
        AssetRecord::Item(i) => {
            let target = match field {
                TextField::Id => &mut i.id,
                TextField::Name => &mut i.name,
                TextField::Description => &mut i.description,
            };
            *target = f(target);
        }
        AssetRecord::Mob(m) => {
            let target = match field {
                TextField::Id => &mut m.id,
                TextField::Name => &mut m.name,
                TextField::Description => &mut m.description,
            };
            *target = f(target);
        }
        AssetRecord::Npc(n) => {
            let target = match field {
                TextField::Id => &mut n.id,
                TextField::Name => &mut n.name,
                TextField::Description => &mut n.description,
            };
            *target = f(target);
        }
        AssetRecord::External(map) => {
            if let Some(Value::String(s)) = map.get_mut(field.key()) {
                *s = f(s);
            }
        }
    }
}

fn apply_value_multiplier(record: &mut AssetRecord, mult: f64) {
    match record {
        AssetRecord::Item(i) => i.value = (i.value as f64 * mult).round() as i64,
        AssetRecord::External(map) => {
            if let Some(slot) = map.get_mut("value") {
                if let Some(n) = slot.as_f64() {
                    *slot = Value::from((n * mult).round() as i64);
                }
            }
        }
        // Mobs and NPCs carry no gold value.
        _ => {}
    }
}

fn apply_bonus_multiplier(record: &mut AssetRecord, mult: f64) {
    match record {
        AssetRecord::Item(i) => i.bonuses = i.bonuses.scaled(mult),
        AssetRecord::Mob(m) => {
            let scale = |v: i32| (v as f64 * mult).round() as i32;
            m.stats.attack = scale(m.stats.attack);
            m.stats.strength = scale(m.stats.strength);
            m.stats.defense = scale(m.stats.defense);
        }
        AssetRecord::External(map) => {
            if let Some(Value::Object(bonuses)) = map.get_mut("bonuses") {
                for (_, v) in bonuses.iter_mut() {
                    if let Some(n) = v.as_f64() {
                        *v = Value::from((n * mult).round() as i64);
                    }
                }
            }
        }
        AssetRecord::Npc(_) => {}
    }
}

fn apply_level_offset(record: &mut AssetRecord, offset: i32) {
    let bump = |level: u32| -> u32 { (level as i64 + offset as i64).max(1) as u32 };
    match record {
        AssetRecord::Item(i) => i.requirements.level = bump(i.requirements.level),
        AssetRecord::Mob(m) => m.stats.level = bump(m.stats.level),
        AssetRecord::External(map) => {
            if let Some(v) = map.get_mut("level") {
                if let Some(n) = v.as_i64() {
                    *v = Value::from((n + offset as i64).max(1));
                }
            }
        }
        AssetRecord::Npc(_) => {}
    }
}

fn apply_rarity(record: &mut AssetRecord, rarity: Rarity) {
    match record {
        AssetRecord::Item(i) => i.rarity = rarity,
        AssetRecord::External(map) => {
            map.insert("rarity".to_string(), Value::from(rarity.name()));
        }
        _ => {}
    }
}

fn apply_path_replace(record: &mut AssetRecord, from: &str, to: &str) {
    let swap = |s: &mut String| {
        if s.contains(from) {
            *s = s.replace(from, to);
        }
    };
    match record {
        AssetRecord::Item(i) => {
            swap(&mut i.model_path);
            swap(&mut i.icon_path);
            if let Some(p) = &mut i.equipped_model_path {
                swap(p);
            }
        }
        AssetRecord::Mob(m) => swap(&mut m.model_path),
        AssetRecord::Npc(n) => swap(&mut n.model_path),
        AssetRecord::External(map) => {
            for key in ["model_path", "icon_path", "equipped_model_path"] {
                if let Some(Value::String(s)) = map.get_mut(key) {
                    swap(s);
                }
            }
        }
    }
}

/// A parsed dot path. No array-index syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    pub fn parse(path: &str) -> Result<Self, FieldPathError> {
        if path.is_empty() {
            return Err(FieldPathError::Empty);
        }
        if path.contains('[') || path.contains(']') {
            return Err(FieldPathError::IndexSyntax(path.to_string()));
        }
        let segments: Vec<String> = path.split('.').map(str::to_string).collect();
        if segments.iter().any(String::is_empty) {
            return Err(FieldPathError::EmptySegment(path.to_string()));
        }
        Ok(Self { raw: path.to_string(), segments })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    fn unknown(&self) -> FieldPathError {
        FieldPathError::UnknownPath(self.raw.clone())
    }

    fn mismatch(&self, expected: &'static str) -> FieldPathError {
        FieldPathError::TypeMismatch { path: self.raw.clone(), expected }
    }
}

/// Write `value` at `path` inside a single record.
pub fn set_field(
    record: &mut AssetRecord,
    path: &FieldPath,
    value: &Value,
) -> Result<(), FieldPathError> {
    let segs: Vec<&str> = path.segments.iter().map(String::as_str).collect();
    match record {
        AssetRecord::Item(item) => set_item_field(item, path, &segs, value),
        AssetRecord::Mob(mob) => set_mob_field(mob, path, &segs, value),
        AssetRecord::Npc(npc) => set_npc_field(npc, path, &segs, value),
        AssetRecord::External(map) => {
            set_external_field(map, &segs, value);
            Ok(())
        }
    }
}

fn as_string(path: &FieldPath, value: &Value) -> Result<String, FieldPathError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| path.mismatch("a string"))
}

fn as_i32(path: &FieldPath, value: &Value) -> Result<i32, FieldPathError> {
    value
        .as_f64()
        .map(|n| n.round() as i32)
        .ok_or_else(|| path.mismatch("a number"))
}

fn as_u32(path: &FieldPath, value: &Value) -> Result<u32, FieldPathError> {
    value
        .as_f64()
        .filter(|n| *n >= 0.0)
        .map(|n| n.round() as u32)
        .ok_or_else(|| path.mismatch("a non-negative number"))
}

fn as_f32(path: &FieldPath, value: &Value) -> Result<f32, FieldPathError> {
    value.as_f64().map(|n| n as f32).ok_or_else(|| path.mismatch("a number"))
}

fn set_item_field(
    item: &mut GeneratedItem,
    path: &FieldPath,
    segs: &[&str],
    value: &Value,
) -> Result<(), FieldPathError> {
    match segs {
        ["id"] => item.id = as_string(path, value)?,
        ["name"] => item.name = as_string(path, value)?,
        ["description"] => item.description = as_string(path, value)?,
        ["model_path"] => item.model_path = as_string(path, value)?,
        ["icon_path"] => item.icon_path = as_string(path, value)?,
        ["value"] => {
            item.value = value
                .as_f64()
                .map(|n| n.round() as i64)
                .ok_or_else(|| path.mismatch("a number"))?
        }
        ["weight"] => item.weight = as_f32(path, value)?,
        ["rarity"] => {
            let name = as_string(path, value)?;
            item.rarity =
                Rarity::from_name(&name).ok_or_else(|| path.mismatch("a rarity name"))?;
        }
        ["bonuses", stat] => {
            let n = as_i32(path, value)?;
            let slot = item.bonuses.get_mut(stat).ok_or_else(|| path.unknown())?;
            *slot = n;
        }
        ["requirements", "level"] => item.requirements.level = as_u32(path, value)?,
        _ => return Err(path.unknown()),
    }
    Ok(())
}

fn set_mob_field(
    mob: &mut GeneratedMob,
    path: &FieldPath,
    segs: &[&str],
    value: &Value,
) -> Result<(), FieldPathError> {
    match segs {
        ["id"] => mob.id = as_string(path, value)?,
        ["name"] => mob.name = as_string(path, value)?,
        ["description"] => mob.description = as_string(path, value)?,
        ["model_path"] => mob.model_path = as_string(path, value)?,
        ["scale"] => mob.scale = as_f32(path, value)?,
        ["stats", "level"] => mob.stats.level = as_u32(path, value)?,
        ["stats", "health"] => mob.stats.health = as_i32(path, value)?,
        ["stats", "attack"] => mob.stats.attack = as_i32(path, value)?,
        ["stats", "strength"] => mob.stats.strength = as_i32(path, value)?,
        ["stats", "defense"] => mob.stats.defense = as_i32(path, value)?,
        ["combat", "attack_speed_ticks"] => mob.combat.attack_speed_ticks = as_u32(path, value)?,
        ["combat", "respawn_ticks"] => mob.combat.respawn_ticks = as_u32(path, value)?,
        ["combat", "combat_range"] => mob.combat.combat_range = as_f32(path, value)?,
        ["combat", "aggro_range"] => mob.combat.aggro_range = as_f32(path, value)?,
        _ => return Err(path.unknown()),
    }
    Ok(())
}

fn set_npc_field(
    npc: &mut GeneratedNpc,
    path: &FieldPath,
    segs: &[&str],
    value: &Value,
) -> Result<(), FieldPathError> {
    match segs {
        ["id"] => npc.id = as_string(path, value)?,
        ["name"] => npc.name = as_string(path, value)?,
        ["description"] => npc.description = as_string(path, value)?,
        ["model_path"] => npc.model_path = as_string(path, value)?,
        _ => return Err(path.unknown()),
    }
    Ok(())
}

/// Left-to-right traversal over an external record, creating intermediate
/// objects where absent.
fn set_external_field(map: &mut Map<String, Value>, segs: &[&str], value: &Value) {
    let (last, parents) = segs.split_last().expect("parse rejects empty paths");
    let mut current = map;
    for seg in parents {
        let entry = current
            .entry(seg.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        current = entry.as_object_mut().expect("just ensured object");
    }
    current.insert(last.to_string(), value.clone());
}

/// Apply one `(path, value)` write across many assets, returning the
/// modified clones. Parse failures reject the whole batch; a record the
/// path does not apply to is logged and passed through unchanged.
pub fn batch_update_field(
    assets: &[AssetRecord],
    path: &str,
    value: &Value,
) -> Result<Vec<AssetRecord>, FieldPathError> {
    let parsed = FieldPath::parse(path)?;
    let mut out = Vec::with_capacity(assets.len());
    for asset in assets {
        let mut clone = asset.clone();
        if let Err(e) = set_field(&mut clone, &parsed, value) {
            log::warn!(
                "Field '{}' not applied to '{}': {}",
                path,
                asset.id().unwrap_or("<no id>"),
                e
            );
        }
        out.push(clone);
    }
    Ok(out)
}
