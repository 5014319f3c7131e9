use crate::{
    default_copy_players, Condition, ConditionKind, Effect, EffectKind, Trigger,
    TriggerCollection, GAIA,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marker appended to a source trigger's description when "mark originals"
/// is active.
pub const ORIGINAL_MARK: &str = "<Original>";
/// Marker appended to every produced copy's description under the same
/// policy. A trigger already carrying it is never duplicated again.
pub const COPY_MARK: &str = "<Copy>";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DuplicateError {
    #[error("neither source nor target player fields are included")]
    NoPlayerFieldsIncluded,
    #[error("no trigger with id {0}")]
    UnknownTrigger(usize),
    #[error("no condition at slot {0}")]
    UnknownConditionSlot(usize),
    #[error("no effect at slot {0}")]
    UnknownEffectSlot(usize),
}

/// The options bundle every duplication operation takes explicitly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DuplicateOptions {
    /// The player the source material was authored for; never receives a
    /// copy of its own.
    pub reference_player: i32,
    /// Allow `source_player` fields to be rewritten.
    pub include_source: bool,
    /// Allow `target_player` fields to be rewritten.
    pub include_target: bool,
    /// Only rewrite fields currently equal to the reference player.
    pub change_from_reference_only: bool,
    /// Add Gaia to the target set when no explicit player list is given.
    pub include_gaia: bool,
    /// Explicit target players; `None` means every addressable slot.
    pub players: Option<Vec<i32>>,
    /// Appended to copy names, `{0}` replaced by the player number.
    pub name_suffix_format: String,
    /// Appended instead of the numeric suffix for Gaia copies.
    pub gaia_suffix: String,
    /// Tag descriptions with [`ORIGINAL_MARK`]/[`COPY_MARK`].
    pub mark_originals: bool,
}

impl Default for DuplicateOptions {
    fn default() -> Self {
        Self {
            reference_player: 1,
            include_source: true,
            include_target: true,
            change_from_reference_only: true,
            include_gaia: false,
            players: None,
            name_suffix_format: "(p{0})".to_string(),
            gaia_suffix: "(GAIA)".to_string(),
            mark_originals: false,
        }
    }
}

impl DuplicateOptions {
    /// Disabling both field gates makes the whole operation meaningless;
    /// callers are rejected before anything is created.
    pub fn validate(&self) -> Result<(), DuplicateError> {
        if !self.include_source && !self.include_target {
            return Err(DuplicateError::NoPlayerFieldsIncluded);
        }
        Ok(())
    }

    /// The resolved target list: explicit players, or every addressable
    /// slot, with Gaia appended on request.
    pub fn target_players(&self) -> Vec<i32> {
        let mut players = match &self.players {
            Some(players) => players.clone(),
            None => default_copy_players(),
        };
        if self.include_gaia && !players.contains(&GAIA) {
            players.push(GAIA);
        }
        players
    }

    pub fn name_suffix(&self, player: i32) -> String {
        if player == GAIA {
            self.gaia_suffix.clone()
        } else {
            self.name_suffix_format.replace("{0}", &player.to_string())
        }
    }
}

/// Lock policy excluding condition/effect slots from player rewriting.
/// Locked slots are still copied, just never remapped.
#[derive(Debug, Clone, Default)]
pub struct CeLock {
    pub lock_conditions: bool,
    pub lock_effects: bool,
    pub condition_kinds: Vec<ConditionKind>,
    pub effect_kinds: Vec<EffectKind>,
    pub condition_slots: Vec<usize>,
    pub effect_slots: Vec<usize>,
}

impl CeLock {
    pub fn condition_locked(&self, slot: usize, kind: ConditionKind) -> bool {
        self.lock_conditions
            || self.condition_kinds.contains(&kind)
            || self.condition_slots.contains(&slot)
    }

    pub fn effect_locked(&self, slot: usize, kind: EffectKind) -> bool {
        self.lock_effects
            || self.effect_kinds.contains(&kind)
            || self.effect_slots.contains(&slot)
    }
}

/// Alterable-slot locator, predicate form: the seam future lock policies
/// plug into. Returns the storage slots whose player fields the copiers may
/// rewrite. Pure query.
pub fn alterable_slots_where<C, E>(
    trigger: &Trigger,
    mut condition_eligible: C,
    mut effect_eligible: E,
) -> (Vec<usize>, Vec<usize>)
where
    C: FnMut(usize, &Condition) -> bool,
    E: FnMut(usize, &Effect) -> bool,
{
    let conditions = trigger
        .conditions
        .iter()
        .enumerate()
        .filter(|(slot, condition)| condition_eligible(*slot, condition))
        .map(|(slot, _)| slot)
        .collect();
    let effects = trigger
        .effects
        .iter()
        .enumerate()
        .filter(|(slot, effect)| effect_eligible(*slot, effect))
        .map(|(slot, _)| slot)
        .collect();
    (conditions, effects)
}

/// Struct-policy entry point; with no lock every slot is eligible.
pub fn alterable_slots(trigger: &Trigger, lock: Option<&CeLock>) -> (Vec<usize>, Vec<usize>) {
    match lock {
        None => alterable_slots_where(trigger, |_, _| true, |_, _| true),
        Some(lock) => alterable_slots_where(
            trigger,
            |slot, condition| !lock.condition_locked(slot, condition.condition_type),
            |slot, effect| !lock.effect_locked(slot, effect.effect_type),
        ),
    }
}

/// Produce one remapped copy of the trigger per target player.
///
/// Validation happens before anything is created. The reference player is
/// skipped; each copy gets a fresh id at the end of storage and display
/// order, the per-player name suffix, and its eligible player fields
/// rewritten. Returns `(player, new trigger id)` pairs in target order.
pub fn duplicate_trigger_per_player(
    collection: &mut TriggerCollection,
    trigger_id: usize,
    options: &DuplicateOptions,
    lock: Option<&CeLock>,
) -> Result<Vec<(i32, usize)>, DuplicateError> {
    options.validate()?;
    let source = collection
        .get_mut(trigger_id)
        .ok_or(DuplicateError::UnknownTrigger(trigger_id))?;

    if options.mark_originals {
        if source.description.ends_with(COPY_MARK) {
            return Ok(Vec::new());
        }
        // Strip before copying so copies never inherit the marker.
        if let Some(stripped) = source.description.strip_suffix(ORIGINAL_MARK) {
            source.description = stripped.to_string();
        }
    }

    let (condition_slots, effect_slots) = alterable_slots(source, lock);

    let mut created = Vec::new();
    for player in options.target_players() {
        if player == options.reference_player {
            continue;
        }
        let new_id = match collection.copy_trigger(trigger_id) {
            Some(id) => id,
            None => return Err(DuplicateError::UnknownTrigger(trigger_id)),
        };
        if let Some(copy) = collection.get_mut(new_id) {
            copy.name = format!("{} {}", copy.name, options.name_suffix(player));
            for &slot in &condition_slots {
                if let Some(condition) = copy.conditions.get_mut(slot) {
                    if condition.player_neutral() {
                        continue;
                    }
                    remap_player_fields(
                        &mut condition.source_player,
                        &mut condition.target_player,
                        options,
                        player,
                    );
                }
            }
            for &slot in &effect_slots {
                if let Some(effect) = copy.effects.get_mut(slot) {
                    if effect.player_neutral() {
                        continue;
                    }
                    remap_player_fields(
                        &mut effect.source_player,
                        &mut effect.target_player,
                        options,
                        player,
                    );
                }
            }
            if options.mark_originals {
                copy.description.push_str(COPY_MARK);
            }
        }
        created.push((player, new_id));
    }

    if options.mark_originals {
        if let Some(source) = collection.get_mut(trigger_id) {
            if !source.description.ends_with(ORIGINAL_MARK) {
                source.description.push_str(ORIGINAL_MARK);
            }
        }
    }
    Ok(created)
}

/// Single-condition counterpart of [`duplicate_trigger_per_player`]: copies
/// are appended to the owning trigger itself. Returns `(player, new storage
/// slot)` pairs.
pub fn duplicate_condition_per_player(
    trigger: &mut Trigger,
    slot: usize,
    options: &DuplicateOptions,
) -> Result<Vec<(i32, usize)>, DuplicateError> {
    options.validate()?;
    let src = trigger
        .conditions
        .get(slot)
        .cloned()
        .ok_or(DuplicateError::UnknownConditionSlot(slot))?;

    let mut created = Vec::new();
    for player in options.target_players() {
        if player == options.reference_player {
            continue;
        }
        let new_slot = trigger.conditions.len();
        let copy = trigger.add_condition(src.condition_type);
        copy.copy_fields_from(&src, src.condition_type.fields());
        if !copy.player_neutral() {
            remap_player_fields(
                &mut copy.source_player,
                &mut copy.target_player,
                options,
                player,
            );
        }
        created.push((player, new_slot));
    }
    Ok(created)
}

/// Single-effect counterpart of [`duplicate_condition_per_player`].
pub fn duplicate_effect_per_player(
    trigger: &mut Trigger,
    slot: usize,
    options: &DuplicateOptions,
) -> Result<Vec<(i32, usize)>, DuplicateError> {
    options.validate()?;
    let src = trigger
        .effects
        .get(slot)
        .cloned()
        .ok_or(DuplicateError::UnknownEffectSlot(slot))?;

    let mut created = Vec::new();
    for player in options.target_players() {
        if player == options.reference_player {
            continue;
        }
        let new_slot = trigger.effects.len();
        let copy = trigger.add_effect(src.effect_type);
        copy.copy_fields_from(&src, src.effect_type.fields());
        if !copy.player_neutral() {
            remap_player_fields(
                &mut copy.source_player,
                &mut copy.target_player,
                options,
                player,
            );
        }
        created.push((player, new_slot));
    }
    Ok(created)
}

/// The rewrite rule shared by every copier. Callers skip player-neutral
/// instances (see `player_neutral`) before reaching this.
fn remap_player_fields(
    source_player: &mut i32,
    target_player: &mut i32,
    options: &DuplicateOptions,
    player: i32,
) {
    if options.include_source
        && (!options.change_from_reference_only || *source_player == options.reference_player)
    {
        *source_player = player;
    }
    if options.include_target
        && (!options.change_from_reference_only || *target_player == options.reference_player)
    {
        *target_player = player;
    }
}
