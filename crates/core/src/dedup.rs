use crate::{Trigger, TriggerCollection};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DedupError {
    #[error("a run of {needed} items is required, only {available} remain")]
    InsufficientSiblings { needed: usize, available: usize },
    #[error("items in the run differ structurally; pass force to delete anyway")]
    SimilarityMismatch,
}

/// Loose structural similarity: the ordered condition and effect variant
/// tags match across all listed triggers. Field values are deliberately not
/// compared; mismatching payloads behind matching tags are accepted, and
/// the deletion path offers a confirm override instead.
pub fn triggers_similar(collection: &TriggerCollection, ids: &[usize]) -> bool {
    let Some((&first, rest)) = ids.split_first() else {
        return true;
    };
    let Some(reference) = collection.get(first) else {
        return false;
    };
    let condition_tags = reference.condition_tags();
    let effect_tags = reference.effect_tags();
    rest.iter().all(|&id| {
        collection.get(id).is_some_and(|trigger| {
            trigger.condition_tags() == condition_tags && trigger.effect_tags() == effect_tags
        })
    })
}

/// Tag-only similarity for a set of condition storage slots.
pub fn conditions_similar(trigger: &Trigger, slots: &[usize]) -> bool {
    let Some((&first, rest)) = slots.split_first() else {
        return true;
    };
    let Some(reference) = trigger.conditions.get(first) else {
        return false;
    };
    rest.iter().all(|&slot| {
        trigger
            .conditions
            .get(slot)
            .is_some_and(|condition| condition.condition_type == reference.condition_type)
    })
}

/// Tag-only similarity for a set of effect storage slots.
pub fn effects_similar(trigger: &Trigger, slots: &[usize]) -> bool {
    let Some((&first, rest)) = slots.split_first() else {
        return true;
    };
    let Some(reference) = trigger.effects.get(first) else {
        return false;
    };
    rest.iter().all(|&slot| {
        trigger
            .effects
            .get(slot)
            .is_some_and(|effect| effect.effect_type == reference.effect_type)
    })
}

/// Collapse a per-player run of triggers back to its reference item.
///
/// The run is the `active_players` consecutive display slots starting at
/// `display_slot`; everything after the first is removed. A short run
/// aborts before touching anything; a similarity mismatch aborts unless
/// `force` is set (the caller is expected to confirm and retry). Returns
/// the number of triggers removed.
pub fn unduplicate_trigger_run(
    collection: &mut TriggerCollection,
    display_slot: usize,
    active_players: u8,
    force: bool,
) -> Result<usize, DedupError> {
    let needed = usize::from(active_players);
    if needed <= 1 {
        return Ok(0);
    }
    let available = collection.len().saturating_sub(display_slot);
    if needed > available {
        return Err(DedupError::InsufficientSiblings { needed, available });
    }
    let run: Vec<usize> = collection.display_order[display_slot..display_slot + needed].to_vec();
    if !force && !triggers_similar(collection, &run) {
        return Err(DedupError::SimilarityMismatch);
    }
    collection.remove_triggers(&run[1..]);
    Ok(needed - 1)
}

/// Condition counterpart of [`unduplicate_trigger_run`], collapsing a run
/// inside a single trigger's display order.
pub fn unduplicate_condition_run(
    trigger: &mut Trigger,
    display_slot: usize,
    active_players: u8,
    force: bool,
) -> Result<usize, DedupError> {
    let needed = usize::from(active_players);
    if needed <= 1 {
        return Ok(0);
    }
    let available = trigger.conditions.len().saturating_sub(display_slot);
    if needed > available {
        return Err(DedupError::InsufficientSiblings { needed, available });
    }
    let run: Vec<usize> = trigger.condition_order[display_slot..display_slot + needed].to_vec();
    if !force && !conditions_similar(trigger, &run) {
        return Err(DedupError::SimilarityMismatch);
    }
    let mut doomed: Vec<usize> = run[1..].to_vec();
    doomed.sort_unstable_by(|a, b| b.cmp(a));
    for slot in doomed {
        trigger.remove_condition(slot);
    }
    Ok(needed - 1)
}

/// Effect counterpart of [`unduplicate_condition_run`].
pub fn unduplicate_effect_run(
    trigger: &mut Trigger,
    display_slot: usize,
    active_players: u8,
    force: bool,
) -> Result<usize, DedupError> {
    let needed = usize::from(active_players);
    if needed <= 1 {
        return Ok(0);
    }
    let available = trigger.effects.len().saturating_sub(display_slot);
    if needed > available {
        return Err(DedupError::InsufficientSiblings { needed, available });
    }
    let run: Vec<usize> = trigger.effect_order[display_slot..display_slot + needed].to_vec();
    if !force && !effects_similar(trigger, &run) {
        return Err(DedupError::SimilarityMismatch);
    }
    let mut doomed: Vec<usize> = run[1..].to_vec();
    doomed.sort_unstable_by(|a, b| b.cmp(a));
    for slot in doomed {
        trigger.remove_effect(slot);
    }
    Ok(needed - 1)
}
