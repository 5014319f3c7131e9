use crate::{duplicate_trigger_per_player, CeLock, DuplicateError, DuplicateOptions, TriggerCollection};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("range begin {begin} is past range end {end}")]
    Inverted { begin: usize, end: usize },
    #[error("range begin {begin} is past the last display slot ({total} triggers)")]
    BeginOutOfBounds { begin: usize, total: usize },
    #[error("a target display slot is required for a move")]
    TargetMissing,
    #[error("move target {target} falls inside the selected range")]
    TargetInsideRange { target: usize },
    #[error("range length {len} is not a multiple of the active player count {players}")]
    NotPlayerMultiple { len: usize, players: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BulkError {
    #[error("invalid range: {0}")]
    Range(#[from] RangeError),
    #[error("duplicate failed: {0}")]
    Duplicate(#[from] DuplicateError),
}

/// An inclusive display-slot selection, plus an optional move target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub begin: usize,
    pub end: usize,
    pub target: Option<usize>,
}

impl SelectionRange {
    pub fn new(begin: usize, end: usize) -> Self {
        Self {
            begin,
            end,
            target: None,
        }
    }

    pub fn with_target(begin: usize, end: usize, target: usize) -> Self {
        Self {
            begin,
            end,
            target: Some(target),
        }
    }

    /// Validate against the displayed trigger count and return the
    /// half-open `(begin, end)` storage window. The end is clamped to the
    /// total; an inverted or out-of-bounds begin is rejected.
    pub fn normalize(&self, total: usize) -> Result<(usize, usize), RangeError> {
        if self.begin > self.end {
            return Err(RangeError::Inverted {
                begin: self.begin,
                end: self.end,
            });
        }
        if self.begin >= total {
            return Err(RangeError::BeginOutOfBounds {
                begin: self.begin,
                total,
            });
        }
        Ok((self.begin, (self.end + 1).min(total)))
    }
}

/// Per-player duplication over a display range: every trigger in the range
/// is duplicated as in [`duplicate_trigger_per_player`], and each batch of
/// copies is shown directly after its source. Returns the new trigger ids.
pub fn duplicate_range_per_player(
    collection: &mut TriggerCollection,
    range: SelectionRange,
    options: &DuplicateOptions,
    lock: Option<&CeLock>,
) -> Result<Vec<usize>, BulkError> {
    options.validate()?;
    let (begin, end) = range.normalize(collection.len())?;

    let mut order: Vec<usize> = collection.display_order[..begin].to_vec();
    let selected: Vec<usize> = collection.display_order[begin..end].to_vec();
    let tail: Vec<usize> = collection.display_order[end..].to_vec();

    let mut new_ids = Vec::new();
    for id in selected {
        let created = duplicate_trigger_per_player(collection, id, options, lock)?;
        order.push(id);
        for (_, new_id) in created {
            order.push(new_id);
            new_ids.push(new_id);
        }
    }
    order.extend(tail);
    collection.display_order = order;
    Ok(new_ids)
}

/// Inverse of [`duplicate_range_per_player`]: the range must consist of
/// whole per-player batches (`active_players` items each); within every
/// batch all items after the first are removed. Returns the removal count.
pub fn unduplicate_range(
    collection: &mut TriggerCollection,
    range: SelectionRange,
    active_players: u8,
) -> Result<usize, BulkError> {
    let (begin, end) = range.normalize(collection.len())?;
    let players = usize::from(active_players);
    if players == 0 || (end - begin) % players != 0 {
        return Err(RangeError::NotPlayerMultiple {
            len: end - begin,
            players,
        }
        .into());
    }
    let doomed: Vec<usize> = (begin..end)
        .filter(|slot| (slot - begin) % players != 0)
        .map(|slot| collection.display_order[slot])
        .collect();
    let count = doomed.len();
    collection.remove_triggers(&doomed);
    Ok(count)
}

/// Remove every trigger in the display range. Returns the removal count.
pub fn delete_range(
    collection: &mut TriggerCollection,
    range: SelectionRange,
) -> Result<usize, BulkError> {
    let (begin, end) = range.normalize(collection.len())?;
    let doomed: Vec<usize> = collection.display_order[begin..end].to_vec();
    collection.remove_triggers(&doomed);
    Ok(doomed.len())
}

/// Move the display range so it starts at the target slot. The target must
/// lie outside the selection; moving past the end keeps the survivors'
/// relative order, exactly like dragging the block in a list.
pub fn move_range(
    collection: &mut TriggerCollection,
    range: SelectionRange,
) -> Result<(), BulkError> {
    let (begin, end) = range.normalize(collection.len())?;
    let target = range.target.ok_or(RangeError::TargetMissing)?;
    let target = target.min(collection.len());
    if target >= begin && target <= end {
        return Err(RangeError::TargetInsideRange { target }.into());
    }

    let order = &collection.display_order;
    let new_order = if target < begin {
        [
            &order[..target],
            &order[begin..end],
            &order[target..begin],
            &order[end..],
        ]
        .concat()
    } else {
        [
            &order[..begin],
            &order[end..target],
            &order[begin..end],
            &order[target..],
        ]
        .concat()
    };
    collection.display_order = new_order;
    Ok(())
}
