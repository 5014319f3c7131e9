use crate::Trigger;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The owning trigger list of an editing session. Storage index doubles as
/// the trigger id (and as the target of `trigger_id` references);
/// `display_order` is the permutation an editor presents. The collection is
/// passed explicitly into every operation that needs it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TriggerCollection {
    pub triggers: Vec<Trigger>,
    pub display_order: Vec<usize>,
}

impl TriggerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.triggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triggers.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&Trigger> {
        self.triggers.get(id)
    }

    pub fn get_mut(&mut self, id: usize) -> Option<&mut Trigger> {
        self.triggers.get_mut(id)
    }

    /// Trigger shown at `display_slot`, if any.
    pub fn get_displayed(&self, display_slot: usize) -> Option<&Trigger> {
        let id = *self.display_order.get(display_slot)?;
        self.triggers.get(id)
    }

    /// Append a new empty trigger; its id is its storage index and it is
    /// shown last.
    pub fn add_trigger(&mut self, name: impl Into<String>) -> &mut Trigger {
        let id = self.triggers.len();
        self.display_order.push(id);
        self.triggers.push(Trigger::new(id as i32, name));
        self.triggers.last_mut().expect("just pushed")
    }

    /// Deep-copy `id` into a fresh trigger appended to storage and display
    /// order. Returns the new id.
    pub fn copy_trigger(&mut self, id: usize) -> Option<usize> {
        let mut copy = self.triggers.get(id)?.clone();
        let new_id = self.triggers.len();
        copy.id = new_id as i32;
        self.display_order.push(new_id);
        self.triggers.push(copy);
        Some(new_id)
    }

    /// Move the most recently appended display entry to sit directly after
    /// `display_slot` (the "insert new trigger here" gesture).
    pub fn insert_display_after(&mut self, display_slot: usize) {
        if let Some(id) = self.display_order.pop() {
            let at = (display_slot + 1).min(self.display_order.len());
            self.display_order.insert(at, id);
        }
    }

    pub fn remove_trigger(&mut self, id: usize) {
        self.remove_triggers(&[id]);
    }

    /// Remove a set of triggers. Survivors are renumbered to their new
    /// storage indices, the display order follows, and every `trigger_id`
    /// reference in surviving conditions/effects is remapped; references to
    /// removed triggers become `-1`.
    pub fn remove_triggers(&mut self, ids: &[usize]) {
        if ids.is_empty() {
            return;
        }
        let mut remap: HashMap<usize, usize> = HashMap::new();
        let mut kept = 0usize;
        for id in 0..self.triggers.len() {
            if !ids.contains(&id) {
                remap.insert(id, kept);
                kept += 1;
            }
        }

        let mut survivors = Vec::with_capacity(kept);
        for (id, trigger) in self.triggers.drain(..).enumerate() {
            if remap.contains_key(&id) {
                survivors.push(trigger);
            }
        }
        self.triggers = survivors;

        self.display_order = self
            .display_order
            .iter()
            .filter_map(|id| remap.get(id).copied())
            .collect();

        for (new_id, trigger) in self.triggers.iter_mut().enumerate() {
            trigger.id = new_id as i32;
        }
        self.remap_references(&remap);
    }

    /// Rewrite storage order to match the display order, renumbering ids
    /// and remapping references; display order becomes the identity.
    pub fn commit_display_order(&mut self) {
        let remap: HashMap<usize, usize> = self
            .display_order
            .iter()
            .enumerate()
            .map(|(new_id, &old_id)| (old_id, new_id))
            .collect();

        let mut reordered: Vec<Trigger> = self
            .display_order
            .iter()
            .map(|&id| self.triggers[id].clone())
            .collect();
        for (new_id, trigger) in reordered.iter_mut().enumerate() {
            trigger.id = new_id as i32;
        }
        self.triggers = reordered;
        self.display_order = (0..self.triggers.len()).collect();
        self.remap_references(&remap);
    }

    /// Swap the trigger at `display_slot` with the one shown above it.
    pub fn move_display_up(&mut self, display_slot: usize) -> bool {
        if display_slot == 0 || display_slot >= self.display_order.len() {
            return false;
        }
        self.display_order.swap(display_slot - 1, display_slot);
        true
    }

    pub fn move_display_down(&mut self, display_slot: usize) -> bool {
        if display_slot + 1 >= self.display_order.len() {
            return false;
        }
        self.display_order.swap(display_slot, display_slot + 1);
        true
    }

    /// True when `display_order` is a permutation of the storage indices.
    pub fn display_order_consistent(&self) -> bool {
        if self.display_order.len() != self.triggers.len() {
            return false;
        }
        let mut seen = vec![false; self.triggers.len()];
        for &id in &self.display_order {
            match seen.get_mut(id) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        true
    }

    fn remap_references(&mut self, remap: &HashMap<usize, usize>) {
        let map = |reference: i32| -> i32 {
            if reference < 0 {
                return reference;
            }
            match remap.get(&(reference as usize)) {
                Some(&new_id) => new_id as i32,
                None => -1,
            }
        };
        for trigger in &mut self.triggers {
            for condition in &mut trigger.conditions {
                if condition.condition_type.references_trigger() {
                    condition.trigger_id = map(condition.trigger_id);
                }
            }
            for effect in &mut trigger.effects {
                if effect.effect_type.references_trigger() {
                    effect.trigger_id = map(effect.trigger_id);
                }
            }
        }
    }
}
