use crate::{Condition, ConditionKind, Effect, EffectKind};
use serde::{Deserialize, Serialize};

/// A named rule: ordered when-clauses (conditions) and then-clauses
/// (effects), each with a display-order permutation kept separately from
/// storage order. Storage slots are stable identities; display slots are
/// what an editor shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Trigger {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub looping: bool,
    pub conditions: Vec<Condition>,
    pub effects: Vec<Effect>,
    pub condition_order: Vec<usize>,
    pub effect_order: Vec<usize>,
}

impl Default for Trigger {
    fn default() -> Self {
        Self {
            id: -1,
            name: String::new(),
            description: String::new(),
            enabled: true,
            looping: false,
            conditions: Vec::new(),
            effects: Vec::new(),
            condition_order: Vec::new(),
            effect_order: Vec::new(),
        }
    }
}

impl Trigger {
    pub fn new(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a fresh no-op condition of `kind`; returns it for filling in.
    pub fn add_condition(&mut self, kind: ConditionKind) -> &mut Condition {
        self.condition_order.push(self.conditions.len());
        self.conditions.push(Condition::of_kind(kind));
        self.conditions.last_mut().expect("just pushed")
    }

    /// Append a fresh no-op effect of `kind`; returns it for filling in.
    pub fn add_effect(&mut self, kind: EffectKind) -> &mut Effect {
        self.effect_order.push(self.effects.len());
        self.effects.push(Effect::of_kind(kind));
        self.effects.last_mut().expect("just pushed")
    }

    /// Remove the condition at storage `slot`. Display entries above the
    /// slot shift down; the removed entry disappears from the display order.
    /// Panics on an out-of-range slot, which is a caller bug.
    pub fn remove_condition(&mut self, slot: usize) {
        self.conditions.remove(slot);
        compact_order(&mut self.condition_order, slot);
    }

    /// Effect counterpart of [`Trigger::remove_condition`].
    pub fn remove_effect(&mut self, slot: usize) {
        self.effects.remove(slot);
        compact_order(&mut self.effect_order, slot);
    }

    /// Rewrite storage order to match display order and reset both
    /// permutations to identity.
    pub fn commit_display_order(&mut self) {
        self.conditions = self
            .condition_order
            .iter()
            .map(|&slot| self.conditions[slot].clone())
            .collect();
        self.condition_order = (0..self.conditions.len()).collect();

        self.effects = self
            .effect_order
            .iter()
            .map(|&slot| self.effects[slot].clone())
            .collect();
        self.effect_order = (0..self.effects.len()).collect();
    }

    /// Swap the condition at `display_slot` with the one shown above it.
    /// Returns false when already at the top or out of range.
    pub fn move_condition_up(&mut self, display_slot: usize) -> bool {
        swap_up(&mut self.condition_order, display_slot)
    }

    pub fn move_condition_down(&mut self, display_slot: usize) -> bool {
        swap_down(&mut self.condition_order, display_slot)
    }

    pub fn move_effect_up(&mut self, display_slot: usize) -> bool {
        swap_up(&mut self.effect_order, display_slot)
    }

    pub fn move_effect_down(&mut self, display_slot: usize) -> bool {
        swap_down(&mut self.effect_order, display_slot)
    }

    /// Condition variant tags in storage order, the shape compared by the
    /// de-duplication similarity check.
    pub fn condition_tags(&self) -> Vec<ConditionKind> {
        self.conditions.iter().map(|c| c.condition_type).collect()
    }

    /// Effect counterpart of [`Trigger::condition_tags`].
    pub fn effect_tags(&self) -> Vec<EffectKind> {
        self.effects.iter().map(|e| e.effect_type).collect()
    }
}

fn compact_order(order: &mut Vec<usize>, removed_slot: usize) {
    order.retain(|&slot| slot != removed_slot);
    for slot in order.iter_mut() {
        if *slot > removed_slot {
            *slot -= 1;
        }
    }
}

fn swap_up(order: &mut [usize], display_slot: usize) -> bool {
    if display_slot == 0 || display_slot >= order.len() {
        return false;
    }
    order.swap(display_slot - 1, display_slot);
    true
}

fn swap_down(order: &mut [usize], display_slot: usize) -> bool {
    if display_slot + 1 >= order.len() {
        return false;
    }
    order.swap(display_slot, display_slot + 1);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trigger_with_three_conditions() -> Trigger {
        let mut trigger = Trigger::new(0, "test");
        trigger.add_condition(ConditionKind::Timer);
        trigger.add_condition(ConditionKind::Chance);
        trigger.add_condition(ConditionKind::OwnObjects);
        trigger
    }

    #[test]
    fn add_extends_order_with_identity() {
        let trigger = trigger_with_three_conditions();
        assert_eq!(trigger.condition_order, vec![0, 1, 2]);
    }

    #[test]
    fn remove_compacts_the_display_order() {
        let mut trigger = trigger_with_three_conditions();
        trigger.remove_condition(1);
        assert_eq!(trigger.conditions.len(), 2);
        assert_eq!(trigger.condition_order, vec![0, 1]);
        assert_eq!(trigger.conditions[1].condition_type, ConditionKind::OwnObjects);
    }

    #[test]
    fn commit_display_order_reorders_storage() {
        let mut trigger = trigger_with_three_conditions();
        trigger.move_condition_up(2);
        assert_eq!(trigger.condition_order, vec![0, 2, 1]);

        trigger.commit_display_order();
        assert_eq!(trigger.condition_order, vec![0, 1, 2]);
        assert_eq!(
            trigger.condition_tags(),
            vec![
                ConditionKind::Timer,
                ConditionKind::OwnObjects,
                ConditionKind::Chance,
            ]
        );
    }

    #[test]
    fn effect_moves_swap_adjacent_display_entries() {
        let mut trigger = Trigger::new(0, "test");
        trigger.add_effect(EffectKind::SendChat);
        trigger.add_effect(EffectKind::ClearTimer);
        trigger.add_effect(EffectKind::ActivateTrigger);

        assert!(trigger.move_effect_down(0));
        assert_eq!(trigger.effect_order, vec![1, 0, 2]);
        assert!(trigger.move_effect_up(2));
        assert_eq!(trigger.effect_order, vec![1, 2, 0]);
        // Storage order never moves, only the display permutation.
        assert_eq!(
            trigger.effect_tags(),
            vec![
                EffectKind::SendChat,
                EffectKind::ClearTimer,
                EffectKind::ActivateTrigger,
            ]
        );
    }

    #[test]
    fn moves_at_the_boundary_are_rejected() {
        let mut trigger = trigger_with_three_conditions();
        assert!(!trigger.move_condition_up(0));
        assert!(!trigger.move_condition_down(2));
        assert!(!trigger.move_effect_up(0));
        assert!(!trigger.move_effect_down(0));

        trigger.add_effect(EffectKind::SendChat);
        trigger.add_effect(EffectKind::ClearTimer);
        assert!(!trigger.move_effect_down(1));
        assert_eq!(trigger.effect_order, vec![0, 1]);
    }
}
