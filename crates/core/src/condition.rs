use crate::NO_PLAYER;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    #[default]
    None,
    BringObjectToArea,
    BringObjectToObject,
    OwnObjects,
    OwnFewerObjects,
    ObjectsInArea,
    DestroyObject,
    CaptureObject,
    AccumulateAttribute,
    ResearchTechnology,
    Timer,
    ObjectSelected,
    AiSignal,
    PlayerDefeated,
    ObjectHasTarget,
    ObjectVisible,
    ObjectNotVisible,
    ResearchingTech,
    UnitsGarrisoned,
    DifficultyLevel,
    Chance,
    TechnologyState,
    VariableValue,
    ObjectHp,
    DiplomacyState,
    ScriptCall,
    Or,
    And,
    TriggerActive,
}

/// Copyable attributes of a [`Condition`]. The variant tag itself is not a
/// field; which fields carry meaning is decided by [`ConditionKind::fields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionField {
    Quantity,
    Attribute,
    UnitObject,
    NextObject,
    ObjectList,
    SourcePlayer,
    TargetPlayer,
    Technology,
    Timer,
    TriggerId,
    AreaX1,
    AreaY1,
    AreaX2,
    AreaY2,
    ObjectGroup,
    ObjectType,
    ObjectState,
    AiSignal,
    Inverted,
    Variable,
    Variable2,
    Comparison,
    UnitAiAction,
    IncludeChangeableWeaponObjects,
}

impl ConditionKind {
    /// Attribute set of this variant, mirroring the scenario format's
    /// per-type layout. `SourcePlayer`/`TargetPlayer` presence here decides
    /// which variants can be player-remapped at all.
    pub fn fields(self) -> &'static [ConditionField] {
        use ConditionField::*;
        match self {
            Self::None | Self::Or | Self::And | Self::ScriptCall => &[],
            Self::BringObjectToArea => &[UnitObject, AreaX1, AreaY1, AreaX2, AreaY2, Inverted],
            Self::BringObjectToObject => &[UnitObject, NextObject, Inverted],
            Self::OwnObjects => &[
                Quantity,
                ObjectList,
                SourcePlayer,
                ObjectGroup,
                ObjectType,
                IncludeChangeableWeaponObjects,
            ],
            Self::OwnFewerObjects => &[
                Quantity,
                ObjectList,
                SourcePlayer,
                AreaX1,
                AreaY1,
                AreaX2,
                AreaY2,
                ObjectGroup,
                ObjectType,
                IncludeChangeableWeaponObjects,
            ],
            Self::ObjectsInArea => &[
                Quantity,
                ObjectList,
                SourcePlayer,
                AreaX1,
                AreaY1,
                AreaX2,
                AreaY2,
                ObjectGroup,
                ObjectType,
                ObjectState,
                Inverted,
                IncludeChangeableWeaponObjects,
            ],
            Self::DestroyObject => &[UnitObject, Inverted],
            Self::CaptureObject => &[UnitObject, SourcePlayer, Inverted],
            Self::AccumulateAttribute => &[Quantity, Attribute, SourcePlayer, Inverted],
            Self::ResearchTechnology | Self::ResearchingTech => {
                &[SourcePlayer, Technology, Inverted]
            }
            Self::Timer => &[Timer, Inverted],
            Self::ObjectSelected => &[UnitObject, Inverted],
            Self::AiSignal => &[AiSignal, Inverted],
            Self::PlayerDefeated => &[SourcePlayer],
            Self::ObjectHasTarget => &[
                UnitObject, NextObject, ObjectList, ObjectGroup, ObjectType, Inverted,
            ],
            Self::ObjectVisible => &[UnitObject],
            Self::ObjectNotVisible => &[UnitObject],
            Self::UnitsGarrisoned => &[Quantity, UnitObject, Inverted],
            Self::DifficultyLevel => &[Quantity, Inverted],
            Self::Chance => &[Quantity],
            Self::TechnologyState => &[Quantity, SourcePlayer, Technology, Inverted],
            Self::VariableValue => &[Quantity, Inverted, Variable, Comparison],
            Self::ObjectHp => &[Quantity, UnitObject, Inverted, Comparison],
            Self::DiplomacyState => &[Quantity, SourcePlayer, TargetPlayer, Inverted],
            Self::TriggerActive => &[TriggerId],
        }
    }

    /// Whether this variant references another trigger by id.
    pub fn references_trigger(self) -> bool {
        self.fields().contains(&ConditionField::TriggerId)
    }
}

/// One when-clause of a trigger. Flat record carrying the attribute
/// superset of the scenario format; fields outside the variant's attribute
/// set stay at their unset defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Condition {
    pub condition_type: ConditionKind,
    pub quantity: i32,
    pub attribute: i32,
    pub unit_object: i32,
    pub next_object: i32,
    pub object_list: i32,
    pub source_player: i32,
    pub target_player: i32,
    pub technology: i32,
    pub timer: i32,
    pub trigger_id: i32,
    pub area_x1: i32,
    pub area_y1: i32,
    pub area_x2: i32,
    pub area_y2: i32,
    pub object_group: i32,
    pub object_type: i32,
    pub object_state: i32,
    pub ai_signal: i32,
    pub inverted: i32,
    pub variable: i32,
    pub variable2: i32,
    pub comparison: i32,
    pub unit_ai_action: i32,
    pub include_changeable_weapon_objects: i32,
}

impl Default for Condition {
    fn default() -> Self {
        Self {
            condition_type: ConditionKind::None,
            quantity: -1,
            attribute: -1,
            unit_object: -1,
            next_object: -1,
            object_list: -1,
            source_player: NO_PLAYER,
            target_player: NO_PLAYER,
            technology: -1,
            timer: -1,
            trigger_id: -1,
            area_x1: -1,
            area_y1: -1,
            area_x2: -1,
            area_y2: -1,
            object_group: -1,
            object_type: -1,
            object_state: -1,
            ai_signal: -1,
            inverted: -1,
            variable: -1,
            variable2: -1,
            comparison: -1,
            unit_ai_action: -1,
            include_changeable_weapon_objects: -1,
        }
    }
}

impl Condition {
    /// Fresh no-op condition, the factory every copy starts from.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn of_kind(kind: ConditionKind) -> Self {
        Self {
            condition_type: kind,
            ..Self::default()
        }
    }

    /// True when no player field applies; such instances are copied
    /// verbatim and never remapped.
    pub fn player_neutral(&self) -> bool {
        self.source_player == NO_PLAYER && self.target_player == NO_PLAYER
    }

    /// Copy the named attributes from `src`, leaving the rest untouched.
    pub fn copy_fields_from(&mut self, src: &Condition, fields: &[ConditionField]) {
        for field in fields {
            match field {
                ConditionField::Quantity => self.quantity = src.quantity,
                ConditionField::Attribute => self.attribute = src.attribute,
                ConditionField::UnitObject => self.unit_object = src.unit_object,
                ConditionField::NextObject => self.next_object = src.next_object,
                ConditionField::ObjectList => self.object_list = src.object_list,
                ConditionField::SourcePlayer => self.source_player = src.source_player,
                ConditionField::TargetPlayer => self.target_player = src.target_player,
                ConditionField::Technology => self.technology = src.technology,
                ConditionField::Timer => self.timer = src.timer,
                ConditionField::TriggerId => self.trigger_id = src.trigger_id,
                ConditionField::AreaX1 => self.area_x1 = src.area_x1,
                ConditionField::AreaY1 => self.area_y1 = src.area_y1,
                ConditionField::AreaX2 => self.area_x2 = src.area_x2,
                ConditionField::AreaY2 => self.area_y2 = src.area_y2,
                ConditionField::ObjectGroup => self.object_group = src.object_group,
                ConditionField::ObjectType => self.object_type = src.object_type,
                ConditionField::ObjectState => self.object_state = src.object_state,
                ConditionField::AiSignal => self.ai_signal = src.ai_signal,
                ConditionField::Inverted => self.inverted = src.inverted,
                ConditionField::Variable => self.variable = src.variable,
                ConditionField::Variable2 => self.variable2 = src.variable2,
                ConditionField::Comparison => self.comparison = src.comparison,
                ConditionField::UnitAiAction => self.unit_ai_action = src.unit_ai_action,
                ConditionField::IncludeChangeableWeaponObjects => {
                    self.include_changeable_weapon_objects = src.include_changeable_weapon_objects
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_fields_respects_the_variant_table() {
        let mut src = Condition::of_kind(ConditionKind::OwnObjects);
        src.quantity = 4;
        src.source_player = 2;
        src.timer = 99;

        let mut dst = Condition::none();
        dst.condition_type = src.condition_type;
        dst.copy_fields_from(&src, src.condition_type.fields());

        assert_eq!(dst.quantity, 4);
        assert_eq!(dst.source_player, 2);
        // `timer` is not part of OwnObjects and must stay unset.
        assert_eq!(dst.timer, -1);
    }

    #[test]
    fn trigger_reference_detection() {
        assert!(ConditionKind::TriggerActive.references_trigger());
        assert!(!ConditionKind::Timer.references_trigger());
    }
}
