use crate::NO_PLAYER;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum EffectKind {
    #[default]
    None,
    ChangeDiplomacy,
    ResearchTechnology,
    SendChat,
    PlaySound,
    Tribute,
    UnlockGate,
    LockGate,
    ActivateTrigger,
    DeactivateTrigger,
    AiScriptGoal,
    CreateObject,
    TaskObject,
    DeclareVictory,
    KillObject,
    RemoveObject,
    ChangeView,
    Unload,
    ChangeOwnership,
    Patrol,
    DisplayInstructions,
    ClearInstructions,
    FreezeObject,
    DamageObject,
    PlaceFoundation,
    ChangeObjectName,
    ChangeObjectHp,
    StopObject,
    AttackMove,
    HealObject,
    TeleportObject,
    ChangeObjectStance,
    DisplayTimer,
    EnableDisableObject,
    EnableDisableTechnology,
    SetPlayerVisibility,
    ReplaceObject,
    ChangePlayerName,
    ModifyAttribute,
    ModifyResource,
    ScriptCall,
    ChangeVariable,
    ClearTimer,
}

/// Copyable attributes of an [`Effect`]; see [`EffectKind::fields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectField {
    AiScriptGoal,
    Quantity,
    TributeList,
    Diplomacy,
    ObjectListUnitId,
    ObjectListUnitId2,
    SourcePlayer,
    TargetPlayer,
    Technology,
    DisplayTime,
    TriggerId,
    LocationX,
    LocationY,
    LocationObjectReference,
    AreaX1,
    AreaY1,
    AreaX2,
    AreaY2,
    ObjectGroup,
    ObjectType,
    ObjectState,
    InstructionPanelPosition,
    AttackStance,
    TimeUnit,
    Enabled,
    FlashObject,
    ForceResearchTechnology,
    VisibilityState,
    Scroll,
    Operation,
    ObjectAttributes,
    Variable,
    Timer,
    ResetTimer,
    Facet,
    ActionType,
    SelectedObjectIds,
    Message,
    SoundName,
}

impl EffectKind {
    pub fn fields(self) -> &'static [EffectField] {
        use EffectField::*;
        match self {
            Self::None => &[],
            Self::ChangeDiplomacy => &[Diplomacy, SourcePlayer, TargetPlayer],
            Self::ResearchTechnology => &[SourcePlayer, Technology, ForceResearchTechnology],
            Self::SendChat => &[SourcePlayer, Message, SoundName],
            Self::PlaySound => &[
                SourcePlayer,
                LocationX,
                LocationY,
                LocationObjectReference,
                SoundName,
            ],
            Self::Tribute => &[Quantity, TributeList, SourcePlayer, TargetPlayer],
            Self::UnlockGate | Self::LockGate => &[SelectedObjectIds],
            Self::ActivateTrigger | Self::DeactivateTrigger => &[TriggerId],
            Self::AiScriptGoal => &[AiScriptGoal],
            Self::CreateObject => &[ObjectListUnitId, SourcePlayer, LocationX, LocationY, Facet],
            Self::TaskObject => &[
                ObjectListUnitId,
                SourcePlayer,
                LocationX,
                LocationY,
                LocationObjectReference,
                AreaX1,
                AreaY1,
                AreaX2,
                AreaY2,
                ObjectGroup,
                ObjectType,
                ActionType,
                SelectedObjectIds,
            ],
            Self::DeclareVictory => &[SourcePlayer, Enabled],
            Self::KillObject | Self::FreezeObject | Self::StopObject => &[
                ObjectListUnitId,
                SourcePlayer,
                AreaX1,
                AreaY1,
                AreaX2,
                AreaY2,
                ObjectGroup,
                ObjectType,
                SelectedObjectIds,
            ],
            Self::RemoveObject => &[
                ObjectListUnitId,
                SourcePlayer,
                AreaX1,
                AreaY1,
                AreaX2,
                AreaY2,
                ObjectGroup,
                ObjectType,
                ObjectState,
                SelectedObjectIds,
            ],
            Self::ChangeView => &[Quantity, SourcePlayer, LocationX, LocationY, Scroll],
            Self::Unload | Self::AttackMove => &[
                ObjectListUnitId,
                SourcePlayer,
                LocationX,
                LocationY,
                LocationObjectReference,
                AreaX1,
                AreaY1,
                AreaX2,
                AreaY2,
                ObjectGroup,
                ObjectType,
                SelectedObjectIds,
            ],
            Self::ChangeOwnership => &[
                ObjectListUnitId,
                SourcePlayer,
                TargetPlayer,
                AreaX1,
                AreaY1,
                AreaX2,
                AreaY2,
                ObjectGroup,
                ObjectType,
                FlashObject,
                SelectedObjectIds,
            ],
            Self::Patrol | Self::TeleportObject => &[
                ObjectListUnitId,
                SourcePlayer,
                LocationX,
                LocationY,
                AreaX1,
                AreaY1,
                AreaX2,
                AreaY2,
                ObjectGroup,
                ObjectType,
                SelectedObjectIds,
            ],
            Self::DisplayInstructions => &[
                SourcePlayer,
                DisplayTime,
                InstructionPanelPosition,
                Message,
                SoundName,
            ],
            Self::ClearInstructions => &[InstructionPanelPosition],
            Self::DamageObject | Self::HealObject => &[
                Quantity,
                ObjectListUnitId,
                SourcePlayer,
                AreaX1,
                AreaY1,
                AreaX2,
                AreaY2,
                ObjectGroup,
                ObjectType,
                SelectedObjectIds,
            ],
            Self::PlaceFoundation => &[ObjectListUnitId, SourcePlayer, LocationX, LocationY],
            Self::ChangeObjectName => &[
                ObjectListUnitId,
                SourcePlayer,
                AreaX1,
                AreaY1,
                AreaX2,
                AreaY2,
                SelectedObjectIds,
                Message,
            ],
            Self::ChangeObjectHp => &[
                Quantity,
                ObjectListUnitId,
                SourcePlayer,
                AreaX1,
                AreaY1,
                AreaX2,
                AreaY2,
                ObjectGroup,
                ObjectType,
                Operation,
                SelectedObjectIds,
            ],
            Self::ChangeObjectStance => &[
                ObjectListUnitId,
                SourcePlayer,
                AttackStance,
                AreaX1,
                AreaY1,
                AreaX2,
                AreaY2,
                SelectedObjectIds,
            ],
            Self::DisplayTimer => &[DisplayTime, TimeUnit, Timer, ResetTimer, Message],
            Self::EnableDisableObject => &[ObjectListUnitId, SourcePlayer, Enabled],
            Self::EnableDisableTechnology => &[SourcePlayer, Technology, Enabled],
            Self::SetPlayerVisibility => &[SourcePlayer, TargetPlayer, VisibilityState],
            Self::ReplaceObject => &[
                ObjectListUnitId,
                ObjectListUnitId2,
                SourcePlayer,
                TargetPlayer,
                AreaX1,
                AreaY1,
                AreaX2,
                AreaY2,
                ObjectGroup,
                ObjectType,
                SelectedObjectIds,
            ],
            Self::ChangePlayerName => &[SourcePlayer, Message],
            Self::ModifyAttribute => &[
                Quantity,
                ObjectListUnitId,
                SourcePlayer,
                ObjectAttributes,
                Operation,
                Message,
            ],
            Self::ModifyResource => &[Quantity, TributeList, SourcePlayer, Operation],
            Self::ScriptCall => &[Message],
            Self::ChangeVariable => &[Quantity, Operation, Variable, Message],
            Self::ClearTimer => &[Timer],
        }
    }

    /// Whether this variant references another trigger by id.
    pub fn references_trigger(self) -> bool {
        self.fields().contains(&EffectField::TriggerId)
    }
}

/// One then-clause of a trigger. Same flat-superset layout as
/// [`crate::Condition`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Effect {
    pub effect_type: EffectKind,
    pub ai_script_goal: i32,
    pub quantity: i32,
    pub tribute_list: i32,
    pub diplomacy: i32,
    pub object_list_unit_id: i32,
    pub object_list_unit_id_2: i32,
    pub source_player: i32,
    pub target_player: i32,
    pub technology: i32,
    pub display_time: i32,
    pub trigger_id: i32,
    pub location_x: i32,
    pub location_y: i32,
    pub location_object_reference: i32,
    pub area_x1: i32,
    pub area_y1: i32,
    pub area_x2: i32,
    pub area_y2: i32,
    pub object_group: i32,
    pub object_type: i32,
    pub object_state: i32,
    pub instruction_panel_position: i32,
    pub attack_stance: i32,
    pub time_unit: i32,
    pub enabled: i32,
    pub flash_object: i32,
    pub force_research_technology: i32,
    pub visibility_state: i32,
    pub scroll: i32,
    pub operation: i32,
    pub object_attributes: i32,
    pub variable: i32,
    pub timer: i32,
    pub reset_timer: i32,
    pub facet: i32,
    pub action_type: i32,
    pub selected_object_ids: Vec<i32>,
    pub message: String,
    pub sound_name: String,
}

impl Default for Effect {
    fn default() -> Self {
        Self {
            effect_type: EffectKind::None,
            ai_script_goal: -1,
            quantity: -1,
            tribute_list: -1,
            diplomacy: -1,
            object_list_unit_id: -1,
            object_list_unit_id_2: -1,
            source_player: NO_PLAYER,
            target_player: NO_PLAYER,
            technology: -1,
            display_time: -1,
            trigger_id: -1,
            location_x: -1,
            location_y: -1,
            location_object_reference: -1,
            area_x1: -1,
            area_y1: -1,
            area_x2: -1,
            area_y2: -1,
            object_group: -1,
            object_type: -1,
            object_state: -1,
            instruction_panel_position: -1,
            attack_stance: -1,
            time_unit: -1,
            enabled: -1,
            flash_object: -1,
            force_research_technology: -1,
            visibility_state: -1,
            scroll: -1,
            operation: -1,
            object_attributes: -1,
            variable: -1,
            timer: -1,
            reset_timer: -1,
            facet: -1,
            action_type: -1,
            selected_object_ids: Vec::new(),
            message: String::new(),
            sound_name: String::new(),
        }
    }
}

impl Effect {
    /// Fresh no-op effect, the factory every copy starts from.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn of_kind(kind: EffectKind) -> Self {
        Self {
            effect_type: kind,
            ..Self::default()
        }
    }

    /// True when no player field applies; such instances are copied
    /// verbatim and never remapped.
    pub fn player_neutral(&self) -> bool {
        self.source_player == NO_PLAYER && self.target_player == NO_PLAYER
    }

    /// Copy the named attributes from `src`, leaving the rest untouched.
    pub fn copy_fields_from(&mut self, src: &Effect, fields: &[EffectField]) {
        for field in fields {
            match field {
                EffectField::AiScriptGoal => self.ai_script_goal = src.ai_script_goal,
                EffectField::Quantity => self.quantity = src.quantity,
                EffectField::TributeList => self.tribute_list = src.tribute_list,
                EffectField::Diplomacy => self.diplomacy = src.diplomacy,
                EffectField::ObjectListUnitId => {
                    self.object_list_unit_id = src.object_list_unit_id
                }
                EffectField::ObjectListUnitId2 => {
                    self.object_list_unit_id_2 = src.object_list_unit_id_2
                }
                EffectField::SourcePlayer => self.source_player = src.source_player,
                EffectField::TargetPlayer => self.target_player = src.target_player,
                EffectField::Technology => self.technology = src.technology,
                EffectField::DisplayTime => self.display_time = src.display_time,
                EffectField::TriggerId => self.trigger_id = src.trigger_id,
                EffectField::LocationX => self.location_x = src.location_x,
                EffectField::LocationY => self.location_y = src.location_y,
                EffectField::LocationObjectReference => {
                    self.location_object_reference = src.location_object_reference
                }
                EffectField::AreaX1 => self.area_x1 = src.area_x1,
                EffectField::AreaY1 => self.area_y1 = src.area_y1,
                EffectField::AreaX2 => self.area_x2 = src.area_x2,
                EffectField::AreaY2 => self.area_y2 = src.area_y2,
                EffectField::ObjectGroup => self.object_group = src.object_group,
                EffectField::ObjectType => self.object_type = src.object_type,
                EffectField::ObjectState => self.object_state = src.object_state,
                EffectField::InstructionPanelPosition => {
                    self.instruction_panel_position = src.instruction_panel_position
                }
                EffectField::AttackStance => self.attack_stance = src.attack_stance,
                EffectField::TimeUnit => self.time_unit = src.time_unit,
                EffectField::Enabled => self.enabled = src.enabled,
                EffectField::FlashObject => self.flash_object = src.flash_object,
                EffectField::ForceResearchTechnology => {
                    self.force_research_technology = src.force_research_technology
                }
                EffectField::VisibilityState => self.visibility_state = src.visibility_state,
                EffectField::Scroll => self.scroll = src.scroll,
                EffectField::Operation => self.operation = src.operation,
                EffectField::ObjectAttributes => self.object_attributes = src.object_attributes,
                EffectField::Variable => self.variable = src.variable,
                EffectField::Timer => self.timer = src.timer,
                EffectField::ResetTimer => self.reset_timer = src.reset_timer,
                EffectField::Facet => self.facet = src.facet,
                EffectField::ActionType => self.action_type = src.action_type,
                EffectField::SelectedObjectIds => {
                    self.selected_object_ids = src.selected_object_ids.clone()
                }
                EffectField::Message => self.message = src.message.clone(),
                EffectField::SoundName => self.sound_name = src.sound_name.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_fields_respects_the_variant_table() {
        let mut src = Effect::of_kind(EffectKind::SendChat);
        src.source_player = 3;
        src.message = "scout the hill".to_string();
        src.quantity = 7;

        let mut dst = Effect::none();
        dst.effect_type = src.effect_type;
        dst.copy_fields_from(&src, src.effect_type.fields());

        assert_eq!(dst.source_player, 3);
        assert_eq!(dst.message, "scout the hill");
        // `quantity` is not part of SendChat and must stay unset.
        assert_eq!(dst.quantity, -1);
    }

    #[test]
    fn trigger_reference_detection() {
        assert!(EffectKind::ActivateTrigger.references_trigger());
        assert!(EffectKind::DeactivateTrigger.references_trigger());
        assert!(!EffectKind::SendChat.references_trigger());
    }
}
