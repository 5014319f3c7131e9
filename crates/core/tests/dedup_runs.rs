use trigsmith_core::{
    conditions_similar, duplicate_range_per_player, effects_similar, triggers_similar,
    unduplicate_condition_run, unduplicate_effect_run, unduplicate_trigger_run, ConditionKind,
    DedupError, DuplicateOptions, EffectKind, SelectionRange, Trigger, TriggerCollection,
};

fn trigger_with_tags(collection: &mut TriggerCollection, name: &str, tags: &[ConditionKind]) {
    let trigger = collection.add_trigger(name);
    for &tag in tags {
        trigger.add_condition(tag);
    }
}

#[test]
fn similar_run_collapses_to_the_reference() {
    let mut collection = TriggerCollection::new();
    let tags = [ConditionKind::Timer, ConditionKind::OwnObjects];
    trigger_with_tags(&mut collection, "wave", &tags);
    trigger_with_tags(&mut collection, "wave (p2)", &tags);
    trigger_with_tags(&mut collection, "wave (p3)", &tags);

    assert!(triggers_similar(&collection, &[0, 1, 2]));
    let removed = unduplicate_trigger_run(&mut collection, 0, 3, false).unwrap();
    assert_eq!(removed, 2);
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get(0).unwrap().name, "wave");
}

#[test]
fn mismatched_run_requires_force() {
    let mut collection = TriggerCollection::new();
    trigger_with_tags(
        &mut collection,
        "a",
        &[ConditionKind::Timer, ConditionKind::OwnObjects],
    );
    trigger_with_tags(
        &mut collection,
        "b",
        &[ConditionKind::Timer, ConditionKind::Chance],
    );
    trigger_with_tags(
        &mut collection,
        "c",
        &[ConditionKind::Timer, ConditionKind::OwnObjects],
    );

    assert!(!triggers_similar(&collection, &[0, 1, 2]));
    let err = unduplicate_trigger_run(&mut collection, 0, 3, false).unwrap_err();
    assert_eq!(err, DedupError::SimilarityMismatch);
    assert_eq!(collection.len(), 3);

    // The caller confirmed; the loose check is overridden.
    unduplicate_trigger_run(&mut collection, 0, 3, true).unwrap();
    assert_eq!(collection.len(), 1);
}

#[test]
fn short_run_aborts_without_deleting() {
    let mut collection = TriggerCollection::new();
    trigger_with_tags(&mut collection, "a", &[ConditionKind::Timer]);
    trigger_with_tags(&mut collection, "b", &[ConditionKind::Timer]);

    let err = unduplicate_trigger_run(&mut collection, 0, 3, false).unwrap_err();
    assert_eq!(
        err,
        DedupError::InsufficientSiblings {
            needed: 3,
            available: 2,
        }
    );
    assert_eq!(collection.len(), 2);
}

#[test]
fn middle_run_keeps_surrounding_display_order() {
    let mut collection = TriggerCollection::new();
    trigger_with_tags(&mut collection, "intro", &[ConditionKind::Chance]);
    let tags = [ConditionKind::Timer];
    trigger_with_tags(&mut collection, "wave", &tags);
    trigger_with_tags(&mut collection, "wave (p2)", &tags);
    trigger_with_tags(&mut collection, "wave (p3)", &tags);
    trigger_with_tags(&mut collection, "outro", &[ConditionKind::Chance]);

    unduplicate_trigger_run(&mut collection, 1, 3, false).unwrap();
    assert_eq!(collection.len(), 3);
    let shown: Vec<&str> = (0..collection.len())
        .map(|slot| collection.get_displayed(slot).unwrap().name.as_str())
        .collect();
    assert_eq!(shown, vec!["intro", "wave", "outro"]);
    assert!(collection.display_order_consistent());
}

#[test]
fn duplicate_then_unduplicate_restores_the_collection() {
    let mut collection = TriggerCollection::new();
    let trigger = collection.add_trigger("wave");
    trigger.add_condition(ConditionKind::OwnObjects).source_player = 1;
    trigger.add_effect(EffectKind::SendChat).source_player = 1;

    let options = DuplicateOptions {
        players: Some(vec![2, 3]),
        ..DuplicateOptions::default()
    };
    duplicate_range_per_player(&mut collection, SelectionRange::new(0, 0), &options, None)
        .unwrap();
    assert_eq!(collection.len(), 3);

    unduplicate_trigger_run(&mut collection, 0, 3, false).unwrap();
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.get(0).unwrap().name, "wave");
}

fn trigger_with_condition_run() -> Trigger {
    let mut trigger = Trigger::new(0, "t");
    trigger.add_condition(ConditionKind::Chance);
    trigger.add_condition(ConditionKind::OwnObjects);
    trigger.add_condition(ConditionKind::OwnObjects);
    trigger.add_condition(ConditionKind::OwnObjects);
    trigger.add_condition(ConditionKind::Timer);
    trigger
}

#[test]
fn condition_run_collapses_in_place() {
    let mut trigger = trigger_with_condition_run();
    let removed = unduplicate_condition_run(&mut trigger, 1, 3, false).unwrap();
    assert_eq!(removed, 2);
    assert_eq!(
        trigger.condition_tags(),
        vec![
            ConditionKind::Chance,
            ConditionKind::OwnObjects,
            ConditionKind::Timer,
        ]
    );
    // Display order compacts, survivors keep their relative order.
    assert_eq!(trigger.condition_order, vec![0, 1, 2]);
}

#[test]
fn condition_run_mismatch_and_force() {
    let mut trigger = Trigger::new(0, "t");
    trigger.add_condition(ConditionKind::OwnObjects);
    trigger.add_condition(ConditionKind::Timer);
    trigger.add_condition(ConditionKind::OwnObjects);

    assert!(!conditions_similar(&trigger, &[0, 1, 2]));
    let err = unduplicate_condition_run(&mut trigger, 0, 3, false).unwrap_err();
    assert_eq!(err, DedupError::SimilarityMismatch);
    assert_eq!(trigger.conditions.len(), 3);

    unduplicate_condition_run(&mut trigger, 0, 3, true).unwrap();
    assert_eq!(trigger.conditions.len(), 1);
}

#[test]
fn condition_run_short_of_siblings() {
    let mut trigger = Trigger::new(0, "t");
    trigger.add_condition(ConditionKind::OwnObjects);
    trigger.add_condition(ConditionKind::OwnObjects);

    let err = unduplicate_condition_run(&mut trigger, 1, 3, false).unwrap_err();
    assert_eq!(
        err,
        DedupError::InsufficientSiblings {
            needed: 3,
            available: 1,
        }
    );
}

#[test]
fn effect_run_collapses_in_place() {
    let mut trigger = Trigger::new(0, "t");
    trigger.add_effect(EffectKind::SendChat);
    trigger.add_effect(EffectKind::SendChat);
    trigger.add_effect(EffectKind::SendChat);
    trigger.add_effect(EffectKind::ClearTimer);

    assert!(effects_similar(&trigger, &[0, 1, 2]));
    unduplicate_effect_run(&mut trigger, 0, 3, false).unwrap();
    assert_eq!(
        trigger.effect_tags(),
        vec![EffectKind::SendChat, EffectKind::ClearTimer]
    );
    assert_eq!(trigger.effect_order, vec![0, 1]);
}

#[test]
fn single_player_run_is_a_no_op() {
    let mut collection = TriggerCollection::new();
    trigger_with_tags(&mut collection, "a", &[ConditionKind::Timer]);
    assert_eq!(unduplicate_trigger_run(&mut collection, 0, 1, false), Ok(0));
    assert_eq!(collection.len(), 1);
}
