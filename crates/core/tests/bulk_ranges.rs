use trigsmith_core::{
    delete_range, duplicate_range_per_player, move_range, unduplicate_range, BulkError,
    ConditionKind, DuplicateError, DuplicateOptions, RangeError, SelectionRange,
    TriggerCollection,
};

fn named_collection(names: &[&str]) -> TriggerCollection {
    let mut collection = TriggerCollection::new();
    for name in names {
        let trigger = collection.add_trigger(*name);
        trigger.add_condition(ConditionKind::OwnObjects).source_player = 1;
    }
    collection
}

fn shown_names(collection: &TriggerCollection) -> Vec<String> {
    (0..collection.len())
        .map(|slot| collection.get_displayed(slot).unwrap().name.clone())
        .collect()
}

fn players(list: &[i32]) -> DuplicateOptions {
    DuplicateOptions {
        players: Some(list.to_vec()),
        ..DuplicateOptions::default()
    }
}

macro_rules! range_error_case {
    ($name:ident, $begin:expr, $end:expr, $total:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let range = SelectionRange::new($begin, $end);
            assert_eq!(range.normalize($total).unwrap_err(), $expected);
        }
    };
}

range_error_case!(
    inverted_range,
    3,
    1,
    5,
    RangeError::Inverted { begin: 3, end: 1 }
);
range_error_case!(
    begin_past_total,
    5,
    6,
    5,
    RangeError::BeginOutOfBounds { begin: 5, total: 5 }
);
range_error_case!(
    begin_on_empty_list,
    0,
    0,
    0,
    RangeError::BeginOutOfBounds { begin: 0, total: 0 }
);

#[test]
fn end_is_clamped_to_the_total() {
    let range = SelectionRange::new(1, 99);
    assert_eq!(range.normalize(4).unwrap(), (1, 4));
}

#[test]
fn duplicate_range_places_copies_after_each_source() {
    let mut collection = named_collection(&["a", "b"]);
    let new_ids = duplicate_range_per_player(
        &mut collection,
        SelectionRange::new(0, 1),
        &players(&[2]),
        None,
    )
    .unwrap();
    assert_eq!(new_ids.len(), 2);
    assert_eq!(shown_names(&collection), vec!["a", "a (p2)", "b", "b (p2)"]);
    assert!(collection.display_order_consistent());
}

#[test]
fn duplicate_range_keeps_the_tail_in_place() {
    let mut collection = named_collection(&["a", "b", "c"]);
    duplicate_range_per_player(
        &mut collection,
        SelectionRange::new(1, 1),
        &players(&[2, 3]),
        None,
    )
    .unwrap();
    assert_eq!(
        shown_names(&collection),
        vec!["a", "b", "b (p2)", "b (p3)", "c"]
    );
}

#[test]
fn duplicate_range_rejects_disabled_gates_before_mutating() {
    let mut collection = named_collection(&["a", "b"]);
    let options = DuplicateOptions {
        include_source: false,
        include_target: false,
        ..DuplicateOptions::default()
    };
    let err = duplicate_range_per_player(
        &mut collection,
        SelectionRange::new(0, 1),
        &options,
        None,
    )
    .unwrap_err();
    assert_eq!(
        err,
        BulkError::Duplicate(DuplicateError::NoPlayerFieldsIncluded)
    );
    assert_eq!(collection.len(), 2);
}

#[test]
fn unduplicate_range_strips_every_batch() {
    let mut collection = named_collection(&["a", "b"]);
    duplicate_range_per_player(
        &mut collection,
        SelectionRange::new(0, 1),
        &players(&[2, 3]),
        None,
    )
    .unwrap();
    assert_eq!(collection.len(), 6);

    let removed = unduplicate_range(&mut collection, SelectionRange::new(0, 5), 3).unwrap();
    assert_eq!(removed, 4);
    assert_eq!(shown_names(&collection), vec!["a", "b"]);
    assert!(collection.display_order_consistent());
}

#[test]
fn unduplicate_range_requires_whole_batches() {
    let mut collection = named_collection(&["a", "b", "c", "d"]);
    let err = unduplicate_range(&mut collection, SelectionRange::new(0, 2), 2).unwrap_err();
    assert_eq!(
        err,
        BulkError::Range(RangeError::NotPlayerMultiple {
            len: 3,
            players: 2,
        })
    );
    assert_eq!(collection.len(), 4);
}

#[test]
fn delete_range_removes_the_selection() {
    let mut collection = named_collection(&["a", "b", "c", "d"]);
    let removed = delete_range(&mut collection, SelectionRange::new(1, 2)).unwrap();
    assert_eq!(removed, 2);
    assert_eq!(shown_names(&collection), vec!["a", "d"]);
    assert!(collection.display_order_consistent());
}

#[test]
fn move_range_up() {
    let mut collection = named_collection(&["a", "b", "c", "d", "e"]);
    move_range(&mut collection, SelectionRange::with_target(2, 3, 0)).unwrap();
    assert_eq!(shown_names(&collection), vec!["c", "d", "a", "b", "e"]);
    assert!(collection.display_order_consistent());
}

#[test]
fn move_range_down() {
    let mut collection = named_collection(&["a", "b", "c", "d", "e"]);
    move_range(&mut collection, SelectionRange::with_target(0, 1, 4)).unwrap();
    assert_eq!(shown_names(&collection), vec!["c", "d", "a", "b", "e"]);
}

#[test]
fn move_range_to_the_very_end() {
    let mut collection = named_collection(&["a", "b", "c"]);
    move_range(&mut collection, SelectionRange::with_target(0, 0, 3)).unwrap();
    assert_eq!(shown_names(&collection), vec!["b", "c", "a"]);
}

#[test]
fn move_range_needs_a_target() {
    let mut collection = named_collection(&["a", "b", "c"]);
    let err = move_range(&mut collection, SelectionRange::new(0, 1)).unwrap_err();
    assert_eq!(err, BulkError::Range(RangeError::TargetMissing));
}

#[test]
fn move_target_inside_the_range_is_rejected() {
    let mut collection = named_collection(&["a", "b", "c", "d"]);
    let err = move_range(&mut collection, SelectionRange::with_target(1, 2, 2)).unwrap_err();
    assert_eq!(
        err,
        BulkError::Range(RangeError::TargetInsideRange { target: 2 })
    );
    assert_eq!(shown_names(&collection), vec!["a", "b", "c", "d"]);
}

#[test]
fn duplicate_range_skips_marked_copies() {
    let mut collection = named_collection(&["a", "b"]);
    collection.get_mut(1).unwrap().description = "<Copy>".to_string();
    let options = DuplicateOptions {
        mark_originals: true,
        ..players(&[2])
    };
    duplicate_range_per_player(&mut collection, SelectionRange::new(0, 1), &options, None)
        .unwrap();
    // "a" gained a copy, the marked "b" did not.
    assert_eq!(shown_names(&collection), vec!["a", "a (p2)", "b"]);
}
