use accordion::{
    CollapseMap, ConfigError, Item, ItemId, ItemList, OpenSet, Variant, initial_open_set,
};
use proptest::prelude::*;

fn items(ids: &[&str]) -> ItemList {
    ItemList::new(
        ids.iter()
            .map(|id| Item::text(*id, id.to_uppercase(), format!("{id} body")))
            .collect(),
    )
    .unwrap()
}

fn ids(open: &OpenSet) -> Vec<&str> {
    open.iter().map(ItemId::as_str).collect()
}

// ============================================================================
// Initial state
// ============================================================================

#[test]
fn test_initial_all_open_without_map() {
    let open = initial_open_set(&items(&["a", "b", "c"]), &CollapseMap::new());
    assert_eq!(ids(&open), ["a", "b", "c"]);
}

#[test]
fn test_initial_skips_collapsed() {
    let collapsed = CollapseMap::new().collapsed("a");
    let open = initial_open_set(&items(&["a", "b"]), &collapsed);
    assert_eq!(ids(&open), ["b"]);
}

#[test]
fn test_initial_false_entry_means_open() {
    let collapsed = CollapseMap::new().expanded("a").collapsed("c");
    let open = initial_open_set(&items(&["a", "b", "c"]), &collapsed);
    assert_eq!(ids(&open), ["a", "b"]);
}

#[test]
fn test_initial_ignores_map_entries_for_unknown_ids() {
    let collapsed = CollapseMap::new().collapsed("zzz");
    let open = initial_open_set(&items(&["a"]), &collapsed);
    assert_eq!(ids(&open), ["a"]);
}

#[test]
fn test_initial_empty_list() {
    let open = initial_open_set(&ItemList::default(), &CollapseMap::new().collapsed("a"));
    assert!(open.is_empty());
}

// ============================================================================
// Item list validation
// ============================================================================

#[test]
fn test_duplicate_ids_rejected() {
    let result = ItemList::new(vec![
        Item::text("a", "A", "one"),
        Item::text("b", "B", "two"),
        Item::text("a", "A again", "three"),
    ]);

    assert_eq!(
        result.unwrap_err(),
        ConfigError::DuplicateItemId(ItemId::from("a"))
    );
}

#[test]
fn test_duplicate_error_message() {
    let err = ConfigError::DuplicateItemId(ItemId::from("outer1"));
    assert_eq!(err.to_string(), "Duplicate item id 'outer1'");
}

// ============================================================================
// Toggle rule
// ============================================================================

#[test]
fn test_single_open_replaces() {
    let mut open = initial_open_set(&items(&["a", "b", "c"]), &CollapseMap::new());

    open.toggle("b", false);
    assert_eq!(ids(&open), ["b"]);

    open.toggle("b", false);
    assert!(open.is_empty());
}

#[test]
fn test_multi_open_appends_and_removes() {
    let mut open = OpenSet::new();

    open.toggle("a", true);
    assert_eq!(ids(&open), ["a"]);

    open.toggle("b", true);
    assert_eq!(ids(&open), ["a", "b"]);

    open.toggle("a", true);
    assert_eq!(ids(&open), ["b"]);
}

#[test]
fn test_unknown_id_is_toggled_like_any_other() {
    let mut open = OpenSet::new();
    open.toggle("ghost", true);
    assert!(open.contains("ghost"));
    open.toggle("ghost", true);
    assert!(open.is_empty());
}

#[test]
fn test_collapse_map_roundtrip_through_initial() {
    let list = items(&["a", "b", "c"]);
    let open: OpenSet = [ItemId::from("c"), ItemId::from("a")].into_iter().collect();

    let map = open.to_collapse_map(&list);
    assert!(!map.is_collapsed("a"));
    assert!(map.is_collapsed("b"));
    assert!(!map.is_collapsed("c"));

    // Re-derived in list order, not toggle order
    assert_eq!(ids(&initial_open_set(&list, &map)), ["a", "c"]);
}

// ============================================================================
// Properties
// ============================================================================

const IDS: [&str; 5] = ["a", "b", "c", "d", "e"];

fn toggle_sequence() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(0..IDS.len(), 0..40)
}

proptest! {
    #[test]
    fn prop_initial_is_non_collapsed_in_order(flags in prop::collection::vec(any::<Option<bool>>(), IDS.len())) {
        let list = items(&IDS);
        let map: CollapseMap = IDS
            .iter()
            .zip(&flags)
            .filter_map(|(id, flag)| flag.map(|f| (ItemId::from(*id), f)))
            .collect();

        let expected: Vec<&str> = IDS
            .iter()
            .zip(&flags)
            .filter(|(_, flag)| **flag != Some(true))
            .map(|(id, _)| *id)
            .collect();

        let open = initial_open_set(&list, &map);
        prop_assert_eq!(ids(&open), expected);
        // Deriving again from the same inputs gives the same answer
        prop_assert_eq!(initial_open_set(&list, &map), open);
    }

    #[test]
    fn prop_single_open_never_exceeds_one(seq in toggle_sequence()) {
        let mut open = OpenSet::new();

        for index in seq {
            open.toggle(IDS[index], false);
            prop_assert!(open.len() <= 1);
        }
    }

    #[test]
    fn prop_multi_open_removes_exactly_or_appends(seq in toggle_sequence()) {
        let mut open = OpenSet::new();

        for index in seq {
            let id = IDS[index];
            let before: Vec<String> = open.iter().map(|i| i.to_string()).collect();
            let was_open = open.contains(id);

            open.toggle(id, true);
            let after: Vec<String> = open.iter().map(|i| i.to_string()).collect();

            let mut expected = before.clone();
            if was_open {
                expected.retain(|i| i != id);
            } else {
                expected.push(id.to_string());
            }
            prop_assert_eq!(after, expected);
        }
    }

    #[test]
    fn prop_double_toggle_restores(seq in toggle_sequence(), target in 0..IDS.len(), multi in any::<bool>()) {
        let mut open = OpenSet::new();
        for index in seq {
            open.toggle(IDS[index], multi);
        }

        let id = IDS[target];
        let before = open.clone();
        open.toggle(id, multi);
        open.toggle(id, multi);

        if before.contains(id) {
            // Closed then reopened: same members, and the id moves to the end
            let mut members = ids(&open);
            let mut expected = ids(&before);
            members.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(members, expected);
            prop_assert_eq!(open.ids().last().map(ItemId::as_str), Some(id));
        } else if multi || before.is_empty() {
            prop_assert_eq!(open, before);
        } else {
            // Single-open: opening the id already dropped the previous one
            prop_assert!(open.is_empty());
        }
    }
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn test_collapse_map_from_json() {
    let collapsed: CollapseMap =
        serde_json::from_str(r#"{"inner1": true, "inner2": false}"#).unwrap();

    assert_eq!(collapsed.len(), 2);
    assert!(collapsed.is_collapsed("inner1"));
    assert!(!collapsed.is_collapsed("inner2"));

    let open = initial_open_set(&items(&["inner1", "inner2"]), &collapsed);
    assert_eq!(ids(&open), ["inner2"]);
}

#[test]
fn test_collapse_map_json_is_a_plain_object() {
    let collapsed = CollapseMap::new().collapsed("a");
    let json = serde_json::to_string(&collapsed).unwrap();

    assert_eq!(json, r#"{"a":true}"#);
    assert_eq!(serde_json::from_str::<CollapseMap>(&json).unwrap(), collapsed);
}

#[test]
fn test_item_id_json_is_a_plain_string() {
    let id: ItemId = serde_json::from_str(r#""details""#).unwrap();
    assert_eq!(id.as_str(), "details");
    assert_eq!(serde_json::to_string(&id).unwrap(), r#""details""#);
}

#[test]
fn test_variant_from_json() {
    let variant: Variant = serde_json::from_str(r#""alternative""#).unwrap();
    assert_eq!(variant, Variant::Alternative);
    assert_eq!(serde_json::to_string(&Variant::Default).unwrap(), r#""default""#);
    assert!(serde_json::from_str::<Variant>(r#""Alternative""#).is_err());
}
