//! Display grouping: single rows, overload headers, child order.

use doxsearch::{load, search, GroupBody, RawRecord};

use super::common::{anchors, fixture_store, overloaded, record};

#[test]
fn test_child_order_follows_input_not_scope() {
    let store = load(vec![
        RawRecord::one("swap", "swap", "zeta::swap", "z.html", "z"),
        RawRecord::one("swap", "swap", "alpha::swap", "a.html", "a"),
        RawRecord::one("swap", "swap", "mid::swap", "m.html", "m"),
    ])
    .unwrap();

    let groups = search(&store, "swap");
    assert_eq!(anchors(&groups[0]), vec!["z", "a", "m"]);
}

#[test]
fn test_merge_across_shapes_keeps_order() {
    let store = load(vec![overloaded("size", 2), record("size", 9)]).unwrap();
    let groups = search(&store, "size");

    assert_eq!(groups.len(), 1);
    assert_eq!(anchors(&groups[0]), vec!["o0", "o1", "a9"]);
}

#[test]
fn test_single_row_shows_label_without_scope() {
    let store = load(vec![record("contains", 0)]).unwrap();
    let groups = search(&store, "contains");

    match &groups[0].body {
        GroupBody::Single { row } => {
            assert_eq!(row.text, "contains");
            assert_eq!(row.href(), "contains.html#a0");
        }
        other => panic!("expected a single row, got {:?}", other),
    }
}

#[test]
fn test_fixture_closeness_overloads() {
    let store = fixture_store();
    let groups = search(&store, "closeness");

    assert_eq!(groups.len(), 1);
    let rows = groups[0].rows();
    assert_eq!(rows.len(), 6);
    assert!(rows[0].text.ends_with("closeness(const uxgraph *G, node u)"));
    assert!(rows[3].text.contains("wxgraph&lt; T &gt;"));
    assert!(rows.iter().all(|r| r.target_path.starts_with("../namespacelgraph")));
}

#[test]
fn test_fixture_single_occurrence_rows() {
    let groups = search(&fixture_store(), "crandom");
    assert_eq!(groups.len(), 1);
    match &groups[0].body {
        GroupBody::Single { row } => {
            assert_eq!(row.text, "crandom_generator");
            assert_eq!(
                row.href(),
                "../classlgraph_1_1utils_1_1crandom__generator.html#a90bfc340dcb2fa15e744cff6e280978a"
            );
        }
        other => panic!("expected a single row, got {:?}", other),
    }
}
