//! The real Doxygen script shard.

use doxsearch::{load_str, search, GroupBody, KeyEscapes, LoadOptions};

use super::common::{fixture_store, FIXTURE_ENTRIES, FIXTURE_OCCURRENCES};

#[test]
fn test_fixture_counts() {
    let store = fixture_store();
    assert_eq!(store.len(), FIXTURE_ENTRIES);
    assert_eq!(store.occurrence_count(), FIXTURE_OCCURRENCES);
    assert_eq!(store.overloaded_count(), 7);
}

#[test]
fn test_fixture_keys_are_decoded_and_normalized() {
    let store = fixture_store();
    let keys: Vec<_> = store.all_entries().map(|e| e.key()).collect();

    assert_eq!(keys[0], "clear");
    assert_eq!(keys[1], "clearadjacencylist");
    assert!(keys.iter().all(|k| !k.contains("5f")));
    assert_eq!(
        store.get("clear_adjacency_list").unwrap().label(),
        "clear_adjacency_list"
    );
}

#[test]
fn test_escape_hex_never_matches() {
    assert!(search(&fixture_store(), "5f").is_empty());
}

#[test]
fn test_fixture_clear_overloads_in_shard_order() {
    let store = fixture_store();
    let scopes: Vec<_> = store
        .get("clear")
        .unwrap()
        .occurrences()
        .iter()
        .map(|o| o.scope_label().unwrap())
        .collect();
    assert_eq!(
        scopes,
        vec![
            "lgraph::boolean_path::clear()",
            "lgraph::uxgraph::clear()",
            "lgraph::wxgraph::clear()",
            "lgraph::utils::static_bitset::clear()",
        ]
    );
}

#[test]
fn test_json_shard_with_doxygen_keys() {
    let json = r#"[["cycle_5fgraph", ["cycle_graph", ["../c.html#abb5", 1, "lgraph::networks::classic::cycle_graph"]]]]"#;

    let plain = load_str(json, &LoadOptions::default()).unwrap();
    assert!(plain.get("cycle5fgraph").is_some());

    let options = LoadOptions::default().with_key_escapes(KeyEscapes::Doxygen);
    let decoded = load_str(json, &options).unwrap();
    assert_eq!(decoded.all_entries().next().unwrap().key(), "cyclegraph");
}

/// Operator overloads whose escaped keys all normalize to `operator`.
const OPERATOR_SHARD: &str = r#"var searchData=
[
  ['operator_3d',['operator=',['../b.html#a1',1,'lgraph::boolean_path']]],
  ['operator_5b_5d',['operator[]',['../b.html#a2',1,'lgraph::boolean_path']]],
  ['operator_3c_3c',['operator&lt;&lt;',['../n.html#a3',1,'lgraph']]]
];
"#;

#[test]
fn test_colliding_operator_keys_keep_their_labels() {
    let store = load_str(OPERATOR_SHARD, &LoadOptions::default()).unwrap();
    assert_eq!(store.len(), 1);

    let labels: Vec<_> = store
        .get("operator")
        .unwrap()
        .occurrences()
        .iter()
        .map(|o| o.label())
        .collect();
    assert_eq!(labels, vec!["operator=", "operator[]", "operator&lt;&lt;"]);

    let groups = search(&store, "operator");
    match &groups[0].body {
        GroupBody::Overloaded { label, children } => {
            assert_eq!(label, "operator=");
            let texts: Vec<_> = children.iter().map(|c| c.text.as_str()).collect();
            assert_eq!(
                texts,
                vec![
                    "lgraph::boolean_path",
                    "operator[] (lgraph::boolean_path)",
                    "operator&lt;&lt; (lgraph)",
                ]
            );
            let hrefs: Vec<_> = children.iter().map(|c| c.href()).collect();
            assert_eq!(hrefs, vec!["../b.html#a1", "../b.html#a2", "../n.html#a3"]);
        }
        other => panic!("expected overloaded group, got {:?}", other),
    }
}

#[test]
fn test_json_shard_with_byte_order_mark() {
    let json = "\u{FEFF}[[\"count\", [\"count\", [\"lgraph::static_bitset\", \"b.html\", \"n1\"]]]]";
    let store = load_str(json, &LoadOptions::default()).unwrap();
    assert_eq!(store.len(), 1);
    assert!(store.get("count").is_some());
}
