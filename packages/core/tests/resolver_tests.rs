use refpath_core::{
    Binding, ErrorKind, Key, Node, RefError, ResolveStats, Resolver, ResolverConfig, Segment,
    Value, resolve,
};
use serde_json::json;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn fixture() -> Value {
    Value::from(json!({
        "title": "TestObject",
        "address": {
            "lines": ["Cap Oméga", "Rond Point Benjamin Franklin"],
            "zip": 34960,
            "city": "MONTPELLIER",
            "country": {"code": "FR", "label": "France"}
        },
        "events": [
            {
                "date": "2016-05-12",
                "topics": {
                    "web": "innovative web platforms",
                    "music": "connected gloves",
                    "sport": "iPhone coaching app"
                },
                "speakers": [{"name": "Romain Bessuges"}]
            }
        ]
    }))
}

fn path(segments: &[&str]) -> Vec<Segment> {
    segments.iter().copied().map(Segment::from).collect()
}

fn values(bindings: &[Binding]) -> Vec<Value> {
    bindings.iter().filter_map(Binding::get).collect()
}

#[test]
fn test_simple_property_access() {
    init_logging();
    let root = fixture();
    let refs = resolve(&root, &path(&["title"])).unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].get(), Some(Value::from("TestObject")));
}

#[test]
fn test_nested_property_write_through() {
    let root = fixture();
    let refs = resolve(&root, &path(&["address", "city"])).unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].get(), Some(Value::from("MONTPELLIER")));

    refs[0].set(Value::from("MONTPELLIER CEDEX"));
    assert_eq!(refs[0].get(), Some(Value::from("MONTPELLIER CEDEX")));

    let again = resolve(&root, &path(&["address", "city"])).unwrap();
    assert_eq!(again[0].get(), Some(Value::from("MONTPELLIER CEDEX")));
    assert_eq!(
        root.to_json().unwrap()["address"]["city"],
        json!("MONTPELLIER CEDEX")
    );
}

#[test]
fn test_container_terminal_is_shared() {
    let root = fixture();
    let refs = resolve(&root, &path(&["address", "lines"])).unwrap();
    assert_eq!(refs.len(), 1);

    let Some(Value::Container(lines)) = refs[0].get() else {
        panic!("lines should be a container");
    };
    lines.set(2usize, Value::from("CEDEX 3323")).unwrap();

    let again = resolve(&root, &path(&["address", "lines", "*"])).unwrap();
    assert_eq!(again.len(), 3);
}

#[test]
fn test_object_terminal() {
    let root = fixture();
    let refs = resolve(&root, &path(&["address"])).unwrap();
    let address = refs[0].get().unwrap();
    let node = address.as_node().unwrap();
    assert!(node.has(&Key::from("lines")));
}

#[test]
fn test_sequence_wildcard_in_index_order() {
    let root = fixture();
    let refs = resolve(&root, &path(&["address", "lines", "*"])).unwrap();
    assert_eq!(
        values(&refs),
        vec![
            Value::from("Cap Oméga"),
            Value::from("Rond Point Benjamin Franklin")
        ]
    );

    refs[0].set(Value::from("CAP OMÉGA"));
    assert_eq!(
        root.to_json().unwrap()["address"]["lines"][0],
        json!("CAP OMÉGA")
    );
    assert_eq!(refs[1].location().to_string(), "$['address']['lines'][1]");
}

#[test]
fn test_nested_wildcards_fan_out() {
    let root = fixture();
    let refs = resolve(&root, &path(&["events", "*", "topics", "*"])).unwrap();
    assert_eq!(
        values(&refs),
        vec![
            Value::from("innovative web platforms"),
            Value::from("connected gloves"),
            Value::from("iPhone coaching app"),
        ]
    );
    let locations: Vec<String> = refs.iter().map(|r| r.location().to_string()).collect();
    assert_eq!(
        locations,
        vec![
            "$['events'][0]['topics']['web']",
            "$['events'][0]['topics']['music']",
            "$['events'][0]['topics']['sport']",
        ]
    );
}

#[test]
fn test_mapping_wildcard_follows_insertion_order() {
    let node = Node::mapping();
    for name in ["zeta", "alpha", "mid"] {
        node.set(name, Value::from(name)).unwrap();
    }
    let root = Value::from(node);
    let refs = resolve(&root, &[Segment::Wildcard]).unwrap();
    assert_eq!(
        values(&refs),
        vec![Value::from("zeta"), Value::from("alpha"), Value::from("mid")]
    );
}

#[test]
fn test_repeated_resolution_is_deterministic() {
    let root = fixture();
    let query = path(&["*", "*"]);
    let first = values(&resolve(&root, &query).unwrap());
    let second = values(&resolve(&root, &query).unwrap());
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_circular_structure() {
    init_logging();
    let parent = Node::mapping_from([("name", Value::from("Parent"))]);
    let child = Node::mapping_from([("name", Value::from("Child"))]);
    child.set("parent", Value::from(parent.clone())).unwrap();
    parent.set("child", Value::from(child.clone())).unwrap();

    let root = Value::from(parent.clone());
    let refs = resolve(&root, &path(&["child", "parent", "name"])).unwrap();
    assert_eq!(refs.len(), 1);
    assert_eq!(refs[0].get(), Some(Value::from("Parent")));
    assert!(refs[0].container().ptr_eq(&parent));

    let around = resolve(&root, &path(&["child", "parent", "child", "parent", "*"])).unwrap();
    assert_eq!(around.len(), 2);

    child.remove(&Key::from("parent"));
}

#[test]
fn test_wrong_paths_find_nothing() {
    let root = fixture();
    for query in [
        path(&["undefinedField"]),
        path(&["title", "test"]),
        path(&["title", "*"]),
        path(&["address", "zip", "0"]),
        vec![Segment::from("address"), Segment::from("lines"), Segment::Index(9)],
    ] {
        assert!(resolve(&root, &query).unwrap().is_empty(), "{query:?}");
    }
}

#[test]
fn test_example_scenarios() {
    let root = Value::from(json!({"a": 1}));
    assert!(resolve(&root, &path(&["missing"])).unwrap().is_empty());

    let root = Value::from(json!({"a": {"b": 2}}));
    assert!(resolve(&root, &path(&["a", "b", "c"])).unwrap().is_empty());

    let root = Value::from(json!({"events": [{"topics": {"web": "a", "music": "b"}}]}));
    let refs = resolve(&root, &path(&["events", "*", "topics", "*"])).unwrap();
    assert_eq!(values(&refs), vec![Value::from("a"), Value::from("b")]);
}

#[test]
fn test_scalar_root_resolves_to_nothing() {
    let root = Value::from("plain");
    assert!(resolve(&root, &[Segment::Wildcard]).unwrap().is_empty());
    assert!(resolve(&Value::Null, &path(&["a"])).unwrap().is_empty());
}

#[test]
fn test_index_and_name_keys_interchange() {
    let root = Value::from(json!({"list": ["x", "y"], "map": {"0": "zero"}}));
    let by_name = resolve(&root, &path(&["list", "1"])).unwrap();
    assert_eq!(by_name[0].get(), Some(Value::from("y")));
    assert_eq!(by_name[0].key(), &Key::Index(1));

    let by_index = resolve(&root, &[Segment::from("map"), Segment::Index(0)]).unwrap();
    assert_eq!(by_index[0].get(), Some(Value::from("zero")));
    assert_eq!(by_index[0].key(), &Key::from("0"));
}

#[test]
fn test_empty_path_is_rejected() {
    let err = resolve(&fixture(), &[]).unwrap_err();
    assert_eq!(err, RefError::EmptyPath);
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_bindings_share_live_state() {
    let root = Value::from(json!({"items": [{"n": 1}, {"n": 2}]}));
    let all = resolve(&root, &path(&["items", "*", "n"])).unwrap();
    let first = resolve(&root, &[Segment::from("items"), Segment::Index(0), Segment::from("n")])
        .unwrap();

    first[0].set(Value::from(10));
    assert_eq!(all[0].get(), Some(Value::from(10)));
    assert_eq!(all[0], first[0]);
}

#[test]
fn test_stats_and_bounded_config() {
    init_logging();
    let root = fixture();
    let resolver = Resolver::with_config(ResolverConfig {
        log_misses: true,
        ..ResolverConfig::default()
    })
    .unwrap();
    let (refs, stats) = resolver
        .resolve_with_stats(&root, &path(&["events", "*", "speakers", "*", "name"]))
        .unwrap();
    assert_eq!(values(&refs), vec![Value::from("Romain Bessuges")]);
    assert_eq!(
        stats,
        ResolveStats {
            branches_visited: 5,
            wildcard_expansions: 2,
            misses: 0,
            bindings: 1,
        }
    );

    let bounded = Resolver::with_config(ResolverConfig::bounded(1)).unwrap();
    let refs = bounded.resolve(&root, &path(&["address", "lines", "*"])).unwrap();
    assert_eq!(values(&refs), vec![Value::from("Cap Oméga")]);
}

#[test]
fn test_invalid_config_rejected() {
    let err = Resolver::with_config(ResolverConfig::bounded(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[test]
fn test_text_paths_use_configured_marker() {
    let root = Value::from(json!({"*": "literal", "other": "value"}));
    let default = Resolver::new();
    assert_eq!(default.resolve_strs(&root, &["*"]).unwrap().len(), 2);

    let custom = Resolver::with_config(ResolverConfig::with_wildcard("?")).unwrap();
    let refs = custom.resolve_strs(&root, &["*"]).unwrap();
    assert_eq!(values(&refs), vec![Value::from("literal")]);
    assert_eq!(custom.resolve_strs(&root, &["?"]).unwrap().len(), 2);
}
