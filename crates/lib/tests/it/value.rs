//! Map/Value integration tests: dot-path access and mutation through the
//! public API.

use dotnest::{
    path,
    value::{Map, PathBuf, Value},
};

/// Build the product catalog used across these tests.
fn catalog() -> Map {
    Map::new()
        .with("products.desk.price", 100)
        .with("products.desk.name", "Desk")
        .with("products.chair.price", 60)
}

#[test]
fn set_then_get_round_trip() {
    let mut map = Map::new();
    map.set("a.b.c", "deep");

    assert_eq!(map.get_as::<&str>("a.b.c"), Some("deep"));
    assert_eq!(map.get("a.b.c"), Some(&Value::Text("deep".to_string())));

    // The same path resolves through Value::at on the wrapped container
    let value = Value::Map(map);
    assert_eq!(value.at("a.b.c").unwrap(), "deep");
}

#[test]
fn has_agrees_with_get_for_all_paths() {
    let map = catalog();

    for path in [
        "products",
        "products.desk",
        "products.desk.price",
        "products.price",
        "products.desk.price.cents",
        "missing",
    ] {
        assert_eq!(map.has(path), map.get(path).is_some(), "path {path:?}");
    }
}

#[test]
fn add_matches_source_example() {
    let mut map = Map::new().with("card", "Visa");
    map.add("price", 200);

    let expected = Map::new().with("card", "Visa").with("price", 200);
    assert_eq!(map, expected);
}

#[test]
fn forget_then_get_returns_none() {
    let mut map = catalog();
    map.forget(["products.desk.price"]);

    assert!(map.get("products.desk.price").is_none());
    assert_eq!(map.get_as::<&str>("products.desk.name"), Some("Desk"));
}

#[test]
fn pull_retrieves_and_removes() {
    let mut map = catalog();

    let price = map.pull("products.chair.price");
    assert_eq!(price, Some(Value::Int(60)));
    assert!(!map.has("products.chair.price"));
    assert!(map.has("products.chair")); // the parent map stays
}

#[test]
fn except_and_only_leave_original_untouched() {
    let map = Map::new().with("name", "Desk").with("price", 100);

    assert_eq!(map.except(["price"]).len(), 1);
    assert_eq!(map.only(["price"]).len(), 1);
    assert_eq!(map.len(), 2);
}

#[test]
fn pathbuf_and_macro_address_the_same_location() {
    let map = catalog();
    let from_macro = path!("products.desk.price");
    let from_parts = PathBuf::new().push("products").push("desk").push("price");

    assert_eq!(map.get(from_macro), map.get(&from_parts));
    assert_eq!(map.get_as::<i64>(&from_parts), Some(100));
}

#[test]
fn values_nest_arbitrarily() {
    let mut map = Map::new();
    map.set(
        "order.items",
        Value::List(vec![
            Value::Map(Map::new().with("sku", "d1").with("qty", 2)),
            Value::Map(Map::new().with("sku", "c1").with("qty", 1)),
        ]),
    );

    assert_eq!(map.get_as::<&str>("order.items.0.sku"), Some("d1"));
    assert_eq!(map.get_as::<i64>("order.items.1.qty"), Some(1));
    assert!(map.get("order.items.2.sku").is_none());
}

#[test]
fn get_mut_updates_in_place() {
    let mut map = catalog();

    if let Some(price) = map.get_mut("products.desk.price") {
        *price = Value::Int(120);
    }
    assert_eq!(map.get_as::<i64>("products.desk.price"), Some(120));
}

#[test]
fn json_round_trip_through_serde() {
    let map = catalog();
    let json = map.to_json_string();
    let back: Map = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map);

    // Values parsed from JSON support the same dot-path access
    let value: Value = serde_json::from_str(r#"{"a":{"b":[1,2.5,"x"]}}"#).unwrap();
    assert_eq!(value.at("a.b.0"), Some(&Value::Int(1)));
    assert_eq!(value.at("a.b.1"), Some(&Value::Float(2.5)));
    assert_eq!(value.at("a.b.2").unwrap(), "x");
}
