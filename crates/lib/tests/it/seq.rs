//! Sequence transform integration tests: pipelines combining the transforms
//! with Map/Value access.

use dotnest::{
    path,
    seq::{self, SortOrder},
    value::{Map, Value},
};

fn records() -> Vec<Value> {
    vec![
        Value::Map(Map::new().with("name", "Desk").with("price", 200)),
        Value::Map(Map::new().with("name", "Chair").with("price", 100)),
        Value::Map(Map::new().with("name", "Bookcase").with("price", 150)),
    ]
}

#[test]
fn collapse_merges_lists_in_order() {
    let nested = vec![
        Value::List(vec![1.into(), 2.into(), 3.into()]),
        Value::List(vec![4.into(), 5.into(), 6.into()]),
    ];
    let flat = seq::collapse(&nested);
    let expected: Vec<Value> = vec![1.into(), 2.into(), 3.into(), 4.into(), 5.into(), 6.into()];
    assert_eq!(flat, expected);
}

#[test]
fn flatten_depth_controls_recursion() {
    let deep = vec![Value::List(vec![
        Value::Int(1),
        Value::List(vec![Value::Int(2), Value::List(vec![Value::Int(3)])]),
    ])];

    assert_eq!(seq::flatten(&deep, Some(0)), deep);
    assert_eq!(
        seq::flatten(&deep, None),
        vec![Value::Int(1), Value::Int(2), Value::Int(3)]
    );
    // One merge level leaves the innermost list intact
    let one = seq::flatten(&deep, Some(1));
    assert_eq!(one.len(), 2);
    assert!(matches!(one[1], Value::List(_)));
}

#[test]
fn first_and_last_with_price_predicates() {
    let records = records();

    let cheap = seq::first(&records, |_, v| {
        v.at("price").and_then(Value::as_int).is_some_and(|p| p < 180)
    });
    assert_eq!(cheap.unwrap().at("name").unwrap(), "Chair");

    let cheap_last = seq::last(&records, |_, v| {
        v.at("price").and_then(Value::as_int).is_some_and(|p| p < 180)
    });
    assert_eq!(cheap_last.unwrap().at("name").unwrap(), "Bookcase");
}

#[test]
fn where_by_keeps_original_positions() {
    let records = records();
    let affordable = seq::where_by(&records, |_, v| {
        v.at("price").and_then(Value::as_int).is_some_and(|p| p <= 150)
    });

    let indices: Vec<usize> = affordable.iter().map(|(i, _)| *i).collect();
    assert_eq!(indices, [1, 2]);
}

#[test]
fn pluck_then_average_pipeline() {
    let records = records();

    let names = seq::pluck(&records, path!("name"));
    assert_eq!(
        names,
        vec![
            Value::Text("Desk".into()),
            Value::Text("Chair".into()),
            Value::Text("Bookcase".into()),
        ]
    );

    let mean = seq::average(&records, Some(path!("price"))).unwrap();
    assert_eq!(mean, 150.0);
}

#[test]
fn pluck_keyed_builds_a_lookup_map() {
    let records = records();
    let by_name = seq::pluck_keyed(&records, path!("price"), path!("name"));

    assert_eq!(by_name.get_as::<i64>("Desk"), Some(200));
    assert_eq!(by_name.get_as::<i64>("Chair"), Some(100));
    assert_eq!(by_name.len(), 3);
}

#[test]
fn average_of_empty_sequence_is_an_error() {
    let err = seq::average(&[], None).unwrap_err();
    assert!(err.is_empty_sequence());

    let err: dotnest::Error = err.into();
    assert_eq!(err.module(), "seq");
    assert!(err.is_invalid_argument());
}

#[test]
fn prepend_does_not_mutate_input() {
    let items = vec![Value::Int(2), Value::Int(3)];
    let extended = seq::prepend(&items, 1);

    let expected: Vec<Value> = vec![1.into(), 2.into(), 3.into()];
    assert_eq!(extended, expected);
    assert_eq!(items.len(), 2);
}

#[test]
fn sort_by_price_both_directions() {
    let records = records();
    let key = |v: &Value| v.at("price").cloned().unwrap_or(Value::Null);

    let ascending = seq::sort(&records, key, SortOrder::Ascending);
    assert_eq!(ascending[0].at("name").unwrap(), "Chair");
    assert_eq!(ascending[2].at("name").unwrap(), "Desk");

    let descending = seq::sort(&records, key, SortOrder::Descending);
    assert_eq!(descending[0].at("name").unwrap(), "Desk");
}

#[test]
fn sort_recursive_matches_nested_example() {
    let value = Value::List(vec![
        Value::List(vec!["Desc".into(), "Chair".into()]),
        Value::List(vec!["PHP".into(), "Ruby".into(), "JavaScript".into()]),
    ]);
    let sorted = seq::sort_recursive(&value);
    let expected = Value::List(vec![
        Value::List(vec!["Chair".into(), "Desc".into()]),
        Value::List(vec!["JavaScript".into(), "PHP".into(), "Ruby".into()]),
    ]);
    assert_eq!(sorted, expected);
}
