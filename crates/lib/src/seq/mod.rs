//! Transforms over sequences of [`Value`]s.
//!
//! Free functions operating on `&[Value]`: flattening, filtering,
//! extraction, aggregation, and sorting. None of them mutate their input;
//! every transform returns a fresh `Vec` (or borrowed element).
//!
//! Predicates receive `(index, &Value)` so position-aware filters work the
//! same way key-aware filters do on maps:
//!
//! ```
//! use dotnest::{seq, value::Value};
//!
//! let items = vec![Value::Int(100), Value::Int(200), Value::Int(300)];
//! let found = seq::first(&items, |_, v| v.as_int().is_some_and(|n| n >= 150));
//! assert_eq!(found, Some(&Value::Int(200)));
//! ```

use crate::value::{Map, Path, Value};

pub mod errors;

pub use errors::SeqError;

/// Sort direction for [`sort`].
///
/// The direction is always explicit; there is no implicit default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Concatenates the container elements of a sequence into a single flat
/// sequence, in source order.
///
/// List elements contribute their items, map elements their values; scalar
/// elements are skipped silently.
///
/// ```
/// # use dotnest::{seq, value::Value};
/// let nested = vec![
///     Value::List(vec![1.into(), 2.into(), 3.into()]),
///     Value::List(vec![4.into(), 5.into(), 6.into()]),
/// ];
/// let flat = seq::collapse(&nested);
/// let expected: Vec<Value> = vec![1.into(), 2.into(), 3.into(), 4.into(), 5.into(), 6.into()];
/// assert_eq!(flat, expected);
/// ```
pub fn collapse(items: &[Value]) -> Vec<Value> {
    let mut result = Vec::new();
    for item in items {
        match item {
            Value::List(inner) => result.extend(inner.iter().cloned()),
            Value::Map(map) => result.extend(map.values().cloned()),
            _ => {}
        }
    }
    result
}

/// Recursively flattens nested containers up to `depth` levels.
///
/// `None` flattens without limit. `Some(0)` returns the input unchanged.
/// Non-container elements are appended as-is; order is preserved. Map
/// elements flatten through their values.
///
/// Flattening at unlimited depth is idempotent: flattening a flat sequence
/// returns it unchanged.
pub fn flatten(items: &[Value], depth: Option<usize>) -> Vec<Value> {
    if depth == Some(0) {
        return items.to_vec();
    }

    let mut result = Vec::new();
    for item in items {
        let inner: Option<Vec<Value>> = match item {
            Value::List(inner) => Some(inner.clone()),
            Value::Map(map) => Some(map.values().cloned().collect()),
            _ => None,
        };

        match inner {
            Some(inner) => match depth {
                Some(1) => result.extend(inner),
                Some(d) => result.extend(flatten(&inner, Some(d - 1))),
                None => result.extend(flatten(&inner, None)),
            },
            None => result.push(item.clone()),
        }
    }
    result
}

/// Returns the first element passing the predicate.
///
/// The predicate receives the element's index and value. For the plain
/// first element use `items.first()`; for a fallback, chain
/// `.unwrap_or(..)` on the returned `Option`.
pub fn first<'a>(items: &'a [Value], pred: impl Fn(usize, &Value) -> bool) -> Option<&'a Value> {
    items
        .iter()
        .enumerate()
        .find(|(index, value)| pred(*index, value))
        .map(|(_, value)| value)
}

/// Returns the last element passing the predicate, scanning in reverse.
pub fn last<'a>(items: &'a [Value], pred: impl Fn(usize, &Value) -> bool) -> Option<&'a Value> {
    items
        .iter()
        .enumerate()
        .rev()
        .find(|(index, value)| pred(*index, value))
        .map(|(_, value)| value)
}

/// Returns the subsequence passing the predicate, preserving original
/// indices.
pub fn where_by(items: &[Value], pred: impl Fn(usize, &Value) -> bool) -> Vec<(usize, Value)> {
    items
        .iter()
        .enumerate()
        .filter(|(index, value)| pred(*index, value))
        .map(|(index, value)| (index, value.clone()))
        .collect()
}

/// Extracts the value at `value_path` from each element.
///
/// Elements where the path is absent contribute `Null`, so the result
/// always has the same length and order as the input.
///
/// ```
/// # use dotnest::{path, seq, value::{Map, Value}};
/// let records = vec![
///     Value::Map(Map::new().with("product.name", "Desk")),
///     Value::Map(Map::new().with("product.name", "Chair")),
/// ];
/// let names = seq::pluck(&records, path!("product.name"));
/// let expected: Vec<Value> = vec!["Desk".into(), "Chair".into()];
/// assert_eq!(names, expected);
/// ```
pub fn pluck(items: &[Value], value_path: impl AsRef<Path>) -> Vec<Value> {
    let value_path = value_path.as_ref();
    items
        .iter()
        .map(|item| item.at(value_path).cloned().unwrap_or(Value::Null))
        .collect()
}

/// Extracts `value_path` from each element, keyed by the element's value at
/// `key_path`.
///
/// Keys render through `Display`; an absent or null key renders as the
/// empty string. Later elements supersede earlier ones under the same key.
pub fn pluck_keyed(
    items: &[Value],
    value_path: impl AsRef<Path>,
    key_path: impl AsRef<Path>,
) -> Map {
    let value_path = value_path.as_ref();
    let key_path = key_path.as_ref();
    items
        .iter()
        .map(|item| {
            let key = match item.at(key_path) {
                None | Some(Value::Null) => String::new(),
                Some(value) => value.to_string(),
            };
            let value = item.at(value_path).cloned().unwrap_or(Value::Null);
            (key, value)
        })
        .collect()
}

/// Arithmetic mean of the sequence's numeric values.
///
/// With `key`, the value at that path is extracted from each element first.
/// Absent or non-numeric values coerce to 0 but still count toward the
/// divisor.
///
/// # Errors
/// Returns [`SeqError::EmptySequence`] for an empty input rather than
/// producing NaN.
pub fn average(items: &[Value], key: Option<&Path>) -> Result<f64, SeqError> {
    if items.is_empty() {
        return Err(SeqError::EmptySequence {
            operation: "average".to_string(),
        });
    }

    let sum: f64 = items
        .iter()
        .map(|item| {
            let value = match key {
                Some(path) => item.at(path),
                None => Some(item),
            };
            value.and_then(Value::as_f64).unwrap_or(0.0)
        })
        .sum();

    Ok(sum / items.len() as f64)
}

/// Returns a copy of the sequence with `value` inserted at the front.
pub fn prepend(items: &[Value], value: impl Into<Value>) -> Vec<Value> {
    let mut result = Vec::with_capacity(items.len() + 1);
    result.push(value.into());
    result.extend(items.iter().cloned());
    result
}

/// Stable-sorts elements by the key produced by `key_fn`.
///
/// Keys compare with [`Value::compare`]; the direction is explicit. Equal
/// keys keep their original relative order.
///
/// ```
/// # use dotnest::{path, seq::{self, SortOrder}, value::{Map, Value}};
/// let records = vec![
///     Value::Map(Map::new().with("score", 30)),
///     Value::Map(Map::new().with("score", 10)),
///     Value::Map(Map::new().with("score", 50)),
/// ];
/// let sorted = seq::sort(
///     &records,
///     |v| v.at(path!("score")).cloned().unwrap_or(Value::Null),
///     SortOrder::Ascending,
/// );
/// assert_eq!(sorted[0].at(path!("score")), Some(&Value::Int(10)));
/// ```
pub fn sort(items: &[Value], key_fn: impl Fn(&Value) -> Value, order: SortOrder) -> Vec<Value> {
    let mut decorated: Vec<(Value, Value)> = items
        .iter()
        .map(|item| (key_fn(item), item.clone()))
        .collect();

    decorated.sort_by(|(a, _), (b, _)| match order {
        SortOrder::Ascending => a.compare(b),
        SortOrder::Descending => b.compare(a),
    });

    decorated.into_iter().map(|(_, item)| item).collect()
}

/// Recursively sorts every container level of a value.
///
/// Maps sort by key ascending, lists by value ascending; scalars pass
/// through unchanged.
///
/// ```
/// # use dotnest::{seq, value::Value};
/// let value = Value::List(vec![
///     Value::List(vec!["Desc".into(), "Chair".into()]),
///     Value::List(vec!["PHP".into(), "Ruby".into(), "JavaScript".into()]),
/// ]);
/// let sorted = seq::sort_recursive(&value);
/// let expected = Value::List(vec![
///     Value::List(vec!["Chair".into(), "Desc".into()]),
///     Value::List(vec!["JavaScript".into(), "PHP".into(), "Ruby".into()]),
/// ]);
/// assert_eq!(sorted, expected);
/// ```
pub fn sort_recursive(value: &Value) -> Value {
    match value {
        Value::List(items) => {
            let mut sorted: Vec<Value> = items.iter().map(sort_recursive).collect();
            sorted.sort_by(|a, b| a.compare(b));
            Value::List(sorted)
        }
        Value::Map(map) => {
            let mut entries: Vec<(String, Value)> = map
                .iter()
                .map(|(key, value)| (key.clone(), sort_recursive(value)))
                .collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            Value::Map(entries.into_iter().collect())
        }
        other => other.clone(),
    }
}
