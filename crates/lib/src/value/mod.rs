//! Nested containers with dot-notation access.
//!
//! This module provides the core data shape of the crate: [`Value`] for
//! arbitrary JSON-like data and [`Map`] for insertion-ordered string-keyed
//! containers, plus the [`Path`]/[`PathBuf`] types addressing locations
//! inside them.
//!
//! All mutation is explicit: `set`, `forget`, `pull`, and `add` take
//! `&mut self`; everything else borrows or returns fresh values.
//!
//! # Usage
//!
//! ```
//! use dotnest::value::{Map, Value};
//!
//! let mut map = Map::new();
//! map.set("products.desk.price", 100);
//!
//! assert!(map.has("products.desk"));
//! assert_eq!(map.get_as::<i64>("products.desk.price"), Some(100));
//!
//! map.forget(["products.desk.price"]);
//! assert!(map.get("products.desk.price").is_none());
//! ```

use std::fmt;

use indexmap::IndexMap;

// Submodules
pub mod errors;
pub mod path;
pub mod value;

pub use errors::ValueError;
pub use path::{Path, PathBuf};
pub use value::Value;

// Re-export the macro from crate root
pub use crate::path;

/// An insertion-ordered mapping from string keys to [`Value`]s.
///
/// `Map` is the associative container all dot-path mutation operates on.
/// Entry order is preserved and observable: [`Map::prepend`] places an entry
/// first, iteration follows insertion order, and the sequence transforms in
/// [`crate::seq`] rely on it.
///
/// # Path operations
///
/// Read and write operations accept dot paths (`"a.b.c"`). Reads treat a
/// path that resolves through a scalar as absent; writes create missing
/// intermediate maps and overwrite non-map intermediates.
///
/// ```
/// # use dotnest::value::{Map, Value};
/// let mut map = Map::new();
/// map.set("user.profile.name", "Alice");
///
/// assert_eq!(map.get_as::<&str>("user.profile.name"), Some("Alice"));
/// assert_eq!(map.get("user.profile.missing"), None);
///
/// // Writing through a scalar replaces it with a fresh map
/// map.set("user.profile", "oops");
/// map.set("user.profile.name", "Bob");
/// assert_eq!(map.get_as::<&str>("user.profile.name"), Some("Bob"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Map {
    entries: IndexMap<String, Value>,
}

impl Map {
    /// Creates a new empty map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Direct single-key access, without dot-path interpretation.
    pub fn get_key(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns true if a literal key is present (dots are not interpreted).
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Mutable counterpart to [`Map::get_key`].
    pub fn get_key_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Inserts a value under a literal key (dots are not interpreted).
    ///
    /// Returns the previous value under that key, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Resolves a dot path, returning the value at its end.
    ///
    /// Returns `None` if any segment is missing or resolves through a
    /// scalar. Maps navigate by key, lists by numeric index. An empty path
    /// returns `None`; use [`Value::at`] when "the whole container" is a
    /// meaningful result.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&Value> {
        let path = path.as_ref();
        let mut segments = path.segments();
        let mut current = self.entries.get(segments.next()?)?;

        for segment in segments {
            current = match current {
                Value::Map(map) => map.entries.get(segment)?,
                Value::List(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Mutable counterpart to [`Map::get`].
    pub fn get_mut(&mut self, path: impl AsRef<Path>) -> Option<&mut Value> {
        let path = path.as_ref();
        let mut segments = path.segments();
        let mut current = self.entries.get_mut(segments.next()?)?;

        for segment in segments {
            current = match current {
                Value::Map(map) => map.entries.get_mut(segment)?,
                Value::List(items) => items.get_mut(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Resolves a dot path with automatic type conversion via `TryFrom`.
    ///
    /// Returns `None` if the path is absent or the conversion fails.
    ///
    /// ```
    /// # use dotnest::value::Map;
    /// let mut map = Map::new();
    /// map.set("age", 30);
    ///
    /// assert_eq!(map.get_as::<i64>("age"), Some(30));
    /// assert_eq!(map.get_as::<String>("age"), None); // wrong type
    /// ```
    pub fn get_as<'a, T>(&'a self, path: impl AsRef<Path>) -> Option<T>
    where
        T: TryFrom<&'a Value, Error = ValueError>,
    {
        let value = self.get(path)?;
        T::try_from(value).ok()
    }

    /// Checks whether a dot path resolves to a present entry.
    ///
    /// The whole undotted path is checked against a single key first, so a
    /// literal key containing dots is still found. Otherwise every segment
    /// must resolve to a present key or index.
    ///
    /// ```
    /// # use dotnest::value::Map;
    /// let mut map = Map::new();
    /// map.set("products.desk.price", 100);
    ///
    /// assert!(map.has("products.desk"));
    /// assert!(!map.has("products.price"));
    /// ```
    pub fn has(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        if path.is_empty() {
            return false;
        }

        // Exact-key match before dot-splitting
        if self.entries.contains_key(path.as_str()) {
            return true;
        }

        self.get(path).is_some()
    }

    /// Sets a value at a dot path, creating intermediate maps as needed.
    ///
    /// Intermediate segments that are missing or hold non-map values are
    /// replaced with fresh maps. Returns the previous value at the final
    /// segment. An empty path is a no-op; use [`Map::try_set`] to observe
    /// the error.
    pub fn set(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> Option<Value> {
        self.try_set(path, value).unwrap_or_default()
    }

    /// Sets a value at a dot path with `Result` error handling.
    ///
    /// # Errors
    /// Returns [`ValueError::InvalidPath`] if the path has no segments.
    pub fn try_set(
        &mut self,
        path: impl AsRef<Path>,
        value: impl Into<Value>,
    ) -> Result<Option<Value>, ValueError> {
        let path = path.as_ref();
        let segments: Vec<_> = path.segments().collect();

        let Some((last, intermediate)) = segments.split_last() else {
            return Err(ValueError::InvalidPath {
                path: "(empty path)".to_string(),
            });
        };

        let mut current = self;
        for segment in intermediate {
            let entry = current
                .entries
                .entry(segment.to_string())
                .or_insert_with(|| Value::Map(Map::new()));
            if !matches!(entry, Value::Map(_)) {
                // Overwrite scalar or list intermediates to allow navigation
                *entry = Value::Map(Map::new());
            }
            current = match entry {
                Value::Map(map) => map,
                _ => unreachable!(),
            };
        }

        Ok(current.entries.insert(last.to_string(), value.into()))
    }

    /// Sets a value at a dot path only if it is currently absent or null.
    ///
    /// ```
    /// # use dotnest::value::{Map, Value};
    /// let mut map = Map::new().with("card", "Visa");
    /// map.add("price", 200);
    /// map.add("card", "Mastercard"); // already present, unchanged
    ///
    /// assert_eq!(map.get_as::<i64>("price"), Some(200));
    /// assert_eq!(map.get_as::<&str>("card"), Some("Visa"));
    /// ```
    pub fn add(&mut self, path: impl AsRef<Path>, value: impl Into<Value>) {
        let path = path.as_ref();
        let absent = matches!(self.get(path), None | Some(Value::Null));
        if absent {
            self.set(path, value);
        }
    }

    /// Removes the entry at a dot path, returning its value.
    ///
    /// A path whose intermediate segments are missing or not maps is
    /// silently skipped and yields `None`. Only map entries are removed;
    /// list elements are not spliced out.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> Option<Value> {
        let path = path.as_ref();
        let segments: Vec<_> = path.segments().collect();
        let (last, intermediate) = segments.split_last()?;

        let mut current = self;
        for segment in intermediate {
            current = match current.entries.get_mut(*segment) {
                Some(Value::Map(map)) => map,
                _ => return None,
            };
        }

        current.entries.shift_remove(*last)
    }

    /// Removes one or many dot-pathed entries.
    ///
    /// Paths that do not resolve are skipped without error.
    pub fn forget<P: AsRef<Path>>(&mut self, paths: impl IntoIterator<Item = P>) {
        for path in paths {
            self.remove(path);
        }
    }

    /// Retrieves the value at a dot path and removes it.
    ///
    /// The value is returned even when the removal itself cannot reach it
    /// (e.g. the path runs through a list, which [`Map::remove`] skips).
    pub fn pull(&mut self, path: impl AsRef<Path>) -> Option<Value> {
        let path = path.as_ref();
        let value = self.get(path).cloned();
        self.remove(path);
        value
    }

    /// Returns a copy of this map without the given entries.
    ///
    /// Keys are dot paths, so nested entries can be excluded too.
    pub fn except<P: AsRef<Path>>(&self, paths: impl IntoIterator<Item = P>) -> Map {
        let mut result = self.clone();
        result.forget(paths);
        result
    }

    /// Returns a copy of this map retaining only the given top-level keys.
    ///
    /// Unlike [`Map::except`], keys are literal: dots are not interpreted.
    pub fn only<K: AsRef<str>>(&self, keys: impl IntoIterator<Item = K>) -> Map {
        let keys: Vec<String> = keys.into_iter().map(|k| k.as_ref().to_string()).collect();
        Map {
            entries: self
                .entries
                .iter()
                .filter(|(key, _)| keys.iter().any(|k| k == *key))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }

    /// Inserts an entry at the first position.
    ///
    /// If the key already exists its old entry is superseded: the new value
    /// still takes the first position. Returns the superseded value.
    pub fn prepend(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.shift_insert(0, key.into(), value.into())
    }

    /// Returns an iterator over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Returns a mutable iterator over entries in order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut Value)> {
        self.entries.iter_mut()
    }

    /// Returns an iterator over keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Returns an iterator over values in order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.values()
    }

    /// Converts to a JSON string for human-readable output.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Builder method to set a value and return self.
    pub fn with(mut self, path: impl AsRef<Path>, value: impl Into<Value>) -> Self {
        self.set(path, value);
        self
    }
}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Map {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Map {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
