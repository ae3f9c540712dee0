// src/dot.rs
//! Dot-path access over nested JSON objects
//!
//! `a.b.c` addresses `{"a": {"b": {"c": ...}}}`. Array elements are
//! addressed by index (`list.0`). Key order is insertion order.

use std::cmp::Ordering;

use serde_json::{Map, Value};

/// A JSON object addressed by dot-separated paths
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DotMap {
    root: Map<String, Value>,
}

/// Shorthand for [`DotMap::new`]
pub fn dot_map(value: impl Into<Value>) -> DotMap {
    DotMap::new(value)
}

impl DotMap {
    pub fn new(value: impl Into<Value>) -> Self {
        let mut map = Self::default();
        map.import(value);
        map
    }

    /// Replace the contents.
    ///
    /// Objects are taken as they are, `null` empties the map, arrays become
    /// index-keyed objects and any other scalar is stored under `"0"`.
    pub fn import(&mut self, value: impl Into<Value>) {
        self.root = match value.into() {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => index_keyed(other),
        };
    }

    /// Copy another map's contents
    pub fn import_from(&mut self, other: &DotMap) {
        self.root = other.root.clone();
    }

    pub fn all(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.root
    }

    /// True when every segment resolves to a non-null value
    pub fn has(&self, path: &str) -> bool {
        self.lookup(path).is_some()
    }

    /// Resolve `path`, or return `default` if any segment is missing or null.
    /// An empty path returns the whole map.
    pub fn get(&self, path: &str, default: Value) -> Value {
        if path.is_empty() {
            return Value::Object(self.root.clone());
        }
        self.lookup(path).cloned().unwrap_or(default)
    }

    pub fn get_ref(&self, path: &str) -> Option<&Value> {
        self.lookup(path)
    }

    /// Merge `value` in at `path`, creating intermediate objects.
    ///
    /// Existing objects are merged key by key. Where a leaf already exists
    /// the old and new values are collected into an array. An existing array
    /// receiving keys is turned into an index-keyed object first. With `sort_keys`
    /// every object in the map is key-sorted afterwards.
    ///
    /// Returns `false` (and changes nothing) for an empty path.
    pub fn set(&mut self, path: &str, value: impl Into<Value>, sort_keys: bool) -> bool {
        if path.is_empty() {
            return false;
        }

        let mut source = value.into();
        for key in segments(path).rev() {
            source = Value::Object(Map::from_iter([(key.to_string(), source)]));
        }
        let Value::Object(source) = source else {
            return false;
        };

        merge_maps(&mut self.root, source);
        if sort_keys {
            sort_map(&mut self.root);
        }
        true
    }

    /// Every intermediate and leaf path, depth first, in key order
    pub fn dot_keys(&self) -> DotKeys<'_> {
        DotKeys {
            stack: vec![Frame {
                prefix: None,
                children: Children::Object(self.root.iter()),
            }],
        }
    }

    fn lookup(&self, path: &str) -> Option<&Value> {
        let mut keys = segments(path);
        let first = keys.next()?;
        let mut current = self.root.get(first).filter(|v| !v.is_null())?;
        for key in keys {
            current = child(current, key).filter(|v| !v.is_null())?;
        }
        Some(current)
    }
}

impl From<Value> for DotMap {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

impl From<Map<String, Value>> for DotMap {
    fn from(root: Map<String, Value>) -> Self {
        Self { root }
    }
}

fn segments(path: &str) -> std::str::Split<'_, char> {
    path.trim_matches('.').split('.')
}

fn child<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    }
}

fn merge_maps(dest: &mut Map<String, Value>, source: Map<String, Value>) {
    for (key, incoming) in source {
        match dest.get_mut(&key) {
            Some(existing) => merge_value(existing, incoming),
            None => {
                dest.insert(key, incoming);
            }
        }
    }
}

fn merge_value(existing: &mut Value, incoming: Value) {
    match (existing, incoming) {
        (Value::Object(dest), Value::Object(source)) => merge_maps(dest, source),
        (Value::Object(dest), other) => {
            let index = next_index(dest);
            dest.insert(index.to_string(), other);
        }
        (Value::Array(dest), Value::Array(source)) => dest.extend(source),
        (slot, Value::Object(source)) => {
            let mut merged = index_keyed(std::mem::take(slot));
            merge_maps(&mut merged, source);
            *slot = Value::Object(merged);
        }
        (Value::Array(dest), other) => dest.push(other),
        (slot, Value::Array(source)) => {
            let old = std::mem::take(slot);
            let mut items = vec![old];
            items.extend(source);
            *slot = Value::Array(items);
        }
        (slot, other) => {
            let old = std::mem::take(slot);
            *slot = Value::Array(vec![old, other]);
        }
    }
}

/// Arrays keyed by position; any other value becomes `{"0": value}`
fn index_keyed(value: Value) -> Map<String, Value> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        other => Map::from_iter([("0".to_string(), other)]),
    }
}

/// One past the largest numeric key, or 0
fn next_index(map: &Map<String, Value>) -> usize {
    map.keys()
        .filter_map(|k| k.parse::<usize>().ok())
        .max()
        .map_or(0, |max| max + 1)
}

fn sort_map(map: &mut Map<String, Value>) {
    let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
    for (key, mut value) in entries {
        sort_value(&mut value);
        map.insert(key, value);
    }
}

/// Integer keys first in numeric order, then the rest as strings
fn compare_keys(a: &str, b: &str) -> Ordering {
    match (int_key(a), int_key(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// `"7"` and `"-3"` are integer keys, `"07"` and `"+3"` are not
fn int_key(key: &str) -> Option<i64> {
    key.parse::<i64>()
        .ok()
        .filter(|n| n.to_string() == key)
}

fn sort_value(value: &mut Value) {
    match value {
        Value::Object(map) => sort_map(map),
        Value::Array(items) => items.iter_mut().for_each(sort_value),
        _ => {}
    }
}

/// Lazy pre-order walk over a [`DotMap`]'s paths. Not restartable: call
/// [`DotMap::dot_keys`] again for a fresh walk.
pub struct DotKeys<'a> {
    stack: Vec<Frame<'a>>,
}

struct Frame<'a> {
    prefix: Option<String>,
    children: Children<'a>,
}

enum Children<'a> {
    Object(serde_json::map::Iter<'a>),
    Array(std::iter::Enumerate<std::slice::Iter<'a, Value>>),
}

impl<'a> Children<'a> {
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Object(map) if !map.is_empty() => Some(Children::Object(map.iter())),
            Value::Array(items) if !items.is_empty() => {
                Some(Children::Array(items.iter().enumerate()))
            }
            _ => None,
        }
    }

    fn next_child(&mut self) -> Option<(String, &'a Value)> {
        match self {
            Children::Object(iter) => iter.next().map(|(k, v)| (k.clone(), v)),
            Children::Array(iter) => iter.next().map(|(i, v)| (i.to_string(), v)),
        }
    }
}

impl Iterator for DotKeys<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let frame = self.stack.last_mut()?;
            let Some((key, value)) = frame.children.next_child() else {
                self.stack.pop();
                continue;
            };

            let path = match &frame.prefix {
                Some(prefix) => format!("{prefix}.{key}"),
                None => key,
            };
            if let Some(children) = Children::of(value) {
                self.stack.push(Frame {
                    prefix: Some(path.clone()),
                    children,
                });
            }
            return Some(path);
        }
    }
}

impl std::iter::FusedIterator for DotKeys<'_> {}
