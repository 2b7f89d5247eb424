//! Fail-fast operators over JSON object maps.
//!
//! The dynamic key/value model is `serde_json`'s object map. Presence is
//! decided by the key alone: an entry holding `null` is present, only an
//! absent key is missing.

use serde_json::{Map, Value};

use crate::errors::StructuralError;
use crate::outcome::Outcome;

/// The object type these operators work over.
pub type JsonObject = Map<String, Value>;

/// Options for [`deep_clone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CloneOptions {
    /// Maximum container nesting the copy will follow before failing.
    pub max_depth: usize,
}

impl Default for CloneOptions {
    fn default() -> Self {
        CloneOptions { max_depth: 10 }
    }
}

/// The value stored under `key`, or a missing-key failure.
pub fn prop(obj: &JsonObject, key: &str) -> Outcome<Value, StructuralError> {
    match obj.get(key) {
        Some(value) => Outcome::Success(value.clone()),
        None => Outcome::Failure(StructuralError::missing_key(key)),
    }
}

/// A new object holding exactly the named keys; any absent key fails.
pub fn pick(obj: &JsonObject, keys: &[&str]) -> Outcome<JsonObject, StructuralError> {
    let mut picked = JsonObject::new();
    for key in keys {
        match obj.get(*key) {
            Some(value) => {
                picked.insert((*key).to_string(), value.clone());
            }
            None => return Outcome::Failure(StructuralError::missing_key(*key)),
        }
    }
    Outcome::Success(picked)
}

/// A new object without the named keys. Total; unknown keys are ignored.
pub fn omit(obj: &JsonObject, keys: &[&str]) -> JsonObject {
    obj.iter()
        .filter(|(key, _)| !keys.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Walk `path` segment by segment from `root`. An absent segment, or a
/// non-object value mid-walk, fails with the offending position.
pub fn get_path(root: &Value, path: &[&str]) -> Outcome<Value, StructuralError> {
    let mut current = root;
    for (position, segment) in path.iter().enumerate() {
        match current.as_object().and_then(|map| map.get(*segment)) {
            Some(next) => current = next,
            None => return Outcome::Failure(StructuralError::missing_path(*segment, position)),
        }
    }
    Outcome::Success(current.clone())
}

/// Rebuild the object with each value passed through `f`, in map order;
/// the first failure aborts and becomes the result.
pub fn map_values<E, F>(obj: &JsonObject, mut f: F) -> Outcome<JsonObject, E>
where
    F: FnMut(&str, &Value) -> Outcome<Value, E>,
{
    let mut mapped = JsonObject::new();
    for (key, value) in obj {
        match f(key, value) {
            Outcome::Success(next) => {
                mapped.insert(key.clone(), next);
            }
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(mapped)
}

/// Keep the entries whose predicate succeeds with `true`; a predicate
/// failure aborts and becomes the result.
pub fn filter_values<E, F>(obj: &JsonObject, mut pred: F) -> Outcome<JsonObject, E>
where
    F: FnMut(&str, &Value) -> Outcome<bool, E>,
{
    let mut kept = JsonObject::new();
    for (key, value) in obj {
        match pred(key, value) {
            Outcome::Success(true) => {
                kept.insert(key.clone(), value.clone());
            }
            Outcome::Success(false) => {}
            Outcome::Failure(error) => return Outcome::Failure(error),
        }
    }
    Outcome::Success(kept)
}

/// Fold `sources` left to right into one object. A fresh key is inserted
/// as-is; a collision consults `resolver(key, current, incoming)` and a
/// resolver failure aborts the whole merge.
pub fn merge<E, F>(sources: &[&JsonObject], mut resolver: F) -> Outcome<JsonObject, E>
where
    F: FnMut(&str, &Value, &Value) -> Outcome<Value, E>,
{
    let mut merged = JsonObject::new();
    for source in sources {
        for (key, incoming) in source.iter() {
            let resolved = merged
                .get(key)
                .map(|current| resolver(key, current, incoming));
            match resolved {
                Some(Outcome::Success(value)) => {
                    merged.insert(key.clone(), value);
                }
                Some(Outcome::Failure(error)) => {
                    log::debug!("merge aborted at key `{key}`");
                    return Outcome::Failure(error);
                }
                None => {
                    merged.insert(key.clone(), incoming.clone());
                }
            }
        }
    }
    Outcome::Success(merged)
}

/// Fill only the keys absent from `obj` with values from `fallback`.
/// Present keys keep their value, `null` included.
pub fn defaults(obj: &JsonObject, fallback: &JsonObject) -> JsonObject {
    let mut filled = obj.clone();
    for (key, value) in fallback {
        if !filled.contains_key(key) {
            filled.insert(key.clone(), value.clone());
        }
    }
    filled
}

/// A new object without the `null` entries.
pub fn compact(obj: &JsonObject) -> JsonObject {
    obj.iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Structural deep copy with a nesting limit. Each object or array level
/// counts one depth; crossing `options.max_depth` fails with
/// `on_depth_exceeded(offending_depth)` instead of truncating.
pub fn deep_clone<E, F>(
    value: &Value,
    options: &CloneOptions,
    on_depth_exceeded: F,
) -> Outcome<Value, E>
where
    F: Fn(usize) -> E,
{
    clone_at_depth(value, 0, options.max_depth, &on_depth_exceeded)
}

fn clone_at_depth<E, F>(
    value: &Value,
    depth: usize,
    max_depth: usize,
    on_depth_exceeded: &F,
) -> Outcome<Value, E>
where
    F: Fn(usize) -> E,
{
    match value {
        Value::Object(map) => {
            let level = depth + 1;
            if level > max_depth {
                return Outcome::Failure(on_depth_exceeded(level));
            }
            let mut copied = JsonObject::new();
            for (key, child) in map {
                match clone_at_depth(child, level, max_depth, on_depth_exceeded) {
                    Outcome::Success(cloned) => {
                        copied.insert(key.clone(), cloned);
                    }
                    Outcome::Failure(error) => return Outcome::Failure(error),
                }
            }
            Outcome::Success(Value::Object(copied))
        }
        Value::Array(items) => {
            let level = depth + 1;
            if level > max_depth {
                return Outcome::Failure(on_depth_exceeded(level));
            }
            let mut copied = Vec::with_capacity(items.len());
            for child in items {
                match clone_at_depth(child, level, max_depth, on_depth_exceeded) {
                    Outcome::Success(cloned) => copied.push(cloned),
                    Outcome::Failure(error) => return Outcome::Failure(error),
                }
            }
            Outcome::Success(Value::Array(copied))
        }
        scalar => Outcome::Success(scalar.clone()),
    }
}

/// The object's keys, in map order.
pub fn keys(obj: &JsonObject) -> Vec<String> {
    obj.keys().cloned().collect()
}

/// The object's values, in map order.
pub fn values(obj: &JsonObject) -> Vec<Value> {
    obj.values().cloned().collect()
}

/// The object's entries as owned pairs, in map order.
pub fn entries(obj: &JsonObject) -> Vec<(String, Value)> {
    obj.iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// True iff `key` is present; an entry holding `null` counts.
pub fn has(obj: &JsonObject, key: &str) -> bool {
    obj.contains_key(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::{failure, success};
    use serde_json::json;

    fn obj(value: Value) -> JsonObject {
        value.as_object().expect("test fixture must be an object").clone()
    }

    #[test]
    fn test_prop_null_is_present() {
        let source = obj(json!({"name": "svc", "owner": null}));
        assert_eq!(prop(&source, "owner"), success(Value::Null));
        assert_eq!(
            prop(&source, "region"),
            failure(StructuralError::missing_key("region"))
        );
    }

    #[test]
    fn test_pick_fails_on_any_absent_key() {
        let source = obj(json!({"a": 1, "b": 2}));
        assert_eq!(pick(&source, &["a"]), success(obj(json!({"a": 1}))));
        assert_eq!(
            pick(&source, &["a", "z"]),
            failure(StructuralError::missing_key("z"))
        );
    }

    #[test]
    fn test_omit_ignores_unknown_keys() {
        let source = obj(json!({"a": 1, "b": 2}));
        assert_eq!(omit(&source, &["b", "z"]), obj(json!({"a": 1})));
        assert_eq!(source, obj(json!({"a": 1, "b": 2})));
    }

    #[test]
    fn test_get_path_walks_nested_objects() {
        let root = json!({"server": {"listen": {"port": 8080}}});
        assert_eq!(
            get_path(&root, &["server", "listen", "port"]),
            success(json!(8080))
        );
    }

    #[test]
    fn test_get_path_reports_offending_segment() {
        let root = json!({"server": {"listen": {"port": 8080}}});
        assert_eq!(
            get_path(&root, &["server", "bind", "port"]),
            failure(StructuralError::missing_path("bind", 1))
        );
        // A scalar mid-walk dead-ends the same way.
        assert_eq!(
            get_path(&root, &["server", "listen", "port", "number"]),
            failure(StructuralError::missing_path("number", 3))
        );
    }

    #[test]
    fn test_map_values_short_circuits() {
        let source = obj(json!({"a": 1, "b": "x", "c": 3}));
        let out = map_values(&source, |key, value| match value.as_i64() {
            Some(n) => success(json!(n * 10)),
            None => failure(format!("`{key}` is not a number")),
        });
        assert_eq!(out, failure("`b` is not a number".to_string()));
        assert_eq!(source, obj(json!({"a": 1, "b": "x", "c": 3})));
    }

    #[test]
    fn test_map_values_rebuilds_object() {
        let source = obj(json!({"a": 1, "b": 2}));
        let out = map_values(&source, |_, value| {
            success::<Value, String>(json!(value.as_i64().unwrap() + 1))
        });
        assert_eq!(out, success(obj(json!({"a": 2, "b": 3}))));
    }

    #[test]
    fn test_filter_values_keeps_passing_entries() {
        let source = obj(json!({"a": 1, "b": 10, "c": 3}));
        let out = filter_values(&source, |_, value| {
            success::<bool, String>(value.as_i64().unwrap() < 5)
        });
        assert_eq!(out, success(obj(json!({"a": 1, "c": 3}))));
    }

    #[test]
    fn test_merge_without_collisions() {
        let left = obj(json!({"a": 1}));
        let right = obj(json!({"b": 2}));
        let out = merge(&[&left, &right], |_, _, _| {
            failure::<Value, String>("no collisions expected".to_string())
        });
        assert_eq!(out, success(obj(json!({"a": 1, "b": 2}))));
    }

    #[test]
    fn test_merge_consults_resolver_on_collision() {
        let left = obj(json!({"count": 1, "name": "a"}));
        let right = obj(json!({"count": 2}));
        let out = merge(&[&left, &right], |_, current, incoming| {
            success::<Value, String>(json!(
                current.as_i64().unwrap() + incoming.as_i64().unwrap()
            ))
        });
        assert_eq!(out, success(obj(json!({"count": 3, "name": "a"}))));
    }

    #[test]
    fn test_merge_resolver_failure_aborts() {
        let left = obj(json!({"mode": "fast"}));
        let right = obj(json!({"mode": "safe"}));
        let out = merge(&[&left, &right], |key, _, _| {
            failure::<Value, String>(format!("conflicting `{key}`"))
        });
        assert_eq!(out, failure("conflicting `mode`".to_string()));
    }

    #[test]
    fn test_defaults_fills_only_absent_keys() {
        let source = obj(json!({"host": "db", "port": null}));
        let fallback = obj(json!({"port": 5432, "timeout": 30}));
        let filled = defaults(&source, &fallback);
        // `port: null` is present and must not be overwritten.
        assert_eq!(
            filled,
            obj(json!({"host": "db", "port": null, "timeout": 30}))
        );
    }

    #[test]
    fn test_compact_drops_null_entries() {
        let source = obj(json!({"a": 1, "b": null, "c": "x"}));
        assert_eq!(compact(&source), obj(json!({"a": 1, "c": "x"})));
        assert_eq!(source, obj(json!({"a": 1, "b": null, "c": "x"})));
    }

    #[test]
    fn test_deep_clone_copies_nested_structure() {
        let source = json!({"a": {"b": [1, 2, {"c": true}]}});
        let out = deep_clone(&source, &CloneOptions::default(), |d| format!("depth {d}"));
        assert_eq!(out, success(source.clone()));
    }

    #[test]
    fn test_deep_clone_fails_past_max_depth() {
        let source = json!({"a": {"b": {"c": 1}}});
        let out = deep_clone(&source, &CloneOptions { max_depth: 1 }, |d| {
            format!("too deep {d}")
        });
        assert_eq!(out, failure("too deep 2".to_string()));
    }

    #[test]
    fn test_deep_clone_counts_arrays_as_levels() {
        let source = json!([[1]]);
        let out = deep_clone(&source, &CloneOptions { max_depth: 1 }, |d| d);
        assert_eq!(out, failure(2));
    }

    #[test]
    fn test_query_helpers() {
        let source = obj(json!({"a": 1, "b": null}));
        assert_eq!(keys(&source), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(values(&source), vec![json!(1), Value::Null]);
        assert_eq!(
            entries(&source),
            vec![("a".to_string(), json!(1)), ("b".to_string(), Value::Null)]
        );
        assert!(has(&source, "b"));
        assert!(!has(&source, "z"));
    }
}
