//! Path lookup and tree flattening.
//!
//! Both operations are error-free by design: a lookup that runs off the tree
//! (missing key, out-of-range or unparsable index, a scalar in the middle of
//! the path) answers `None` rather than raising anything. They exist to
//! make consuming loosely structured documents cheap and safe.

use crate::value::{Object, Value};

/// Walk `root` by a delimited path and return the value it lands on.
///
/// Segments are split on `/` when the path contains any `/`, otherwise on
/// `.`, so `"a/b.c"` is the two segments `a` and `b.c`. At each step an
/// object segment is looked up as a key (honoring that object's own
/// [`KeyMatch`](crate::value::KeyMatch) policy) and an array segment is
/// parsed as a zero-based index.
///
/// ```
/// use jsonc_core::{parse, get_value_for_path};
///
/// let doc = parse(r#"{"a": {"b": [10, 20]}}"#).unwrap();
/// assert_eq!(get_value_for_path(&doc, "a/b/1").unwrap().as_integer(0), 20);
/// assert!(get_value_for_path(&doc, "a/b/9").is_none());
/// ```
pub fn get_value_for_path<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    if path.contains('/') {
        walk(root, path.split('/'))
    } else {
        walk(root, path.split('.'))
    }
}

/// Walk `root` by an explicit ordered list of segments. Same rules as
/// [`get_value_for_path`], without any delimiter splitting.
pub fn get_value_for_segments<'a>(root: &'a Value, segments: &[&str]) -> Option<&'a Value> {
    walk(root, segments.iter().copied())
}

fn walk<'a, 'p, I>(root: &'a Value, segments: I) -> Option<&'a Value>
where
    I: IntoIterator<Item = &'p str>,
{
    let mut current = root;
    for segment in segments {
        current = match current {
            Value::Object(obj) => obj.get(segment)?,
            Value::Array(arr) => arr.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Flatten a tree into a single-level map keyed by composite path, joining
/// segments with `.`.
///
/// Object entries contribute their literal key, array elements their
/// zero-based index. Every scalar-or-null leaf becomes one entry, in
/// depth-first visit order; intermediate containers are not entered
/// themselves (an empty container contributes nothing).
///
/// ```
/// use jsonc_core::{parse, flatten};
///
/// let doc = parse(r#"{"a": [1, 2]}"#).unwrap();
/// let flat = flatten(&doc);
/// assert_eq!(flat.get("a.0").unwrap().as_integer(0), 1);
/// assert_eq!(flat.get("a.1").unwrap().as_integer(0), 2);
/// ```
pub fn flatten(root: &Value) -> Object {
    flatten_with_separator(root, ".")
}

/// [`flatten`] with a caller-chosen segment separator.
pub fn flatten_with_separator(root: &Value, separator: &str) -> Object {
    let mut out = Object::new();
    collect(root, String::new(), separator, &mut out);
    out
}

fn collect(value: &Value, prefix: String, separator: &str, out: &mut Object) {
    match value {
        Value::Object(obj) => {
            for entry in obj {
                collect(&entry.value, join(&prefix, &entry.key, separator), separator, out);
            }
        }
        Value::Array(arr) => {
            for (index, item) in arr.iter().enumerate() {
                collect(item, join(&prefix, &index.to_string(), separator), separator, out);
            }
        }
        leaf => out.add(prefix, leaf.clone()),
    }
}

fn join(prefix: &str, segment: &str, separator: &str) -> String {
    if prefix.is_empty() {
        segment.to_string()
    } else {
        format!("{prefix}{separator}{segment}")
    }
}
