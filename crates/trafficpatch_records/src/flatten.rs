//! Walks the records document into flat records.

use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use crate::record::FlatRecord;
use crate::value::RecordValue;

/// A non-mapping node and the keys leading to it.
pub type Leaf<'a> = (Vec<String>, &'a Value);

/// Collect every non-mapping node of `document` with its key path.
///
/// Uses an explicit stack, so document depth is bounded by memory rather than
/// by the call stack. `serde_yaml::Mapping` keeps insertion order, and leaves
/// come out in document order.
///
/// Only a mapping root has leaves: an empty document (null), a scalar or a
/// sequence at the root produces nothing.
pub fn extract_records(document: &Value) -> Vec<Leaf<'_>> {
    let root = match document {
        Value::Mapping(root) => root,
        Value::Null => return Vec::new(),
        _ => {
            warn!("Records document root is not a mapping, nothing to flatten");
            return Vec::new();
        }
    };

    let mut leaves = Vec::new();
    let mut stack: Vec<Leaf<'_>> = Vec::new();
    push_children(&mut stack, &[], root);

    while let Some((path, node)) = stack.pop() {
        match node {
            Value::Mapping(mapping) => push_children(&mut stack, &path, mapping),
            _ => leaves.push((path, node)),
        }
    }

    leaves
}

/// Push children in reverse so the first key is popped first.
fn push_children<'a>(stack: &mut Vec<Leaf<'a>>, path: &[String], mapping: &'a Mapping) {
    let children: Vec<_> = mapping.iter().collect();

    for (key, value) in children.into_iter().rev() {
        let Some(segment) = key_segment(key) else {
            warn!("Skipping records entry under {:?} with unsupported key {:?}", path.join("."), key);
            continue;
        };

        let mut child_path = Vec::with_capacity(path.len() + 1);
        child_path.extend_from_slice(path);
        child_path.push(segment);
        stack.push((child_path, value));
    }
}

fn key_segment(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Flatten `document` into typed records, dropping unsupported leaf shapes.
pub fn flatten(document: &Value) -> Vec<FlatRecord> {
    extract_records(document)
        .into_iter()
        .filter_map(|(path, value)| match RecordValue::infer(value) {
            Some(value) => Some(FlatRecord::new(path, value)),
            None => {
                debug!("Skipping {} with unsupported value {:?}", path.join("."), value);
                None
            }
        })
        .collect()
}
