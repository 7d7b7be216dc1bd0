//! Canonical rebuild of a decoded registry document.

use crate::parser::error::NormalizeError;
use serde_yaml::Mapping;
use serde_yaml::Value;

/// Rebuilds a decoded YAML document bottom-up into its canonical form.
///
/// Strings pass through unchanged; sequences are rebuilt element by element
/// in their original order; mapping values are rebuilt recursively while
/// keys are copied untouched, preserving the mapping's insertion order. Any
/// other value (null, booleans, numbers, tagged values) is returned as-is
/// without recursion.
///
/// The rebuild never invents or drops entries, so the output is
/// structurally equal to the input and a second pass is a no-op. Errors
/// reported for individual subtrees are concatenated into the returned
/// list.
pub fn normalize(input: Value) -> (Value, Vec<NormalizeError>) {
    let mut errs = Vec::new();

    let output = match input {
        Value::String(scalar) => Value::String(scalar),
        Value::Sequence(items) => {
            let mut sequence = Vec::with_capacity(items.len());
            for item in items {
                let (item, item_errs) = normalize(item);
                sequence.push(item);
                errs.extend(item_errs);
            }
            Value::Sequence(sequence)
        }
        Value::Mapping(entries) => {
            let mut mapping = Mapping::with_capacity(entries.len());
            for (key, value) in entries {
                let (value, entry_errs) = normalize(value);
                mapping.insert(key, value);
                errs.extend(entry_errs);
            }
            Value::Mapping(mapping)
        }
        other => other,
    };

    (output, errs)
}
