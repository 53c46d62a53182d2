//! Co-star frequency filter over cast lists.
//!
//! Heuristic: the lookup feeding this selects titles whose cast text contains each actor name
//! as a substring, so an actor whose name is part of another's ("Ann Lee" in "Ann Leeds")
//! can pull in titles they are not in, and exact cast membership is never checked.

use serde_json::Value;
use std::collections::HashMap;

/// Separator between names in a cast listing.
pub const CAST_SEPARATOR: &str = ", ";

/// Names seen in strictly more than `threshold` of `casts`, excluding the two queried actors.
/// Names are trimmed; output follows first appearance.
pub fn frequent_costars<S: AsRef<str>>(casts: &[S], first: &str, second: &str, threshold: usize) -> Vec<String> {
    let excluded = [first.trim(), second.trim()];
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for cast in casts {
        for name in cast.as_ref().split(CAST_SEPARATOR).map(str::trim) {
            if name.is_empty() {
                continue;
            }
            let n = counts.entry(name).or_insert(0);
            if *n == 0 {
                order.push(name);
            }
            *n += 1;
        }
    }
    order
        .into_iter()
        .filter(|name| counts[name] > threshold && !excluded.contains(name))
        .map(str::to_string)
        .collect()
}

/// Pull the cast text out of single-column rows; NULL casts are skipped.
pub fn cast_lists(rows: Vec<Vec<Value>>) -> Vec<String> {
    rows.into_iter()
        .filter_map(|row| match row.into_iter().next() {
            Some(Value::String(s)) => Some(s),
            _ => None,
        })
        .collect()
}
