//! Result shaping: raw row tuples to ordered, named JSON records.

use crate::model::{FieldKind, OutputSchema};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// One output record. Keys serialize in schema order.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|(k, _)| *k)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Remove embedded line breaks; the surrounding text is joined, not spaced.
pub fn strip_line_breaks(s: &str) -> String {
    s.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

fn shape_row(schema: OutputSchema, row: Vec<Value>) -> Record {
    let mut values = row.into_iter();
    let fields = schema
        .fields()
        .iter()
        .map(|f| {
            let v = values.next().unwrap_or(Value::Null);
            let v = match (f.kind, v) {
                (FieldKind::Text, Value::String(s)) => Value::String(strip_line_breaks(&s)),
                (_, v) => v,
            };
            (f.name, v)
        })
        .collect();
    Record { fields }
}

/// Shape every row. Zero rows give an empty list.
pub fn shape_many(schema: OutputSchema, rows: Vec<Vec<Value>>) -> Vec<Record> {
    rows.into_iter().map(|r| shape_row(schema, r)).collect()
}

/// Shape the first row, if any. Callers turn `None` into their not-found payload.
pub fn shape_one(schema: OutputSchema, rows: Vec<Vec<Value>>) -> Option<Record> {
    rows.into_iter().next().map(|r| shape_row(schema, r))
}
