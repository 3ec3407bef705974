//! JSON loading and output for timeline records

use crate::resolver::index_or_sentinel;
use crate::{ClearTime, Error, Interval, PlaybackState, Record, Result, Timeline};
use serde::ser::{Serialize, SerializeStruct, Serializer};
use serde_json::Value;
use std::io::Read;

/// Converts a JSON value into records.
///
/// Anything other than an array yields an empty sequence. Array elements are
/// read field by field: a field that is absent, `null` or not a number is
/// treated as missing, so non-object elements become records with no fields.
pub fn records_from_value(value: &Value) -> Vec<Record> {
    match value.as_array() {
        Some(items) => items.iter().map(record_from_value).collect(),
        None => Vec::new(),
    }
}

fn record_from_value(item: &Value) -> Record {
    let field = |name: &str| item.get(name).and_then(Value::as_f64);
    Record {
        timestamp: field("timestamp"),
        clear: field("clear").map(ClearTime::from),
    }
}

impl From<Value> for Record {
    fn from(value: Value) -> Self {
        record_from_value(&value)
    }
}

/// Parses records from JSON text
pub fn records_from_str(text: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(text)?;
    Ok(records_from_value(&value))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Timeline {
    /// Builds a timeline from a JSON value, which must be an array
    pub fn from_value(value: &Value) -> Result<Self> {
        if !value.is_array() {
            return Err(Error::NotASequence(kind_of(value)));
        }
        Ok(Self::new(records_from_value(value)))
    }

    /// Reads a timeline from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    /// Reads a timeline from a JSON reader
    pub fn read<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(&value)
    }
}

impl Serialize for Interval {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Interval", 3)?;
        state.serialize_field("cleared", &self.cleared)?;
        state.serialize_field("first", &index_or_sentinel(self.first))?;
        state.serialize_field("last", &index_or_sentinel(self.last))?;
        state.end()
    }
}

impl Serialize for PlaybackState {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PlaybackState", 3)?;
        state.serialize_field("index", &index_or_sentinel(self.index))?;
        state.serialize_field("interval", &self.interval)?;
        state.serialize_field("enabled", &self.enabled)?;
        state.end()
    }
}
