//! Conversions between the value graph and other representations

use serde_json::{Map as JsonMap, Number, Value as JsonValue};

use super::{Node, Value, ValueKind};
use crate::error::{RefError, RefResult};
use crate::path::{Key, Location};

impl From<JsonValue> for Value {
    fn from(json: JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(flag) => Value::Bool(flag),
            JsonValue::Number(number) => Value::Number(number),
            JsonValue::String(text) => Value::String(text),
            JsonValue::Array(items) => Value::Container(Node::sequence_from(
                items.into_iter().map(Value::from).collect(),
            )),
            JsonValue::Object(members) => Value::Container(Node::mapping_from(
                members.into_iter().map(|(k, v)| (k, Value::from(v))),
            )),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::String(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::String(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(number: $ty) -> Self {
                    Value::Number(Number::from(number))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<f64> for Value {
    /// Non-finite floats have no number representation and become [`Value::Null`]
    fn from(number: f64) -> Self {
        Number::from_f64(number).map_or(Value::Null, Value::Number)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Value::from(f64::from(number))
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Value::Container(node)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Container(Node::sequence_from(values))
    }
}

impl Value {
    /// Snapshot this value into a JSON tree
    ///
    /// A container reachable from several places is exported once per place.
    ///
    /// # Errors
    ///
    /// Returns [`RefError::Cycle`] if a container is reachable from itself.
    pub fn to_json(&self) -> RefResult<JsonValue> {
        let mut ancestors = Vec::new();
        let mut location = Location::root();
        export(self, &mut ancestors, &mut location)
    }
}

fn export(
    value: &Value,
    ancestors: &mut Vec<Node>,
    location: &mut Location,
) -> RefResult<JsonValue> {
    let node = match value {
        Value::Null => return Ok(JsonValue::Null),
        Value::Bool(flag) => return Ok(JsonValue::Bool(*flag)),
        Value::Number(number) => return Ok(JsonValue::Number(number.clone())),
        Value::String(text) => return Ok(JsonValue::String(text.clone())),
        Value::Container(node) => node,
    };

    if ancestors.iter().any(|ancestor| ancestor.ptr_eq(node)) {
        return Err(RefError::Cycle {
            location: location.clone(),
        });
    }

    ancestors.push(node.clone());
    let entries = node.entries();
    let mut exported = Vec::with_capacity(entries.len());
    for (key, member) in entries {
        location.push(key.clone());
        let json = export(&member, ancestors, location);
        location.pop();
        exported.push((key, json?));
    }
    ancestors.pop();

    Ok(match node.kind() {
        ValueKind::Sequence => {
            JsonValue::Array(exported.into_iter().map(|(_, json)| json).collect())
        }
        _ => JsonValue::Object(
            exported
                .into_iter()
                .map(|(key, json)| (key_name(key), json))
                .collect::<JsonMap<String, JsonValue>>(),
        ),
    })
}

fn key_name(key: Key) -> String {
    match key {
        Key::Name(name) => name,
        Key::Index(index) => index.to_string(),
    }
}
