use serde::Deserialize;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// A scalar carried by a literal or an insert cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CqnValue {
    /// `null` (absent value)
    Null,
    Bool(bool),
    /// Kept as the JSON number so it renders in its plain text form.
    Number(serde_json::Number),
    Text(String),
}

impl CqnValue {
    /// Convert a JSON scalar; objects and arrays have no literal form.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Null => Some(Self::Null),
            serde_json::Value::Bool(b) => Some(Self::Bool(*b)),
            serde_json::Value::Number(n) => Some(Self::Number(n.clone())),
            serde_json::Value::String(s) => Some(Self::Text(s.clone())),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => None,
        }
    }
}

impl From<bool> for CqnValue {
    fn from(b: bool) -> Self {
        CqnValue::Bool(b)
    }
}

impl From<i64> for CqnValue {
    fn from(n: i64) -> Self {
        CqnValue::Number(n.into())
    }
}

impl From<&str> for CqnValue {
    fn from(s: &str) -> Self {
        CqnValue::Text(s.to_string())
    }
}

impl From<String> for CqnValue {
    fn from(s: String) -> Self {
        CqnValue::Text(s)
    }
}

/// Ordered `name -> value` pairs, in the order the keys appear in the input.
///
/// Used for insert entries and UPDATE set-maps, where the emitted column
/// order must follow the caller's key order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Fields<T>(pub Vec<(String, T)>);

impl<T> Fields<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Fields<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldsVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for FieldsVisitor<T> {
            type Value = Fields<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of column names")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut fields = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    fields.push((key, value));
                }
                Ok(Fields(fields))
            }
        }

        deserializer.deserialize_map(FieldsVisitor(PhantomData))
    }
}

/// Reject a shape during untagged decoding so the next variant is tried.
pub(crate) fn shape_mismatch<E: de::Error>(expected: &str) -> E {
    E::custom(format!("not {}", expected))
}
