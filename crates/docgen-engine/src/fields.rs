//! Form field values collected from the user

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One form field. Forms send text for most inputs and booleans for
/// checkboxes; numbers show up for amounts such as `feeLimit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Flag(bool),
    Number(serde_json::Number),
    Text(String),
}

impl FieldValue {
    /// Trimmed text of the value, or `None` when it is blank or not textual
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then_some(Cow::Borrowed(trimmed))
            }
            FieldValue::Number(n) => Some(Cow::Owned(n.to_string())),
            FieldValue::Flag(_) | FieldValue::Null => None,
        }
    }

    /// Checkbox reading of the value. Text such as "yes" or "false" is
    /// accepted so query-string style input works too.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(s) => match s.trim().to_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Some(true),
                "false" | "no" | "off" | "0" => Some(false),
                _ => None,
            },
            FieldValue::Number(n) => n.as_f64().map(|v| v != 0.0),
            FieldValue::Null => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

/// Field name → value, keyed by the camelCase names the forms use
/// (`requestorName`, `conductDescription`, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldBag(BTreeMap<String, FieldValue>);

impl FieldBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`FieldBag::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Non-blank text for `key`
    pub fn text(&self, key: &str) -> Option<Cow<'_, str>> {
        self.0.get(key).and_then(FieldValue::as_text)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(FieldValue::as_flag)
    }

    pub fn is_filled(&self, key: &str) -> bool {
        self.text(key).is_some()
    }

    /// Every key in `required` that is absent or blank, in the given order
    pub fn missing(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|key| !self.is_filled(key))
            .map(|key| key.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldBag
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = FieldBag::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}
