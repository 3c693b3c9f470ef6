//! Widget Models
//!
//! Data structures persisted in the widgets slot.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Widget kind, stored as its integer tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "u8", into = "u8")]
pub enum WidgetKind {
    #[default]
    Generic,
    Time,
    Date,
    Ip,
    StaticText,
    DynamicText,
    Space,
    Greeting,
    Css,
}

impl WidgetKind {
    /// Every kind in tag order
    pub const ALL: [WidgetKind; 9] = [
        WidgetKind::Generic,
        WidgetKind::Time,
        WidgetKind::Date,
        WidgetKind::Ip,
        WidgetKind::StaticText,
        WidgetKind::DynamicText,
        WidgetKind::Space,
        WidgetKind::Greeting,
        WidgetKind::Css,
    ];

    pub fn tag(&self) -> u8 {
        match self {
            WidgetKind::Generic => 0,
            WidgetKind::Time => 1,
            WidgetKind::Date => 2,
            WidgetKind::Ip => 3,
            WidgetKind::StaticText => 4,
            WidgetKind::DynamicText => 5,
            WidgetKind::Space => 6,
            WidgetKind::Greeting => 7,
            WidgetKind::Css => 8,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.tag() == tag)
    }

    /// Human readable name for selectors
    pub fn label(&self) -> &'static str {
        match self {
            WidgetKind::Generic => "Generic",
            WidgetKind::Time => "Clock",
            WidgetKind::Date => "Date",
            WidgetKind::Ip => "IP / Location",
            WidgetKind::StaticText => "Text",
            WidgetKind::DynamicText => "Editable text",
            WidgetKind::Space => "Spacer",
            WidgetKind::Greeting => "Greeting",
            WidgetKind::Css => "Custom CSS",
        }
    }
}

impl TryFrom<u8> for WidgetKind {
    type Error = UnknownKind;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        WidgetKind::from_tag(tag).ok_or(UnknownKind(tag))
    }
}

impl From<WidgetKind> for u8 {
    fn from(kind: WidgetKind) -> u8 {
        kind.tag()
    }
}

/// Tag outside the known widget kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownKind(pub u8);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown widget type {}", self.0)
    }
}

/// A single option value. `null` is represented by `None` in [`WidgetOptions`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

impl OptionValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            // Older saves stored flags as text
            OptionValue::Text(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            OptionValue::Number(_) => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OptionValue::Number(n) => n.as_f64(),
            OptionValue::Text(s) => s.trim().parse().ok(),
            OptionValue::Bool(_) => None,
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            OptionValue::Bool(b) => b.to_string(),
            OptionValue::Number(n) => n.to_string(),
            OptionValue::Text(s) => s.clone(),
        }
    }

    /// Number value from an `f64`, falling back to text for NaN/inf
    pub fn number(value: f64) -> Self {
        match serde_json::Number::from_f64(value) {
            Some(n) => OptionValue::Number(n),
            None => OptionValue::Text(value.to_string()),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value.into())
    }
}

/// Option name -> value. Shape is interpreted per kind, never validated here.
pub type WidgetOptions = BTreeMap<String, Option<OptionValue>>;

/// Persisted widget record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetRecord {
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    #[serde(default)]
    pub options: WidgetOptions,
}

impl WidgetRecord {
    pub fn new(kind: WidgetKind) -> Self {
        Self { kind, options: WidgetOptions::new() }
    }

    #[cfg(test)]
    pub fn with_option(mut self, key: &str, value: impl Into<OptionValue>) -> Self {
        self.options.insert(key.to_string(), Some(value.into()));
        self
    }

    pub fn option(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key).and_then(|v| v.as_ref())
    }

    pub fn flag(&self, key: &str, default: bool) -> bool {
        self.option(key).and_then(OptionValue::as_bool).unwrap_or(default)
    }

    pub fn text(&self, key: &str) -> String {
        self.option(key).map(OptionValue::as_text).unwrap_or_default()
    }

    pub fn number(&self, key: &str, default: f64) -> f64 {
        self.option(key).and_then(OptionValue::as_f64).unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_integer() {
        let record = WidgetRecord::new(WidgetKind::Date);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"type":2,"options":{}}"#);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let parsed: Result<WidgetRecord, _> = serde_json::from_str(r#"{"type":42,"options":{}}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_option_value_variants() {
        let json = r#"{"type":1,"options":{"12h":true,"size":14,"label":"x","gone":null}}"#;
        let record: WidgetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, WidgetKind::Time);
        assert_eq!(record.option("12h"), Some(&OptionValue::Bool(true)));
        assert_eq!(record.number("size", 0.0), 14.0);
        assert_eq!(record.text("label"), "x");
        assert_eq!(record.options.get("gone"), Some(&None));
        assert_eq!(record.option("gone"), None);
    }

    #[test]
    fn test_text_flag_is_read_as_bool() {
        let record: WidgetRecord =
            serde_json::from_str(r#"{"type":1,"options":{"12h":"true"}}"#).unwrap();
        assert!(record.flag("12h", false));
        assert!(record.flag("missing", true));
    }

    #[test]
    fn test_missing_options_defaults_to_empty() {
        let record: WidgetRecord = serde_json::from_str(r#"{"type":6}"#).unwrap();
        assert_eq!(record, WidgetRecord::new(WidgetKind::Space));
    }
}
