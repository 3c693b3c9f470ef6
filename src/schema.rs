//! Widget Option Schemas
//!
//! The fixed option set of each widget kind. The options form is generated
//! from these descriptors.

use crate::models::{OptionValue, WidgetKind, WidgetOptions, WidgetRecord};

/// Form control used for an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionInput {
    Toggle,
    Text,
    TextArea,
    Number,
}

/// Default value of an option
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptionDefault {
    Bool(bool),
    Number(f64),
    Text(&'static str),
}

impl OptionDefault {
    pub fn to_value(self) -> OptionValue {
        match self {
            OptionDefault::Bool(b) => OptionValue::Bool(b),
            OptionDefault::Number(n) => OptionValue::number(n),
            OptionDefault::Text(s) => OptionValue::Text(s.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub input: OptionInput,
    pub default: OptionDefault,
}

const fn spec(
    key: &'static str,
    label: &'static str,
    input: OptionInput,
    default: OptionDefault,
) -> OptionSpec {
    OptionSpec { key, label, input, default }
}

const TIME_OPTIONS: &[OptionSpec] = &[
    spec("12h", "12-hour clock", OptionInput::Toggle, OptionDefault::Bool(false)),
    spec("seconds", "Show seconds", OptionInput::Toggle, OptionDefault::Bool(true)),
];

const DATE_OPTIONS: &[OptionSpec] = &[
    spec("weekday", "Show weekday", OptionInput::Toggle, OptionDefault::Bool(true)),
    spec("year", "Show year", OptionInput::Toggle, OptionDefault::Bool(true)),
];

const IP_OPTIONS: &[OptionSpec] = &[
    spec("show_ip", "Show IP address", OptionInput::Toggle, OptionDefault::Bool(true)),
    spec("show_location", "Show location", OptionInput::Toggle, OptionDefault::Bool(true)),
];

const STATIC_TEXT_OPTIONS: &[OptionSpec] =
    &[spec("text", "Text", OptionInput::Text, OptionDefault::Text(""))];

const DYNAMIC_TEXT_OPTIONS: &[OptionSpec] =
    &[spec("text", "Text", OptionInput::TextArea, OptionDefault::Text(""))];

const SPACE_OPTIONS: &[OptionSpec] =
    &[spec("height", "Height (px)", OptionInput::Number, OptionDefault::Number(32.0))];

const GREETING_OPTIONS: &[OptionSpec] =
    &[spec("name", "Name", OptionInput::Text, OptionDefault::Text(""))];

const CSS_OPTIONS: &[OptionSpec] =
    &[spec("css", "Stylesheet", OptionInput::TextArea, OptionDefault::Text(""))];

/// Option descriptors for `kind`
pub fn options_for(kind: WidgetKind) -> &'static [OptionSpec] {
    match kind {
        WidgetKind::Generic => &[],
        WidgetKind::Time => TIME_OPTIONS,
        WidgetKind::Date => DATE_OPTIONS,
        WidgetKind::Ip => IP_OPTIONS,
        WidgetKind::StaticText => STATIC_TEXT_OPTIONS,
        WidgetKind::DynamicText => DYNAMIC_TEXT_OPTIONS,
        WidgetKind::Space => SPACE_OPTIONS,
        WidgetKind::Greeting => GREETING_OPTIONS,
        WidgetKind::Css => CSS_OPTIONS,
    }
}

pub fn default_options(kind: WidgetKind) -> WidgetOptions {
    options_for(kind)
        .iter()
        .map(|spec| (spec.key.to_string(), Some(spec.default.to_value())))
        .collect()
}

impl WidgetRecord {
    /// A fresh record with every option at its default
    pub fn new_default(kind: WidgetKind) -> Self {
        Self { options: default_options(kind), ..Self::new(kind) }
    }
}

/// Parse raw form input into the value stored for `spec`
pub fn parse_input(spec: &OptionSpec, raw: &str) -> Option<OptionValue> {
    match spec.input {
        OptionInput::Toggle => Some(OptionValue::Bool(raw == "true" || raw == "on")),
        OptionInput::Number => raw.trim().parse::<f64>().ok().map(OptionValue::number),
        OptionInput::Text | OptionInput::TextArea => Some(OptionValue::Text(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_default_time_widget() {
        let record = WidgetRecord::new_default(WidgetKind::Time);
        assert!(!record.flag("12h", true));
        assert!(record.flag("seconds", false));
        assert_eq!(record.options.len(), 2);
    }

    #[test]
    fn test_generic_has_no_options() {
        assert!(options_for(WidgetKind::Generic).is_empty());
        assert!(WidgetRecord::new_default(WidgetKind::Generic).options.is_empty());
    }

    #[test]
    fn test_option_keys_unique_per_kind() {
        for kind in WidgetKind::ALL {
            let specs = options_for(kind);
            for (i, a) in specs.iter().enumerate() {
                assert!(specs[i + 1..].iter().all(|b| b.key != a.key), "{:?}", kind);
            }
        }
    }

    #[test]
    fn test_parse_input() {
        let height = &SPACE_OPTIONS[0];
        assert_eq!(parse_input(height, " 64 ").and_then(|v| v.as_f64()), Some(64.0));
        assert_eq!(parse_input(height, "tall"), None);

        let toggle = &TIME_OPTIONS[0];
        assert_eq!(parse_input(toggle, "true"), Some(OptionValue::Bool(true)));
        assert_eq!(parse_input(toggle, ""), Some(OptionValue::Bool(false)));

        let text = &GREETING_OPTIONS[0];
        assert_eq!(parse_input(text, "Ada"), Some(OptionValue::Text("Ada".to_string())));
    }
}
