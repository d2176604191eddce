use serde_json::{Map, Value};
use time::OffsetDateTime;

use super::date::parse_start_date;

/// `start_date` as it arrived, tagged when the record is built
#[derive(Debug, Clone, Default, PartialEq)]
pub enum StartDate {
    #[default]
    Missing,
    /// Native date value, formatted as-is
    Date(OffsetDateTime),
    /// Text still to be parsed
    Text(String),
    /// Any other payload type; never renders
    Other,
}

impl StartDate {
    pub fn is_missing(&self) -> bool {
        matches!(self, StartDate::Missing)
    }

    /// Resolve to a point in time, parsing text permissively
    pub fn resolve(&self) -> Option<OffsetDateTime> {
        match self {
            StartDate::Date(date) => Some(*date),
            StartDate::Text(text) => parse_start_date(text),
            StartDate::Missing | StartDate::Other => None,
        }
    }
}

impl From<OffsetDateTime> for StartDate {
    fn from(date: OffsetDateTime) -> Self {
        StartDate::Date(date)
    }
}

impl From<&Value> for StartDate {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => StartDate::Missing,
            Value::String(text) => StartDate::Text(text.clone()),
            _ => StartDate::Other,
        }
    }
}

/// A single event as delivered by the events API.
///
/// Text fields keep whatever string arrived, including empty ones; the
/// accessors treat empty text as absent. A `null` value reads as absent too,
/// but its key is kept in `extra` and still counts toward the record's size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventRecord {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub nickname: Option<String>,
    pub vertical: Option<String>,
    pub start_date: StartDate,
    pub website: Option<String>,
    pub event_status: Option<String>,
    /// Keys the listing does not interpret, and keys that arrived as `null`
    pub extra: Map<String, Value>,
}

const TEXT_FIELDS: [&str; 7] = [
    "city",
    "state",
    "country",
    "nickname",
    "vertical",
    "website",
    "event_status",
];

fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

impl EventRecord {
    pub fn city(&self) -> Option<&str> {
        present(&self.city)
    }

    pub fn state(&self) -> Option<&str> {
        present(&self.state)
    }

    pub fn country(&self) -> Option<&str> {
        present(&self.country)
    }

    pub fn nickname(&self) -> Option<&str> {
        present(&self.nickname)
    }

    pub fn vertical(&self) -> Option<&str> {
        present(&self.vertical)
    }

    pub fn website(&self) -> Option<&str> {
        present(&self.website)
    }

    pub fn event_status(&self) -> Option<&str> {
        present(&self.event_status)
    }

    pub fn with_start_date(mut self, start_date: impl Into<StartDate>) -> Self {
        self.start_date = start_date.into();
        self
    }

    /// Number of keys the record carries, known and unknown alike
    pub fn entry_count(&self) -> usize {
        let text = [
            &self.city,
            &self.state,
            &self.country,
            &self.nickname,
            &self.vertical,
            &self.website,
            &self.event_status,
        ]
        .iter()
        .filter(|field| field.is_some())
        .count();
        let date = usize::from(!self.start_date.is_missing());
        text + date + self.extra.len()
    }

    /// Raw text of a known field, empty strings included
    pub(crate) fn text_field(&self, name: &str) -> Option<&Option<String>> {
        match name {
            "city" => Some(&self.city),
            "state" => Some(&self.state),
            "country" => Some(&self.country),
            "nickname" => Some(&self.nickname),
            "vertical" => Some(&self.vertical),
            "website" => Some(&self.website),
            "event_status" => Some(&self.event_status),
            _ => None,
        }
    }

    fn text_field_mut(&mut self, name: &str) -> Option<&mut Option<String>> {
        match name {
            "city" => Some(&mut self.city),
            "state" => Some(&mut self.state),
            "country" => Some(&mut self.country),
            "nickname" => Some(&mut self.nickname),
            "vertical" => Some(&mut self.vertical),
            "website" => Some(&mut self.website),
            "event_status" => Some(&mut self.event_status),
            _ => None,
        }
    }
}

impl From<&Value> for EventRecord {
    fn from(value: &Value) -> Self {
        let mut record = EventRecord::default();
        let Value::Object(map) = value else {
            return record;
        };

        for (key, value) in map {
            if value.is_null() {
                record.extra.insert(key.clone(), Value::Null);
                continue;
            }
            if key == "start_date" {
                record.start_date = StartDate::from(value);
                continue;
            }
            if TEXT_FIELDS.contains(&key.as_str()) {
                if let Some(text) = coerce_text(value) {
                    if let Some(slot) = record.text_field_mut(key) {
                        *slot = Some(text);
                    }
                    continue;
                }
            }
            record.extra.insert(key.clone(), value.clone());
        }

        record
    }
}

impl From<Value> for EventRecord {
    fn from(value: Value) -> Self {
        EventRecord::from(&value)
    }
}
