use std::{cmp::Ordering, fmt, str::FromStr, sync::Arc};

use serde_json::Value;
use time::OffsetDateTime;

use super::{EventRecord, StartDate};

/// Value a record is ordered by.
///
/// Ordering is total: missing values first, then numbers, text and dates.
#[derive(Debug, Clone)]
pub enum SortValue {
    Missing,
    Number(f64),
    Text(String),
    Date(OffsetDateTime),
}

impl SortValue {
    fn rank(&self) -> u8 {
        match self {
            SortValue::Missing => 0,
            SortValue::Number(_) => 1,
            SortValue::Text(_) => 2,
            SortValue::Date(_) => 3,
        }
    }
}

impl Ord for SortValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for SortValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SortValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SortValue {}

impl From<&Value> for SortValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => SortValue::Text(s.clone()),
            Value::Number(n) => n.as_f64().map_or(SortValue::Missing, SortValue::Number),
            Value::Bool(b) => SortValue::Text(b.to_string()),
            Value::Null | Value::Array(_) | Value::Object(_) => SortValue::Missing,
        }
    }
}

impl EventRecord {
    /// Read `field` for sorting.
    ///
    /// `start_date` resolves to a date when it parses, so text dates in
    /// different shapes still order chronologically.
    pub fn sort_value(&self, field: &str) -> SortValue {
        if field == "start_date" {
            return match self.start_date.resolve() {
                Some(date) => SortValue::Date(date),
                None => match &self.start_date {
                    StartDate::Text(text) => SortValue::Text(text.clone()),
                    _ => SortValue::Missing,
                },
            };
        }

        match self.text_field(field) {
            Some(Some(text)) => SortValue::Text(text.clone()),
            Some(None) => SortValue::Missing,
            None => self
                .extra
                .get(field)
                .map_or(SortValue::Missing, SortValue::from),
        }
    }
}

type KeyFn = dyn Fn(&EventRecord) -> SortValue + Send + Sync;

/// What to sort events by: a field name or a key-extraction function
#[derive(Clone)]
pub enum SortKey {
    Field(String),
    With(Arc<KeyFn>),
}

impl SortKey {
    pub fn field(name: impl Into<String>) -> Self {
        SortKey::Field(name.into())
    }

    pub fn with<F>(key: F) -> Self
    where
        F: Fn(&EventRecord) -> SortValue + Send + Sync + 'static,
    {
        SortKey::With(Arc::new(key))
    }

    pub fn extract(&self, event: &EventRecord) -> SortValue {
        match self {
            SortKey::Field(name) => event.sort_value(name),
            SortKey::With(key) => key(event),
        }
    }

    /// Same field name, or the very same function
    pub fn same_as(&self, other: &SortKey) -> bool {
        match (self, other) {
            (SortKey::Field(a), SortKey::Field(b)) => a == b,
            (SortKey::With(a), SortKey::With(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::field("city")
    }
}

impl From<&str> for SortKey {
    fn from(name: &str) -> Self {
        SortKey::field(name)
    }
}

impl fmt::Debug for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Field(name) => f.debug_tuple("Field").field(name).finish(),
            SortKey::With(_) => f.write_str("With(<fn>)"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn reverse(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("invalid sort direction: {0}")]
pub struct InvalidDirection(String);

impl FromStr for SortDirection {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "asc" => Ok(SortDirection::Ascending),
            "-1" | "desc" => Ok(SortDirection::Descending),
            other => Err(InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("1"),
            SortDirection::Descending => f.write_str("-1"),
        }
    }
}

/// Sorted copy of `events`; the input is left as it was.
///
/// Defaults to ascending by city. Equal keys keep their input order.
pub fn sort_events(
    events: &[EventRecord],
    key: Option<&SortKey>,
    direction: Option<SortDirection>,
) -> Vec<EventRecord> {
    let default_key = SortKey::default();
    let key = key.unwrap_or(&default_key);
    let direction = direction.unwrap_or_default();

    let mut keyed: Vec<(SortValue, &EventRecord)> =
        events.iter().map(|event| (key.extract(event), event)).collect();
    keyed.sort_by(|(a, _), (b, _)| direction.apply(a.cmp(b)));

    keyed.into_iter().map(|(_, event)| event.clone()).collect()
}
