use serde_json::Value;

use super::EventRecord;

/// Number of entries a value holds, used as the "is this empty" test
/// throughout the listing.
pub trait ObjLen {
    fn obj_len(&self) -> usize;
}

impl ObjLen for Value {
    fn obj_len(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Array(items) => items.len(),
            Value::String(s) => s.chars().count(),
            // An explicit non-negative integer `length` wins over the key count
            Value::Object(map) => map
                .get("length")
                .and_then(Value::as_u64)
                .map(|len| len as usize)
                .unwrap_or(map.len()),
            Value::Bool(_) | Value::Number(_) => 0,
        }
    }
}

impl ObjLen for EventRecord {
    fn obj_len(&self) -> usize {
        self.entry_count()
    }
}

impl<T> ObjLen for [T] {
    fn obj_len(&self) -> usize {
        self.len()
    }
}

impl<T> ObjLen for Vec<T> {
    fn obj_len(&self) -> usize {
        self.len()
    }
}

/// Size of an optional value; absent counts as zero.
pub fn obj_len<T: ObjLen + ?Sized>(value: Option<&T>) -> usize {
    value.map_or(0, ObjLen::obj_len)
}

/// True when there is no record or the record carries no keys at all.
pub fn is_event_empty(event: Option<&EventRecord>) -> bool {
    obj_len(event) == 0
}
