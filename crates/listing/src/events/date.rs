use time::{
    format_description::well_known::{Rfc2822, Rfc3339},
    macros::format_description,
    Date, OffsetDateTime, PrimitiveDateTime, UtcOffset,
};

use super::{is_event_empty, EventRecord};

/// Parse a start date the way a browser would accept it.
///
/// Values without an offset are taken as UTC.
pub fn parse_start_date(text: &str) -> Option<OffsetDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(date_time) = OffsetDateTime::parse(text, &Rfc3339) {
        return Some(date_time);
    }
    if let Ok(date_time) = OffsetDateTime::parse(text, &Rfc2822) {
        return Some(date_time);
    }

    let date_times = [
        format_description!("[year]-[month padding:none]-[day padding:none]T[hour padding:none]:[minute]:[second].[subsecond]"),
        format_description!("[year]-[month padding:none]-[day padding:none]T[hour padding:none]:[minute]:[second]"),
        format_description!("[year]-[month padding:none]-[day padding:none]T[hour padding:none]:[minute]"),
        format_description!("[year]-[month padding:none]-[day padding:none] [hour padding:none]:[minute]:[second]"),
        format_description!("[year]-[month padding:none]-[day padding:none] [hour padding:none]:[minute]"),
    ];
    for format in date_times {
        if let Ok(date_time) = PrimitiveDateTime::parse(text, format) {
            return Some(date_time.assume_utc());
        }
    }

    let dates = [
        format_description!("[year]-[month padding:none]-[day padding:none]"),
        format_description!("[year]/[month padding:none]/[day padding:none]"),
        format_description!("[month padding:none]/[day padding:none]/[year]"),
        format_description!("[month repr:short] [day padding:none], [year]"),
        format_description!("[month repr:long] [day padding:none], [year]"),
    ];
    dates
        .into_iter()
        .find_map(|format| Date::parse(text, format).ok())
        .map(|date| date.midnight().assume_utc())
}

/// `Jan 1, 2011`, always in UTC
pub fn format_display_date(date_time: OffsetDateTime) -> String {
    date_time
        .to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[month repr:short] [day padding:none], [year]"
        ))
        .unwrap_or_default()
}

/// Display form of the event start date, empty when it can't be resolved
pub fn format_start_date(event: &EventRecord) -> String {
    if is_event_empty(Some(event)) {
        return String::new();
    }

    event
        .start_date
        .resolve()
        .map(format_display_date)
        .unwrap_or_default()
}
