//! Event records and the pure transformations the listing is built from.

mod date;
mod payload;
mod query;
mod record;
mod registration;
mod size;
mod sort;
mod title;

pub use date::{format_display_date, format_start_date, parse_start_date};
pub use payload::{parse_events_payload, strip_jsonp, PayloadError};
pub use query::{build_query_url, QueryParams};
pub use record::{EventRecord, StartDate};
pub use registration::OPEN_STATUSES;
pub use size::{is_event_empty, obj_len, ObjLen};
pub use sort::{sort_events, InvalidDirection, SortDirection, SortKey, SortValue};
pub use title::{event_display_title, BRAND_PREFIX};
