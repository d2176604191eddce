pub mod events;
mod fetch;
mod routes;
mod startup;
pub mod templates;
mod utils;
mod widget;

pub use events::{EventRecord, QueryParams, SortDirection, SortKey};
pub use fetch::{Error, EventSource, HttpEventSource};
pub use routes::*;
pub use startup::*;
pub use utils::*;
pub use widget::{Widget, WidgetOptions, WidgetSettings};
