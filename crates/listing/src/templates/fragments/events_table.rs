use maud::{html, Markup};

use super::event_link::generate_event_link;
use crate::events::{
    build_query_url, event_display_title, format_start_date, EventRecord, QueryParams,
    SortDirection,
};

/// Route serving re-sorted rows for the header links
pub const ROWS_FRAGMENT_PATH: &str = "/fragments/events-rows";

/// Id of the `tbody` partial renders are swapped into
pub const TBODY_ID: &str = "sw-events-tbody";

/// Columns that can be clicked to sort, with their header labels
pub const SORTABLE_COLUMNS: [(&str, &str); 2] = [("city", "Event"), ("start_date", "Date")];

/// Sends the header's `data-dir` along with the request and flips it, so each
/// page keeps its own toggle
const TOGGLE_DIRECTION: &str = "htmx:configRequest: event.detail.parameters.dir = this.dataset.dir; this.dataset.dir = -this.dataset.dir";

/// Events listing markup.
///
/// With `scaffolding` the rows come wrapped in the table, its sortable header
/// and the `tbody`. Without it only the rows are emitted, for swapping into
/// an existing table after a re-sort.
pub fn process_event_data(events: Option<&[EventRecord]>, scaffolding: bool) -> Markup {
    let events = events.unwrap_or_default();
    if !scaffolding {
        return events_table_rows(events);
    }

    html! {
        table class="swEventListing" {
            thead {
                tr {
                    @for (field, label) in SORTABLE_COLUMNS {
                        (sort_header(field, label))
                    }
                    th {}
                }
            }
            tbody id=(TBODY_ID) {
                (events_table_rows(events))
            }
        }
    }
}

/// Just the table rows - used for HTMX partial updates
pub fn events_table_rows(events: &[EventRecord]) -> Markup {
    html! {
        @for event in events {
            (event_row(event))
        }
    }
}

fn event_row(event: &EventRecord) -> Markup {
    html! {
        tr {
            td { (event_display_title(event)) }
            td { (format_start_date(event)) }
            td { (generate_event_link(event)) }
        }
    }
}

fn sort_header(field: &str, label: &str) -> Markup {
    let query = QueryParams::from_iter([("sort", field)]);
    html! {
        th class="sortable"
           data-sort=(field)
           data-dir=(SortDirection::Ascending)
           hx-get=(build_query_url(Some(ROWS_FRAGMENT_PATH), Some(&query)))
           hx-target=(format!("#{}", TBODY_ID))
           hx-swap="innerHTML"
           hx-on=(TOGGLE_DIRECTION) {
            (label)
        }
    }
}
