mod event_link;
mod events_table;

pub use event_link::generate_event_link;
pub use events_table::{
    events_table_rows, process_event_data, ROWS_FRAGMENT_PATH, SORTABLE_COLUMNS, TBODY_ID,
};
