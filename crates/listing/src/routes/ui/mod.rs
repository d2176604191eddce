mod listing;

pub use listing::{events_rows_handler, events_table_handler, listing_handler, SortQuery};
