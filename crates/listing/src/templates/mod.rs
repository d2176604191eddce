pub mod fragments;
pub mod layouts;
pub mod pages;

pub use fragments::{
    events_table_rows, generate_event_link, process_event_data, ROWS_FRAGMENT_PATH, TBODY_ID,
};
pub use layouts::PageConfig;
pub use pages::listing_page;
