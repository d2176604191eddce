pub mod listing;

pub use listing::listing_page;
