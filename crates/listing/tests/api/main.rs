mod helpers;
mod listing_routes;
