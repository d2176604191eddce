use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::Html,
};
use log::error;
use maud::Markup;
use serde::Deserialize;

use crate::{
    events::{SortDirection, SortKey},
    templates::{listing_page, PageConfig},
    AppState, Widget,
};

#[derive(Debug, Default, Deserialize)]
pub struct SortQuery {
    pub sort: Option<String>,
    pub dir: Option<String>,
}

impl SortQuery {
    fn key(&self) -> SortKey {
        self.sort
            .as_deref()
            .filter(|field| !field.is_empty())
            .map(SortKey::from)
            .unwrap_or_default()
    }

    /// Each page tracks its own toggle and sends `dir`; a missing or
    /// unparseable one sorts ascending
    fn direction(&self) -> SortDirection {
        self.dir
            .as_deref()
            .and_then(|dir| dir.parse().ok())
            .unwrap_or_default()
    }
}

/// Fetch and render; a failed fetch falls back to whatever is held
async fn refreshed_table(widget: &Widget) -> Markup {
    match widget.refresh().await {
        Ok(table) => table,
        Err(e) => {
            error!("error fetching events: {}", e);
            widget.render(true).await
        }
    }
}

/// Handler for the listing page (GET /)
pub async fn listing_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    let table = refreshed_table(&state.widget).await;
    let config = PageConfig {
        title: &state.page_title,
        source_url: &state.widget.settings().url,
    };
    Html(listing_page(&config, table).into_string())
}

/// Handler for the refreshed table (GET /fragments/events-table)
pub async fn events_table_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(refreshed_table(&state.widget).await.into_string())
}

/// Handler for re-sorted rows only (GET /fragments/events-rows?sort=city&dir=-1)
pub async fn events_rows_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SortQuery>,
) -> Html<String> {
    let rows = state
        .widget
        .resort(query.key(), Some(query.direction()))
        .await;
    Html(rows.into_string())
}
