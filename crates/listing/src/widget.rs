use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use log::{debug, info};
use maud::Markup;
use serde::Deserialize;
use sw_listing_core::DEFAULT_EVENTS_URL;
use tokio::sync::RwLock;

use crate::{
    events::{build_query_url, sort_events, EventRecord, QueryParams, SortDirection, SortKey},
    fetch::{self, EventSource},
    templates::process_event_data,
};

/// Effective widget settings
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetSettings {
    pub url: String,
    pub query: QueryParams,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_EVENTS_URL.to_string(),
            query: QueryParams::new(),
        }
    }
}

/// Caller-supplied settings; anything left `None` falls back to the default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WidgetOptions {
    pub url: Option<String>,
    pub query: Option<QueryParams>,
}

impl WidgetSettings {
    /// Shallow merge: a supplied `query` replaces the default map as a whole
    pub fn merge(options: WidgetOptions) -> Self {
        let defaults = WidgetSettings::default();
        Self {
            url: options.url.unwrap_or(defaults.url),
            query: options.query.unwrap_or(defaults.query),
        }
    }

    pub fn fetch_url(&self) -> String {
        build_query_url(Some(self.url.as_str()), Some(&self.query))
    }
}

/// Events held by one widget instance
#[derive(Debug, Default)]
struct ListingState {
    events: Vec<EventRecord>,
    /// Ticket of the fetch whose response is currently held
    applied_ticket: u64,
    last_sort: Option<(SortKey, SortDirection)>,
}

impl ListingState {
    /// Repeating the previous key flips its direction; a new key starts ascending
    fn next_direction(&self, key: &SortKey) -> SortDirection {
        match &self.last_sort {
            Some((last_key, direction)) if last_key.same_as(key) => direction.reverse(),
            _ => SortDirection::Ascending,
        }
    }
}

/// A listing widget: fetches events, keeps the latest list, renders it
pub struct Widget {
    settings: WidgetSettings,
    source: Arc<dyn EventSource>,
    next_ticket: AtomicU64,
    state: RwLock<ListingState>,
}

impl Widget {
    pub fn new(settings: WidgetSettings, source: Arc<dyn EventSource>) -> Self {
        Self {
            settings,
            source,
            next_ticket: AtomicU64::new(0),
            state: RwLock::new(ListingState::default()),
        }
    }

    pub fn settings(&self) -> &WidgetSettings {
        &self.settings
    }

    /// Fetch the events and render the full table.
    ///
    /// Overlapping refreshes resolve to the most recently issued one: a
    /// response older than the list already held is dropped. On error the
    /// held list is left untouched.
    pub async fn refresh(&self) -> Result<Markup, fetch::Error> {
        let ticket = self.next_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        let url = self.settings.fetch_url();
        debug!("fetching events (ticket {}): {}", ticket, url);

        let events = self.source.fetch_events(&url).await?;

        let mut state = self.state.write().await;
        if ticket > state.applied_ticket {
            info!("loaded {} events", events.len());
            state.events = events;
            state.applied_ticket = ticket;
            state.last_sort = None;
        } else {
            debug!(
                "dropping stale response (ticket {}, holding {})",
                ticket, state.applied_ticket
            );
        }

        Ok(process_event_data(Some(state.events.as_slice()), true))
    }

    /// Render the held list without fetching
    pub async fn render(&self, scaffolding: bool) -> Markup {
        let state = self.state.read().await;
        process_event_data(Some(state.events.as_slice()), scaffolding)
    }

    /// Re-sort the held list and render only its rows.
    ///
    /// Without an explicit direction, sorting by the same key again reverses
    /// the order.
    pub async fn resort(&self, key: SortKey, direction: Option<SortDirection>) -> Markup {
        let mut state = self.state.write().await;
        let direction = direction.unwrap_or_else(|| state.next_direction(&key));
        debug!("sorting {} events by {:?} ({})", state.events.len(), key, direction);

        state.events = sort_events(&state.events, Some(&key), Some(direction));
        state.last_sort = Some((key, direction));

        process_event_data(Some(state.events.as_slice()), false)
    }

    /// Snapshot of the held events
    pub async fn events(&self) -> Vec<EventRecord> {
        self.state.read().await.events.clone()
    }
}
