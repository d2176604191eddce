use std::sync::Arc;

use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::get,
    Router,
};
use hyper::{header::ACCEPT, Method};
use log::info;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    events_rows_handler, events_table_handler, listing_handler, EventSource, HttpEventSource,
    Widget, WidgetSettings,
};

pub const PAGE_TITLE: &str = "Startup Weekend Events";

#[derive(Clone)]
pub struct AppState {
    pub page_title: String,
    pub widget: Arc<Widget>,
}

impl AppState {
    pub fn new(settings: WidgetSettings, source: Arc<dyn EventSource>) -> Self {
        Self {
            page_title: PAGE_TITLE.to_string(),
            widget: Arc::new(Widget::new(settings, source)),
        }
    }
}

pub fn build_app_state(
    settings: WidgetSettings,
    user_agent: &str,
    timeout: std::time::Duration,
) -> Result<AppState, anyhow::Error> {
    let source = HttpEventSource::new(user_agent, timeout)
        .map_err(|e| anyhow::anyhow!("error setting up events client: {}", e))?;
    Ok(AppState::new(settings, Arc::new(source)))
}

pub fn app(app_state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([ACCEPT])
        .allow_origin(Any);

    Router::new()
        .route("/", get(listing_handler))
        // HTMX fragment routes
        .route("/fragments/events-table", get(events_table_handler))
        .route("/fragments/events-rows", get(events_rows_handler))
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str().to_string())
        .unwrap_or_default();
    info!(target: "http_request", "new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
