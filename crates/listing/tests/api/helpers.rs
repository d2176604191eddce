use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::Request,
    Router,
};
use hyper::{header, Method};
use mockall::mock;
use serde_json::json;
use std::sync::Arc;
use sw_listing::{app, AppState, Error, EventRecord, EventSource, WidgetSettings};
use tower::ServiceExt;

mock! {
    pub EventSource {}

    #[async_trait]
    impl EventSource for EventSource {
        async fn fetch_events(&self, url: &str) -> Result<Vec<EventRecord>, Error>;
    }
}

pub struct TestApp {
    pub app: Router,
    pub state: AppState,
}

pub fn spawn_app(source: Arc<dyn EventSource>) -> TestApp {
    spawn_app_with(WidgetSettings::default(), source)
}

pub fn spawn_app_with(settings: WidgetSettings, source: Arc<dyn EventSource>) -> TestApp {
    let state = AppState::new(settings, source);
    TestApp {
        app: app(state.clone()),
        state,
    }
}

impl TestApp {
    /// GET `uri` and return the status and body text
    pub async fn get(&self, uri: &str) -> (u16, String) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .header(header::ACCEPT, "text/html")
            .body(Body::empty())
            .unwrap();

        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request.");

        let status = response.status().as_u16();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }
}

pub fn mock_events() -> Vec<EventRecord> {
    vec![
        EventRecord::from(json!({
            "city": "Seattle",
            "state": "WA",
            "country": "USA",
            "nickname": "Mega",
            "vertical": "EDU",
            "start_date": "2011-03-18T18:00:00-07:00",
            "website": "seattle.startupweekend.org",
            "event_status": "G",
        })),
        EventRecord::from(json!({
            "city": "Austin",
            "state": "TX",
            "country": "USA",
            "start_date": "2012-01-05",
            "event_status": "C",
        })),
        EventRecord::from(json!({
            "city": "Boston",
            "state": "MA",
            "country": "USA",
            "start_date": "2010-11-02",
            "website": "https://boston.startupweekend.org",
            "event_status": "W",
        })),
    ]
}

/// Titles of the rendered rows, in order
pub fn row_titles(html: &str) -> Vec<String> {
    html.split("<tr><td>")
        .skip(1)
        .filter_map(|row| row.split("</td>").next())
        .map(str::to_string)
        .collect()
}
