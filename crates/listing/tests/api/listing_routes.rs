use crate::helpers::{mock_events, row_titles, spawn_app, spawn_app_with, MockEventSource};
use std::sync::Arc;
use sw_listing::{Error, QueryParams, WidgetOptions, WidgetSettings};

/// The listing page fetches the configured endpoint and renders the full table
#[tokio::test]
async fn listing_page_renders_fetched_events() {
    let mut source = MockEventSource::new();
    source
        .expect_fetch_events()
        .withf(|url: &str| url == "http://swoop.startupweekend.org/events")
        .times(1)
        .returning(|_| Ok(mock_events()));

    let test_app = spawn_app(Arc::new(source));
    let (status, html) = test_app.get("/").await;

    assert_eq!(status, 200);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<table class="swEventListing">"#));
    assert_eq!(
        row_titles(&html),
        [
            "Startup Weekend Mega - EDU, Seattle, WA, USA",
            "Austin, TX, USA",
            "Boston, MA, USA",
        ]
    );
    // 18:00 in Seattle is the next day in UTC
    assert!(html.contains("<td>Mar 19, 2011</td>"));
    assert!(html.contains(
        r#"<a href="http://seattle.startupweekend.org" target="_blank" class="registerLink">Register</a>"#
    ));
    assert!(html.contains(
        r#"<a href="https://boston.startupweekend.org" target="_blank" class="registerLink">Register</a>"#
    ));
    assert!(html.contains(r##"<a href="#" class="comingSoon">Coming soon</a>"##));
}

/// Configured query parameters end up on the fetch URL in order
#[tokio::test]
async fn listing_page_uses_configured_query() {
    let mut source = MockEventSource::new();
    source
        .expect_fetch_events()
        .withf(|url: &str| url == "http://localhost:3000/events?vertical=EDU&since=2011-01-01")
        .times(1)
        .returning(|_| Ok(vec![]));

    let settings = WidgetSettings::merge(WidgetOptions {
        url: Some(String::from("http://localhost:3000/events/")),
        query: Some(QueryParams::from_iter([
            ("vertical", "EDU"),
            ("since", "2011-01-01"),
        ])),
    });
    let test_app = spawn_app_with(settings, Arc::new(source));
    let (status, html) = test_app.get("/").await;

    assert_eq!(status, 200);
    assert!(html.contains(r#"<tbody id="sw-events-tbody"></tbody>"#));
}

/// A failed fetch still renders the (empty) table
#[tokio::test]
async fn listing_page_survives_fetch_failure() {
    let mut source = MockEventSource::new();
    source.expect_fetch_events().times(1).returning(|url| {
        Err(Error::Status {
            status: 503,
            url: url.to_string(),
        })
    });

    let test_app = spawn_app(Arc::new(source));
    let (status, html) = test_app.get("/").await;

    assert_eq!(status, 200);
    assert!(html.contains(r#"<tbody id="sw-events-tbody"></tbody>"#));
}

/// A failed refresh keeps rendering the previously fetched events
#[tokio::test]
async fn table_fragment_keeps_previous_events_on_failure() {
    let mut source = MockEventSource::new();
    let mut seq = mockall::Sequence::new();
    source
        .expect_fetch_events()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Ok(mock_events()));
    source
        .expect_fetch_events()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|url| {
            Err(Error::Status {
                status: 500,
                url: url.to_string(),
            })
        });

    let test_app = spawn_app(Arc::new(source));
    test_app.get("/fragments/events-table").await;
    let (status, html) = test_app.get("/fragments/events-table").await;

    assert_eq!(status, 200);
    assert!(html.starts_with(r#"<table class="swEventListing">"#));
    assert!(!html.contains("<!DOCTYPE html>"));
    assert_eq!(row_titles(&html).len(), 3);
}

/// Header clicks re-sort the held list and return rows only
#[tokio::test]
async fn rows_fragment_resorts_without_refetching() {
    let mut source = MockEventSource::new();
    source
        .expect_fetch_events()
        .times(1)
        .returning(|_| Ok(mock_events()));

    let test_app = spawn_app(Arc::new(source));
    test_app.get("/fragments/events-table").await;

    let (status, rows) = test_app.get("/fragments/events-rows?sort=city").await;
    assert_eq!(status, 200);
    assert!(rows.starts_with("<tr>"));
    assert!(!rows.contains("<table"));
    assert!(!rows.contains("<tbody"));
    assert_eq!(
        row_titles(&rows),
        [
            "Austin, TX, USA",
            "Boston, MA, USA",
            "Startup Weekend Mega - EDU, Seattle, WA, USA",
        ]
    );

    // The header sends the flipped direction on the next click
    let (_, rows) = test_app.get("/fragments/events-rows?sort=city&dir=-1").await;
    assert_eq!(
        row_titles(&rows),
        [
            "Startup Weekend Mega - EDU, Seattle, WA, USA",
            "Boston, MA, USA",
            "Austin, TX, USA",
        ]
    );

    let (_, rows) = test_app
        .get("/fragments/events-rows?sort=start_date&dir=-1")
        .await;
    assert_eq!(
        row_titles(&rows),
        [
            "Austin, TX, USA",
            "Startup Weekend Mega - EDU, Seattle, WA, USA",
            "Boston, MA, USA",
        ]
    );

    let held = test_app.state.widget.events().await;
    assert_eq!(held.len(), 3);
    assert_eq!(held[0].city(), Some("Austin"));
}

/// Without a `dir` every request sorts ascending, whoever clicked before
#[tokio::test]
async fn rows_fragment_direction_is_per_request() {
    let mut source = MockEventSource::new();
    source
        .expect_fetch_events()
        .times(1)
        .returning(|_| Ok(mock_events()));

    let test_app = spawn_app(Arc::new(source));
    test_app.get("/").await;

    let (_, first_page) = test_app.get("/fragments/events-rows?sort=city").await;
    let (_, second_page) = test_app.get("/fragments/events-rows?sort=city").await;

    let ascending = [
        "Austin, TX, USA",
        "Boston, MA, USA",
        "Startup Weekend Mega - EDU, Seattle, WA, USA",
    ];
    assert_eq!(row_titles(&first_page), ascending);
    assert_eq!(row_titles(&second_page), ascending);

    let (_, rows) = test_app.get("/fragments/events-rows?sort=city&dir=1").await;
    assert_eq!(row_titles(&rows), ascending);
}

/// The page header starts every sortable column ascending and toggles client side
#[tokio::test]
async fn listing_page_headers_carry_their_own_direction() {
    let mut source = MockEventSource::new();
    source
        .expect_fetch_events()
        .times(1)
        .returning(|_| Ok(mock_events()));

    let test_app = spawn_app(Arc::new(source));
    let (_, html) = test_app.get("/").await;

    assert!(html.contains(r#"data-sort="city" data-dir="1" hx-get="/fragments/events-rows?sort=city""#));
    assert!(html.contains(
        r#"data-sort="start_date" data-dir="1" hx-get="/fragments/events-rows?sort=start_date""#
    ));
    assert_eq!(html.matches("htmx:configRequest").count(), 2);
}

/// Sorting before anything was fetched yields no rows
#[tokio::test]
async fn rows_fragment_before_fetch_is_empty() {
    let source = MockEventSource::new();
    let test_app = spawn_app(Arc::new(source));

    let (status, rows) = test_app.get("/fragments/events-rows").await;
    assert_eq!(status, 200);
    assert_eq!(rows, "");
}
