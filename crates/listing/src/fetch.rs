use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::events::{parse_events_payload, EventRecord, PayloadError};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("error sending request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("error response {status} from {url}")]
    Status { status: u16, url: String },
    #[error("error decoding events payload: {0}")]
    Payload(#[from] PayloadError),
}

/// Where the widget gets its events from
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch_events(&self, url: &str) -> Result<Vec<EventRecord>, Error>;
}

/// Fetches events over HTTP, accepting plain JSON or JSONP bodies
pub struct HttpEventSource {
    client: Client,
    timeout: Duration,
}

impl HttpEventSource {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self::with_client(client, timeout))
    }

    pub fn with_client(client: Client, timeout: Duration) -> Self {
        Self { client, timeout }
    }
}

#[async_trait]
impl EventSource for HttpEventSource {
    async fn fetch_events(&self, url: &str) -> Result<Vec<EventRecord>, Error> {
        debug!("requesting: {}", url);
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let events = parse_events_payload(&body)?;
        debug!("received {} events from {}", events.len(), url);
        Ok(events)
    }
}
