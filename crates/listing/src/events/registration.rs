use super::EventRecord;

/// Statuses under which an event takes registrations
pub const OPEN_STATUSES: [&str; 2] = ["W", "G"];

impl EventRecord {
    pub fn is_open_for_registration(&self) -> bool {
        self.event_status()
            .is_some_and(|status| OPEN_STATUSES.contains(&status))
    }

    /// Registration URL when the event has a website and an open status.
    ///
    /// Websites without `http` anywhere in them get an `http://` prefix.
    pub fn registration_url(&self) -> Option<String> {
        let website = self.website()?;
        if !self.is_open_for_registration() {
            return None;
        }

        if website.contains("http") {
            Some(website.to_string())
        } else {
            Some(format!("http://{}", website))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn open_status_with_website() {
        let event = EventRecord::from(json!({
            "website": "seattle.startupweekend.org",
            "event_status": "G",
        }));
        assert_eq!(
            event.registration_url().as_deref(),
            Some("http://seattle.startupweekend.org")
        );
    }

    #[test]
    fn keeps_existing_protocol() {
        let event = EventRecord::from(json!({
            "website": "https://seattle.startupweekend.org",
            "event_status": "W",
        }));
        assert_eq!(
            event.registration_url().as_deref(),
            Some("https://seattle.startupweekend.org")
        );
    }

    #[test]
    fn closed_or_missing_status() {
        for status in [json!("C"), json!("w"), json!(""), json!(null)] {
            let event = EventRecord::from(json!({
                "website": "seattle.startupweekend.org",
                "event_status": status,
            }));
            assert_eq!(event.registration_url(), None);
        }
    }

    #[test]
    fn missing_website() {
        let event = EventRecord::from(json!({"event_status": "G", "website": ""}));
        assert_eq!(event.registration_url(), None);
    }
}
