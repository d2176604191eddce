use super::{is_event_empty, EventRecord};

pub const BRAND_PREFIX: &str = "Startup Weekend";

/// Location label for an event, e.g. `Startup Weekend Mega - EDU, Seattle, WA, USA`
pub fn event_display_title(event: &EventRecord) -> String {
    if is_event_empty(Some(event)) {
        return String::new();
    }

    let mut segments = Vec::with_capacity(4);

    if event.nickname().is_some() || event.vertical().is_some() {
        let mut brand = String::from(BRAND_PREFIX);
        if let Some(nickname) = event.nickname() {
            brand.push(' ');
            brand.push_str(nickname);
        }
        if let Some(vertical) = event.vertical() {
            brand.push_str(" - ");
            brand.push_str(vertical);
        }
        segments.push(brand);
    }

    segments.extend(
        [event.city(), event.state(), event.country()]
            .into_iter()
            .flatten()
            .map(str::to_string),
    );

    segments.join(", ")
}
