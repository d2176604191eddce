use maud::{html, Markup};

use crate::events::{is_event_empty, EventRecord};

/// Register link for open events, a "Coming soon" placeholder otherwise
pub fn generate_event_link(event: &EventRecord) -> Markup {
    if is_event_empty(Some(event)) {
        return html! {};
    }

    html! {
        @if let Some(url) = event.registration_url() {
            a href=(url) target="_blank" class="registerLink" { "Register" }
        } @else {
            a href="#" class="comingSoon" { "Coming soon" }
        }
    }
}
