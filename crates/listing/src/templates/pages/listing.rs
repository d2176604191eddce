use maud::{html, Markup};

use crate::templates::layouts::{base, PageConfig};

/// Full listing page around an already rendered table
pub fn listing_page(config: &PageConfig, table: Markup) -> Markup {
    base(
        config,
        html! {
            div class="box" {
                div class="is-flex is-justify-content-space-between is-align-items-center mb-4" {
                    h2 class="title is-5 mb-0" { "Upcoming Events" }

                    button class="button is-small is-light"
                           hx-get="/fragments/events-table"
                           hx-target="#events-table-container"
                           hx-swap="innerHTML" {
                        "Refresh"
                    }
                }

                div id="events-table-container" class="table-container" {
                    (table)
                }
            }
        },
    )
}
