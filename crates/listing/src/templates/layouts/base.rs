use maud::{html, Markup, PreEscaped, DOCTYPE};

pub struct PageConfig<'a> {
    pub title: &'a str,
    /// Endpoint the listing was fetched from, shown in the footer
    pub source_url: &'a str,
}

pub fn base(config: &PageConfig, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.title) }
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bulma@1.0.4/css/bulma.min.css";
                script src="https://cdn.jsdelivr.net/npm/htmx.org@1.9.10/dist/htmx.min.js" {}
                style { (PreEscaped(LISTING_STYLES)) }
            }
            body {
                section class="section" {
                    div class="container" {
                        h1 class="title" { (config.title) }

                        div id="main-content" {
                            (content)
                        }

                        p class="is-size-7 has-text-grey mt-4" {
                            "Events from "
                            code { (config.source_url) }
                        }
                    }
                }
            }
        }
    }
}

const LISTING_STYLES: &str = r#"
.swEventListing { width: 100%; }
.swEventListing th.sortable { cursor: pointer; text-decoration: underline dotted; }
.swEventListing .comingSoon { color: #7a7a7a; pointer-events: none; }
"#;
