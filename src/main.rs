use dioxus::prelude::*;

use dash_grid::{ContentItem, DashboardHost};

mod pages;

use pages::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

// Glue between the engine bindings and the CDN-loaded grid library.
static GRID_ENGINE_SCRIPT: &str = include_str!("grid_engine.js");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| DashboardHost {
        design: false,
        render_component: Callback::new(render_card),
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link {
            rel: "stylesheet",
            href: "https://cdn.jsdelivr.net/npm/gridstack@10.3.1/dist/gridstack.min.css",
        }
        document::Script { src: "https://cdn.jsdelivr.net/npm/gridstack@10.3.1/dist/gridstack-all.js" }
        script { {GRID_ENGINE_SCRIPT} }

        Router::<Route> {}
    }
}

fn render_card(item: ContentItem) -> Element {
    let title = item
        .descriptor
        .get("title")
        .and_then(|value| value.as_str())
        .unwrap_or(&item.id)
        .to_string();
    let body = item
        .descriptor
        .get("body")
        .and_then(|value| value.as_str())
        .unwrap_or_default()
        .to_string();

    rsx! {
        div { class: "card",
            div { class: "card-title", "{title}" }
            p { class: "card-body", "{body}" }
        }
    }
}
