use dioxus::prelude::*;
use tracing::Level;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, Footer, WhatsAppButton};
use ui::state::use_app_provider;
use ui::views::{AdminPanel, Dashboard, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/admin")]
    AdminPanel {},
}

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_admin(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::AdminPanel {},
        "{label}"
    })
}

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        home: nav_home,
        dashboard: nav_dashboard,
        admin: nav_admin,
    });
    let state = use_app_provider();
    let lang = (state.lang)();

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }

        div {
            class: "app",
            dir: lang.direction().as_str(),
            lang: lang.code(),
            Router::<Route> {}
        }
    }
}

/// Web layout: the shared navbar, the routed page, then the site chrome.
#[component]
fn WebNavbar() -> Element {
    let on_home = matches!(use_route::<Route>(), Route::Home {});

    rsx! {
        AppNavbar { on_home }
        Outlet::<Route> {}
        Footer {}
        WhatsAppButton {}
    }
}
