use crate::core::platform::scroll_to;
use crate::core::session::{Session, User};
use crate::i18n::tr;
use crate::state::{use_app_state, use_services};
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Route links supplied by the platform shell.
///
/// `ui` does not know each platform's `Route` enum, so shells register plain
/// functions that wrap a localized label in their own `Link`:
///
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     dashboard: |label| rsx!( Link { class: "navbar__link", to: Route::Dashboard {}, "{label}" } ),
///     admin: |label| rsx!( Link { class: "navbar__link", to: Route::Admin {}, "{label}" } ),
/// });
/// ```
///
/// Without a builder the navbar only shows the in-page section links.
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub dashboard: fn(label: &str) -> Element,
    pub admin: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

/// In-page anchors on the home route: (element id, label key).
const SECTION_LINKS: [(&str, &str); 2] =
    [("services", "nav-services"), ("portfolio", "nav-portfolio")];

/// Section anchors only exist on the home page; elsewhere the links would
/// scroll to nothing.
fn section_links(on_home: bool) -> &'static [(&'static str, &'static str)] {
    if on_home {
        &SECTION_LINKS
    } else {
        &[]
    }
}

/// `on_home` is set by the shell from its current route.
#[component]
pub fn AppNavbar(on_home: bool) -> Element {
    let mut state = use_app_state();
    let services = use_services();
    let lang = (state.lang)();
    let session = (state.session)();
    let demo_login = services.config.demo_login;

    let route_links = NAV_BUILDER.get().map(|b| {
        let home = (b.home)(&t!(lang, "nav-home"));
        let dashboard = session
            .user()
            .map(|_| (b.dashboard)(&t!(lang, "nav-dashboard")));
        let admin = session
            .is_admin()
            .then(|| (b.admin)(&t!(lang, "nav-admin")));
        rsx! {
            {home}
            {dashboard}
            {admin}
        }
    });

    let toggle_language = move |_| {
        let next = (state.lang)().toggled();
        tracing::info!(lang = %next, "language switched");
        state.lang.set(next);
    };

    let mut sign_in = move |user: User| {
        tracing::info!(user = %user.id, "demo sign-in");
        state.session.set(Session::signed_in(user));
    };

    let user_label = session
        .user()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| t!(lang, "nav-guest"));

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "HAWEYA" }
                    span { class: "navbar__brand-subtitle", "هوية" }
                }

                nav { class: "navbar__links",
                    {route_links}
                    for (id, key) in section_links(on_home).iter().copied() {
                        button {
                            key: "{id}",
                            class: "navbar__link",
                            r#type: "button",
                            onclick: move |_| scroll_to(id),
                            {tr(lang, key)}
                        }
                    }
                }

                div { class: "navbar__actions",
                    button {
                        class: "navbar__locale",
                        r#type: "button",
                        onclick: toggle_language,
                        {t!(lang, "nav-language-toggle")}
                    }

                    if demo_login {
                        div { class: "navbar__session",
                            span { class: "navbar__user", "{user_label}" }
                            if session.user().is_some() {
                                button {
                                    class: "button button--ghost",
                                    r#type: "button",
                                    onclick: move |_| state.session.set(Session::guest()),
                                    {t!(lang, "nav-logout")}
                                }
                            } else {
                                button {
                                    class: "button button--ghost",
                                    r#type: "button",
                                    onclick: move |_| sign_in(User::demo_customer()),
                                    {t!(lang, "nav-login-customer")}
                                }
                                button {
                                    class: "button button--ghost",
                                    r#type: "button",
                                    onclick: move |_| sign_in(User::demo_admin()),
                                    {t!(lang, "nav-login-admin")}
                                }
                            }
                        }
                    }

                    if on_home {
                        button {
                            class: "button button--primary navbar__cta",
                            r#type: "button",
                            onclick: move |_| scroll_to("order-section"),
                            {t!(lang, "nav-order")}
                        }
                    }
                }
            }
        }
    }
}
