//! Shared UI crate for Haweya. Domain logic, sections and views used by both
//! the web and desktop shells live here.

use dioxus::prelude::*;

pub mod core;
pub mod i18n;
pub mod sections;
pub mod state;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod footer;
    mod whatsapp_button;
    pub use footer::Footer;
    pub use whatsapp_button::WhatsAppButton;
}

pub const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
