use dioxus::prelude::*;

use crate::sections::{
    ContactSection, DesignStudio, Hero, OrderForm, PortfolioSection, ServicesSection,
};

/// The landing page: every public section in scroll order.
#[component]
pub fn Home() -> Element {
    rsx! {
        main { class: "page page-home",
            Hero {}
            ServicesSection {}
            DesignStudio {}
            OrderForm {}
            PortfolioSection {}
            ContactSection {}
        }
    }
}
