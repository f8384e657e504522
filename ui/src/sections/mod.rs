mod contact;
mod design_studio;
mod hero;
mod order_form;
mod portfolio;
pub(crate) mod services;

pub use contact::ContactSection;
pub use design_studio::DesignStudio;
pub use hero::Hero;
pub use order_form::OrderForm;
pub use portfolio::PortfolioSection;
pub use services::ServicesSection;
