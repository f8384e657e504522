mod admin;
mod dashboard;
mod home;

pub use admin::AdminPanel;
pub use dashboard::Dashboard;
pub use home::Home;
