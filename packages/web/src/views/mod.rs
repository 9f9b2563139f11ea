mod admin;
pub use admin::Admin;

mod dashboard;
pub use dashboard::Dashboard;

mod home;
pub use home::Home;

mod resources;
pub use resources::Resources;
