//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one backend operation.

pub mod click;
pub mod health;
pub mod login;
pub mod not_found;
pub mod trigger;
pub mod user;

pub use click::click_handler;
pub use health::{api_health_handler, health_handler};
pub use login::login_handler;
pub use not_found::api_not_found_handler;
pub use trigger::trigger_handler;
pub use user::{get_user_handler, update_user_handler};
