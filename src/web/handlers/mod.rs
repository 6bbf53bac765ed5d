//! HTML template rendering handlers.

mod login;
mod profile;

pub use login::login_handler;
pub use profile::profile_handler;
