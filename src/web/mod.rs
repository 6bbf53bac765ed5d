//! Web layer for the browser-facing pages.
//!
//! Server-rendered Askama shells; the page script in `static/app.js` talks to
//! the JSON API.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod routes;
