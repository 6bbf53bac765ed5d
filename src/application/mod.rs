//! Application layer services.
//!
//! Services turn gateway requests into backend calls and map backend failures
//! into [`crate::error::AppError`]s.
//!
//! # Available Services
//!
//! - [`services::subscription_service::SubscriptionService`] - Login links, profiles, notification triggers

pub mod services;
