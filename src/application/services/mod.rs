//! Business-facing services consumed by HTTP handlers.

pub mod subscription_service;

pub use subscription_service::SubscriptionService;
