//! Domain layer: the backend contract and click tracking.
//!
//! The gateway owns no entities. Subscriber profiles are opaque JSON owned by
//! the backend; the only model defined here is the click event.
//!
//! # Modules
//!
//! - [`backend`] - [`backend::BackendClient`] trait, request payloads, and [`backend::BackendError`]
//! - [`click_event`] - Click tracking event model
//! - [`click_tracker`] - Detached click reporting with a single retry
//!
//! # Click Processing Flow
//!
//! 1. HTTP handler validates `tracking_id` and `destination`
//! 2. [`click_tracker::ClickTracker::spawn`] reports the click on a detached task
//! 3. The handler redirects immediately, whatever the tracking outcome

pub mod backend;
pub mod click_event;
pub mod click_tracker;
