//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for deserialization and validator for the
//! required-field checks the gateway performs before calling the backend.

pub mod click;
pub mod health;
pub mod login;
pub mod message;
pub mod trigger;
pub mod user;
