//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`backend`] - HTTP client for the backend service of record

pub mod backend;
