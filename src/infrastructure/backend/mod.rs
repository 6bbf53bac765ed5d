//! Backend service integration.
//!
//! Provides [`HttpBackendClient`], the production implementation of
//! [`crate::domain::backend::BackendClient`].

mod http_client;

pub use http_client::HttpBackendClient;
