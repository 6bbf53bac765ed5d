//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Creates the per-client rate limiter for `/api/*`.
///
/// # Limits
///
/// - **Burst**: `burst` requests
/// - **Refill**: one request every `window / burst`, so a client that drains
///   the bucket gets its full allowance back after `window`
///
/// Defaults (`RATE_LIMIT_BURST=100`, `RATE_LIMIT_WINDOW_SECS=900`) allow 100
/// requests per 15 minutes. Requests exceeding the limit receive
/// `429 Too Many Requests`.
///
/// # Key Extraction
///
/// The client IP is read from `X-Forwarded-For`, `X-Real-IP` or `Forwarded`,
/// falling back to the peer socket address. The gateway is expected to sit
/// behind one trusted proxy hop.
///
/// # Errors
///
/// Returns an error if `burst` is zero or the computed refill period is zero.
pub fn layer(
    burst: u32,
    window: Duration,
) -> Result<GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>>
{
    let period = window
        .checked_div(burst)
        .context("Rate limit burst must be greater than 0")?;

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .period(period)
            .burst_size(burst)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .context("Invalid rate limit configuration")?,
    );

    Ok(GovernorLayer::new(governor_conf))
}
