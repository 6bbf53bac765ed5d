//! Click event model for fire-and-forget click tracking.

/// A single tracked click: which email link was followed and where it leads.
///
/// Created by the click handler from query parameters and handed to
/// [`crate::domain::click_tracker::ClickTracker`], which reports it to the
/// backend on a detached task while the caller is already being redirected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub tracking_id: String,
    pub destination: String,
}

impl ClickEvent {
    /// Creates a new click event.
    ///
    /// # Examples
    ///
    /// ```
    /// use hawthorne_gateway::domain::click_event::ClickEvent;
    ///
    /// let event = ClickEvent::new("trk-42", "https://example.com/deal");
    /// assert_eq!(event.tracking_id, "trk-42");
    /// ```
    pub fn new(tracking_id: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            tracking_id: tracking_id.into(),
            destination: destination.into(),
        }
    }

    /// Query pairs sent to the backend's `/click` endpoint.
    pub fn query_pairs(&self) -> [(&'static str, &str); 2] {
        [
            ("tracking_id", self.tracking_id.as_str()),
            ("destination", self.destination.as_str()),
        ]
    }
}
