use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Stamps every outgoing request with a freshly generated scene id.
    ///
    /// Without it the service assigns ids itself.
    pub assign_ids: bool,
    /// Timestamp attached to every outgoing request.
    pub timestamp: Option<DateTime<Utc>>,
}
