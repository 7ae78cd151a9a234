use std::sync::Arc;

use chrono::NaiveDate;

use crate::config::ServerConfig;

/// Source of "today" for date rules.
pub type Clock = fn() -> NaiveDate;

/// Current date in the server's local time zone.
pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is `Copy`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (read by the router builder).
    pub config: Arc<ServerConfig>,
    /// Date source for birth/start-up date checks.
    pub clock: Clock,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            clock: local_today,
        }
    }

    /// Replace the date source, e.g. to pin "today" in tests.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}
