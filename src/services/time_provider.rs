//! Time Provider Trait and Implementations
//!
//! Provides time abstraction for deterministic testing and production use.
//! The dashboard's tick and the scrub reset both go through this trait so
//! tests can pin "now" to a fixed instant.

use chrono::{DateTime, Utc};

/// Trait for providing time functionality
pub trait TimeProvider: Send + Sync {
    /// Get the current UTC time
    fn now_utc(&self) -> DateTime<Utc>;
}

/// System time provider for production use
#[derive(Debug, Clone, Default)]
pub struct SystemTimeProvider;

impl SystemTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl TimeProvider for SystemTimeProvider {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Mock time provider for testing
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct MockTimeProvider {
    current_time: std::sync::Arc<std::sync::Mutex<DateTime<Utc>>>,
}

#[cfg(test)]
impl MockTimeProvider {
    /// Create a new mock time provider pinned to the given instant
    pub fn new(start_time: DateTime<Utc>) -> Self {
        Self {
            current_time: std::sync::Arc::new(std::sync::Mutex::new(start_time)),
        }
    }

    /// Move the mock clock forward
    pub fn advance(&self, duration: chrono::Duration) {
        let mut time = self.current_time.lock().unwrap();
        *time += duration;
    }
}

#[cfg(test)]
impl TimeProvider for MockTimeProvider {
    fn now_utc(&self) -> DateTime<Utc> {
        *self.current_time.lock().unwrap()
    }
}
