//! Services module for alltz
//!
//! Contains the business logic: the timezone registry, the timeline
//! scrub state, and the time abstraction used for testing.

pub mod time_provider;
pub mod timeline;
pub mod timezone_service;
