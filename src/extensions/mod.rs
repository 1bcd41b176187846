//! Host-facing extension points.
//!
//! Observers subscribe to typed channels; the ruler publishes into them
//! without knowing who listens.

pub mod notifications;

pub use notifications::{Channel, RulerNotification, RulerNotifications, SubscriptionId};
