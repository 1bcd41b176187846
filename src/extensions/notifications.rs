use std::fmt;

use chrono::NaiveDateTime;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::interaction::PointerStatus;

/// Handle returned by [`Channel::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// Typed broadcast channel.
///
/// Subscribers run synchronously in subscription order. The channel knows
/// nothing about what they do with the value.
pub struct Channel<T> {
    next_id: u64,
    subscribers: IndexMap<SubscriptionId, Subscriber<T>>,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            subscribers: IndexMap::new(),
        }
    }
}

impl<T> fmt::Debug for Channel<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T> Channel<T> {
    pub fn subscribe(&mut self, subscriber: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.insert(id, Box::new(subscriber));
        id
    }

    /// Removes a subscriber. Returns `true` when it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.shift_remove(&id).is_some()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn publish(&mut self, value: &T) {
        for subscriber in self.subscribers.values_mut() {
            subscriber(value);
        }
    }
}

/// Time-valued notification produced by one transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RulerNotification {
    /// Committed reference time after a click or drag release.
    TimeChanged(NaiveDateTime),
    /// Instant under the pointer while hovering, or the transient drag time
    /// while dragging.
    Hovered(NaiveDateTime),
}

/// One channel per notification kind.
#[derive(Debug, Default)]
pub struct RulerNotifications {
    pub time_changed: Channel<NaiveDateTime>,
    pub hovered: Channel<NaiveDateTime>,
    pub status_changed: Channel<PointerStatus>,
}

impl RulerNotifications {
    pub(crate) fn publish(&mut self, status: Option<PointerStatus>, time: Option<RulerNotification>) {
        if let Some(status) = status {
            self.status_changed.publish(&status);
        }
        match time {
            Some(RulerNotification::TimeChanged(instant)) => self.time_changed.publish(&instant),
            Some(RulerNotification::Hovered(instant)) => self.hovered.publish(&instant),
            None => {}
        }
    }
}
