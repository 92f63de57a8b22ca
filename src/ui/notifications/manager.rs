// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns every live notification and drives their state
//! machines from the periodic tick. Notifications are fully independent:
//! each runs its own timer chain and dismissing one never affects another.

use super::notification::{Notification, NotificationId};
use std::time::Instant;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (the toast close button).
    Dismiss(NotificationId),
}

/// Owns the live notifications and drives their lifecycles.
#[derive(Debug, Default)]
pub struct Manager {
    /// Live notifications in creation order (oldest first).
    live: Vec<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a notification to the overlay and returns its handle.
    pub fn push(&mut self, notification: Notification) -> NotificationId {
        let id = notification.id();
        self.live.push(notification);
        id
    }

    /// Dismisses a notification by its handle.
    ///
    /// Returns `true` if the notification started leaving. Unknown handles
    /// and notifications already leaving or removed are a safe no-op.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        self.live
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| n.dismiss(now))
    }

    /// Processes a tick, advancing every notification's state machine and
    /// dropping the ones whose exit animation has finished.
    ///
    /// Should be called periodically (e.g. every 100ms) while notifications
    /// are live.
    pub fn tick(&mut self, now: Instant) {
        for notification in &mut self.live {
            notification.advance(now);
        }
        self.live.retain(|n| !n.is_removed());
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
        }
    }

    /// Returns the live notifications, oldest first.
    pub fn live(&self) -> impl Iterator<Item = &Notification> {
        self.live.iter()
    }

    /// Returns the number of live notifications.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Returns whether any notifications are live.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.live.is_empty()
    }

    /// Drops all notifications immediately, skipping exit animations.
    pub fn clear(&mut self) {
        self.live.clear();
    }
}
