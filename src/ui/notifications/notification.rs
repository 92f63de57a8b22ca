// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures and lifecycle state machine.
//!
//! A notification moves through `Entering → Visible → Leaving → Removed`.
//! Every transition is driven by a caller-supplied `Instant`, so the whole
//! lifecycle can be exercised with virtual time instead of real timers.

use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Delay before an entering notification settles into its visible position.
pub const ENTER_DELAY: Duration = Duration::from_millis(100);

/// How long a notification stays visible before it auto-dismisses.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(5000);

/// Duration of the exit animation before the widget is detached.
pub const EXIT_DELAY: Duration = Duration::from_millis(300);

/// Unique identifier for a notification; the handle used for dismissal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity level determines visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Informational message (blue).
    #[default]
    Info,
    /// Operation completed successfully (green).
    Success,
    /// User-correctable error (red).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Error => palette::ERROR_500,
        }
    }
}

/// Lifecycle phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Appended to the overlay, entry animation pending.
    Entering,
    /// Settled; the auto-dismiss countdown is running.
    Visible,
    /// Exit animation running; auto-dismiss is cancelled.
    Leaving,
    /// Detached. The manager drops the notification on its next tick.
    Removed,
}

/// A transient message shown in the toast overlay.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    /// The i18n key for the notification message, resolved at render time.
    message_key: String,
    created_at: Instant,
    phase: Phase,
    /// When the current phase was entered. Each deadline is measured from
    /// here, so consecutive timers chain without drift.
    phase_since: Instant,
}

impl Notification {
    /// Creates a new notification in the `Entering` phase.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        let created_at = Instant::now();
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            created_at,
            phase: Phase::Entering,
            phase_since: created_at,
        }
    }

    /// Creates an info notification.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the i18n message key.
    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns whether the notification has finished its lifecycle.
    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.phase == Phase::Removed
    }

    /// Advances the state machine to where it should be at `now`.
    ///
    /// Expired deadlines resolve in order, each next deadline measured from
    /// the previous one. A large time jump therefore produces the same
    /// sequence of transitions a chain of real timers would have fired.
    pub fn advance(&mut self, now: Instant) {
        loop {
            let (deadline, next) = match self.phase {
                Phase::Entering => (self.phase_since + ENTER_DELAY, Phase::Visible),
                Phase::Visible => (self.phase_since + DISPLAY_DURATION, Phase::Leaving),
                Phase::Leaving => (self.phase_since + EXIT_DELAY, Phase::Removed),
                Phase::Removed => return,
            };
            if now < deadline {
                return;
            }
            self.phase = next;
            self.phase_since = deadline;
        }
    }

    /// Starts the exit animation.
    ///
    /// Idempotent: a notification that is already leaving or removed is left
    /// untouched and `false` is returned. Dismissing a visible notification
    /// cancels its pending auto-dismiss.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Entering | Phase::Visible => {
                self.phase = Phase::Leaving;
                self.phase_since = now;
                true
            }
            Phase::Leaving | Phase::Removed => false,
        }
    }
}
