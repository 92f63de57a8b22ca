// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (submission success, validation errors, etc.)
//! without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct, severity levels, and the
//!   `Entering → Visible → Leaving → Removed` lifecycle state machine
//! - [`manager`] - `Manager` owning the live notifications
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```
//! use iced_contact::ui::notifications::{Manager, Notification, Severity};
//! use std::time::Instant;
//!
//! let mut manager = Manager::new();
//! let handle = manager.push(Notification::new(Severity::Success, "contact-submit-success"));
//!
//! // Drive lifecycles from a periodic tick
//! manager.tick(Instant::now());
//!
//! // Manual dismissal via the handle; safe to repeat
//! manager.dismiss(handle, Instant::now());
//! manager.dismiss(handle, Instant::now());
//! ```
//!
//! # Design Considerations
//!
//! - Lifecycle timing: 100ms entry, 5s on screen, 300ms exit
//! - Notifications are independent; there is no visible cap or queue
//! - Position: top-right corner, stacked vertically
//! - All timing flows through caller-supplied instants so tests can use
//!   virtual time

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{
    Notification, NotificationId, Phase, Severity, DISPLAY_DURATION, ENTER_DELAY, EXIT_DELAY,
};
pub use toast::Toast;
