// SPDX-License-Identifier: MPL-2.0
//! `iced_contact` is a contact form desktop application built with the Iced
//! GUI framework.
//!
//! It demonstrates form validation with toast-notification feedback,
//! internationalization with Fluent, user preference management, and modular
//! UI design.

pub mod app;
pub mod config;
pub mod contact;
pub mod error;
pub mod i18n;
pub mod ui;
