// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the contact form and the
//! toast overlay.
//!
//! The `App` struct wires together the form component, the notification
//! manager, and localization, and translates component events into side
//! effects (scheduling the simulated submission, pushing notifications).
//! All timer-driven behavior funnels through `Message::Tick`, keeping the
//! notification lifecycles deterministic under test.

use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::contact_form::{self, SUBMIT_DELAY};
use crate::ui::notifications::{Manager as NotificationManager, NotificationMessage, Toast};
use crate::ui::theming::ThemeMode;
use iced::{time, window, Element, Length, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Cadence of the notification lifecycle tick while toasts are on screen.
const TICK_INTERVAL: std::time::Duration = std::time::Duration::from_millis(100);

/// Root Iced application state bridging UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    form: contact_form::State,
    notifications: NotificationManager,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("form_sending", &self.form.is_sending())
            .field("live_notifications", &self.notifications.live_count())
            .finish()
    }
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(contact_form::Message),
    Notification(NotificationMessage),
    /// Periodic tick driving notification lifecycle timers.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(|state: &App| state.title())
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            form: contact_form::State::new(),
            notifications: NotificationManager::new(),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state from persisted configuration and the
    /// CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let app = App {
            i18n,
            theme_mode: config.theme_mode,
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        // Tick only while there are toasts whose lifecycles need driving
        if self.notifications.has_notifications() {
            time::every(TICK_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Form(form_message) => self.handle_form_message(form_message),
            Message::Notification(notification_message) => {
                self.notifications
                    .handle_message(&notification_message, Instant::now());
                Task::none()
            }
            Message::Tick(now) => {
                self.notifications.tick(now);
                Task::none()
            }
        }
    }

    fn handle_form_message(&mut self, message: contact_form::Message) -> Task<Message> {
        match self.form.update(message) {
            contact_form::Event::None => Task::none(),
            contact_form::Event::Notify(notification) => {
                self.notifications.push(notification);
                Task::none()
            }
            contact_form::Event::SubmissionStarted => Task::perform(
                async { tokio::time::sleep(SUBMIT_DELAY).await },
                |()| Message::Form(contact_form::Message::SubmissionFinished),
            ),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let screen = self.form.view(&self.i18n).map(Message::Form);
        let overlay =
            Toast::view_overlay(&self.notifications, &self.i18n).map(Message::Notification);

        iced::widget::stack([screen, overlay])
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::{
        Notification, Phase, Severity, DISPLAY_DURATION, ENTER_DELAY, EXIT_DELAY,
    };
    use std::time::Duration;

    fn fill_valid_form(app: &mut App) {
        for message in [
            contact_form::Message::FirstNameChanged("A".into()),
            contact_form::Message::LastNameChanged("B".into()),
            contact_form::Message::EmailChanged("a@b.co".into()),
            contact_form::Message::SubjectChanged("S".into()),
            contact_form::Message::MessageChanged("M".into()),
        ] {
            let _ = app.update(Message::Form(message));
        }
    }

    #[test]
    fn new_app_has_no_notifications() {
        let app = App::default();
        assert!(!app.notifications.has_notifications());
        assert!(!app.form.is_sending());
    }

    #[test]
    fn invalid_submission_pushes_exactly_one_error_toast() {
        let mut app = App::default();
        fill_valid_form(&mut app);
        let _ = app.update(Message::Form(contact_form::Message::EmailChanged(
            "broken".into(),
        )));

        let _ = app.update(Message::Form(contact_form::Message::SubmitPressed));

        assert_eq!(app.notifications.live_count(), 1);
        let toast = app.notifications.live().next().expect("one toast");
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.message_key(), "contact-error-email");
        assert!(!app.form.is_sending());
    }

    #[test]
    fn valid_submission_flows_through_to_success_toast() {
        let mut app = App::default();
        fill_valid_form(&mut app);

        let _ = app.update(Message::Form(contact_form::Message::SubmitPressed));
        assert!(app.form.is_sending());
        assert!(!app.notifications.has_notifications());

        // Simulate the delayed completion task firing
        let _ = app.update(Message::Form(contact_form::Message::SubmissionFinished));
        assert!(!app.form.is_sending());
        assert!(app.form.is_blank());

        let toast = app.notifications.live().next().expect("success toast");
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(toast.message_key(), "contact-submit-success");
    }

    #[test]
    fn ticks_expire_toasts_and_stop_the_subscription() {
        let mut app = App::default();
        let notification = Notification::info("contact-submit-success");
        let t0 = notification.created_at();
        app.notifications.push(notification);

        let _ = app.update(Message::Tick(t0 + ENTER_DELAY));
        assert_eq!(
            app.notifications.live().next().expect("live toast").phase(),
            Phase::Visible
        );

        let _ = app.update(Message::Tick(
            t0 + ENTER_DELAY + DISPLAY_DURATION + EXIT_DELAY,
        ));
        assert!(!app.notifications.has_notifications());
    }

    #[test]
    fn dismiss_message_starts_the_exit_animation() {
        let mut app = App::default();
        let notification = Notification::error("contact-error-required");
        let id = app.notifications.push(notification);

        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));

        let toast = app.notifications.live().next().expect("still leaving");
        assert_eq!(toast.phase(), Phase::Leaving);

        // Repeating the dismissal must not disturb the exit in progress
        let _ = app.update(Message::Notification(NotificationMessage::Dismiss(id)));
        assert_eq!(app.notifications.live_count(), 1);
    }

    #[test]
    fn submission_delay_matches_contract() {
        assert_eq!(SUBMIT_DELAY, Duration::from_millis(2000));
    }
}
