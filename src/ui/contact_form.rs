// SPDX-License-Identifier: MPL-2.0
//! Contact form component: field state, submission flow, and view.
//!
//! Follows the "state down, messages up" pattern: `update` mutates the form
//! state and returns an [`Event`] describing the side effect the application
//! shell must run (show a notification, schedule the submission completion).
//! The component itself never touches timers, so the whole submission flow
//! can be driven synchronously in tests.

use crate::contact::FormInput;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::notifications::Notification;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{alignment, Element, Length};
use std::time::Duration;

/// Simulated network round trip for a submission. There is no real backend;
/// the completion always fires.
pub const SUBMIT_DELAY: Duration = Duration::from_millis(2000);

/// Raw field buffers plus the in-flight submission flag.
#[derive(Debug, Default)]
pub struct State {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
    subject: String,
    message: String,
    /// True between a successful validation and the completion message.
    /// While set, the submit control is disabled and shows the busy label.
    sending: bool,
}

/// Messages produced by the form's widgets and the completion task.
#[derive(Debug, Clone)]
pub enum Message {
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    SubjectChanged(String),
    MessageChanged(String),
    SubmitPressed,
    /// The simulated round trip finished.
    SubmissionFinished,
}

/// Side effects the application shell runs on behalf of the form.
#[derive(Debug)]
pub enum Event {
    None,
    /// Show a notification (validation error or submission success).
    Notify(Notification),
    /// Validation passed; schedule `SubmissionFinished` after [`SUBMIT_DELAY`].
    SubmissionStarted,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether a submission is in flight.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Returns whether every field buffer is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.subject.is_empty()
            && self.message.is_empty()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::FirstNameChanged(value) => {
                self.first_name = value;
                Event::None
            }
            Message::LastNameChanged(value) => {
                self.last_name = value;
                Event::None
            }
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::PhoneChanged(value) => {
                self.phone = value;
                Event::None
            }
            Message::SubjectChanged(value) => {
                self.subject = value;
                Event::None
            }
            Message::MessageChanged(value) => {
                self.message = value;
                Event::None
            }
            Message::SubmitPressed => self.submit(),
            Message::SubmissionFinished => self.finish_submission(),
        }
    }

    /// Validates the current fields and either reports the first error or
    /// starts the simulated submission. On failure the form is left
    /// untouched so the user can correct it.
    fn submit(&mut self) -> Event {
        if self.sending {
            // The button is disabled while sending; ignore stray presses
            return Event::None;
        }

        let input = FormInput::from_fields(
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone,
            &self.subject,
            &self.message,
        );

        match input.validate() {
            Ok(()) => {
                self.sending = true;
                Event::SubmissionStarted
            }
            Err(error) => Event::Notify(Notification::error(error.i18n_key())),
        }
    }

    fn finish_submission(&mut self) -> Event {
        if !self.sending {
            return Event::None;
        }

        self.first_name.clear();
        self.last_name.clear();
        self.email.clear();
        self.phone.clear();
        self.subject.clear();
        self.message.clear();
        self.sending = false;

        Event::Notify(Notification::success("contact-submit-success"))
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let title = Text::new(i18n.tr("contact-title")).size(typography::TITLE_LG);
        let hint = Text::new(i18n.tr("contact-required-hint")).size(typography::CAPTION);

        let name_row = Row::new()
            .spacing(spacing::SM)
            .push(labeled_input(
                i18n.tr("contact-first-name"),
                &self.first_name,
                Message::FirstNameChanged,
            ))
            .push(labeled_input(
                i18n.tr("contact-last-name"),
                &self.last_name,
                Message::LastNameChanged,
            ));

        let submit_label = if self.sending {
            i18n.tr("contact-submit-sending")
        } else {
            i18n.tr("contact-submit")
        };
        let submit_button = button(
            Text::new(submit_label)
                .size(typography::BODY_LG)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .on_press_maybe((!self.sending).then_some(Message::SubmitPressed))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(button::primary);

        let form = Column::new()
            .spacing(spacing::MD)
            .max_width(sizing::FORM_WIDTH)
            .push(title)
            .push(hint)
            .push(name_row)
            .push(labeled_input(
                i18n.tr("contact-email"),
                &self.email,
                Message::EmailChanged,
            ))
            .push(labeled_input(
                i18n.tr("contact-phone"),
                &self.phone,
                Message::PhoneChanged,
            ))
            .push(labeled_input(
                i18n.tr("contact-subject"),
                &self.subject,
                Message::SubjectChanged,
            ))
            .push(labeled_input(
                i18n.tr("contact-message"),
                &self.message,
                Message::MessageChanged,
            ))
            .push(submit_button);

        Container::new(form)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}

/// A label stacked over its text input.
fn labeled_input<'a>(
    label: String,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(Text::new(label).size(typography::BODY))
        .push(
            text_input("", value)
                .on_input(on_input)
                .padding(spacing::XS)
                .size(typography::BODY_LG),
        )
}
