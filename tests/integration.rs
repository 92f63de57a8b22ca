// SPDX-License-Identifier: MPL-2.0
use iced_contact::config::{self, Config};
use iced_contact::i18n::fluent::I18n;
use iced_contact::ui::notifications::{
    Manager, Notification, Phase, Severity, DISPLAY_DURATION, ENTER_DELAY, EXIT_DELAY,
};
use iced_contact::ui::theming::ThemeMode;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(
        i18n_en.tr("contact-error-required"),
        "Please fill in all required fields"
    );

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: ThemeMode::System,
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_ne!(
        i18n_fr.tr("contact-error-required"),
        "Please fill in all required fields"
    );
}

#[test]
fn cli_language_overrides_config() {
    let config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
    };
    let i18n = I18n::new(Some("fr".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
}

#[test]
fn notification_messages_resolve_to_fixed_strings() {
    let config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
    };
    let i18n = I18n::new(None, &config);

    assert_eq!(
        i18n.tr("contact-submit-success"),
        "Thank you for your message! Our team will respond within 24 hours."
    );
    assert_eq!(
        i18n.tr("contact-error-email"),
        "Please enter a valid email address"
    );
}

#[test]
fn notification_lifecycle_runs_on_virtual_time() {
    let mut manager = Manager::new();
    let notification = Notification::new(Severity::Info, "contact-submit-success");
    let t0 = notification.created_at();
    manager.push(notification);

    // Drive the whole lifecycle by ticking at the subscription cadence
    let full_lifecycle = ENTER_DELAY + DISPLAY_DURATION + EXIT_DELAY;
    let mut elapsed = Duration::ZERO;
    let mut saw_visible = false;
    let mut saw_leaving = false;
    while elapsed < full_lifecycle {
        elapsed += Duration::from_millis(100);
        manager.tick(t0 + elapsed);
        if let Some(n) = manager.live().next() {
            saw_visible |= n.phase() == Phase::Visible;
            saw_leaving |= n.phase() == Phase::Leaving;
        }
    }

    assert!(saw_visible, "notification should have settled");
    assert!(saw_leaving, "notification should have animated out");
    assert!(!manager.has_notifications(), "notification should be gone");
}

#[test]
fn early_dismissal_leaves_other_notifications_untouched() {
    let mut manager = Manager::new();
    let first = Notification::error("contact-error-required");
    let t0 = first.created_at();
    let first_id = manager.push(first);
    let second_id = manager.push(Notification::success("contact-submit-success"));

    manager.tick(t0 + ENTER_DELAY + Duration::from_millis(100));
    assert!(manager.dismiss(first_id, t0 + Duration::from_millis(300)));
    // A second dismissal of the same handle is a safe no-op
    assert!(!manager.dismiss(first_id, t0 + Duration::from_millis(350)));

    manager.tick(t0 + Duration::from_millis(300) + EXIT_DELAY);
    assert_eq!(manager.live_count(), 1);
    let survivor = manager.live().next().expect("second notification");
    assert_eq!(survivor.id(), second_id);
    assert_eq!(survivor.phase(), Phase::Visible);

    // The survivor still expires on its own schedule
    manager.tick(t0 + ENTER_DELAY + DISPLAY_DURATION + EXIT_DELAY + Duration::from_millis(200));
    assert!(!manager.has_notifications());
}
