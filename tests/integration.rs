// SPDX-License-Identifier: MPL-2.0
use iced_toasts::config::{self, Config};
use iced_toasts::design_tokens::timing;
use iced_toasts::{Error, Position, Status, ToastEntry, Toasts};
use std::time::{Duration, Instant};
use tempfile::tempdir;

const MS: fn(u64) -> Duration = Duration::from_millis;

/// Drives the manager with the real tick granularity from `from` up to and
/// including `to`.
fn run_ticks(toasts: &mut Toasts, from: Instant, to: Instant) {
    let mut now = from;
    while now < to {
        now += timing::TICK_INTERVAL;
        toasts.tick(now);
    }
}

#[test]
fn default_success_toast_lives_a_full_lifecycle() {
    let t0 = Instant::now();
    let mut toasts = Toasts::new();
    toasts.add_at(ToastEntry::success("a", "Saved"), t0);

    let toast = toasts.iter().next().expect("toast should be present");
    assert_eq!(toast.entry().position(), Position::BottomCenter);
    assert_eq!(toast.entry().duration(), timing::DEFAULT_DURATION);
    assert_eq!(toast.instance().progress(), 100.0);
    assert!(!toast.instance().mounted());

    // Mounts within the first tick
    toasts.tick(t0 + timing::TICK_INTERVAL);
    assert!(toasts.iter().next().unwrap().instance().mounted());

    // Countdown reaches zero by the default duration
    run_ticks(&mut toasts, t0 + timing::TICK_INTERVAL, t0 + timing::DEFAULT_DURATION);
    let toast = toasts.iter().next().expect("still exiting");
    assert_eq!(toast.instance().progress(), 0.0);

    // And the entry disappears after the exit animation
    run_ticks(
        &mut toasts,
        t0 + timing::DEFAULT_DURATION,
        t0 + timing::DEFAULT_DURATION + timing::EXIT_ANIMATION + timing::TICK_INTERVAL,
    );
    assert!(toasts.is_empty());
}

#[test]
fn second_add_with_same_id_is_ignored() {
    let t0 = Instant::now();
    let mut toasts = Toasts::new();

    toasts.add_at(ToastEntry::error("x", "Oops").with_duration(MS(1000)), t0);
    toasts.tick(t0 + MS(50));
    toasts.add_at(ToastEntry::error("x", "Oops2").with_duration(MS(1000)), t0 + MS(50));

    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts.iter().next().unwrap().entry().message(), "Oops");
}

#[test]
fn removing_right_after_adding_leaves_no_trace() {
    let t0 = Instant::now();
    let mut toasts = Toasts::new();

    toasts.add_at(ToastEntry::info("y", "Bye").with_duration(MS(500)), t0);
    assert!(toasts.remove_toast("y"));

    // Nothing happens when the original 500ms would have elapsed; the
    // redundant hard deadline is absorbed by idempotent removal.
    run_ticks(&mut toasts, t0, t0 + MS(1000));
    assert!(toasts.is_empty());
}

#[test]
fn manual_dismiss_beats_the_countdown() {
    let t0 = Instant::now();
    let mut toasts = Toasts::new();
    toasts.add_at(
        ToastEntry::warning("w", "hold on").with_duration(Duration::from_secs(30)),
        t0,
    );
    toasts.tick(t0 + timing::TICK_INTERVAL);

    toasts.handle_message(iced_toasts::Message::Dismiss("w".to_string()));
    let toast = toasts.iter().next().expect("still exiting");
    assert!(!toast.instance().mounted());
    assert!(toast.instance().is_exiting());

    // Gone within the exit delay plus one tick of slack
    let dismissed_at = Instant::now();
    run_ticks(
        &mut toasts,
        dismissed_at,
        dismissed_at + timing::EXIT_ANIMATION + timing::TICK_INTERVAL,
    );
    assert!(toasts.is_empty());
}

#[test]
fn handle_is_a_usage_error_after_the_manager_is_dropped() {
    let toasts = Toasts::new();
    let handle = toasts.handle();
    drop(toasts);

    let err = handle.add_toast(ToastEntry::info("late", "too late"));
    assert!(matches!(err, Err(Error::Handle)));
}

#[test]
fn enum_strings_are_validated_at_the_boundary() {
    assert!("success".parse::<Status>().is_ok());
    assert!(matches!(
        "catastrophic".parse::<Status>(),
        Err(Error::UnknownStatus(_))
    ));

    assert!("top-center".parse::<Position>().is_ok());
    assert!(matches!(
        "center-center".parse::<Position>(),
        Err(Error::UnknownPosition(_))
    ));
}

#[test]
fn config_file_drives_manager_defaults() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("toasts.toml");

    let written = Config {
        default_duration_ms: Some(1200),
        default_position: Some(Position::TopRight),
        show_progress: Some(true),
    };
    config::save_to_path(&written, &path).expect("failed to write config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let mut toasts = Toasts::with_config(loaded);
    toasts.add_toast("cfg", "configured", Status::Info);

    let toast = toasts.iter().next().unwrap();
    assert_eq!(toast.entry().duration(), MS(1200));
    assert_eq!(toast.entry().position(), Position::TopRight);
}
