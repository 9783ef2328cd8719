// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Toasts` manager owns the collection of active notifications. It
//! deduplicates by caller-supplied id, keeps insertion order, schedules a
//! hard-removal deadline per entry and advances every instance's state
//! machine from a single `tick` entry point.

use super::entry::ToastEntry;
use super::handle::{Command, ToastHandle};
use super::instance::Instance;
use crate::config::Config;
use crate::design_tokens::timing;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Messages for toast state changes, produced by the overlay widgets and
/// the time subscription.
#[derive(Debug, Clone)]
pub enum Message {
    /// Start the two-phase exit for a specific toast.
    Dismiss(String),
    /// Advance every toast state machine to the given instant.
    Tick(Instant),
}

/// One entry together with its render state.
#[derive(Debug, Clone)]
pub struct ActiveToast {
    entry: ToastEntry,
    instance: Instance,
}

impl ActiveToast {
    #[must_use]
    pub fn entry(&self) -> &ToastEntry {
        &self.entry
    }

    #[must_use]
    pub fn instance(&self) -> &Instance {
        &self.instance
    }
}

/// The manager's unconditional removal timestamp for an entry.
///
/// Deadlines deliberately survive early removal of their entry: a deadline
/// firing against an absent id is a no-op because removal is idempotent.
#[derive(Debug, Clone)]
struct Deadline {
    id: String,
    at: Instant,
}

/// Manages the collection of active toasts.
#[derive(Debug)]
pub struct Toasts {
    /// Active toasts in insertion order; never re-ordered on update.
    toasts: Vec<ActiveToast>,
    /// Pending hard-removal deadlines.
    deadlines: Vec<Deadline>,
    /// Commands queued by handles, applied on `drain`.
    commands: UnboundedReceiver<Command>,
    command_tx: UnboundedSender<Command>,
    config: Config,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new()
    }
}

impl Toasts {
    /// Creates an empty manager with the canonical defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty manager using the given configuration for defaults.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        let (command_tx, commands) = mpsc::unbounded_channel();
        Self {
            toasts: Vec::new(),
            deadlines: Vec::new(),
            commands,
            command_tx,
            config,
        }
    }

    /// Returns a cloneable handle for raising toasts from elsewhere in the
    /// application.
    #[must_use]
    pub fn handle(&self) -> ToastHandle {
        ToastHandle::new(self.command_tx.clone())
    }

    /// Adds a toast with the configured default duration and position.
    ///
    /// Shorthand for [`Toasts::add`] with an unconfigured entry.
    pub fn add_toast(
        &mut self,
        id: impl Into<String>,
        message: impl Into<String>,
        status: super::Status,
    ) -> bool {
        let entry = ToastEntry::new(id, message, status)
            .with_duration(self.config.default_duration())
            .with_position(self.config.default_position());
        self.add(entry)
    }

    /// Adds a toast entry, timestamped now.
    pub fn add(&mut self, entry: ToastEntry) -> bool {
        self.add_at(entry, Instant::now())
    }

    /// Adds a toast entry as of `now`.
    ///
    /// If an entry with the same id is already present this is a no-op: the
    /// original entry, its render state and its deadline are left untouched.
    /// Otherwise the entry is appended and, unless sticky, a hard-removal
    /// deadline is scheduled one exit-animation length past the duration so
    /// the instance normally finishes first and the deadline fires
    /// redundantly.
    pub fn add_at(&mut self, entry: ToastEntry, now: Instant) -> bool {
        if self.toasts.iter().any(|t| t.entry.id() == entry.id()) {
            log::debug!("duplicate toast id {:?} ignored", entry.id());
            return false;
        }

        log::debug!(
            "toast added: id={:?} status={} position={}",
            entry.id(),
            entry.status(),
            entry.position()
        );

        if !entry.is_sticky() {
            self.deadlines.push(Deadline {
                id: entry.id().to_string(),
                at: now + entry.duration() + timing::EXIT_ANIMATION,
            });
        }

        let instance = Instance::new(entry.duration(), now);
        self.toasts.push(ActiveToast { entry, instance });
        true
    }

    /// Removes the entry with the given id, if present. Idempotent.
    ///
    /// Returns whether an entry was removed. The entry's deadline, if any,
    /// is left in place and will fire redundantly.
    pub fn remove_toast(&mut self, id: &str) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.entry.id() != id);
        let removed = self.toasts.len() < before;
        if !removed {
            log::trace!("remove_toast on absent id {:?}", id);
        }
        removed
    }

    /// Starts the two-phase exit for the given id, as from the close
    /// button. No-op on an absent id.
    pub fn dismiss(&mut self, id: &str, now: Instant) {
        if let Some(toast) = self.toasts.iter_mut().find(|t| t.entry.id() == id) {
            toast.instance.close(now);
        }
    }

    /// Applies commands queued through handles.
    pub fn drain(&mut self, now: Instant) {
        while let Ok(command) = self.commands.try_recv() {
            match command {
                Command::Add(entry) => {
                    self.add_at(entry, now);
                }
                Command::Remove(id) => {
                    self.remove_toast(&id);
                }
            }
        }
    }

    /// Advances every toast to `now`: fires elapsed hard-removal deadlines,
    /// steps each instance's state machine and removes instances that
    /// completed their exit.
    pub fn tick(&mut self, now: Instant) {
        let mut fired = Vec::new();
        self.deadlines.retain(|deadline| {
            if now >= deadline.at {
                fired.push(deadline.id.clone());
                false
            } else {
                true
            }
        });
        for id in fired {
            if self.remove_toast(&id) {
                log::debug!("toast {:?} removed by hard deadline", id);
            }
        }

        self.toasts.retain_mut(|toast| {
            let finished = toast.instance.tick(now);
            if finished {
                log::debug!("toast {:?} finished its exit", toast.entry.id());
            }
            !finished
        });
    }

    /// Handles a toast message from the overlay or the subscription.
    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => self.dismiss(&id, Instant::now()),
            Message::Tick(now) => {
                self.drain(now);
                self.tick(now);
            }
        }
    }

    /// A periodic tick while any toast is active or queued, `none`
    /// otherwise.
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if self.toasts.is_empty() && self.commands.is_empty() {
            iced::Subscription::none()
        } else {
            iced::time::every(timing::TICK_INTERVAL).map(Message::Tick)
        }
    }

    /// Active toasts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveToast> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Whether overlays should render the countdown track.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.config.show_progress()
    }

    /// Removes every active toast. Deadlines already scheduled fire
    /// redundantly later.
    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Position, Status};
    use super::*;
    use std::time::Duration;

    const MS: fn(u64) -> Duration = Duration::from_millis;

    #[test]
    fn new_manager_is_empty() {
        let toasts = Toasts::new();
        assert_eq!(toasts.len(), 0);
        assert!(toasts.is_empty());
    }

    #[test]
    fn duplicate_add_is_a_no_op() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();

        assert!(toasts.add_at(ToastEntry::error("x", "Oops").with_duration(MS(1000)), t0));
        assert!(!toasts.add_at(
            ToastEntry::error("x", "Oops2").with_duration(MS(1000)),
            t0 + MS(50)
        ));

        assert_eq!(toasts.len(), 1);
        let survivor = toasts.iter().next().unwrap();
        assert_eq!(survivor.entry().message(), "Oops");
    }

    #[test]
    fn remove_toast_is_idempotent() {
        let mut toasts = Toasts::new();
        toasts.add_at(ToastEntry::info("a", "hi"), Instant::now());

        assert!(toasts.remove_toast("a"));
        assert!(!toasts.remove_toast("a"));
        assert!(!toasts.remove_toast("never-added"));
        assert!(toasts.is_empty());
    }

    #[test]
    fn entries_keep_insertion_order() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        toasts.add_at(ToastEntry::info("a", "1"), t0);
        toasts.add_at(ToastEntry::info("b", "2"), t0);
        toasts.add_at(ToastEntry::info("c", "3"), t0);

        let ids: Vec<&str> = toasts.iter().map(|t| t.entry().id()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn auto_close_removes_after_duration_plus_exit() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        toasts.add_at(ToastEntry::success("a", "Saved").with_duration(MS(1000)), t0);

        // Drive with the real tick granularity
        let mut now = t0;
        while now < t0 + MS(999) {
            now += timing::TICK_INTERVAL;
            toasts.tick(now);
        }
        assert_eq!(toasts.len(), 1, "never removed before the duration");

        toasts.tick(t0 + MS(1000));
        assert_eq!(toasts.len(), 1, "exit animation still playing");
        assert!(toasts.iter().next().unwrap().instance().is_exiting());

        toasts.tick(t0 + MS(1300));
        assert!(toasts.is_empty());
    }

    #[test]
    fn sticky_toast_is_never_auto_removed() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        toasts.add_at(ToastEntry::error("e", "broken").sticky(), t0);

        toasts.tick(t0 + Duration::from_secs(3600));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.iter().next().unwrap().instance().progress(), 100.0);

        // Manual dismissal still works
        toasts.dismiss("e", t0 + Duration::from_secs(3600));
        toasts.tick(t0 + Duration::from_secs(3600) + timing::EXIT_ANIMATION);
        assert!(toasts.is_empty());
    }

    #[test]
    fn dismiss_cuts_a_long_countdown_short() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        toasts.add_at(
            ToastEntry::warning("w", "later").with_duration(Duration::from_secs(60)),
            t0,
        );
        toasts.tick(t0 + MS(100));

        toasts.dismiss("w", t0 + MS(500));
        toasts.tick(t0 + MS(700));
        assert_eq!(toasts.len(), 1, "exit animation still playing");

        toasts.tick(t0 + MS(800));
        assert!(toasts.is_empty());
    }

    #[test]
    fn dismiss_on_absent_id_is_a_no_op() {
        let mut toasts = Toasts::new();
        toasts.dismiss("ghost", Instant::now());
        assert!(toasts.is_empty());
    }

    #[test]
    fn early_removal_leaves_no_later_effect() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        toasts.add_at(ToastEntry::info("y", "Bye").with_duration(MS(500)), t0);
        toasts.remove_toast("y");

        // The hard deadline fires redundantly against the absent id.
        toasts.tick(t0 + MS(500));
        toasts.tick(t0 + MS(900));
        assert!(toasts.is_empty());

        // A new toast with the same id is unaffected by the stale deadline.
        toasts.add_at(ToastEntry::info("z", "hello").with_duration(MS(5000)), t0 + MS(1000));
        toasts.tick(t0 + MS(1100));
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn hard_deadline_removes_a_toast_whose_exit_stalled() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        toasts.add_at(ToastEntry::info("s", "stall").with_duration(MS(1000)), t0);

        // No intermediate ticks at all: the deadline alone cleans up.
        toasts.tick(t0 + MS(1300));
        assert!(toasts.is_empty());
    }

    #[test]
    fn handle_commands_apply_on_drain() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        let handle = toasts.handle();

        handle
            .add_toast(ToastEntry::success("h", "from a handle"))
            .unwrap();
        assert!(toasts.is_empty(), "commands are queued, not applied");

        toasts.drain(t0);
        assert_eq!(toasts.len(), 1);

        handle.remove_toast("h").unwrap();
        toasts.drain(t0 + MS(10));
        assert!(toasts.is_empty());
    }

    #[test]
    fn tick_message_drains_pending_commands() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        let handle = toasts.handle();
        handle.add_toast(ToastEntry::info("m", "queued")).unwrap();

        toasts.handle_message(Message::Tick(t0));
        assert_eq!(toasts.len(), 1);
    }

    #[test]
    fn config_defaults_apply_to_add_toast() {
        let config = Config {
            default_duration_ms: Some(1500),
            default_position: Some(Position::TopLeft),
            show_progress: Some(false),
        };
        let mut toasts = Toasts::with_config(config);
        toasts.add_toast("c", "configured", Status::Info);

        let toast = toasts.iter().next().unwrap();
        assert_eq!(toast.entry().duration(), MS(1500));
        assert_eq!(toast.entry().position(), Position::TopLeft);
        assert!(!toasts.show_progress());
    }

    #[test]
    fn clear_removes_everything() {
        let t0 = Instant::now();
        let mut toasts = Toasts::new();
        toasts.add_at(ToastEntry::info("a", "1"), t0);
        toasts.add_at(ToastEntry::info("b", "2"), t0);

        toasts.clear();
        assert!(toasts.is_empty());
    }
}
