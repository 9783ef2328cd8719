// SPDX-License-Identifier: MPL-2.0
//! Per-toast lifecycle state machine.
//!
//! The original pattern for this kind of widget is a handful of
//! independently scheduled callbacks (mount delay, progress interval,
//! duration timeout). Here all temporal behavior is folded into a single
//! deterministic [`Instance::tick`] entry point: state is recomputed from
//! `Instant`s, so there is nothing to cancel and nothing can fire for a
//! dropped instance.

use crate::design_tokens::timing;
use std::time::{Duration, Instant};

/// Lifecycle phase of a toast.
///
/// `Pending` renders the off-position transform, `Shown` the resting
/// position; `Exiting` re-applies the off-position transform while the
/// exit animation plays. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Pending,
    Shown,
    Exiting { since: Instant },
    Closed,
}

/// The time-evolving presentation state of one toast entry.
#[derive(Debug, Clone)]
pub struct Instance {
    created_at: Instant,
    duration: Duration,
    phase: Phase,
    /// Visual countdown indicator, 100 down to 0. Purely cosmetic.
    progress: f32,
}

impl Instance {
    /// Creates an instance in its initial state: visible, not yet mounted,
    /// countdown full.
    pub fn new(duration: Duration, now: Instant) -> Self {
        Self {
            created_at: now,
            duration,
            phase: Phase::Pending,
            progress: 100.0,
        }
    }

    /// Advances the state machine to `now`.
    ///
    /// Returns `true` exactly once, on the tick where the instance reaches
    /// its terminal state; the caller then removes the entry. Subsequent
    /// ticks are no-ops.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.phase == Phase::Pending
            && now.duration_since(self.created_at) >= timing::MOUNT_DELAY
        {
            self.phase = Phase::Shown;
        }

        if self.phase == Phase::Shown && !self.duration.is_zero() {
            let elapsed = now.duration_since(self.created_at);
            if elapsed >= self.duration {
                self.progress = 0.0;
                // Anchor the exit to the logical deadline, not the tick
                // arrival, so coarse ticks don't stretch the exit window.
                self.phase = Phase::Exiting {
                    since: self.created_at + self.duration,
                };
            } else {
                self.progress =
                    100.0 * (1.0 - elapsed.as_secs_f32() / self.duration.as_secs_f32());
            }
        }

        if let Phase::Exiting { since } = self.phase {
            if now.duration_since(since) >= timing::EXIT_ANIMATION {
                self.phase = Phase::Closed;
                return true;
            }
        }

        false
    }

    /// Starts the manual-close path: the same two-phase exit as auto-close,
    /// beginning at `now` and abandoning any remaining countdown.
    pub fn close(&mut self, now: Instant) {
        if matches!(self.phase, Phase::Pending | Phase::Shown) {
            self.phase = Phase::Exiting { since: now };
        }
    }

    /// Whether the toast renders at all. `false` is terminal.
    #[must_use]
    pub fn visible(&self) -> bool {
        self.phase != Phase::Closed
    }

    /// Whether the resting (on-position) transform is applied; `false`
    /// while entering or exiting.
    #[must_use]
    pub fn mounted(&self) -> bool {
        self.phase == Phase::Shown
    }

    /// Countdown indicator in `0.0..=100.0`. Stays at 100 for sticky
    /// toasts, freezes on manual close.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.phase == Phase::Closed
    }

    /// Whether the exit animation is currently playing.
    #[must_use]
    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting { .. })
    }

    /// How far on-screen the toast is at `now`, in `0.0..=1.0`: ramps up
    /// over the enter animation after mounting and back down while exiting.
    /// Drives the slide inset in the overlay.
    #[must_use]
    pub fn slide_progress(&self, now: Instant) -> f32 {
        let ratio = |since: Instant| {
            now.duration_since(since).as_secs_f32() / timing::EXIT_ANIMATION.as_secs_f32()
        };
        match self.phase {
            Phase::Pending | Phase::Closed => 0.0,
            Phase::Shown => ratio(self.created_at + timing::MOUNT_DELAY).clamp(0.0, 1.0),
            Phase::Exiting { since } => 1.0 - ratio(since).clamp(0.0, 1.0),
        }
    }
}
