// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (save success, errors, etc.) without blocking
//! interaction, then slide back out and remove themselves.
//!
//! # Components
//!
//! - [`entry`] - Core `ToastEntry` struct with `Status` and `Position` enums
//! - [`instance`] - Per-toast lifecycle state machine (mount, countdown, exit)
//! - [`manager`] - `Toasts` manager for the active collection and timing
//! - [`handle`] - Cloneable `ToastHandle` for raising toasts from anywhere
//! - [`overlay`] - Overlay widget rendering every active toast
//!
//! # Usage
//!
//! ```
//! use iced_toasts::toast::{ToastEntry, Toasts};
//!
//! // Create a manager (owned by the application root)
//! let mut toasts = Toasts::new();
//!
//! // Raise a toast
//! toasts.add(ToastEntry::success("save", "Image saved"));
//!
//! // In update: toasts.handle_message(message)
//! // In subscription: toasts.subscription()
//! // In view: overlay::view_overlay(&toasts).map(Message::Toast)
//! ```
//!
//! # Design Considerations
//!
//! - Toast duration: 3s default, `Duration::ZERO` for sticky toasts
//! - Position: six screen anchors, bottom-center by default
//! - Temporal behavior: a single `tick` entry point driven by one
//!   `iced::time::every` subscription; no per-toast timers

pub mod entry;
pub mod handle;
pub mod instance;
pub mod manager;
pub mod overlay;

pub use entry::{Edge, Position, Status, ToastEntry};
pub use handle::ToastHandle;
pub use instance::Instance;
pub use manager::{ActiveToast, Message, Toasts};
