// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is an animated toast notification overlay for applications
//! built with the Iced GUI framework.
//!
//! It provides a [`Toasts`] manager owning the set of active notifications,
//! a per-notification lifecycle state machine (mount animation, countdown
//! progress, two-phase exit), and an overlay view that anchors each toast
//! to one of six screen positions.

pub mod config;
pub mod design_tokens;
pub mod error;
pub mod icons;
pub mod toast;

pub use error::{Error, Result};
pub use toast::{Message, Position, Status, ToastEntry, ToastHandle, Toasts};
