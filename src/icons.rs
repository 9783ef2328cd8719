// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for PNG icons.
//!
//! PNG format ensures consistent cross-platform rendering. Icons are embedded
//! at compile time via `include_bytes!` and handles are cached using
//! `OnceLock` for optimal performance.
//!
//! # Usage
//!
//! ```
//! use iced_toasts::icons;
//!
//! let decoration = icons::sized(icons::bubbles_success(), 56.0);
//! ```
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `cross` not `close_toast`).

use iced::widget::image::{Handle, Image};
use iced::Length;
use std::sync::OnceLock;

// =============================================================================
// Macro for icon definition with cached handle
// =============================================================================

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Image<Handle> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_bytes(DATA));
            Image::new(handle.clone())
        }
    };
}

// =============================================================================
// Decorative Status Images
// =============================================================================

define_icon!(
    bubbles_success,
    "bubbles_success.png",
    "Green bubbles: decorative corner image for success toasts."
);
define_icon!(
    bubbles_error,
    "bubbles_error.png",
    "Red bubbles: decorative corner image for error toasts."
);
define_icon!(
    bubbles_warning,
    "bubbles_warning.png",
    "Yellow bubbles: decorative corner image for warning toasts."
);
define_icon!(
    bubbles_info,
    "bubbles_info.png",
    "Blue bubbles: decorative corner image for info toasts."
);

// =============================================================================
// Action Icons
// =============================================================================

define_icon!(cross, "cross.png", "Cross icon: X mark shape (white).");

// =============================================================================
// Helper Functions
// =============================================================================

/// Creates an icon with specified dimensions.
///
/// This is a convenience wrapper for setting both width and height.
pub fn sized(icon: Image<Handle>, size: f32) -> Image<Handle> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
