// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the crate's design tokens, following the W3C Design
Tokens standard.

## Organization

- **Palette**: Base colors, including one background and one close-button
  shade per toast status
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions
- **Timing**: Animation and countdown timing constants

## Examples

```
use iced_toasts::design_tokens::{palette, spacing, timing};

let success_bg = palette::SUCCESS_500;
let card_padding = spacing::MD; // 16px
let exit_delay = timing::EXIT_ANIMATION; // 300ms
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Status backgrounds (500) and close-button shades (700)
    pub const SUCCESS_500: Color = Color::from_rgb(0.306, 0.765, 0.239); // #4EC33D
    pub const SUCCESS_700: Color = Color::from_rgb(0.173, 0.467, 0.129); // #2C7721
    pub const ERROR_500: Color = Color::from_rgb(0.988, 0.180, 0.125); // #FC2E20
    pub const ERROR_700: Color = Color::from_rgb(0.580, 0.0, 0.0); // #940000
    pub const WARNING_500: Color = Color::from_rgb(0.976, 0.580, 0.231); // #F9943B
    pub const WARNING_700: Color = Color::from_rgb(0.816, 0.325, 0.004); // #D05301
    pub const INFO_500: Color = Color::from_rgb(0.396, 0.675, 0.941); // #65ACF0
    pub const INFO_700: Color = Color::from_rgb(0.165, 0.447, 0.765); // #2A72C3
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;

    /// Progress track background behind the countdown fill.
    pub const PROGRESS_TRACK: f32 = 0.3;

    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    /// Decorative bubble image in the toast corner.
    pub const BUBBLE: f32 = 56.0;

    /// Round dismiss button diameter.
    pub const CLOSE_BUTTON: f32 = 28.0;

    /// Countdown track height.
    pub const PROGRESS_TRACK: f32 = 4.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Toast title ("Success!", "Error!", ...).
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - toast message text.
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Timing
// ============================================================================

pub mod timing {
    use std::time::Duration;

    /// Delay between creation and the mount transition, so the off-position
    /// transform is rendered at least once before the slide-in.
    pub const MOUNT_DELAY: Duration = Duration::from_millis(10);

    /// Length of the enter/exit slide animation.
    pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

    /// Granularity of the toast tick subscription.
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Canonical auto-dismiss duration when the caller supplies none.
    pub const DEFAULT_DURATION: Duration = Duration::from_secs(3);
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::PROGRESS_TRACK > 0.0 && opacity::PROGRESS_TRACK < 1.0);

    // Sizing validation
    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(sizing::BUBBLE > sizing::CLOSE_BUTTON);
    assert!(sizing::TOAST_WIDTH > sizing::BUBBLE);

    // Typography validation
    assert!(typography::TITLE_MD > typography::BODY);

    // Timing validation
    assert!(timing::MOUNT_DELAY.as_millis() < timing::TICK_INTERVAL.as_millis());
    assert!(timing::TICK_INTERVAL.as_millis() < timing::EXIT_ANIMATION.as_millis());
    assert!(timing::EXIT_ANIMATION.as_millis() < timing::DEFAULT_DURATION.as_millis());
};
