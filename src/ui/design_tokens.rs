// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_toast::ui::design_tokens::{palette, opacity};
use iced::Color;

// The toast card background at half fade
let fading = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::ACCENT_700
};
```

## Modification

⚠️ Tokens are designed to be consistent. Before modifying:
1. Check the impact on all components
2. Maintain ratios (e.g., MD = XS * 2)
3. Run validation tests
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
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (plum scale) - ACCENT_700 is the toast card background
    pub const ACCENT_500: Color = Color::from_rgb(0.44, 0.30, 0.51);
    pub const ACCENT_700: Color = Color::from_rgb(0.294, 0.180, 0.345);
    pub const ACCENT_900: Color = Color::from_rgb(0.18, 0.11, 0.21);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SHADOW: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
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
    // Toast card
    pub const TOAST_MAX_WIDTH: f32 = 320.0;
    pub const TOAST_PADDING_V: f32 = 10.0;
    pub const TOAST_PADDING_H: f32 = 14.0;

    /// Gap between the toast stack and the bottom edge of the window.
    pub const TOAST_BOTTOM_MARGIN: f32 = 24.0;

    // Interactive element heights
    pub const INPUT_HEIGHT: f32 = 40.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Medium title - App name, prominent labels
    pub const TITLE_MD: f32 = 20.0;

    /// Standard body - Most UI text, labels, toast messages
    pub const BODY: f32 = 14.0;

    /// Caption - Hints, secondary labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::opacity;
    use iced::{Color, Shadow, Vector};

    /// Drop shadow under a toast card (0 8 24 at 20% black).
    pub const TOAST: Shadow = Shadow {
        color: Color {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: opacity::SHADOW,
        },
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };
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
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);

    // Sizing validation
    assert!(sizing::TOAST_MAX_WIDTH > 0.0);
    assert!(sizing::TOAST_PADDING_H > sizing::TOAST_PADDING_V);
    assert!(sizing::TOAST_BOTTOM_MARGIN > 0.0);

    // Typography validation
    assert!(typography::TITLE_MD > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    // Radius validation
    assert!(radius::MD > radius::SM);

    // Color validation
    assert!(palette::ACCENT_700.r >= 0.0 && palette::ACCENT_700.r <= 1.0);
};
