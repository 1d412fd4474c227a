// SPDX-License-Identifier: MPL-2.0
//! UI building blocks: design tokens, theming, and the toast widget.

pub mod design_tokens;
pub mod theming;
pub mod toast;

pub use toast::Toast;
