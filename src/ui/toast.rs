// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering surface nodes.
//!
//! Toasts are small plum cards with light text, anchored bottom-center and
//! drawn at whatever opacity their node's transition currently presents.

use crate::surface::NodeSnapshot;
use crate::ui::design_tokens::{palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{container, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast node at its sampled opacity.
    pub fn view<'a, Message: 'a>(node: &NodeSnapshot) -> Element<'a, Message> {
        let opacity = node.opacity.clamp(0.0, 1.0);

        let message_widget = Text::new(node.message.clone())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(palette::WHITE, opacity)),
            });

        Container::new(message_widget)
            .max_width(sizing::TOAST_MAX_WIDTH)
            .padding([sizing::TOAST_PADDING_V, sizing::TOAST_PADDING_H])
            .style(move |_theme: &Theme| toast_container_style(opacity))
            .into()
    }

    /// Renders the toast overlay with all attached nodes.
    ///
    /// Positions toasts bottom-center, stacked in attach order; later nodes
    /// end up closer to the bottom edge.
    pub fn view_overlay<'a, Message: 'a>(nodes: &[NodeSnapshot]) -> Element<'a, Message> {
        if nodes.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let toasts: Vec<Element<'a, Message>> = nodes.iter().map(Self::view).collect();

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(iced::Padding::ZERO.bottom(sizing::TOAST_BOTTOM_MARGIN))
            .into()
    }
}

/// Scales a color's alpha the way element-level opacity would.
fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Style function for the toast card.
fn toast_container_style(opacity: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(faded(palette::ACCENT_700, opacity))),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: iced::Shadow {
            color: faded(shadow::TOAST.color, opacity),
            ..shadow::TOAST
        },
        text_color: Some(faded(palette::WHITE, opacity)),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_style_uses_accent_background() {
        let style = toast_container_style(1.0);

        match style.background {
            Some(iced::Background::Color(color)) => {
                assert_eq!(color.r, palette::ACCENT_700.r);
                assert_eq!(color.a, 1.0);
            }
            _ => panic!("expected a solid background color"),
        }
        assert_eq!(style.border.radius, radius::MD.into());
    }

    #[test]
    fn transparent_style_fades_all_layers() {
        let style = toast_container_style(0.0);

        match style.background {
            Some(iced::Background::Color(color)) => assert_eq!(color.a, 0.0),
            _ => panic!("expected a solid background color"),
        }
        assert_eq!(style.shadow.color.a, 0.0);
        match style.text_color {
            Some(color) => assert_eq!(color.a, 0.0),
            None => panic!("expected an explicit text color"),
        }
    }

    #[test]
    fn faded_scales_existing_alpha() {
        let half_shadow = faded(shadow::TOAST.color, 0.5);
        assert_eq!(half_shadow.a, shadow::TOAST.color.a * 0.5);
    }
}
