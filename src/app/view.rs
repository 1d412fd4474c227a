// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The demo chrome (title, input, button) sits at the bottom of a `Stack`;
//! the toast overlay is pushed on top so toasts render above everything.

use super::{App, Message};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::Toast;
use iced::widget::{button, text, text_input, Column, Container, Row, Stack};
use iced::{alignment, Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let input = text_input("Something worth announcing", &app.input)
        .on_input(Message::InputChanged)
        .on_submit(Message::ShowToast)
        .padding(spacing::XS);

    let show_button = button(text("Show toast").size(typography::BODY))
        .on_press(Message::ShowToast)
        .padding([spacing::XS, spacing::SM]);

    let controls = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(input)
        .push(show_button);

    let content = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(text("Iced Toast").size(typography::TITLE_MD))
            .push(controls),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::LG);

    let nodes = app.surface.snapshot();
    let overlay = Toast::view_overlay(&nodes);

    Stack::new().push(content).push(overlay).into()
}
