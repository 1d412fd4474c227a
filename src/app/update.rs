// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.

use super::{App, Message};
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::InputChanged(value) => {
            app.input = value;
        }
        Message::ShowToast => {
            // An empty input still produces a toast; the lifecycle makes no
            // special case for empty text.
            app.presenter.show(app.input.clone());
        }
        Message::Tick(_) => {
            app.surface.notify_repaint();
        }
    }

    Task::none()
}
