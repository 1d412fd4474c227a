// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the toast presenter to its on-screen surface and
//! drives the demo UI. This file intentionally keeps policy decisions
//! (window sizing, timer runtime ownership, config resolution) close to the
//! main update loop so it is easy to audit user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::notifications::{Presenter, Timings};
use crate::surface::SceneSurface;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 320;
pub const MIN_WINDOW_HEIGHT: u32 = 240;

/// Root Iced application state bridging the presenter, its surface, and
/// persisted preferences.
pub struct App {
    surface: Arc<SceneSurface>,
    presenter: Presenter<SceneSurface>,
    /// Current contents of the demo input field.
    input: String,
    theme_mode: ThemeMode,
    /// Runtime executing the presenter's timer tasks. Held so the tasks
    /// live exactly as long as the application.
    _runtime: tokio::runtime::Runtime,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("input", &self.input)
            .field("live_toasts", &self.surface.attached_count())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally shows a toast for the
    /// message received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            warn!("{warning}");
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .expect("Failed to start the toast timer runtime");

        let timings = Timings::from_config(&config.toast);
        let surface = Arc::new(SceneSurface::new(timings.fade()));
        let presenter = Presenter::new(Arc::clone(&surface), timings, runtime.handle().clone());

        let app = App {
            surface,
            presenter,
            input: String::new(),
            theme_mode: config.general.theme_mode,
            _runtime: runtime,
        };

        if let Some(message) = flags.initial_message {
            app.presenter.show(message);
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Iced Toast".to_string()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.surface.has_nodes())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_names_the_app() {
        let (app, _task) = App::new(Flags::default());
        assert_eq!(app.title(), "Iced Toast");
    }

    #[test]
    fn startup_flag_shows_initial_toast() {
        let (app, _task) = App::new(Flags {
            initial_message: Some("hello".to_string()),
        });
        let nodes = app.surface.snapshot();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].message, "hello");
    }

    #[test]
    fn show_toast_attaches_node_with_input_text() {
        let (mut app, _task) = App::new(Flags::default());

        let _ = app.update(Message::InputChanged("saved".to_string()));
        let _ = app.update(Message::ShowToast);

        let nodes = app.surface.snapshot();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].message, "saved");
    }

    #[test]
    fn tick_is_a_no_op_without_toasts() {
        let (mut app, _task) = App::new(Flags::default());
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(!app.surface.has_nodes());
    }
}
