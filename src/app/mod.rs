// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the sidebar and outputs.
//!
//! The `App` struct owns the input configuration, the run lifecycle, and the
//! gallery sections, and translates messages into side effects like starting
//! the mock processing delay or reloading a failed image. Policy decisions
//! (run duration, window sizing, the standard manifest) live here so
//! user-facing behavior is easy to audit.

mod message;
mod phase;
mod subscription;
mod update;
mod view;

pub use message::Message;
pub use phase::RunPhase;

use crate::gallery::{self, ImageManifest};
use crate::inputs::InputConfiguration;
use crate::ui::notifications;
use crate::ui::outputs::SectionState;
use crate::ui::sidebar;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state bridging the input form, the run trigger,
/// and the outputs gallery.
pub struct App {
    inputs: InputConfiguration,
    sidebar: sidebar::State,
    phase: RunPhase,
    manifest: ImageManifest,
    sections: Vec<SectionState>,
    /// Abort handle for the in-flight run, if any.
    run_handle: Option<iced::task::Handle>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("phase", &self.phase)
            .field("sections", &self.sections.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// How long the mock processing run takes before reporting success.
pub const RUN_DURATION: Duration = Duration::from_secs(3);

/// Builds the window settings.
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
pub fn run() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let manifest = ImageManifest::standard();
        let sections = manifest
            .entries()
            .iter()
            .map(|entry| SectionState::loading(&entry.title))
            .collect();

        Self {
            inputs: InputConfiguration::default(),
            sidebar: sidebar::State::from_config(&InputConfiguration::default()),
            phase: RunPhase::Idle,
            manifest,
            sections,
            run_handle: None,
            notifications: notifications::Manager::new(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the asynchronous load of
    /// the placeholder gallery.
    pub fn new() -> (Self, Task<Message>) {
        Self::with_manifest(ImageManifest::standard())
    }

    /// Like [`App::new`] but with an explicit manifest, so tests can point
    /// sections at fixture files.
    pub fn with_manifest(manifest: ImageManifest) -> (Self, Task<Message>) {
        let sections = manifest
            .entries()
            .iter()
            .map(|entry| SectionState::loading(&entry.title))
            .collect();

        let app = App {
            manifest: manifest.clone(),
            sections,
            ..Self::default()
        };

        let task = Task::perform(
            async move { gallery::load_all(&manifest) },
            Message::GalleryLoaded,
        );

        (app, task)
    }

    pub fn title(&self) -> String {
        String::from("Portfolio Dashboard")
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.phase, self.notifications.has_notifications())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Current state of the input form.
    pub fn inputs(&self) -> &InputConfiguration {
        &self.inputs
    }

    /// Current phase of the run trigger.
    pub fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Gallery sections in render order.
    pub fn sections(&self) -> &[SectionState] {
        &self.sections
    }

    /// Visible and queued toast notifications.
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_idle_with_loading_sections() {
        let app = App::default();
        assert_eq!(app.phase(), RunPhase::Idle);
        assert_eq!(app.sections().len(), 4);
        assert!(app.sections().iter().all(|s| !s.is_ready()));
    }

    #[test]
    fn default_inputs_match_the_form_defaults() {
        let app = App::default();
        assert_eq!(app.inputs(), &InputConfiguration::default());
    }

    #[test]
    fn run_completion_pushes_a_success_toast() {
        let mut app = App::default();
        app.phase = RunPhase::Running;

        let _ = app.update(Message::RunCompleted);

        assert_eq!(app.phase(), RunPhase::Done);
        assert_eq!(app.notifications().visible_count(), 1);
    }

    #[test]
    fn tick_settles_done_back_to_idle() {
        let mut app = App::default();
        app.phase = RunPhase::Done;

        let _ = app.update(Message::Tick(std::time::Instant::now()));

        assert_eq!(app.phase(), RunPhase::Idle);
    }

    #[test]
    fn theme_defaults_to_light() {
        let app = App::default();
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn cancel_without_a_run_is_a_no_op() {
        let mut app = App::default();

        let _ = app.update(Message::Sidebar(crate::ui::sidebar::Message::CancelPressed));

        assert_eq!(app.phase(), RunPhase::Idle);
        assert_eq!(app.notifications().visible_count(), 0);
    }
}
