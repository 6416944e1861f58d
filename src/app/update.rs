// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::{App, Message, RunPhase, RUN_DURATION};
use crate::gallery::{self, SectionLoad};
use crate::ui::notifications::Notification;
use crate::ui::outputs::SectionStatus;
use crate::ui::sidebar;
use iced::Task;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Sidebar(msg) => match app.sidebar.update(msg, &mut app.inputs) {
            Some(sidebar::Event::RunRequested) => start_run(app),
            Some(sidebar::Event::CancelRequested) => cancel_run(app),
            None => Task::none(),
        },
        Message::RunCompleted => {
            app.phase = RunPhase::Done;
            app.run_handle = None;
            app.notifications
                .push(Notification::success("Processing complete."));
            Task::none()
        }
        Message::GalleryLoaded(loads) => {
            for load in loads {
                apply_section_load(app, load);
            }
            Task::none()
        }
        Message::Outputs(crate::ui::outputs::Message::Retry(index)) => retry_section(app, index),
        Message::SectionReloaded(load) => {
            apply_section_load(app, load);
            Task::none()
        }
        Message::Notification(msg) => {
            app.notifications.handle_message(&msg);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            // Done is transient; settle back to Idle once observed.
            if app.phase == RunPhase::Done {
                app.phase = RunPhase::Idle;
            }
            Task::none()
        }
    }
}

/// Starts the mock processing run: a cancellable fixed-duration delay
/// standing in for the future optimization computation.
fn start_run(app: &mut App) -> Task<Message> {
    if app.phase.is_running() {
        return Task::none();
    }

    app.phase = RunPhase::Running;

    let (task, handle) = Task::perform(tokio::time::sleep(RUN_DURATION), |()| {
        Message::RunCompleted
    })
    .abortable();
    app.run_handle = Some(handle);

    task
}

/// Aborts an in-flight run. No notification: the user asked for it.
fn cancel_run(app: &mut App) -> Task<Message> {
    if let Some(handle) = app.run_handle.take() {
        handle.abort();
    }
    app.phase = RunPhase::Idle;
    Task::none()
}

/// Kicks off a reload of a single failed section.
fn retry_section(app: &mut App, index: usize) -> Task<Message> {
    let Some(entry) = app.manifest.get(index) else {
        return Task::none();
    };
    let path = entry.path.clone();

    if let Some(section) = app.sections.get_mut(index) {
        section.status = SectionStatus::Loading;
    }

    Task::perform(
        async move { gallery::load_entry(index, &path) },
        Message::SectionReloaded,
    )
}

/// Applies one load result to its section. Failures degrade that section
/// only; the error is logged and rendered as an inline placeholder.
fn apply_section_load(app: &mut App, load: SectionLoad) {
    let Some(section) = app.sections.get_mut(load.index) else {
        return;
    };

    section.status = match load.result {
        Ok(data) => SectionStatus::Ready(data),
        Err(err) => {
            eprintln!("Failed to load \"{}\": {}", section.title, err);
            SectionStatus::Failed(err.to_string())
        }
    };
}
