// SPDX-License-Identifier: MPL-2.0
//! Top-level messages for the application.

use crate::gallery::SectionLoad;
use crate::ui::notifications;
use crate::ui::outputs;
use crate::ui::sidebar;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A sidebar control changed or the Run/Cancel button was pressed.
    Sidebar(sidebar::Message),
    /// A Retry button in the outputs panel was pressed.
    Outputs(outputs::Message),
    /// The mock processing delay elapsed.
    RunCompleted,
    /// Result of the startup gallery load, one entry per section.
    GalleryLoaded(Vec<SectionLoad>),
    /// Result of retrying a single gallery section.
    SectionReloaded(SectionLoad),
    /// Toast dismissal from the notification overlay.
    Notification(notifications::NotificationMessage),
    /// Periodic tick for notification auto-dismiss and phase settling.
    Tick(Instant),
}
