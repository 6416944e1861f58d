// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the sidebar, the outputs panel, and the toast overlay into the
//! full-window layout.

use super::{App, Message};
use crate::ui::notifications::Toast;
use crate::ui::outputs;
use iced::widget::{Row, Stack};
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let sidebar = app
        .sidebar
        .view(&app.inputs, app.phase)
        .map(Message::Sidebar);

    let outputs_panel = outputs::view(&app.sections).map(Message::Outputs);

    let body = Row::new()
        .push(sidebar)
        .push(outputs_panel)
        .width(Length::Fill)
        .height(Length::Fill);

    let toast_overlay = Toast::view_overlay(&app.notifications).map(Message::Notification);

    Stack::new().push(body).push(toast_overlay).into()
}
