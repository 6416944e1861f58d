// SPDX-License-Identifier: MPL-2.0
//! Reusable error display component with consistent styling.
//!
//! Used by the outputs panel as the inline placeholder for a gallery
//! section whose image failed to load: a title, a user-friendly message,
//! the underlying error text, and an optional action button ("Retry").
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
//!
//! ErrorDisplay::new(ErrorSeverity::Error)
//!     .title("Unable to load image")
//!     .message("The placeholder figure could not be read.")
//!     .details("I/O Error: No such file or directory")
//!     .action("Retry", Message::Retry(2))
//!     .view()
//! ```

use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::styles::button as button_styles;
use iced::widget::{button, text, Column, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Severity level determines the accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorSeverity {
    /// Critical error - prevents the section from rendering (red)
    #[default]
    Error,
    /// Warning - degraded but usable (orange)
    Warning,
    /// Informational - no action required (blue)
    Info,
}

impl ErrorSeverity {
    /// Returns the primary color for this severity level.
    pub fn color(&self) -> Color {
        match self {
            ErrorSeverity::Error => palette::ERROR_500,
            ErrorSeverity::Warning => palette::WARNING_500,
            ErrorSeverity::Info => palette::INFO_500,
        }
    }
}

/// Configuration for the `ErrorDisplay` component.
#[derive(Debug, Clone)]
pub struct ErrorDisplay<Message> {
    severity: ErrorSeverity,
    title: Option<String>,
    message: Option<String>,
    details: Option<String>,
    action_label: Option<String>,
    action_message: Option<Message>,
}

impl<Message> Default for ErrorDisplay<Message> {
    fn default() -> Self {
        Self {
            severity: ErrorSeverity::default(),
            title: None,
            message: None,
            details: None,
            action_label: None,
            action_message: None,
        }
    }
}

impl<Message: Clone + 'static> ErrorDisplay<Message> {
    /// Creates a new error display with the given severity.
    pub fn new(severity: ErrorSeverity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    /// Sets the title (main heading).
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message (user-friendly explanation).
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the technical details (underlying error text).
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Sets the action button label and message.
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action_label = Some(label.into());
        self.action_message = Some(message);
        self
    }

    /// Renders the error display component.
    pub fn view(self) -> Element<'static, Message> {
        let accent_color = self.severity.color();

        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill);

        if let Some(title_text) = self.title {
            let title = Text::new(title_text)
                .size(typography::TITLE_MD)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(accent_color),
                });
            content = content.push(title);
        }

        if let Some(message_text) = self.message {
            let message = Text::new(message_text).size(typography::BODY);
            content = content.push(
                Container::new(message)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let Some(details_text) = self.details {
            let details = Text::new(details_text)
                .size(typography::BODY_SM)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                });
            content = content.push(
                Container::new(details)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let (Some(label), Some(msg)) = (self.action_label, self.action_message) {
            let action_btn = button(Text::new(label))
                .on_press(msg)
                .style(button_styles::primary);
            content = content.push(
                Container::new(action_btn)
                    .padding(spacing::SM)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .max_width(500.0)
            .padding(spacing::LG)
            .style(styles::container::panel)
            .into()
    }
}

/// Centered wrapper for the common "whole section failed" case.
pub fn centered_error_view<Message: Clone + 'static>(
    error_display: ErrorDisplay<Message>,
) -> Element<'static, Message> {
    Container::new(error_display.view())
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::LG)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    enum TestMessage {
        Retry,
    }

    #[test]
    fn error_severity_colors_are_distinct() {
        let error_color = ErrorSeverity::Error.color();
        let warning_color = ErrorSeverity::Warning.color();
        let info_color = ErrorSeverity::Info.color();

        assert_ne!(error_color.r, warning_color.r);
        assert_ne!(warning_color.r, info_color.r);
        assert_ne!(error_color.r, info_color.r);
    }

    #[test]
    fn error_display_builder_works() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::new(ErrorSeverity::Error)
            .title("Unable to load image")
            .message("Something went wrong")
            .details("I/O Error: missing file")
            .action("Retry", TestMessage::Retry);

        assert_eq!(display.severity, ErrorSeverity::Error);
        assert_eq!(display.title, Some("Unable to load image".to_string()));
        assert_eq!(display.message, Some("Something went wrong".to_string()));
        assert_eq!(display.details, Some("I/O Error: missing file".to_string()));
        assert_eq!(display.action_label, Some("Retry".to_string()));
    }

    #[test]
    fn default_severity_is_error() {
        let display: ErrorDisplay<TestMessage> = ErrorDisplay::default();
        assert_eq!(display.severity, ErrorSeverity::Error);
    }
}
