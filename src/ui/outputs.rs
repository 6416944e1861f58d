// SPDX-License-Identifier: MPL-2.0
//! The outputs panel: page heading plus the four titled figure sections.
//!
//! Sections render in manifest order. A section whose image failed to load
//! shows an inline error placeholder with a Retry action; the remaining
//! sections are unaffected.

use crate::gallery::ImageData;
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{image, text, Column, Container, Scrollable, Text};
use iced::{alignment, Element, Length, Theme};

/// Messages produced by the outputs panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Retry loading the image of the section at this index.
    Retry(usize),
}

/// Render state of one gallery section.
#[derive(Debug, Clone)]
pub enum SectionStatus {
    /// Load task still in flight.
    Loading,
    /// Image decoded and ready for display.
    Ready(ImageData),
    /// Load failed; holds the rendered error text.
    Failed(String),
}

/// One titled section of the outputs panel.
#[derive(Debug, Clone)]
pub struct SectionState {
    pub title: String,
    pub status: SectionStatus,
}

impl SectionState {
    /// A section that has not finished loading yet.
    #[must_use]
    pub fn loading(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            status: SectionStatus::Loading,
        }
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.status, SectionStatus::Ready(_))
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self.status, SectionStatus::Failed(_))
    }
}

/// Builds the outputs panel layout.
pub fn view(sections: &[SectionState]) -> Element<'_, Message> {
    let heading = text("Outputs")
        .size(typography::TITLE_LG)
        .width(Length::Fill)
        .center();

    let mut column = Column::new()
        .spacing(spacing::XL)
        .padding(spacing::LG)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .push(heading);

    for (index, section) in sections.iter().enumerate() {
        column = column.push(section_view(index, section));
    }

    Scrollable::new(column)
        .direction(Direction::Vertical(Scrollbar::new()))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// One section: centered title above the figure (or its placeholder).
fn section_view<'a>(index: usize, section: &'a SectionState) -> Element<'a, Message> {
    let title = text(section.title.as_str())
        .size(typography::TITLE_MD)
        .width(Length::Fill)
        .center();

    let body: Element<'a, Message> = match &section.status {
        SectionStatus::Loading => Container::new(
            Text::new("Loading figure...")
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().secondary.base.text),
                }),
        )
        .width(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .into(),
        SectionStatus::Ready(data) => Container::new(image(data.handle.clone()).width(Length::Fill))
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into(),
        SectionStatus::Failed(details) => centered_error_view(
            ErrorDisplay::new(ErrorSeverity::Error)
                .title("Unable to load figure")
                .message("The placeholder image for this section could not be displayed.")
                .details(details.clone())
                .action("Retry", Message::Retry(index)),
        ),
    };

    Container::new(
        Column::new()
            .spacing(spacing::SM)
            .width(Length::Fill)
            .push(title)
            .push(body),
    )
    .width(Length::Fill)
    .max_width(sizing::FIGURE_MAX_WIDTH)
    .into()
}
