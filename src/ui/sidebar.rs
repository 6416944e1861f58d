// SPDX-License-Identifier: MPL-2.0
//! The user-inputs sidebar.
//!
//! One control per [`InputConfiguration`] field, plus the Run trigger.
//! Control messages update the configuration in place; Run and Cancel are
//! reported upward as [`Event`]s because the async run task is owned by the
//! application root, not by this component.

use crate::app::RunPhase;
use crate::inputs::{
    Benchmark, EstimationModel, InputConfiguration, MAX_WEIGHT_RANGE, MIN_WEIGHT_RANGE,
    PORTFOLIO_SIZES,
};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::styles::button as button_styles;
use chrono::NaiveDate;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, checkbox, container, pick_list, slider, text, text_input, Column, Row, Scrollable,
};
use iced::{alignment, Element, Length};

/// Messages produced by the sidebar controls.
#[derive(Debug, Clone)]
pub enum Message {
    PortfolioSizeSelected(u8),
    InSampleStartChanged(String),
    InSampleEndChanged(String),
    OutOfSampleStartChanged(String),
    OutOfSampleEndChanged(String),
    EstimationModelSelected(EstimationModel),
    MinWeightChanged(u8),
    MaxWeightChanged(u8),
    BenchmarkToggled(Benchmark, bool),
    RunPressed,
    CancelPressed,
}

/// Decisions the application root must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    RunRequested,
    CancelRequested,
}

/// Editing state for the date text inputs.
///
/// The buffers hold whatever the user typed; the configuration is only
/// updated when a buffer parses as an ISO date, so invalid intermediate
/// input never leaves the sidebar.
#[derive(Debug, Clone)]
pub struct State {
    in_sample_start_input: String,
    in_sample_end_input: String,
    out_of_sample_start_input: String,
    out_of_sample_end_input: String,
}

impl State {
    /// Seeds the input buffers from the current configuration.
    #[must_use]
    pub fn from_config(config: &InputConfiguration) -> Self {
        Self {
            in_sample_start_input: config.in_sample.start.to_string(),
            in_sample_end_input: config.in_sample.end.to_string(),
            out_of_sample_start_input: config.out_of_sample.start.to_string(),
            out_of_sample_end_input: config.out_of_sample.end.to_string(),
        }
    }

    /// Applies a control message to the configuration.
    ///
    /// Every value inside a control's declared domain is accepted
    /// unconditionally and touches exactly one field. Returns an [`Event`]
    /// when the parent needs to start or cancel a run.
    pub fn update(
        &mut self,
        message: Message,
        config: &mut InputConfiguration,
    ) -> Option<Event> {
        match message {
            Message::PortfolioSizeSelected(size) => {
                config.portfolio_size = size;
            }
            Message::InSampleStartChanged(value) => {
                if let Some(date) = parse_date(&value) {
                    config.in_sample.start = date;
                }
                self.in_sample_start_input = value;
            }
            Message::InSampleEndChanged(value) => {
                if let Some(date) = parse_date(&value) {
                    config.in_sample.end = date;
                }
                self.in_sample_end_input = value;
            }
            Message::OutOfSampleStartChanged(value) => {
                if let Some(date) = parse_date(&value) {
                    config.out_of_sample.start = date;
                }
                self.out_of_sample_start_input = value;
            }
            Message::OutOfSampleEndChanged(value) => {
                if let Some(date) = parse_date(&value) {
                    config.out_of_sample.end = date;
                }
                self.out_of_sample_end_input = value;
            }
            Message::EstimationModelSelected(model) => {
                config.estimation_model = model;
            }
            Message::MinWeightChanged(value) => {
                config.min_weight = value;
            }
            Message::MaxWeightChanged(value) => {
                config.max_weight = value;
            }
            Message::BenchmarkToggled(benchmark, selected) => {
                config.toggle_benchmark(benchmark, selected);
            }
            Message::RunPressed => return Some(Event::RunRequested),
            Message::CancelPressed => return Some(Event::CancelRequested),
        }

        None
    }

    /// Builds the sidebar layout.
    pub fn view<'a>(
        &'a self,
        config: &'a InputConfiguration,
        phase: RunPhase,
    ) -> Element<'a, Message> {
        let heading = text("User Inputs")
            .size(typography::TITLE_MD)
            .width(Length::Fill)
            .center();

        let portfolio_section = labeled(
            "Portfolio size:",
            pick_list(
                PORTFOLIO_SIZES,
                Some(config.portfolio_size),
                Message::PortfolioSizeSelected,
            )
            .padding(spacing::XS)
            .width(Length::Fill)
            .into(),
        );

        let in_sample_section = date_range_section(
            "In-sample period:",
            &self.in_sample_start_input,
            &self.in_sample_end_input,
            Message::InSampleStartChanged,
            Message::InSampleEndChanged,
        );

        let out_of_sample_section = date_range_section(
            "Out-of-sample period:",
            &self.out_of_sample_start_input,
            &self.out_of_sample_end_input,
            Message::OutOfSampleStartChanged,
            Message::OutOfSampleEndChanged,
        );

        let model_section = labeled(
            "Estimation model:",
            pick_list(
                EstimationModel::ALL,
                Some(config.estimation_model),
                Message::EstimationModelSelected,
            )
            .padding(spacing::XS)
            .width(Length::Fill)
            .into(),
        );

        let min_weight_section = weight_section(
            "Min weight:",
            MIN_WEIGHT_RANGE,
            config.min_weight,
            Message::MinWeightChanged,
        );

        let max_weight_section = weight_section(
            "Max weight:",
            MAX_WEIGHT_RANGE,
            config.max_weight,
            Message::MaxWeightChanged,
        );

        let mut benchmark_list = Column::new().spacing(spacing::XXS);
        for benchmark in Benchmark::ALL {
            benchmark_list = benchmark_list.push(
                checkbox(config.benchmarks.contains(&benchmark))
                    .label(benchmark.to_string())
                    .on_toggle(move |selected| Message::BenchmarkToggled(benchmark, selected)),
            );
        }
        let benchmark_section = labeled("Comparison benchmarks:", benchmark_list.into());

        let action_button = if phase.is_running() {
            button(text("Cancel").size(typography::BODY_LG).center())
                .on_press(Message::CancelPressed)
                .style(button_styles::cancel)
                .padding(spacing::SM)
                .width(Length::Fill)
        } else {
            button(text("Run").size(typography::BODY_LG).center())
                .on_press(Message::RunPressed)
                .style(button_styles::primary)
                .padding(spacing::SM)
                .width(Length::Fill)
        };

        let form = Column::new()
            .spacing(spacing::MD)
            .push(portfolio_section)
            .push(in_sample_section)
            .push(out_of_sample_section)
            .push(model_section)
            .push(min_weight_section)
            .push(max_weight_section)
            .push(benchmark_section)
            .push(action_button);

        let scrollable = Scrollable::new(form)
            .direction(Direction::Vertical(Scrollbar::new()))
            .height(Length::Fill)
            .width(Length::Fill);

        let layout = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::SM)
            .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
            .push(heading)
            .push(scrollable);

        container(layout)
            .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
            .height(Length::Fill)
            .style(styles::container::sidebar)
            .into()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::from_config(&InputConfiguration::default())
    }
}

/// Parses an ISO `YYYY-MM-DD` date; `None` leaves the configuration alone.
fn parse_date(value: &str) -> Option<NaiveDate> {
    value.trim().parse::<NaiveDate>().ok()
}

/// A small label above an arbitrary control.
fn labeled<'a>(label: &'a str, control: Element<'a, Message>) -> Column<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY_SM))
        .push(control)
}

/// Start/end date inputs sharing one label row.
fn date_range_section<'a>(
    label: &'a str,
    start_value: &'a str,
    end_value: &'a str,
    on_start: fn(String) -> Message,
    on_end: fn(String) -> Message,
) -> Column<'a, Message> {
    let start_input = text_input("YYYY-MM-DD", start_value)
        .on_input(on_start)
        .padding(spacing::XXS)
        .size(typography::BODY)
        .width(Length::Fill);

    let end_input = text_input("YYYY-MM-DD", end_value)
        .on_input(on_end)
        .padding(spacing::XXS)
        .size(typography::BODY)
        .width(Length::Fill);

    let inputs = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(start_input)
        .push(end_input);

    labeled(label, inputs.into())
}

/// Slider with its current value as a caption.
fn weight_section<'a>(
    label: &'a str,
    range: std::ops::RangeInclusive<u8>,
    value: u8,
    on_change: fn(u8) -> Message,
) -> Column<'a, Message> {
    labeled(
        label,
        Column::new()
            .spacing(spacing::XXS)
            .push(slider(range, value, on_change).step(1u8))
            .push(text(format!("{value}%")).size(typography::BODY_SM))
            .into(),
    )
}
