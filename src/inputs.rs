// SPDX-License-Identifier: MPL-2.0
//! The configuration collected by the sidebar form.
//!
//! Everything in this module is transient UI state: it is created with
//! defaults when the application starts, mutated in place as the user
//! interacts with the controls, and discarded when the session ends.
//! The struct is serializable so a future backend can consume it as-is,
//! but nothing persists it today.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

/// Portfolio sizes offered by the selector, in display order.
pub const PORTFOLIO_SIZES: [u8; 7] = [10, 15, 20, 25, 30, 40, 50];

/// Domain of the minimum asset weight slider (percent).
pub const MIN_WEIGHT_RANGE: RangeInclusive<u8> = 0..=20;

/// Domain of the maximum asset weight slider (percent).
pub const MAX_WEIGHT_RANGE: RangeInclusive<u8> = 10..=50;

/// Estimation model used for asset selection.
///
/// Collected by the form but not consumed anywhere yet; the selector is a
/// stub for the future optimization backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EstimationModel {
    #[default]
    HistoricalTimeseries,
    FamaFrench3,
    FamaFrench5,
    Apca,
}

impl EstimationModel {
    /// All selectable models, in display order.
    pub const ALL: [EstimationModel; 4] = [
        EstimationModel::HistoricalTimeseries,
        EstimationModel::FamaFrench3,
        EstimationModel::FamaFrench5,
        EstimationModel::Apca,
    ];
}

impl fmt::Display for EstimationModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EstimationModel::HistoricalTimeseries => "Historical timeseries",
            EstimationModel::FamaFrench3 => "Fama-French 3-factor",
            EstimationModel::FamaFrench5 => "Fama-French 5-factor",
            EstimationModel::Apca => "APCA",
        };
        write!(f, "{}", label)
    }
}

/// Comparison benchmark indexes and funds.
///
/// `Ord` is derived so selections can live in a `BTreeSet`, which keeps the
/// serialized form and the rendered checkbox order stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Benchmark {
    Sp500,
    Russell3000,
    DowJones,
    NasdaqComposite,
    PopularFunds,
}

impl Benchmark {
    /// All selectable benchmarks, in display order.
    pub const ALL: [Benchmark; 5] = [
        Benchmark::Sp500,
        Benchmark::Russell3000,
        Benchmark::DowJones,
        Benchmark::NasdaqComposite,
        Benchmark::PopularFunds,
    ];
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Benchmark::Sp500 => "S&P500 index",
            Benchmark::Russell3000 => "Russell 3000 index",
            Benchmark::DowJones => "Dow Jones index",
            Benchmark::NasdaqComposite => "NASDAQ Composite",
            Benchmark::PopularFunds => "Popular invest funds",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// The full set of values collected by the sidebar, one field per control.
///
/// There is deliberately no validation beyond each control's closed domain:
/// in particular `min_weight <= max_weight` is not enforced, matching the
/// observable behavior of the form (the backend that would care does not
/// exist yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfiguration {
    pub portfolio_size: u8,
    pub in_sample: DateRange,
    pub out_of_sample: DateRange,
    pub estimation_model: EstimationModel,
    pub min_weight: u8,
    pub max_weight: u8,
    pub benchmarks: BTreeSet<Benchmark>,
}

impl Default for InputConfiguration {
    fn default() -> Self {
        Self {
            portfolio_size: PORTFOLIO_SIZES[0],
            in_sample: DateRange::new(ymd(2019, 1, 1), ymd(2023, 12, 31)),
            out_of_sample: DateRange::new(ymd(2024, 1, 1), ymd(2024, 7, 31)),
            estimation_model: EstimationModel::default(),
            min_weight: 3,
            max_weight: 13,
            benchmarks: BTreeSet::from([Benchmark::Sp500]),
        }
    }
}

impl InputConfiguration {
    /// Adds or removes a benchmark from the comparison set.
    pub fn toggle_benchmark(&mut self, benchmark: Benchmark, selected: bool) {
        if selected {
            self.benchmarks.insert(benchmark);
        } else {
            self.benchmarks.remove(&benchmark);
        }
    }
}

/// Builds a literal date; only called with known-valid triples.
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal date is valid")
}
