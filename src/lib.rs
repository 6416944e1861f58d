// SPDX-License-Identifier: MPL-2.0
//! `frontier_dash` is a portfolio optimization dashboard built with the Iced
//! GUI framework.
//!
//! It collects optimization inputs in a sidebar form, exposes a mock Run
//! trigger standing in for a future computation backend, and renders a
//! gallery of placeholder result figures.

#![doc(html_root_url = "https://docs.rs/frontier_dash/0.1.0")]

pub mod app;
pub mod error;
pub mod gallery;
pub mod inputs;
pub mod ui;
