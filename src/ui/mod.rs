// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Regions
//!
//! - [`sidebar`] - User-inputs form and the Run trigger
//! - [`outputs`] - Page heading and the four figure sections
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`notifications`] - Toast notification system for user feedback
//! - [`styles`] - Centralized styling (buttons, containers)

pub mod components;
pub mod design_tokens;
pub mod notifications;
pub mod outputs;
pub mod sidebar;
pub mod styles;
