// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`viewer`] - Document viewer with the load lifecycle and render surfaces
//! - [`settings`] - Application preferences (language, theme)
//!
//! # Workbench panels
//!
//! - [`editable_field`] - Click-to-edit text fields with revert-on-cancel
//! - [`options_panel`] - Sanitization option controls (placeholder wiring)
//! - [`progress_steps`] - Fixed 5-stage workflow display
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`navbar`] - Navigation bar between screens

pub mod design_tokens;
pub mod editable_field;
pub mod navbar;
pub mod options_panel;
pub mod progress_steps;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod viewer;
pub mod widgets;
