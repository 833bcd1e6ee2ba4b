// SPDX-License-Identifier: MPL-2.0
//! `deck_scrub` is a sanitization workbench for PowerPoint decks built
//! with the Iced GUI framework.
//!
//! It demonstrates the review half of a document sanitization pipeline:
//! loading a deck through a pluggable rendering engine, inline markup of
//! text fields, and collection of cleaning options. Internationalization
//! is provided with Fluent and user preferences persist across sessions.

#![doc(html_root_url = "https://docs.rs/deck_scrub/0.2.1")]

pub mod app;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod i18n;
pub mod test_utils;
pub mod ui;
