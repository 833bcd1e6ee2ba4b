// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events to messages: window close requests (so the render
//! session can be torn down first), file drops, the spinner tick while a
//! load is in flight, and Escape while a field edit is active.

use super::{App, Message};
use crate::ui::viewer::component;
use iced::{event, keyboard, time, window, Event, Subscription};
use std::time::Duration;

/// Spinner animation cadence.
const SPINNER_TICK: Duration = Duration::from_millis(50);

impl App {
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![event::listen_with(route_native_event)];

        if self.viewer.is_loading() {
            subscriptions.push(time::every(SPINNER_TICK).map(|_| Message::SpinnerTick));
        }

        if self.viewer.is_editing_field() {
            subscriptions.push(keyboard::on_key_press(|key, _modifiers| match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    Some(Message::Viewer(component::Message::EscapePressed))
                }
                _ => None,
            }));
        }

        Subscription::batch(subscriptions)
    }
}

fn route_native_event(
    event: Event,
    _status: event::Status,
    window_id: window::Id,
) -> Option<Message> {
    match event {
        Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}
