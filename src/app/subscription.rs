// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::{Message, RunPhase};
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription for notification auto-dismiss and
/// for settling the transient `Done` phase back to `Idle`.
///
/// The subscription is only active while there is something to tick for,
/// so an idle dashboard schedules no wakeups.
pub(super) fn create_tick_subscription(
    phase: RunPhase,
    has_notifications: bool,
) -> Subscription<Message> {
    if phase != RunPhase::Idle || has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
