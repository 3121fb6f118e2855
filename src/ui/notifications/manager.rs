// SPDX-License-Identifier: MPL-2.0
//! Toast queue with a bounded visible set.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen; the rest wait in a backlog
//! and move up as slots free. Timed toasts age out on the shared app tick,
//! sticky ones stay until dismissed.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Visible-toast cap. Everything past this queues.
const MAX_VISIBLE: usize = 3;

/// Toast lifecycle messages, emitted by the dismiss buttons and the tick.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
    Tick,
}

/// Owns every live toast, split into the on-screen set and the backlog.
///
/// Invariant: the backlog is only non-empty while the visible set is full,
/// maintained by refilling after every removal.
#[derive(Debug, Default)]
pub struct Manager {
    /// On-screen toasts, most recent at the front.
    showing: VecDeque<Notification>,
    /// Overflow waiting for a visible slot, in arrival order.
    backlog: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now, or queues it when all slots are taken.
    pub fn push(&mut self, notification: Notification) {
        if self.showing.len() < MAX_VISIBLE {
            self.showing.push_front(notification);
        } else {
            self.backlog.push_back(notification);
        }
    }

    /// Drops the toast with `id`, wherever it currently lives.
    ///
    /// Returns false when no toast carries that id (already aged out, say).
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(index) = self.showing.iter().position(|n| n.id() == id) {
            self.showing.remove(index);
            self.refill();
            return true;
        }

        if let Some(index) = self.backlog.iter().position(|n| n.id() == id) {
            self.backlog.remove(index);
            return true;
        }

        false
    }

    /// Ages out every visible toast whose display window has elapsed.
    ///
    /// Driven by the app tick; backlog entries only start their clock once
    /// they become visible, so they are not inspected here.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .showing
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => self.tick(),
        }
    }

    /// On-screen toasts, most recent first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.showing.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.showing.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.backlog.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.showing.is_empty() || !self.backlog.is_empty()
    }

    /// Drops everything, visible and queued alike.
    pub fn clear(&mut self) {
        self.showing.clear();
        self.backlog.clear();
    }

    /// Drops every sticky upload-error toast.
    ///
    /// A failed upload's toast would otherwise outlive the retry that
    /// succeeded; called when a fresh document installs.
    pub fn clear_upload_errors(&mut self) {
        self.showing
            .retain(|n| !n.message_key().starts_with("error-upload-"));
        self.backlog
            .retain(|n| !n.message_key().starts_with("error-upload-"));
        self.refill();
    }

    /// Moves backlog entries into freed visible slots, oldest first.
    fn refill(&mut self) {
        while self.showing.len() < MAX_VISIBLE {
            match self.backlog.pop_front() {
                Some(notification) => self.showing.push_back(notification),
                None => break,
            }
        }
    }
}
