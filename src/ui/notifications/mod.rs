// SPDX-License-Identifier: MPL-2.0
//! Toast notifications.
//!
//! Feedback that should not interrupt: upload results, config problems,
//! export outcomes. [`Notification`] is the payload, [`Manager`] owns
//! visibility and queueing (three on screen, the rest wait their turn),
//! and [`Toast`] renders the stack in the bottom-right corner.
//!
//! Success and info toasts dismiss themselves after about three seconds,
//! warnings after five; errors stay until dismissed. Upload errors are
//! also cleared wholesale by the next successful upload.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-log-exported"));
//!
//! // In the view, render the stack and route its messages:
//! let overlay = Toast::view_overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, Severity};
pub use toast::Toast;
