//! Notification module
//!
//! Transient messages shown over the dropdown: confirmations, config warnings and
//! rejected reconfigurations.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationKind, NotificationState};
