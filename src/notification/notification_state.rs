//! Notification state management

use ratatui::style::Color;
use std::time::{Duration, Instant};

use crate::theme;

/// Determines style and lifetime of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// Short-lived confirmation such as "Disabled option"
    #[default]
    Info,
    /// Config problems reported at startup
    Warning,
    /// Rejected reconfiguration; stays until the next key press
    Error,
}

impl NotificationKind {
    fn duration(self) -> Option<Duration> {
        match self {
            NotificationKind::Info => Some(Duration::from_millis(1500)),
            NotificationKind::Warning => Some(Duration::from_secs(10)),
            NotificationKind::Error => None,
        }
    }

    pub fn colors(self) -> NotificationColors {
        match self {
            NotificationKind::Info => NotificationColors {
                fg: theme::notification::INFO_FG,
                bg: theme::notification::INFO_BG,
                border: theme::notification::INFO_BORDER,
            },
            NotificationKind::Warning => NotificationColors {
                fg: theme::notification::WARNING_FG,
                bg: theme::notification::WARNING_BG,
                border: theme::notification::WARNING_BORDER,
            },
            NotificationKind::Error => NotificationColors {
                fg: theme::notification::ERROR_FG,
                bg: theme::notification::ERROR_BG,
                border: theme::notification::ERROR_BORDER,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationColors {
    pub fg: Color,
    pub bg: Color,
    pub border: Color,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub created_at: Instant,
    pub duration: Option<Duration>, // None = until dismissed
}

impl Notification {
    pub fn new(message: &str, kind: NotificationKind) -> Self {
        Self {
            message: message.to_string(),
            kind,
            created_at: Instant::now(),
            duration: kind.duration(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.duration
            .is_some_and(|d| self.created_at.elapsed() > d)
    }
}

#[derive(Debug, Default)]
pub struct NotificationState {
    pub current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationKind::Info));
    }

    pub fn show_warning(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationKind::Warning));
    }

    pub fn show_error(&mut self, message: &str) {
        self.current = Some(Notification::new(message, NotificationKind::Error));
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Clear expired notification, returns true if cleared
    pub fn clear_if_expired(&mut self) -> bool {
        if let Some(ref notif) = self.current
            && notif.is_expired()
        {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[cfg(test)]
    pub fn current_message(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.message.as_str())
    }
}
