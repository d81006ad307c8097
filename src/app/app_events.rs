use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::app_state::App;
use super::mouse_events;
use crate::dropdown::dropdown_events;
use crate::notification::NotificationKind;

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    pub fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                Event::Mouse(mouse_event) => {
                    mouse_events::handle_mouse_event(self, mouse_event);
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Errors stay up until the next key press
        if self
            .notification
            .current()
            .is_some_and(|n| n.kind == NotificationKind::Error)
        {
            self.notification.dismiss();
        }

        if dropdown_events::handle_dropdown_key(self, key) {
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.output_selection = true;
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::test_helpers::{flat_app, key, key_with_mods};
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_ctrl_c_quits_without_output() {
        let mut app = flat_app();
        app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
        assert!(!app.output_selection());
    }

    #[test]
    fn test_ctrl_c_quits_with_list_open() {
        let mut app = flat_app();
        app.handle_key_event(key(KeyCode::Enter));
        assert!(app.view.is_open());

        app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_q_quits_with_output() {
        let mut app = flat_app();
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(app.should_quit());
        assert!(app.output_selection());
    }

    #[test]
    fn test_q_ignored_while_list_open() {
        let mut app = flat_app();
        app.handle_key_event(key(KeyCode::Enter));
        app.handle_key_event(key(KeyCode::Char('q')));
        assert!(!app.should_quit());
    }

    #[test]
    fn test_esc_closes_list_before_quitting() {
        let mut app = flat_app();
        app.handle_key_event(key(KeyCode::Enter));

        app.handle_key_event(key(KeyCode::Esc));
        assert!(!app.view.is_open());
        assert!(!app.should_quit());

        app.handle_key_event(key(KeyCode::Esc));
        assert!(app.should_quit());
        assert!(!app.output_selection());
    }

    #[test]
    fn test_error_notification_dismissed_on_key() {
        let mut app = flat_app();
        app.notification.show_error("boom");
        app.handle_key_event(key(KeyCode::Char('x')));
        assert!(app.notification.current().is_none());
    }

    #[test]
    fn test_info_notification_survives_key() {
        let mut app = flat_app();
        app.notification.show("hello");
        app.handle_key_event(key(KeyCode::Char('x')));
        assert!(app.notification.current().is_some());
    }
}
