use ratatui::crossterm::event::{KeyCode, KeyEvent};

use crate::app::App;

/// Handle keys for the dropdown field and its open list.
///
/// Returns true when the key was consumed. While the list is open every key is
/// consumed.
pub fn handle_dropdown_key(app: &mut App, key: KeyEvent) -> bool {
    if !app.view.is_open() {
        return match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down | KeyCode::Char('j') => {
                app.open_dropdown();
                true
            }
            _ => false,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.view.highlight_previous(&app.dropdown),
        KeyCode::Down | KeyCode::Char('j') => app.view.highlight_next(&app.dropdown),
        KeyCode::Home | KeyCode::Char('g') => app.view.highlight_first(&app.dropdown),
        KeyCode::End | KeyCode::Char('G') => app.view.highlight_last(&app.dropdown),

        // Select and close
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some(row) = app.view.highlighted() {
                app.commit_selection(Some(row));
            } else {
                app.close_dropdown();
            }
        }

        KeyCode::Char('d') => app.disable_highlighted(),
        KeyCode::Char('u') => app.enable_all(),

        // Cancel
        KeyCode::Esc => app.close_dropdown(),

        _ => {}
    }
    true
}

#[cfg(test)]
#[path = "dropdown_events_tests.rs"]
mod dropdown_events_tests;
