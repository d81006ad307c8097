//! Mouse event dispatcher
//!
//! Routes clicks and wheel scrolling to the dropdown based on position.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::layout::{Region, region_at};

const SCROLL_ROWS: usize = 1;

pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    let region = region_at(&app.layout_regions, mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, region, mouse),
        MouseEventKind::ScrollDown if region == Some(Region::OptionList) => {
            app.view.scroll.scroll_down(SCROLL_ROWS);
        }
        MouseEventKind::ScrollUp if region == Some(Region::OptionList) => {
            app.view.scroll.scroll_up(SCROLL_ROWS);
        }
        _ => {}
    }
}

fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::DropdownField) => {
            if app.view.is_open() {
                app.close_dropdown();
            } else {
                app.open_dropdown();
            }
        }
        Some(Region::OptionList) => click_option_list(app, mouse),
        None => {
            if app.view.is_open() {
                app.close_dropdown();
            }
        }
    }
}

/// Clicking a selectable row selects it; headers and disabled rows ignore clicks.
fn click_option_list(app: &mut App, mouse: MouseEvent) {
    let Some(list_rect) = app.layout_regions.option_list else {
        return;
    };

    let inner_y = list_rect.y.saturating_add(1);
    let inner_height = list_rect.height.saturating_sub(2);
    if mouse.row < inner_y || mouse.row >= inner_y.saturating_add(inner_height) {
        return;
    }

    let row = app.view.scroll.offset + (mouse.row - inner_y) as usize;
    if app.view.highlight_row(&app.dropdown, row) {
        app.commit_selection(Some(row));
    }
}
