use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app_state::App;
use crate::dropdown::dropdown_render;
use crate::help::help_line_render;
use crate::notification::render_notification;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (field_area, help_area) = (layout[0], layout[2]);

        let field_rect = dropdown_render::render_field(self, frame, field_area);
        self.layout_regions.dropdown_field = Some(field_rect);

        help_line_render::render_line(self, frame, help_area);

        if self.view.is_open()
            && let Some(list_rect) = dropdown_render::render_popup(self, frame, field_rect)
        {
            self.layout_regions.option_list = Some(list_rect);
        }

        render_notification(frame, &mut self.notification);
    }
}
