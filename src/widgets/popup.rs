use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Places a popup directly below `anchor`, clamped to the bottom of `frame_area`.
pub fn popup_below_anchor(anchor: Rect, frame_area: Rect, height: u16) -> Rect {
    let popup_y = anchor.y.saturating_add(anchor.height);
    let available = frame_area
        .y
        .saturating_add(frame_area.height)
        .saturating_sub(popup_y);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: anchor.width,
        height: height.min(available),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
