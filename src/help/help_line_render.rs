use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::App;
use crate::theme;

macro_rules! hints {
    ($($key:literal => $desc:literal),+ $(,)?) => {
        vec![$(($key, $desc)),+]
    };
}

fn get_context_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    if app.view.is_open() {
        hints!["↑/↓" => "Move", "Enter" => "Select", "d" => "Disable", "u" => "Enable All", "Esc" => "Close"]
    } else {
        hints!["Enter" => "Open", "q" => "Confirm", "Esc" => "Quit", "Ctrl+C" => "Abort"]
    }
}

fn build_styled_spans(hints: &[(&'static str, &'static str)]) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(theme::help_line::KEY);
    let desc_style = Style::default().fg(theme::help_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::help_line::SEPARATOR);

    let hint_spans = hints.iter().enumerate().flat_map(|(i, &(key, desc))| {
        let separator = (i > 0).then(|| Span::styled(" \u{2022} ", sep_style));
        separator.into_iter().chain([
            Span::styled(key, key_style),
            Span::raw(" "),
            Span::styled(desc, desc_style),
        ])
    });

    std::iter::once(Span::raw(" ")).chain(hint_spans).collect()
}

pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_context_hints(app);
    let spans = build_styled_spans(&hints);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
#[path = "help_line_render_tests.rs"]
mod help_line_render_tests;
