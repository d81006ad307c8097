use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::app::App;
use crate::theme;
use crate::widgets::{popup, scrollbar};

const DEFAULT_TITLE: &str = " Select ";

/// Render the closed dropdown field showing the current selection.
///
/// Returns the field area for region tracking.
pub fn render_field(app: &App, frame: &mut Frame, area: Rect) -> Rect {
    let open = app.view.is_open();
    let border_color = if open {
        theme::field::BORDER_OPEN
    } else {
        theme::field::BORDER_FOCUSED
    };
    let title = app
        .description
        .as_deref()
        .map(|d| format!(" {} ", d))
        .unwrap_or_else(|| DEFAULT_TITLE.to_string());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Span::styled(title, theme::field::TITLE))
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme::field::BACKGROUND));

    let (text, text_color) = match app.dropdown.label() {
        Some(label) => (label, theme::field::SELECTION),
        None => ("(none)", theme::field::NO_SELECTION),
    };
    let arrow = if open { "▲" } else { "▼" };

    // Arrow pinned to the right edge, label truncated to make room
    let inner_width = area.width.saturating_sub(2) as usize;
    let max_text_len = inner_width.saturating_sub(4);
    let shown = truncate(text, max_text_len);
    let padding = inner_width.saturating_sub(shown.chars().count() + 3);

    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(shown, Style::default().fg(text_color)),
        Span::raw(" ".repeat(padding)),
        Span::styled(arrow, Style::default().fg(theme::field::ARROW)),
        Span::raw(" "),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);
    area
}

/// Render the open option list below the field
///
/// Returns the popup area for region tracking.
pub fn render_popup(app: &mut App, frame: &mut Frame, field_area: Rect) -> Option<Rect> {
    let total = app.dropdown.len();
    let visible_count = total.min(app.settings.max_visible_items.max(1));
    let list_height = (visible_count as u16).max(1) + 2; // +2 for borders, min 1 row

    let popup_area = popup::popup_below_anchor(field_area, frame.area(), list_height);
    if popup_area.height < 3 || popup_area.width < 5 {
        return None;
    }

    popup::clear_area(frame, popup_area);

    let viewport = popup_area.height.saturating_sub(2) as usize;
    app.view.update_viewport(total, viewport);
    let offset = app.view.scroll.offset;

    let max_text_len = (popup_area.width as usize).saturating_sub(7);
    let indents = member_indents(app);

    let items: Vec<ListItem> = if total == 0 {
        vec![ListItem::new(Line::from(Span::styled(
            "   No options",
            Style::default().fg(theme::dropdown::EMPTY),
        )))]
    } else {
        app.dropdown
            .presentation()
            .into_iter()
            .enumerate()
            .skip(offset)
            .take(viewport)
            .map(|(row, entry)| {
                let label = truncate(entry.label, max_text_len);

                if entry.is_header {
                    return ListItem::new(Line::from(Span::styled(
                        format!(" {} ", label),
                        theme::dropdown::HEADER.bg(theme::dropdown::BACKGROUND),
                    )));
                }

                let indent = " ".repeat(indents.get(row).copied().unwrap_or(0));
                let highlighted = app.view.highlighted() == Some(row);
                let selected = app.dropdown.index() == Some(row);
                let marker = if selected { " ✓" } else { "" };

                let line = if entry.is_disabled {
                    Line::from(Span::styled(
                        format!("   {}{}{} ", indent, label, marker),
                        theme::dropdown::ITEM_DISABLED.bg(theme::dropdown::ITEM_NORMAL_BG),
                    ))
                } else if highlighted {
                    Line::from(vec![
                        Span::styled(
                            " ► ",
                            Style::default()
                                .fg(theme::dropdown::ITEM_HIGHLIGHTED_INDICATOR)
                                .bg(theme::dropdown::ITEM_HIGHLIGHTED_BG),
                        ),
                        Span::styled(
                            format!("{}{}{} ", indent, label, marker),
                            Style::default()
                                .fg(theme::dropdown::ITEM_HIGHLIGHTED_FG)
                                .bg(theme::dropdown::ITEM_HIGHLIGHTED_BG)
                                .add_modifier(theme::dropdown::ITEM_HIGHLIGHTED_MODIFIER),
                        ),
                    ])
                } else {
                    let fg = if selected {
                        theme::dropdown::ITEM_SELECTED_FG
                    } else {
                        theme::dropdown::ITEM_NORMAL_FG
                    };
                    Line::from(Span::styled(
                        format!("   {}{}{} ", indent, label, marker),
                        Style::default().fg(fg).bg(theme::dropdown::ITEM_NORMAL_BG),
                    ))
                };

                ListItem::new(line)
            })
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::dropdown::BORDER))
        .style(Style::default().bg(theme::dropdown::BACKGROUND));

    frame.render_widget(List::new(items).block(block), popup_area);

    // Scrollbar on the right border, excluding corners
    let scrollbar_area = Rect {
        x: popup_area.x,
        y: popup_area.y.saturating_add(1),
        width: popup_area.width,
        height: popup_area.height.saturating_sub(2),
    };
    scrollbar::render_vertical_scrollbar_styled(
        frame,
        scrollbar_area,
        total,
        viewport,
        offset,
        theme::dropdown::SCROLLBAR,
    );

    Some(popup_area)
}

/// Indentation per row: members of a headed group are indented, everything else
/// sits flush.
fn member_indents(app: &App) -> Vec<usize> {
    if !app.dropdown.is_grouped() {
        return vec![0; app.dropdown.len()];
    }

    let mut indents = Vec::with_capacity(app.dropdown.len());
    for (header, members) in app.dropdown.grouping_labels() {
        if header.is_empty() {
            indents.extend(std::iter::repeat_n(0, members.len()));
        } else {
            indents.push(0);
            indents.extend(std::iter::repeat_n(
                app.settings.member_indent,
                members.len(),
            ));
        }
    }
    indents
}

fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let truncated: String = text.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "dropdown_render_tests.rs"]
mod dropdown_render_tests;
