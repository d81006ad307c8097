//! Centralized theme configuration for all UI components.
//!
//! Render files use `theme::module::CONSTANT` instead of hardcoding `Color::*`.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_HOVER: Color = Color::Rgb(45, 45, 72);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const RED: Color = Color::Rgb(224, 108, 117);
}

/// Closed dropdown field
pub mod field {
    use super::*;

    pub const BORDER_FOCUSED: Color = palette::CYAN;
    pub const BORDER_OPEN: Color = palette::PINK;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const TITLE: Style = Style::new().fg(palette::CYAN).add_modifier(Modifier::BOLD);

    pub const SELECTION: Color = palette::TEXT;
    pub const NO_SELECTION: Color = palette::TEXT_DIM;
    pub const ARROW: Color = palette::PINK;
}

/// Open option list
pub mod dropdown {
    use super::*;

    pub const BORDER: Color = palette::PINK;
    pub const SCROLLBAR: Color = palette::PINK;
    pub const BACKGROUND: Color = palette::BG_DARK;

    // Group headers are bold and never highlighted
    pub const HEADER: Style = Style::new().fg(palette::TEXT).add_modifier(Modifier::BOLD);

    pub const ITEM_NORMAL_FG: Color = Color::Rgb(180, 182, 200);
    pub const ITEM_NORMAL_BG: Color = palette::BG_DARK;
    pub const ITEM_DISABLED: Style = Style::new()
        .fg(palette::TEXT_DIM)
        .add_modifier(Modifier::CROSSED_OUT);

    pub const ITEM_HIGHLIGHTED_FG: Color = palette::TEXT;
    pub const ITEM_HIGHLIGHTED_BG: Color = palette::BG_HOVER;
    pub const ITEM_HIGHLIGHTED_INDICATOR: Color = palette::PINK;
    pub const ITEM_HIGHLIGHTED_MODIFIER: Modifier = Modifier::BOLD;

    // Entry currently committed as the selection
    pub const ITEM_SELECTED_FG: Color = palette::GREEN;

    pub const EMPTY: Color = palette::TEXT_DIM;
}

/// Help line at the bottom of the screen
pub mod help_line {
    use super::*;

    pub const KEY: Color = palette::CYAN;
    pub const DESCRIPTION: Color = palette::TEXT_MUTED;
    pub const SEPARATOR: Color = palette::TEXT_DIM;
}

/// Notification overlay
pub mod notification {
    use super::*;

    pub const INFO_FG: Color = palette::TEXT;
    pub const INFO_BG: Color = Color::Rgb(35, 35, 58);
    pub const INFO_BORDER: Color = palette::TEXT_MUTED;

    pub const WARNING_FG: Color = palette::BG_DARK;
    pub const WARNING_BG: Color = palette::YELLOW;
    pub const WARNING_BORDER: Color = palette::YELLOW;

    pub const ERROR_FG: Color = palette::TEXT;
    pub const ERROR_BG: Color = palette::RED;
    pub const ERROR_BORDER: Color = Color::Rgb(255, 140, 150);
}
