//! Layout regions tracking for UI components

use ratatui::layout::Rect;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    DropdownField,
    OptionList,
}

/// Rendered areas of UI components, refreshed on every render pass.
///
/// Regions are `None` when the component is not visible.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub dropdown_field: Option<Rect>,
    pub option_list: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
