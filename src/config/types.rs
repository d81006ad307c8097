// Configuration type definitions

use serde::Deserialize;

/// Option list presentation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DropdownSettings {
    /// Rows shown in the open list before it scrolls
    #[serde(default = "default_max_visible_items")]
    pub max_visible_items: usize,
    /// Spaces before options listed under a group header
    #[serde(default = "default_member_indent")]
    pub member_indent: usize,
}

fn default_max_visible_items() -> usize {
    10
}

fn default_member_indent() -> usize {
    1
}

impl Default for DropdownSettings {
    fn default() -> Self {
        DropdownSettings {
            max_visible_items: default_max_visible_items(),
            member_indent: default_member_indent(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub dropdown: DropdownSettings,
}
