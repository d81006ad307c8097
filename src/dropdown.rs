//! Extended dropdown: options that can be individually disabled, and optional
//! named groups rendered as headers within the option list.

pub mod dropdown_events;
pub mod dropdown_render;
mod dropdown_state;
pub mod grouping;
pub mod option;
mod view_state;

pub use dropdown_state::{DropdownConfig, DropdownState, PresentationEntry};
pub use grouping::{Group, GroupLabels};
pub use option::{SelectOption, make_options};
pub use view_state::DropdownViewState;
