//! dropdown-extended library - select component with disabled options and option groups
//!
//! This library exposes the dropdown model and the terminal front end built on it.

pub mod app;
pub mod config;
pub mod definition;
pub mod dropdown;
pub mod error;
pub mod help;
pub mod layout;
pub mod notification;
pub mod output;
pub mod scroll;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use dropdown::{DropdownConfig, DropdownState, Group, SelectOption};
pub use error::{ConfigurationError, DropdownError, ValidationError};
