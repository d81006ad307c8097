//! Shared test fixtures and helper functions

#[cfg(test)]
pub mod test_helpers {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use serde_json::{Value, json};

    use crate::app::App;
    use crate::config::Config;
    use crate::dropdown::{DropdownConfig, DropdownState, Group, SelectOption};

    /// Options `a`, `b`, `c` with values 1, 2, 3
    pub fn letters() -> Vec<SelectOption<Value>> {
        vec![
            SelectOption::new("a", json!(1)),
            SelectOption::new("b", json!(2)),
            SelectOption::new("c", json!(3)),
        ]
    }

    /// `G1: a, b` and `G2: c`
    pub fn letter_groups() -> Vec<Group<Value>> {
        let mut letters = letters();
        let c = letters.pop().into_iter().collect();
        vec![Group::new("G1", letters), Group::new("G2", c)]
    }

    pub fn app_with(config: DropdownConfig<Value>) -> App {
        let dropdown = DropdownState::new(config).unwrap();
        App::new(dropdown, Some("Letters".to_string()), &Config::default())
    }

    pub fn flat_app() -> App {
        app_with(DropdownConfig::new().options(letters()))
    }

    pub fn grouped_app() -> App {
        app_with(DropdownConfig::new().grouping(letter_groups()))
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }
}
