use serde_json::Value;

use crate::config::{Config, DropdownSettings};
use crate::dropdown::{DropdownState, DropdownViewState};
use crate::layout::LayoutRegions;
use crate::notification::NotificationState;

pub struct App {
    pub dropdown: DropdownState<Value>,
    pub view: DropdownViewState,
    pub notification: NotificationState,
    pub settings: DropdownSettings,
    pub description: Option<String>,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
    /// Set when the user quits by confirming the selection
    pub output_selection: bool,
}

impl App {
    pub fn new(dropdown: DropdownState<Value>, description: Option<String>, config: &Config) -> Self {
        Self {
            dropdown,
            view: DropdownViewState::new(),
            notification: NotificationState::new(),
            settings: config.dropdown.clone(),
            description,
            layout_regions: LayoutRegions::new(),
            should_quit: false,
            output_selection: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn output_selection(&self) -> bool {
        self.output_selection
    }

    pub fn open_dropdown(&mut self) {
        self.view.open(&self.dropdown);
    }

    pub fn close_dropdown(&mut self) {
        self.view.close();
    }

    /// Reports `row` to the dropdown as the user's choice and closes the list.
    pub fn commit_selection(&mut self, row: Option<usize>) {
        if let Err(e) = self.dropdown.receive_user_selection(row) {
            self.notification.show_error(&e.to_string());
        }
        self.view.close();
    }

    /// Adds the highlighted option to the disabled labels.
    pub fn disable_highlighted(&mut self) {
        let Some(label) = self
            .view
            .highlighted()
            .and_then(|row| self.dropdown.options().get(row))
            .map(|option| option.label.clone())
        else {
            return;
        };

        let mut disabled = self.dropdown.disabled_options().to_vec();
        disabled.push(label.clone());
        self.apply_disabled(disabled, &format!("Disabled {:?}", label));
    }

    /// Clears the disabled labels, which also resets the selection.
    pub fn enable_all(&mut self) {
        self.apply_disabled(Vec::new(), "Enabled all options");
    }

    fn apply_disabled(&mut self, disabled: Vec<String>, message: &str) {
        match self.dropdown.set_disabled_options(disabled) {
            Ok(()) => {
                self.view.sync(&self.dropdown);
                self.notification.show(message);
            }
            Err(e) => self.notification.show_error(&e.to_string()),
        }
    }
}
