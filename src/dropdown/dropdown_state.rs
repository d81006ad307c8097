//! Selection state for the extended dropdown
//!
//! Owns the option list, the disabled labels and the optional grouping, and keeps
//! the selected index on an enabled, non-header entry whenever it is adjusted
//! automatically. Selections reported by the rendering surface are taken as-is and
//! only corrected on the next configuration change.

use std::fmt::Debug;

use super::grouping::{self, Group, GroupLabels};
use super::option::SelectOption;
use crate::error::{ConfigurationError, DropdownError, ValidationError};

/// Construction inputs for [`DropdownState`].
///
/// `options` and `grouping` are mutually exclusive, as are `index`, `label` and
/// `value`.
#[derive(Debug, Clone)]
pub struct DropdownConfig<V> {
    pub options: Option<Vec<SelectOption<V>>>,
    pub grouping: Option<Vec<Group<V>>>,
    pub disabled_options: Option<Vec<String>>,
    pub index: Option<usize>,
    pub label: Option<String>,
    pub value: Option<V>,
}

impl<V> Default for DropdownConfig<V> {
    fn default() -> Self {
        Self {
            options: None,
            grouping: None,
            disabled_options: None,
            index: None,
            label: None,
            value: None,
        }
    }
}

impl<V> DropdownConfig<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn options(mut self, options: Vec<SelectOption<V>>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn grouping(mut self, grouping: Vec<Group<V>>) -> Self {
        self.grouping = Some(grouping);
        self
    }

    pub fn disabled_options<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.disabled_options = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn value(mut self, value: V) -> Self {
        self.value = Some(value);
        self
    }

    fn selection_keys(&self) -> Vec<&'static str> {
        [
            ("index", self.index.is_some()),
            ("label", self.label.is_some()),
            ("value", self.value.is_some()),
        ]
        .into_iter()
        .filter_map(|(key, present)| present.then_some(key))
        .collect()
    }
}

/// One row of the list handed to the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentationEntry<'a, V> {
    pub label: &'a str,
    pub value: Option<&'a V>,
    pub is_header: bool,
    pub is_disabled: bool,
}

#[derive(Debug, Clone)]
pub struct DropdownState<V> {
    options: Vec<SelectOption<V>>,
    grouping: Vec<Group<V>>,
    header_positions: Vec<usize>,
    disabled_options: Vec<String>,
    grouping_labels: Vec<GroupLabels>,
    index: Option<usize>,
    /// Bumped whenever the disabled or grouping mirrors are republished.
    revision: u64,
}

impl<V: Clone + PartialEq + Debug> DropdownState<V> {
    pub fn new(config: DropdownConfig<V>) -> Result<Self, DropdownError> {
        if config.options.is_some() && config.grouping.is_some() {
            return Err(ConfigurationError::OptionsAndGrouping.into());
        }
        let selection_keys = config.selection_keys();
        if selection_keys.len() > 1 {
            return Err(ConfigurationError::ConflictingSelection(selection_keys).into());
        }

        let DropdownConfig {
            options,
            grouping,
            disabled_options,
            index,
            label,
            value,
        } = config;

        let (options, grouping) = match (options, grouping) {
            (_, Some(grouping)) => {
                grouping::validate_grouping(&grouping)?;
                (grouping::flatten_grouping(&grouping), grouping)
            }
            (options, None) => (options.unwrap_or_default(), Vec::new()),
        };

        let mut state = Self {
            header_positions: grouping::header_positions(&grouping),
            grouping_labels: grouping::grouping_labels(&grouping),
            options,
            grouping,
            disabled_options: Vec::new(),
            index: None,
            revision: 0,
        };

        if let Some(labels) = disabled_options {
            state.disabled_options = state.validate_disabled_options(&labels)?;
        }

        state.index = match (index, label, value) {
            (Some(index), _, _) => Some(state.check_bounds(index)?),
            (_, Some(label), _) => Some(
                state
                    .position_of_label(&label)
                    .ok_or(ValidationError::UnknownLabel(label))?,
            ),
            (_, _, Some(value)) => Some(
                state
                    .position_of_value(&value)
                    .ok_or_else(|| ValidationError::UnknownValue(format!("{:?}", value)))?,
            ),
            _ => state.first_selectable(),
        };

        #[cfg(debug_assertions)]
        log::debug!(
            "Dropdown created: {} entries, {} groups, {} disabled, index {:?}",
            state.options.len(),
            state.grouping.len(),
            state.disabled_options.len(),
            state.index
        );

        Ok(state)
    }

    /// Checks that every candidate label names an entry of the current option list.
    pub fn validate_disabled_options(
        &self,
        candidate: &[String],
    ) -> Result<Vec<String>, ValidationError> {
        check_labels_exist(candidate, &self.options)?;
        Ok(candidate.to_vec())
    }

    pub fn validate_grouping(candidate: &[Group<V>]) -> Result<(), ValidationError> {
        grouping::validate_grouping(candidate)
    }

    /// Replaces the disabled labels and moves the selection off any entry that can
    /// no longer be selected.
    ///
    /// Clearing all disabled labels resets the selection to the first selectable
    /// entry, in flat and grouped mode alike.
    pub fn set_disabled_options(&mut self, labels: Vec<String>) -> Result<(), ValidationError> {
        let labels = self.validate_disabled_options(&labels).inspect_err(|_e| {
            #[cfg(debug_assertions)]
            log::debug!("Rejected disabled options: {}", _e);
        })?;

        self.disabled_options = labels;
        self.republish();

        self.index = if self.disabled_options.is_empty() {
            self.first_selectable()
        } else {
            match self.index {
                Some(i) if self.is_selectable(i) => Some(i),
                _ => self.first_selectable(),
            }
        };

        #[cfg(debug_assertions)]
        log::debug!(
            "Disabled options set to {:?}, index now {:?}",
            self.disabled_options,
            self.index
        );

        Ok(())
    }

    /// Replaces the grouping, rebuilding the option list from it.
    ///
    /// An empty grouping leaves the dropdown in flat mode without options.
    pub fn set_grouping(&mut self, grouping: Vec<Group<V>>) -> Result<(), ValidationError> {
        Self::validate_grouping(&grouping)?;
        let options = grouping::flatten_grouping(&grouping);
        check_labels_exist(&self.disabled_options, &options)?;

        self.install(options, grouping);
        self.index = self.first_selectable();

        #[cfg(debug_assertions)]
        log::debug!(
            "Grouping set: {} groups, index now {:?}",
            self.grouping.len(),
            self.index
        );

        Ok(())
    }

    /// Replaces the option list with flat options, leaving grouped mode.
    pub fn set_options(&mut self, options: Vec<SelectOption<V>>) -> Result<(), ValidationError> {
        check_labels_exist(&self.disabled_options, &options)?;

        self.install(options, Vec::new());
        self.index = self.first_selectable();

        #[cfg(debug_assertions)]
        log::debug!(
            "Options set: {} entries, index now {:?}",
            self.options.len(),
            self.index
        );

        Ok(())
    }

    /// Applies a selection reported by the rendering surface.
    ///
    /// Headers and disabled entries are accepted; only the bounds are checked.
    pub fn receive_user_selection(&mut self, index: Option<usize>) -> Result<(), ValidationError> {
        self.index = match index {
            Some(i) => Some(self.check_bounds(i)?),
            None => None,
        };
        Ok(())
    }

    fn install(&mut self, options: Vec<SelectOption<V>>, grouping: Vec<Group<V>>) {
        self.header_positions = grouping::header_positions(&grouping);
        self.grouping_labels = grouping::grouping_labels(&grouping);
        self.options = options;
        self.grouping = grouping;
        self.republish();
    }

    fn republish(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    fn check_bounds(&self, index: usize) -> Result<usize, ValidationError> {
        if index < self.options.len() {
            Ok(index)
        } else {
            Err(ValidationError::IndexOutOfBounds {
                index,
                len: self.options.len(),
            })
        }
    }

    fn position_of_label(&self, label: &str) -> Option<usize> {
        (0..self.options.len()).find(|&i| !self.is_header(i) && self.options[i].label == label)
    }

    fn position_of_value(&self, value: &V) -> Option<usize> {
        self.options
            .iter()
            .position(|o| o.value.as_ref() == Some(value))
    }
}

impl<V> DropdownState<V> {
    pub fn options(&self) -> &[SelectOption<V>] {
        &self.options
    }

    pub fn grouping(&self) -> &[Group<V>] {
        &self.grouping
    }

    /// Disabled labels as published to the rendering surface.
    pub fn disabled_options(&self) -> &[String] {
        &self.disabled_options
    }

    /// `(header, member labels)` pairs as published to the rendering surface.
    pub fn grouping_labels(&self) -> &[GroupLabels] {
        &self.grouping_labels
    }

    pub fn is_grouped(&self) -> bool {
        !self.grouping.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn selected(&self) -> Option<&SelectOption<V>> {
        self.index.and_then(|i| self.options.get(i))
    }

    pub fn label(&self) -> Option<&str> {
        self.selected().map(|o| o.label.as_str())
    }

    pub fn value(&self) -> Option<&V> {
        self.selected().and_then(|o| o.value.as_ref())
    }

    pub fn is_header(&self, index: usize) -> bool {
        self.header_positions.binary_search(&index).is_ok()
    }

    pub fn is_disabled(&self, index: usize) -> bool {
        self.options
            .get(index)
            .is_some_and(|o| self.disabled_options.contains(&o.label))
    }

    pub fn is_selectable(&self, index: usize) -> bool {
        index < self.options.len() && !self.is_header(index) && !self.is_disabled(index)
    }

    pub fn first_selectable(&self) -> Option<usize> {
        (0..self.options.len()).find(|&i| self.is_selectable(i))
    }

    pub fn last_selectable(&self) -> Option<usize> {
        (0..self.options.len()).rev().find(|&i| self.is_selectable(i))
    }

    /// First selectable entry after `from`, without wrapping.
    pub fn next_selectable(&self, from: Option<usize>) -> Option<usize> {
        let start = from.map_or(0, |i| i + 1);
        (start..self.options.len()).find(|&i| self.is_selectable(i))
    }

    /// Last selectable entry before `from`, without wrapping.
    pub fn previous_selectable(&self, from: Option<usize>) -> Option<usize> {
        let end = from.unwrap_or(self.options.len()).min(self.options.len());
        (0..end).rev().find(|&i| self.is_selectable(i))
    }

    pub fn presentation(&self) -> Vec<PresentationEntry<'_, V>> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, option)| PresentationEntry {
                label: &option.label,
                value: option.value.as_ref(),
                is_header: self.is_header(i),
                is_disabled: self.is_disabled(i),
            })
            .collect()
    }
}

fn check_labels_exist<V>(
    labels: &[String],
    options: &[SelectOption<V>],
) -> Result<(), ValidationError> {
    let mut unknown: Vec<String> = Vec::new();
    for label in labels {
        if !options.iter().any(|o| &o.label == label) && !unknown.contains(label) {
            unknown.push(label.clone());
        }
    }

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::UnknownDisabledOptions(unknown))
    }
}

#[cfg(test)]
#[path = "dropdown_state_tests.rs"]
mod dropdown_state_tests;
