//! Option groups and their flattening into the option list

use super::option::SelectOption;
use crate::error::ValidationError;

/// A named group of options. An empty header marks ungrouped options.
#[derive(Debug, Clone, PartialEq)]
pub struct Group<V> {
    pub header: String,
    pub options: Vec<SelectOption<V>>,
}

impl<V> Group<V> {
    pub fn new(header: impl Into<String>, options: Vec<SelectOption<V>>) -> Self {
        Self {
            header: header.into(),
            options,
        }
    }

    /// Options that are not placed under a header.
    pub fn ungrouped(options: Vec<SelectOption<V>>) -> Self {
        Self::new("", options)
    }

    pub fn has_header(&self) -> bool {
        !self.header.is_empty()
    }
}

/// `(header, member labels)` as published to the rendering surface.
pub type GroupLabels = (String, Vec<String>);

/// Non-empty headers must be unique; empty headers may repeat.
pub fn validate_grouping<V>(grouping: &[Group<V>]) -> Result<(), ValidationError> {
    let mut seen: Vec<&str> = Vec::new();
    let mut duplicates: Vec<String> = Vec::new();

    for group in grouping.iter().filter(|g| g.has_header()) {
        if seen.contains(&group.header.as_str()) {
            if !duplicates.contains(&group.header) {
                duplicates.push(group.header.clone());
            }
        } else {
            seen.push(&group.header);
        }
    }

    if duplicates.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::DuplicateHeaders(duplicates))
    }
}

/// Flattens a grouping into the option list shown by the dropdown.
///
/// Each non-empty header becomes a value-less entry directly followed by its
/// members.
pub fn flatten_grouping<V: Clone>(grouping: &[Group<V>]) -> Vec<SelectOption<V>> {
    let mut flat = Vec::with_capacity(grouping.iter().map(|g| g.options.len() + 1).sum());
    for group in grouping {
        if group.has_header() {
            flat.push(SelectOption::label_only(group.header.clone()));
        }
        flat.extend(group.options.iter().cloned());
    }
    flat
}

pub fn grouping_labels<V>(grouping: &[Group<V>]) -> Vec<GroupLabels> {
    grouping
        .iter()
        .map(|g| {
            (
                g.header.clone(),
                g.options.iter().map(|o| o.label.clone()).collect(),
            )
        })
        .collect()
}

/// Positions of header entries in the flattened list of `grouping`.
pub fn header_positions<V>(grouping: &[Group<V>]) -> Vec<usize> {
    let mut positions = Vec::new();
    let mut offset = 0;
    for group in grouping {
        if group.has_header() {
            positions.push(offset);
            offset += 1;
        }
        offset += group.options.len();
    }
    positions
}

#[cfg(test)]
#[path = "grouping_tests.rs"]
mod grouping_tests;
