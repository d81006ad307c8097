//! Dropdown definition files
//!
//! A definition is a TOML document holding the construction inputs of a dropdown:
//!
//! ```toml
//! description = "Region"
//! disabled_options = ["eu-north"]
//!
//! [[grouping]]
//! header = "Europe"
//! options = ["eu-west", ["eu-north", 2], { label = "eu-south", value = 3 }]
//! ```
//!
//! Option values are arbitrary TOML values, carried as JSON values so they can be
//! written back out unchanged.

use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::dropdown::{DropdownConfig, DropdownState, Group, SelectOption};
use crate::error::DropdownError;

/// One entry of `options`: a bare label, a `[label, value]` pair, a
/// `{ label, value }` table, or any other value used as its own label.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OptionEntry {
    Label(String),
    Pair(String, Value),
    Entry { label: String, value: Value },
    Bare(Value),
}

impl From<OptionEntry> for SelectOption<Value> {
    fn from(entry: OptionEntry) -> Self {
        match entry {
            OptionEntry::Label(label) => SelectOption::new(label.clone(), Value::String(label)),
            OptionEntry::Pair(label, value) | OptionEntry::Entry { label, value } => {
                SelectOption::new(label, value)
            }
            OptionEntry::Bare(value) => SelectOption::new(value.to_string(), value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupEntry {
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub options: Vec<OptionEntry>,
}

impl From<GroupEntry> for Group<Value> {
    fn from(entry: GroupEntry) -> Self {
        Group::new(entry.header, to_options(entry.options))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DropdownDefinition {
    /// Title shown on the dropdown field
    pub description: Option<String>,
    pub options: Option<Vec<OptionEntry>>,
    pub grouping: Option<Vec<GroupEntry>>,
    pub disabled_options: Option<Vec<String>>,
    pub index: Option<usize>,
    pub label: Option<String>,
    pub value: Option<Value>,
}

impl DropdownDefinition {
    pub fn into_config(self) -> DropdownConfig<Value> {
        DropdownConfig {
            options: self.options.map(to_options),
            grouping: self
                .grouping
                .map(|groups| groups.into_iter().map(Group::from).collect()),
            disabled_options: self.disabled_options,
            index: self.index,
            label: self.label,
            value: self.value,
        }
    }

    pub fn build(self) -> Result<DropdownState<Value>, DropdownError> {
        DropdownState::new(self.into_config())
    }
}

fn to_options(entries: Vec<OptionEntry>) -> Vec<SelectOption<Value>> {
    entries.into_iter().map(SelectOption::from).collect()
}

pub fn parse_definition(contents: &str) -> Result<DropdownDefinition, DropdownError> {
    Ok(toml::from_str(contents)?)
}

pub fn load_definition(path: &Path) -> Result<DropdownDefinition, DropdownError> {
    #[cfg(debug_assertions)]
    log::debug!("Loading dropdown definition from {:?}", path);

    let contents = fs::read_to_string(path)?;
    parse_definition(&contents)
}
