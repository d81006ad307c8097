use thiserror::Error;

/// Mutually exclusive construction inputs were supplied together.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Either `options` or `grouping` must be specified. Not both.")]
    OptionsAndGrouping,

    #[error("Only one of `index`, `label` or `value` may be specified, got: {}", join_keys(.0))]
    ConflictingSelection(Vec<&'static str>),
}

/// A proposed value was rejected; the previously accepted state stays in effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid passed options for 'disabled_options': {}", format_labels(.0))]
    UnknownDisabledOptions(Vec<String>),

    #[error(
        "Group headers must be unique (ignoring empty un-grouping headers). Duplicated headers: {}",
        format_labels(.0)
    )]
    DuplicateHeaders(Vec<String>),

    #[error("Invalid selection: index {index} out of bounds for {len} options")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Invalid selection: no option labelled {0:?}")]
    UnknownLabel(String),

    #[error("Invalid selection: no option with value {0}")]
    UnknownValue(String),
}

#[derive(Debug, Error)]
pub enum DropdownError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid dropdown definition: {0}")]
    Definition(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn format_labels(labels: &[String]) -> String {
    labels
        .iter()
        .map(|l| format!("{:?}", l))
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_keys(keys: &[&'static str]) -> String {
    keys.join(", ")
}
