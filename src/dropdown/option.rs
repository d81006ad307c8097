//! Dropdown option entries

/// A single entry of the flat option list.
///
/// Group headers are represented as options without a value.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption<V> {
    pub label: String,
    pub value: Option<V>,
}

impl<V> SelectOption<V> {
    pub fn new(label: impl Into<String>, value: V) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
        }
    }

    /// An entry that carries only a label, as used for group headers.
    pub fn label_only(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }
}

impl SelectOption<String> {
    /// Pairs a bare label with itself as value.
    pub fn from_label(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: Some(label.clone()),
            label,
        }
    }
}

impl<V, L: Into<String>> From<(L, V)> for SelectOption<V> {
    fn from((label, value): (L, V)) -> Self {
        Self::new(label, value)
    }
}

/// Collects `(label, value)` pairs into options.
pub fn make_options<V, L, I>(pairs: I) -> Vec<SelectOption<V>>
where
    L: Into<String>,
    I: IntoIterator<Item = (L, V)>,
{
    pairs.into_iter().map(SelectOption::from).collect()
}

/// Returns the labels of `options` in order.
pub fn option_labels<V>(options: &[SelectOption<V>]) -> Vec<&str> {
    options.iter().map(|o| o.label.as_str()).collect()
}
