//! JSON written to stdout: the final selection, or a full dump of what the
//! rendering surface is handed.

use serde_json::{Value, json};

use crate::dropdown::DropdownState;

/// `{"index": .., "label": .., "value": ..}` with nulls for no selection.
pub fn selection_json(state: &DropdownState<Value>) -> Value {
    json!({
        "index": state.index(),
        "label": state.label(),
        "value": state.value(),
    })
}

/// Presentation list, side channels and current selection.
pub fn presentation_json(state: &DropdownState<Value>) -> Value {
    let entries: Vec<Value> = state
        .presentation()
        .into_iter()
        .map(|entry| {
            json!({
                "label": entry.label,
                "value": entry.value,
                "is_header": entry.is_header,
                "is_disabled": entry.is_disabled,
            })
        })
        .collect();

    json!({
        "entries": entries,
        "disabled_options": state.disabled_options(),
        "grouping": state.grouping_labels(),
        "selection": selection_json(state),
    })
}
