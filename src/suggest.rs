//! Command autocomplete.

#[cfg(test)]
#[path = "suggest_test.rs"]
mod suggest_test;

use crate::catalog::Command;

/// Filter `catalog` against the draft.
///
/// Only slash input of at least two characters produces suggestions. An
/// entry qualifies when its token starts with the input, or its description
/// contains the input without the slash (both case-insensitive). Catalog
/// order is preserved.
#[must_use]
pub fn suggest<'a>(input: &str, catalog: &'a [Command]) -> Vec<&'a Command> {
    if !input.starts_with('/') || input.chars().count() < 2 {
        return Vec::new();
    }
    let needle = input.to_lowercase();
    let bare = needle.strip_prefix('/').unwrap_or(&needle);
    catalog
        .iter()
        .filter(|c| c.command.to_lowercase().starts_with(&needle) || c.description.to_lowercase().contains(bare))
        .collect()
}

/// Text placed in the input when a suggestion is picked.
#[must_use]
pub fn completion(command: &Command) -> String {
    format!("{} ", command.command)
}
