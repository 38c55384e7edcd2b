/// Item list loading.
///
/// One item per line; the list truncates at the first empty line — anything
/// after it is ignored (a trailing section of the file can hold notes).
/// Duplicates and lists shorter than two items are fatal at startup.
use std::path::Path;

use crate::bail;

/// Parse item names from file content.
pub fn parse_items(content: &str) -> Vec<String> {
    let mut items = Vec::new();
    for line in content.lines() {
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            break;
        }
        items.push(line.to_string());
    }
    items
}

/// Load and validate the item list from a file.
pub fn load_items(path: &Path) -> Vec<String> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| bail(format!("Failed to read items file {}: {e}", path.display())));
    let items = parse_items(&content);

    if items.len() < 2 {
        bail(format!(
            "Need at least 2 items to order, got {} from {}",
            items.len(),
            path.display()
        ));
    }
    for (i, item) in items.iter().enumerate() {
        if items[..i].contains(item) {
            bail(format!("Duplicate item \"{item}\" in {}", path.display()));
        }
    }
    items
}
