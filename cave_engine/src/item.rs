//! Items and the things that hold them.
//!
//! Items in the cave are plain names. Each one lives in exactly one holder at
//! a time: a room's floor or the player's inventory.

/// Methods common to anything that can hold items.
pub trait ItemHolder {
    /// Add an item; adding an item already held is a no-op.
    fn add_item(&mut self, item: &str);
    /// Remove an item, returning whether it was held.
    fn remove_item(&mut self, item: &str) -> bool;
    fn contains_item(&self, item: &str) -> bool;
}

/// Normalize player input into the stored form of an item name.
///
/// The first character is upper-cased and the rest lower-cased, so `kEY`
/// becomes `Key`. Multi-word names only get their first letter capitalized.
pub fn normalize_item_name(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Push `item` onto an ordered, duplicate-free item list.
pub(crate) fn push_unique(items: &mut Vec<String>, item: &str) {
    if !items.iter().any(|held| held == item) {
        items.push(item.to_string());
    }
}

/// Remove `item` from an ordered item list, keeping the order of the rest.
pub(crate) fn remove_ordered(items: &mut Vec<String>, item: &str) -> bool {
    match items.iter().position(|held| held == item) {
        Some(idx) => {
            items.remove(idx);
            true
        },
        None => false,
    }
}
