//! Syntax layer tests: lang attributes and the item scanner.

pub mod tests_attrs;
pub mod tests_items;
