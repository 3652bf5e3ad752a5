//! Display implementations for navigation tree types

use std::fmt;

use super::*;

impl fmt::Display for Sidebar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            write_item(f, item, 0)?;
        }
        Ok(())
    }
}

impl fmt::Display for NavItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_item(f, self, 0)
    }
}

// Indented outline, two spaces per level:
//
//   Examples/
//     getting-started
//     More Examples -> https://example.org
fn write_item(f: &mut fmt::Formatter<'_>, item: &NavItem, depth: usize) -> fmt::Result {
    let indent = depth * 2;
    match item {
        NavItem::Doc(id) => writeln!(f, "{:indent$}{}", "", id),
        NavItem::Link(link) => writeln!(f, "{:indent$}{} -> {}", "", link.label, link.href),
        NavItem::Category(category) => {
            writeln!(f, "{:indent$}{}/", "", category.label)?;
            for child in &category.items {
                write_item(f, child, depth + 1)?;
            }
            Ok(())
        }
    }
}
