//! Navigation tree model for documentation sidebars

mod display;
mod impls;

use serde::{Deserialize, Serialize};

/// A single node in the navigation tree.
///
/// Nodes are polymorphic over three variants, mirroring the renderer's
/// sidebar schema:
/// - bare JSON strings for document references
/// - `{"type": "category", ...}` objects for nested groups
/// - `{"type": "link", ...}` objects for external links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavItem {
    /// Reference to a documentation page by identifier
    Doc(String),

    /// Nested, collapsible group of items (recursive)
    Category(Category),

    /// Link to an external URL
    Link(Link),
}

/// A nested, collapsible group of navigation items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "type")]
    tag: CategoryTag,

    /// Display label shown in the sidebar
    pub label: String,

    /// Whether the renderer shows this category collapsed initially
    #[serde(default = "default_collapsed")]
    pub collapsed: bool,

    /// Child nodes, in display order
    pub items: Vec<NavItem>,
}

/// A link to an external URL shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "type")]
    tag: LinkTag,

    /// Display label shown in the sidebar
    pub label: String,

    /// URL the link points at
    pub href: String,
}

// The `type` discriminants the renderer expects. Kept as unit enums so
// untagged NavItem deserialization rejects a category payload for a link
// and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum CategoryTag {
    #[serde(rename = "category")]
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
enum LinkTag {
    #[serde(rename = "link")]
    Link,
}

fn default_collapsed() -> bool {
    true
}

/// An ordered tree of navigation nodes, as consumed by the renderer.
///
/// Serializes as a bare JSON array of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sidebar {
    /// Top-level nodes, in display order
    pub items: Vec<NavItem>,
}

impl Sidebar {
    /// Create a sidebar from its top-level nodes.
    pub fn new(items: Vec<NavItem>) -> Self {
        Self { items }
    }

    /// Number of top-level nodes.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sidebar has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find the first category with the given label, depth-first.
    ///
    /// # Example
    ///
    /// ```
    /// use signpost::{Category, NavItem, Sidebar};
    ///
    /// let sidebar = Sidebar::new(vec![
    ///     Category::new("Guides", vec![NavItem::doc("intro")]).into(),
    /// ]);
    ///
    /// assert!(sidebar.find_category("Guides").is_some());
    /// assert!(sidebar.find_category("Examples").is_none());
    /// ```
    pub fn find_category(&self, label: &str) -> Option<&Category> {
        find_category_in(&self.items, label)
    }

    /// Find the first category with the given label, depth-first, mutably.
    pub fn find_category_mut(&mut self, label: &str) -> Option<&mut Category> {
        find_category_in_mut(&mut self.items, label)
    }

    /// Depth-first (pre-order) iterator over every node in the tree.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: vec![self.items.iter()],
        }
    }

    /// Serialize the tree to the renderer's JSON schema.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serialize the tree to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a Sidebar {
    type Item = &'a NavItem;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Depth-first iterator over the nodes of a [`Sidebar`].
///
/// Yields each node before its children, siblings in display order.
pub struct Iter<'a> {
    stack: Vec<std::slice::Iter<'a, NavItem>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a NavItem;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some(item) => {
                    if let NavItem::Category(category) = item {
                        self.stack.push(category.items.iter());
                    }
                    return Some(item);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

fn find_category_in<'a>(items: &'a [NavItem], label: &str) -> Option<&'a Category> {
    for item in items {
        if let NavItem::Category(category) = item {
            if category.label == label {
                return Some(category);
            }
            if let Some(found) = find_category_in(&category.items, label) {
                return Some(found);
            }
        }
    }
    None
}

fn find_category_in_mut<'a>(items: &'a mut [NavItem], label: &str) -> Option<&'a mut Category> {
    for item in items {
        if let NavItem::Category(category) = item {
            if category.label == label {
                return Some(category);
            }
            if let Some(found) = find_category_in_mut(&mut category.items, label) {
                return Some(found);
            }
        }
    }
    None
}
