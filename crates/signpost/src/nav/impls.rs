//! Constructors, predicates, and From conversions for navigation tree types

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl NavItem {
    /// Create a document reference node
    pub fn doc(id: impl Into<String>) -> Self {
        NavItem::Doc(id.into())
    }

    /// Create a category node with default collapse state
    pub fn category(label: impl Into<String>, items: Vec<NavItem>) -> Self {
        NavItem::Category(Category::new(label, items))
    }

    /// Create an external link node
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        NavItem::Link(Link::new(label, href))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates and Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Check if this node is a document reference
    pub fn is_doc(&self) -> bool {
        matches!(self, NavItem::Doc(_))
    }

    /// Check if this node is a category
    pub fn is_category(&self) -> bool {
        matches!(self, NavItem::Category(_))
    }

    /// Check if this node is an external link
    pub fn is_link(&self) -> bool {
        matches!(self, NavItem::Link(_))
    }

    /// Get the category payload, if this node is one
    pub fn as_category(&self) -> Option<&Category> {
        match self {
            NavItem::Category(category) => Some(category),
            _ => None,
        }
    }

    /// Get the link payload, if this node is one
    pub fn as_link(&self) -> Option<&Link> {
        match self {
            NavItem::Link(link) => Some(link),
            _ => None,
        }
    }

    /// The label shown in the sidebar: the page identifier for docs,
    /// the declared label for categories and links
    pub fn label(&self) -> &str {
        match self {
            NavItem::Doc(id) => id,
            NavItem::Category(category) => &category.label,
            NavItem::Link(link) => &link.label,
        }
    }
}

impl Category {
    /// Create a category, collapsed by default.
    pub fn new(label: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            tag: CategoryTag::Category,
            label: label.into(),
            collapsed: default_collapsed(),
            items,
        }
    }

    /// Set the initial collapse state.
    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }
}

impl Link {
    /// Create an external link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            tag: LinkTag::Link,
            label: label.into(),
            href: href.into(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Conversions
// ═══════════════════════════════════════════════════════════════════

impl From<&str> for NavItem {
    fn from(id: &str) -> Self {
        NavItem::Doc(id.to_string())
    }
}

impl From<String> for NavItem {
    fn from(id: String) -> Self {
        NavItem::Doc(id)
    }
}

impl From<Category> for NavItem {
    fn from(category: Category) -> Self {
        NavItem::Category(category)
    }
}

impl From<Link> for NavItem {
    fn from(link: Link) -> Self {
        NavItem::Link(link)
    }
}

impl FromIterator<NavItem> for Sidebar {
    fn from_iter<T: IntoIterator<Item = NavItem>>(iter: T) -> Self {
        Sidebar::new(iter.into_iter().collect())
    }
}
