//! # Signpost
//!
//! A navigation tree builder for documentation site sidebars.
//!
//! Documentation sidebars are mostly hand-authored: a nested tree of page
//! references, categories, and external links. One or more categories are
//! populated at build time from an external table-of-contents manifest, so
//! that generated content (example pages, tutorials) lands in the sidebar
//! without editing the static tree.
//!
//! ## Architecture
//!
//! ```text
//! examples-toc.json → [Toc] → TopicGroup items
//!                                    │
//! static Sidebar ────► [SidebarBuilder::build] ────► resolved Sidebar → renderer
//! ```
//!
//! - **Manifest**: parse the JSON table of contents into typed topic groups
//! - **Static tree**: the caller-authored sidebar with designated splice
//!   targets
//! - **Build**: one file read, one in-memory splice, no persisted state
//!
//! ## Quick Start
//!
//! ```no_run
//! use signpost::{Category, Link, NavItem, Sidebar, SidebarBuilder};
//!
//! # fn main() -> signpost::Result<()> {
//! let sidebar = Sidebar::new(vec![
//!     NavItem::doc("intro"),
//!     Category::new(
//!         "Examples",
//!         vec![Link::new("More Examples", "https://example.org/examples").into()],
//!     )
//!     .into(),
//! ]);
//!
//! let resolved = SidebarBuilder::new("docs/examples-toc.json")
//!     .splice("Examples")
//!     .build(sidebar)?;
//!
//! println!("{}", resolved.to_json_pretty().unwrap());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod error;
pub mod nav;
pub mod toc;

// Re-export main types
pub use builder::{MissingGroup, SidebarBuilder};
pub use error::{MergeError, Result, SignpostError, TocError};
pub use nav::{Category, Link, NavItem, Sidebar};
pub use toc::{Toc, TopicGroup};

/// Signpost version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
