//! One-shot sidebar construction
//!
//! [`SidebarBuilder`] performs the build-time merge: read the manifest once,
//! then splice each target group's entries into the matching category of the
//! static tree. The manifest path is passed explicitly into the constructor
//! and the read happens inside [`SidebarBuilder::build`], never at module
//! load.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{MergeError, Result};
use crate::nav::Sidebar;
use crate::toc::Toc;

/// Behavior when a splice target has no matching group in the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingGroup {
    /// Fail the build with [`MergeError::GroupNotFound`]
    #[default]
    Fail,

    /// Splice nothing; the category keeps only its statically declared items
    EmptyItems,
}

/// Builder for the one-shot merge of a manifest into a static sidebar.
///
/// A splice target is a label naming both a manifest group and the static
/// category that receives its items. Group lookup takes the first occurrence
/// in manifest order; category lookup is depth-first over the static tree.
/// Spliced entries land ahead of the category's statically declared items,
/// so a hand-authored trailing link stays last.
#[derive(Debug, Clone)]
pub struct SidebarBuilder {
    toc_path: PathBuf,
    splice_labels: Vec<String>,
    missing_group: MissingGroup,
}

impl SidebarBuilder {
    /// Create a builder that reads the manifest at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            toc_path: path.into(),
            splice_labels: Vec::new(),
            missing_group: MissingGroup::default(),
        }
    }

    /// Add a splice target label.
    pub fn splice(mut self, label: impl Into<String>) -> Self {
        self.splice_labels.push(label.into());
        self
    }

    /// Set the behavior for splice targets absent from the manifest.
    ///
    /// Defaults to [`MissingGroup::Fail`]: a missing group usually means a
    /// broken manifest generator, not an intentionally empty section.
    pub fn missing_group(mut self, policy: MissingGroup) -> Self {
        self.missing_group = policy;
        self
    }

    /// Path of the manifest this builder reads.
    pub fn toc_path(&self) -> &Path {
        &self.toc_path
    }

    /// Read the manifest and resolve the sidebar.
    ///
    /// Consumes the static tree and returns the fully resolved one; on error
    /// no partially merged tree is observable. The manifest is read exactly
    /// once per call.
    pub fn build(&self, mut sidebar: Sidebar) -> Result<Sidebar> {
        let toc = Toc::from_path(&self.toc_path)?;

        for label in &self.splice_labels {
            let occurrences = toc
                .groups()
                .iter()
                .filter(|group| group.label == *label)
                .count();
            if occurrences > 1 {
                warn!(
                    label = %label,
                    occurrences,
                    "duplicate group labels in manifest, using the first"
                );
            }

            let spliced = match toc.find_group(label) {
                Some(group) => group.items.clone(),
                None => match self.missing_group {
                    MissingGroup::Fail => {
                        return Err(MergeError::GroupNotFound(label.clone()).into());
                    }
                    MissingGroup::EmptyItems => Vec::new(),
                },
            };

            let category = sidebar
                .find_category_mut(label)
                .ok_or_else(|| MergeError::CategoryNotFound(label.clone()))?;

            debug!(label = %label, items = spliced.len(), "splicing manifest group");
            category.items.splice(0..0, spliced);
        }

        Ok(sidebar)
    }
}
