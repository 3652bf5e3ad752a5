//! Table-of-contents manifest loading
//!
//! The manifest (`examples-toc.json` in the shipped configuration) is a JSON
//! array of topic groups, each an object carrying a `label` and an `items`
//! array of navigation entries. Deserialization doubles as schema checking:
//! a non-array top level, a group without a label, or a malformed entry all
//! fail the load.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::TocError;
use crate::nav::NavItem;

/// A named collection of entries loaded from the manifest.
///
/// Unknown extra fields on a group are tolerated, so manifest generators can
/// attach their own metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicGroup {
    /// Group label, matched against splice targets
    pub label: String,

    /// Entries in manifest order
    pub items: Vec<NavItem>,
}

/// A parsed manifest: an ordered list of topic groups.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Toc {
    groups: Vec<TopicGroup>,
}

impl Toc {
    /// Read and parse the manifest file at `path`.
    ///
    /// The file is read exactly once. Missing files and unreadable files
    /// surface as [`TocError::Read`]; malformed JSON and schema mismatches
    /// as [`TocError::Parse`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TocError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| TocError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let toc = Self::parse(&text).map_err(|source| TocError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), groups = toc.groups.len(), "loaded manifest");
        Ok(toc)
    }

    /// Parse a manifest from a JSON string.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// All groups, in manifest order.
    pub fn groups(&self) -> &[TopicGroup] {
        &self.groups
    }

    /// Find the first group with the given label, in manifest order.
    pub fn find_group(&self, label: &str) -> Option<&TopicGroup> {
        self.groups.iter().find(|group| group.label == label)
    }

    /// Number of groups in the manifest.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the manifest holds no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
