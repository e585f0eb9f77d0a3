//! Manifest files that declare GitHub-hosted libraries.
//!
//! A manifest is the raw text of a package manager file (e.g. a Carthage
//! `Cartfile.resolved`) paired with the dialect it is written in. Loading is
//! deliberately forgiving: a missing or unreadable file becomes a manifest
//! with no content, which extraction treats as "no libraries".

pub mod pattern;

use std::path::Path;

use log::warn;

use crate::runtime::Runtime;

/// A manifest dialect supported by the extraction engine.
///
/// Each dialect carries its own pattern pair, see [`pattern::PatternCatalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    /// Carthage `Cartfile.resolved`: `github "owner/name" "version"`.
    Carthage,
    /// Mint `Mintfile`: `owner/name@version`.
    Mint,
}

impl ManifestKind {
    /// All supported dialects, in scan order.
    pub const ALL: [ManifestKind; 2] = [ManifestKind::Carthage, ManifestKind::Mint];

    /// The file name this dialect is read from.
    pub fn file_name(&self) -> &'static str {
        match self {
            ManifestKind::Carthage => "Cartfile.resolved",
            ManifestKind::Mint => "Mintfile",
        }
    }
}

impl std::fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestKind::Carthage => write!(f, "carthage"),
            ManifestKind::Mint => write!(f, "mint"),
        }
    }
}

/// A manifest file's raw text, or `None` if the file could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub kind: ManifestKind,
    pub content: Option<String>,
}

impl Manifest {
    /// Wrap already-loaded manifest text.
    pub fn new(kind: ManifestKind, content: Option<String>) -> Self {
        Self { kind, content }
    }

    /// Load the manifest for `kind` from `project_root`.
    ///
    /// A missing or unreadable file is not an error: it logs a warning and
    /// yields a manifest without content.
    pub fn load<R: Runtime>(runtime: &R, project_root: &Path, kind: ManifestKind) -> Self {
        let path = project_root.join(kind.file_name());
        if !runtime.exists(&path) {
            warn!("Not found: {}", path.display());
            return Self::new(kind, None);
        }
        match runtime.read_to_string(&path) {
            Ok(content) => Self::new(kind, Some(content)),
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::new(kind, None)
            }
        }
    }
}
