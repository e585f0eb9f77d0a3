//! GitHub-hosted library identities extracted from manifests.
//!
//! This module provides the core entity produced by the extraction engine,
//! plus the extraction engine itself and version normalization.
//!
//! # Structure
//!
//! - `extract` - Two-phase pattern extraction over manifest text
//! - `version` - Commit-hash version normalization

pub mod extract;
pub mod version;

use serde::Serialize;

/// License classification for a library.
///
/// Extraction always produces [`LicenseType::Unknown`]; classification is
/// filled in by later license lookup, which is outside this crate's core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LicenseType {
    Apache2,
    Bsd2Clause,
    Bsd3Clause,
    Gpl3,
    Mit,
    Mpl2,
    Zlib,
    #[default]
    Unknown,
}

impl std::fmt::Display for LicenseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LicenseType::Apache2 => "Apache-2.0",
            LicenseType::Bsd2Clause => "BSD-2-Clause",
            LicenseType::Bsd3Clause => "BSD-3-Clause",
            LicenseType::Gpl3 => "GPL-3.0",
            LicenseType::Mit => "MIT",
            LicenseType::Mpl2 => "MPL-2.0",
            LicenseType::Zlib => "Zlib",
            LicenseType::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// A GitHub-hosted library as declared in a manifest.
///
/// `owner` and `name` are never empty for an extracted record. The source
/// URL is derived on demand, never stored.
#[derive(Debug, Clone)]
pub struct GitHubLibrary {
    /// Hosting-account (organization or user) name.
    pub owner: String,
    /// Repository name as written in the manifest.
    pub name: String,
    /// User-chosen display name, present only when a rename mapping matched.
    pub name_specified: Option<String>,
    /// Pinned version, absent when the manifest line carried no version token.
    pub version: Option<String>,
    /// License classification, `Unknown` until looked up.
    pub license_type: LicenseType,
}

impl GitHubLibrary {
    pub fn new(
        owner: impl Into<String>,
        name: impl Into<String>,
        name_specified: Option<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            name_specified,
            version,
            license_type: LicenseType::default(),
        }
    }

    /// The repository URL on GitHub.
    pub fn source_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.name)
    }

    /// The name to show to users: the rename override when present,
    /// otherwise the repository name.
    pub fn display_name(&self) -> &str {
        self.name_specified.as_deref().unwrap_or(&self.name)
    }
}

// Equality covers identity fields only; license_type is excluded.
impl PartialEq for GitHubLibrary {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.name_specified == other.name_specified
            && self.owner == other.owner
            && self.version == other.version
    }
}

impl Eq for GitHubLibrary {}

impl std::fmt::Display for GitHubLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "name: {}, nameSpecified: {}, owner: {}, version: {}, source: {}",
            self.name,
            self.name_specified.as_deref().unwrap_or(""),
            self.owner,
            self.version.as_deref().unwrap_or(""),
            self.source_url()
        )
    }
}
