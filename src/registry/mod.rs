//! Content registry boundary
//!
//! The registry is an external collaborator: it answers search
//! queries, resolves a project's latest compatible file, and downloads
//! files. The [`ContentRegistry`] trait is the seam the engine talks
//! through; [`ModrinthRegistry`] is the production implementation.

pub mod modrinth;

pub use modrinth::ModrinthRegistry;

use std::path::Path;

use crate::content::ContentType;
use crate::error::Result;

/// One search hit; transient, never persisted
#[derive(Debug, Clone)]
pub struct CandidateContent {
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub downloads: u64,
    pub content_type: ContentType,
}

/// A project's latest compatible file, resolved by the registry
#[derive(Debug, Clone)]
pub struct FileRef {
    /// Download URL
    pub url: String,
    /// Declared file name
    pub file_name: String,
    /// Opaque remote version identifier, compared on update
    pub version_id: String,
    /// Human-readable version number, for messages only
    pub version_number: String,
}

/// Remote catalog operations consumed by the installation engine
pub trait ContentRegistry {
    /// Search the catalog, optionally filtered to one game version
    fn search(
        &self,
        query: &str,
        content_type: ContentType,
        game_version: Option<&str>,
    ) -> Result<Vec<CandidateContent>>;

    /// Display name of a project
    fn project_title(&self, project_id: &str) -> Result<String>;

    /// Latest file compatible with the given game version (or overall
    /// latest when no filter is given)
    fn latest_file(&self, project_id: &str, game_version: Option<&str>) -> Result<FileRef>;

    /// Download `url` to `dest`, blocking until complete
    fn download(&self, url: &str, dest: &Path) -> Result<()>;
}
