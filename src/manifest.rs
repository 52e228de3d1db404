//! Manifest store (mcpack.json)
//!
//! The manifest is the single source of truth for what is installed: a
//! JSON object keyed by content type, each value an ordered array of
//! installed entries. It lives at a fixed name inside the Minecraft
//! root, is created empty on first use, and is rewritten atomically
//! after every successful mutation. The filesystem is only an advisory
//! source, used to validate entries or clean up files.
//!
//! Concurrent invocations are not coordinated: the last writer wins.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::ContentType;
use crate::error::{McpackError, Result};

/// Manifest filename inside the Minecraft root
pub const MANIFEST_FILE: &str = "mcpack.json";

/// One installed item's tracked metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstalledEntry {
    /// Display name, the human-facing key for uninstall/update lookups
    pub name: String,
    /// Remote catalog project identifier
    pub project_id: String,
    /// On-disk file name within the type's subdirectory
    pub file_name: String,
    /// Remote version identifier at install/last-update time
    pub version_id: String,
}

/// Persisted record of installed content, keyed by content type
///
/// Each vector keeps manifest insertion order, which reflects install
/// history. Within a vector, entry names are unique (last write wins).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub mods: Vec<InstalledEntry>,
    #[serde(default)]
    pub resourcepacks: Vec<InstalledEntry>,
    #[serde(default)]
    pub shaderpacks: Vec<InstalledEntry>,
}

impl Manifest {
    /// Load the manifest from `path`
    ///
    /// An absent file yields an empty manifest. A present but
    /// unparseable file is a [`McpackError::CorruptManifest`] so that
    /// tracked installs are never silently orphaned.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| McpackError::io("Failed to read manifest", path, &e))?;

        serde_json::from_str(&content).map_err(|e| McpackError::CorruptManifest {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Save the manifest to `path`, overwriting previous contents
    ///
    /// Writes a temp file in the same directory and renames it into
    /// place, so a crash mid-write leaves either the old or the new
    /// manifest intact, never a truncated one.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self).map_err(|e| McpackError::Io {
            message: format!("Failed to serialize manifest: {}", e),
        })?;

        let tmp_path = path.with_extension("json.tmp");

        fs::write(&tmp_path, &content)
            .map_err(|e| McpackError::io("Failed to write manifest", &tmp_path, &e))?;

        fs::rename(&tmp_path, path)
            .map_err(|e| McpackError::io("Failed to replace manifest", path, &e))
    }

    /// Entries for one content type, insertion order
    pub fn entries(&self, content_type: ContentType) -> &[InstalledEntry] {
        match content_type {
            ContentType::Mod => &self.mods,
            ContentType::ResourcePack => &self.resourcepacks,
            ContentType::ShaderPack => &self.shaderpacks,
        }
    }

    fn entries_mut(&mut self, content_type: ContentType) -> &mut Vec<InstalledEntry> {
        match content_type {
            ContentType::Mod => &mut self.mods,
            ContentType::ResourcePack => &mut self.resourcepacks,
            ContentType::ShaderPack => &mut self.shaderpacks,
        }
    }

    /// Find an entry by exact name within a content type
    pub fn find(&self, content_type: ContentType, name: &str) -> Option<&InstalledEntry> {
        self.entries(content_type).iter().find(|e| e.name == name)
    }

    /// Insert an entry, replacing any prior entry with the same name
    ///
    /// Keeps the (name, type) uniqueness invariant: a re-install
    /// updates the existing slot instead of appending a duplicate.
    pub fn upsert(&mut self, content_type: ContentType, entry: InstalledEntry) {
        let entries = self.entries_mut(content_type);
        match entries.iter().position(|e| e.name == entry.name) {
            Some(pos) => entries[pos] = entry,
            None => entries.push(entry),
        }
    }

    /// Remove and return the entry with the given name, if tracked
    pub fn remove(&mut self, content_type: ContentType, name: &str) -> Option<InstalledEntry> {
        let entries = self.entries_mut(content_type);
        let pos = entries.iter().position(|e| e.name == name)?;
        Some(entries.remove(pos))
    }

    /// Replace the entry with the given name in place
    pub fn replace(&mut self, content_type: ContentType, name: &str, entry: InstalledEntry) {
        let entries = self.entries_mut(content_type);
        if let Some(pos) = entries.iter().position(|e| e.name == name) {
            entries[pos] = entry;
        }
    }

    /// Total number of tracked entries across all types
    pub fn len(&self) -> usize {
        ContentType::ALL
            .iter()
            .map(|ty| self.entries(*ty).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
