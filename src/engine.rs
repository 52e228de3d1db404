//! Installation engine
//!
//! Orchestrates install, list, uninstall and update by combining the
//! registry's lookups with the manifest's state and direct writes into
//! the per-type content directories. One engine is built per CLI
//! invocation; the manifest value is threaded through explicitly and
//! persisted after every successful mutation.

use std::fs;
use std::path::PathBuf;

use crate::content::ContentType;
use crate::error::{McpackError, Result};
use crate::manifest::{InstalledEntry, Manifest, MANIFEST_FILE};
use crate::registry::{CandidateContent, ContentRegistry};

/// Terminal outcome of one entry in an update batch
#[derive(Debug)]
pub enum UpdateOutcome {
    /// Remote version identifier matches the installed one
    UpToDate,
    /// New file installed; `version` is the human-readable number
    Updated { version: String },
    /// Lookup or download failed; the rest of the batch continues
    Failed { error: McpackError },
}

/// Per-entry result of an update batch
#[derive(Debug)]
pub struct UpdateReport {
    pub name: String,
    pub content_type: ContentType,
    pub outcome: UpdateOutcome,
}

/// Installation engine over one Minecraft root
pub struct Engine<'a> {
    root: PathBuf,
    manifest: Manifest,
    registry: &'a dyn ContentRegistry,
}

impl std::fmt::Debug for Engine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("root", &self.root)
            .field("manifest", &self.manifest)
            .finish_non_exhaustive()
    }
}

impl<'a> Engine<'a> {
    /// Open the engine, loading the manifest from the Minecraft root
    ///
    /// Fails with `CorruptManifest` when the manifest file exists but
    /// cannot be parsed; an absent file starts an empty manifest.
    pub fn open(root: PathBuf, registry: &'a dyn ContentRegistry) -> Result<Self> {
        let manifest = Manifest::load(&root.join(MANIFEST_FILE))?;
        Ok(Self {
            root,
            manifest,
            registry,
        })
    }

    fn manifest_path(&self) -> PathBuf {
        self.root.join(MANIFEST_FILE)
    }

    fn content_dir(&self, content_type: ContentType) -> PathBuf {
        self.root.join(content_type.dir_name())
    }

    /// Search the remote catalog; no side effects
    pub fn search(
        &self,
        query: &str,
        content_type: ContentType,
        game_version: Option<&str>,
    ) -> Result<Vec<CandidateContent>> {
        self.registry.search(query, content_type, game_version)
    }

    /// Install a project's latest compatible file
    ///
    /// Re-installing a project replaces the prior manifest entry for
    /// the same name (last write wins). A failed download may leave a
    /// partial file behind; rerunning overwrites it.
    pub fn install(
        &mut self,
        project_id: &str,
        content_type: ContentType,
        game_version: Option<&str>,
    ) -> Result<InstalledEntry> {
        let title = self.registry.project_title(project_id)?;
        let file = self.registry.latest_file(project_id, game_version)?;

        let dir = self.content_dir(content_type);
        fs::create_dir_all(&dir)
            .map_err(|e| McpackError::io("Failed to create directory", &dir, &e))?;

        let dest = dir.join(&file.file_name);
        self.registry.download(&file.url, &dest)?;

        let entry = InstalledEntry {
            name: title,
            project_id: project_id.to_string(),
            file_name: file.file_name,
            version_id: file.version_id,
        };

        self.manifest.upsert(content_type, entry.clone());
        self.manifest.save(&self.manifest_path())?;

        Ok(entry)
    }

    /// Tracked entries for one type, manifest insertion order
    pub fn list(&self, content_type: ContentType) -> &[InstalledEntry] {
        self.manifest.entries(content_type)
    }

    /// Remove an installed item by exact name
    ///
    /// The backing file already being gone is treated as already
    /// clean, not an error. The manifest is only rewritten after the
    /// file deletion succeeded, so a failed deletion leaves the entry
    /// tracked.
    pub fn uninstall(&mut self, name: &str, content_type: ContentType) -> Result<InstalledEntry> {
        let entry = self
            .manifest
            .find(content_type, name)
            .cloned()
            .ok_or_else(|| McpackError::NotInstalled {
                name: name.to_string(),
                content_type: content_type.label().to_string(),
            })?;

        let file_path = self.content_dir(content_type).join(&entry.file_name);
        match fs::remove_file(&file_path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(McpackError::io("Failed to remove file", &file_path, &e)),
        }

        self.manifest.remove(content_type, name);
        self.manifest.save(&self.manifest_path())?;

        Ok(entry)
    }

    /// Update installed entries matching the optional type/name filters
    ///
    /// Each entry is processed independently; one entry's failure
    /// never aborts the rest of the batch. The manifest is persisted
    /// once after the batch when anything changed.
    pub fn update(
        &mut self,
        content_type: Option<ContentType>,
        name: Option<&str>,
        game_version: Option<&str>,
    ) -> Result<Vec<UpdateReport>> {
        let targets = self.select_targets(content_type, name)?;

        let mut reports = Vec::with_capacity(targets.len());
        let mut changed = false;

        for (ty, entry_name) in targets {
            let outcome = self.update_entry(ty, &entry_name, game_version);
            if matches!(outcome, UpdateOutcome::Updated { .. }) {
                changed = true;
            }
            reports.push(UpdateReport {
                name: entry_name,
                content_type: ty,
                outcome,
            });
        }

        if changed {
            self.manifest.save(&self.manifest_path())?;
        }

        Ok(reports)
    }

    /// Entries whose backing file no longer exists in the type's
    /// directory (orphaned per the manifest's advisory-filesystem view)
    pub fn orphaned(&self, content_type: ContentType) -> Vec<&InstalledEntry> {
        let dir = self.content_dir(content_type);
        self.manifest
            .entries(content_type)
            .iter()
            .filter(|entry| !dir.join(&entry.file_name).exists())
            .collect()
    }

    fn select_targets(
        &self,
        content_type: Option<ContentType>,
        name: Option<&str>,
    ) -> Result<Vec<(ContentType, String)>> {
        let types: Vec<ContentType> = match content_type {
            Some(ty) => vec![ty],
            None => ContentType::ALL.to_vec(),
        };

        let targets: Vec<(ContentType, String)> = types
            .iter()
            .flat_map(|ty| {
                self.manifest
                    .entries(*ty)
                    .iter()
                    .filter(|entry| name.map_or(true, |n| entry.name == n))
                    .map(|entry| (*ty, entry.name.clone()))
            })
            .collect();

        // An explicit name that matches nothing is a user error; an
        // empty manifest without filters is just an empty batch.
        if targets.is_empty() {
            if let Some(n) = name {
                return Err(McpackError::NotInstalled {
                    name: n.to_string(),
                    content_type: content_type
                        .map(|ty| ty.label().to_string())
                        .unwrap_or_else(|| "content".to_string()),
                });
            }
        }

        Ok(targets)
    }

    fn update_entry(
        &mut self,
        content_type: ContentType,
        name: &str,
        game_version: Option<&str>,
    ) -> UpdateOutcome {
        let Some(entry) = self.manifest.find(content_type, name).cloned() else {
            return UpdateOutcome::Failed {
                error: McpackError::NotInstalled {
                    name: name.to_string(),
                    content_type: content_type.label().to_string(),
                },
            };
        };

        let file = match self.registry.latest_file(&entry.project_id, game_version) {
            Ok(file) => file,
            Err(error) => return UpdateOutcome::Failed { error },
        };

        if file.version_id == entry.version_id {
            return UpdateOutcome::UpToDate;
        }

        let dir = self.content_dir(content_type);
        if let Err(e) = fs::create_dir_all(&dir) {
            return UpdateOutcome::Failed {
                error: McpackError::io("Failed to create directory", &dir, &e),
            };
        }

        let new_path = dir.join(&file.file_name);
        if let Err(error) = self.registry.download(&file.url, &new_path) {
            return UpdateOutcome::Failed { error };
        }

        // Remove the superseded file when the name changed; a leftover
        // old file is cosmetic, not worth failing the entry over
        if file.file_name != entry.file_name {
            let old_path = dir.join(&entry.file_name);
            let _ = fs::remove_file(old_path);
        }

        let version = file.version_number.clone();
        self.manifest.replace(
            content_type,
            name,
            InstalledEntry {
                name: entry.name,
                project_id: entry.project_id,
                file_name: file.file_name,
                version_id: file.version_id,
            },
        );

        UpdateOutcome::Updated { version }
    }
}
