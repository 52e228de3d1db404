//! Modrinth API client
//!
//! Blocking client over the Modrinth v2 REST API. Search uses facets
//! to constrain project type and game version; file resolution takes
//! the newest version and its primary file. No retries: each CLI
//! invocation is a single user-facing command, failures surface
//! directly.

use std::fs::File;
use std::path::Path;

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::Deserialize;

use super::{CandidateContent, ContentRegistry, FileRef};
use crate::content::ContentType;
use crate::error::{McpackError, Result};

const BASE_URL: &str = "https://api.modrinth.com/v2";
const USER_AGENT: &str = concat!("mcpack/", env!("CARGO_PKG_VERSION"));
const SEARCH_LIMIT: usize = 20;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    hits: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    project_id: String,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    downloads: u64,
}

#[derive(Debug, Deserialize)]
struct Project {
    title: String,
}

#[derive(Debug, Deserialize)]
struct Version {
    id: String,
    version_number: String,
    files: Vec<VersionFile>,
}

#[derive(Debug, Deserialize)]
struct VersionFile {
    url: String,
    filename: String,
    #[serde(default)]
    primary: bool,
}

/// Modrinth-backed [`ContentRegistry`]
pub struct ModrinthRegistry {
    client: Client,
    base_url: String,
}

impl ModrinthRegistry {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| McpackError::Network {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            base_url: BASE_URL.to_string(),
        })
    }

    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| McpackError::Network {
                message: format!("Request to {} failed: {}", url, e),
            })?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::TOO_MANY_REQUESTS => Err(McpackError::RateLimited {
                message: format!("{} answered 429", url),
            }),
            status => Err(McpackError::Network {
                message: format!("{} answered {}", url, status),
            }),
        }
    }
}

/// Build the `facets` query value for a search request
fn search_facets(content_type: ContentType, game_version: Option<&str>) -> String {
    let mut facets = vec![vec![format!("project_type:{}", content_type.facet_value())]];
    if let Some(version) = game_version {
        facets.push(vec![format!("versions:{}", version)]);
    }
    serde_json::to_string(&facets).unwrap_or_default()
}

/// Pick the primary file of a version, falling back to the first
fn pick_primary(files: &[VersionFile]) -> Option<&VersionFile> {
    files.iter().find(|f| f.primary).or_else(|| files.first())
}

impl ContentRegistry for ModrinthRegistry {
    fn search(
        &self,
        query: &str,
        content_type: ContentType,
        game_version: Option<&str>,
    ) -> Result<Vec<CandidateContent>> {
        let url = format!("{}/search", self.base_url);
        let response = self.get(
            &url,
            &[
                ("query", query.to_string()),
                ("limit", SEARCH_LIMIT.to_string()),
                ("facets", search_facets(content_type, game_version)),
            ],
        )?;

        let parsed: SearchResponse = response.json().map_err(|e| McpackError::Network {
            message: format!("Invalid search response: {}", e),
        })?;

        Ok(parsed
            .hits
            .into_iter()
            .map(|hit| CandidateContent {
                project_id: hit.project_id,
                title: hit.title,
                description: hit.description,
                downloads: hit.downloads,
                content_type,
            })
            .collect())
    }

    fn project_title(&self, project_id: &str) -> Result<String> {
        let url = format!("{}/project/{}", self.base_url, project_id);
        let response = match self.get(&url, &[]) {
            Err(McpackError::Network { message }) if message.contains("404") => {
                return Err(McpackError::NotFound {
                    project_id: project_id.to_string(),
                    reason: "project does not exist".to_string(),
                });
            }
            other => other?,
        };

        let project: Project = response.json().map_err(|e| McpackError::Network {
            message: format!("Invalid project response: {}", e),
        })?;

        Ok(project.title)
    }

    fn latest_file(&self, project_id: &str, game_version: Option<&str>) -> Result<FileRef> {
        let url = format!("{}/project/{}/version", self.base_url, project_id);
        let mut query = Vec::new();
        if let Some(version) = game_version {
            query.push(("game_versions", format!("[\"{}\"]", version)));
        }

        let response = match self.get(&url, &query) {
            Err(McpackError::Network { message }) if message.contains("404") => {
                return Err(McpackError::NotFound {
                    project_id: project_id.to_string(),
                    reason: "project does not exist".to_string(),
                });
            }
            other => other?,
        };

        let versions: Vec<Version> = response.json().map_err(|e| McpackError::Network {
            message: format!("Invalid versions response: {}", e),
        })?;

        // Modrinth returns versions newest-first
        let latest = versions.first().ok_or_else(|| McpackError::NotFound {
            project_id: project_id.to_string(),
            reason: match game_version {
                Some(v) => format!("no version supports game version {}", v),
                None => "project has no versions".to_string(),
            },
        })?;

        let file = pick_primary(&latest.files).ok_or_else(|| McpackError::NotFound {
            project_id: project_id.to_string(),
            reason: "latest version has no files".to_string(),
        })?;

        Ok(FileRef {
            url: file.url.clone(),
            file_name: file.filename.clone(),
            version_id: latest.id.clone(),
            version_number: latest.version_number.clone(),
        })
    }

    fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let mut response = self
            .client
            .get(url)
            .send()
            .map_err(|e| McpackError::Download {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(McpackError::Download {
                url: url.to_string(),
                reason: format!("server answered {}", response.status()),
            });
        }

        let mut file = File::create(dest).map_err(|e| McpackError::Download {
            url: url.to_string(),
            reason: format!("cannot create '{}': {}", dest.display(), e),
        })?;

        // Partial downloads are left on disk; a rerun overwrites them
        std::io::copy(&mut response, &mut file).map_err(|e| McpackError::Download {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(())
    }
}
