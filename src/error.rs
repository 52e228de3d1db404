//! Error types and handling for mcpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty
//! diagnostics. One variant per failure kind in the taxonomy: network,
//! rate limit, not-found, download, not-installed, corrupt manifest, io.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mcpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum McpackError {
    /// Registry unreachable or non-2xx response
    #[error("Registry request failed: {message}")]
    #[diagnostic(
        code(mcpack::registry::network),
        help("Check your network connection and that api.modrinth.com is reachable")
    )]
    Network { message: String },

    /// Registry answered 429
    #[error("Registry rate limit reached: {message}")]
    #[diagnostic(
        code(mcpack::registry::rate_limited),
        help("Wait a moment before rerunning the command")
    )]
    RateLimited { message: String },

    /// No compatible file exists for the project/version combination
    #[error("No compatible file for project '{project_id}': {reason}")]
    #[diagnostic(
        code(mcpack::registry::not_found),
        help("Check the project id and any --game-version filter")
    )]
    NotFound { project_id: String, reason: String },

    /// Transfer interrupted or disk write failed mid-download
    #[error("Download failed for {url}: {reason}")]
    #[diagnostic(
        code(mcpack::download::failed),
        help("A partial file may remain on disk; rerunning the command overwrites it")
    )]
    Download { url: String, reason: String },

    /// Uninstall/update target absent from the manifest
    #[error("No installed {content_type} named '{name}'")]
    #[diagnostic(
        code(mcpack::manifest::not_installed),
        help("Run 'mcpack list --type <type>' to see tracked names")
    )]
    NotInstalled {
        name: String,
        content_type: String,
    },

    /// Manifest file exists but cannot be parsed
    #[error("Manifest at '{path}' is corrupt: {reason}")]
    #[diagnostic(
        code(mcpack::manifest::corrupt),
        help(
            "Fix the JSON by hand or remove the file; removing it forgets every tracked install"
        )
    )]
    CorruptManifest { path: String, reason: String },

    /// Manifest or content-directory write failure
    #[error("{message}")]
    #[diagnostic(code(mcpack::io))]
    Io { message: String },
}

impl McpackError {
    /// File-system error with the path it concerns
    pub fn io(operation: &str, path: &std::path::Path, err: &std::io::Error) -> Self {
        McpackError::Io {
            message: format!("{} '{}': {}", operation, path.display(), err),
        }
    }
}

pub type Result<T> = std::result::Result<T, McpackError>;
