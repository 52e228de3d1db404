//! Common test utilities for mcpack integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway Minecraft root for integration tests
#[allow(dead_code)]
pub struct TestRoot {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the Minecraft root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestRoot {
    /// Create a new empty Minecraft root
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write the manifest file verbatim
    pub fn write_manifest(&self, content: &str) {
        std::fs::write(self.path.join("mcpack.json"), content).expect("Failed to write manifest");
    }

    /// Write a content file under a type directory (e.g. "mods/x.jar")
    pub fn write_file(&self, rel_path: &str, content: &str) {
        let file_path = self.path.join(rel_path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Check if a file exists under the root
    pub fn file_exists(&self, rel_path: &str) -> bool {
        self.path.join(rel_path).exists()
    }

    /// Read the manifest back
    pub fn read_manifest(&self) -> String {
        std::fs::read_to_string(self.path.join("mcpack.json")).expect("Failed to read manifest")
    }
}

/// Build an mcpack command pointed at the given test root
#[allow(dead_code)]
pub fn mcpack_cmd(root: &TestRoot) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("mcpack").expect("mcpack binary");
    // Ignore any developer MCPACK_MINECRAFT_PATH overrides during tests
    cmd.env_remove("MCPACK_MINECRAFT_PATH");
    cmd.arg("--minecraft-path").arg(&root.path);
    cmd
}
