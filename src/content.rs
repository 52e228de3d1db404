//! Content type definitions
//!
//! A closed enum over the three kinds of content mcpack manages. Each
//! variant maps to a subdirectory under the Minecraft root and to a
//! Modrinth `project_type` facet value, validated once at the CLI
//! boundary via `ValueEnum`.

use clap::ValueEnum;
use std::fmt;

/// Kind of Minecraft content, determines the target subdirectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum ContentType {
    /// Game mod (mods/)
    #[value(name = "mod")]
    Mod,
    /// Resource pack (resourcepacks/)
    #[value(name = "resourcepack")]
    ResourcePack,
    /// Shader pack (shaderpacks/)
    #[value(name = "shader")]
    ShaderPack,
}

impl ContentType {
    /// All content types, in manifest order
    pub const ALL: [ContentType; 3] = [
        ContentType::Mod,
        ContentType::ResourcePack,
        ContentType::ShaderPack,
    ];

    /// Subdirectory name under the Minecraft root
    pub fn dir_name(self) -> &'static str {
        match self {
            ContentType::Mod => "mods",
            ContentType::ResourcePack => "resourcepacks",
            ContentType::ShaderPack => "shaderpacks",
        }
    }

    /// Modrinth `project_type` facet value
    pub fn facet_value(self) -> &'static str {
        match self {
            ContentType::Mod => "mod",
            ContentType::ResourcePack => "resourcepack",
            ContentType::ShaderPack => "shader",
        }
    }

    /// Human-facing label for messages
    pub fn label(self) -> &'static str {
        match self {
            ContentType::Mod => "mod",
            ContentType::ResourcePack => "resource pack",
            ContentType::ShaderPack => "shader pack",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
