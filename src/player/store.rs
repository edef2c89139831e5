//! Profile persistence.
//!
//! Persistence is a single repository trait the caller injects wherever a
//! profile needs saving. Engine functions never import this module.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::entities::{Character, Clan};
use crate::player::PlayerState;
use crate::staking::StakedNft;

const PROFILE_VERSION: u32 = 1;
const PROFILE_FILE: &str = "profile.json";

/// Everything persisted for one player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileData {
    pub version: u32,
    pub player: PlayerState,
    pub characters: Vec<Character>,
    pub clans: Vec<Clan>,
    pub staked_nfts: Vec<StakedNft>,
}

impl ProfileData {
    /// A fresh profile with no entities.
    pub fn new() -> Self {
        Self {
            version: PROFILE_VERSION,
            player: PlayerState::new(),
            characters: Vec::new(),
            clans: Vec::new(),
            staked_nfts: Vec::new(),
        }
    }
}

impl Default for ProfileData {
    fn default() -> Self {
        Self::new()
    }
}

/// Repository interface for profile persistence.
pub trait ProfileStore {
    fn load(&self) -> io::Result<ProfileData>;
    fn save(&self, profile: &ProfileData) -> io::Result<()>;
    /// Removes the stored profile. Succeeds when no profile exists.
    fn delete(&self) -> io::Result<()>;
    /// True if a profile exists.
    fn exists(&self) -> bool;
}

/// JSON-file store under the platform config directory.
pub struct JsonProfileStore {
    profile_path: PathBuf,
}

impl JsonProfileStore {
    /// Creates the store at the platform-appropriate location.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "flingers-hub").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            profile_path: config_dir.join(PROFILE_FILE),
        })
    }

    /// Creates a store rooted at an explicit directory (used by tests).
    pub fn with_dir(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            profile_path: dir.join(PROFILE_FILE),
        })
    }
}

impl ProfileStore for JsonProfileStore {
    fn load(&self) -> io::Result<ProfileData> {
        let json = fs::read_to_string(&self.profile_path)?;
        let profile: ProfileData = serde_json::from_str(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if profile.version != PROFILE_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Unsupported profile version: expected {}, got {}",
                    PROFILE_VERSION, profile.version
                ),
            ));
        }

        Ok(profile)
    }

    fn save(&self, profile: &ProfileData) -> io::Result<()> {
        let json = serde_json::to_string_pretty(profile)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.profile_path, json)
    }

    fn delete(&self) -> io::Result<()> {
        match fs::remove_file(&self.profile_path) {
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            other => other,
        }
    }

    fn exists(&self) -> bool {
        self.profile_path.exists()
    }
}
