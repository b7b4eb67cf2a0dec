use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::settings::{GLOBAL_FILE, OVERRIDE_FILE};

/// A located profile directory and which store files it holds
///
/// A profile without either file is still valid; the stores are created on
/// first write.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileInfo {
    pub path: PathBuf,
    pub has_global_store: bool,
    pub has_override_store: bool,
}

impl ProfileInfo {
    fn for_dir(path: PathBuf) -> Self {
        let has_global_store = path.join(GLOBAL_FILE).is_file();
        let has_override_store = path.join(OVERRIDE_FILE).is_file();

        ProfileInfo {
            path,
            has_global_store,
            has_override_store,
        }
    }
}

/// Locate the Otter profile directory
///
/// Priority:
/// 1. Manual path provided via CLI or parameter
/// 2. OTTER_PROFILE environment variable
/// 3. Standard locations (`~/.config/otter`, `~/.config/Otter`, `~/.otter`)
///
/// An explicitly given path (parameter or environment) must exist and be a
/// directory; auto-detection returns the first standard location that does.
pub fn find_profile_dir(manual_path: Option<&Path>) -> Result<ProfileInfo> {
    if let Some(path) = manual_path {
        return validate_profile_dir(path);
    }

    if let Ok(env_path) = std::env::var("OTTER_PROFILE") {
        return validate_profile_dir(Path::new(&env_path));
    }

    let candidates = candidate_dirs();

    match candidates.iter().find(|candidate| candidate.is_dir()) {
        Some(found) => Ok(ProfileInfo::for_dir(found.clone())),
        None => Err(Error::ProfileNotFound {
            searched: candidates,
        }),
    }
}

fn validate_profile_dir(path: &Path) -> Result<ProfileInfo> {
    if !path.is_dir() {
        return Err(Error::InvalidProfileDirectory(path.to_path_buf()));
    }

    Ok(ProfileInfo::for_dir(path.to_path_buf()))
}

fn candidate_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(config) = dirs::config_dir() {
        candidates.push(config.join("otter"));
        candidates.push(config.join("Otter"));
    }
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".otter"));
    }

    candidates
}
