//! Player profile persistence.
//!
//! Stores the score, streak, and display preferences in
//! `~/.wortschatz/profile.json`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Error type for profile operations.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Could not determine home directory")]
    NoHomeDir,
}

/// Persistent player state.
///
/// Every field defaults independently, so a partially written or outdated
/// file degrades gracefully instead of being rejected.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Profile {
    /// Total quiz score.
    #[serde(default)]
    pub score: u32,
    /// Consecutive correct quiz answers.
    #[serde(default)]
    pub streak: u32,
    /// Whether English is shown on the flashcard front.
    #[serde(default)]
    pub english_front: bool,
    /// The selected theme ID.
    #[serde(default = "default_theme_id")]
    pub theme_id: String,
}

fn default_theme_id() -> String {
    "default".to_string()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            score: 0,
            streak: 0,
            english_front: false,
            theme_id: default_theme_id(),
        }
    }
}

/// Get the profile file path (`~/.wortschatz/profile.json`).
pub fn profile_path() -> Result<PathBuf, ProfileError> {
    let home = dirs::home_dir().ok_or(ProfileError::NoHomeDir)?;
    Ok(home.join(".wortschatz").join("profile.json"))
}

fn parse_profile(contents: &str) -> Profile {
    serde_json::from_str(contents).unwrap_or_default()
}

/// Load the profile from disk.
///
/// Returns the default profile if the file doesn't exist or can't be read.
pub fn load_profile() -> Profile {
    let path = match profile_path() {
        Ok(p) => p,
        Err(_) => return Profile::default(),
    };

    if !path.exists() {
        return Profile::default();
    }

    let contents = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return Profile::default(),
    };

    parse_profile(&contents)
}

/// Save the profile to disk.
pub fn save_profile(profile: &Profile) -> Result<(), ProfileError> {
    let path = profile_path()?;

    // Ensure the directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(profile)?;
    std::fs::write(&path, json)?;

    Ok(())
}
