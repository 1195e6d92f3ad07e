use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

// Default configuration
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

#[derive(Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the advisor backend (serves /respond and /api/metadata)
    pub server_url: String,
    pub theme: String,
    /// Composer input history (not the conversation itself)
    pub history: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_BASE_URL.to_string(),
            theme: "dark".to_string(),
            history: Vec::new(),
        }
    }
}

pub fn settings_path() -> Option<PathBuf> {
    if let Some(proj) = ProjectDirs::from("com", "advisor", "advisor-client") {
        let dir = proj.config_dir();
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Failed to create config dir: {}", e);
            return None;
        }
        return Some(dir.join("settings.json"));
    }
    None
}

pub fn load_settings() -> Option<Settings> {
    let path = settings_path()?;
    let content = fs::read_to_string(path).ok()?;
    serde_json::from_str(&content).ok()
}

pub fn save_settings(settings: &Settings) -> std::io::Result<()> {
    if let Some(path) = settings_path() {
        let mut file = fs::File::create(path)?;
        let data = serde_json::to_string_pretty(settings)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        file.write_all(data.as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.server_url, DEFAULT_BASE_URL);
        assert_eq!(settings.theme, "dark");
        assert!(settings.history.is_empty());
    }

    #[test]
    fn test_settings_round_trip_json() {
        let settings = Settings {
            server_url: "http://advisor.example.com".into(),
            theme: "light".into(),
            history: vec!["where should I open a café?".into()],
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.server_url, settings.server_url);
        assert_eq!(back.theme, "light");
        assert_eq!(back.history.len(), 1);
    }
}
