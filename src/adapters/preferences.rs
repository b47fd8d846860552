use crate::utils::error::Result;
use crate::utils::validation::validate_hex_color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// 只有 "dark" 代表深色，其他值一律當作淺色
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub accent_color: Option<String>,
}

// 檔案格式沿用網頁 localStorage 的鍵名
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,
    #[serde(
        rename = "accentColor",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    accent_color: Option<String>,
}

/// 以 JSON 檔保存主題與強調色
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 檔案不存在或內容損毀時回傳預設值
    pub fn load(&self) -> Result<Preferences> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Preferences::default())
            }
            Err(e) => return Err(e.into()),
        };

        let stored: StoredPreferences = match serde_json::from_str(&content) {
            Ok(stored) => stored,
            Err(e) => {
                tracing::warn!(
                    "Ignoring unreadable preferences at {}: {}",
                    self.path.display(),
                    e
                );
                StoredPreferences::default()
            }
        };

        Ok(Preferences {
            theme: stored
                .theme
                .as_deref()
                .map(Theme::from_stored)
                .unwrap_or_default(),
            accent_color: stored
                .accent_color
                .filter(|c| validate_hex_color("accentColor", c).is_ok()),
        })
    }

    pub fn save(&self, preferences: &Preferences) -> Result<()> {
        let stored = StoredPreferences {
            theme: Some(preferences.theme.as_str().to_string()),
            accent_color: preferences.accent_color.clone(),
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&stored)?)?;
        Ok(())
    }

    pub fn toggle_theme(&self) -> Result<Theme> {
        let mut preferences = self.load()?;
        preferences.theme = preferences.theme.toggled();
        self.save(&preferences)?;
        Ok(preferences.theme)
    }

    pub fn set_accent(&self, color: &str) -> Result<()> {
        validate_hex_color("accentColor", color)?;
        let mut preferences = self.load()?;
        preferences.accent_color = Some(color.to_string());
        self.save(&preferences)
    }
}
