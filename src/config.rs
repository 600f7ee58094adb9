use crate::error::{ProfilerError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// APIキーを読む環境変数
pub const API_KEY_ENV: &str = "GOOGLE_AI_API_KEY";

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ProfilerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("character-profiler").join("config.json"))
    }

    /// APIキーを取得（環境変数を優先）
    ///
    /// 未設定でもエラーにしない。空のキーのまま送信され、プロバイダ側で拒否される。
    pub fn api_key(&self) -> String {
        Self::resolve_api_key(std::env::var(API_KEY_ENV).ok(), self.api_key.as_deref())
    }

    fn resolve_api_key(env_value: Option<String>, stored: Option<&str>) -> String {
        env_value
            .filter(|key| !key.trim().is_empty())
            .or_else(|| stored.map(str::to_string))
            .unwrap_or_default()
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model() {
        let config = Config::default();
        assert_eq!(config.model, "gemini-1.5-flash");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_env_key_takes_precedence() {
        let key = Config::resolve_api_key(Some("env-key".into()), Some("stored-key"));
        assert_eq!(key, "env-key");
    }

    #[test]
    fn test_blank_env_key_falls_back_to_stored() {
        let key = Config::resolve_api_key(Some("  ".into()), Some("stored-key"));
        assert_eq!(key, "stored-key");
    }

    #[test]
    fn test_missing_key_is_empty_not_error() {
        assert_eq!(Config::resolve_api_key(None, None), "");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            api_key: Some("abc".into()),
            model: "gemini-2.0-flash".into(),
        };
        config.save_to(&path).expect("保存失敗");

        let loaded = Config::load_from(&path).expect("読み込み失敗");
        assert_eq!(loaded.api_key.as_deref(), Some("abc"));
        assert_eq!(loaded.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_load_partial_file_uses_default_model() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"api_key": "k"}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.model, DEFAULT_MODEL);
    }
}
