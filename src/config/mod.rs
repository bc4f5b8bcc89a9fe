pub mod settings;

use std::path::PathBuf;

pub use settings::Settings;

/// アプリケーションの設定を管理する構造体
#[derive(Debug, Clone)]
pub struct ConfigManager {
    settings: Settings,
    config_path: PathBuf,
}

impl ConfigManager {
    /// ユーザーの設定ディレクトリを使う設定マネージャーを作成する
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config_dir = Self::get_config_dir()?;
        Self::from_path(config_dir.join("settings.json"))
    }

    /// 指定したパスの設定ファイルを使う設定マネージャーを作成する
    ///
    /// # 引数
    /// * `config_path` - 設定ファイルのパス
    pub fn from_path(config_path: PathBuf) -> Result<Self, Box<dyn std::error::Error>> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let settings = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let loaded: Settings = serde_json::from_str(&content)?;
            log::debug!("Settings loaded from {:?}", config_path);
            loaded
        } else {
            // 初回起動時はデフォルト設定を書き出す
            let default_settings = Settings::default();
            let serialized = serde_json::to_string_pretty(&default_settings)?;
            std::fs::write(&config_path, serialized)?;
            log::info!("Default settings written to {:?}", config_path);
            default_settings
        };

        Ok(Self {
            settings,
            config_path,
        })
    }

    /// 設定を取得する
    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    /// 設定を変更して保存する
    pub fn update_settings(&mut self, settings: Settings) -> Result<(), Box<dyn std::error::Error>> {
        self.settings = settings;
        self.save()
    }

    /// 設定をファイルに保存する
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let serialized = serde_json::to_string_pretty(&self.settings)?;

        if let Some(parent) = self.config_path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        match std::fs::write(&self.config_path, serialized) {
            Ok(()) => {
                log::debug!("Settings saved successfully to {:?}", self.config_path);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to save settings to {:?}: {}", self.config_path, e);
                Err(Box::new(e))
            }
        }
    }

    /// 設定ディレクトリのパスを取得する
    fn get_config_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| "Could not find config directory".to_string())?
            .join("optback");
        Ok(config_dir)
    }
}
