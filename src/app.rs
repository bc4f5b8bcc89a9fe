use std::sync::{Arc, Mutex};

use crate::config::ConfigManager;
use crate::ui::app_ui::{AppUi, AppUiState};

/// アプリケーション本体
pub struct App {
    /// UIの状態
    ui: AppUi,
}

impl App {
    /// アプリケーションを初期化する
    ///
    /// # 引数
    /// * `restored_input` - 共有リンクから復元した入力（なければNone）
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        restored_input: Option<String>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        // 設定を読み込む
        let config_manager = Arc::new(Mutex::new(ConfigManager::new()?));

        // 設定を取得
        let settings = {
            let config_manager_guard = config_manager.lock().unwrap();
            let settings = config_manager_guard.get_settings().clone();
            Arc::new(Mutex::new(settings))
        };

        // UI状態を作成
        let ui_state = AppUiState::new(
            Arc::clone(&config_manager),
            Arc::clone(&settings),
            restored_input,
        );
        let ui = AppUi::new(ui_state);

        Ok(Self { ui })
    }
}

impl eframe::App for App {
    /// フレームを更新する
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui.update(ctx);
    }
}
