use egui::{self, CentralPanel, RichText, TopBottomPanel, Ui};
use std::sync::{Arc, Mutex};

use crate::config::{ConfigManager, Settings};
use crate::share;
use crate::translate::TranslationEngine;
use super::{constants, settings_view, ThemeMode};

/// ステータス行に表示するメッセージ
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// メッセージ本文
    pub text: String,
    /// エラーとして強調表示するかどうか
    pub is_error: bool,
}

impl StatusMessage {
    /// 通常のメッセージを作成する
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// エラーメッセージを作成する
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// アプリケーションのUI状態
pub struct AppUiState {
    /// 設定マネージャー
    pub config_manager: Arc<Mutex<ConfigManager>>,
    /// アプリケーションの設定
    pub settings: Arc<Mutex<Settings>>,
    /// 変換エンジン
    pub engine: TranslationEngine,
    /// 入力欄のテキスト
    pub input_text: String,
    /// ステータス行のメッセージ
    pub status: Option<StatusMessage>,
    /// テーマモード
    pub theme: ThemeMode,
    /// 選択中のタブ
    pub selected_tab: Tab,
}

/// アプリケーションのタブ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// 変換画面
    Translator,
    /// アプリケーション設定
    Settings,
}

impl AppUiState {
    /// 新しいUI状態を作成する
    ///
    /// # 引数
    /// * `config_manager` - 設定マネージャー
    /// * `settings` - アプリケーションの設定
    /// * `initial_input` - 共有リンクから復元した入力（なければ設定の例文を使う）
    pub fn new(
        config_manager: Arc<Mutex<ConfigManager>>,
        settings: Arc<Mutex<Settings>>,
        initial_input: Option<String>,
    ) -> Self {
        let (default_input, dark_mode) = {
            if let Ok(settings) = settings.lock() {
                (settings.default_input.clone(), settings.dark_mode)
            } else {
                (String::new(), true)
            }
        };

        Self {
            config_manager,
            settings,
            engine: TranslationEngine::new(),
            input_text: initial_input.unwrap_or(default_input),
            status: None,
            theme: ThemeMode::from_dark_flag(dark_mode),
            selected_tab: Tab::Translator,
        }
    }

    /// タブを切り替える
    pub fn switch_tab(&mut self, tab: Tab) {
        self.selected_tab = tab;
    }

    /// テーマを切り替える
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }
}

/// アプリケーションのUI
pub struct AppUi {
    state: AppUiState,
}

impl AppUi {
    /// 新しいアプリケーションUIを作成する
    pub fn new(state: AppUiState) -> Self {
        Self { state }
    }

    /// UIを更新する
    pub fn update(&mut self, ctx: &egui::Context) {
        super::setup_context(ctx, self.state.theme);

        self.render_top_panel(ctx);
        self.render_central_panel(ctx);
        self.render_bottom_panel(ctx);
    }

    /// 上部パネルを描画する
    fn render_top_panel(&mut self, ctx: &egui::Context) {
        TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(constants::APP_TITLE);
                ui.add_space(10.0);

                if ui
                    .selectable_label(self.state.selected_tab == Tab::Translator, "Translator")
                    .clicked()
                {
                    self.state.switch_tab(Tab::Translator);
                }

                if ui
                    .selectable_label(self.state.selected_tab == Tab::Settings, "Settings")
                    .clicked()
                {
                    self.state.switch_tab(Tab::Settings);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let theme_label = match self.state.theme {
                        ThemeMode::Light => "🌙 Dark",
                        ThemeMode::Dark => "☀️ Light",
                    };

                    if ui.button(theme_label).clicked() {
                        self.state.toggle_theme();
                    }
                });
            });
        });
    }

    /// 中央パネルを描画する
    fn render_central_panel(&mut self, ctx: &egui::Context) {
        CentralPanel::default().show(ctx, |ui| match self.state.selected_tab {
            Tab::Translator => self.render_translator_tab(ui),
            Tab::Settings => self.render_settings_tab(ui),
        });
    }

    /// 変換タブを描画する
    fn render_translator_tab(&mut self, ui: &mut Ui) {
        ui.heading("Translate Option-typed text");
        ui.label("Paste a string typed with the Option key held (US ANSI layout).");
        ui.add_space(10.0);

        ui.add(
            egui::TextEdit::singleline(&mut self.state.input_text)
                .hint_text("e.g. ˙´¬¬ø")
                .desired_width(f32::INFINITY),
        );

        ui.add_space(10.0);

        if self.state.input_text.is_empty() {
            // 入力が空の間は変換せずに案内だけを表示する
            ui.label(RichText::new("Enter a string above to see the translation.").italics());
            return;
        }

        let translated = self.state.engine.translate(&self.state.input_text);

        ui.label("Translated:");
        let mut output = translated;
        ui.add(
            egui::TextEdit::multiline(&mut output)
                .desired_rows(4)
                .desired_width(f32::INFINITY)
                .interactive(false),
        );

        ui.add_space(10.0);
        ui.separator();
        self.render_share_section(ui);
    }

    /// 共有リンクの行を描画する
    fn render_share_section(&mut self, ui: &mut Ui) {
        let base_url = {
            if let Ok(settings) = self.state.settings.lock() {
                settings.share_base_url.clone()
            } else {
                return;
            }
        };

        match share::build_share_link(&base_url, &self.state.input_text) {
            Ok(link) => {
                ui.horizontal(|ui| {
                    ui.label("Share link:");
                    ui.monospace(&link);
                });

                if ui.button("Copy Share Link").clicked() {
                    self.copy_to_clipboard(&link);
                }
            }
            Err(e) => {
                // ベースURLが不正でもアプリは止めず、エラーを表示して設定で直してもらう
                log::error!("Failed to build share link from '{}': {}", base_url, e);
                self.state.status = Some(StatusMessage::error(format!(
                    "Invalid share base URL: {}",
                    e
                )));
            }
        }
    }

    /// テキストをクリップボードへコピーする
    fn copy_to_clipboard(&mut self, text: &str) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => match clipboard.set_text(text) {
                Ok(()) => {
                    log::debug!("Share link copied to clipboard: '{}'", text);
                    self.state.status = Some(StatusMessage::info("Share link copied"));
                }
                Err(e) => {
                    log::error!("Failed to set clipboard text: {}", e);
                    self.state.status =
                        Some(StatusMessage::error(format!("Clipboard error: {}", e)));
                }
            },
            Err(e) => {
                log::error!("Failed to access clipboard: {}", e);
                self.state.status = Some(StatusMessage::error(format!("Clipboard error: {}", e)));
            }
        }
    }

    /// 設定タブを描画する
    fn render_settings_tab(&mut self, ui: &mut Ui) {
        // 元の設定値を取得
        let mut settings = {
            if let Ok(settings) = self.state.settings.lock() {
                settings.clone()
            } else {
                return;
            }
        };

        let changed = settings_view::render_settings_view(ui, &mut settings);

        // 変更があれば共有の設定を更新して保存する
        if changed {
            self.state.theme = ThemeMode::from_dark_flag(settings.dark_mode);

            if let Ok(mut shared) = self.state.settings.lock() {
                *shared = settings;
                drop(shared);

                if let Ok(mut config_manager) = self.state.config_manager.lock() {
                    if let Ok(settings) = self.state.settings.lock() {
                        if let Err(e) = config_manager.update_settings(settings.clone()) {
                            log::error!("Failed to save settings: {}", e);
                            self.state.status =
                                Some(StatusMessage::error(format!("Save failed: {}", e)));
                        } else {
                            self.state.status = Some(StatusMessage::info("Settings saved"));
                        }
                    }
                }
            }
        }
    }

    /// 下部パネルを描画する
    fn render_bottom_panel(&mut self, ctx: &egui::Context) {
        TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Status: ");

                match &self.state.status {
                    Some(status) if status.is_error => {
                        ui.colored_label(egui::Color32::RED, &status.text);
                    }
                    Some(status) => {
                        ui.label(&status.text);
                    }
                    None => {
                        ui.label("Ready");
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("OptBack v0.1.0");
                });
            });
        });
    }
}
