use egui::{self, Ui};

use crate::config::Settings;

/// 設定画面を描画する
///
/// # 引数
/// * `ui` - EGUIのUIコンテキスト
/// * `settings` - 編集対象の設定
///
/// # 戻り値
/// 設定が変更されたかどうか
pub fn render_settings_view(ui: &mut Ui, settings: &mut Settings) -> bool {
    let mut changed = false;

    ui.heading("Application Settings");
    ui.add_space(10.0);

    // 共有リンクのベースURL
    ui.label("Share base URL:");
    if ui
        .add(egui::TextEdit::singleline(&mut settings.share_base_url).desired_width(f32::INFINITY))
        .lost_focus()
    {
        changed = true;
    }

    ui.add_space(10.0);

    // 起動時の例文
    ui.label("Default example input:");
    if ui
        .add(egui::TextEdit::singleline(&mut settings.default_input).desired_width(f32::INFINITY))
        .lost_focus()
    {
        changed = true;
    }

    ui.add_space(10.0);

    // ダークモード
    if ui.checkbox(&mut settings.dark_mode, "Dark mode").changed() {
        changed = true;
    }

    ui.separator();

    // 保存ボタン
    if ui.button("Save Settings").clicked() {
        changed = true;
    }

    changed
}
