use serde::{Deserialize, Serialize};

/// アプリケーションの設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// 起動時に入力欄へ設定する例文
    pub default_input: String,
    /// 共有リンクのベースURL
    pub share_base_url: String,
    /// ダークモードを使うかどうか
    pub dark_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Option修飾で「hello」と打った例文
            default_input: "˙´¬¬ø".to_string(),
            share_base_url: "https://optback.example.com/".to_string(),
            dark_mode: true,
        }
    }
}
