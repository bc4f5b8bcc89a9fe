use crate::keymap::{character_map, CharacterMap};

/// Option修飾された文字列を標準のキー文字へ戻す変換エンジン
///
/// マップは構築済みの共有データを参照するだけなので、エンジン自体に
/// 状態はなく、何度呼んでも同じ入力には同じ出力を返す。
#[derive(Debug)]
pub struct TranslationEngine {
    map: &'static CharacterMap,
}

impl TranslationEngine {
    /// 共有の変換マップを使うエンジンを作成する
    pub fn new() -> Self {
        Self {
            map: character_map(),
        }
    }

    /// 文字列を変換する
    ///
    /// # 引数
    /// * `input` - Option修飾文字を含みうる文字列
    ///
    /// # 戻り値
    /// 各文字をマップで置換し、全体を小文字化した文字列。
    /// マップにない文字はそのまま通す。この関数は失敗しない。
    pub fn translate(&self, input: &str) -> String {
        let substituted: String = input
            .chars()
            .map(|c| self.map.lookup(c).unwrap_or(c))
            .collect();

        // Option+Shift由来のエントリは物理キーを示す大文字を指すため、
        // 最後に全体を小文字へ畳んでシフト状態の区別を消す
        let result = substituted.to_lowercase();

        log::debug!("Translated '{}' to '{}'", input, result);

        result
    }
}

impl Default for TranslationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 共有マップで文字列を変換する
pub fn translate(input: &str) -> String {
    TranslationEngine::new().translate(input)
}
