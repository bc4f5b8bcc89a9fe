pub mod layout;

use std::collections::HashMap;

use once_cell::sync::Lazy;

use layout::{DEAD_KEY_FALLBACKS, OPTION_GLYPHS, OPTION_SHIFT_GLYPHS};

/// プロセス全体で共有する変換マップ
static CHARACTER_MAP: Lazy<CharacterMap> = Lazy::new(CharacterMap::new);

/// Optionキー由来のグリフから無修飾キーの文字への変換マップ
///
/// 一度構築した後は変更されないため、ロックなしで共有できる。
#[derive(Debug)]
pub struct CharacterMap {
    entries: HashMap<char, char>,
}

impl CharacterMap {
    /// 変換マップを構築する
    ///
    /// レイヤーをこの順序で適用する：
    /// 1. Option単独のグリフ
    /// 2. Option+Shiftのグリフ（グリフが衝突した場合はこちらで上書きする）
    /// 3. 残りのデッドキーのフォールバック（既存のエントリは上書きしない）
    ///
    /// サーカムフレックス・チルダ・ダイエレシスはOption+文字とOption+Shift+文字の
    /// どちらでも同じグリフになるため、2のレイヤーがShift側の解釈で上書きする。
    pub fn new() -> Self {
        let mut entries = HashMap::new();

        for &(glyph, base) in OPTION_GLYPHS {
            entries.insert(glyph, base);
        }

        for &(glyph, base) in OPTION_SHIFT_GLYPHS {
            if let Some(previous) = entries.insert(glyph, base) {
                log::debug!(
                    "Glyph '{}' remapped from '{}' to '{}' by the shift layer",
                    glyph,
                    previous,
                    base
                );
            }
        }

        for &(glyph, base) in DEAD_KEY_FALLBACKS {
            entries.entry(glyph).or_insert(base);
        }

        log::debug!("Character map built with {} entries", entries.len());

        Self { entries }
    }

    /// グリフに対応する無修飾キーの文字を検索する
    ///
    /// # 引数
    /// * `glyph` - 検索するグリフ
    ///
    /// # 戻り値
    /// マップに存在すれば対応するキー文字、存在しなければNone。
    /// 存在しないことはエラーではなく通常の結果として扱う。
    pub fn lookup(&self, glyph: char) -> Option<char> {
        self.entries.get(&glyph).copied()
    }

    /// マップのエントリをすべて列挙する
    pub fn iter(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.entries.iter().map(|(&glyph, &base)| (glyph, base))
    }

    /// エントリ数を取得する
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// マップが空かどうか
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CharacterMap {
    fn default() -> Self {
        Self::new()
    }
}

/// プロセス共有の変換マップを取得する
pub fn character_map() -> &'static CharacterMap {
    &CHARACTER_MAP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_plain_option_glyphs() {
        let map = CharacterMap::new();

        assert_eq!(map.lookup('å'), Some('a'));
        assert_eq!(map.lookup('¬'), Some('l'));
        assert_eq!(map.lookup('º'), Some('0'));
        assert_eq!(map.lookup('…'), Some(';'));
    }

    #[test]
    fn test_shift_layer_wins_collisions() {
        let map = CharacterMap::new();

        // 衝突する3つのデッドキーはShift側の解釈になる
        assert_eq!(map.lookup('ˆ'), Some('I'));
        assert_eq!(map.lookup('˜'), Some('N'));
        assert_eq!(map.lookup('¨'), Some('U'));
    }

    #[test]
    fn test_dead_key_fallbacks_present() {
        let map = CharacterMap::new();

        assert_eq!(map.lookup('´'), Some('e'));
        assert_eq!(map.lookup('˙'), Some('h'));
        assert_eq!(map.lookup('˚'), Some('k'));
    }

    #[test]
    fn test_degenerate_entries_map_to_themselves() {
        let map = CharacterMap::new();

        assert_eq!(map.lookup('`'), Some('`'));
        assert_eq!(map.lookup('~'), Some('~'));
    }

    #[test]
    fn test_unmapped_glyph_is_absent() {
        let map = CharacterMap::new();

        assert_eq!(map.lookup('a'), None);
        assert_eq!(map.lookup(' '), None);
        assert_eq!(map.lookup('あ'), None);
    }

    #[test]
    fn test_shared_map_is_stable() {
        // シングルトンは構築済みマップと同じ内容を返す
        let shared = character_map();
        let fresh = CharacterMap::new();

        assert_eq!(shared.len(), fresh.len());
        for (glyph, base) in fresh.iter() {
            assert_eq!(shared.lookup(glyph), Some(base));
        }
    }
}
