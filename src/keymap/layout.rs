//! US ANSI配列のMacキーボードが生成するOptionレイヤーのグリフ定義

/// Option単独のグリフと無修飾キー文字の対応表
///
/// Option+E・H・Kのデッドキー（アキュート・上ドット・上リング）は
/// Option+Shift側と衝突しないため、`DEAD_KEY_FALLBACKS`で扱う。
/// Option+I・N・Uのデッドキーは Option+Shift 側と同一グリフになるので、
/// 上書きされる前提でここに含める。
pub const OPTION_GLYPHS: &[(char, char)] = &[
    // 英字
    ('å', 'a'),
    ('∫', 'b'),
    ('ç', 'c'),
    ('∂', 'd'),
    ('ƒ', 'f'),
    ('©', 'g'),
    ('ˆ', 'i'), // サーカムフレックス（デッドキー）
    ('∆', 'j'),
    ('¬', 'l'),
    ('µ', 'm'),
    ('˜', 'n'), // チルダ（デッドキー）
    ('ø', 'o'),
    ('π', 'p'),
    ('œ', 'q'),
    ('®', 'r'),
    ('ß', 's'),
    ('†', 't'),
    ('¨', 'u'), // ダイエレシス（デッドキー）
    ('√', 'v'),
    ('∑', 'w'),
    ('≈', 'x'),
    ('¥', 'y'),
    ('Ω', 'z'),
    // 数字
    ('¡', '1'),
    ('™', '2'),
    ('£', '3'),
    ('¢', '4'),
    ('∞', '5'),
    ('§', '6'),
    ('¶', '7'),
    ('•', '8'),
    ('ª', '9'),
    ('º', '0'),
    // 記号
    ('`', '`'), // グレイヴ（デッドキーだがグリフは変化しない）
    ('–', '-'),
    ('≠', '='),
    ('‘', '['),
    ('’', ']'),
    ('«', '\\'),
    ('…', ';'),
    ('æ', '\''),
    ('≤', ','),
    ('≥', '.'),
    ('÷', '/'),
];

/// Option+Shiftのグリフとシフト状態のキー文字の対応表
///
/// 格納する値はシフト側の文字（大文字・シフト記号）。どの物理キーから
/// 生成されたかを保持するためで、最終的な小文字化は変換側で行う。
pub const OPTION_SHIFT_GLYPHS: &[(char, char)] = &[
    // 英字
    ('Å', 'A'),
    ('Î', 'B'),
    ('Ç', 'C'),
    ('Ï', 'D'),
    ('¯', 'E'), // マクロン（デッドキー）
    ('ı', 'F'),
    ('˝', 'G'), // ダブルアキュート（デッドキー）
    ('Ó', 'H'),
    ('ˆ', 'I'), // サーカムフレックス（Option+iと同一グリフ）
    ('Ô', 'J'),
    ('\u{f8ff}', 'K'), // Appleロゴ
    ('Ò', 'L'),
    ('Ú', 'M'),
    ('˜', 'N'), // チルダ（Option+nと同一グリフ）
    ('Ø', 'O'),
    ('Π', 'P'),
    ('Œ', 'Q'),
    ('‰', 'R'),
    ('Í', 'S'),
    ('ˇ', 'T'), // カロン（デッドキー）
    ('¨', 'U'), // ダイエレシス（Option+uと同一グリフ）
    ('◊', 'V'),
    ('„', 'W'),
    ('˛', 'X'), // オゴネク（デッドキー）
    ('Á', 'Y'),
    ('¸', 'Z'), // セディーユ（デッドキー）
    // 数字段
    ('⁄', '!'),
    ('€', '@'),
    ('‹', '#'),
    ('›', '$'),
    ('ﬁ', '%'),
    ('ﬂ', '^'),
    ('‡', '&'),
    ('°', '*'),
    ('·', '('),
    ('‚', ')'),
    // 記号
    // Option+Shift+ピリオドもオゴネク「˛」を生成するが、上のXの定義が
    // 先に占有するため「>」へ戻す経路は存在しない（実機の配列どおり）。
    ('~', '~'), // チルダキー（グリフは変化しない）
    ('—', '_'),
    ('±', '+'),
    ('“', '{'),
    ('”', '}'),
    ('»', '|'),
    ('Æ', '"'),
    ('˘', '<'), // ブレーヴェ（デッドキー）
    ('¿', '?'),
];

/// Option+Shift側に占有されなかったデッドキーのフォールバック表
///
/// 既存のエントリを上書きしない前提で最後に追加する。
pub const DEAD_KEY_FALLBACKS: &[(char, char)] = &[
    ('´', 'e'), // アキュート
    ('˙', 'h'), // 上ドット
    ('˚', 'k'), // 上リング
];
