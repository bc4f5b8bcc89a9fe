use rstest::rstest;

use optback::translate::{translate, TranslationEngine};

// 既知の変換例
#[rstest]
#[case("˙´¬¬ø", "hello")]
#[case("´¨ ∫å†å", "eu bata")]
#[case("", "")]
#[case("abc", "abc")]
#[case("ABC", "abc")]
fn test_known_vectors(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(translate(input), expected);
}

#[test]
fn test_collision_glyphs_resolve_to_their_key() {
    // サーカムフレックスはOption+iとOption+Shift+Iのどちらでも同じグリフに
    // なるが、最終的な出力では物理キーの「i」へ戻ること
    assert_eq!(translate("ˆ"), "i");
    assert_eq!(translate("˜"), "n");
    assert_eq!(translate("¨"), "u");
}

#[test]
fn test_output_length_matches_input() {
    let inputs = ["˙´¬¬ø", "´¨ ∫å†å", "plain text", "", "¡™£¢∞§¶•ªº"];

    for input in inputs {
        let output = translate(input);
        assert_eq!(
            output.chars().count(),
            input.chars().count(),
            "length changed for '{}'",
            input
        );
    }
}

#[test]
fn test_output_is_fully_lowercase() {
    let inputs = ["ABC", "˙´¬¬ø", "ΠŒ‰ Mixed", "Hello ˆWorld"];

    for input in inputs {
        let output = translate(input);
        assert_eq!(output, output.to_lowercase());
    }
}

#[test]
fn test_unmapped_characters_fall_through() {
    // マップ外の文字は小文字化される以外そのまま通ること
    assert_eq!(translate("already plain"), "already plain");
    assert_eq!(translate("line1\nline2\t!"), "line1\nline2\t!");
    assert_eq!(translate("こんにちは"), "こんにちは");
}

#[test]
fn test_engine_is_deterministic() {
    let engine = TranslationEngine::new();
    let input = "˙´¬¬ø ∑ø®¬∂";

    let first = engine.translate(input);
    let second = engine.translate(input);

    assert_eq!(first, second);
    assert_eq!(first, "hello world");
}

#[test]
fn test_shifted_number_row_recovers_symbols() {
    // Option+Shift+数字段はシフト記号へ戻る
    assert_eq!(translate("⁄€‹›ﬁﬂ‡°·‚"), "!@#$%^&*()");
}
