use url::Url;

/// 共有リンクのクエリパラメータ名
const TEXT_PARAM: &str = "text";

/// 「?text=...」だけが渡された場合の解釈に使うダミーのベースURL
const DUMMY_BASE: &str = "http://localhost/";

/// 入力テキストから共有リンクを組み立てる
///
/// # 引数
/// * `base_url` - リンクのベースURL
/// * `text` - 共有する入力テキスト
///
/// # 戻り値
/// `<base-url>/?text=<URLエンコード済み入力>` 形式のリンク
pub fn build_share_link(base_url: &str, text: &str) -> Result<String, url::ParseError> {
    let link = Url::parse_with_params(base_url, &[(TEXT_PARAM, text)])?;
    Ok(link.to_string())
}

/// 共有リンクからtextパラメータの値を取り出す
///
/// 完全なURLのほか、「?text=...」だけのクエリ文字列も受け付ける。
///
/// # 引数
/// * `link` - 共有リンクまたはクエリ文字列
///
/// # 戻り値
/// デコード済みのtextパラメータの値。解析できない場合や
/// パラメータが存在しない場合はNone。
pub fn restore_from_link(link: &str) -> Option<String> {
    let parsed = match Url::parse(link) {
        Ok(parsed) => parsed,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let base = Url::parse(DUMMY_BASE).ok()?;
            base.join(link).ok()?
        }
        Err(e) => {
            log::warn!("Failed to parse share link '{}': {}", link, e);
            return None;
        }
    };

    parsed
        .query_pairs()
        .find(|(key, _)| key == TEXT_PARAM)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_share_link() {
        let link = build_share_link("https://example.com/", "˙´¬¬ø").unwrap();
        assert!(link.starts_with("https://example.com/?text="));
    }

    #[test]
    fn test_round_trip_preserves_input() {
        let inputs = ["˙´¬¬ø", "´¨ ∫å†å", "plain text", "a&b=c?d"];
        for input in inputs {
            let link = build_share_link("https://example.com/", input).unwrap();
            assert_eq!(restore_from_link(&link).as_deref(), Some(input));
        }
    }

    #[test]
    fn test_restore_from_bare_query() {
        assert_eq!(
            restore_from_link("?text=hello%20world").as_deref(),
            Some("hello world")
        );
    }

    #[test]
    fn test_restore_without_text_param() {
        assert_eq!(restore_from_link("https://example.com/?other=1"), None);
        assert_eq!(restore_from_link("not a url"), None);
    }
}
