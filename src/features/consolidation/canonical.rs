use once_cell::sync::Lazy;
use regex::Regex;

/// 連続する空白文字
static WHITESPACE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("正規表現のコンパイルに失敗しました"));

/// 単語構成文字（アンダースコアを含む）以外の文字
static NON_WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w]").expect("正規表現のコンパイルに失敗しました"));

/// 連続するアンダースコア
static UNDERSCORE_RUN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_+").expect("正規表現のコンパイルに失敗しました"));

/// サービス名を正規化して安定したキーに変換する
///
/// # 引数
/// * `name` - サービス名（自由テキスト）
///
/// # 戻り値
/// 正規化されたキー文字列
///
/// # 処理内容
/// 1. 小文字化
/// 2. 連続する空白を1つのアンダースコアに置換
/// 3. 単語構成文字とアンダースコア以外を除去
/// 4. 連続するアンダースコアを1つに圧縮
/// 5. 先頭・末尾のアンダースコアを除去
///
/// # 特性
/// 冪等: `canonicalize(canonicalize(x)) == canonicalize(x)`
/// このキーは競合サービスマップの検索と類似度計算の両方に使用される。
pub fn canonicalize(name: &str) -> String {
    let lowered = name.to_lowercase();
    let underscored = WHITESPACE_PATTERN.replace_all(&lowered, "_");
    let stripped = NON_WORD_PATTERN.replace_all(&underscored, "");
    let collapsed = UNDERSCORE_RUN_PATTERN.replace_all(&stripped, "_");
    collapsed.trim_matches('_').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_canonicalize_known_names() {
        assert_eq!(canonicalize("Netflix"), "netflix");
        assert_eq!(canonicalize("Prime Video"), "prime_video");
        assert_eq!(canonicalize("Disney+ Plus"), "disney_plus");
        assert_eq!(canonicalize("HBO Max"), "hbo_max");
        assert_eq!(canonicalize("Apple TV+"), "apple_tv");
    }

    #[test]
    fn test_canonicalize_is_case_insensitive() {
        assert_eq!(canonicalize("Netflix "), canonicalize("netflix"));
        assert_eq!(canonicalize("NETFLIX"), "netflix");
    }

    #[test]
    fn test_canonicalize_collapses_whitespace_and_symbols() {
        assert_eq!(canonicalize("  YouTube    Premium  "), "youtube_premium");
        assert_eq!(canonicalize("U-NEXT"), "unext");
        assert_eq!(canonicalize("Micro$oft 365"), "microoft_365");
    }

    #[test]
    fn test_canonicalize_keeps_japanese_names() {
        // 日本語のサービス名も単語構成文字としてそのまま残る
        assert_eq!(canonicalize("ネットフリックス"), "ネットフリックス");
        assert_eq!(canonicalize("楽天 マガジン"), "楽天_マガジン");
    }

    #[test]
    fn test_canonicalize_empty_and_symbol_only() {
        assert_eq!(canonicalize(""), "");
        assert_eq!(canonicalize("+++"), "");
        assert_eq!(canonicalize("   "), "");
    }

    #[quickcheck]
    fn prop_canonicalize_is_idempotent(name: String) -> bool {
        let once = canonicalize(&name);
        canonicalize(&once) == once
    }

    #[quickcheck]
    fn prop_canonicalize_output_is_clean(name: String) -> bool {
        let result = canonicalize(&name);
        !result.starts_with('_')
            && !result.ends_with('_')
            && !result.contains("__")
            && result.chars().all(|c| !c.is_whitespace())
    }
}
