//! ANSI エスケープによる配色
//!
//! URL は下線付きパレット 5 色から選択、エラー詳細は赤。
//! 端末でない場合・NO_COLOR・--no-color では素のテキストを返す。

use std::ffi::OsString;
use std::io::IsTerminal;

/// URL 用パレット（SGR パラメータ、下線付き）: cyan, green, magenta, cyan, blue
const URL_PALETTE: [&str; 5] = ["4;36", "4;32", "4;35", "4;36", "4;34"];
const ERROR_SGR: &str = "31";
const RESET: &str = "\x1b[0m";

/// 配色の有効/無効を保持するスタイラ
#[derive(Debug, Clone, Copy)]
pub struct AnsiStyle {
    enabled: bool,
}

impl AnsiStyle {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// パレットの色数（ColorPicker の n に渡す）
    pub fn palette_len(&self) -> usize {
        URL_PALETTE.len()
    }

    /// URL をパレット idx 番の色 + 下線で装飾する
    pub fn url(&self, idx: usize, s: &str) -> String {
        if !self.enabled {
            return s.to_string();
        }
        format!("\x1b[{}m{}{}", URL_PALETTE[idx % URL_PALETTE.len()], s, RESET)
    }

    /// エラー詳細を赤で装飾する
    pub fn error(&self, s: &str) -> String {
        if !self.enabled {
            return s.to_string();
        }
        format!("\x1b[{}m{}{}", ERROR_SGR, s, RESET)
    }
}

/// NO_COLOR は空でない値が設定されているときだけ効く
fn env_disables_color(value: Option<OsString>) -> bool {
    value.map_or(false, |v| !v.is_empty())
}

/// stdout が端末で、かつ NO_COLOR（空でない値）も --no-color も無いときだけ配色する
pub fn color_enabled(no_color_flag: bool) -> bool {
    if no_color_flag || env_disables_color(std::env::var_os("NO_COLOR")) {
        return false;
    }
    std::io::stdout().is_terminal()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_wraps_with_underline_sgr() {
        let style = AnsiStyle::new(true);
        assert_eq!(style.url(0, "http://a"), "\x1b[4;36mhttp://a\x1b[0m");
        assert_eq!(style.url(1, "http://a"), "\x1b[4;32mhttp://a\x1b[0m");
    }

    #[test]
    fn test_url_index_wraps_modulo_palette() {
        let style = AnsiStyle::new(true);
        assert_eq!(style.url(5, "x"), style.url(0, "x"));
        assert_eq!(style.url(7, "x"), style.url(2, "x"));
    }

    #[test]
    fn test_error_is_red() {
        let style = AnsiStyle::new(true);
        assert_eq!(style.error("boom"), "\x1b[31mboom\x1b[0m");
    }

    #[test]
    fn test_disabled_returns_plain_text() {
        let style = AnsiStyle::new(false);
        assert_eq!(style.url(3, "http://a"), "http://a");
        assert_eq!(style.error("boom"), "boom");
    }

    #[test]
    fn test_palette_has_five_entries() {
        assert_eq!(AnsiStyle::new(true).palette_len(), 5);
    }

    #[test]
    fn test_no_color_env_needs_a_non_empty_value() {
        assert!(!env_disables_color(None));
        assert!(!env_disables_color(Some(OsString::new())));
        assert!(env_disables_color(Some(OsString::from("1"))));
    }
}
