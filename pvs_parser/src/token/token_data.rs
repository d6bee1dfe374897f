use super::TokenKind;
use crate::source::Range;
use std::fmt::{self, Debug, Formatter};

/// 字句データ
#[derive(Clone)]
pub struct TokenData {
    kind: TokenKind,
    text: String,
    range: Range,

    /// ソースコードの先頭から、この字句の手前までの文字数
    start_index: usize,
}

impl TokenData {
    pub(crate) fn new(kind: TokenKind, text: String, range: Range, start_index: usize) -> Self {
        TokenData {
            kind,
            text,
            range,
            start_index,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    /// 字句の最後の文字の位置。(終端を含む。)
    ///
    /// 空の字句 (EOF) では `start_index - 1` になる。
    pub fn stop_index(&self) -> isize {
        self.start_index as isize + self.text.chars().count() as isize - 1
    }

    /// エラーメッセージに埋め込むための表記
    pub(crate) fn display_text(&self) -> &str {
        match self.kind {
            TokenKind::Eof => "<EOF>",
            _ => &self.text,
        }
    }
}

impl Debug for TokenData {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.kind() {
            TokenKind::Space
            | TokenKind::Comment
            | TokenKind::Other
            | TokenKind::Number
            | TokenKind::Str
            | TokenKind::Ident => write!(f, "{:?}", self.text()),
            _ => write!(f, "{:?}", self.kind()),
        }
    }
}
