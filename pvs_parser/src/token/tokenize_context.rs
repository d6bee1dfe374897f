use super::{TokenData, TokenKind};
use crate::source::{Pos, Range};
use std::cmp::min;

/// Tokenization context. 字句解析の文脈
pub(crate) struct TokenizeContext<'a> {
    source_code: &'a str,
    current_index: usize,
    last_index: usize,
    /// 直前の字句の終端までの文字数
    last_char_index: usize,
    last_pos: Pos,
    tokens: Vec<TokenData>,
}

impl<'a> TokenizeContext<'a> {
    pub(crate) fn new(source_code: &'a str) -> Self {
        TokenizeContext {
            source_code,
            current_index: 0,
            last_index: 0,
            last_char_index: 0,
            last_pos: Pos::START,
            tokens: vec![],
        }
    }

    fn assert_invariants(&self) {
        assert!(self.last_index <= self.current_index);
        assert!(self.current_index <= self.source_code.len());
    }

    pub(crate) fn at_eof(&self) -> bool {
        self.current_index >= self.source_code.len()
    }

    pub(crate) fn nth(&self, index: usize) -> char {
        self.source_code[min(self.current_index, self.source_code.len())..]
            .chars()
            .nth(index)
            .unwrap_or('\0')
    }

    pub(crate) fn next(&self) -> char {
        self.nth(0)
    }

    pub(crate) fn current_text(&self) -> &str {
        &self.source_code[self.last_index..self.current_index]
    }

    fn bump_many(&mut self, len: usize) {
        assert!(self.current_index + len <= self.source_code.len());

        self.current_index += len;

        self.assert_invariants();
    }

    pub(crate) fn bump(&mut self) {
        self.bump_many(self.next().len_utf8());
    }

    pub(crate) fn is_followed_by(&self, text: &str) -> bool {
        self.source_code[self.current_index..].starts_with(text)
    }

    pub(crate) fn eat(&mut self, text: &str) -> bool {
        if self.is_followed_by(text) {
            self.bump_many(text.len());
            true
        } else {
            false
        }
    }

    pub(crate) fn commit(&mut self, kind: TokenKind) {
        let text = self.current_text().to_string();

        let current_pos = self.last_pos + Pos::from(text.as_str());
        let range = Range::new(self.last_pos, current_pos);
        let char_count = text.chars().count();
        let token = TokenData::new(kind, text, range, self.last_char_index);

        self.tokens.push(token);

        self.last_index = self.current_index;
        self.last_char_index += char_count;
        self.last_pos = current_pos;

        self.assert_invariants();
    }

    pub(crate) fn finish(mut self) -> Vec<TokenData> {
        assert_eq!(self.current_index, self.last_index);
        assert_eq!(self.current_index, self.source_code.len());

        self.commit(TokenKind::Eof);

        assert!(self
            .tokens
            .last()
            .map_or(false, |t| t.kind() == TokenKind::Eof));

        self.tokens
    }
}
