use super::*;

/// Parsing context. 構文解析の文脈
pub(crate) struct Px<'a> {
    /// トリビアを含むトークン列
    tokens: PTokens,
    /// トリビアでないトークンのリスト。最後は EOF
    significant: Vec<PToken>,
    current: usize,
    builder: PTreeBuilder,
    /// エラー回復モード。
    /// エラーを報告してから次にトークンの照合に成功するまでの間、エラーの報告を抑制する。
    recovering: bool,
    listeners: &'a mut [Box<dyn ErrorListener>],
}

impl<'a> Px<'a> {
    pub(crate) fn new(tokens: PTokens, listeners: &'a mut [Box<dyn ErrorListener>]) -> Self {
        let significant = tokens
            .enumerate()
            .filter(|(_, token)| !token.kind().is_trivia())
            .map(|(id, _)| id)
            .collect::<Vec<_>>();
        assert_eq!(
            significant.last().map(|&token| token.of(&tokens).kind()),
            Some(TokenKind::Eof)
        );

        Px {
            tokens,
            significant,
            current: 0,
            builder: PTreeBuilder::new(),
            recovering: false,
            listeners,
        }
    }

    fn nth_token(&self, offset: usize) -> PToken {
        let index = (self.current + offset).min(self.significant.len() - 1);
        self.significant[index]
    }

    pub(crate) fn nth(&self, offset: usize) -> TokenKind {
        self.nth_token(offset).of(&self.tokens).kind()
    }

    pub(crate) fn next(&self) -> TokenKind {
        self.nth(0)
    }

    pub(crate) fn next_data(&self) -> &TokenData {
        self.nth_token(0).of(&self.tokens)
    }

    fn advance(&mut self) -> PToken {
        assert_ne!(self.next(), TokenKind::Eof);

        let token = self.nth_token(0);
        self.current += 1;
        self.builder.on_token(token);
        token
    }

    /// 次のトークンを照合して構文木に加える。
    pub(crate) fn bump(&mut self) -> PToken {
        self.recovering = false;
        self.advance()
    }

    /// エラー回復のために次のトークンを読み飛ばす。
    pub(crate) fn skip(&mut self) {
        if self.next() != TokenKind::Eof {
            self.advance();
        }
    }

    pub(crate) fn eat(&mut self, kind: TokenKind) -> Option<PToken> {
        if self.next() == kind {
            Some(self.bump())
        } else {
            None
        }
    }

    /// 指定した種類のトークンを要求する。
    ///
    /// 余計なトークンが1つだけ挟まっているときは、それを読み飛ばして照合する。
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Option<PToken> {
        if self.next() == kind {
            return Some(self.bump());
        }

        if kind != TokenKind::Eof && self.next() != TokenKind::Eof && self.nth(1) == kind {
            self.error_extraneous(kind.display_name());
            self.skip();
            return Some(self.bump());
        }

        self.error_mismatched(kind.display_name());
        None
    }

    /// 条件を満たすトークンか EOF に到達するまで読み飛ばす。
    pub(crate) fn skip_until(&mut self, pred: impl Fn(TokenKind) -> bool) {
        while self.next() != TokenKind::Eof && !pred(self.next()) {
            self.skip();
        }
    }

    pub(crate) fn start_element(&self) -> ParseStart {
        self.builder.start_element()
    }

    pub(crate) fn start_parent(&self, child: &ParseEnd) -> ParseStart {
        self.builder.start_parent(child)
    }

    pub(crate) fn end_element(&mut self, kind: PElementKind, start: ParseStart) -> ParseEnd {
        self.builder.end_element(kind, start)
    }

    /// 次のトークンの位置で構文エラーを報告する。
    pub(crate) fn error(&mut self, message: &str) {
        if self.recovering {
            return;
        }
        self.recovering = true;

        let token = self.nth_token(0).of(&self.tokens);
        let pos = token.range().start();
        log::trace!("syntax error at {}: {}", pos, message);

        for listener in self.listeners.iter_mut() {
            listener.syntax_error(Some(token), pos.line, pos.character, message);
        }
    }

    pub(crate) fn error_mismatched(&mut self, expected: &str) {
        let message = format!(
            "mismatched input '{}' expecting {}",
            self.next_data().display_text(),
            expected
        );
        self.error(&message);
    }

    pub(crate) fn error_extraneous(&mut self, expected: &str) {
        let message = format!(
            "extraneous input '{}' expecting {}",
            self.next_data().display_text(),
            expected
        );
        self.error(&message);
    }

    pub(crate) fn error_no_viable(&mut self) {
        let message = format!(
            "no viable alternative at input '{}'",
            self.next_data().display_text()
        );
        self.error(&message);
    }

    pub(crate) fn finish(mut self) -> PTree {
        assert_eq!(self.next(), TokenKind::Eof);

        let eof = self.nth_token(0);
        self.builder.on_token(eof);

        let (root, elements) = self.builder.finish();
        PTree {
            root,
            tokens: self.tokens,
            elements,
        }
    }
}
