use super::Diagnostic;
use crate::{
    parse::ErrorListener,
    source::{Pos, Range},
    token::TokenData,
};
use std::{cell::RefCell, mem::take, rc::Rc};

/// 構文エラーを診断情報として集めるもの
///
/// `listener` でパーサーに登録するハンドルを作る。ハンドルが書き込んだ診断情報はすべてこのコレクターに溜まる。
#[derive(Clone, Default)]
pub struct DiagnosticCollector {
    inner: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        DiagnosticCollector::default()
    }

    pub fn listener(&self) -> DiagnosticListener {
        DiagnosticListener {
            parent: self.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    /// 報告された順の診断情報のコピー
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.inner.borrow().clone()
    }

    pub fn finish(self) -> Vec<Diagnostic> {
        let mut inner = self.inner.try_borrow_mut().expect("can't share diagnostics");
        take(&mut inner)
    }
}

/// パーサーに登録するエラーリスナー。
/// 自由にクローンでき、書き込みは親のコレクターに集まる。
#[derive(Clone)]
pub struct DiagnosticListener {
    parent: DiagnosticCollector,
}

impl ErrorListener for DiagnosticListener {
    fn syntax_error(
        &mut self,
        offending_opt: Option<&TokenData>,
        line: usize,
        column: usize,
        message: &str,
    ) {
        // 終了位置はトークンの開始・終了インデックスの差から計算する。(1文字のトークンで len=0、EOF で len=-1)
        let len = offending_opt.map_or(0, |token| {
            token.stop_index() - token.start_index() as isize
        });
        let end_character = (column as isize + 1 + len) as usize;

        let range = Range {
            start: Pos::new(line, column),
            end: Pos::new(line, end_character),
        };

        self.parent
            .inner
            .borrow_mut()
            .push(Diagnostic::error(range, message));
    }
}
