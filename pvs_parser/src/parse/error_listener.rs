use crate::token::TokenData;

/// 構文エラーの通知を受け取るもの
pub trait ErrorListener {
    /// 構文エラーを受け取る。
    ///
    /// `line` は 1 から、`column` は 0 から数える。
    fn syntax_error(
        &mut self,
        offending_opt: Option<&TokenData>,
        line: usize,
        column: usize,
        message: &str,
    );
}

/// 構文エラーを標準エラー出力に書くリスナー
///
/// パーサーに既定で登録されている。
#[derive(Default)]
pub struct ConsoleErrorListener;

impl ErrorListener for ConsoleErrorListener {
    fn syntax_error(
        &mut self,
        _offending_opt: Option<&TokenData>,
        line: usize,
        column: usize,
        message: &str,
    ) {
        eprintln!("line {}:{} {}", line, column, message);
    }
}
