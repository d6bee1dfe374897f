use super::*;
use crate::token::tokenize;

/// 構文解析器
///
/// 構文エラーは登録されたリスナーに順に通知される。
/// 生成直後はコンソールに出力するリスナーが登録されている。
pub struct Parser {
    listeners: Vec<Box<dyn ErrorListener>>,
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            listeners: vec![Box::new(ConsoleErrorListener)],
        }
    }

    /// 登録されているリスナーをすべて外す。
    pub fn remove_error_listeners(&mut self) {
        self.listeners.clear();
    }

    pub fn add_error_listener(&mut self, listener: impl ErrorListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// ソースコードを字句解析・構文解析する。
    ///
    /// 構文エラーがあっても、回復した結果の構文木を返す。
    pub fn parse(&mut self, source_code: &str) -> PTree {
        let tokens = PTokens::from(tokenize(source_code));
        log::trace!("tokens.len={}", tokens.len());

        let mut px = Px::new(tokens, &mut self.listeners);
        parse_root(&mut px);
        px.finish()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new()
    }
}
