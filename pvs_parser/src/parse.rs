//! 構文木・構文解析

mod error_listener;
mod p_element;
mod p_node;
mod p_token;
mod p_tree;
mod p_tree_builder;
mod parse_context;
mod parse_decl;
mod parse_expr;
mod parse_ty;
mod parser;
pub(crate) mod tree_walker;

pub use error_listener::{ConsoleErrorListener, ErrorListener};
pub use p_tree::PTree;
pub use parser::Parser;

pub(crate) use p_element::{PElement, PElementArena, PElementData, PElementKind};
pub(crate) use p_node::PNode;
pub(crate) use p_token::{PToken, PTokens};

use crate::token::{TokenData, TokenKind};
use p_tree_builder::{PTreeBuilder, ParseEnd, ParseStart};
use parse_context::Px;
use parse_decl::{parse_identifier, parse_root};
use parse_expr::{parse_expr_list, parse_expr_or_error};
use parse_ty::{parse_ty_or_error, parse_type_id, parse_type_ids, parse_untyped_type_id};

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[derive(Clone, Default)]
    struct MessageListener {
        messages: Rc<RefCell<Vec<String>>>,
    }

    impl ErrorListener for MessageListener {
        fn syntax_error(
            &mut self,
            _: Option<&TokenData>,
            line: usize,
            column: usize,
            message: &str,
        ) {
            self.messages
                .borrow_mut()
                .push(format!("{}:{} {}", line, column, message));
        }
    }

    /// 構文エラーを `行:列 メッセージ` の形式で列挙する。
    pub(crate) fn parse_errors(text: &str) -> Vec<String> {
        let listener = MessageListener::default();

        let mut parser = Parser::new();
        parser.remove_error_listeners();
        parser.add_error_listener(listener.clone());
        parser.parse(text);

        let messages = listener.messages.borrow().clone();
        messages
    }

    pub(crate) fn parse_quietly(text: &str) -> PTree {
        let mut parser = Parser::new();
        parser.remove_error_listeners();
        parser.parse(text)
    }

    /// 構文木をデバッグ表示する。
    pub(crate) fn parse_tree_text(text: &str) -> String {
        format!("{:?}", parse_quietly(text))
    }

    #[test]
    fn test_tree_keeps_every_significant_token() {
        let text = "t: THEORY BEGIN % comment\n  T: TYPE END t";
        let tree = parse_quietly(text);
        assert_eq!(tree.source_text(tree.root), text);
    }

    #[test]
    fn test_element_ranges_and_parents() {
        let tree = parse_quietly("t: THEORY\nBEGIN\n  T: TYPE\nEND t");
        let theory = tree.child_of_kind(tree.root, PElementKind::Theory).unwrap();
        let decl = tree.child_of_kind(theory, PElementKind::TypeDecl).unwrap();

        assert_eq!(tree.parent_opt(decl), Some(theory));
        assert_eq!(format!("{}", tree.range(decl)), "3.3-3.10");
        assert_eq!(tree.source_text(decl), "T: TYPE");
    }

    #[test]
    fn test_errors_are_reported_to_every_listener() {
        let first = MessageListener::default();
        let second = MessageListener::default();

        let mut parser = Parser::new();
        parser.remove_error_listeners();
        parser.add_error_listener(first.clone());
        parser.add_error_listener(second.clone());
        parser.parse("t: THEORY");

        assert_eq!(first.messages.borrow().len(), 1);
        assert_eq!(*first.messages.borrow(), *second.messages.borrow());
    }
}
