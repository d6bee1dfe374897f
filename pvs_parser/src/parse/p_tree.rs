use super::*;
use crate::source::{Pos, Range};
use std::fmt::{self, Debug, Formatter};

/// 構文木
pub struct PTree {
    /// ルート要素
    pub(crate) root: PElement,
    /// トークン列。
    /// トリビアを含む。
    pub(crate) tokens: PTokens,
    /// 構文要素のデータ
    pub(crate) elements: PElementArena,
}

impl PTree {
    pub(crate) fn kind(&self, element: PElement) -> PElementKind {
        element.of(&self.elements).kind()
    }

    pub(crate) fn parent_opt(&self, element: PElement) -> Option<PElement> {
        element.of(&self.elements).parent_opt()
    }

    pub(crate) fn first_token(&self, element: PElement) -> Option<PToken> {
        element.of(&self.elements).first_token(&self.elements)
    }

    pub(crate) fn last_token(&self, element: PElement) -> Option<PToken> {
        element.of(&self.elements).last_token(&self.elements)
    }

    /// 構文要素の範囲。(トークンを持たない要素は空の範囲になる。)
    pub(crate) fn range(&self, element: PElement) -> Range {
        match (self.first_token(element), self.last_token(element)) {
            (Some(first), Some(last)) => first
                .range(&self.tokens)
                .unite(last.range(&self.tokens)),
            _ => Range::new(Pos::START, Pos::START),
        }
    }

    /// 構文要素の元のテキスト。
    /// 要素の最初のトークンから最後のトークンまで、間のトリビアも含めて連結する。
    pub(crate) fn source_text(&self, element: PElement) -> String {
        let (first, last) = match (self.first_token(element), self.last_token(element)) {
            (Some(first), Some(last)) => (first.to_index(), last.to_index()),
            _ => return String::new(),
        };

        self.tokens
            .iter()
            .skip(first)
            .take(last + 1 - first)
            .map(|token| token.text())
            .collect()
    }

    /// 指定した種類の最初の子要素
    pub(crate) fn child_of_kind(&self, element: PElement, kind: PElementKind) -> Option<PElement> {
        element
            .of(&self.elements)
            .child_elements(kind, &self.elements)
            .next()
    }

    pub(crate) fn children_of_kind<'a>(
        &'a self,
        element: PElement,
        kind: PElementKind,
    ) -> impl Iterator<Item = PElement> + 'a {
        element
            .of(&self.elements)
            .child_elements(kind, &self.elements)
    }

    fn fmt_node(&self, node: PNode, depth: usize, f: &mut Formatter<'_>) -> fmt::Result {
        match node {
            PNode::Token(token) => writeln!(
                f,
                "{:indent$}{:?}",
                "",
                token.of(&self.tokens),
                indent = depth * 2
            ),
            PNode::Element(element) => {
                let data = element.of(&self.elements);
                writeln!(f, "{:indent$}{:?}", "", data.kind(), indent = depth * 2)?;
                for &child in data.children() {
                    self.fmt_node(child, depth + 1, f)?;
                }
                Ok(())
            }
        }
    }
}

impl Debug for PTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.fmt_node(PNode::Element(self.root), 0, f)
    }
}
