use super::*;

/// 構文要素の開始を表すイベント
#[derive(Copy, Clone, Debug)]
pub(crate) struct ParseStart {
    /// スタックにおける深さ
    depth: usize,
}

/// 構文要素の終了を表すイベント
#[derive(Copy, Clone, Debug)]
pub(crate) struct ParseEnd {
    depth: usize,
    element: PElement,
}

/// 構文木を下から組み立てる。
///
/// 開始イベントはスタックの深さを記録し、終了イベントはそれ以降に積まれたノードを子要素とする要素を作る。
pub(crate) struct PTreeBuilder {
    stack: Vec<PNode>,
    elements: PElementArena,
}

impl PTreeBuilder {
    pub(crate) fn new() -> Self {
        PTreeBuilder {
            stack: vec![],
            elements: PElementArena::new(),
        }
    }

    pub(crate) fn start_element(&self) -> ParseStart {
        ParseStart {
            depth: self.stack.len(),
        }
    }

    /// 直前に終了した要素を最初の子要素として持つ新しい要素を開始する。
    pub(crate) fn start_parent(&self, child: &ParseEnd) -> ParseStart {
        debug_assert_eq!(child.depth + 1, self.stack.len());
        debug_assert_eq!(self.stack.last(), Some(&PNode::Element(child.element)));

        ParseStart { depth: child.depth }
    }

    pub(crate) fn end_element(&mut self, kind: PElementKind, start: ParseStart) -> ParseEnd {
        assert!(start.depth <= self.stack.len());

        let children = self.stack.split_off(start.depth);
        let element = self.alloc(kind, children);
        self.stack.push(PNode::Element(element));

        ParseEnd {
            depth: start.depth,
            element,
        }
    }

    pub(crate) fn on_token(&mut self, token: PToken) {
        self.stack.push(PNode::Token(token));
    }

    fn alloc(&mut self, kind: PElementKind, children: Vec<PNode>) -> PElement {
        let child_elements = children
            .iter()
            .filter_map(|node| node.as_element())
            .collect::<Vec<_>>();

        let element = self.elements.alloc(PElementData::new(kind, children));

        for child in child_elements {
            child.of_mut(&mut self.elements).set_parent(element);
        }

        element
    }

    pub(crate) fn finish(mut self) -> (PElement, PElementArena) {
        let children = self.stack.split_off(0);
        let root = self.alloc(PElementKind::Root, children);
        (root, self.elements)
    }
}
