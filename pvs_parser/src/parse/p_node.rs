use super::*;

/// 構文木のノード
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum PNode {
    Token(PToken),
    Element(PElement),
}

impl PNode {
    pub(crate) fn as_element(self) -> Option<PElement> {
        match self {
            PNode::Element(element) => Some(element),
            PNode::Token(_) => None,
        }
    }

    pub(crate) fn first_token(self, elements: &PElementArena) -> Option<PToken> {
        match self {
            PNode::Token(token) => Some(token),
            PNode::Element(element) => element.of(elements).first_token(elements),
        }
    }

    pub(crate) fn last_token(self, elements: &PElementArena) -> Option<PToken> {
        match self {
            PNode::Token(token) => Some(token),
            PNode::Element(element) => element.of(elements).last_token(elements),
        }
    }
}
