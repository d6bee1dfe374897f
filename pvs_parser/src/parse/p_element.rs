use super::*;
use crate::utils::{VecArena, VecArenaId};

/// 構文要素の種類
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) enum PElementKind {
    /// 宣言や束縛の名前
    Identifier,

    // 型
    NameTy,
    FunctionTy,
    TupleTy,
    /// `{ x: T | p }`
    SetTy,
    ParenTy,

    // 式の一部
    LetBinding,

    // 式
    NumberExpr,
    StrExpr,
    TrueExpr,
    FalseExpr,
    NameExpr,
    ParenExpr,
    CallExpr,
    UnaryOpExpr,
    BinaryOpExpr,
    IfExpr,
    /// FORALL, EXISTS, LAMBDA
    BinderExpr,
    LetExpr,

    // 宣言の一部
    Formals,
    Exporting,
    Importing,
    Params,
    /// 束縛の出現 (`x` や `x: T`)
    TypeId,

    // 宣言
    TypeDecl,
    FormulaDecl,
    FunctionDecl,
    VarDecl,
    Theory,
    Root,
}

pub(crate) struct PElementTag;

/// 構文要素 (構文木の非終端ノード)
pub(crate) type PElement = VecArenaId<PElementTag>;

pub(crate) type PElementArena = VecArena<PElementTag, PElementData>;

/// 構文要素のデータ
#[derive(Clone, Debug)]
pub(crate) struct PElementData {
    kind: PElementKind,
    children: Vec<PNode>,
    parent_opt: Option<PElement>,
}

impl PElementData {
    pub(crate) fn new(kind: PElementKind, children: Vec<PNode>) -> Self {
        PElementData {
            kind,
            children,
            parent_opt: None,
        }
    }

    pub(crate) fn kind(&self) -> PElementKind {
        self.kind
    }

    pub(crate) fn children(&self) -> &[PNode] {
        &self.children
    }

    pub(crate) fn parent_opt(&self) -> Option<PElement> {
        self.parent_opt
    }

    pub(crate) fn set_parent(&mut self, parent: PElement) {
        assert_eq!(self.parent_opt, None);
        self.parent_opt = Some(parent);
    }

    pub(crate) fn first_token(&self, elements: &PElementArena) -> Option<PToken> {
        self.children
            .iter()
            .find_map(|node| node.first_token(elements))
    }

    pub(crate) fn last_token(&self, elements: &PElementArena) -> Option<PToken> {
        self.children
            .iter()
            .rev()
            .find_map(|node| node.last_token(elements))
    }

    /// 指定した種類の子要素を列挙する。
    pub(crate) fn child_elements<'a>(
        &'a self,
        kind: PElementKind,
        elements: &'a PElementArena,
    ) -> impl Iterator<Item = PElement> + 'a {
        self.children
            .iter()
            .filter_map(|node| node.as_element())
            .filter(move |&element| element.of(elements).kind() == kind)
    }
}
