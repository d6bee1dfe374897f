//! 宣言の有効範囲の計算

use crate::{
    parse::{PElement, PElementKind, PTree},
    source::Range,
};

/// 有効範囲を導入する構文要素か
pub(crate) fn is_scope_kind(kind: PElementKind) -> bool {
    match kind {
        PElementKind::Theory
        | PElementKind::FunctionDecl
        | PElementKind::BinderExpr
        | PElementKind::LetExpr
        | PElementKind::SetTy => true,
        _ => false,
    }
}

/// 識別子が宣言する名前の有効範囲を求める。
///
/// 識別子を宣言している構文要素 (識別子の親) のさらに祖先をたどり、
/// 最初に見つかった有効範囲を導入する要素の範囲を返す。見つからなければ None。
pub(crate) fn resolve_scope(tree: &PTree, identifier: PElement) -> Option<Range> {
    let declaring = tree.parent_opt(identifier)?;

    let mut current_opt = tree.parent_opt(declaring);
    while let Some(current) = current_opt {
        if is_scope_kind(tree.kind(current)) {
            let scope = tree.range(current);
            debug_assert!(scope.contains_range(tree.range(identifier)));
            return Some(scope);
        }

        current_opt = tree.parent_opt(current);
    }

    None
}
