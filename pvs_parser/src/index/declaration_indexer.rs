use super::{scope_resolver::resolve_scope, DeclDescriptor, DeclKind, DeclarationTable};
use crate::parse::{tree_walker::PTreeListener, PElement, PElementKind, PTree};

/// 索引づけの設定
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexConfig {
    /// 理論の終わりごとに表の内容を書き出すか
    pub dump: bool,
}

/// 構文木を巡回して宣言を表に記録するもの
pub(crate) struct DeclarationIndexer {
    config: IndexConfig,
    table: DeclarationTable,
    dumps: Vec<String>,
}

impl DeclarationIndexer {
    pub(crate) fn new(config: IndexConfig) -> Self {
        DeclarationIndexer {
            config,
            table: DeclarationTable::new(),
            dumps: vec![],
        }
    }

    pub(crate) fn finish(self) -> (DeclarationTable, Vec<String>) {
        (self.table, self.dumps)
    }

    fn record(&mut self, kind: DeclKind, identifier: PElement, construct: PElement, tree: &PTree) {
        let descriptor = DeclDescriptor {
            name: tree.source_text(identifier),
            position: tree.range(identifier).start(),
            source_text: tree.source_text(construct),
            scope: resolve_scope(tree, identifier),
        };
        debug_assert!(!descriptor.name.is_empty());

        self.table.insert(kind, descriptor);
    }
}

/// 宣言の構文要素が持つ識別子を列挙する。
///
/// 識別子を持たない宣言はパーサーの不具合なので、処理を打ち切る。
fn identifiers_of(construct: PElement, tree: &PTree) -> Vec<PElement> {
    let identifiers = tree
        .children_of_kind(construct, PElementKind::Identifier)
        .collect::<Vec<_>>();

    if identifiers.is_empty() {
        panic!(
            "{:?} at {} has no identifier",
            tree.kind(construct),
            tree.range(construct)
        );
    }

    identifiers
}

impl PTreeListener for DeclarationIndexer {
    fn exit_theory(&mut self, _element: PElement, _tree: &PTree) {
        if self.config.dump {
            self.dumps.push(self.table.dump());
        }
    }

    fn enter_type_decl(&mut self, element: PElement, tree: &PTree) {
        for identifier in identifiers_of(element, tree) {
            self.record(DeclKind::Type, identifier, element, tree);
        }
    }

    fn enter_formula_decl(&mut self, element: PElement, tree: &PTree) {
        let identifier = identifiers_of(element, tree)[0];
        self.record(DeclKind::Formula, identifier, element, tree);
    }

    fn enter_function_decl(&mut self, element: PElement, tree: &PTree) {
        for identifier in identifiers_of(element, tree) {
            self.record(DeclKind::Function, identifier, element, tree);
        }
    }

    fn enter_type_id(&mut self, element: PElement, tree: &PTree) {
        let identifier = identifiers_of(element, tree)[0];
        self.record(DeclKind::LocalBinding, identifier, element, tree);
    }
}
