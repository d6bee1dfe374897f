use super::{DeclDescriptor, DeclKind};
use crate::source::Pos;
use std::{cmp::Reverse, collections::HashMap};

const RULER: &str = "------------------------------";

/// 名前から宣言を引く表
///
/// 分類ごとに独立した表を持ち、同じ分類の同じ名前は後から記録したものが勝つ。
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeclarationTable {
    types: HashMap<String, DeclDescriptor>,
    formulas: HashMap<String, DeclDescriptor>,
    functions: HashMap<String, DeclDescriptor>,
    local_bindings: HashMap<String, DeclDescriptor>,

    /// 記録された順のすべての宣言。(上書きされたものも含む。)
    history: Vec<(DeclKind, DeclDescriptor)>,
}

impl DeclarationTable {
    pub fn new() -> Self {
        DeclarationTable::default()
    }

    fn map(&self, kind: DeclKind) -> &HashMap<String, DeclDescriptor> {
        match kind {
            DeclKind::Type => &self.types,
            DeclKind::Formula => &self.formulas,
            DeclKind::Function => &self.functions,
            DeclKind::LocalBinding => &self.local_bindings,
        }
    }

    fn map_mut(&mut self, kind: DeclKind) -> &mut HashMap<String, DeclDescriptor> {
        match kind {
            DeclKind::Type => &mut self.types,
            DeclKind::Formula => &mut self.formulas,
            DeclKind::Function => &mut self.functions,
            DeclKind::LocalBinding => &mut self.local_bindings,
        }
    }

    pub(crate) fn insert(&mut self, kind: DeclKind, descriptor: DeclDescriptor) {
        log::trace!("{} {} {}", kind, descriptor.name, descriptor);

        self.history.push((kind, descriptor.clone()));
        self.map_mut(kind)
            .insert(descriptor.name.clone(), descriptor);
    }

    pub fn get(&self, kind: DeclKind, name: &str) -> Option<&DeclDescriptor> {
        self.map(kind).get(name)
    }

    /// 分類ごとの宣言の個数
    pub fn len(&self, kind: DeclKind) -> usize {
        self.map(kind).len()
    }

    pub fn is_empty(&self) -> bool {
        DeclKind::PRIORITY
            .iter()
            .all(|&kind| self.map(kind).is_empty())
    }

    /// 名前で宣言を引く。
    ///
    /// 型、論理式、関数、局所束縛の順に探して、最初に見つかったものを返す。有効範囲は考慮しない。
    pub fn find(&self, name: &str) -> Option<&DeclDescriptor> {
        log::debug!("finding declaration for {}", name);

        DeclKind::PRIORITY
            .iter()
            .find_map(|&kind| self.get(kind, name))
    }

    /// 位置を考慮して名前で宣言を引く。
    ///
    /// 有効範囲がその位置を含む (または有効範囲を持たない) 宣言のうち、
    /// 最も内側の有効範囲を持つもの、分類の優先順位が高いもの、後に記録されたものの順に優先する。
    pub fn find_at(&self, name: &str, pos: Pos) -> Option<&DeclDescriptor> {
        log::debug!("finding declaration for {} at {}", name, pos);

        self.history
            .iter()
            .enumerate()
            .filter(|(_, (_, descriptor))| {
                descriptor.name == name
                    && descriptor
                        .scope
                        .map_or(true, |scope| scope.contains_loosely(pos))
            })
            .min_by_key(|&(index, &(kind, ref descriptor))| {
                let scope_key = match descriptor.scope {
                    Some(scope) => (false, Reverse(scope.start), scope.end),
                    None => (true, Reverse(Pos::ZERO), Pos::ZERO),
                };
                (scope_key, kind.priority(), Reverse(index))
            })
            .map(|(_, (_, descriptor))| descriptor)
    }

    /// 分類ごとの宣言を名前順に列挙する。
    pub fn entries(&self, kind: DeclKind) -> Vec<(&str, &DeclDescriptor)> {
        let mut entries = self
            .map(kind)
            .iter()
            .map(|(name, descriptor)| (name.as_str(), descriptor))
            .collect::<Vec<_>>();
        entries.sort_by_key(|&(name, _)| name);
        entries
    }

    /// 表の内容を人が読める形で書き出す。
    pub fn dump(&self) -> String {
        let mut out = String::new();

        for &kind in DeclKind::PRIORITY.iter() {
            out += RULER;
            out += "\n";
            out += &format!("{} {}\n", self.len(kind), kind.heading());
            out += RULER;
            out += "\n";

            for (name, descriptor) in self.entries(kind) {
                out += &format!("{} {}\n", name, descriptor);
            }
        }

        out
    }
}
