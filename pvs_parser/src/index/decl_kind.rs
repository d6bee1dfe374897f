use std::fmt::{self, Display, Formatter};

/// 宣言の分類
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DeclKind {
    Type,
    Formula,
    Function,
    LocalBinding,
}

impl DeclKind {
    /// 名前を引くときの優先順位。(先にあるものが優先される。)
    pub const PRIORITY: [DeclKind; 4] = [
        DeclKind::Type,
        DeclKind::Formula,
        DeclKind::Function,
        DeclKind::LocalBinding,
    ];

    pub(crate) fn priority(self) -> usize {
        self as usize
    }

    /// ダンプの見出しに使う表記
    pub(crate) fn heading(self) -> &'static str {
        match self {
            DeclKind::Type => "type declarations",
            DeclKind::Formula => "formula declarations",
            DeclKind::Function => "function declarations",
            DeclKind::LocalBinding => "local bindings",
        }
    }
}

impl Display for DeclKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeclKind::Type => "type",
            DeclKind::Formula => "formula",
            DeclKind::Function => "function",
            DeclKind::LocalBinding => "local binding",
        };
        f.write_str(s)
    }
}
