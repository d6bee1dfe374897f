use crate::source::{Pos, Range};
use serde::Serialize;
use std::fmt::{self, Display, Formatter};

/// 宣言の情報
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclDescriptor {
    /// 宣言される名前
    pub name: String,

    /// 名前の識別子の開始位置
    pub position: Pos,

    /// 宣言を囲む構文要素の元のテキスト。(間のトリビアも含む。)
    pub source_text: String,

    /// 宣言が有効な範囲。該当する構文要素がなければ None
    pub scope: Option<Range>,
}

impl Display for DeclDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position)?;

        if let Some(scope) = self.scope {
            write!(f, " in {}", scope)?;
        }

        write!(f, " {:?}", self.source_text)
    }
}
