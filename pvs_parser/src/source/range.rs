use super::Pos;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display, Formatter};

/// テキスト上の範囲
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Range {
    /// 開始位置
    pub start: Pos,

    /// 終了位置 (終端は範囲外)
    pub end: Pos,
}

impl Range {
    pub fn new(start: Pos, end: Pos) -> Range {
        debug_assert!(start <= end, "{:?}", (start, end));
        Range { start, end }
    }

    pub fn start(&self) -> Pos {
        self.start
    }

    pub fn end(&self) -> Pos {
        self.end
    }

    pub fn contains_loosely(self, pos: Pos) -> bool {
        self.start <= pos && pos <= self.end
    }

    pub fn contains_range(self, other: Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub(crate) fn unite(self, other: Range) -> Range {
        Range {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl Debug for Range {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        // <https://www.gnu.org/prep/standards/html_node/Errors.html>
        write!(
            f,
            "{}.{}-{}.{}",
            self.start.line,
            self.start.character + 1,
            self.end.line,
            self.end.character + 1
        )
    }
}
