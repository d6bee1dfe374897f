use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display, Formatter},
    iter::Sum,
    ops::{Add, AddAssign},
};

/// テキスト上の位置
///
/// 行番号は 1 から、列番号は 0 から数える。(字句解析器の慣習に合わせている。)
/// 列番号は Unicode のスカラー値の個数で数える。
///
/// 文字列から変換したものは「位置の差分」を表す。
/// `Pos::START + Pos::from(text)` が text の末尾の位置になる。
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub line: usize,
    pub character: usize,
}

impl Pos {
    /// 差分のゼロ
    pub const ZERO: Pos = Pos {
        line: 0,
        character: 0,
    };

    /// テキストの先頭の位置
    pub const START: Pos = Pos {
        line: 1,
        character: 0,
    };

    pub fn new(line: usize, character: usize) -> Pos {
        Pos { line, character }
    }
}

impl From<char> for Pos {
    fn from(c: char) -> Pos {
        if c == '\n' {
            Pos {
                line: 1,
                character: 0,
            }
        } else {
            Pos {
                line: 0,
                character: 1,
            }
        }
    }
}

impl From<&'_ str> for Pos {
    fn from(s: &str) -> Pos {
        s.chars().map(Pos::from).sum::<Pos>()
    }
}

impl AddAssign for Pos {
    fn add_assign(&mut self, other: Self) {
        if other.line >= 1 {
            self.character = 0;
        }

        self.line += other.line;
        self.character += other.character;
    }
}

impl Add for Pos {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += other;
        self
    }
}

impl Sum for Pos {
    fn sum<I: Iterator<Item = Pos>>(iter: I) -> Pos {
        iter.fold(Pos::ZERO, Add::add)
    }
}

impl Debug for Pos {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

#[cfg(test)]
mod tests {
    use super::Pos;

    #[test]
    fn test_advance_by_single_line_text() {
        assert_eq!(Pos::START + Pos::from("T: TYPE"), Pos::new(1, 7));
    }

    #[test]
    fn test_advance_resets_character_after_newline() {
        let pos = Pos::new(3, 12) + Pos::from("a\n  bc");
        assert_eq!(pos, Pos::new(4, 4));
    }

    #[test]
    fn test_character_counts_scalar_values() {
        assert_eq!(Pos::from("λx"), Pos::new(0, 2));
    }

    #[test]
    fn test_ordering_is_line_first() {
        assert!(Pos::new(1, 90) < Pos::new(2, 0));
        assert!(Pos::new(2, 3) < Pos::new(2, 4));
    }
}
