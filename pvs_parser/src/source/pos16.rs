use super::Pos;
use serde::{Deserialize, Serialize};

/// テキスト上の位置を UTF-16 ベースで数えたもの。主に LSP で使う。
///
/// 行番号は 0 から数える。列番号は行頭からの UTF-16 のコードユニット数。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos16 {
    pub row: usize,
    pub column16: usize,
}

fn nth_line(text: &str, row: usize) -> &str {
    text.split('\n').nth(row).unwrap_or("")
}

impl Pos16 {
    pub fn new(row: usize, column16: usize) -> Pos16 {
        Pos16 { row, column16 }
    }

    /// 文字単位の位置に直す。
    ///
    /// サロゲートペアの途中を指す列はその文字の先頭に丸める。行末より後ろの列はそのままずらす。
    pub fn to_pos(self, text: &str) -> Pos {
        let line_text = nth_line(text, self.row);

        let mut units = 0;
        let mut character = 0;
        for c in line_text.chars() {
            if units + c.len_utf16() > self.column16 {
                return Pos::new(self.row + 1, character);
            }

            units += c.len_utf16();
            character += 1;
        }

        Pos::new(self.row + 1, character + (self.column16 - units))
    }

    pub fn from_pos(text: &str, pos: Pos) -> Pos16 {
        let row = pos.line.saturating_sub(1);
        let line_text = nth_line(text, row);

        let mut column16 = 0;
        let mut count = 0;
        for c in line_text.chars().take(pos.character) {
            column16 += c.len_utf16();
            count += 1;
        }

        Pos16::new(row, column16 + (pos.character - count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "t: THEORY\n  %🐧 🐧\n  🐧x: int";

    #[test]
    fn test_ascii_columns_are_unchanged() {
        assert_eq!(Pos16::new(0, 3).to_pos(TEXT), Pos::new(1, 3));
        assert_eq!(Pos16::from_pos(TEXT, Pos::new(1, 3)), Pos16::new(0, 3));
    }

    #[test]
    fn test_surrogate_pairs_count_twice() {
        // x は 3 文字目、UTF-16 では 4 ユニット目
        assert_eq!(Pos16::new(2, 4).to_pos(TEXT), Pos::new(3, 3));
        assert_eq!(Pos16::from_pos(TEXT, Pos::new(3, 3)), Pos16::new(2, 4));

        assert_eq!(Pos16::new(1, 6).to_pos(TEXT), Pos::new(2, 5));
        assert_eq!(Pos16::from_pos(TEXT, Pos::new(2, 5)), Pos16::new(1, 6));
    }

    #[test]
    fn test_middle_of_surrogate_pair_rounds_down() {
        assert_eq!(Pos16::new(2, 3).to_pos(TEXT), Pos::new(3, 2));
    }

    #[test]
    fn test_past_end_of_line() {
        assert_eq!(Pos16::new(0, 12).to_pos(TEXT), Pos::new(1, 12));
        assert_eq!(Pos16::from_pos(TEXT, Pos::new(1, 12)), Pos16::new(0, 12));
    }
}
