//! テスト用: カーソルつき文字列

use super::{Pos, Range};
use std::mem::take;

/// カーソルつき文字列をパースした結果
///
/// カーソルつき文字列は、ある文字列上の位置や範囲を分かりやすく表現するためのマークアップ記法。
/// 位置や範囲を表す以下のカーソルマーカーを使用できる:
///
/// - 位置カーソル: ある一点を表す。
///     - 名前なし: `<|>`
///     - 名前つき: `<$A|>`
/// - 範囲カーソル: カーソルマーカーの間の範囲を表す。
///     - 名前なし: `<[`...`]>`
///     - 名前つき: `<$A[`...`]>`
///
/// 範囲カーソルの入れ子や、範囲カーソルの中に位置カーソルがあるケースは未実装。
pub(crate) struct CursorText<'a> {
    text: String,
    cursors: Vec<(&'a str, Range)>,
}

impl<'a> CursorText<'a> {
    pub(crate) fn as_str(&self) -> &str {
        self.text.as_str()
    }

    pub(crate) fn to_pos_vec(&self) -> Vec<Pos> {
        self.cursors.iter().map(|&(_, range)| range.start()).collect()
    }

    pub(crate) fn to_range_vec(&self) -> Vec<Range> {
        self.cursors.iter().map(|&(_, range)| range).collect()
    }

    pub(crate) fn range_of(&self, name: &str) -> Range {
        self.cursors
            .iter()
            .find(|&&(n, _)| n == name)
            .map(|&(_, range)| range)
            .unwrap_or_else(|| panic!("cursor '{}' not found", name))
    }
}

enum CursorKind {
    Pos,
    Range,
}

struct CursorTextParser<'a> {
    text: &'a str,
    plain_text: String,
    pos: Pos,
    last: usize,
}

fn parse_cursor_name(s: &str) -> (&str, usize) {
    if !s.starts_with('$') {
        return ("", 0);
    }

    let len = s[1..]
        .bytes()
        .take_while(|&b| (b as char).is_ascii_alphanumeric() || b == b'_')
        .count();
    (&s[1..1 + len], 1 + len)
}

/// 直前のカーソルの終了位置から位置 i までを地の文とみなす。
fn skip_plain_text(i: usize, px: &mut CursorTextParser<'_>) {
    let t = &px.text[px.last..i];
    px.plain_text += t;
    px.pos += Pos::from(t);
    px.last = i;
}

/// カーソルつき文字列をパースする。
pub(crate) fn parse_cursor_text(s: &str) -> Result<CursorText<'_>, String> {
    let px = &mut CursorTextParser {
        text: s,
        plain_text: String::with_capacity(s.len()),
        pos: Pos::START,
        last: 0,
    };

    let mut cursors = vec![];
    let mut i = 0;

    while let Some(offset) = s[i..].find('<') {
        let cursor_start = i + offset;
        i = cursor_start + 1;

        let (name, len) = parse_cursor_name(&s[i..]);
        let kind = match s.as_bytes().get(i + len) {
            Some(b'|') => CursorKind::Pos,
            Some(b'[') => CursorKind::Range,
            _ => continue,
        };
        i += len + 1;

        skip_plain_text(cursor_start, px);
        let start = px.pos;

        let range = match kind {
            CursorKind::Pos => {
                if s.as_bytes().get(i) != Some(&b'>') {
                    return Err(format!("'<|' の直後には '>' が必要です (at {})", i));
                }
                i += 1;
                Range::new(start, start)
            }
            CursorKind::Range => {
                px.last = i;

                let offset = match s[i..].find("]>") {
                    Some(offset) => offset,
                    None => return Err(format!("範囲カーソルが閉じられていません (at {})", i)),
                };

                skip_plain_text(i + offset, px);
                i += offset + "]>".len();
                Range::new(start, px.pos)
            }
        };

        cursors.push((name, range));
        px.last = i;
    }

    skip_plain_text(s.len(), px);

    Ok(CursorText {
        text: take(&mut px.plain_text),
        cursors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_cursors() {
        let result = parse_cursor_text("first <|>line\nsecond <$B|>line\n").unwrap();
        assert_eq!(result.as_str(), "first line\nsecond line\n");
        assert_eq!(result.to_pos_vec(), vec![Pos::new(1, 6), Pos::new(2, 7)]);
    }

    #[test]
    fn test_range_cursors() {
        let result = parse_cursor_text("x <= <[line]>\nsecond <$B[line\nthird]> line\n").unwrap();
        assert_eq!(result.as_str(), "x <= line\nsecond line\nthird line\n");
        assert_eq!(
            result.to_range_vec(),
            vec![
                Range::new(Pos::new(1, 5), Pos::new(1, 9)),
                Range::new(Pos::new(2, 7), Pos::new(3, 5)),
            ]
        );
        assert_eq!(result.range_of("B").start(), Pos::new(2, 7));
    }

    #[test]
    fn test_unclosed_range_cursor_error() {
        assert!(parse_cursor_text("こんにちは <[ せかい").is_err());
    }
}
