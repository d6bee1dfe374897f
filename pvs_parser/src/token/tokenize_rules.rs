//! 字句解析のルール

use super::{keyword::parse_keyword, tokenize_context::TokenizeContext, TokenData, TokenKind};

type Tx<'a> = TokenizeContext<'a>;

fn char_is_eol(c: char) -> bool {
    c == '\r' || c == '\n'
}

fn char_is_space(c: char) -> bool {
    c.is_whitespace()
}

fn char_is_ident(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '?'
}

fn char_is_ident_first(c: char) -> bool {
    c.is_alphabetic()
}

fn tokenize_space(tx: &mut Tx) {
    assert!(char_is_space(tx.next()));

    while char_is_space(tx.next()) {
        tx.bump();
    }

    tx.commit(TokenKind::Space);
}

fn tokenize_comment(tx: &mut Tx) {
    assert!(tx.is_followed_by("%"));

    tx.eat("%");

    while !tx.at_eof() && !char_is_eol(tx.next()) {
        tx.bump();
    }

    tx.commit(TokenKind::Comment);
}

fn tokenize_number(tx: &mut Tx) {
    assert!(tx.next().is_ascii_digit());

    while tx.next().is_ascii_digit() {
        tx.bump();
    }

    // 小数点の直後に数字がなければ、ドットは別の字句とする。
    if tx.next() == '.' && tx.nth(1).is_ascii_digit() {
        tx.bump();
        while tx.next().is_ascii_digit() {
            tx.bump();
        }
    }

    tx.commit(TokenKind::Number);
}

fn tokenize_str(tx: &mut Tx) {
    assert_eq!(tx.next(), '"');

    tx.bump();

    while !tx.at_eof() {
        let c = tx.next();
        if c == '\\' {
            tx.bump();
            if !tx.at_eof() {
                tx.bump();
            }
            continue;
        }

        if c == '"' {
            break;
        }

        tx.bump();
    }

    tx.eat("\"");
    tx.commit(TokenKind::Str);
}

fn tokenize_ident(tx: &mut Tx) {
    assert!(char_is_ident_first(tx.next()));

    while char_is_ident(tx.next()) {
        tx.bump();
    }

    let kind = parse_keyword(tx.current_text()).unwrap_or(TokenKind::Ident);
    tx.commit(kind);
}

fn do_tokenize_punctuation(tx: &Tx) -> Option<(TokenKind, usize)> {
    let token = match tx.next() {
        '(' => (TokenKind::LeftParen, 1),
        ')' => (TokenKind::RightParen, 1),
        '[' => (TokenKind::LeftBracket, 1),
        ']' => (TokenKind::RightBracket, 1),
        '{' => (TokenKind::LeftBrace, 1),
        '}' => (TokenKind::RightBrace, 1),
        ':' => (TokenKind::Colon, 1),
        ',' => (TokenKind::Comma, 1),
        '.' => (TokenKind::Dot, 1),
        ';' => (TokenKind::Semi, 1),
        '|' => (TokenKind::Pipe, 1),
        '+' => (TokenKind::Plus, 1),
        '*' => (TokenKind::Star, 1),
        '~' => (TokenKind::Tilde, 1),
        '&' => (TokenKind::Amp, 1),
        '<' => match (tx.nth(1), tx.nth(2)) {
            ('=', '>') => (TokenKind::LeftEqualRight, 3),
            ('=', _) => (TokenKind::LeftEqual, 2),
            _ => (TokenKind::LeftAngle, 1),
        },
        '>' => match tx.nth(1) {
            '=' => (TokenKind::RightEqual, 2),
            _ => (TokenKind::RightAngle, 1),
        },
        '=' => match tx.nth(1) {
            '>' => (TokenKind::RightFatArrow, 2),
            _ => (TokenKind::Equal, 1),
        },
        '-' => match tx.nth(1) {
            '>' => (TokenKind::RightSlimArrow, 2),
            _ => (TokenKind::Minus, 1),
        },
        '/' => match tx.nth(1) {
            '=' => (TokenKind::SlashEqual, 2),
            '\\' => (TokenKind::SlashBackslash, 2),
            _ => (TokenKind::Slash, 1),
        },
        '\\' => match tx.nth(1) {
            '/' => (TokenKind::BackslashSlash, 2),
            _ => return None,
        },
        _ => return None,
    };
    Some(token)
}

fn tokenize_punctuation(tx: &mut Tx) {
    let (kind, len) = match do_tokenize_punctuation(tx) {
        None => {
            tx.bump();
            tx.commit(TokenKind::Other);
            return;
        }
        Some(x) => x,
    };

    for _ in 0..len {
        tx.bump();
    }
    tx.commit(kind);
}

fn do_tokenize(tx: &mut Tx) {
    while !tx.at_eof() {
        match tx.next() {
            '%' => tokenize_comment(tx),
            '"' => tokenize_str(tx),
            '0'..='9' => tokenize_number(tx),
            c if char_is_space(c) => tokenize_space(tx),
            c if char_is_ident_first(c) => tokenize_ident(tx),
            _ => tokenize_punctuation(tx),
        }
    }
}

/// ソースコードを字句に分割する。
///
/// トリビア (空白やコメント) も含めて、ソースコードのすべての文字がいずれかの字句に含まれる。
/// 末尾には EOF 字句が置かれる。
pub(crate) fn tokenize(source_code: &str) -> Vec<TokenData> {
    let mut tx = Tx::new(source_code);
    do_tokenize(&mut tx);
    tx.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Pos, Range};

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text)
            .into_iter()
            .map(|token| token.kind())
            .filter(|kind| !kind.is_trivia())
            .collect()
    }

    #[test]
    fn test_theory_header() {
        assert_eq!(
            kinds("foo: THEORY BEGIN"),
            vec![
                TokenKind::Ident,
                TokenKind::Colon,
                TokenKind::Theory,
                TokenKind::Begin,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            kinds("<=> => -> <= /= /\\ \\/ >="),
            vec![
                TokenKind::LeftEqualRight,
                TokenKind::RightFatArrow,
                TokenKind::RightSlimArrow,
                TokenKind::LeftEqual,
                TokenKind::SlashEqual,
                TokenKind::SlashBackslash,
                TokenKind::BackslashSlash,
                TokenKind::RightEqual,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn test_identifier_may_contain_question_mark() {
        let tokens = tokenize("even?(n)");
        assert_eq!(tokens[0].kind(), TokenKind::Ident);
        assert_eq!(tokens[0].text(), "even?");
    }

    #[test]
    fn test_comment_runs_to_end_of_line() {
        let tokens = tokenize("% T: TYPE\nx");
        assert_eq!(tokens[0].kind(), TokenKind::Comment);
        assert_eq!(tokens[0].text(), "% T: TYPE");
        assert_eq!(tokens[2].text(), "x");
    }

    #[test]
    fn test_positions_follow_line_and_column_convention() {
        let tokens = tokenize("a\n  bc");
        let bc = &tokens[2];
        assert_eq!(bc.text(), "bc");
        assert_eq!(bc.range(), Range::new(Pos::new(2, 2), Pos::new(2, 4)));
        assert_eq!(bc.start_index(), 4);
        assert_eq!(bc.stop_index(), 5);
    }

    #[test]
    fn test_eof_has_negative_length() {
        let tokens = tokenize("ab");
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind(), TokenKind::Eof);
        assert_eq!(eof.start_index(), 2);
        assert_eq!(eof.stop_index(), 1);
    }

    #[test]
    fn test_tokens_cover_whole_text() {
        let text = "T: TYPE = {x: nat | x > 0} % comment\n";
        let joined = tokenize(text)
            .iter()
            .map(|token| token.text().to_string())
            .collect::<String>();
        assert_eq!(joined, text);
    }
}
