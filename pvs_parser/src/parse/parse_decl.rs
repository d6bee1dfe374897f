//! 宣言の構文解析ルール

use super::*;

/// 宣言の先頭になりうるか。(エラー回復で読み飛ばすときの同期点。)
fn is_part_first(kind: TokenKind) -> bool {
    match kind {
        TokenKind::Ident | TokenKind::Importing | TokenKind::End => true,
        _ => false,
    }
}

pub(crate) fn parse_identifier(px: &mut Px) -> Option<ParseEnd> {
    if px.next() != TokenKind::Ident {
        px.error_mismatched(TokenKind::Ident.display_name());
        return None;
    }

    let start = px.start_element();
    px.bump();
    Some(px.end_element(PElementKind::Identifier, start))
}

/// `identifier (',' identifier)*`
fn parse_identifier_list(px: &mut Px) {
    parse_identifier(px);

    while px.next() == TokenKind::Comma && px.nth(1) == TokenKind::Ident {
        px.bump();
        parse_identifier(px);
    }
}

/// モジュールなどの名前。`name ('[' actuals ']')?`
fn parse_module_name(px: &mut Px) {
    px.expect(TokenKind::Ident);

    if px.eat(TokenKind::LeftBracket).is_some() {
        parse_expr_list(px);
        px.expect(TokenKind::RightBracket);
    }
}

fn parse_type_decl(px: &mut Px) -> ParseEnd {
    let start = px.start_element();
    parse_identifier_list(px);
    px.expect(TokenKind::Colon);

    match px.next() {
        TokenKind::Type => {
            px.bump();
            px.eat(TokenKind::Plus);
        }
        TokenKind::NonemptyType => {
            px.bump();
        }
        _ => px.error_mismatched("{'TYPE', 'NONEMPTY_TYPE'}"),
    }

    if px.eat(TokenKind::Equal).is_some() || px.eat(TokenKind::From).is_some() {
        parse_ty_or_error(px);
    }

    px.end_element(PElementKind::TypeDecl, start)
}

fn parse_formula_decl(px: &mut Px) -> ParseEnd {
    let start = px.start_element();
    parse_identifier(px);
    px.expect(TokenKind::Colon);
    px.expect(TokenKind::FormulaKeyword);
    parse_expr_or_error(px);
    px.end_element(PElementKind::FormulaDecl, start)
}

/// `'(' typeIds ')'`
fn parse_params(px: &mut Px) -> ParseEnd {
    let start = px.start_element();
    px.expect(TokenKind::LeftParen);
    parse_type_ids(px);
    px.expect(TokenKind::RightParen);
    px.end_element(PElementKind::Params, start)
}

fn parse_function_decl(px: &mut Px) -> ParseEnd {
    let start = px.start_element();
    parse_identifier_list(px);

    while px.next() == TokenKind::LeftParen {
        parse_params(px);
    }

    px.expect(TokenKind::Colon);
    parse_ty_or_error(px);

    if px.eat(TokenKind::Equal).is_some() {
        parse_expr_or_error(px);
    }

    px.end_element(PElementKind::FunctionDecl, start)
}

fn parse_var_decl(px: &mut Px) -> ParseEnd {
    let start = px.start_element();
    parse_identifier_list(px);
    px.expect(TokenKind::Colon);
    px.expect(TokenKind::Var);
    parse_ty_or_error(px);
    px.end_element(PElementKind::VarDecl, start)
}

/// 識別子のリストとコロンの後ろを先読みして、宣言の種類を決める。
fn lookahead_part(px: &Px) -> PElementKind {
    let mut i = 1;
    while px.nth(i) == TokenKind::Comma && px.nth(i + 1) == TokenKind::Ident {
        i += 2;
    }

    if px.nth(i) != TokenKind::Colon {
        return PElementKind::FunctionDecl;
    }

    match px.nth(i + 1) {
        TokenKind::Type | TokenKind::NonemptyType => PElementKind::TypeDecl,
        TokenKind::FormulaKeyword if i == 1 => PElementKind::FormulaDecl,
        TokenKind::Var => PElementKind::VarDecl,
        _ => PElementKind::FunctionDecl,
    }
}

fn parse_part(px: &mut Px) {
    assert_eq!(px.next(), TokenKind::Ident);

    match lookahead_part(px) {
        PElementKind::TypeDecl => parse_type_decl(px),
        PElementKind::FormulaDecl => parse_formula_decl(px),
        PElementKind::VarDecl => parse_var_decl(px),
        _ => parse_function_decl(px),
    };
}

/// 理論の仮引数。型の仮引数は型宣言、定数の仮引数は変数宣言と同様に扱う。
fn parse_formal(px: &mut Px) {
    match lookahead_part(px) {
        PElementKind::TypeDecl => {
            parse_type_decl(px);
        }
        _ => {
            let start = px.start_element();
            parse_identifier_list(px);
            px.expect(TokenKind::Colon);
            parse_ty_or_error(px);
            px.end_element(PElementKind::VarDecl, start);
        }
    }
}

fn parse_formals(px: &mut Px) -> ParseEnd {
    let start = px.start_element();
    px.expect(TokenKind::LeftBracket);

    loop {
        if px.next() != TokenKind::Ident {
            px.error_mismatched(TokenKind::Ident.display_name());
            break;
        }
        parse_formal(px);

        if px.eat(TokenKind::Comma).is_none() {
            break;
        }
    }

    px.expect(TokenKind::RightBracket);
    px.end_element(PElementKind::Formals, start)
}

fn parse_exporting(px: &mut Px) -> ParseEnd {
    let start = px.start_element();
    px.expect(TokenKind::Exporting);

    if px.eat(TokenKind::All).is_none() {
        loop {
            parse_module_name(px);
            if px.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
    }

    px.end_element(PElementKind::Exporting, start)
}

fn parse_importing(px: &mut Px) -> ParseEnd {
    let start = px.start_element();
    px.expect(TokenKind::Importing);

    loop {
        parse_module_name(px);
        if px.eat(TokenKind::Comma).is_none() {
            break;
        }
    }

    px.end_element(PElementKind::Importing, start)
}

fn parse_theory(px: &mut Px) -> ParseEnd {
    let start = px.start_element();
    parse_identifier(px);

    if px.next() == TokenKind::LeftBracket {
        parse_formals(px);
    }

    px.expect(TokenKind::Colon);
    px.expect(TokenKind::Theory);

    if px.next() == TokenKind::Exporting {
        parse_exporting(px);
    }

    px.expect(TokenKind::Begin);

    loop {
        match px.next() {
            TokenKind::End | TokenKind::Eof => break,
            TokenKind::Importing => {
                parse_importing(px);
            }
            TokenKind::Ident => parse_part(px),
            _ => {
                px.error_extraneous("{'END', 'IMPORTING', IDENTIFIER}");
                px.skip();
                px.skip_until(is_part_first);
            }
        }
    }

    px.expect(TokenKind::End);
    px.expect(TokenKind::Ident);

    px.end_element(PElementKind::Theory, start)
}

/// ソースファイル全体をパースする。`theory+ EOF`
pub(crate) fn parse_root(px: &mut Px) {
    if px.next() == TokenKind::Eof {
        px.error_mismatched(TokenKind::Ident.display_name());
        return;
    }

    loop {
        match px.next() {
            TokenKind::Eof => break,
            TokenKind::Ident => {
                parse_theory(px);
            }
            _ => {
                px.error_extraneous("{<EOF>, IDENTIFIER}");
                px.skip();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parse::tests::{parse_errors, parse_tree_text};

    #[test]
    fn test_theory_with_parts() {
        let tree = parse_tree_text(
            r#"foo: THEORY
BEGIN
  T: TYPE
  x, y: VAR T
  F: FORMULA TRUE
  f(a: T): T = a
END foo"#,
        );
        assert!(tree.contains("TypeDecl"));
        assert!(tree.contains("VarDecl"));
        assert!(tree.contains("FormulaDecl"));
        assert!(tree.contains("FunctionDecl"));
        assert!(tree.contains("Params"));
    }

    #[test]
    fn test_type_decl_variants() {
        let errors = parse_errors(
            r#"t: THEORY
BEGIN
  A, B: TYPE
  C: NONEMPTY_TYPE = int
  D: TYPE+ FROM int
END t"#,
        );
        assert_eq!(errors, Vec::<String>::new());
    }

    #[test]
    fn test_formals_exporting_importing() {
        let errors = parse_errors(
            r#"t[T: TYPE, n: nat]: THEORY
EXPORTING ALL
BEGIN
  IMPORTING lists[T], sets
  f: T
END t"#,
        );
        assert_eq!(errors, Vec::<String>::new());
    }

    #[test]
    fn test_missing_colon() {
        let errors = parse_errors("t: THEORY BEGIN T TYPE END t");
        assert_eq!(errors, vec!["1:18 mismatched input 'TYPE' expecting ':'"]);
    }

    #[test]
    fn test_missing_end_name() {
        let errors = parse_errors("t: THEORY BEGIN END");
        assert_eq!(errors, vec!["1:19 mismatched input '<EOF>' expecting IDENTIFIER"]);
    }

    #[test]
    fn test_empty_input() {
        let errors = parse_errors("  ");
        assert_eq!(errors, vec!["1:2 mismatched input '<EOF>' expecting IDENTIFIER"]);
    }

    #[test]
    fn test_recovery_resumes_at_next_declaration() {
        let errors = parse_errors(
            r#"t: THEORY
BEGIN
  ) )
  T: TYPE
  F: FORMULA
END t"#,
        );
        assert_eq!(
            errors,
            vec![
                "3:2 extraneous input ')' expecting {'END', 'IMPORTING', IDENTIFIER}",
                "6:0 no viable alternative at input 'END'",
            ]
        );
    }
}
