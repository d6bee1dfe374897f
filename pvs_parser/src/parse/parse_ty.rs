//! 型式の構文解析ルール

use super::*;

/// `identifier (':' typeExpr)?`
pub(crate) fn parse_type_id(px: &mut Px) -> ParseEnd {
    let start = px.start_element();
    parse_identifier(px);

    if px.eat(TokenKind::Colon).is_some() {
        parse_ty_or_error(px);
    }

    px.end_element(PElementKind::TypeId, start)
}

/// 型注釈のない束縛。(束縛子の直後など、コロンが後続の区切りになる位置で使う。)
pub(crate) fn parse_untyped_type_id(px: &mut Px) -> ParseEnd {
    let start = px.start_element();
    parse_identifier(px);
    px.end_element(PElementKind::TypeId, start)
}

/// `typeId (',' typeId)*`
pub(crate) fn parse_type_ids(px: &mut Px) {
    loop {
        parse_type_id(px);

        if px.eat(TokenKind::Comma).is_none() {
            break;
        }
    }
}

fn parse_ty_list(px: &mut Px) {
    loop {
        parse_ty_or_error(px);

        if px.eat(TokenKind::Comma).is_none() {
            break;
        }
    }
}

pub(crate) fn parse_ty(px: &mut Px) -> Option<ParseEnd> {
    let start = px.start_element();

    let kind = match px.next() {
        TokenKind::Ident => {
            px.bump();

            if px.eat(TokenKind::LeftBracket).is_some() {
                parse_ty_list(px);
                px.expect(TokenKind::RightBracket);
            }
            PElementKind::NameTy
        }
        TokenKind::LeftBracket => {
            px.bump();
            parse_ty_list(px);

            let kind = if px.eat(TokenKind::RightSlimArrow).is_some() {
                parse_ty_or_error(px);
                PElementKind::FunctionTy
            } else {
                PElementKind::TupleTy
            };

            px.expect(TokenKind::RightBracket);
            kind
        }
        TokenKind::LeftBrace => {
            px.bump();
            parse_type_ids(px);
            px.expect(TokenKind::Pipe);
            parse_expr_or_error(px);
            px.expect(TokenKind::RightBrace);
            PElementKind::SetTy
        }
        TokenKind::LeftParen => {
            px.bump();
            parse_ty_or_error(px);
            px.expect(TokenKind::RightParen);
            PElementKind::ParenTy
        }
        _ => return None,
    };

    Some(px.end_element(kind, start))
}

pub(crate) fn parse_ty_or_error(px: &mut Px) -> Option<ParseEnd> {
    let ty_opt = parse_ty(px);

    if ty_opt.is_none() {
        px.error_no_viable();
    }

    ty_opt
}
