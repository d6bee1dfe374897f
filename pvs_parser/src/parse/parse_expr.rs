//! 式の構文解析ルール

use super::*;

/// 束縛子の後ろの束縛のグループ。`'(' typeIds ')' | identifier`
fn parse_binding_group(px: &mut Px) {
    if px.eat(TokenKind::LeftParen).is_some() {
        parse_type_ids(px);
        px.expect(TokenKind::RightParen);
    } else {
        parse_untyped_type_id(px);
    }
}

/// `(FORALL | EXISTS | LAMBDA) bindings ':' expr`
fn parse_binder_expr(px: &mut Px) -> ParseEnd {
    let start = px.start_element();
    px.bump();

    loop {
        parse_binding_group(px);

        if px.eat(TokenKind::Comma).is_none() {
            break;
        }
    }

    px.expect(TokenKind::Colon);
    parse_expr_or_error(px);
    px.end_element(PElementKind::BinderExpr, start)
}

/// `LET letBinding (',' letBinding)* IN expr`
fn parse_let_expr(px: &mut Px) -> ParseEnd {
    let start = px.start_element();
    px.expect(TokenKind::Let);

    loop {
        let binding = px.start_element();
        parse_type_id(px);
        px.expect(TokenKind::Equal);
        parse_expr_or_error(px);
        px.end_element(PElementKind::LetBinding, binding);

        if px.eat(TokenKind::Comma).is_none() {
            break;
        }
    }

    px.expect(TokenKind::In);
    parse_expr_or_error(px);
    px.end_element(PElementKind::LetExpr, start)
}

/// `IF expr THEN expr (ELSIF expr THEN expr)* ELSE expr ENDIF`
fn parse_if_expr(px: &mut Px) -> ParseEnd {
    let start = px.start_element();
    px.expect(TokenKind::If);
    parse_expr_or_error(px);
    px.expect(TokenKind::Then);
    parse_expr_or_error(px);

    while px.eat(TokenKind::Elsif).is_some() {
        parse_expr_or_error(px);
        px.expect(TokenKind::Then);
        parse_expr_or_error(px);
    }

    px.expect(TokenKind::Else);
    parse_expr_or_error(px);
    px.expect(TokenKind::Endif);
    px.end_element(PElementKind::IfExpr, start)
}

fn parse_atomic_expr(px: &mut Px) -> Option<ParseEnd> {
    let start = px.start_element();

    let kind = match px.next() {
        TokenKind::Number => {
            px.bump();
            PElementKind::NumberExpr
        }
        TokenKind::Str => {
            px.bump();
            PElementKind::StrExpr
        }
        TokenKind::True => {
            px.bump();
            PElementKind::TrueExpr
        }
        TokenKind::False => {
            px.bump();
            PElementKind::FalseExpr
        }
        TokenKind::Ident => {
            px.bump();
            PElementKind::NameExpr
        }
        TokenKind::LeftParen => {
            px.bump();
            parse_expr_list(px);
            px.expect(TokenKind::RightParen);
            PElementKind::ParenExpr
        }
        TokenKind::If => return Some(parse_if_expr(px)),
        TokenKind::Forall | TokenKind::Exists | TokenKind::Lambda => {
            return Some(parse_binder_expr(px))
        }
        TokenKind::Let => return Some(parse_let_expr(px)),
        _ => return None,
    };

    Some(px.end_element(kind, start))
}

/// 関数適用。`f(x)(y)` のように連鎖できる。
fn parse_call_expr(px: &mut Px) -> Option<ParseEnd> {
    let mut left = parse_atomic_expr(px)?;

    while px.next() == TokenKind::LeftParen {
        let start = px.start_parent(&left);
        px.bump();
        parse_expr_list(px);
        px.expect(TokenKind::RightParen);
        left = px.end_element(PElementKind::CallExpr, start);
    }

    Some(left)
}

fn parse_prefix_expr(
    px: &mut Px,
    ops: &[TokenKind],
    parse_operand: fn(&mut Px) -> Option<ParseEnd>,
) -> Option<ParseEnd> {
    if !ops.contains(&px.next()) {
        return parse_operand(px);
    }

    let start = px.start_element();
    px.bump();
    if parse_prefix_expr(px, ops, parse_operand).is_none() {
        px.error_no_viable();
    }
    Some(px.end_element(PElementKind::UnaryOpExpr, start))
}

/// 左結合の二項演算の列をパースする。
fn parse_binary_expr(
    px: &mut Px,
    ops: &[TokenKind],
    parse_operand: fn(&mut Px) -> Option<ParseEnd>,
) -> Option<ParseEnd> {
    let mut left = parse_operand(px)?;

    while ops.contains(&px.next()) {
        let start = px.start_parent(&left);
        px.bump();
        if parse_operand(px).is_none() {
            px.error_no_viable();
        }
        left = px.end_element(PElementKind::BinaryOpExpr, start);
    }

    Some(left)
}

fn parse_neg(px: &mut Px) -> Option<ParseEnd> {
    parse_prefix_expr(px, &[TokenKind::Minus], parse_call_expr)
}

fn parse_mul(px: &mut Px) -> Option<ParseEnd> {
    parse_binary_expr(px, &[TokenKind::Star, TokenKind::Slash], parse_neg)
}

fn parse_add(px: &mut Px) -> Option<ParseEnd> {
    parse_binary_expr(px, &[TokenKind::Plus, TokenKind::Minus], parse_mul)
}

fn parse_cmp(px: &mut Px) -> Option<ParseEnd> {
    parse_binary_expr(
        px,
        &[
            TokenKind::Equal,
            TokenKind::SlashEqual,
            TokenKind::LeftAngle,
            TokenKind::LeftEqual,
            TokenKind::RightAngle,
            TokenKind::RightEqual,
        ],
        parse_add,
    )
}

fn parse_not(px: &mut Px) -> Option<ParseEnd> {
    parse_prefix_expr(px, &[TokenKind::Not, TokenKind::Tilde], parse_cmp)
}

fn parse_and(px: &mut Px) -> Option<ParseEnd> {
    parse_binary_expr(
        px,
        &[TokenKind::And, TokenKind::Amp, TokenKind::SlashBackslash],
        parse_not,
    )
}

fn parse_or(px: &mut Px) -> Option<ParseEnd> {
    parse_binary_expr(px, &[TokenKind::Or, TokenKind::BackslashSlash], parse_and)
}

fn parse_implies(px: &mut Px) -> Option<ParseEnd> {
    parse_binary_expr(
        px,
        &[TokenKind::Implies, TokenKind::RightFatArrow],
        parse_or,
    )
}

fn parse_iff(px: &mut Px) -> Option<ParseEnd> {
    parse_binary_expr(px, &[TokenKind::Iff, TokenKind::LeftEqualRight], parse_implies)
}

pub(crate) fn parse_expr(px: &mut Px) -> Option<ParseEnd> {
    parse_iff(px)
}

pub(crate) fn parse_expr_or_error(px: &mut Px) -> Option<ParseEnd> {
    let expr_opt = parse_expr(px);

    if expr_opt.is_none() {
        px.error_no_viable();
    }

    expr_opt
}

/// `expr (',' expr)*`
pub(crate) fn parse_expr_list(px: &mut Px) {
    loop {
        parse_expr_or_error(px);

        if px.eat(TokenKind::Comma).is_none() {
            break;
        }
    }
}
