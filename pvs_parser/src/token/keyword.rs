use super::TokenKind;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static KEYWORD_TABLE: &[(TokenKind, &str)] = &[
    (TokenKind::All, "ALL"),
    (TokenKind::And, "AND"),
    (TokenKind::Begin, "BEGIN"),
    (TokenKind::Else, "ELSE"),
    (TokenKind::Elsif, "ELSIF"),
    (TokenKind::End, "END"),
    (TokenKind::Endif, "ENDIF"),
    (TokenKind::Exists, "EXISTS"),
    (TokenKind::Exporting, "EXPORTING"),
    (TokenKind::False, "FALSE"),
    (TokenKind::Forall, "FORALL"),
    (TokenKind::From, "FROM"),
    (TokenKind::If, "IF"),
    (TokenKind::Iff, "IFF"),
    (TokenKind::Implies, "IMPLIES"),
    (TokenKind::Importing, "IMPORTING"),
    (TokenKind::In, "IN"),
    (TokenKind::Lambda, "LAMBDA"),
    (TokenKind::Let, "LET"),
    (TokenKind::NonemptyType, "NONEMPTY_TYPE"),
    (TokenKind::Not, "NOT"),
    (TokenKind::Or, "OR"),
    (TokenKind::Then, "THEN"),
    (TokenKind::Theory, "THEORY"),
    (TokenKind::True, "TRUE"),
    (TokenKind::Type, "TYPE"),
    (TokenKind::Var, "VAR"),
    // 論理式宣言
    (TokenKind::FormulaKeyword, "ASSUMPTION"),
    (TokenKind::FormulaKeyword, "AXIOM"),
    (TokenKind::FormulaKeyword, "CHALLENGE"),
    (TokenKind::FormulaKeyword, "CLAIM"),
    (TokenKind::FormulaKeyword, "CONJECTURE"),
    (TokenKind::FormulaKeyword, "COROLLARY"),
    (TokenKind::FormulaKeyword, "FACT"),
    (TokenKind::FormulaKeyword, "FORMULA"),
    (TokenKind::FormulaKeyword, "LAW"),
    (TokenKind::FormulaKeyword, "LEMMA"),
    (TokenKind::FormulaKeyword, "OBLIGATION"),
    (TokenKind::FormulaKeyword, "POSTULATE"),
    (TokenKind::FormulaKeyword, "PROPOSITION"),
    (TokenKind::FormulaKeyword, "SUBLEMMA"),
    (TokenKind::FormulaKeyword, "THEOREM"),
];

/// 大文字に正規化したキーワードから字句の種類への対応
static KEYWORD_MAP: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    KEYWORD_TABLE
        .iter()
        .map(|&(kind, word)| (word, kind))
        .collect()
});

/// キーワードを判定する。PVS のキーワードは大文字と小文字を区別しない。
pub(crate) fn parse_keyword(text: &str) -> Option<TokenKind> {
    KEYWORD_MAP.get(text.to_ascii_uppercase().as_str()).copied()
}
