//! 字句・字句解析

mod keyword;
mod token_data;
mod token_kind;
mod tokenize_context;
mod tokenize_rules;

pub use token_data::TokenData;
pub use token_kind::TokenKind;
pub(crate) use tokenize_rules::tokenize;
