//! PVS の宣言の索引づけ
//!
//! ソースコードを構文解析し、構文エラーがなければ型・論理式・関数・局所束縛の宣言を名前で引ける表を作る。

mod diagnostics;
mod driver;
mod index;
mod lang_service;
mod parse;
mod source;
mod token;
mod utils;

#[cfg(test)]
mod tests;

pub mod rust_api {
    pub use crate::{
        diagnostics::{Diagnostic, DiagnosticCollector, DiagnosticListener, DiagnosticSeverity},
        driver::{Driver, DriverConfig, IndexResult, LookupMode},
        index::{DeclDescriptor, DeclKind, DeclarationTable, IndexConfig},
        lang_service::{Doc, LangService},
        parse::{ConsoleErrorListener, ErrorListener, PTree, Parser},
        source::{Pos, Pos16, Range},
        token::{TokenData, TokenKind},
    };
}
