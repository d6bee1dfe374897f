//! 構文エラーの診断情報
//!
//! パーサーが報告する構文エラーを、範囲つきの診断情報として集める。

mod diagnostic;
mod diagnostic_collector;

pub use diagnostic::{Diagnostic, DiagnosticSeverity};
pub use diagnostic_collector::{DiagnosticCollector, DiagnosticListener};
