use crate::source::Range;
use serde::{Serialize, Serializer};
use std::fmt::{self, Display, Formatter};

/// 診断情報の深刻度
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticSeverity {
    Error = 1,
    Warning = 2,
    Information = 3,
    Hint = 4,
}

impl DiagnosticSeverity {
    pub fn to_number(self) -> u8 {
        self as u8
    }
}

// JSON では数値として出力する。
impl Serialize for DiagnosticSeverity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.to_number())
    }
}

/// 範囲つきのエラーメッセージ
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub range: Range,
    pub message: String,
    pub severity: DiagnosticSeverity,
}

impl Diagnostic {
    pub fn error(range: Range, message: impl Into<String>) -> Self {
        Diagnostic {
            range,
            message: message.into(),
            severity: DiagnosticSeverity::Error,
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.range, self.message)
    }
}
