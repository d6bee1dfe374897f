//! ソースコード上の位置と範囲

#[cfg(test)]
pub(crate) mod cursor_text;

mod pos;
mod pos16;
mod range;

pub use pos::Pos;
pub use pos16::Pos16;
pub use range::Range;
