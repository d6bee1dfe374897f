//! 宣言の索引
//!
//! 構文木を巡回して、名前から宣言を引くための表を作る。

mod decl_descriptor;
mod decl_kind;
mod declaration_indexer;
mod declaration_table;
pub(crate) mod scope_resolver;

pub use decl_descriptor::DeclDescriptor;
pub use decl_kind::DeclKind;
pub use declaration_indexer::IndexConfig;
pub use declaration_table::DeclarationTable;

pub(crate) use declaration_indexer::DeclarationIndexer;
