//! 構文解析から索引づけまでの一連の処理

use crate::{
    diagnostics::{Diagnostic, DiagnosticCollector},
    index::{DeclDescriptor, DeclarationIndexer, DeclarationTable, IndexConfig},
    parse::{tree_walker, PTree, Parser},
    source::Pos,
};
use log::{debug, trace};
use std::{fs, io, path::Path};

/// 名前から宣言を引く方法
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LookupMode {
    /// 分類の優先順位だけで引く。有効範囲は無視する。
    ByCategory,

    /// 位置が与えられたら、その位置で有効な最も内側の宣言を引く。
    Scoped,
}

impl Default for LookupMode {
    fn default() -> Self {
        LookupMode::ByCategory
    }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct DriverConfig {
    /// 理論の終わりごとに宣言の表を書き出す
    pub dump: bool,

    pub lookup: LookupMode,
}

/// 索引づけの結果
///
/// 構文エラーがあれば表は空になる。
#[derive(Debug)]
pub struct IndexResult {
    pub diagnostics: Vec<Diagnostic>,
    pub table: DeclarationTable,
    pub dumps: Vec<String>,
}

impl IndexResult {
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// 1つのソースコードを解析した結果
pub(crate) struct Analysis {
    pub(crate) tree: PTree,
    pub(crate) diagnostics: Vec<Diagnostic>,
    pub(crate) table: DeclarationTable,
    pub(crate) dumps: Vec<String>,
}

/// コンソールへの出力を外し、診断情報を集めるリスナーをつけて構文解析する。
fn parse_with_collector(text: &str) -> (PTree, Vec<Diagnostic>) {
    let collector = DiagnosticCollector::new();

    let mut parser = Parser::new();
    parser.remove_error_listeners();
    parser.add_error_listener(collector.listener());
    let tree = parser.parse(text);
    drop(parser);

    (tree, collector.finish())
}

/// 構文解析して、構文エラーがなければ宣言を索引づける。
pub(crate) fn analyze(text: &str, config: IndexConfig) -> Analysis {
    let (tree, diagnostics) = parse_with_collector(text);

    if !diagnostics.is_empty() {
        debug!("{} syntax errors; skip indexing", diagnostics.len());
        return Analysis {
            tree,
            diagnostics,
            table: DeclarationTable::new(),
            dumps: vec![],
        };
    }

    trace!("tree:\n{:?}", tree);

    let mut indexer = DeclarationIndexer::new(config);
    tree_walker::walk(&mut indexer, &tree);
    let (table, dumps) = indexer.finish();

    Analysis {
        tree,
        diagnostics,
        table,
        dumps,
    }
}

/// ファイル単位の処理の入り口
///
/// 呼び出しごとに新しいコレクターと索引を作るので、複数のスレッドからそれぞれのドライバーを使ってよい。
#[derive(Clone, Debug, Default)]
pub struct Driver {
    config: DriverConfig,
}

impl Driver {
    pub fn new(config: DriverConfig) -> Self {
        Driver { config }
    }

    pub fn config(&self) -> DriverConfig {
        self.config
    }

    fn index_config(&self) -> IndexConfig {
        IndexConfig {
            dump: self.config.dump,
        }
    }

    /// ファイルを構文解析して、構文エラーを返す。
    pub fn parse(&self, path: &Path) -> io::Result<Vec<Diagnostic>> {
        debug!("parse {}", path.display());

        let text = fs::read_to_string(path)?;
        Ok(self.parse_text(&text))
    }

    pub fn parse_text(&self, text: &str) -> Vec<Diagnostic> {
        let (_, diagnostics) = parse_with_collector(text);
        diagnostics
    }

    /// ファイルを構文解析して、構文エラーがなければ宣言の表を作る。
    pub fn index(&self, path: &Path) -> io::Result<IndexResult> {
        debug!("index {}", path.display());

        let text = fs::read_to_string(path)?;
        Ok(self.index_text(&text))
    }

    pub fn index_text(&self, text: &str) -> IndexResult {
        let analysis = analyze(text, self.index_config());

        IndexResult {
            diagnostics: analysis.diagnostics,
            table: analysis.table,
            dumps: analysis.dumps,
        }
    }

    /// 設定された方法で名前から宣言を引く。
    ///
    /// 位置が与えられないときは、常に分類の優先順位だけで引く。
    pub fn find<'a>(
        &self,
        table: &'a DeclarationTable,
        name: &str,
        pos_opt: Option<Pos>,
    ) -> Option<&'a DeclDescriptor> {
        match (self.config.lookup, pos_opt) {
            (LookupMode::Scoped, Some(pos)) => table.find_at(name, pos),
            _ => table.find(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let driver = Driver::default();
        let path = Path::new("/no/such/dir/missing.pvs");

        assert!(driver.parse(path).is_err());
        assert!(driver.index(path).is_err());
    }

    #[test]
    fn test_find_falls_back_without_position() {
        let driver = Driver::new(DriverConfig {
            lookup: LookupMode::Scoped,
            ..DriverConfig::default()
        });
        let result = driver.index_text("t: THEORY BEGIN T: TYPE END t");

        assert!(driver.find(&result.table, "T", None).is_some());
        assert!(driver
            .find(&result.table, "T", Some(Pos::new(1, 17)))
            .is_some());
        assert_eq!(driver.find(&result.table, "T", Some(Pos::new(9, 0))), None);
    }
}
