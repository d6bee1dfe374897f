//! エディター機能の実装
//!
//! LSP サーバーから呼ばれる。位置は行を 1 から、列を 0 から数える。

use crate::{
    diagnostics::Diagnostic,
    driver::{analyze, Analysis, Driver, DriverConfig},
    index::IndexConfig,
    source::{Pos, Pos16, Range},
    token::TokenKind,
};
use log::trace;
use std::{collections::HashMap, rc::Rc};

/// テキストドキュメントの ID
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doc(usize);

impl Doc {
    pub fn new(id: usize) -> Self {
        Doc(id)
    }

    pub fn id(self) -> usize {
        self.0
    }
}

struct DocData {
    version: i64,
    text: Rc<String>,
    analysis_opt: Option<Analysis>,
}

impl DocData {
    fn request_analysis(&mut self) -> &Analysis {
        let text = &self.text;
        self.analysis_opt
            .get_or_insert_with(|| analyze(text, IndexConfig::default()))
    }
}

pub struct LangService {
    driver: Driver,
    docs: HashMap<Doc, DocData>,
}

impl LangService {
    pub fn new(config: DriverConfig) -> Self {
        LangService {
            driver: Driver::new(config),
            docs: HashMap::new(),
        }
    }

    pub fn open_doc(&mut self, doc: Doc, version: i64, text: Rc<String>) {
        self.docs.insert(
            doc,
            DocData {
                version,
                text,
                analysis_opt: None,
            },
        );
    }

    pub fn change_doc(&mut self, doc: Doc, version: i64, text: Rc<String>) {
        self.open_doc(doc, version, text);
    }

    pub fn close_doc(&mut self, doc: Doc) {
        self.docs.remove(&doc);
    }

    /// ドキュメントの構文エラーを返す。(閉じられたドキュメントならバージョンは None)
    pub fn validate(&mut self, doc: Doc) -> (Option<i64>, Vec<Diagnostic>) {
        self.docs
            .get_mut(&doc)
            .map(|doc_data| {
                let version = doc_data.version;
                let diagnostics = doc_data.request_analysis().diagnostics.clone();
                (Some(version), diagnostics)
            })
            .unwrap_or((None, vec![]))
    }

    /// UTF-16 ベースの位置をドキュメント上の位置に直す。
    pub fn pos_from_pos16(&self, doc: Doc, pos16: Pos16) -> Option<Pos> {
        let doc_data = self.docs.get(&doc)?;
        Some(pos16.to_pos(&doc_data.text))
    }

    pub fn pos_to_pos16(&self, doc: Doc, pos: Pos) -> Option<Pos16> {
        let doc_data = self.docs.get(&doc)?;
        Some(Pos16::from_pos(&doc_data.text, pos))
    }

    /// 位置にある識別子が指す宣言の位置を返す。
    pub fn definitions(&mut self, doc: Doc, pos: Pos) -> Option<Vec<Range>> {
        let driver = &self.driver;
        let analysis = self.docs.get_mut(&doc)?.request_analysis();

        let name = hit_test(analysis, pos)?;
        let descriptor = driver.find(&analysis.table, &name, Some(pos))?;
        trace!("definition of {} at {}: {}", name, pos, descriptor);

        let start = descriptor.position;
        Some(vec![Range::new(start, start + Pos::from(name.as_str()))])
    }

    /// 位置にある識別子が指す宣言のテキストを返す。
    pub fn hover(&mut self, doc: Doc, pos: Pos) -> Option<String> {
        let driver = &self.driver;
        let analysis = self.docs.get_mut(&doc)?.request_analysis();

        let name = hit_test(analysis, pos)?;
        let descriptor = driver.find(&analysis.table, &name, Some(pos))?;

        Some(format!("```pvs\n{}\n```", descriptor.source_text))
    }
}

/// 位置に触れている識別子の名前を探す。
fn hit_test(analysis: &Analysis, pos: Pos) -> Option<String> {
    analysis
        .tree
        .tokens
        .iter()
        .find(|token| token.kind() == TokenKind::Ident && token.range().contains_loosely(pos))
        .map(|token| token.text().to_string())
}
