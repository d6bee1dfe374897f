use crate::utils::Uri;
use pvs_parser::rust_api::Doc;
use std::collections::HashMap;
use url::Url;

/// 開かれているドキュメントと URL の対応
#[derive(Default)]
pub(crate) struct Docs {
    last_id: usize,
    doc_to_uri_map: HashMap<Doc, Uri>,
    uri_to_doc_map: HashMap<Uri, Doc>,
}

impl Docs {
    pub(crate) fn new() -> Self {
        Docs::default()
    }

    pub(crate) fn doc_to_url(&self, doc: Doc) -> Option<Url> {
        self.doc_to_uri_map.get(&doc).map(|uri| uri.clone().into_url())
    }

    pub(crate) fn url_to_doc(&self, url: &Url) -> Option<Doc> {
        let uri = Uri::from_url(url);
        self.uri_to_doc_map.get(&uri).copied()
    }

    /// ドキュメントを登録する。すでに開かれていれば同じ ID を返す。
    pub(crate) fn doc_did_open(&mut self, url: &Url) -> Doc {
        let uri = Uri::from_url(url);

        if let Some(&doc) = self.uri_to_doc_map.get(&uri) {
            return doc;
        }

        let doc = {
            self.last_id += 1;
            Doc::new(self.last_id)
        };
        self.doc_to_uri_map.insert(doc, uri.clone());
        self.uri_to_doc_map.insert(uri, doc);
        doc
    }

    pub(crate) fn doc_did_close(&mut self, url: &Url) -> Option<Doc> {
        let uri = Uri::from_url(url);

        let doc = self.uri_to_doc_map.remove(&uri)?;
        self.doc_to_uri_map.remove(&doc);
        Some(doc)
    }
}
