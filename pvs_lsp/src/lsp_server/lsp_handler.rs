use super::{
    lsp_receiver::LspReceiver, lsp_sender::LspSender, LspMessageOpaque, LspNotification,
    LspRequest, METHOD_NOT_FOUND,
};
use crate::docs::Docs;
use log::{error, trace};
use lsp_types::{
    DidChangeTextDocumentParams, DidCloseTextDocumentParams, DidOpenTextDocumentParams,
    DiagnosticSeverity, GotoDefinitionResponse, Hover, HoverContents, InitializeParams,
    InitializeResult, Location, MarkupContent, MarkupKind, Position, ServerCapabilities,
    ServerInfo, TextDocumentPositionParams, TextDocumentSyncCapability, TextDocumentSyncKind,
    TextDocumentSyncOptions,
};
use pvs_parser::rust_api::{Diagnostic, Doc, LangService, Pos, Pos16, Range};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    io::{Read, Write},
    process,
    rc::Rc,
};
use url::Url;

/// publishDiagnostics の引数
#[derive(Serialize)]
struct PublishDiagnosticsParams {
    uri: Url,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<i64>,
    diagnostics: Vec<lsp_types::Diagnostic>,
}

// LSP の位置は行を 0 から、列を UTF-16 のコードユニットで数える。
fn pos_from_lsp(service: &LangService, doc: Doc, position: Position) -> Option<Pos> {
    let pos16 = Pos16::new(position.line as usize, position.character as usize);
    service.pos_from_pos16(doc, pos16)
}

fn pos_to_lsp(service: &LangService, doc: Doc, pos: Pos) -> Position {
    let pos16 = service
        .pos_to_pos16(doc, pos)
        .unwrap_or_else(|| Pos16::new(pos.line.saturating_sub(1), pos.character));
    Position::new(pos16.row as _, pos16.column16 as _)
}

fn range_to_lsp(service: &LangService, doc: Doc, range: Range) -> lsp_types::Range {
    lsp_types::Range::new(
        pos_to_lsp(service, doc, range.start),
        pos_to_lsp(service, doc, range.end),
    )
}

fn diagnostic_to_lsp(
    service: &LangService,
    doc: Doc,
    diagnostic: Diagnostic,
) -> lsp_types::Diagnostic {
    let range = range_to_lsp(service, doc, diagnostic.range);
    let mut d = lsp_types::Diagnostic::new_simple(range, diagnostic.message);
    d.severity = Some(DiagnosticSeverity::Error);
    d.source = Some("pvs".to_string());
    d
}

fn parse_json<T: DeserializeOwned>(json: &str) -> Option<T> {
    match serde_json::from_str(json) {
        Ok(value) => Some(value),
        Err(err) => {
            error!("メッセージを解釈できません {:?} {}", err, json);
            None
        }
    }
}

pub(crate) struct LspHandler<W: Write> {
    sender: LspSender<W>,
    service: LangService,
    docs: Docs,
}

impl<W: Write> LspHandler<W> {
    pub(crate) fn new(sender: LspSender<W>, service: LangService) -> Self {
        Self {
            sender,
            service,
            docs: Docs::new(),
        }
    }

    fn initialize(&mut self, _params: InitializeParams) -> InitializeResult {
        InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(
                    TextDocumentSyncOptions {
                        open_close: Some(true),
                        change: Some(TextDocumentSyncKind::Full),
                        ..TextDocumentSyncOptions::default()
                    },
                )),
                definition_provider: Some(true.into()),
                hover_provider: Some(true.into()),
                ..ServerCapabilities::default()
            },
            server_info: Some(ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        }
    }

    fn did_exit(&mut self) {
        process::exit(0)
    }

    fn send_publish_diagnostics(&mut self, uri: Url, doc_opt: Option<Doc>) {
        let (version, diagnostics) = match doc_opt {
            Some(doc) => {
                let (version, diagnostics) = self.service.validate(doc);
                let service = &self.service;
                let diagnostics = diagnostics
                    .into_iter()
                    .map(|d| diagnostic_to_lsp(service, doc, d))
                    .collect();
                (version, diagnostics)
            }
            None => (None, vec![]),
        };

        self.sender.send_notification(
            "textDocument/publishDiagnostics",
            PublishDiagnosticsParams {
                uri,
                version,
                diagnostics,
            },
        );
    }

    fn text_document_did_open(&mut self, params: DidOpenTextDocumentParams) {
        let doc_item = params.text_document;
        let doc = self.docs.doc_did_open(&doc_item.uri);
        self.service
            .open_doc(doc, doc_item.version as i64, Rc::new(doc_item.text));

        self.send_publish_diagnostics(doc_item.uri, Some(doc));
    }

    fn text_document_did_change(&mut self, params: DidChangeTextDocumentParams) {
        let text = match params.content_changes.into_iter().last() {
            Some(change) => change.text,
            None => return,
        };

        let doc_id = params.text_document;
        let version = doc_id.version.unwrap_or(0) as i64;
        let doc = self.docs.doc_did_open(&doc_id.uri);
        self.service.change_doc(doc, version, Rc::new(text));

        self.send_publish_diagnostics(doc_id.uri, Some(doc));
    }

    fn text_document_did_close(&mut self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        if let Some(doc) = self.docs.doc_did_close(&uri) {
            self.service.close_doc(doc);
        }

        // 閉じたドキュメントのエラー表示を消す。
        self.send_publish_diagnostics(uri, None);
    }

    fn text_document_definition(
        &mut self,
        params: TextDocumentPositionParams,
    ) -> Option<GotoDefinitionResponse> {
        let uri = params.text_document.uri;
        let doc = self.docs.url_to_doc(&uri)?;
        let url = self.docs.doc_to_url(doc)?;

        let pos = pos_from_lsp(&self.service, doc, params.position)?;
        let ranges = self.service.definitions(doc, pos)?;

        let service = &self.service;
        let locations = ranges
            .into_iter()
            .map(|range| Location::new(url.clone(), range_to_lsp(service, doc, range)))
            .collect();
        Some(GotoDefinitionResponse::Array(locations))
    }

    fn text_document_hover(&mut self, params: TextDocumentPositionParams) -> Option<Hover> {
        let doc = self.docs.url_to_doc(&params.text_document.uri)?;
        let pos = pos_from_lsp(&self.service, doc, params.position)?;
        let value = self.service.hover(doc, pos)?;

        Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value,
            }),
            range: None,
        })
    }

    fn handle_request<P: DeserializeOwned, R: Serialize>(
        &mut self,
        json: &str,
        f: impl FnOnce(&mut Self, P) -> R,
    ) {
        let msg = match parse_json::<LspRequest<P>>(json) {
            Some(msg) => msg,
            None => return,
        };

        let response = f(self, msg.params);
        self.sender.send_response(msg.id, response);
    }

    fn handle_notification<P: DeserializeOwned>(
        &mut self,
        json: &str,
        f: impl FnOnce(&mut Self, P),
    ) {
        if let Some(msg) = parse_json::<LspNotification<P>>(json) {
            f(self, msg.params);
        }
    }

    fn did_receive(&mut self, json: &str) {
        let msg = match parse_json::<LspMessageOpaque>(json) {
            Some(msg) => msg,
            None => return,
        };

        match msg.method.as_str() {
            "initialize" => self.handle_request(json, Self::initialize),
            "initialized" => trace!("initialized"),
            "shutdown" => {
                if let Some(id) = msg.id {
                    self.sender.send_response(id, ());
                }
            }
            "exit" => self.did_exit(),
            "textDocument/didOpen" => self.handle_notification(json, Self::text_document_did_open),
            "textDocument/didChange" => {
                self.handle_notification(json, Self::text_document_did_change)
            }
            "textDocument/didClose" => {
                self.handle_notification(json, Self::text_document_did_close)
            }
            "textDocument/definition" => {
                self.handle_request(json, Self::text_document_definition)
            }
            "textDocument/hover" => self.handle_request(json, Self::text_document_hover),
            method => match msg.id {
                Some(id) => {
                    trace!("Unknown request method='{}'", method);
                    self.sender
                        .send_error(id, METHOD_NOT_FOUND, format!("unknown method '{}'", method));
                }
                None => trace!("Unresolved method='{}'", method),
            },
        }
    }

    /// 入力が終わるまでメッセージを処理する。
    pub(crate) fn main(mut self, mut receiver: LspReceiver<impl Read>) {
        while receiver.read_next(|json| self.did_receive(json)) {}
    }

    #[cfg(test)]
    pub(crate) fn into_sender(self) -> LspSender<W> {
        self.sender
    }
}
